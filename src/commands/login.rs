use anyhow::Result;
use clap::Args;
use dialoguer::{Input, Password};

#[derive(Args)]
pub struct LoginCommand {
    /// Email address (prompted when omitted)
    #[arg(long)]
    email: Option<String>,
}

impl LoginCommand {
    pub async fn execute(self) -> Result<()> {
        println!("FitDesk - Login");
        println!();

        let email: String = match self.email {
            Some(email) => email,
            None => Input::new().with_prompt("Email").interact_text()?,
        };

        let password = Password::new().with_prompt("Password").interact()?;

        println!();
        println!("Logging in as {}...", email);

        let client = super::api_client()?;

        match client.login(&email, &password).await {
            Ok(response) => {
                // Token and user are persisted by the auth service
                println!("✓ Login successful!");
                println!();
                println!("Welcome, {}!", response.user.name);
                println!("Account type: {}", response.user.user_type);

                Ok(())
            }
            Err(e) => {
                println!("✗ Login failed: {}", e);
                Err(e)
            }
        }
    }
}

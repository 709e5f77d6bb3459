use anyhow::Result;
use clap::Args;
use dialoguer::{Input, Password};

#[derive(Args)]
pub struct SignupCommand {}

impl SignupCommand {
    pub async fn execute(self) -> Result<()> {
        println!("FitDesk - Create Account");
        println!();

        let name: String = Input::new().with_prompt("Name").interact_text()?;
        let email: String = Input::new().with_prompt("Email").interact_text()?;
        let password = Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?;

        println!();

        let client = super::api_client()?;

        match client.signup(&name, &email, &password).await {
            Ok(response) => {
                println!("✓ Account created!");
                println!();
                println!("You are now logged in as {}.", response.user.email);

                Ok(())
            }
            Err(e) => {
                println!("✗ Signup failed: {}", e);
                Err(e)
            }
        }
    }
}

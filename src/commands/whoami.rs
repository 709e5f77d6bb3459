use anyhow::Result;
use clap::Args;

use crate::session::Session;

#[derive(Args)]
pub struct WhoamiCommand {}

impl WhoamiCommand {
    pub async fn execute(self) -> Result<()> {
        let session = Session::load()?;

        if !session.is_authenticated() {
            println!("You are not logged in.");
            println!();
            println!("Use 'fitdesk login' to authenticate.");
            return Ok(());
        }

        println!("Fetching user information...");
        println!();

        let client = super::api_client()?;

        match client.me().await {
            Ok(user) => {
                println!("✓ Authenticated as:");
                println!();
                println!("  Name:    {}", user.name);
                println!("  Email:   {}", user.email);
                println!("  Type:    {}", user.user_type);
                if let Some(subscription) = &user.subscription_status {
                    println!("  Plan:    {}", subscription);
                }
                println!("  User ID: {}", user.id);

                Ok(())
            }
            Err(e) => {
                println!("✗ Failed to fetch user information: {}", e);
                println!();
                println!("Your authentication token may have expired.");
                println!("Use 'fitdesk login' to authenticate again.");
                Err(e)
            }
        }
    }
}

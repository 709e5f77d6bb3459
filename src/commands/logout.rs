use anyhow::Result;
use clap::Args;

use crate::session::Session;

#[derive(Args)]
pub struct LogoutCommand {}

impl LogoutCommand {
    pub async fn execute(self) -> Result<()> {
        let mut session = Session::load()?;

        if !session.is_authenticated() {
            println!("You are not logged in.");
            return Ok(());
        }

        session.clear();
        session.save()?;

        println!("✓ Logged out successfully!");

        Ok(())
    }
}

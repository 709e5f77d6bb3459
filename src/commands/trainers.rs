use anyhow::Result;
use colored::Colorize;
use uuid::Uuid;

use crate::models::TrainerStatus;

pub async fn list() -> Result<()> {
    let api = super::api_client()?;
    let trainers = api.list_trainers().await?;

    if trainers.is_empty() {
        println!("No trainer accounts found.");
        return Ok(());
    }

    println!("{:<38} {:<24} {:<10} {:<8} {}", "ID", "NAME", "STATUS", "CLIENTS", "PLAN");
    for trainer in &trainers {
        let status = match trainer.status {
            TrainerStatus::Active => trainer.status.to_string().green(),
            TrainerStatus::Suspended => trainer.status.to_string().red(),
        };

        println!(
            "{:<38} {:<24} {:<10} {:<8} {}",
            trainer.id,
            trainer.name,
            status,
            trainer
                .client_count
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
            trainer.subscription_status.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

pub async fn activate(id: Uuid) -> Result<()> {
    let api = super::api_client()?;
    let trainer = api.set_trainer_status(id, TrainerStatus::Active).await?;

    println!("✓ Trainer activated: {}", trainer.name);

    Ok(())
}

pub async fn suspend(id: Uuid) -> Result<()> {
    let api = super::api_client()?;
    let trainer = api.set_trainer_status(id, TrainerStatus::Suspended).await?;

    println!("✓ Trainer suspended: {}", trainer.name);

    Ok(())
}

pub async fn delete(id: Uuid, force: bool) -> Result<()> {
    if !super::confirm("Delete this trainer account?", force)? {
        println!("Aborted.");
        return Ok(());
    }

    let api = super::api_client()?;
    api.delete_trainer(id).await?;

    println!("✓ Trainer deleted.");

    Ok(())
}

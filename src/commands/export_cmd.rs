use anyhow::{Context, Result};
use std::fs;
use uuid::Uuid;

use crate::export;

fn write_output(csv: String, output: Option<String>, what: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(&path, csv).with_context(|| format!("Failed to write {}", path))?;
            println!("✓ Exported {} to {}", what, path);
        }
        None => print!("{}", csv),
    }

    Ok(())
}

pub async fn goals(client: Uuid, output: Option<String>) -> Result<()> {
    let api = super::api_client()?;
    let goals = api.list_goals(client).await?;

    write_output(export::goals_csv(&goals)?, output, "goals")
}

pub async fn payments(client: Uuid, output: Option<String>) -> Result<()> {
    let api = super::api_client()?;
    let payments = api.list_payments(client).await?;

    write_output(export::payments_csv(&payments)?, output, "payments")
}

pub async fn workouts(client: Uuid, output: Option<String>) -> Result<()> {
    let api = super::api_client()?;
    let plans = api.list_workout_plans(client).await?;

    write_output(export::workouts_csv(&plans)?, output, "workout plans")
}

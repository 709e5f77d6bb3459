use anyhow::Result;
use chrono::Utc;
use uuid::Uuid;

use crate::api::logs::CreateLogRequest;

pub async fn list(client: Uuid) -> Result<()> {
    let api = super::api_client()?;
    let logs = api.list_logs(client).await?;

    if logs.is_empty() {
        println!("No training logs for this client.");
        return Ok(());
    }

    println!("{:<38} {:<12} {:<20} {}", "ID", "DATE", "ACTIVITY", "DURATION");
    for log in &logs {
        println!(
            "{:<38} {:<12} {:<20} {}",
            log.id,
            log.date,
            log.activity,
            log.duration_minutes
                .map(|d| format!("{} min", d))
                .unwrap_or_else(|| "-".to_string())
        );
    }

    Ok(())
}

pub async fn add(
    client: Uuid,
    activity: String,
    date: Option<String>,
    duration: Option<u32>,
    notes: Option<String>,
) -> Result<()> {
    let date = match date {
        Some(d) => super::parse_date(&d)?,
        None => Utc::now().date_naive(),
    };

    let api = super::api_client()?;
    let log = api
        .create_log(
            client,
            &CreateLogRequest {
                date,
                activity,
                duration_minutes: duration,
                notes,
            },
        )
        .await?;

    println!("✓ Session logged: {} on {}", log.activity, log.date);

    Ok(())
}

pub async fn delete(id: Uuid, force: bool) -> Result<()> {
    if !super::confirm("Delete this training log?", force)? {
        println!("Aborted.");
        return Ok(());
    }

    let api = super::api_client()?;
    api.delete_log(id).await?;

    println!("✓ Training log deleted.");

    Ok(())
}

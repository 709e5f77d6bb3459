use anyhow::Result;
use uuid::Uuid;

use crate::api::goals::CreateGoalRequest;

pub async fn list(client: Uuid) -> Result<()> {
    let api = super::api_client()?;
    let goals = api.list_goals(client).await?;

    if goals.is_empty() {
        println!("No goals for this client.");
        return Ok(());
    }

    println!("{:<38} {:<30} {:<10} {}", "ID", "TITLE", "STATUS", "TARGET");
    for goal in &goals {
        println!(
            "{:<38} {:<30} {:<10} {}",
            goal.id,
            goal.title,
            goal.status.to_string(),
            goal.target_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
    }

    Ok(())
}

pub async fn add(
    client: Uuid,
    title: String,
    description: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let target_date = date.as_deref().map(super::parse_date).transpose()?;

    let api = super::api_client()?;
    let goal = api
        .create_goal(
            client,
            &CreateGoalRequest {
                title,
                description,
                target_date,
            },
        )
        .await?;

    println!("✓ Goal created: {} ({})", goal.title, goal.id);

    Ok(())
}

pub async fn complete(id: Uuid) -> Result<()> {
    let api = super::api_client()?;
    let goal = api.complete_goal(id).await?;

    println!("✓ Goal completed: {}", goal.title);

    Ok(())
}

pub async fn delete(id: Uuid, force: bool) -> Result<()> {
    if !super::confirm("Delete this goal?", force)? {
        println!("Aborted.");
        return Ok(());
    }

    let api = super::api_client()?;
    api.delete_goal(id).await?;

    println!("✓ Goal deleted.");

    Ok(())
}

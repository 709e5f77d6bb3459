use anyhow::Result;
use colored::Colorize;
use uuid::Uuid;

use crate::api::clients::ClientPayload;
use crate::api::ClientCache;
use crate::detail::ClientDetail;
use crate::models::ClientStatus;
use crate::ui::DetailView;

pub async fn list(all: bool) -> Result<()> {
    let api = super::api_client()?;
    let mut clients = api.list_clients().await?;

    if !all {
        clients.retain(|c| c.is_active());
    }

    if clients.is_empty() {
        println!("No clients found.");
        return Ok(());
    }

    println!("{:<38} {:<24} {:<10} {}", "ID", "NAME", "STATUS", "EMAIL");
    for client in &clients {
        let status = match client.status {
            ClientStatus::Active => client.status.to_string().green(),
            ClientStatus::Pending => client.status.to_string().yellow(),
            ClientStatus::Inactive => client.status.to_string().dimmed(),
        };

        println!(
            "{:<38} {:<24} {:<10} {}",
            client.id,
            client.name,
            status,
            client.email.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

pub async fn add(
    name: String,
    email: Option<String>,
    phone: Option<String>,
    start: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let membership_start = start.as_deref().map(super::parse_date).transpose()?;

    let api = super::api_client()?;
    let client = api
        .create_client(&ClientPayload {
            name: Some(name),
            email,
            phone,
            membership_start,
            notes,
            ..Default::default()
        })
        .await?;

    println!("✓ Client created: {} ({})", client.name, client.id);

    Ok(())
}

pub async fn show(id: Uuid) -> Result<()> {
    let api = super::api_client()?;
    let mut cache = ClientCache::new();

    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_message("Loading client...");
    let detail = ClientDetail::load(&api, &mut cache, id).await;
    spinner.finish_and_clear();

    let detail = detail?;
    let client = &detail.client;

    println!("{}", client.name.bold());
    println!("  Status:  {}", client.status);
    if let Some(email) = &client.email {
        println!("  Email:   {}", email);
    }
    if let Some(phone) = &client.phone {
        println!("  Phone:   {}", phone);
    }
    if let Some(start) = client.membership_start {
        println!("  Member since: {}", start);
    }
    println!();

    println!(
        "Goals: {} active / {} total",
        detail
            .goals
            .iter()
            .filter(|g| g.status == crate::models::GoalStatus::Active)
            .count(),
        detail.goals.len()
    );
    println!("Workout plans: {}", detail.workouts.len());
    println!("Training logs: {}", detail.logs.len());

    let pending: f64 = detail
        .payments
        .iter()
        .filter(|p| p.is_pending())
        .map(|p| p.amount)
        .sum();
    println!(
        "Payments: {} total, {:.2} pending",
        detail.payments.len(),
        pending
    );
    println!("Measurements: {}", detail.measurements.len());
    println!();
    println!("Use 'fitdesk client view {}' for the interactive view.", id);

    Ok(())
}

pub async fn view(id: Uuid) -> Result<()> {
    let api = super::api_client()?;
    let mut cache = ClientCache::new();

    let detail = ClientDetail::load(&api, &mut cache, id).await?;

    let mut view = DetailView::new(detail)?;
    let result = view.run(&api).await;
    view.cleanup()?;

    result
}

pub async fn edit(
    id: Uuid,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    status: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let status = status.as_deref().map(str::parse::<ClientStatus>).transpose()?;

    if name.is_none() && email.is_none() && phone.is_none() && status.is_none() && notes.is_none() {
        println!("Nothing to update.");
        return Ok(());
    }

    let api = super::api_client()?;
    let client = api
        .update_client(
            id,
            &ClientPayload {
                name,
                email,
                phone,
                status,
                notes,
                ..Default::default()
            },
        )
        .await?;

    println!("✓ Client updated: {}", client.name);

    Ok(())
}

pub async fn delete(id: Uuid, force: bool) -> Result<()> {
    if !super::confirm("Delete this client and all their records?", force)? {
        println!("Aborted.");
        return Ok(());
    }

    let api = super::api_client()?;
    api.delete_client(id).await?;

    println!("✓ Client deleted.");

    Ok(())
}

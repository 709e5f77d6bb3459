use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::api::bookings::CreateBookingRequest;

fn parse_start(s: &str) -> Result<chrono::DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .with_context(|| format!("Invalid start time '{}', expected YYYY-MM-DD HH:MM", s))?;

    let local = Local
        .from_local_datetime(&naive)
        .single()
        .context("Ambiguous local start time")?;

    Ok(local.with_timezone(&Utc))
}

pub async fn list(upcoming: bool) -> Result<()> {
    let api = super::api_client()?;
    let mut bookings = api.list_bookings().await?;

    if upcoming {
        let now = Utc::now();
        bookings.retain(|b| b.is_upcoming(now));
    }

    if bookings.is_empty() {
        println!("No bookings found.");
        return Ok(());
    }

    bookings.sort_by_key(|b| b.starts_at);

    println!("{:<38} {:<17} {:<10} {}", "ID", "START", "STATUS", "CLIENT");
    for booking in &bookings {
        println!(
            "{:<38} {:<17} {:<10} {}",
            booking.id,
            booking
                .starts_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M"),
            booking.status.to_string(),
            booking.client_id
        );
    }

    Ok(())
}

pub async fn add(client: Uuid, start: String, duration: u32, notes: Option<String>) -> Result<()> {
    let starts_at = parse_start(&start)?;
    let ends_at = starts_at + Duration::minutes(i64::from(duration));

    let api = super::api_client()?;
    let booking = api
        .create_booking(&CreateBookingRequest {
            client_id: client,
            starts_at,
            ends_at,
            notes,
        })
        .await?;

    println!(
        "✓ Session booked for {} ({})",
        booking.starts_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
        booking.id
    );

    Ok(())
}

pub async fn cancel(id: Uuid) -> Result<()> {
    let api = super::api_client()?;
    let booking = api.cancel_booking(id).await?;

    println!(
        "✓ Booking cancelled ({})",
        booking.starts_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
    );

    Ok(())
}

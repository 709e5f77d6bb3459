use anyhow::Result;
use uuid::Uuid;

use crate::api::progress::measurement_requests;

pub async fn list(client: Uuid) -> Result<()> {
    let api = super::api_client()?;
    let measurements = api.list_measurements(client).await?;

    if measurements.is_empty() {
        println!("No measurements for this client.");
        return Ok(());
    }

    println!("{:<38} {:<12} {:>8} {:<6} {}", "ID", "TYPE", "VALUE", "UNIT", "RECORDED");
    for m in &measurements {
        println!(
            "{:<38} {:<12} {:>8.1} {:<6} {}",
            m.id,
            m.measurement_type.to_string(),
            m.value,
            m.unit,
            m.recorded_at.format("%Y-%m-%d")
        );
    }

    Ok(())
}

pub async fn add(
    client: Uuid,
    weight: Option<f64>,
    body_fat: Option<f64>,
    muscle_mass: Option<f64>,
) -> Result<()> {
    let requests = measurement_requests(weight, body_fat, muscle_mass);

    if requests.is_empty() {
        return Err(anyhow::anyhow!(
            "Nothing to record: pass at least one of --weight, --body-fat, --muscle-mass"
        ));
    }

    let api = super::api_client()?;

    for request in &requests {
        let measurement = api.create_measurement(client, request).await?;
        println!(
            "✓ Recorded {}: {:.1} {}",
            measurement.measurement_type, measurement.value, measurement.unit
        );
    }

    Ok(())
}

pub async fn delete(id: Uuid, force: bool) -> Result<()> {
    if !super::confirm("Delete this measurement?", force)? {
        println!("Aborted.");
        return Ok(());
    }

    let api = super::api_client()?;
    api.delete_measurement(id).await?;

    println!("✓ Measurement deleted.");

    Ok(())
}

use anyhow::Result;
use colored::Colorize;
use uuid::Uuid;

use crate::api::payments::CreatePaymentRequest;
use crate::models::{Payment, PaymentStatus};

fn print_table(payments: &[Payment]) {
    println!("{:<38} {:>10} {:<10} {:<12} {}", "ID", "AMOUNT", "STATUS", "DUE", "METHOD");
    for payment in payments {
        let status = match payment.status {
            PaymentStatus::Completed => payment.status.to_string().green(),
            PaymentStatus::Pending => payment.status.to_string().yellow(),
            PaymentStatus::Overdue => payment.status.to_string().red(),
        };

        println!(
            "{:<38} {:>10.2} {:<10} {:<12} {}",
            payment.id,
            payment.amount,
            status,
            payment
                .due_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            payment.method.as_deref().unwrap_or("-")
        );
    }
}

pub async fn list(client: Option<Uuid>) -> Result<()> {
    let api = super::api_client()?;

    let payments = match client {
        Some(id) => api.list_payments(id).await?,
        None => api.list_all_payments().await?,
    };

    if payments.is_empty() {
        println!("No payments found.");
        return Ok(());
    }

    print_table(&payments);

    let pending: f64 = payments
        .iter()
        .filter(|p| p.is_pending())
        .map(|p| p.amount)
        .sum();
    println!();
    println!("Pending total: {:.2}", pending);

    Ok(())
}

pub async fn add(
    client: Uuid,
    amount: f64,
    due: Option<String>,
    method: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let due_date = due.as_deref().map(super::parse_date).transpose()?;

    let api = super::api_client()?;
    let payment = api
        .create_payment(
            client,
            &CreatePaymentRequest {
                amount,
                due_date,
                method,
                notes,
            },
        )
        .await?;

    println!("✓ Payment recorded: {:.2} ({})", payment.amount, payment.id);

    Ok(())
}

pub async fn mark_paid(id: Uuid) -> Result<()> {
    let api = super::api_client()?;
    let payment = api.mark_payment_paid(id).await?;

    println!("✓ Payment marked as paid: {:.2}", payment.amount);

    Ok(())
}

pub async fn delete(id: Uuid, force: bool) -> Result<()> {
    if !super::confirm("Delete this payment?", force)? {
        println!("Aborted.");
        return Ok(());
    }

    let api = super::api_client()?;
    api.delete_payment(id).await?;

    println!("✓ Payment deleted.");

    Ok(())
}

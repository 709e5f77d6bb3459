use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;

use crate::models::{Booking, Client, Payment};

/// Locally computed dashboard figures.
///
/// Derived from the fetched slices rather than a server endpoint, so the
/// numbers always match what the other commands would list.
#[derive(Debug, PartialEq)]
pub struct DashboardStats {
    pub total_clients: usize,
    pub active_clients: usize,
    pub pending_payments: usize,
    pub pending_amount: f64,
    pub upcoming_bookings: usize,
}

impl DashboardStats {
    pub fn compute(
        clients: &[Client],
        payments: &[Payment],
        bookings: &[Booking],
        now: DateTime<Utc>,
    ) -> Self {
        let pending: Vec<&Payment> = payments.iter().filter(|p| p.is_pending()).collect();

        Self {
            total_clients: clients.len(),
            active_clients: clients.iter().filter(|c| c.is_active()).count(),
            pending_payments: pending.len(),
            pending_amount: pending.iter().map(|p| p.amount).sum(),
            upcoming_bookings: bookings.iter().filter(|b| b.is_upcoming(now)).count(),
        }
    }
}

fn or_empty<T>(result: Result<Vec<T>>, what: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Failed to fetch {}: {}", what, e);
            Vec::new()
        }
    }
}

#[derive(Args)]
pub struct DashboardCommand {}

impl DashboardCommand {
    pub async fn execute(self) -> Result<()> {
        let api = super::api_client()?;

        let spinner = indicatif::ProgressBar::new_spinner();
        spinner.set_message("Loading dashboard...");

        // Independent fetches; a failing slice shows up as zero rather
        // than taking down the whole dashboard.
        let (clients, payments, bookings) = tokio::join!(
            api.list_clients(),
            api.list_all_payments(),
            api.list_bookings(),
        );
        spinner.finish_and_clear();

        let clients = or_empty(clients, "clients");
        let payments = or_empty(payments, "payments");
        let bookings = or_empty(bookings, "bookings");

        let stats = DashboardStats::compute(&clients, &payments, &bookings, Utc::now());

        println!("{}", "FitDesk Dashboard".bold());
        println!();
        println!(
            "  Clients:          {} active / {} total",
            stats.active_clients, stats.total_clients
        );
        println!(
            "  Pending payments: {} ({:.2})",
            stats.pending_payments, stats.pending_amount
        );
        println!("  Upcoming sessions: {}", stats.upcoming_bookings);

        Ok(())
    }
}

use anyhow::Result;
use clap::Args;
use colored::Colorize;

#[derive(Args)]
pub struct StatsCommand {
    /// Show the per-month revenue breakdown
    #[arg(long)]
    monthly: bool,
}

impl StatsCommand {
    pub async fn execute(self) -> Result<()> {
        let api = super::api_client()?;
        let summary = api.analytics_summary().await?;

        println!("{}", "Revenue Analytics".bold());
        println!();
        println!("  Total revenue:       {:.2}", summary.total_revenue);
        println!("  Pending amount:      {:.2}", summary.pending_amount);
        println!("  Active clients:      {}", summary.active_clients);
        println!("  Sessions this month: {}", summary.sessions_this_month);

        if self.monthly && !summary.monthly_revenue.is_empty() {
            println!();
            println!("  Monthly revenue:");
            for month in &summary.monthly_revenue {
                println!("    {:<8} {:>10.2}", month.month, month.amount);
            }
        }

        Ok(())
    }
}

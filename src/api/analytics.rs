use anyhow::Result;
use serde::Deserialize;

use super::ApiClient;

/// Server-computed business summary for the analytics page
#[derive(Debug, Deserialize)]
pub struct AnalyticsSummary {
    pub total_revenue: f64,
    pub pending_amount: f64,
    pub active_clients: u32,
    pub sessions_this_month: u32,
    #[serde(default)]
    pub monthly_revenue: Vec<MonthlyRevenue>,
}

#[derive(Debug, Deserialize)]
pub struct MonthlyRevenue {
    pub month: String,
    pub amount: f64,
}

impl ApiClient {
    pub async fn analytics_summary(&self) -> Result<AnalyticsSummary> {
        self.require_auth()?;
        self.get_json("/api/v1/analytics/summary").await
    }
}

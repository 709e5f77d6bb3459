use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged training session for a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingLog {
    pub id: Uuid,
    pub client_id: Uuid,
    pub date: NaiveDate,
    pub activity: String,
    pub duration_minutes: Option<u32>,
    pub notes: Option<String>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A trainer account, as seen from the platform-admin view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trainer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: TrainerStatus,
    pub subscription_status: Option<String>,
    pub client_count: Option<u32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrainerStatus {
    Active,
    Suspended,
}

impl std::fmt::Display for TrainerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainerStatus::Active => write!(f, "Active"),
            TrainerStatus::Suspended => write!(f, "Suspended"),
        }
    }
}

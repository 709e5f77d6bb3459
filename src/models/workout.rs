use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named collection of prescribed exercises for a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: Uuid,
    pub client_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    pub created_at: DateTime<Utc>,
}

/// One prescribed exercise inside a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight_kg: Option<f64>,
    pub rest_seconds: Option<u32>,
    pub notes: Option<String>,
}

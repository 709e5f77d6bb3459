use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account identity as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    pub subscription_status: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Trainer,
    Admin,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::Trainer => write!(f, "Trainer"),
            UserType::Admin => write!(f, "Admin"),
        }
    }
}

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::ApiClient;
use crate::models::TrainingLog;

#[derive(Debug, Serialize)]
pub struct CreateLogRequest {
    pub date: NaiveDate,
    pub activity: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ApiClient {
    pub async fn list_logs(&self, client_id: Uuid) -> Result<Vec<TrainingLog>> {
        self.require_auth()?;
        self.get_json(&format!("/api/v1/clients/{}/logs", client_id)).await
    }

    pub async fn create_log(
        &self,
        client_id: Uuid,
        request: &CreateLogRequest,
    ) -> Result<TrainingLog> {
        self.require_auth()?;
        self.post_json(&format!("/api/v1/clients/{}/logs", client_id), request)
            .await
    }

    pub async fn delete_log(&self, log_id: Uuid) -> Result<()> {
        self.require_auth()?;
        self.delete(&format!("/api/v1/logs/{}", log_id)).await
    }
}

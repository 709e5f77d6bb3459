use anyhow::Result;
use serde::Serialize;
use uuid::Uuid;

use super::ApiClient;
use crate::models::{Trainer, TrainerStatus};

#[derive(Debug, Serialize)]
struct UpdateTrainerRequest {
    status: TrainerStatus,
}

impl ApiClient {
    /// List trainer accounts (admin only; the server enforces this)
    pub async fn list_trainers(&self) -> Result<Vec<Trainer>> {
        self.require_auth()?;
        self.get_json("/api/v1/trainers").await
    }

    pub async fn set_trainer_status(
        &self,
        trainer_id: Uuid,
        status: TrainerStatus,
    ) -> Result<Trainer> {
        self.require_auth()?;
        self.put_json(
            &format!("/api/v1/trainers/{}", trainer_id),
            &UpdateTrainerRequest { status },
        )
        .await
    }

    pub async fn delete_trainer(&self, trainer_id: Uuid) -> Result<()> {
        self.require_auth()?;
        self.delete(&format!("/api/v1/trainers/{}", trainer_id)).await
    }
}

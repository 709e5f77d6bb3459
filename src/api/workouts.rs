use anyhow::Result;
use serde::Serialize;
use uuid::Uuid;

use super::ApiClient;
use crate::models::{Exercise, WorkoutPlan};

#[derive(Debug, Serialize)]
pub struct CreateWorkoutPlanRequest {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub exercises: Vec<Exercise>,
}

impl ApiClient {
    pub async fn list_workout_plans(&self, client_id: Uuid) -> Result<Vec<WorkoutPlan>> {
        self.require_auth()?;
        self.get_json(&format!("/api/v1/clients/{}/workout-plans", client_id))
            .await
    }

    pub async fn get_workout_plan(&self, plan_id: Uuid) -> Result<WorkoutPlan> {
        self.require_auth()?;
        self.get_json(&format!("/api/v1/workout-plans/{}", plan_id)).await
    }

    pub async fn create_workout_plan(
        &self,
        client_id: Uuid,
        request: &CreateWorkoutPlanRequest,
    ) -> Result<WorkoutPlan> {
        self.require_auth()?;
        self.post_json(&format!("/api/v1/clients/{}/workout-plans", client_id), request)
            .await
    }

    pub async fn delete_workout_plan(&self, plan_id: Uuid) -> Result<()> {
        self.require_auth()?;
        self.delete(&format!("/api/v1/workout-plans/{}", plan_id)).await
    }
}

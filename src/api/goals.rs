use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::ApiClient;
use crate::models::{Goal, GoalStatus};

#[derive(Debug, Serialize)]
pub struct CreateGoalRequest {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Serialize)]
pub struct UpdateGoalRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GoalStatus>,
}

impl ApiClient {
    pub async fn list_goals(&self, client_id: Uuid) -> Result<Vec<Goal>> {
        self.require_auth()?;
        self.get_json(&format!("/api/v1/clients/{}/goals", client_id)).await
    }

    pub async fn create_goal(&self, client_id: Uuid, request: &CreateGoalRequest) -> Result<Goal> {
        self.require_auth()?;
        self.post_json(&format!("/api/v1/clients/{}/goals", client_id), request)
            .await
    }

    pub async fn update_goal(&self, goal_id: Uuid, request: &UpdateGoalRequest) -> Result<Goal> {
        self.require_auth()?;
        self.put_json(&format!("/api/v1/goals/{}", goal_id), request).await
    }

    /// Shorthand for the status-only update the detail view issues
    pub async fn complete_goal(&self, goal_id: Uuid) -> Result<Goal> {
        self.update_goal(
            goal_id,
            &UpdateGoalRequest {
                status: Some(GoalStatus::Completed),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn delete_goal(&self, goal_id: Uuid) -> Result<()> {
        self.require_auth()?;
        self.delete(&format!("/api/v1/goals/{}", goal_id)).await
    }
}

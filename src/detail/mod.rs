// Client-detail aggregation: one critical fetch for the client record,
// then independent fetches for every sub-resource shown in the detail
// view. A failed sub-fetch degrades that slice to an empty list instead
// of failing the whole view.

use anyhow::Result;
use uuid::Uuid;

use crate::api::{ApiClient, ApiError, ClientCache};
use crate::models::{Client, Goal, Measurement, Payment, TrainingLog, WorkoutPlan};

/// Aggregated view state for one client
#[derive(Debug)]
pub struct ClientDetail {
    pub client: Client,
    pub goals: Vec<Goal>,
    pub workouts: Vec<WorkoutPlan>,
    pub logs: Vec<TrainingLog>,
    pub payments: Vec<Payment>,
    pub measurements: Vec<Measurement>,
}

fn or_empty<T>(result: Result<Vec<T>>, what: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Failed to fetch {}: {}", what, e);
            Vec::new()
        }
    }
}

impl ClientDetail {
    /// Load the full detail view for a client.
    ///
    /// The client itself is resolved through the cache (roster hit or
    /// fallback fetch) and a failure there blocks the view. The five
    /// sub-resource fetches run concurrently and are individually
    /// fault-tolerant.
    pub async fn load(api: &ApiClient, cache: &mut ClientCache, id: Uuid) -> Result<Self> {
        // Only a genuine 404 gets the "not found" wording; server and
        // network failures keep their own message.
        let client = cache.resolve(api, id).await.map_err(|e| {
            if matches!(e.downcast_ref::<ApiError>(), Some(ApiError::NotFound(_))) {
                e.context(format!("Client {} not found", id))
            } else {
                e
            }
        })?;

        let (goals, workouts, logs, payments, measurements) = tokio::join!(
            api.list_goals(id),
            api.list_workout_plans(id),
            api.list_logs(id),
            api.list_payments(id),
            api.list_measurements(id),
        );

        Ok(Self {
            client,
            goals: or_empty(goals, "goals"),
            workouts: or_empty(workouts, "workout plans"),
            logs: or_empty(logs, "training logs"),
            payments: or_empty(payments, "payments"),
            measurements: or_empty(measurements, "measurements"),
        })
    }

    // Per-resource refreshes, used after a mutation. Unlike the initial
    // load these propagate errors so the caller can report them.

    pub async fn refresh_goals(&mut self, api: &ApiClient) -> Result<()> {
        self.goals = api.list_goals(self.client.id).await?;
        Ok(())
    }

    pub async fn refresh_workouts(&mut self, api: &ApiClient) -> Result<()> {
        self.workouts = api.list_workout_plans(self.client.id).await?;
        Ok(())
    }

    pub async fn refresh_logs(&mut self, api: &ApiClient) -> Result<()> {
        self.logs = api.list_logs(self.client.id).await?;
        Ok(())
    }

    pub async fn refresh_payments(&mut self, api: &ApiClient) -> Result<()> {
        self.payments = api.list_payments(self.client.id).await?;
        Ok(())
    }

    pub async fn refresh_measurements(&mut self, api: &ApiClient) -> Result<()> {
        self.measurements = api.list_measurements(self.client.id).await?;
        Ok(())
    }
}

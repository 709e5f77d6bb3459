use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::ApiClient;
use crate::models::{Booking, BookingStatus};

#[derive(Debug, Serialize)]
pub struct CreateBookingRequest {
    pub client_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
struct UpdateBookingRequest {
    status: BookingStatus,
}

impl ApiClient {
    /// All bookings for the logged-in trainer
    pub async fn list_bookings(&self) -> Result<Vec<Booking>> {
        self.require_auth()?;
        self.get_json("/api/v1/bookings").await
    }

    pub async fn create_booking(&self, request: &CreateBookingRequest) -> Result<Booking> {
        self.require_auth()?;
        self.post_json("/api/v1/bookings", request).await
    }

    pub async fn cancel_booking(&self, booking_id: Uuid) -> Result<Booking> {
        self.require_auth()?;
        self.put_json(
            &format!("/api/v1/bookings/{}", booking_id),
            &UpdateBookingRequest {
                status: BookingStatus::Cancelled,
            },
        )
        .await
    }
}

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::ApiClient;
use crate::models::{Payment, PaymentStatus};

#[derive(Debug, Serialize)]
pub struct CreatePaymentRequest {
    pub amount: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
struct UpdatePaymentRequest {
    status: PaymentStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    paid_date: Option<NaiveDate>,
}

impl ApiClient {
    /// Payments for one client
    pub async fn list_payments(&self, client_id: Uuid) -> Result<Vec<Payment>> {
        self.require_auth()?;
        self.get_json(&format!("/api/v1/clients/{}/payments", client_id)).await
    }

    /// All payments across the trainer's clients (dashboard view)
    pub async fn list_all_payments(&self) -> Result<Vec<Payment>> {
        self.require_auth()?;
        self.get_json("/api/v1/payments").await
    }

    pub async fn create_payment(
        &self,
        client_id: Uuid,
        request: &CreatePaymentRequest,
    ) -> Result<Payment> {
        self.require_auth()?;
        self.post_json(&format!("/api/v1/clients/{}/payments", client_id), request)
            .await
    }

    /// Mark a payment completed with today's date as the paid date
    pub async fn mark_payment_paid(&self, payment_id: Uuid) -> Result<Payment> {
        self.require_auth()?;
        self.put_json(
            &format!("/api/v1/payments/{}", payment_id),
            &UpdatePaymentRequest {
                status: PaymentStatus::Completed,
                paid_date: Some(Utc::now().date_naive()),
            },
        )
        .await
    }

    pub async fn delete_payment(&self, payment_id: Uuid) -> Result<()> {
        self.require_auth()?;
        self.delete(&format!("/api/v1/payments/{}", payment_id)).await
    }
}

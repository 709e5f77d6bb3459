use anyhow::Result;
use serde::Serialize;
use uuid::Uuid;

use super::ApiClient;
use crate::models::{Measurement, MeasurementType};

#[derive(Debug, Serialize, PartialEq)]
pub struct CreateMeasurementRequest {
    pub measurement_type: MeasurementType,
    pub value: f64,
    pub unit: String,
}

impl CreateMeasurementRequest {
    pub fn new(measurement_type: MeasurementType, value: f64) -> Self {
        Self {
            measurement_type,
            value,
            unit: measurement_type.default_unit().to_string(),
        }
    }
}

/// Turn the optional fields of the "add measurement" form into create
/// requests. Only fields the user actually filled in produce a record.
pub fn measurement_requests(
    weight: Option<f64>,
    body_fat: Option<f64>,
    muscle_mass: Option<f64>,
) -> Vec<CreateMeasurementRequest> {
    let mut requests = Vec::new();

    if let Some(value) = weight {
        requests.push(CreateMeasurementRequest::new(MeasurementType::Weight, value));
    }
    if let Some(value) = body_fat {
        requests.push(CreateMeasurementRequest::new(MeasurementType::BodyFat, value));
    }
    if let Some(value) = muscle_mass {
        requests.push(CreateMeasurementRequest::new(MeasurementType::MuscleMass, value));
    }

    requests
}

impl ApiClient {
    pub async fn list_measurements(&self, client_id: Uuid) -> Result<Vec<Measurement>> {
        self.require_auth()?;
        self.get_json(&format!("/api/v1/clients/{}/measurements", client_id))
            .await
    }

    pub async fn create_measurement(
        &self,
        client_id: Uuid,
        request: &CreateMeasurementRequest,
    ) -> Result<Measurement> {
        self.require_auth()?;
        self.post_json(&format!("/api/v1/clients/{}/measurements", client_id), request)
            .await
    }

    pub async fn delete_measurement(&self, measurement_id: Uuid) -> Result<()> {
        self.require_auth()?;
        self.delete(&format!("/api/v1/measurements/{}", measurement_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_weight_produces_one_request() {
        let requests = measurement_requests(Some(80.5), None, None);

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].measurement_type, MeasurementType::Weight);
        assert_eq!(requests[0].value, 80.5);
        assert_eq!(requests[0].unit, "kg");
    }

    #[test]
    fn test_empty_form_produces_no_requests() {
        let requests = measurement_requests(None, None, None);
        assert!(requests.is_empty());
    }

    #[test]
    fn test_all_fields_produce_one_request_each() {
        let requests = measurement_requests(Some(80.0), Some(18.5), Some(35.0));

        assert_eq!(requests.len(), 3);
        assert_eq!(requests[1].measurement_type, MeasurementType::BodyFat);
        assert_eq!(requests[1].unit, "%");
        assert_eq!(requests[2].measurement_type, MeasurementType::MuscleMass);
    }
}

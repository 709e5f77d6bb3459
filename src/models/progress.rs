use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timestamped body-metric record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub id: Uuid,
    pub client_id: Uuid,
    pub measurement_type: MeasurementType,
    pub value: f64,
    pub unit: String,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementType {
    Weight,
    BodyFat,
    MuscleMass,
}

impl MeasurementType {
    /// Default unit used when a measurement is recorded from a form
    pub fn default_unit(&self) -> &'static str {
        match self {
            MeasurementType::Weight => "kg",
            MeasurementType::BodyFat => "%",
            MeasurementType::MuscleMass => "kg",
        }
    }
}

impl std::fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasurementType::Weight => write!(f, "Weight"),
            MeasurementType::BodyFat => write!(f, "Body Fat"),
            MeasurementType::MuscleMass => write!(f, "Muscle Mass"),
        }
    }
}

impl std::str::FromStr for MeasurementType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weight" => Ok(MeasurementType::Weight),
            "body_fat" | "bodyfat" => Ok(MeasurementType::BodyFat),
            "muscle_mass" | "musclemass" => Ok(MeasurementType::MuscleMass),
            _ => Err(anyhow::anyhow!("Invalid measurement type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&MeasurementType::BodyFat).unwrap();
        assert_eq!(json, "\"body_fat\"");
    }

    #[test]
    fn test_default_units() {
        assert_eq!(MeasurementType::Weight.default_unit(), "kg");
        assert_eq!(MeasurementType::BodyFat.default_unit(), "%");
    }
}

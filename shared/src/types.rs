//! API request and response types

use crate::errors::MeasurementError;
use crate::measurements::BodyMeasurements;
use crate::sizing::SizeRecommendation;
use crate::units::{FeetInchesHeight, HeightUnit, WeightUnit};
use crate::validation::{parse_measurement, MeasurementField};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A number as submitted by a form: either already numeric or raw text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// Resolve to a finite number, parsing text if needed
    pub fn resolve(&self, field: MeasurementField) -> Result<f64, MeasurementError> {
        match self {
            NumericInput::Number(value) => Ok(*value),
            NumericInput::Text(raw) => parse_measurement(field, raw),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(raw: &str) -> Self {
        NumericInput::Text(raw.to_string())
    }
}

/// A height as a single number in `height_unit`, or as feet and inches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeightInput {
    FeetInches(FeetInchesHeight),
    Single(NumericInput),
}

impl HeightInput {
    /// Resolve to centimeters; feet and inches ignore `unit`
    pub fn to_cm(&self, unit: HeightUnit) -> Result<f64, MeasurementError> {
        match self {
            HeightInput::FeetInches(height) => Ok(height.to_cm()),
            HeightInput::Single(value) => Ok(unit.to_cm(value.resolve(MeasurementField::Height)?)),
        }
    }
}

impl From<f64> for HeightInput {
    fn from(value: f64) -> Self {
        HeightInput::Single(value.into())
    }
}

impl From<&str> for HeightInput {
    fn from(raw: &str) -> Self {
        HeightInput::Single(raw.into())
    }
}

/// Measurement submission, optionally in non-metric units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementsRequest {
    pub weight: NumericInput,
    pub height: HeightInput,
    #[serde(default)]
    pub weight_unit: WeightUnit,
    #[serde(default)]
    pub height_unit: HeightUnit,
}

impl MeasurementsRequest {
    /// Parse and convert both fields, then validate, reporting the first
    /// failing field
    ///
    /// A field that is not a number is reported before any range check.
    pub fn to_measurements(&self) -> Result<BodyMeasurements, MeasurementError> {
        let weight_kg = self
            .weight_unit
            .to_kg(self.weight.resolve(MeasurementField::Weight)?);
        let height_cm = self.height.to_cm(self.height_unit)?;

        BodyMeasurements::new(weight_kg, height_cm)
    }
}

/// Stored profile measurements with the recommendation derived from them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileMeasurementsResponse {
    pub user_id: Uuid,
    pub measurements: BodyMeasurements,
    pub recommendation: SizeRecommendation,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_text_inputs() {
        let req: MeasurementsRequest =
            serde_json::from_str(r#"{"weight": "65", "height": 170}"#).unwrap();
        assert_eq!(req.weight, NumericInput::Text("65".to_string()));
        assert_eq!(req.height_unit, HeightUnit::Cm);

        let m = req.to_measurements().unwrap();
        assert_eq!(m.weight_kg(), 65.0);
        assert_eq!(m.height_cm(), 170.0);
    }

    #[test]
    fn test_units_are_converted_before_validation() {
        let req: MeasurementsRequest = serde_json::from_str(
            r#"{"weight": 150, "height": "5.75", "weight_unit": "lbs", "height_unit": "ft"}"#,
        )
        .unwrap();
        let m = req.to_measurements().unwrap();
        assert!((m.weight_kg() - 68.0388).abs() < 0.001);
        assert!((m.height_cm() - 175.26).abs() < 0.001);

        // 60 lbs is 27.2 kg
        let req = MeasurementsRequest {
            weight: 60.0.into(),
            height: 170.0.into(),
            weight_unit: WeightUnit::Lbs,
            height_unit: HeightUnit::Cm,
        };
        assert_eq!(req.to_measurements().unwrap_err().field(), MeasurementField::Weight);
    }

    #[test]
    fn test_feet_and_inches_height() {
        let req: MeasurementsRequest = serde_json::from_str(
            r#"{"weight": 150, "weight_unit": "lbs", "height": {"feet": 5, "inches": 10}}"#,
        )
        .unwrap();
        assert_eq!(
            req.height,
            HeightInput::FeetInches(FeetInchesHeight { feet: 5, inches: 10.0 })
        );

        let m = req.to_measurements().unwrap();
        assert!((m.height_cm() - 177.8).abs() < 0.001);

        // 3'0" is 91.44 cm
        let req: MeasurementsRequest =
            serde_json::from_str(r#"{"weight": 65, "height": {"feet": 3}}"#).unwrap();
        assert_eq!(req.to_measurements().unwrap_err().field(), MeasurementField::Height);
    }

    #[test]
    fn test_parse_error_reported_before_range_error() {
        let req: MeasurementsRequest =
            serde_json::from_str(r#"{"weight": 20, "height": "abc"}"#).unwrap();
        let err = req.to_measurements().unwrap_err();
        assert!(err.is_parse_error());
        assert_eq!(err.field(), MeasurementField::Height);
        assert_eq!(err.code(), "INVALID_NUMBER");
    }

    #[test]
    fn test_first_failure_is_reported() {
        let req = MeasurementsRequest {
            weight: "heavy".into(),
            height: "tall".into(),
            weight_unit: WeightUnit::Kg,
            height_unit: HeightUnit::Cm,
        };
        let err = req.to_measurements().unwrap_err();
        assert!(err.is_parse_error());
        assert_eq!(err.field(), MeasurementField::Weight);
    }
}

//! Validated body measurements
//!
//! A [`BodyMeasurements`] can only be built through validation, so any value
//! of this type is safe to hand to the sizing engine.

use crate::errors::MeasurementError;
use crate::units::{HeightUnit, WeightUnit};
use crate::validation::{parse_measurement, validate_height, validate_weight, MeasurementField};
use serde::{Deserialize, Serialize};

/// Weight (kg) and height (cm) that passed range validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMeasurements")]
pub struct BodyMeasurements {
    #[serde(rename = "weight")]
    weight_kg: f64,
    #[serde(rename = "height")]
    height_cm: f64,
}

/// Unvalidated wire form of [`BodyMeasurements`]
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawMeasurements {
    weight: f64,
    height: f64,
}

impl TryFrom<RawMeasurements> for BodyMeasurements {
    type Error = MeasurementError;

    fn try_from(raw: RawMeasurements) -> Result<Self, Self::Error> {
        BodyMeasurements::new(raw.weight, raw.height)
    }
}

impl BodyMeasurements {
    /// Validate kilograms and centimeters, weight first
    pub fn new(weight_kg: f64, height_cm: f64) -> Result<Self, MeasurementError> {
        validate_weight(weight_kg)?;
        validate_height(height_cm)?;
        Ok(Self {
            weight_kg,
            height_cm,
        })
    }

    /// Parse and validate raw text input
    ///
    /// Both fields must be numbers before any range is checked, so text that
    /// is not a number is always reported ahead of an out-of-range value.
    pub fn parse(weight: &str, height: &str) -> Result<Self, MeasurementError> {
        let weight_kg = parse_measurement(MeasurementField::Weight, weight)?;
        let height_cm = parse_measurement(MeasurementField::Height, height)?;
        Self::new(weight_kg, height_cm)
    }

    /// Convert from the given units, then validate the kg/cm values
    pub fn from_units(
        weight: f64,
        weight_unit: WeightUnit,
        height: f64,
        height_unit: HeightUnit,
    ) -> Result<Self, MeasurementError> {
        Self::new(weight_unit.to_kg(weight), height_unit.to_cm(height))
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

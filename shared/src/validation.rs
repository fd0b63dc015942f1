//! Measurement validation
//!
//! Range checks for weight and height plus the caller-side parsing of raw
//! text input. Parsing failures and range failures are reported separately
//! so a form can tell "not a number" apart from "out of range".

use crate::errors::MeasurementError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Accepted weight in kilograms (inclusive)
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=200.0;

/// Accepted height in centimeters (inclusive)
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 100.0..=250.0;

// ============================================================================
// Fields
// ============================================================================

/// Input field of a measurement form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementField {
    Weight,
    Height,
}

impl MeasurementField {
    /// Field name as used in JSON payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementField::Weight => "weight",
            MeasurementField::Height => "height",
        }
    }

    /// User-facing label
    pub fn display_label(&self) -> &'static str {
        match self {
            MeasurementField::Weight => "Weight",
            MeasurementField::Height => "Height",
        }
    }

    /// SI unit abbreviation the field is expressed in
    pub fn unit(&self) -> &'static str {
        match self {
            MeasurementField::Weight => "kg",
            MeasurementField::Height => "cm",
        }
    }

    /// Inclusive accepted range
    pub fn range(&self) -> RangeInclusive<f64> {
        match self {
            MeasurementField::Weight => WEIGHT_RANGE_KG,
            MeasurementField::Height => HEIGHT_RANGE_CM,
        }
    }

    /// Message shown when a value falls outside [`Self::range`]
    pub fn range_message(&self) -> String {
        let range = self.range();
        format!(
            "{} should be between {} and {} {}",
            self.display_label(),
            range.start(),
            range.end(),
            self.unit()
        )
    }
}

impl fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Range validation
// ============================================================================

fn check_range(field: MeasurementField, value: f64) -> Result<(), MeasurementError> {
    // NaN is never contained in a range, so it fails here as well.
    if field.range().contains(&value) {
        Ok(())
    } else {
        Err(MeasurementError::OutOfRange { field, value })
    }
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), MeasurementError> {
    check_range(MeasurementField::Weight, weight_kg)
}

/// Validate height value (in cm)
pub fn validate_height(height_cm: f64) -> Result<(), MeasurementError> {
    check_range(MeasurementField::Height, height_cm)
}

/// Validate a weight/height pair, weight first
///
/// Returns the first violation only; errors are never aggregated.
pub fn validate_measurements(weight_kg: f64, height_cm: f64) -> Result<(), MeasurementError> {
    validate_weight(weight_kg)?;
    validate_height(height_cm)
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse raw text input for a measurement field
///
/// Surrounding whitespace is ignored. Empty input, text that is not a decimal
/// number, and non-finite values (`NaN`, `inf`) are all rejected as
/// [`MeasurementError::NotANumber`]. No range check happens here.
pub fn parse_measurement(field: MeasurementField, raw: &str) -> Result<f64, MeasurementError> {
    let not_a_number = || MeasurementError::NotANumber {
        field,
        input: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| not_a_number())?;
    if !value.is_finite() {
        return Err(not_a_number());
    }
    Ok(value)
}

//! Error types for the Size Advisor application

use crate::validation::MeasurementField;
use thiserror::Error;

/// Errors raised while turning user input into validated body measurements
///
/// Only the first failing field is ever reported; weight is always checked
/// before height.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    /// Raw text could not be read as a number
    #[error("{field} is not a valid number")]
    NotANumber {
        field: MeasurementField,
        input: String,
    },

    /// A parsed value falls outside its inclusive range
    #[error("{}", .field.range_message())]
    OutOfRange { field: MeasurementField, value: f64 },
}

impl MeasurementError {
    /// The field the caller should re-prompt for
    pub fn field(&self) -> MeasurementField {
        match self {
            MeasurementError::NotANumber { field, .. } => *field,
            MeasurementError::OutOfRange { field, .. } => *field,
        }
    }

    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            MeasurementError::NotANumber { .. } => "INVALID_NUMBER",
            MeasurementError::OutOfRange { .. } => "INVALID_MEASUREMENT",
        }
    }

    /// Whether this is a parse failure rather than a range failure
    pub fn is_parse_error(&self) -> bool {
        matches!(self, MeasurementError::NotANumber { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_messages() {
        let err = MeasurementError::OutOfRange {
            field: MeasurementField::Weight,
            value: 29.0,
        };
        assert_eq!(err.to_string(), "Weight should be between 30 and 200 kg");
        assert_eq!(err.code(), "INVALID_MEASUREMENT");

        let err = MeasurementError::OutOfRange {
            field: MeasurementField::Height,
            value: 260.0,
        };
        assert_eq!(err.to_string(), "Height should be between 100 and 250 cm");
        assert_eq!(err.field(), MeasurementField::Height);
    }

    #[test]
    fn test_not_a_number_message() {
        let err = MeasurementError::NotANumber {
            field: MeasurementField::Height,
            input: "tall".to_string(),
        };
        assert_eq!(err.to_string(), "height is not a valid number");
        assert!(err.is_parse_error());
        assert_eq!(err.code(), "INVALID_NUMBER");
    }
}

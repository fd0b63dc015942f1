//! Size Advisor WASM Module
//!
//! WebAssembly bindings so the storefront can validate measurements and
//! recommend sizes in the browser without a round trip.

use size_advisor_shared::{recommend_size, sizing, validate_measurements as validate, BodyMeasurements};
use wasm_bindgen::prelude::*;

/// Validate weight (kg) and height (cm)
///
/// Returns the message for the first failing field, or nothing when valid.
#[wasm_bindgen]
pub fn validate_measurements(weight_kg: f64, height_cm: f64) -> Option<String> {
    validate(weight_kg, height_cm).err().map(|e| e.to_string())
}

/// Calculate BMI from weight (kg) and height (cm), unrounded
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    sizing::calculate_bmi(weight_kg, height_cm)
}

/// Recommend a size, returned as JSON text
///
/// Throws with the validation message when the measurements are out of range.
#[wasm_bindgen]
pub fn recommend_size_json(weight_kg: f64, height_cm: f64) -> Result<String, JsError> {
    recommendation_json(weight_kg, height_cm).map_err(|msg| JsError::new(&msg))
}

fn recommendation_json(weight_kg: f64, height_cm: f64) -> Result<String, String> {
    let measurements = BodyMeasurements::new(weight_kg, height_cm).map_err(|e| e.to_string())?;
    serde_json::to_string(&recommend_size(&measurements)).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_measurements() {
        assert_eq!(validate_measurements(65.0, 170.0), None);
        assert_eq!(
            validate_measurements(29.0, 170.0).as_deref(),
            Some("Weight should be between 30 and 200 kg")
        );
        assert_eq!(
            validate_measurements(65.0, 260.0).as_deref(),
            Some("Height should be between 100 and 250 cm")
        );
    }

    #[test]
    fn test_bmi() {
        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.86).abs() < 0.01);
        assert_eq!(calculate_bmi(70.0, 0.0), 0.0);
    }

    #[test]
    fn test_recommendation_json() {
        let json = recommendation_json(65.0, 170.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["size"], "M");
        assert_eq!(value["bmi"], 22.5);

        let err = recommendation_json(65.0, 99.0).unwrap_err();
        assert_eq!(err, "Height should be between 100 and 250 cm");
    }
}

//! Browser tests for the WASM bindings
//!
//! Run with `wasm-pack test --headless --chrome wasm`.

#![cfg(target_arch = "wasm32")]

use size_advisor_wasm::{recommend_size_json, validate_measurements};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn recommends_medium_for_average_build() {
    let json = recommend_size_json(65.0, 170.0).unwrap();
    assert!(json.contains("\"size\":\"M\""));
}

#[wasm_bindgen_test]
fn rejects_out_of_range_height() {
    assert!(recommend_size_json(65.0, 260.0).is_err());
    assert_eq!(
        validate_measurements(65.0, 260.0).as_deref(),
        Some("Height should be between 100 and 250 cm")
    );
}

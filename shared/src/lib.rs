//! Size Advisor Shared Library
//!
//! Measurement validation and the size recommendation engine, shared by the
//! backend service and the WASM module.

pub mod errors;
pub mod measurements;
pub mod sizing;
pub mod tips;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::MeasurementError;
pub use measurements::BodyMeasurements;
pub use sizing::{recommend_size, BodyFrame, FitType, Size, SizeRecommendation};
pub use tips::FittingTip;
pub use units::{HeightUnit, WeightUnit};
pub use validation::{validate_measurements, MeasurementField};

//! Size recommendation engine
//!
//! Maps validated body measurements to a clothing size, a height-based body
//! frame, a BMI-based fit type and an ordered list of fitting tips.
//!
//! All classification runs on the unrounded BMI. Rounding to one decimal
//! happens only when the result record is built.

use crate::measurements::BodyMeasurements;
use crate::tips::fitting_tips;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Categories
// ============================================================================

/// Clothing size, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl Size {
    pub fn label(&self) -> &'static str {
        match self {
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xxl => "XXL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Height-based body frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyFrame {
    Petite,
    Regular,
    Tall,
}

/// BMI-based fit type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitType {
    Slim,
    Regular,
    Relaxed,
}

// ============================================================================
// Classification
// ============================================================================

/// Heights below this are petite
pub const PETITE_BELOW_CM: f64 = 160.0;
/// Heights above this are tall
pub const TALL_ABOVE_CM: f64 = 180.0;
/// BMI below this is a slim fit
pub const SLIM_BELOW_BMI: f64 = 20.0;
/// BMI above this is a relaxed fit
pub const RELAXED_ABOVE_BMI: f64 = 27.0;

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Round a BMI to one decimal place for display
pub fn round_bmi(bmi: f64) -> f64 {
    (bmi * 10.0).round() / 10.0
}

/// Classify height into a body frame; 160 and 180 are both regular
pub fn body_frame_for_height(height_cm: f64) -> BodyFrame {
    if height_cm < PETITE_BELOW_CM {
        BodyFrame::Petite
    } else if height_cm > TALL_ABOVE_CM {
        BodyFrame::Tall
    } else {
        BodyFrame::Regular
    }
}

/// Classify BMI into a fit type; 20 and 27 are both regular
pub fn fit_type_for_bmi(bmi: f64) -> FitType {
    if bmi < SLIM_BELOW_BMI {
        FitType::Slim
    } else if bmi > RELAXED_ABOVE_BMI {
        FitType::Relaxed
    } else {
        FitType::Regular
    }
}

/// One row of the size table: applies when BMI is below `bmi_below`
struct SizeBand {
    bmi_below: f64,
    petite: Size,
    regular: Size,
    tall: Size,
}

impl SizeBand {
    fn size_for(&self, frame: BodyFrame) -> Size {
        match frame {
            BodyFrame::Petite => self.petite,
            BodyFrame::Regular => self.regular,
            BodyFrame::Tall => self.tall,
        }
    }
}

/// Evaluated top to bottom; the first band whose upper bound exceeds the BMI
/// wins. Anything past the last band is [`Size::Xxl`].
const SIZE_BANDS: [SizeBand; 5] = [
    SizeBand { bmi_below: 18.5, petite: Size::Xs, regular: Size::Xs, tall: Size::S },
    SizeBand { bmi_below: 22.0, petite: Size::S, regular: Size::S, tall: Size::M },
    SizeBand { bmi_below: 25.0, petite: Size::S, regular: Size::M, tall: Size::L },
    SizeBand { bmi_below: 28.0, petite: Size::M, regular: Size::L, tall: Size::Xl },
    SizeBand { bmi_below: 32.0, petite: Size::L, regular: Size::Xl, tall: Size::Xl },
];

/// Look up the size for an unrounded BMI and a body frame
pub fn size_for(bmi: f64, frame: BodyFrame) -> Size {
    SIZE_BANDS
        .iter()
        .find(|band| bmi < band.bmi_below)
        .map(|band| band.size_for(frame))
        .unwrap_or(Size::Xxl)
}

// ============================================================================
// Recommendation
// ============================================================================

/// Result of a size recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeRecommendation {
    pub size: Size,
    /// BMI rounded to one decimal
    pub bmi: f64,
    pub body_frame: BodyFrame,
    pub fit_type: FitType,
    pub fitting_tips: Vec<String>,
}

/// Recommend a size for validated measurements
///
/// Total over the valid measurement domain; holding a [`BodyMeasurements`]
/// already guarantees the inputs are in range.
pub fn recommend_size(measurements: &BodyMeasurements) -> SizeRecommendation {
    let bmi = calculate_bmi(measurements.weight_kg(), measurements.height_cm());
    let body_frame = body_frame_for_height(measurements.height_cm());
    let fit_type = fit_type_for_bmi(bmi);

    SizeRecommendation {
        size: size_for(bmi, body_frame),
        bmi: round_bmi(bmi),
        body_frame,
        fit_type,
        fitting_tips: fitting_tips(body_frame, fit_type, bmi)
            .into_iter()
            .map(|tip| tip.text().to_string())
            .collect(),
    }
}

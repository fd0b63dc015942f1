//! Fitting tip catalog
//!
//! Tips are a fixed content catalog: the English text is shown to shoppers
//! verbatim, and each entry has a stable identifier for callers that want
//! to localize.

use crate::sizing::{BodyFrame, FitType};
use serde::{Deserialize, Serialize};

/// BMI below which the layering tip is added
pub const LAYERING_TIP_BMI_BELOW: f64 = 20.0;

/// BMI above which the streamlining tips are added
pub const STREAMLINE_TIPS_BMI_ABOVE: f64 = 28.0;

/// A single fitting tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FittingTip {
    PetiteSizing,
    PetiteCroppedStyles,
    TallSizing,
    TallLongerGarments,
    SlimTailoredFit,
    SlimStructuredPieces,
    RelaxedStraightCut,
    RelaxedStretchFabrics,
    RegularEverydayFit,
    RegularFitFlexibility,
    Layering,
    VerticalPatterns,
    OpenNecklines,
}

impl FittingTip {
    /// Stable identifier, matching the serialized form
    pub fn id(&self) -> &'static str {
        match self {
            FittingTip::PetiteSizing => "petite_sizing",
            FittingTip::PetiteCroppedStyles => "petite_cropped_styles",
            FittingTip::TallSizing => "tall_sizing",
            FittingTip::TallLongerGarments => "tall_longer_garments",
            FittingTip::SlimTailoredFit => "slim_tailored_fit",
            FittingTip::SlimStructuredPieces => "slim_structured_pieces",
            FittingTip::RelaxedStraightCut => "relaxed_straight_cut",
            FittingTip::RelaxedStretchFabrics => "relaxed_stretch_fabrics",
            FittingTip::RegularEverydayFit => "regular_everyday_fit",
            FittingTip::RegularFitFlexibility => "regular_fit_flexibility",
            FittingTip::Layering => "layering",
            FittingTip::VerticalPatterns => "vertical_patterns",
            FittingTip::OpenNecklines => "open_necklines",
        }
    }

    /// Display text
    pub fn text(&self) -> &'static str {
        match self {
            FittingTip::PetiteSizing => "Look for petite sizing options or shorter inseams",
            FittingTip::PetiteCroppedStyles => {
                "Cropped styles and high-waisted fits will flatter your proportions"
            }
            FittingTip::TallSizing => "Consider tall sizing for better sleeve and inseam lengths",
            FittingTip::TallLongerGarments => "Longer tops and jackets will provide better coverage",
            FittingTip::SlimTailoredFit => {
                "Slim fit styles will provide a tailored look without being too loose"
            }
            FittingTip::SlimStructuredPieces => {
                "Structured pieces will add definition to your silhouette"
            }
            FittingTip::RelaxedStraightCut => {
                "Look for relaxed fit or straight-cut styles for comfort"
            }
            FittingTip::RelaxedStretchFabrics => {
                "Stretchy fabrics and adjustable waistbands offer flexibility"
            }
            FittingTip::RegularEverydayFit => {
                "Regular fit styles will suit you well for everyday wear"
            }
            FittingTip::RegularFitFlexibility => {
                "You have flexibility to choose between slim and relaxed fits based on preference"
            }
            FittingTip::Layering => "Layering can add visual depth and dimension to your outfits",
            FittingTip::VerticalPatterns => {
                "Vertical patterns and darker colors create a streamlined look"
            }
            FittingTip::OpenNecklines => "V-necks and open collars elongate the neckline",
        }
    }
}

/// Build the ordered tip list for a classification
///
/// Frame tips come first, then fit tips, then tips for BMI extremes. `bmi`
/// must be the unrounded value. Nothing is shuffled or de-duplicated.
pub fn fitting_tips(frame: BodyFrame, fit: FitType, bmi: f64) -> Vec<FittingTip> {
    let mut tips = Vec::with_capacity(5);

    match frame {
        BodyFrame::Petite => {
            tips.push(FittingTip::PetiteSizing);
            tips.push(FittingTip::PetiteCroppedStyles);
        }
        BodyFrame::Tall => {
            tips.push(FittingTip::TallSizing);
            tips.push(FittingTip::TallLongerGarments);
        }
        BodyFrame::Regular => {}
    }

    match fit {
        FitType::Slim => {
            tips.push(FittingTip::SlimTailoredFit);
            tips.push(FittingTip::SlimStructuredPieces);
        }
        FitType::Relaxed => {
            tips.push(FittingTip::RelaxedStraightCut);
            tips.push(FittingTip::RelaxedStretchFabrics);
        }
        FitType::Regular => {
            tips.push(FittingTip::RegularEverydayFit);
            tips.push(FittingTip::RegularFitFlexibility);
        }
    }

    if bmi < LAYERING_TIP_BMI_BELOW {
        tips.push(FittingTip::Layering);
    } else if bmi > STREAMLINE_TIPS_BMI_ABOVE {
        tips.push(FittingTip::VerticalPatterns);
        tips.push(FittingTip::OpenNecklines);
    }

    tips
}

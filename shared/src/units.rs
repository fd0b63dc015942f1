//! Unit conversion for measurement input
//!
//! The sizing engine only understands kilograms and centimeters. Anything a
//! user types in pounds, stone, inches or feet is converted here, at the
//! boundary, before validation runs.

use serde::{Deserialize, Serialize};
use std::fmt;

const KG_PER_LB: f64 = 0.453592;
const KG_PER_STONE: f64 = 6.35029;
const CM_PER_INCH: f64 = 2.54;

// ============================================================================
// Weight
// ============================================================================

/// Unit a weight was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
    Stone,
}

impl WeightUnit {
    /// Convert from this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => value * KG_PER_LB,
            WeightUnit::Stone => value * KG_PER_STONE,
        }
    }

    /// Convert from kilograms to this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg / KG_PER_LB,
            WeightUnit::Stone => kg / KG_PER_STONE,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
            WeightUnit::Stone => "st",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

// ============================================================================
// Height
// ============================================================================

/// Unit a height was entered in
///
/// `Feet` takes a fractional number of feet (5.5 = 5'6"); use
/// [`FeetInchesHeight`] for separate feet and inches fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "ft")]
    Feet,
}

impl HeightUnit {
    /// Convert from this unit to centimeters
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::Meters => value * 100.0,
            HeightUnit::Inches => value * CM_PER_INCH,
            HeightUnit::Feet => value * 12.0 * CM_PER_INCH,
        }
    }

    /// Convert from centimeters to this unit
    pub fn from_cm(&self, cm: f64) -> f64 {
        match self {
            HeightUnit::Cm => cm,
            HeightUnit::Meters => cm / 100.0,
            HeightUnit::Inches => cm / CM_PER_INCH,
            HeightUnit::Feet => cm / CM_PER_INCH / 12.0,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::Meters => "m",
            HeightUnit::Inches => "in",
            HeightUnit::Feet => "ft",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Height entered as separate feet and inches, as in `{"feet": 5, "inches": 10}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeetInchesHeight {
    pub feet: u32,
    #[serde(default)]
    pub inches: f64,
}

impl FeetInchesHeight {
    pub fn total_inches(&self) -> f64 {
        f64::from(self.feet) * 12.0 + self.inches
    }

    pub fn to_cm(&self) -> f64 {
        self.total_inches() * CM_PER_INCH
    }
}

//! Fit match scoring.
//!
//! A placeholder heuristic: it compares one measurement (chest) against a
//! reference chest per letter size and applies a linear penalty. It is not a
//! validated fit model.

use serde::{Deserialize, Serialize};

use crate::item::{Item, Size};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Reference chest (cm) for sizes without a letter entry, i.e. shoe sizes.
pub const NEUTRAL_REFERENCE_CHEST_CM: f64 = 90.0;

/// Percentage points lost per centimetre of chest difference.
pub const PENALTY_PER_CM: f64 = 2.0;

/// Label thresholds; each is an exclusive lower bound.
pub const PERFECT_FIT_ABOVE: f64 = 80.0;
pub const GOOD_FIT_ABOVE: f64 = 60.0;
pub const MIGHT_FIT_ABOVE: f64 = 40.0;

/// Reference chest in centimetres for a size.
pub fn reference_chest_cm(size: Size) -> f64 {
    match size {
        Size::Xs => 80.0,
        Size::S => 85.0,
        Size::M => 90.0,
        Size::L => 95.0,
        Size::Xl => 100.0,
        Size::Xxl => 105.0,
        Size::Shoe(_) => NEUTRAL_REFERENCE_CHEST_CM,
    }
}

// ---------------------------------------------------------------------------
// Viewer profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredFit {
    Slim,
    #[default]
    Regular,
    Loose,
}

impl PreferredFit {
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "slim" => Ok(Self::Slim),
            "regular" => Ok(Self::Regular),
            "loose" => Ok(Self::Loose),
            _ => Err(format!(
                "Invalid preferred fit '{s}'. Must be one of: slim, regular, loose"
            )),
        }
    }
}

/// Viewer body measurements in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementProfile {
    pub chest: f64,
    pub waist: f64,
    pub hips: f64,
    pub height: f64,
    pub preferred_fit: PreferredFit,
}

impl Default for MeasurementProfile {
    fn default() -> Self {
        Self {
            chest: 96.0,
            waist: 81.0,
            hips: 101.0,
            height: 175.0,
            preferred_fit: PreferredFit::Regular,
        }
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitLabel {
    #[serde(rename = "Perfect Fit")]
    PerfectFit,
    #[serde(rename = "Good Fit")]
    GoodFit,
    #[serde(rename = "Might Fit")]
    MightFit,
    #[serde(rename = "Poor Fit")]
    PoorFit,
}

impl FitLabel {
    pub fn from_score(score: f64) -> Self {
        if score > PERFECT_FIT_ABOVE {
            Self::PerfectFit
        } else if score > GOOD_FIT_ABOVE {
            Self::GoodFit
        } else if score > MIGHT_FIT_ABOVE {
            Self::MightFit
        } else {
            Self::PoorFit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerfectFit => "Perfect Fit",
            Self::GoodFit => "Good Fit",
            Self::MightFit => "Might Fit",
            Self::PoorFit => "Poor Fit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitMatch {
    /// Rounded score in `0..=100`.
    pub percentage: u8,
    pub label: FitLabel,
}

/// Score how well `item` should fit a viewer with `profile`.
///
/// `score = 100 - 2 * |chest - reference|`, clamped to `[0, 100]`. The label
/// is taken from the unrounded score; the percentage is rounded.
pub fn compute_fit_match(item: &Item, profile: &MeasurementProfile) -> FitMatch {
    let reference = reference_chest_cm(item.size);
    let diff = (profile.chest - reference).abs();
    let score = (100.0 - PENALTY_PER_CM * diff).clamp(0.0, 100.0);
    // NaN measurements collapse to zero rather than propagating.
    let score = if score.is_nan() { 0.0 } else { score };

    FitMatch {
        percentage: score.round() as u8,
        label: FitLabel::from_score(score),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

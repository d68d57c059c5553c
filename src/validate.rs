//! Character-count validation: limits presets and the status classifier
//! driving input-field indicators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Acceptable character-count thresholds for one text field. All bounds are
/// optional; absent bounds simply never match during classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharLimits {
    pub min: Option<usize>,
    pub optimal_min: Option<usize>,
    pub optimal_max: Option<usize>,
    pub max: Option<usize>,
}

/// Page `<title>` thresholds (desktop pixel budget caps around 60 chars).
pub const TITLE_LIMITS: CharLimits = CharLimits {
    min: Some(30),
    optimal_min: Some(50),
    optimal_max: Some(60),
    max: Some(60),
};

/// Meta description thresholds.
pub const DESCRIPTION_LIMITS: CharLimits = CharLimits {
    min: Some(70),
    optimal_min: Some(150),
    optimal_max: Some(160),
    max: Some(160),
};

/// `og:title` thresholds (social platforms tolerate longer titles).
pub const OG_TITLE_LIMITS: CharLimits = CharLimits {
    min: None,
    optimal_min: Some(60),
    optimal_max: Some(90),
    max: Some(90),
};

/// `og:description` thresholds.
pub const OG_DESCRIPTION_LIMITS: CharLimits = CharLimits {
    min: None,
    optimal_min: None,
    optimal_max: None,
    max: Some(200),
};

/// Severity of a field's character count relative to its limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharStatus {
    Empty,
    Short,
    Optimal,
    Warning,
    Over,
}

impl CharStatus {
    /// Human label shown next to the count, `None` for an empty field.
    pub fn label(self) -> Option<&'static str> {
        match self {
            CharStatus::Optimal => Some("Optimal"),
            CharStatus::Over => Some("Over limit"),
            CharStatus::Short => Some("Too short"),
            CharStatus::Warning => Some("Approaching limit"),
            CharStatus::Empty => None,
        }
    }
}

impl fmt::Display for CharStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CharStatus::Empty => "empty",
            CharStatus::Short => "short",
            CharStatus::Optimal => "optimal",
            CharStatus::Warning => "warning",
            CharStatus::Over => "over",
        };
        f.write_str(s)
    }
}

/// Classify a character count against its limits. Pure; first match wins,
/// and the order is deliberate policy:
///
/// 1. zero length is `Empty`
/// 2. below `min` is `Short`
/// 3. inside `[optimal_min, optimal_max]` is `Optimal`
/// 4. above the hard `max` is `Over`
/// 5. outside the optimal range on either side is `Warning`
/// 6. with no applicable thresholds, `Optimal`
///
/// Being under `min` outranks merely "not yet optimal", and exceeding `max`
/// outranks being above the optimal range.
pub fn classify(length: usize, limits: &CharLimits) -> CharStatus {
    if length == 0 {
        return CharStatus::Empty;
    }
    if let Some(min) = limits.min {
        if length < min {
            return CharStatus::Short;
        }
    }
    if let (Some(lo), Some(hi)) = (limits.optimal_min, limits.optimal_max) {
        if length >= lo && length <= hi {
            return CharStatus::Optimal;
        }
    }
    if let Some(max) = limits.max {
        if length > max {
            return CharStatus::Over;
        }
    }
    if let Some(hi) = limits.optimal_max {
        if length > hi {
            return CharStatus::Warning;
        }
    }
    if let Some(lo) = limits.optimal_min {
        if length < lo {
            return CharStatus::Warning;
        }
    }
    CharStatus::Optimal
}

/// Fraction of the hard (or optimal) maximum consumed, clamped to 1.0. Used
/// for progress-bar style indicators.
pub fn progress_fraction(length: usize, limits: &CharLimits) -> f32 {
    let max = limits.max.or(limits.optimal_max).unwrap_or(100);
    (length as f32 / max as f32).min(1.0)
}

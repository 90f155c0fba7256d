//! Presentation tint and intensity for a mood rating.
//!
//! The UI shades selected tags with a per-level accent whose opacity tracks
//! the rating inside the level's band. The original formulas had ambiguous
//! boundary handling; here the interpolation parameter is computed over the
//! closed band and clamped to [0, 1], so boundary values are unambiguous.

use serde::{Deserialize, Serialize};

use super::MoodLevel;

/// Accent family for a mood level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tint {
    Orange,
    Blue,
    Green,
}

impl Tint {
    /// Hex accent string for the tint.
    pub fn hex(&self) -> &'static str {
        match self {
            Tint::Orange => "#f97316",
            Tint::Blue => "#3b82f6",
            Tint::Green => "#22c55e",
        }
    }
}

/// Accent family for a level.
pub fn tint(level: MoodLevel) -> Tint {
    match level {
        MoodLevel::VeryUnpleasant | MoodLevel::Unpleasant => Tint::Orange,
        MoodLevel::Neutral => Tint::Blue,
        MoodLevel::Pleasant | MoodLevel::VeryPleasant => Tint::Green,
    }
}

/// Presentation intensity in [0, 1] for a rating within a level.
///
/// Per-level affine maps over the band-relative position `t`:
/// VeryUnpleasant 1.0 - 0.6t, Unpleasant 0.4 - 0.3t, Neutral 0.3 + 0.7t,
/// Pleasant 0.5 + 0.5t, VeryPleasant constant 1.0. `t` and the result are
/// both clamped, so the function is total over all f64 input.
pub fn color_weight(rating: f64, level: MoodLevel) -> f64 {
    let (lo, hi) = level.band();
    let t = ((rating - lo) / (hi - lo)).clamp(0.0, 1.0);
    // NaN rating leaves t NaN after clamp; treat as band start
    let t = if t.is_nan() { 0.0 } else { t };

    let weight = match level {
        MoodLevel::VeryUnpleasant => 1.0 - t * 0.6,
        MoodLevel::Unpleasant => 0.4 - t * 0.3,
        MoodLevel::Neutral => 0.3 + t * 0.7,
        MoodLevel::Pleasant => 0.5 + t * 0.5,
        MoodLevel::VeryPleasant => 1.0,
    };
    weight.clamp(0.0, 1.0)
}

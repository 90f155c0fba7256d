//! Discrete mood levels derived from a continuous rating.
//!
//! Ratings are entered on a 1-10 slider. Five closed bands partition the
//! scale; anything that misses every band (the narrow inter-band gaps,
//! out-of-range input, NaN) falls back to Neutral rather than erroring.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of five emotional-valence categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodLevel {
    VeryUnpleasant,
    Unpleasant,
    Neutral,
    Pleasant,
    VeryPleasant,
}

impl MoodLevel {
    /// All levels in valence order, lowest first.
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::VeryUnpleasant,
        MoodLevel::Unpleasant,
        MoodLevel::Neutral,
        MoodLevel::Pleasant,
        MoodLevel::VeryPleasant,
    ];

    /// Classify a rating into a mood level.
    ///
    /// Bands are closed on both ends: [1.0, 2.5], [2.6, 4.5], [4.6, 6.5],
    /// [6.6, 8.5], [8.6, 10.0]. Any score outside every band returns
    /// `Neutral`. Total over all f64 input, including NaN.
    pub fn from_score(score: f64) -> MoodLevel {
        match score {
            s if (1.0..=2.5).contains(&s) => MoodLevel::VeryUnpleasant,
            s if (2.6..=4.5).contains(&s) => MoodLevel::Unpleasant,
            s if (4.6..=6.5).contains(&s) => MoodLevel::Neutral,
            s if (6.6..=8.5).contains(&s) => MoodLevel::Pleasant,
            s if (8.6..=10.0).contains(&s) => MoodLevel::VeryPleasant,
            _ => MoodLevel::Neutral,
        }
    }

    /// The closed rating band for this level as (low, high).
    pub fn band(&self) -> (f64, f64) {
        match self {
            MoodLevel::VeryUnpleasant => (1.0, 2.5),
            MoodLevel::Unpleasant => (2.6, 4.5),
            MoodLevel::Neutral => (4.6, 6.5),
            MoodLevel::Pleasant => (6.6, 8.5),
            MoodLevel::VeryPleasant => (8.6, 10.0),
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            MoodLevel::VeryUnpleasant => "Very Unpleasant",
            MoodLevel::Unpleasant => "Unpleasant",
            MoodLevel::Neutral => "Neutral",
            MoodLevel::Pleasant => "Pleasant",
            MoodLevel::VeryPleasant => "Very Pleasant",
        }
    }

    /// Fixed display glyph.
    pub fn emoji(&self) -> &'static str {
        match self {
            MoodLevel::VeryUnpleasant => "😫",
            MoodLevel::Unpleasant => "🙁",
            MoodLevel::Neutral => "😐",
            MoodLevel::Pleasant => "🙂",
            MoodLevel::VeryPleasant => "😊",
        }
    }

    /// Glyph and label combined, e.g. "😊 Very Pleasant".
    pub fn display_text(&self) -> String {
        format!("{} {}", self.emoji(), self.label())
    }

    /// Parse a level from its label or snake_case name.
    pub fn parse(s: &str) -> Option<MoodLevel> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "very_unpleasant" | "very unpleasant" => Some(MoodLevel::VeryUnpleasant),
            "unpleasant" => Some(MoodLevel::Unpleasant),
            "neutral" => Some(MoodLevel::Neutral),
            "pleasant" => Some(MoodLevel::Pleasant),
            "very_pleasant" | "very pleasant" => Some(MoodLevel::VeryPleasant),
            _ => None,
        }
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_score_bands() {
        assert_eq!(MoodLevel::from_score(1.0), MoodLevel::VeryUnpleasant);
        assert_eq!(MoodLevel::from_score(2.5), MoodLevel::VeryUnpleasant);
        assert_eq!(MoodLevel::from_score(2.6), MoodLevel::Unpleasant);
        assert_eq!(MoodLevel::from_score(4.5), MoodLevel::Unpleasant);
        assert_eq!(MoodLevel::from_score(4.6), MoodLevel::Neutral);
        assert_eq!(MoodLevel::from_score(6.5), MoodLevel::Neutral);
        assert_eq!(MoodLevel::from_score(6.6), MoodLevel::Pleasant);
        assert_eq!(MoodLevel::from_score(8.5), MoodLevel::Pleasant);
        assert_eq!(MoodLevel::from_score(8.6), MoodLevel::VeryPleasant);
        assert_eq!(MoodLevel::from_score(10.0), MoodLevel::VeryPleasant);
    }

    #[test]
    fn test_from_score_fallback() {
        // Inter-band gap
        assert_eq!(MoodLevel::from_score(2.55), MoodLevel::Neutral);
        // Out of range
        assert_eq!(MoodLevel::from_score(0.0), MoodLevel::Neutral);
        assert_eq!(MoodLevel::from_score(-3.0), MoodLevel::Neutral);
        assert_eq!(MoodLevel::from_score(11.0), MoodLevel::Neutral);
        assert_eq!(MoodLevel::from_score(f64::NAN), MoodLevel::Neutral);
        assert_eq!(MoodLevel::from_score(f64::INFINITY), MoodLevel::Neutral);
    }

    #[test]
    fn test_slider_stops() {
        // The UI slider steps by 2 over [1, 10]
        assert_eq!(MoodLevel::from_score(1.0), MoodLevel::VeryUnpleasant);
        assert_eq!(MoodLevel::from_score(3.0), MoodLevel::Unpleasant);
        assert_eq!(MoodLevel::from_score(5.0), MoodLevel::Neutral);
        assert_eq!(MoodLevel::from_score(7.0), MoodLevel::Pleasant);
        assert_eq!(MoodLevel::from_score(9.0), MoodLevel::VeryPleasant);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(
            MoodLevel::VeryPleasant.display_text(),
            "😊 Very Pleasant"
        );
        assert_eq!(MoodLevel::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn test_parse_roundtrip() {
        for level in MoodLevel::ALL {
            assert_eq!(MoodLevel::parse(level.label()), Some(level));
        }
        assert_eq!(MoodLevel::parse("very_pleasant"), Some(MoodLevel::VeryPleasant));
        assert_eq!(MoodLevel::parse("blissful"), None);
    }

    proptest! {
        #[test]
        fn prop_from_score_total(score in proptest::num::f64::ANY) {
            // Never panics, always lands on one of the five levels
            let level = MoodLevel::from_score(score);
            prop_assert!(MoodLevel::ALL.contains(&level));
        }

        #[test]
        fn prop_band_membership(score in 1.0f64..=10.0) {
            let containing = MoodLevel::ALL.into_iter().find(|level| {
                let (lo, hi) = level.band();
                score >= lo && score <= hi
            });
            // In-band scores classify into their band; gap scores fall
            // back to Neutral
            match containing {
                Some(level) => prop_assert_eq!(MoodLevel::from_score(score), level),
                None => prop_assert_eq!(MoodLevel::from_score(score), MoodLevel::Neutral),
            }
        }
    }
}

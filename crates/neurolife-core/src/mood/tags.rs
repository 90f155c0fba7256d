//! Curated feeling tags grouped by mood level.
//!
//! Each level carries a fixed, ordered list of short emotion labels. The
//! lists share no elements in the shipped data, though nothing enforces
//! that structurally.

use super::MoodLevel;

const VERY_UNPLEASANT_TAGS: &[&str] = &[
    "Hopeless", "Exhausted", "Angry", "Panicked", "Irritable", "Ashamed", "Worried", "Grieving",
];

const UNPLEASANT_TAGS: &[&str] = &[
    "Tired", "Anxious", "Frustrated", "Sad", "Stressed", "Disappointed", "Lonely",
];

const NEUTRAL_TAGS: &[&str] = &[
    "Bored", "Meh", "Indifferent", "Calm", "Blank", "Okay", "Relaxed",
];

const PLEASANT_TAGS: &[&str] = &[
    "Content", "Motivated", "Inspired", "Optimistic", "Grateful", "Excited", "Focused",
];

const VERY_PLEASANT_TAGS: &[&str] = &[
    "Euphoric", "Joyful", "Energetic", "Elated", "Proud", "Confident", "Connected",
];

/// Recommended tags for a level, in curated order. Never empty.
pub fn recommended_tags(level: MoodLevel) -> &'static [&'static str] {
    match level {
        MoodLevel::VeryUnpleasant => VERY_UNPLEASANT_TAGS,
        MoodLevel::Unpleasant => UNPLEASANT_TAGS,
        MoodLevel::Neutral => NEUTRAL_TAGS,
        MoodLevel::Pleasant => PLEASANT_TAGS,
        MoodLevel::VeryPleasant => VERY_PLEASANT_TAGS,
    }
}

/// Deduplicated union of every level's tags, sorted ascending.
pub fn all_tags() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = MoodLevel::ALL
        .iter()
        .flat_map(|level| recommended_tags(*level).iter().copied())
        .collect();
    tags.sort_unstable();
    tags.dedup();
    tags
}

/// The level whose curated list contains `tag`, if any.
///
/// Matches case-sensitively; returns the first level in valence order when
/// a tag appears under more than one.
pub fn level_for(tag: &str) -> Option<MoodLevel> {
    MoodLevel::ALL
        .into_iter()
        .find(|level| recommended_tags(*level).contains(&tag))
}

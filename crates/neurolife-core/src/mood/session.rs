//! One mood-entry event and its analysis summary.
//!
//! Sessions are created per user interaction and discarded on dismiss;
//! nothing here is persisted.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MoodLevel;

/// Scope of a logging session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoggingType {
    Today,
    Week,
}

impl fmt::Display for LoggingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingType::Today => f.write_str("Today"),
            LoggingType::Week => f.write_str("Week"),
        }
    }
}

/// One user mood-entry event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSession {
    /// Scope of the entry
    pub logging_type: LoggingType,
    /// Entry time; present only for Today-scoped sessions
    pub timestamp: Option<DateTime<Utc>>,
    /// Slider rating in [1, 10]
    pub rating: f64,
    /// Multi-selected feeling tags, kept sorted
    pub selected_tags: BTreeSet<String>,
}

impl LoggingSession {
    /// Start a Today session stamped with the current time.
    pub fn today(rating: f64) -> Self {
        Self::with_timestamp(rating, Utc::now())
    }

    /// Start a Today session with an explicit timestamp.
    pub fn with_timestamp(rating: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            logging_type: LoggingType::Today,
            timestamp: Some(timestamp),
            rating,
            selected_tags: BTreeSet::new(),
        }
    }

    /// Start a Week session (no timestamp).
    pub fn week(rating: f64) -> Self {
        Self {
            logging_type: LoggingType::Week,
            timestamp: None,
            rating,
            selected_tags: BTreeSet::new(),
        }
    }

    /// Mood level derived from the rating.
    pub fn level(&self) -> MoodLevel {
        MoodLevel::from_score(self.rating)
    }

    /// Toggle a tag in the multi-select: insert if absent, remove if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
    }

    /// Whether analysis is available. The UI disables the analyze action
    /// on an empty selection instead of raising an error.
    pub fn can_analyze(&self) -> bool {
        !self.selected_tags.is_empty()
    }

    /// Timestamp rendered as e.g. "29 Aug 2026, 1:05 PM", or "N/A" when absent.
    pub fn formatted_timestamp(&self) -> String {
        match self.timestamp {
            Some(ts) => ts.format("%d %b %Y, %-I:%M %p").to_string(),
            None => "N/A".to_string(),
        }
    }

    /// Render the analysis summary.
    ///
    /// Line 1: logging type and mood label. Line 2: selected tags sorted
    /// ascending, comma-joined (empty segment when none). Line 3, only for
    /// Today sessions with a timestamp: the formatted entry time.
    pub fn summarize(&self) -> String {
        let tags: Vec<&str> = self.selected_tags.iter().map(String::as_str).collect();
        let mut summary = format!(
            "🧠 Analyzing {} mood: {}\n🧾 Feelings: {}",
            self.logging_type,
            self.level().label(),
            tags.join(", "),
        );
        if self.logging_type == LoggingType::Today && self.timestamp.is_some() {
            summary.push_str(&format!("\n🕒 Logged at: {}", self.formatted_timestamp()));
        }
        summary
    }
}

//! Mood classification, feeling tags, sessions, and history.

mod color;
mod history;
mod level;
mod session;
pub mod tags;

pub use color::{color_weight, tint, Tint};
pub use history::{MoodHistory, MoodSample};
pub use level::MoodLevel;
pub use session::{LoggingSession, LoggingType};
pub use tags::{all_tags, level_for, recommended_tags};

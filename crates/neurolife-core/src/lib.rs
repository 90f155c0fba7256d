//! # NeuroLife Core Library
//!
//! This library provides the core logic for NeuroLife, a cognitive
//! lifestyle assistant. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any GUI
//! being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Mood**: rating-to-level classification, curated feeling tags,
//!   logging sessions with deterministic summaries, and mood history
//! - **Finance**: session-scoped expense/earning log
//! - **Chat**: placeholder echo assistant (no inference backend)
//! - **Storage**: TOML configuration and the JSON personal-info profile,
//!   both external to the domain modules
//!
//! ## Key Components
//!
//! - [`MoodLevel`]: five-category classification over the 1-10 rating scale
//! - [`LoggingSession`]: one mood-entry event and its summary
//! - [`FinanceLog`]: in-memory expense/earning ledger
//! - [`Config`]: application configuration management

pub mod chat;
pub mod error;
pub mod finance;
pub mod mood;
pub mod storage;

pub use chat::{Author, ChatLog, ChatMessage};
pub use error::{ConfigError, ValidationError};
pub use finance::{EntryKind, FinanceEntry, FinanceLog};
pub use mood::{
    color_weight, tint, LoggingSession, LoggingType, MoodHistory, MoodLevel, MoodSample, Tint,
};
pub use storage::{Config, MedicationEntry, Profile};

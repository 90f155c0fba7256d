//! Error types for neurolife-core.
//!
//! Mood classification itself is total and never fails; errors only arise
//! at the validation and storage seams.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration and profile store errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load a stored file
    #[error("Failed to load {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save a stored file
    #[error("Failed to save {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid value for a known key
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the store
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// Failed to parse stored content
    #[error("Failed to parse: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

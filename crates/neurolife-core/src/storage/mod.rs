//! On-disk stores: TOML app config and the personal-info profile.
//!
//! Domain modules never read these directly; session data is passed in as
//! plain parameters and these stores are owned by the outer application.

mod config;
mod profile;

pub use config::{ChatConfig, Config, MoodConfig, UiConfig};
pub use profile::{MedicationEntry, Profile};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/neurolife[-dev]/` based on NEUROLIFE_ENV.
///
/// Set NEUROLIFE_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("NEUROLIFE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("neurolife-dev")
    } else {
        base_dir.join("neurolife")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

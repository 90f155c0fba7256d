//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Mood slider bounds and step
//! - Theme and accent settings
//! - Chat display name
//!
//! Configuration is stored at `~/.config/neurolife/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;

/// Mood logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodConfig {
    #[serde(default = "default_slider_min")]
    pub slider_min: f64,
    #[serde(default = "default_slider_max")]
    pub slider_max: f64,
    #[serde(default = "default_slider_step")]
    pub slider_step: f64,
    #[serde(default = "default_rating")]
    pub default_rating: f64,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

/// Chat assistant configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/neurolife/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mood: MoodConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

// Default functions
fn default_slider_min() -> f64 {
    1.0
}
fn default_slider_max() -> f64 {
    10.0
}
fn default_slider_step() -> f64 {
    2.0
}
fn default_rating() -> f64 {
    5.0
}
fn default_true() -> bool {
    true
}
fn default_accent_color() -> String {
    "#3b82f6".into()
}
fn default_bot_name() -> String {
    "Bot".into()
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            slider_min: default_slider_min(),
            slider_max: default_slider_max(),
            slider_step: default_slider_step(),
            default_rating: default_rating(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            accent_color: default_accent_color(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mood: MoodConfig::default(),
            ui: UiConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let unknown = || ConfigError::UnknownKey(key.to_string());

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<f64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Number::from_f64(n)
                            .map(serde_json::Value::Number)
                            .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing the default there if absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk at the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key, in memory only. Returns error if the key
    /// is unknown or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Slider stops implied by min/max/step, e.g. 1, 3, 5, 7, 9.
    pub fn slider_stops(&self) -> Vec<f64> {
        let mut stops = Vec::new();
        if self.mood.slider_step <= 0.0 {
            return stops;
        }
        let mut v = self.mood.slider_min;
        while v <= self.mood.slider_max {
            stops.push(v);
            v += self.mood.slider_step;
        }
        stops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.mood.slider_step, 2.0);
        assert!(parsed.ui.dark_mode);
        assert_eq!(parsed.chat.bot_name, "Bot");
    }

    #[test]
    fn test_get_by_dot_path() {
        let cfg = Config::default();
        assert_eq!(cfg.get("mood.slider_step").as_deref(), Some("2.0"));
        assert_eq!(cfg.get("ui.accent_color").as_deref(), Some("#3b82f6"));
        assert_eq!(cfg.get("ui.nope"), None);
    }

    #[test]
    fn test_set_by_dot_path() {
        let mut cfg = Config::default();
        cfg.set("mood.default_rating", "7").unwrap();
        assert_eq!(cfg.mood.default_rating, 7.0);

        cfg.set("ui.dark_mode", "false").unwrap();
        assert!(!cfg.ui.dark_mode);

        assert!(cfg.set("mood.unknown", "1").is_err());
        assert!(cfg.set("ui.dark_mode", "banana").is_err());
    }

    #[test]
    fn test_load_from_missing_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.mood.slider_min, 1.0);
        assert!(path.exists());

        // Second load reads the file just written
        let again = Config::load_from(&path).unwrap();
        assert_eq!(again.mood.slider_max, 10.0);
    }

    #[test]
    fn test_load_from_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "mood = \"not a table\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_slider_stops() {
        let cfg = Config::default();
        assert_eq!(cfg.slider_stops(), vec![1.0, 3.0, 5.0, 7.0, 9.0]);

        let mut flat = Config::default();
        flat.mood.slider_step = 0.0;
        assert!(flat.slider_stops().is_empty());
    }
}

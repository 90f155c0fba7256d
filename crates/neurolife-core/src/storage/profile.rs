//! Personal-info profile: the externally-owned key-value store.
//!
//! Holds the emergency-info fields (name, age, gender, conditions,
//! allergies, medications) plus a medication schedule. Stored as JSON at
//! `~/.config/neurolife/profile.json`. Domain modules never read this;
//! the outer application passes whatever it needs as plain parameters.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::data_dir;
use crate::error::ConfigError;

/// Profile file name.
const PROFILE_FILE: &str = "profile.json";

/// A scheduled medication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationEntry {
    pub id: Uuid,
    pub name: String,
    pub time: DateTime<Utc>,
}

impl MedicationEntry {
    /// Create an entry with a fresh id.
    pub fn new(name: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            time,
        }
    }
}

/// Persisted personal information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub conditions: String,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub medications: String,
    #[serde(default)]
    pub medication_schedule: Vec<MedicationEntry>,
}

impl Profile {
    /// Keys accepted by [`Profile::get`] and [`Profile::set`].
    pub const KEYS: [&'static str; 6] =
        ["name", "age", "gender", "conditions", "allergies", "medications"];

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join(PROFILE_FILE))
    }

    /// Load the profile from disk, writing an empty one if absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => {
                let profile = Self::default();
                profile.save_to(path)?;
                Ok(profile)
            }
        }
    }

    /// Save the profile to disk at the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read a field by key name.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "name" => Some(&self.name),
            "age" => Some(&self.age),
            "gender" => Some(&self.gender),
            "conditions" => Some(&self.conditions),
            "allergies" => Some(&self.allergies),
            "medications" => Some(&self.medications),
            _ => None,
        }
    }

    /// Write a field by key name, in memory only.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let field = match key {
            "name" => &mut self.name,
            "age" => &mut self.age,
            "gender" => &mut self.gender,
            "conditions" => &mut self.conditions,
            "allergies" => &mut self.allergies,
            "medications" => &mut self.medications,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        *field = value.to_string();
        Ok(())
    }

    /// Add a medication to the schedule, returning its id.
    pub fn add_medication(&mut self, name: impl Into<String>, time: DateTime<Utc>) -> Uuid {
        let entry = MedicationEntry::new(name, time);
        let id = entry.id;
        self.medication_schedule.push(entry);
        id
    }

    /// Remove a medication by id. Returns true if one was removed.
    pub fn remove_medication(&mut self, id: Uuid) -> bool {
        let before = self.medication_schedule.len();
        self.medication_schedule.retain(|m| m.id != id);
        self.medication_schedule.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_fields() {
        let mut profile = Profile::default();
        profile.set("name", "Ada").unwrap();
        profile.set("allergies", "penicillin").unwrap();
        assert_eq!(profile.get("name"), Some("Ada"));
        assert_eq!(profile.get("allergies"), Some("penicillin"));
        assert_eq!(profile.get("shoe_size"), None);
        assert!(profile.set("shoe_size", "42").is_err());
    }

    #[test]
    fn test_medication_schedule() {
        let mut profile = Profile::default();
        let id = profile.add_medication("Ibuprofen", Utc::now());
        profile.add_medication("Melatonin", Utc::now());
        assert_eq!(profile.medication_schedule.len(), 2);

        assert!(profile.remove_medication(id));
        assert_eq!(profile.medication_schedule.len(), 1);
        assert!(!profile.remove_medication(id));
    }

    #[test]
    fn test_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");

        let mut profile = Profile::load_from(&path).unwrap();
        assert!(path.exists());

        profile.set("name", "Ada").unwrap();
        profile.add_medication("Ibuprofen", Utc::now());
        profile.save_to(&path).unwrap();

        let loaded = Profile::load_from(&path).unwrap();
        assert_eq!(loaded.name, "Ada");
        assert_eq!(loaded.medication_schedule.len(), 1);
        assert_eq!(loaded.medication_schedule[0].name, "Ibuprofen");
    }
}

//! TOML-based application configuration.
//!
//! Stores settings that are not part of the user's schedule document:
//! - Conflict detection tuning (turnaround threshold, same-venue exemption)
//! - Catalogue fixture location
//!
//! Configuration is stored at `~/.config/hkaff-schedule/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::schedule::ConflictPolicy;

/// Conflict detection configuration.
///
/// The 30-minute turnaround and the same-venue exemption are product
/// decisions, kept configurable rather than hard-coded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictsConfig {
    #[serde(default = "default_min_turnaround")]
    pub min_turnaround_minutes: i64,
    #[serde(default = "default_true")]
    pub same_venue_exempt: bool,
}

/// Catalogue data configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueConfig {
    /// Directory holding the four JSON fixture files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/hkaff-schedule/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub conflicts: ConflictsConfig,
    #[serde(default)]
    pub catalogue: CatalogueConfig,
}

// Default functions
fn default_min_turnaround() -> i64 {
    30
}
fn default_true() -> bool {
    true
}
fn default_data_dir() -> String {
    "data".into()
}

impl Default for ConflictsConfig {
    fn default() -> Self {
        Self {
            min_turnaround_minutes: default_min_turnaround(),
            same_venue_exempt: true,
        }
    }
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            conflicts: ConflictsConfig::default(),
            catalogue: CatalogueConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// The conflict policy derived from this configuration.
    pub fn conflict_policy(&self) -> ConflictPolicy {
        ConflictPolicy {
            min_turnaround_minutes: self.conflicts.min_turnaround_minutes,
            same_venue_exempt: self.conflicts.same_venue_exempt,
        }
    }
}

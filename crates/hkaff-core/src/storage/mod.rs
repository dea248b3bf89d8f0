mod config;
mod persistence;
mod store;

pub use config::Config;
pub use persistence::{SchedulePersistence, SCHEMA_VERSION};
pub use store::{FileStore, MemoryStore, Store};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/hkaff-schedule[-dev]/` based on HKAFF_ENV.
///
/// Set HKAFF_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HKAFF_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("hkaff-schedule-dev")
    } else {
        base_dir.join("hkaff-schedule")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::Unavailable(e.to_string()))?;
    Ok(dir)
}

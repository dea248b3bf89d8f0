//! Schedule document persistence.
//!
//! One JSON document, written in full on every mutation so a crash never
//! loses more than the in-flight change. Loading fails safe: an absent,
//! unparseable, wrong-shaped or version-mismatched document resets to a
//! fresh empty schedule and is never surfaced as a user-visible error --
//! the product behaves as if it were a first visit.

use crate::error::StorageError;
use crate::schedule::UserSchedule;

use super::Store;

/// Version of the persisted document shape. A stored document with any
/// other version is treated as corruption; migrations may replace the
/// reset once a second version exists.
pub const SCHEMA_VERSION: u32 = 1;

/// Serializes the user schedule to and from a [`Store`].
#[derive(Debug)]
pub struct SchedulePersistence<S: Store> {
    store: S,
}

impl<S: Store> SchedulePersistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted schedule, or a fresh empty one.
    ///
    /// Never fails and never panics; corruption recovery is silent.
    pub fn load(&self) -> UserSchedule {
        let raw = match self.store.read() {
            Ok(Some(raw)) => raw,
            Ok(None) | Err(_) => return UserSchedule::empty(),
        };

        match serde_json::from_str::<UserSchedule>(&raw) {
            Ok(schedule) if schedule.version == SCHEMA_VERSION => schedule,
            _ => UserSchedule::empty(),
        }
    }

    /// Write the full document synchronously.
    ///
    /// # Errors
    /// Returns an error if serialization or the underlying write fails.
    pub fn save(&self, schedule: &UserSchedule) -> Result<(), StorageError> {
        let raw = serde_json::to_string(schedule)?;
        self.store.write(&raw)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

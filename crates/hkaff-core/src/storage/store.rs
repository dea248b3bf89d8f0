//! The durable key-value seam.
//!
//! The persisted schedule is one JSON document behind a single logical key.
//! `Store` keeps the medium swappable: a file on disk in the shipping
//! configuration, an in-memory cell for tests and ephemeral runs.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Raw string storage for the single persisted schedule document.
pub trait Store {
    /// Read the stored document, `None` if nothing has been written yet.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored document.
    fn write(&self, raw: &str) -> Result<(), StorageError>;
}

impl<S: Store + ?Sized> Store for &S {
    fn read(&self) -> Result<Option<String>, StorageError> {
        (**self).read()
    }

    fn write(&self, raw: &str) -> Result<(), StorageError> {
        (**self).write(raw)
    }
}

/// File-backed store: one JSON file under the application data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The shipping location: `<data_dir>/schedule.json`.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be resolved.
    pub fn default_location() -> Result<Self, StorageError> {
        Ok(Self::new(super::data_dir()?.join("schedule.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for FileStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    fn write(&self, raw: &str) -> Result<(), StorageError> {
        std::fs::write(&self.path, raw).map_err(|e| StorageError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cell: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-seeded raw document (e.g. a corrupt one in tests).
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            cell: RefCell::new(Some(raw.into())),
        }
    }

    /// The raw document currently held, if any.
    pub fn raw(&self) -> Option<String> {
        self.cell.borrow().clone()
    }
}

impl Store for MemoryStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.cell.borrow().clone())
    }

    fn write(&self, raw: &str) -> Result<(), StorageError> {
        *self.cell.borrow_mut() = Some(raw.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_read_absent_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("schedule.json"));
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("schedule.json"));
        store.write("{\"version\":1}").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("{\"version\":1}"));
        store.write("{\"version\":2}").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("{\"version\":2}"));
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.read().unwrap().is_none());
        store.write("x").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("x"));
    }
}

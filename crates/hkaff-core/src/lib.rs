//! # HKAFF Schedule Core Library
//!
//! Core business logic for the HKAFF 2025 personal schedule builder: the
//! festival catalogue, the schedule engine with conflict detection, the
//! persisted schedule document and the Markdown exporter. The CLI (and any
//! other presentation layer) is a thin consumer of the [`App`] facade.
//!
//! ## Architecture
//!
//! - **Catalogue**: immutable films/screenings/venues/categories, loaded
//!   once from JSON fixtures with per-collection graceful failure
//! - **Schedule Engine**: owns the selection set, persists every mutation,
//!   derives the grouped view and the advisory conflict list on demand
//! - **Storage**: a narrow [`Store`] seam over the single persisted JSON
//!   document, plus TOML-based configuration
//! - **Export**: pure Markdown rendering in the active language
//!
//! ## Key Components
//!
//! - [`App`]: application state facade consumed by the UI layer
//! - [`ScheduleEngine`]: canonical selection set and derived views
//! - [`SchedulePersistence`]: schema-versioned, corruption-healing storage
//! - [`Config`]: application configuration management

pub mod app;
pub mod catalogue;
pub mod datetime;
pub mod error;
pub mod export;
pub mod schedule;
pub mod storage;

pub use app::App;
pub use catalogue::{Catalogue, Category, Film, Language, LocalizedText, Screening, Venue};
pub use error::{AlreadySelected, CatalogueError, CoreError, StorageError};
pub use export::{export_filename, export_markdown};
pub use schedule::{
    Conflict, ConflictPolicy, ConflictSeverity, DayGroup, Preferences, ScheduleEngine, Selection,
    UserSchedule,
};
pub use storage::{Config, FileStore, MemoryStore, SchedulePersistence, Store, SCHEMA_VERSION};

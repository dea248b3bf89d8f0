//! Application state facade.
//!
//! One explicitly constructed [`App`] instance per application lifetime
//! composes the catalogue, the schedule engine and persistence into the
//! state object and action set the presentation layer consumes. There is
//! no module-level singleton; the UI holds a reference to the instance it
//! was given.

use chrono::Utc;
use std::path::Path;

use crate::catalogue::{Catalogue, Category, Film, Language, Screening, Venue};
use crate::error::{CatalogueError, CoreError};
use crate::export;
use crate::schedule::{Conflict, ConflictPolicy, DayGroup, ScheduleEngine};
use crate::storage::Store;

/// The single application state object.
///
/// Catalogue loading is graceful per collection: a missing or invalid file
/// leaves that collection empty and records a non-fatal notice on the
/// error list instead of failing construction.
#[derive(Debug)]
pub struct App<S: Store> {
    catalogue: Catalogue,
    engine: ScheduleEngine<S>,
    errors: Vec<CatalogueError>,
}

impl<S: Store> App<S> {
    /// Load the four catalogue collections from `catalogue_dir` and seed
    /// the schedule engine from whatever the store holds.
    pub fn load(catalogue_dir: &Path, store: S, policy: ConflictPolicy) -> Self {
        let (catalogue, errors) = Catalogue::load_dir(catalogue_dir);
        let engine = ScheduleEngine::new(store, policy);
        Self {
            catalogue,
            engine,
            errors,
        }
    }

    // Catalogue accessors

    pub fn films(&self) -> &[Film] {
        self.catalogue.films()
    }

    pub fn screenings(&self) -> &[Screening] {
        self.catalogue.screenings()
    }

    pub fn venues(&self) -> &[Venue] {
        self.catalogue.venues()
    }

    pub fn categories(&self) -> &[Category] {
        self.catalogue.categories()
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Non-fatal problems recorded during catalogue loading, for display
    /// as notices.
    pub fn errors(&self) -> &[CatalogueError] {
        &self.errors
    }

    // Schedule actions

    /// Select a screening by id, snapshotting it and its film from the
    /// live catalogue.
    ///
    /// # Errors
    /// Fails when the screening or its film is not in the catalogue, or
    /// when the screening is already selected.
    pub fn select(&mut self, screening_id: &str) -> Result<(), CoreError> {
        let screening = self
            .catalogue
            .screening(screening_id)
            .ok_or_else(|| CoreError::UnknownScreening(screening_id.to_string()))?
            .clone();
        let film = self
            .catalogue
            .film(&screening.film_id)
            .ok_or_else(|| CoreError::UnknownFilm {
                screening_id: screening_id.to_string(),
                film_id: screening.film_id.clone(),
            })?
            .clone();
        self.engine.add_selection(&screening, &film)?;
        Ok(())
    }

    /// Remove a screening from the schedule; a no-op when not selected.
    pub fn unselect(&mut self, screening_id: &str) {
        self.engine.remove_selection(screening_id);
    }

    pub fn clear_all(&mut self) {
        self.engine.clear_all();
    }

    pub fn is_selected(&self, screening_id: &str) -> bool {
        self.engine.is_selected(screening_id)
    }

    pub fn selection_count(&self) -> usize {
        self.engine.selections().len()
    }

    /// The derived schedule view.
    pub fn grouped_schedule(&self) -> Vec<DayGroup> {
        self.engine.grouped_schedule()
    }

    /// Advisory conflicts between the current selections.
    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        self.engine.detect_conflicts()
    }

    // Language preference

    pub fn language(&self) -> Language {
        self.engine.language()
    }

    pub fn set_language(&mut self, language: Language) {
        self.engine.set_language(language);
    }

    // Export

    /// The schedule as Markdown in the active language.
    pub fn export_markdown(&self) -> String {
        export::export_markdown(
            &self.engine.grouped_schedule(),
            self.engine.language(),
            self.catalogue.venues(),
        )
    }

    /// Suggested download file name, dated at the export moment.
    pub fn export_filename(&self) -> String {
        export::export_filename(Utc::now().date_naive())
    }
}

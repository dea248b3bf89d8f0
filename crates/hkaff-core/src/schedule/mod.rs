//! The user's personal schedule.
//!
//! [`ScheduleEngine`] owns the canonical selection set and is the only
//! component allowed to mutate it. Every mutation is written through to the
//! store immediately; the grouped view and the conflict list are derived
//! fresh on demand, never cached and never persisted.

mod conflict;

pub use conflict::{Conflict, ConflictPolicy, ConflictSeverity};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalogue::{Film, Language, Screening};
use crate::datetime;
use crate::error::AlreadySelected;
use crate::storage::{SchedulePersistence, Store, SCHEMA_VERSION};

/// User preferences carried inside the persisted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Language,
}

/// One chosen screening, with snapshots of the film and screening taken at
/// selection time. The schedule and its export stay renderable even if the
/// catalogue changes or fails to reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub screening_id: String,
    pub added_at: DateTime<Utc>,
    pub film_snapshot: Film,
    pub screening_snapshot: Screening,
}

/// The persisted root document.
///
/// `selections` keeps insertion order for storage; display order is always
/// re-derived by [`ScheduleEngine::grouped_schedule`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSchedule {
    pub version: u32,
    pub selections: Vec<Selection>,
    pub preferences: Preferences,
}

impl UserSchedule {
    /// A first-visit schedule: current schema version, nothing selected,
    /// Traditional Chinese.
    pub fn empty() -> Self {
        Self {
            version: SCHEMA_VERSION,
            selections: Vec::new(),
            preferences: Preferences::default(),
        }
    }
}

/// One date of the derived schedule view, screenings sorted by start time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub screenings: Vec<Selection>,
}

/// Owns the selection set and computes all derived views.
///
/// The engine is a reducer over `(selections, action)`: add, remove and
/// clear are the only transitions, each followed by a synchronous save, so
/// replaying the same action sequence from the same stored state is
/// idempotent.
#[derive(Debug)]
pub struct ScheduleEngine<S: Store> {
    persistence: SchedulePersistence<S>,
    schedule: UserSchedule,
    policy: ConflictPolicy,
}

impl<S: Store> ScheduleEngine<S> {
    /// Build an engine seeded from whatever the store holds.
    pub fn new(store: S, policy: ConflictPolicy) -> Self {
        let persistence = SchedulePersistence::new(store);
        let schedule = persistence.load();
        Self {
            persistence,
            schedule,
            policy,
        }
    }

    /// Add a screening to the schedule, snapshotting the film and screening
    /// as they are now.
    ///
    /// # Errors
    /// Returns [`AlreadySelected`] (and mutates nothing) if the screening
    /// is already in the schedule. That is the sole failure mode.
    pub fn add_selection(
        &mut self,
        screening: &Screening,
        film: &Film,
    ) -> Result<(), AlreadySelected> {
        if self.is_selected(&screening.id) {
            return Err(AlreadySelected {
                screening_id: screening.id.clone(),
            });
        }

        self.schedule.selections.push(Selection {
            screening_id: screening.id.clone(),
            added_at: Utc::now(),
            film_snapshot: film.clone(),
            screening_snapshot: screening.clone(),
        });
        self.persist();
        Ok(())
    }

    /// Remove a screening from the schedule. A no-op, not an error, when
    /// the screening is not selected.
    pub fn remove_selection(&mut self, screening_id: &str) {
        let before = self.schedule.selections.len();
        self.schedule
            .selections
            .retain(|s| s.screening_id != screening_id);
        if self.schedule.selections.len() != before {
            self.persist();
        }
    }

    /// Drop every selection.
    pub fn clear_all(&mut self) {
        self.schedule.selections.clear();
        self.persist();
    }

    pub fn is_selected(&self, screening_id: &str) -> bool {
        self.schedule
            .selections
            .iter()
            .any(|s| s.screening_id == screening_id)
    }

    /// Selections in insertion order (the persisted order).
    pub fn selections(&self) -> &[Selection] {
        &self.schedule.selections
    }

    /// The derived schedule view: groups ascending by calendar date,
    /// screenings within a group ascending by start time, ties broken by
    /// screening id so the view is deterministic.
    pub fn grouped_schedule(&self) -> Vec<DayGroup> {
        let mut ordered = self.schedule.selections.clone();
        ordered.sort_by(|a, b| {
            a.screening_snapshot
                .start_datetime
                .cmp(&b.screening_snapshot.start_datetime)
                .then_with(|| a.screening_id.cmp(&b.screening_id))
        });

        datetime::group_by_date(&ordered, |s| s.screening_snapshot.start_datetime)
            .into_iter()
            .map(|(date, screenings)| DayGroup { date, screenings })
            .collect()
    }

    /// Advisory conflicts between the current selections. Conflicts never
    /// block or remove a selection.
    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        conflict::detect(&self.schedule.selections, &self.policy)
    }

    pub fn language(&self) -> Language {
        self.schedule.preferences.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.schedule.preferences.language = language;
        self.persist();
    }

    pub fn policy(&self) -> &ConflictPolicy {
        &self.policy
    }

    fn persist(&self) {
        // A failed write is not fatal; the next mutation rewrites the full
        // document anyway.
        let _ = self.persistence.save(&self.schedule);
    }
}

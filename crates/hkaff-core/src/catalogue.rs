//! Festival catalogue: films, screenings, venues and categories.
//!
//! The catalogue is immutable reference data produced by the scraping
//! pipeline as four JSON arrays. It is loaded once at startup; entries that
//! fail validation are skipped and counted rather than failing the load,
//! and a missing or unparseable file yields an empty collection plus a
//! recorded notice.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::CatalogueError;

/// Display language for localized text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// Traditional Chinese
    #[default]
    #[serde(rename = "tc")]
    Tc,
    /// English
    #[serde(rename = "en")]
    En,
}

impl Language {
    /// Parse a language code ("tc" / "en").
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "tc" => Some(Self::Tc),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Tc => "tc",
            Self::En => "en",
        }
    }
}

/// A string carried in both festival languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub tc: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(tc: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            tc: tc.into(),
            en: en.into(),
        }
    }

    /// Text in the given language.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Tc => &self.tc,
            Language::En => &self.en,
        }
    }
}

/// A film in the festival programme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: String,
    pub title: LocalizedText,
    pub synopsis: LocalizedText,
    pub director: String,
    pub country: String,
    pub runtime_minutes: u32,
    pub category_id: String,
    pub poster_url: String,
    pub detail_url: LocalizedText,
}

/// A festival venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: LocalizedText,
    pub address: LocalizedText,
}

/// A programme category. `sort_order` is unique across categories and
/// drives catalogue display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: LocalizedText,
    pub sort_order: u32,
}

/// A single scheduled showing of a film at a venue.
///
/// `start_datetime` is festival-local wall-clock time; the source data
/// carries no timezone offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screening {
    pub id: String,
    pub film_id: String,
    pub venue_id: String,
    pub start_datetime: NaiveDateTime,
    pub duration_minutes: u32,
}

impl Screening {
    /// End of the screening, derived from start + duration.
    pub fn end_datetime(&self) -> NaiveDateTime {
        self.start_datetime + chrono::Duration::minutes(i64::from(self.duration_minutes))
    }
}

/// Check an entity id against its `<prefix>-<digits>` format.
fn valid_id(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// The four loaded collections.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    films: Vec<Film>,
    screenings: Vec<Screening>,
    venues: Vec<Venue>,
    categories: Vec<Category>,
}

impl Catalogue {
    /// Load all four collections from a directory of JSON fixtures
    /// (`films.json`, `screenings.json`, `venues.json`, `categories.json`).
    ///
    /// Never fails: each collection degrades independently to empty, with
    /// the problem recorded in the returned error list.
    pub fn load_dir(dir: &Path) -> (Self, Vec<CatalogueError>) {
        let mut errors = Vec::new();

        let mut film_ids = HashSet::new();
        let films = load_collection(dir, "films.json", &mut errors, |film: &Film| {
            valid_id(&film.id, "film") && film.runtime_minutes > 0 && film_ids.insert(film.id.clone())
        });

        let mut screening_ids = HashSet::new();
        let screenings = load_collection(dir, "screenings.json", &mut errors, |s: &Screening| {
            valid_id(&s.id, "screening")
                && s.duration_minutes > 0
                && screening_ids.insert(s.id.clone())
        });

        let mut venue_ids = HashSet::new();
        let venues = load_collection(dir, "venues.json", &mut errors, |venue: &Venue| {
            valid_id(&venue.id, "venue") && venue_ids.insert(venue.id.clone())
        });

        let mut category_ids = HashSet::new();
        let mut sort_orders = HashSet::new();
        let mut categories = load_collection(dir, "categories.json", &mut errors, |c: &Category| {
            valid_id(&c.id, "category")
                && category_ids.insert(c.id.clone())
                && sort_orders.insert(c.sort_order)
        });
        categories.sort_by_key(|c| c.sort_order);

        (
            Self {
                films,
                screenings,
                venues,
                categories,
            },
            errors,
        )
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }

    pub fn screenings(&self) -> &[Screening] {
        &self.screenings
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    /// Categories in `sort_order`.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn film(&self, id: &str) -> Option<&Film> {
        self.films.iter().find(|f| f.id == id)
    }

    pub fn screening(&self, id: &str) -> Option<&Screening> {
        self.screenings.iter().find(|s| s.id == id)
    }

    pub fn venue(&self, id: &str) -> Option<&Venue> {
        self.venues.iter().find(|v| v.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

/// Load one collection file, skipping entries that fail typed
/// deserialization or the `keep` invariant check.
fn load_collection<T, F>(
    dir: &Path,
    file: &str,
    errors: &mut Vec<CatalogueError>,
    mut keep: F,
) -> Vec<T>
where
    T: serde::de::DeserializeOwned,
    F: FnMut(&T) -> bool,
{
    let collection = file.trim_end_matches(".json").to_string();
    let raw = match std::fs::read_to_string(dir.join(file)) {
        Ok(raw) => raw,
        Err(e) => {
            errors.push(CatalogueError::CollectionUnavailable {
                collection,
                message: e.to_string(),
            });
            return Vec::new();
        }
    };

    let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(e) => {
            errors.push(CatalogueError::CollectionUnavailable {
                collection,
                message: e.to_string(),
            });
            return Vec::new();
        }
    };

    let mut entries = Vec::with_capacity(values.len());
    let mut skipped = 0;
    for value in values {
        match serde_json::from_value::<T>(value) {
            Ok(entry) if keep(&entry) => entries.push(entry),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        errors.push(CatalogueError::SkippedEntries { collection, count: skipped });
    }
    entries
}

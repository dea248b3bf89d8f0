//! Facade-level integration tests against a real catalogue fixture
//! directory and a swappable store.

use std::path::Path;

use hkaff_core::{App, CatalogueError, ConflictPolicy, ConflictSeverity, CoreError, Language, MemoryStore};

fn write_catalogue(dir: &Path) {
    std::fs::write(
        dir.join("films.json"),
        r#"[
            {"id":"film-1","title":{"tc":"花樣年華","en":"In the Mood for Love"},
             "synopsis":{"tc":"","en":""},"director":"Wong Kar-wai","country":"Hong Kong",
             "runtimeMinutes":98,"categoryId":"category-1","posterUrl":"",
             "detailUrl":{"tc":"","en":""}},
            {"id":"film-2","title":{"tc":"重慶森林","en":"Chungking Express"},
             "synopsis":{"tc":"","en":""},"director":"Wong Kar-wai","country":"Hong Kong",
             "runtimeMinutes":102,"categoryId":"category-1","posterUrl":"",
             "detailUrl":{"tc":"","en":""}}
        ]"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("screenings.json"),
        r#"[
            {"id":"screening-1","filmId":"film-1","venueId":"venue-1",
             "startDatetime":"2025-03-14T19:00:00","durationMinutes":120},
            {"id":"screening-2","filmId":"film-2","venueId":"venue-2",
             "startDatetime":"2025-03-14T20:00:00","durationMinutes":120},
            {"id":"screening-3","filmId":"film-2","venueId":"venue-2",
             "startDatetime":"2025-03-15T14:00:00","durationMinutes":102}
        ]"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("venues.json"),
        r#"[
            {"id":"venue-1","name":{"tc":"百老匯電影中心","en":"Broadway Cinematheque"},
             "address":{"tc":"","en":""}},
            {"id":"venue-2","name":{"tc":"英皇戲院","en":"Emperor Cinemas"},
             "address":{"tc":"","en":""}}
        ]"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("categories.json"),
        r#"[{"id":"category-1","name":{"tc":"開幕電影","en":"Opening Films"},"sortOrder":0}]"#,
    )
    .unwrap();
}

fn app_with_fixtures(dir: &Path) -> App<MemoryStore> {
    write_catalogue(dir);
    App::load(dir, MemoryStore::new(), ConflictPolicy::default())
}

#[test]
fn loads_all_four_collections_without_errors() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_fixtures(dir.path());
    assert_eq!(app.films().len(), 2);
    assert_eq!(app.screenings().len(), 3);
    assert_eq!(app.venues().len(), 2);
    assert_eq!(app.categories().len(), 1);
    assert!(app.errors().is_empty());
}

#[test]
fn missing_collection_degrades_to_empty_with_a_notice() {
    let dir = tempfile::tempdir().unwrap();
    write_catalogue(dir.path());
    std::fs::remove_file(dir.path().join("categories.json")).unwrap();

    let app = App::load(dir.path(), MemoryStore::new(), ConflictPolicy::default());
    assert!(app.categories().is_empty());
    assert_eq!(app.films().len(), 2);
    assert!(app.errors().iter().any(|e| matches!(
        e,
        CatalogueError::CollectionUnavailable { collection, .. } if collection == "categories"
    )));
}

#[test]
fn select_resolves_snapshots_from_the_catalogue() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_fixtures(dir.path());

    app.select("screening-1").unwrap();
    assert!(app.is_selected("screening-1"));

    let groups = app.grouped_schedule();
    assert_eq!(groups.len(), 1);
    let selection = &groups[0].screenings[0];
    assert_eq!(selection.film_snapshot.title.en, "In the Mood for Love");
    assert_eq!(selection.screening_snapshot.venue_id, "venue-1");
}

#[test]
fn selecting_twice_reports_duplicate_and_keeps_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_fixtures(dir.path());

    app.select("screening-1").unwrap();
    let err = app.select("screening-1").unwrap_err();
    assert!(matches!(err, CoreError::AlreadySelected(_)));
    assert_eq!(app.selection_count(), 1);
}

#[test]
fn selecting_an_unknown_screening_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_fixtures(dir.path());
    let err = app.select("screening-404").unwrap_err();
    assert!(matches!(err, CoreError::UnknownScreening(_)));
}

#[test]
fn overlapping_selections_surface_an_impossible_conflict() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_fixtures(dir.path());
    app.select("screening-1").unwrap();
    app.select("screening-2").unwrap();

    let conflicts = app.detect_conflicts();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].severity, ConflictSeverity::Impossible);
    assert_eq!(conflicts[0].overlap_minutes, 60);

    // Advisory only: both stay selected.
    assert_eq!(app.selection_count(), 2);
}

#[test]
fn export_uses_the_active_language() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_fixtures(dir.path());
    app.select("screening-1").unwrap();

    assert_eq!(app.language(), Language::Tc);
    let doc = app.export_markdown();
    assert!(doc.contains("# My HKAFF 2025 Schedule"));
    assert!(doc.contains("## 3月14日"));
    assert!(doc.contains("**場地**: 百老匯電影中心"));
    assert!(doc.contains("花樣年華"));

    app.set_language(Language::En);
    let doc = app.export_markdown();
    assert!(doc.contains("## Friday, March 14"));
    assert!(doc.contains("**Venue**: Broadway Cinematheque"));
    assert!(doc.contains("In the Mood for Love"));
}

#[test]
fn export_groups_two_dates_with_all_screenings() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_fixtures(dir.path());
    app.select("screening-1").unwrap();
    app.select("screening-3").unwrap();

    let doc = app.export_markdown();
    assert_eq!(doc.matches("\n## ").count(), 2);
    assert_eq!(doc.matches("\n### ").count(), 2);
}

#[test]
fn clear_all_empties_the_schedule() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_fixtures(dir.path());
    app.select("screening-1").unwrap();
    app.select("screening-3").unwrap();
    app.clear_all();
    assert_eq!(app.selection_count(), 0);
    assert!(app.grouped_schedule().is_empty());
    assert_eq!(app.export_markdown(), "尚未選擇任何場次\n");
}

#[test]
fn export_filename_is_dated() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_fixtures(dir.path());
    let name = app.export_filename();
    assert!(name.starts_with("hkaff-2025-schedule-"));
    assert!(name.ends_with(".md"));
    // hkaff-2025-schedule-YYYY-MM-DD.md
    assert_eq!(name.len(), "hkaff-2025-schedule-".len() + 10 + 3);
}

#[test]
fn schedule_outlives_the_catalogue() {
    // Snapshots keep the schedule renderable when the catalogue fails to
    // reload on a later visit.
    let dir = tempfile::tempdir().unwrap();
    let store = MemoryStore::new();
    {
        write_catalogue(dir.path());
        let mut app = App::load(dir.path(), &store, ConflictPolicy::default());
        app.select("screening-1").unwrap();
    }

    let empty_dir = tempfile::tempdir().unwrap();
    let app = App::load(empty_dir.path(), &store, ConflictPolicy::default());
    assert_eq!(app.errors().len(), 4);
    assert_eq!(app.selection_count(), 1);

    let doc = app.export_markdown();
    assert!(doc.contains("花樣年華"));
    // Venue name falls back to the id without the catalogue.
    assert!(doc.contains("**場地**: venue-1"));
}

//! Markdown export of the grouped schedule.
//!
//! Pure rendering: the same grouped schedule and language always produce a
//! byte-identical document. Venue names are resolved from the catalogue
//! when possible and fall back to the raw venue id, so export keeps working
//! on a stale or partially loaded catalogue.

use chrono::{NaiveDate, NaiveTime};

use crate::catalogue::{Language, Venue};
use crate::datetime::{format_date, format_time};
use crate::schedule::DayGroup;

/// Language-invariant product heading.
const TITLE: &str = "# My HKAFF 2025 Schedule";

fn empty_state(language: Language) -> &'static str {
    match language {
        Language::Tc => "尚未選擇任何場次",
        Language::En => "No selections yet",
    }
}

fn venue_label(language: Language) -> &'static str {
    match language {
        Language::Tc => "場地",
        Language::En => "Venue",
    }
}

fn duration_label(language: Language) -> &'static str {
    match language {
        Language::Tc => "片長",
        Language::En => "Duration",
    }
}

fn director_label(language: Language) -> &'static str {
    match language {
        Language::Tc => "導演",
        Language::En => "Director",
    }
}

fn minutes_unit(language: Language) -> &'static str {
    match language {
        Language::Tc => "分鐘",
        Language::En => "minutes",
    }
}

/// Render the grouped schedule as a Markdown document.
///
/// An empty schedule renders the localized empty-state line only. Otherwise
/// the document carries the product heading, one `##` per date group in the
/// given (ascending) order, and one `###` per screening headed by its start
/// time.
pub fn export_markdown(groups: &[DayGroup], language: Language, venues: &[Venue]) -> String {
    if groups.iter().all(|g| g.screenings.is_empty()) {
        return format!("{}\n", empty_state(language));
    }

    let mut doc = String::new();
    doc.push_str(TITLE);
    doc.push('\n');

    for group in groups {
        let heading_ts = group.date.and_time(NaiveTime::MIN);
        doc.push_str(&format!("\n## {}\n", format_date(heading_ts, language)));

        for selection in &group.screenings {
            let screening = &selection.screening_snapshot;
            let film = &selection.film_snapshot;
            let venue_name = venues
                .iter()
                .find(|v| v.id == screening.venue_id)
                .map(|v| v.name.get(language).to_string())
                .unwrap_or_else(|| screening.venue_id.clone());

            doc.push_str(&format!(
                "\n### {}\n\n",
                format_time(screening.start_datetime)
            ));
            doc.push_str(&format!("**{}**: {}\n", venue_label(language), venue_name));
            doc.push_str(&format!(
                "**{}**: {} {}\n",
                duration_label(language),
                screening.duration_minutes,
                minutes_unit(language)
            ));
            doc.push_str(&format!(
                "**{}**: {}\n",
                director_label(language),
                film.director
            ));
            doc.push_str(&format!("\n{}\n", film.title.get(language)));
        }
    }

    doc
}

/// File name offered for download: `hkaff-2025-schedule-<YYYY-MM-DD>.md`,
/// dated at the export moment.
pub fn export_filename(date: NaiveDate) -> String {
    format!("hkaff-2025-schedule-{}.md", date.format("%Y-%m-%d"))
}

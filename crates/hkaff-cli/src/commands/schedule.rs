use std::collections::HashSet;

use chrono::NaiveTime;
use clap::Subcommand;
use hkaff_core::datetime::{format_date, format_time};
use hkaff_core::ConflictSeverity;

use crate::common;

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Show the grouped schedule with conflicts flagged
    Show,
    /// Select a screening by id
    Add {
        /// Screening id, e.g. screening-123
        screening_id: String,
    },
    /// Remove a screening from the schedule
    Remove {
        /// Screening id, e.g. screening-123
        screening_id: String,
    },
    /// Remove every selection
    Clear,
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = common::load_app()?;
    match action {
        ScheduleAction::Show => {
            let groups = app.grouped_schedule();
            if groups.is_empty() {
                println!("schedule is empty");
                return Ok(());
            }

            let conflicts = app.detect_conflicts();
            let conflicted: HashSet<&str> = conflicts
                .iter()
                .flat_map(|c| [c.screening_id_a.as_str(), c.screening_id_b.as_str()])
                .collect();

            let language = app.language();
            for group in &groups {
                println!(
                    "{}",
                    format_date(group.date.and_time(NaiveTime::MIN), language)
                );
                for selection in &group.screenings {
                    let flag = if conflicted.contains(selection.screening_id.as_str()) {
                        "  !"
                    } else {
                        ""
                    };
                    println!(
                        "  {}  {} [{}]{}",
                        format_time(selection.screening_snapshot.start_datetime),
                        selection.film_snapshot.title.get(language),
                        selection.screening_id,
                        flag
                    );
                }
            }
        }
        ScheduleAction::Add { screening_id } => {
            app.select(&screening_id)?;
            println!("added {screening_id}");

            let impossible = app
                .detect_conflicts()
                .iter()
                .filter(|c| c.severity == ConflictSeverity::Impossible)
                .count();
            if impossible > 0 {
                eprintln!(
                    "warning: {impossible} impossible conflict(s), run `hkaff-cli conflicts`"
                );
            }
        }
        ScheduleAction::Remove { screening_id } => {
            app.unselect(&screening_id);
            println!("removed {screening_id}");
        }
        ScheduleAction::Clear => {
            app.clear_all();
            println!("schedule cleared");
        }
    }
    Ok(())
}

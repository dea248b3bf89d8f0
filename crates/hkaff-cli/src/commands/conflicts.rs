use hkaff_core::ConflictSeverity;

use crate::common;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let app = common::load_app()?;
    let conflicts = app.detect_conflicts();
    if conflicts.is_empty() {
        println!("no conflicts");
        return Ok(());
    }

    for conflict in &conflicts {
        match conflict.severity {
            ConflictSeverity::Impossible => println!(
                "impossible  {} / {}  overlap {} min",
                conflict.screening_id_a, conflict.screening_id_b, conflict.overlap_minutes
            ),
            ConflictSeverity::Warning => println!(
                "warning     {} / {}  gap {} min",
                conflict.screening_id_a, conflict.screening_id_b, conflict.overlap_minutes
            ),
        }
    }
    Ok(())
}

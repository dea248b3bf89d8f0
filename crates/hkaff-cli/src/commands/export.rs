use std::path::PathBuf;

use crate::common;

pub fn run(output: Option<PathBuf>, save: bool) -> Result<(), Box<dyn std::error::Error>> {
    let app = common::load_app()?;
    let document = app.export_markdown();

    let target = if save {
        Some(PathBuf::from(app.export_filename()))
    } else {
        output
    };

    match target {
        Some(path) => {
            std::fs::write(&path, &document)?;
            println!("exported to {}", path.display());
        }
        None => print!("{document}"),
    }
    Ok(())
}

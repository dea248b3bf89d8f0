use std::path::Path;

use hkaff_core::{App, Config, FileStore};

/// Build the application facade from the configured catalogue directory
/// and the default schedule store. Catalogue notices go to stderr; they
/// are non-fatal by design.
pub fn load_app() -> Result<App<FileStore>, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = FileStore::default_location()?;
    let app = App::load(
        Path::new(&config.catalogue.data_dir),
        store,
        config.conflict_policy(),
    );
    for notice in app.errors() {
        eprintln!("notice: {notice}");
    }
    Ok(app)
}

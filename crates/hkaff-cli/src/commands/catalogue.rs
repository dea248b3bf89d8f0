use clap::Subcommand;

use crate::common;

#[derive(Subcommand)]
pub enum CatalogueAction {
    /// List films
    Films,
    /// List screenings
    Screenings,
    /// List venues
    Venues,
    /// List categories in display order
    Categories,
}

pub fn run(action: CatalogueAction) -> Result<(), Box<dyn std::error::Error>> {
    let app = common::load_app()?;
    let json = match action {
        CatalogueAction::Films => serde_json::to_string_pretty(app.films())?,
        CatalogueAction::Screenings => serde_json::to_string_pretty(app.screenings())?,
        CatalogueAction::Venues => serde_json::to_string_pretty(app.venues())?,
        CatalogueAction::Categories => serde_json::to_string_pretty(app.categories())?,
    };
    println!("{json}");
    Ok(())
}

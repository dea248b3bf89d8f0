use clap::Subcommand;
use hkaff_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Set the catalogue fixture directory
    SetDataDir {
        /// Directory holding the four JSON fixture files
        dir: String,
    },
    /// Set the minimum turnaround between venues before a warning
    SetTurnaround {
        /// Minutes
        minutes: i64,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::SetDataDir { dir } => {
            let mut config = Config::load_or_default();
            config.catalogue.data_dir = dir;
            config.save()?;
            println!("catalogue data dir updated");
        }
        ConfigAction::SetTurnaround { minutes } => {
            let mut config = Config::load_or_default();
            config.conflicts.min_turnaround_minutes = minutes;
            config.save()?;
            println!("turnaround threshold updated");
        }
    }
    Ok(())
}

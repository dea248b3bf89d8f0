use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "hkaff-cli", version, about = "HKAFF 2025 schedule builder CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the festival catalogue
    Catalogue {
        #[command(subcommand)]
        action: commands::catalogue::CatalogueAction,
    },
    /// Personal schedule management
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// List conflicts between selected screenings
    Conflicts,
    /// Export the schedule as Markdown
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
        /// Write to the default dated file name in the current directory
        #[arg(long, conflicts_with = "output")]
        save: bool,
    },
    /// Display language
    Lang {
        #[command(subcommand)]
        action: commands::lang::LangAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Catalogue { action } => commands::catalogue::run(action),
        Commands::Schedule { action } => commands::schedule::run(action),
        Commands::Conflicts => commands::conflicts::run(),
        Commands::Export { output, save } => commands::export::run(output, save),
        Commands::Lang { action } => commands::lang::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

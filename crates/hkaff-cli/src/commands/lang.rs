use clap::Subcommand;
use hkaff_core::Language;

use crate::common;

#[derive(Subcommand)]
pub enum LangAction {
    /// Show the current display language
    Get,
    /// Set the display language (tc or en)
    Set {
        /// Language code: tc or en
        code: String,
    },
}

pub fn run(action: LangAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        LangAction::Get => {
            let app = common::load_app()?;
            println!("{}", app.language().code());
        }
        LangAction::Set { code } => {
            let language = Language::from_code(&code)
                .ok_or_else(|| format!("unknown language '{code}', expected tc or en"))?;
            let mut app = common::load_app()?;
            app.set_language(language);
            println!("language set to {}", language.code());
        }
    }
    Ok(())
}

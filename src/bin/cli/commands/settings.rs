use anyhow::Result;

use jarman_lib::settings::Language;
use jarman_lib::VocabularyNav;

use super::saved;
use crate::app::App;
use crate::OutputFormat;

/// Print the current level, or switch to a new one
pub fn run_level(app: &App, level: Option<&str>, format: &OutputFormat) -> Result<()> {
    let level = match level {
        Some(level) => {
            let level = app.check_level(level)?;
            let settings = app.progress.settings();
            let mut nav = VocabularyNav::default();
            saved(nav.change_level(&settings, &level), "level")?
        }
        None => app.current_level()?,
    };

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "level": level });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => println!("{}", level),
    }

    Ok(())
}

/// Print the interface language, or switch it
pub fn run_language(app: &App, language: Option<Language>, format: &OutputFormat) -> Result<()> {
    let settings = app.progress.settings();
    let language = match language {
        Some(language) => saved(settings.set_language(language), "language")?,
        None => settings.language(),
    };

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "language": language, "rtl": language.is_rtl() });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => println!("{}", language),
    }

    Ok(())
}

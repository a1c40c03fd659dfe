use anyhow::{Context, Result};

use jarman_lib::progress::{CustomWordEntry, NewCustomWord};
use jarman_lib::settings::Language;

use super::saved;
use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run_add(
    app: &App,
    word: String,
    translation_en: Option<String>,
    translation_fa: Option<String>,
    note: Option<String>,
    format: &OutputFormat,
) -> Result<()> {
    let input = NewCustomWord {
        word,
        translation_en,
        translation_fa,
        note,
    };
    let persisted = app
        .progress
        .add_custom_word(input)
        .context("Invalid custom word")?;
    let entry = saved(persisted, "custom words")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        OutputFormat::Plain => {
            println!("Added {} ({})", entry.word, entry.id);
        }
    }

    Ok(())
}

pub fn run_remove(app: &App, id: &str, format: &OutputFormat) -> Result<()> {
    let removed = saved(app.progress.remove_custom_word(id), "custom words")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "id": id, "removed": removed });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if removed {
                println!("Removed {}", id);
            } else {
                println!("No custom word with id {}", id);
            }
        }
    }

    Ok(())
}

pub fn run_list(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let words = app.progress.custom_words();
    let language = app.progress.settings().language();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&words)?);
        }
        OutputFormat::Plain => {
            if words.is_empty() {
                println!("No custom words yet.");
                return Ok(());
            }

            for entry in &words {
                println!("{}", custom_word_line(entry, language, use_color));
            }

            println!("\n{} words", words.len());
        }
    }

    Ok(())
}

pub(crate) fn custom_word_line(entry: &CustomWordEntry, language: Language, use_color: bool) -> String {
    let translation = match language {
        Language::Fa => entry.translation_fa.as_deref().or(entry.translation_en.as_deref()),
        Language::En => entry.translation_en.as_deref().or(entry.translation_fa.as_deref()),
    };
    let mut line = paint(&entry.word, Color::BOLD, use_color);
    if let Some(t) = translation {
        line.push_str(&format!(" - {}", t));
    }
    if let Some(note) = &entry.note {
        line.push_str(&paint(&format!(" [{}]", note), Color::DIM, use_color));
    }
    line.push_str(&paint(&format!(" ({})", entry.id), Color::GRAY, use_color));
    line
}

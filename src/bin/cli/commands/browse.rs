use anyhow::Result;

use jarman_lib::catalog::ALL_CATEGORY;
use jarman_lib::{NavState, VocabularyNav, VocabularyTab, WordFilter};

use super::words::custom_word_line;
use crate::app::App;
use crate::render::terminal::{category_line, paint, word_line, Color};
use crate::OutputFormat;

pub fn run(
    app: &App,
    tab: VocabularyTab,
    category: Option<&str>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let nav = VocabularyNav::new(NavState::new(tab, category.map(str::to_string)));
    if category.is_some() && nav.category_id().is_none() {
        log::warn!("--category is ignored on the {} tab", nav.tab());
    }

    if nav.show_categories() {
        show_categories(app, &nav, format, use_color)
    } else {
        show_words(app, &nav, format, use_color)
    }
}

fn show_categories(app: &App, nav: &VocabularyNav, format: &OutputFormat, use_color: bool) -> Result<()> {
    let level = app.current_level()?;
    let stats = app.catalog()?.category_stats(&level, &app.progress.learned());

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "state": nav.state(),
                "level": level,
                "categories": stats,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", paint(&format!("Level {}", level), Color::BOLD, use_color));
            let width = stats.iter().map(|s| s.label.chars().count()).max().unwrap_or(3);
            for stat in &stats {
                println!("{}", category_line(stat, width, use_color));
            }
        }
    }

    Ok(())
}

fn show_words(app: &App, nav: &VocabularyNav, format: &OutputFormat, use_color: bool) -> Result<()> {
    let filter = nav.active_filter();
    let progress = &app.progress;
    let language = progress.settings().language();

    if filter == WordFilter::MyWords {
        let words = progress.custom_words();
        match format {
            OutputFormat::Json => {
                let output = serde_json::json!({ "state": nav.state(), "words": words });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Plain => {
                if words.is_empty() {
                    println!("No custom words yet.");
                }
                for entry in &words {
                    println!("{}", custom_word_line(entry, language, use_color));
                }
            }
        }
        return Ok(());
    }

    let level = app.current_level()?;
    let marked = progress.marked();
    let words = app.catalog()?.filtered_words(&level, &filter, &marked);

    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = words
                .iter()
                .map(|w| {
                    serde_json::json!({
                        "word": w,
                        "status": progress.status(&w.id),
                        "marked": marked.contains(&w.id),
                    })
                })
                .collect();
            let output = serde_json::json!({
                "state": nav.state(),
                "level": level,
                "words": rows,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let heading = match &filter {
                WordFilter::Category(id) => id.as_str(),
                WordFilter::Marked => "Marked",
                _ => ALL_CATEGORY,
            };
            println!("{}", paint(&format!("{} ({})", heading, level), Color::BOLD, use_color));
            if words.is_empty() {
                println!("No words.");
            }
            for word in &words {
                let status = progress.status(&word.id);
                println!("{}", word_line(word, status, marked.contains(&word.id), language, use_color));
            }
        }
    }

    Ok(())
}

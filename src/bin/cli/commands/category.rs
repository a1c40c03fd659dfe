use anyhow::{bail, Result};

use jarman_lib::catalog::ALL_CATEGORY;

use super::saved;
use crate::app::App;
use crate::OutputFormat;

/// Word ids of a category in the current level
fn category_ids(app: &App, category: &str) -> Result<(String, Vec<String>)> {
    let catalog = app.catalog()?;
    let level = app.current_level()?;
    if category != ALL_CATEGORY && !catalog.categories(&level).iter().any(|c| c == category) {
        bail!("No category '{}' in level {}", category, level);
    }
    let ids = catalog.category_ids(&level, category);
    Ok((level, ids))
}

pub fn run_mastered(app: &App, category: &str, format: &OutputFormat) -> Result<()> {
    let (level, ids) = category_ids(app, category)?;
    let added = saved(app.progress.mark_category_mastered(&ids), "learned words")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "level": level,
                "category": category,
                "words": ids.len(),
                "newlyMastered": added,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "Marked {} words of {} ({}) as mastered, {} newly",
                ids.len(),
                category,
                level,
                added
            );
        }
    }

    Ok(())
}

pub fn run_reset(app: &App, category: &str, format: &OutputFormat) -> Result<()> {
    let (level, ids) = category_ids(app, category)?;
    let removed = saved(app.progress.reset_category(&ids), "category reset")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "level": level,
                "category": category,
                "words": ids.len(),
                "unlearned": removed,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Reset {} words of {} ({})", ids.len(), category, level);
        }
    }

    Ok(())
}

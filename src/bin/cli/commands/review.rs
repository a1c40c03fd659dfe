use anyhow::Result;

use jarman_lib::srs::algorithm::format_interval;
use jarman_lib::srs::{Clock, Difficulty, ReviewRecord};

use super::saved;
use super::status::format_timestamp;
use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run(
    app: &App,
    id: &str,
    difficulty: Difficulty,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let record = saved(app.progress.scheduler().schedule(id, difficulty), "review")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        OutputFormat::Plain => {
            println!(
                "Reviewed {} as {}; next review in {} ({})",
                paint(id, Color::BOLD, use_color),
                record.difficulty,
                format_interval(record.interval_ms()),
                format_timestamp(record.next_review_at()),
            );
        }
    }

    Ok(())
}

/// Due reviews for words that are not already mastered, longest overdue first
pub fn run_due(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let learned = app.progress.learned();
    let now_ms = app.progress.clock().now_ms();
    let due: Vec<ReviewRecord> = app
        .progress
        .scheduler()
        .due_reviews(now_ms)
        .into_iter()
        .filter(|r| !learned.contains(&r.item_id))
        .collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&due)?);
        }
        OutputFormat::Plain => {
            if due.is_empty() {
                println!("Nothing due.");
                return Ok(());
            }

            for record in &due {
                let title = app
                    .word(&record.item_id)
                    .map_or(record.item_id.as_str(), |w| w.word.as_str());
                println!(
                    "{:<24} {:<6} {}",
                    title,
                    record.difficulty.as_str(),
                    paint(
                        &format!("overdue {}", format_interval(now_ms - record.next_review)),
                        Color::GRAY,
                        use_color
                    ),
                );
            }

            println!("\n{} due", due.len());
        }
    }

    Ok(())
}

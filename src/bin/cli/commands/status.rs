use anyhow::Result;

use jarman_lib::progress::WordStatus;
use jarman_lib::srs::algorithm::format_interval;
use jarman_lib::srs::Clock;

use super::saved;
use crate::app::App;
use crate::render::terminal::{paint, status_label, Color};
use crate::OutputFormat;

pub fn run(app: &App, id: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let progress = &app.progress;
    let status = progress.status(id);
    let marked = progress.is_marked(id);
    let review = progress.scheduler().get_review_record(id);
    let now_ms = progress.clock().now_ms();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": id,
                "word": app.word(id),
                "status": status,
                "marked": marked,
                "review": review,
                "due": review.as_ref().map(|r| r.is_due(now_ms)),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let title = app.word(id).map_or(id, |w| w.word.as_str());
            println!("{}  {}", paint(title, Color::BOLD, use_color), status_label(status, use_color));
            if marked {
                println!("  marked");
            }
            if let Some(record) = review {
                let when = if record.is_due(now_ms) {
                    paint("due now", Color::RED, use_color)
                } else {
                    format!("in {}", format_interval(record.next_review - now_ms))
                };
                println!("  last review: {} ({})", record.difficulty, format_timestamp(record.last_reviewed_at()));
                println!("  next review: {}", when);
            }
        }
    }

    Ok(())
}

pub fn run_set(
    app: &App,
    id: &str,
    status: WordStatus,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let status = saved(app.progress.set_status(id, status), "word status")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "id": id, "status": status });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{} -> {}", id, paint(status.as_str(), Color::BOLD, use_color));
        }
    }

    Ok(())
}

pub fn run_mark(app: &App, id: &str, format: &OutputFormat) -> Result<()> {
    let marked = saved(app.progress.toggle_marked(id), "marked words")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "id": id, "marked": marked });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{} {}", if marked { "Marked" } else { "Unmarked" }, id);
        }
    }

    Ok(())
}

pub(crate) fn format_timestamp(at: Option<chrono::DateTime<chrono::Utc>>) -> String {
    at.map(|dt| dt.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let summary = app.progress.summary();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Plain => {
            let rows = [
                ("Mastered", summary.learned),
                ("In practice", summary.in_practice),
                ("Due now", summary.due),
                ("Marked", summary.marked),
                ("My words", summary.custom_words),
                ("Lessons", summary.completed_lessons),
                ("Grammar", summary.completed_grammar),
                ("Dialogues", summary.completed_dialogues),
            ];
            for (label, count) in rows {
                println!("{:<12} {}", label, paint(&count.to_string(), Color::BOLD, use_color));
            }
        }
    }

    Ok(())
}

use anyhow::{bail, Result};

use jarman_lib::catalog::CardCursor;
use jarman_lib::VocabularyNav;

use crate::app::App;
use crate::render::terminal::{paint, status_label, Color};
use crate::OutputFormat;

/// Show one flashcard of the current level, starting at `from` (or the first
/// card) and moving `step` cards with wrap-around.
pub fn run(
    app: &App,
    category: Option<&str>,
    from: Option<&str>,
    step: isize,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let level = app.current_level()?;
    let filter = VocabularyNav::from_deep_link(category).active_filter();
    let words = app
        .catalog()?
        .filtered_words(&level, &filter, &app.progress.marked());

    let mut cursor = CardCursor::starting_at(words.iter().map(|w| w.id.as_str()), from.unwrap_or(""));
    cursor.step(step);
    let word = match cursor.current(&words) {
        Some(word) => *word,
        None => bail!("No cards in level {}", level),
    };

    let status = app.progress.status(&word.id);
    let language = app.progress.settings().language();
    let mut peek = cursor;
    peek.next();
    let next_id = peek.current(&words).map(|w| w.id.as_str());

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "position": cursor.index() + 1,
                "total": cursor.len(),
                "word": word,
                "status": status,
                "next": next_id,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "[{}/{}] {}  {}",
                cursor.index() + 1,
                cursor.len(),
                paint(&word.word, Color::BOLD, use_color),
                status_label(status, use_color),
            );
            if let Some(translation) = word.translation(language) {
                println!("  {}", translation);
            }
            if let Some(example) = &word.example {
                println!("  {}", paint(example, Color::DIM, use_color));
            }
            println!(
                "{}",
                paint(
                    &format!("  id {} | next {}", word.id, next_id.unwrap_or("-")),
                    Color::GRAY,
                    use_color
                )
            );
        }
    }

    Ok(())
}

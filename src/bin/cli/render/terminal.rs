use jarman_lib::catalog::{CategoryStat, Word};
use jarman_lib::progress::WordStatus;
use jarman_lib::settings::Language;

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap `text` in a color code when colors are on
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

pub fn status_label(status: WordStatus, use_color: bool) -> String {
    let color = match status {
        WordStatus::New => Color::GRAY,
        WordStatus::Practice => Color::YELLOW,
        WordStatus::Mastered => Color::GREEN,
    };
    paint(&format!("{:<8}", status.as_str()), color, use_color)
}

/// One line per word: status, marker, word and translation
pub fn word_line(
    word: &Word,
    status: WordStatus,
    marked: bool,
    language: Language,
    use_color: bool,
) -> String {
    let marker = if marked { "*" } else { " " };
    let translation = word
        .translation(language)
        .map(|t| paint(&format!(" - {}", t), Color::DIM, use_color))
        .unwrap_or_default();
    format!(
        "{} {} {}{} {}",
        status_label(status, use_color),
        marker,
        paint(&word.word, Color::BOLD, use_color),
        translation,
        paint(&format!("({})", word.id), Color::GRAY, use_color),
    )
}

/// Ten-cell bar for a category's learned percentage
pub fn progress_bar(percent: u32, use_color: bool) -> String {
    let filled = (percent.min(100) as usize + 5) / 10;
    let bar = format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(10 - filled));
    paint(&bar, Color::GREEN, use_color)
}

pub fn category_line(stat: &CategoryStat, width: usize, use_color: bool) -> String {
    format!(
        "{:<width$} {} {:>3}%  {}/{}",
        stat.label,
        progress_bar(stat.percent, use_color),
        stat.percent,
        stat.learned,
        stat.count,
        width = width,
    )
}

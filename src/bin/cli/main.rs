mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use jarman_lib::progress::{CompletionKind, WordStatus};
use jarman_lib::settings::Language;
use jarman_lib::srs::Difficulty;
use jarman_lib::VocabularyTab;

#[derive(Parser)]
#[command(name = "jarman-cli", about = "Jarman vocabulary progress from the command line", version)]
struct Cli {
    /// Directory holding the progress files (overrides the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Word list file or directory of word lists
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Path to jarman.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Show the status and review schedule of a word
    Status {
        /// Word id
        id: String,
    },

    /// Record a flashcard review
    Review {
        /// Word id
        id: String,
        /// easy, medium or hard
        difficulty: Difficulty,
    },

    /// Move a word to new, practice or mastered
    SetStatus {
        /// Word id
        id: String,
        /// new, practice or mastered
        status: WordStatus,
    },

    /// Mark a word as mastered
    Learn {
        /// Word id
        id: String,
    },

    /// Toggle the bookmark on a word
    Mark {
        /// Word id
        id: String,
    },

    /// List reviews that are due now
    Due,

    /// Manage your own words
    #[command(subcommand)]
    Words(WordsCommand),

    /// Bulk actions on a category of the current level
    #[command(subcommand)]
    Category(CategoryCommand),

    /// Browse the vocabulary of the current level
    Browse {
        /// all, marked or my-words
        #[arg(long, default_value = "all")]
        tab: VocabularyTab,
        /// Open a category (only on the all tab)
        #[arg(long)]
        category: Option<String>,
    },

    /// Step through flashcards of the current level
    Cards {
        /// Only cards of this category
        #[arg(long)]
        category: Option<String>,
        /// Start at this word id (default: the first card)
        #[arg(long)]
        from: Option<String>,
        /// Cards to move from the start, negative to go back
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        step: isize,
    },

    /// Show or change the selected level
    Level {
        /// New level (A1, A2, B1, B2, C1)
        level: Option<String>,
    },

    /// Show or change the interface language
    Language {
        /// fa or en
        language: Option<Language>,
    },

    /// Toggle completion of a lesson, grammar topic or dialogue
    Complete {
        /// lesson, grammar or dialogue
        kind: CompletionKind,
        /// Item id
        id: String,
    },

    /// Overall progress counts
    Summary,
}

#[derive(Subcommand)]
enum WordsCommand {
    /// Add a custom word
    Add {
        /// The German word
        word: String,
        /// English translation
        #[arg(long)]
        en: Option<String>,
        /// Persian translation
        #[arg(long)]
        fa: Option<String>,
        /// Free-form note
        #[arg(long)]
        note: Option<String>,
    },

    /// Remove a custom word by id
    Remove {
        /// Custom word id
        id: String,
    },

    /// List custom words, newest first
    List,
}

#[derive(Subcommand)]
enum CategoryCommand {
    /// Mark every word of the category as mastered
    Mastered {
        /// Category id, or "all" for the whole level
        id: String,
    },

    /// Clear learned and review state for every word of the category
    Reset {
        /// Category id, or "all" for the whole level
        id: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let app = app::App::new(cli.config.as_deref(), cli.data_dir.as_deref(), cli.catalog.as_deref())?;
    let format = &cli.format;

    match cli.command {
        Command::Status { id } => commands::status::run(&app, &id, format, use_color)?,
        Command::Review { id, difficulty } => {
            commands::review::run(&app, &id, difficulty, format, use_color)?
        }
        Command::SetStatus { id, status } => {
            commands::status::run_set(&app, &id, status, format, use_color)?
        }
        Command::Learn { id } => {
            commands::status::run_set(&app, &id, WordStatus::Mastered, format, use_color)?
        }
        Command::Mark { id } => commands::status::run_mark(&app, &id, format)?,
        Command::Due => commands::review::run_due(&app, format, use_color)?,
        Command::Words(subcmd) => match subcmd {
            WordsCommand::Add { word, en, fa, note } => {
                commands::words::run_add(&app, word, en, fa, note, format)?
            }
            WordsCommand::Remove { id } => commands::words::run_remove(&app, &id, format)?,
            WordsCommand::List => commands::words::run_list(&app, format, use_color)?,
        },
        Command::Category(subcmd) => match subcmd {
            CategoryCommand::Mastered { id } => {
                commands::category::run_mastered(&app, &id, format)?
            }
            CategoryCommand::Reset { id } => commands::category::run_reset(&app, &id, format)?,
        },
        Command::Browse { tab, category } => {
            commands::browse::run(&app, tab, category.as_deref(), format, use_color)?
        }
        Command::Cards { category, from, step } => commands::cards::run(
            &app,
            category.as_deref(),
            from.as_deref(),
            step,
            format,
            use_color,
        )?,
        Command::Level { level } => commands::settings::run_level(&app, level.as_deref(), format)?,
        Command::Language { language } => {
            commands::settings::run_language(&app, language, format)?
        }
        Command::Complete { kind, id } => commands::complete::run(&app, kind, &id, format)?,
        Command::Summary => commands::summary::run(&app, format, use_color)?,
    }

    Ok(())
}

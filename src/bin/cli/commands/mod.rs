pub mod browse;
pub mod cards;
pub mod category;
pub mod complete;
pub mod review;
pub mod settings;
pub mod status;
pub mod summary;
pub mod words;

use anyhow::{Context, Result};
use jarman_lib::storage::Persisted;

/// A failed write is an error for the CLI: the user asked for a change and
/// it did not stick.
pub fn saved<T>(persisted: Persisted<T>, what: &str) -> Result<T> {
    persisted
        .into_result()
        .with_context(|| format!("Failed to save {}", what))
}

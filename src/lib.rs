//! Learner progress, spaced-repetition scheduling and vocabulary navigation
//! for the Jarman German trainer.
//!
//! Everything persists through a [`storage::KeyValueStore`] as one JSON value
//! per key. [`progress::ProgressStore`] is the entry point most callers need.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod navigation;
pub mod progress;
pub mod settings;
pub mod srs;
pub mod storage;

pub use catalog::{Catalog, Word};
pub use config::AppConfig;
pub use navigation::{NavState, VocabularyNav, VocabularyTab, WordFilter};
pub use progress::{ProgressStore, WordStatus};
pub use settings::{Language, Settings};
pub use srs::{Difficulty, ReviewRecord, ReviewScheduler};
pub use storage::{FileStore, JsonStore, KeyValueStore, MemoryStore, Persisted};

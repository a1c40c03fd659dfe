//! Local key/value persistence for learner progress
//!
//! Every piece of state is a single JSON value stored under a well-known key
//! (see [`keys`]). Backends implement [`KeyValueStore`] over raw strings;
//! [`JsonStore`] layers the safe-parse/fallback contract on top:
//! - reads never fail: unavailable storage, a missing key or a malformed
//!   payload all yield the caller's fallback
//! - writes replace the whole value of one key; a failed write is logged and
//!   leaves the previous value in place
//! - nothing is transactional across keys

mod file_storage;
mod json;
pub mod keys;
mod kv;

pub use file_storage::FileStore;
pub use json::{JsonStore, Persisted};
pub use kv::{KeyValueStore, MemoryStore, UnavailableStore};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable")]
    Unavailable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Quota exceeded writing {key}: {needed} bytes needed, limit is {limit}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

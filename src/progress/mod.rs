//! Learner progress ledgers
//!
//! Each ledger lives under its own storage key and is written through on
//! every change:
//! - learned: mastered words; marking a word learned drops its review record
//! - marked: bookmarked words, toggled independently of everything else
//! - custom words: newest-first list of words the learner entered
//! - completed lessons, grammar topics and dialogues
//!
//! Operations spanning two keys write them one after the other; there is no
//! rollback if the second write fails.

mod models;
mod storage;

pub use models::*;
pub use storage::{CompletionLedger, ProgressError, ProgressStore};

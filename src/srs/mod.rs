//! Spaced repetition for vocabulary items
//!
//! This module provides:
//! - Fixed-interval scheduling from a difficulty rating (easy 48h, medium 24h, hard 12h)
//! - Review record storage, one record per item under a single key
//! - An injectable clock so schedules are testable

pub mod algorithm;
mod clock;
pub mod models;
mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use models::*;
pub use storage::ReviewScheduler;

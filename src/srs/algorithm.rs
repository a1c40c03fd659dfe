//! Fixed-interval review scheduling
//!
//! Each rating maps to a constant delay added to the time of the review:
//! - easy: 48 hours
//! - medium: 24 hours
//! - hard: 12 hours
//!
//! There is no ease factor, streak or back-off; a new rating replaces the
//! previous schedule outright.

use super::models::{Difficulty, ReviewRecord};

const HOUR_MS: i64 = 60 * 60 * 1000;

pub const EASY_INTERVAL_MS: i64 = 48 * HOUR_MS;
pub const MEDIUM_INTERVAL_MS: i64 = 24 * HOUR_MS;
pub const HARD_INTERVAL_MS: i64 = 12 * HOUR_MS;

/// Delay until the next review for a rating
pub fn interval_ms(difficulty: Difficulty) -> i64 {
    match difficulty {
        Difficulty::Easy => EASY_INTERVAL_MS,
        Difficulty::Medium => MEDIUM_INTERVAL_MS,
        Difficulty::Hard => HARD_INTERVAL_MS,
    }
}

/// Build the record for an item rated at `now_ms`
pub fn schedule(item_id: &str, difficulty: Difficulty, now_ms: i64) -> ReviewRecord {
    ReviewRecord {
        item_id: item_id.to_string(),
        difficulty,
        last_reviewed: now_ms,
        next_review: now_ms + interval_ms(difficulty),
    }
}

/// Format an interval in milliseconds to a short human-readable string
pub fn format_interval(ms: i64) -> String {
    let hours = ms / HOUR_MS;
    if ms <= 0 {
        "now".to_string()
    } else if hours < 1 {
        format!("{}m", (ms / 60_000).max(1))
    } else if hours < 24 {
        format!("{}h", hours)
    } else if hours % 24 == 0 {
        format!("{}d", hours / 24)
    } else {
        format!("{}d {}h", hours / 24, hours % 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_constants() {
        assert_eq!(interval_ms(Difficulty::Easy), 172_800_000);
        assert_eq!(interval_ms(Difficulty::Medium), 86_400_000);
        assert_eq!(interval_ms(Difficulty::Hard), 43_200_000);
    }

    #[test]
    fn test_schedule_adds_exact_interval() {
        let now = 1_700_000_000_123;
        for difficulty in Difficulty::ALL {
            let record = schedule("w", difficulty, now);
            assert_eq!(record.last_reviewed, now);
            assert_eq!(record.next_review - record.last_reviewed, interval_ms(difficulty));
        }
    }

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(0), "now");
        assert_eq!(format_interval(90_000), "1m");
        assert_eq!(format_interval(HARD_INTERVAL_MS), "12h");
        assert_eq!(format_interval(MEDIUM_INTERVAL_MS), "1d");
        assert_eq!(format_interval(EASY_INTERVAL_MS), "2d");
        assert_eq!(format_interval(30 * HOUR_MS), "1d 6h");
    }
}

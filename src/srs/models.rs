//! Data models for the spaced repetition system

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ParseEnumError;

/// How hard the learner found an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseEnumError::new("difficulty", s, "easy, medium, hard")),
        }
    }
}

/// Scheduling state for one item. Timestamps are milliseconds since the Unix
/// epoch, the stored format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub item_id: String,
    pub difficulty: Difficulty,
    pub last_reviewed: i64,
    pub next_review: i64,
}

impl ReviewRecord {
    /// Check if the item is due for review at `now_ms`
    pub fn is_due(&self, now_ms: i64) -> bool {
        now_ms >= self.next_review
    }

    /// Scheduled gap between the last review and the next one
    pub fn interval_ms(&self) -> i64 {
        self.next_review - self.last_reviewed
    }

    pub fn last_reviewed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.last_reviewed)
    }

    pub fn next_review_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.next_review)
    }
}

/// All review records keyed by item id
pub type ReviewMap = BTreeMap<String, ReviewRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_shape() {
        let record = ReviewRecord {
            item_id: "a1-001".to_string(),
            difficulty: Difficulty::Hard,
            last_reviewed: 1_000,
            next_review: 43_201_000,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "itemId": "a1-001",
                "difficulty": "hard",
                "lastReviewed": 1_000,
                "nextReview": 43_201_000,
            })
        );
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" Hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_is_due() {
        let record = ReviewRecord {
            item_id: "x".to_string(),
            difficulty: Difficulty::Medium,
            last_reviewed: 0,
            next_review: 100,
        };
        assert!(!record.is_due(99));
        assert!(record.is_due(100));
        assert_eq!(record.interval_ms(), 100);
    }
}

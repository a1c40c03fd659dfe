//! Data models for learner progress

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseEnumError;
use crate::storage::keys;

/// A persisted set of item ids, stored as a map of id -> `true`.
///
/// Presence of a `true` entry is membership; a stray `false` entry is
/// treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagLedger(BTreeMap<String, bool>);

impl FlagLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    /// Add `id`; returns whether it was newly added
    pub fn insert(&mut self, id: &str) -> bool {
        self.0.insert(id.to_string(), true) != Some(true)
    }

    /// Remove `id`; returns whether it was present
    pub fn remove(&mut self, id: &str) -> bool {
        self.0.remove(id) == Some(true)
    }

    /// Flip membership of `id`; returns the new membership
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.insert(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.values().filter(|present| **present).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, present)| **present)
            .map(|(id, _)| id.as_str())
    }
}

impl<T: AsRef<str>> FromIterator<T> for FlagLedger {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ledger = Self::new();
        for id in iter {
            ledger.insert(id.as_ref());
        }
        ledger
    }
}

/// Learning status of a word, derived from the ledgers and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    New,
    Practice,
    Mastered,
}

impl WordStatus {
    /// Mastered wins over practice, which wins over new
    pub fn derive(learned: bool, has_review: bool) -> Self {
        if learned {
            Self::Mastered
        } else if has_review {
            Self::Practice
        } else {
            Self::New
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Practice => "practice",
            Self::Mastered => "mastered",
        }
    }
}

impl fmt::Display for WordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "practice" => Ok(Self::Practice),
            "mastered" => Ok(Self::Mastered),
            _ => Err(ParseEnumError::new("status", s, "new, practice, mastered")),
        }
    }
}

/// A word the learner typed in. Never edited; only added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomWordEntry {
    pub id: String,
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_fa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Raw form input for a custom word
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCustomWord {
    pub word: String,
    #[serde(default)]
    pub translation_en: Option<String>,
    #[serde(default)]
    pub translation_fa: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl NewCustomWord {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Self::default()
        }
    }

    /// Trim every field and drop optional fields that end up empty.
    /// Returns `None` if the word itself is blank.
    pub fn normalize(self, id: String) -> Option<CustomWordEntry> {
        let word = self.word.trim();
        if word.is_empty() {
            return None;
        }
        Some(CustomWordEntry {
            id,
            word: word.to_string(),
            translation_en: non_blank(self.translation_en),
            translation_fa: non_blank(self.translation_fa),
            note: non_blank(self.note),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Which completion ledger: lessons, grammar topics or dialogues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    Lesson,
    Grammar,
    Dialogue,
}

impl CompletionKind {
    pub const ALL: [CompletionKind; 3] = [Self::Lesson, Self::Grammar, Self::Dialogue];

    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Lesson => keys::COMPLETED_LESSONS,
            Self::Grammar => keys::COMPLETED_GRAMMAR,
            Self::Dialogue => keys::COMPLETED_DIALOGUES,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lesson => "lesson",
            Self::Grammar => "grammar",
            Self::Dialogue => "dialogue",
        }
    }
}

impl fmt::Display for CompletionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompletionKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lesson" | "lessons" => Ok(Self::Lesson),
            "grammar" => Ok(Self::Grammar),
            "dialogue" | "dialogues" => Ok(Self::Dialogue),
            _ => Err(ParseEnumError::new("completion kind", s, "lesson, grammar, dialogue")),
        }
    }
}

/// Counts across all ledgers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub learned: usize,
    pub marked: usize,
    pub custom_words: usize,
    pub in_practice: usize,
    pub due: usize,
    pub completed_lessons: usize,
    pub completed_grammar: usize,
    pub completed_dialogues: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_toggle_and_membership() {
        let mut ledger = FlagLedger::new();
        assert!(ledger.toggle("a"));
        assert!(ledger.contains("a"));
        assert!(!ledger.toggle("a"));
        assert!(!ledger.contains("a"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_ledger_ignores_false_entries() {
        let ledger: FlagLedger = serde_json::from_str(r#"{"a": true, "b": false}"#).unwrap();
        assert!(ledger.contains("a"));
        assert!(!ledger.contains("b"));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.ids().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_ledger_json_shape() {
        let ledger: FlagLedger = ["x", "y"].into_iter().collect();
        assert_eq!(
            serde_json::to_value(&ledger).unwrap(),
            serde_json::json!({"x": true, "y": true})
        );
    }

    #[test]
    fn test_status_precedence() {
        assert_eq!(WordStatus::derive(true, true), WordStatus::Mastered);
        assert_eq!(WordStatus::derive(true, false), WordStatus::Mastered);
        assert_eq!(WordStatus::derive(false, true), WordStatus::Practice);
        assert_eq!(WordStatus::derive(false, false), WordStatus::New);
    }

    #[test]
    fn test_normalize_custom_word() {
        let input = NewCustomWord {
            word: "  Haus ".to_string(),
            translation_en: Some(" house ".to_string()),
            translation_fa: Some("   ".to_string()),
            note: None,
        };
        let entry = input.normalize("custom-1".to_string()).unwrap();
        assert_eq!(entry.word, "Haus");
        assert_eq!(entry.translation_en.as_deref(), Some("house"));
        assert_eq!(entry.translation_fa, None);

        assert!(NewCustomWord::new("   ").normalize("custom-2".to_string()).is_none());
    }

    #[test]
    fn test_custom_word_omits_absent_fields() {
        let entry = NewCustomWord::new("Haus").normalize("custom-1".to_string()).unwrap();
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({"id": "custom-1", "word": "Haus"})
        );
    }
}

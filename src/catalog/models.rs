//! Data models for the word catalog

use serde::{Deserialize, Serialize};

use crate::settings::Language;

/// One vocabulary item from the bundled word lists.
///
/// Older lists tag a word with a single `category`, newer ones with a
/// `topics` array; [`Word::categories`] is the one place that reconciles them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    pub word: String,
    /// CEFR level, possibly with a sub-level suffix (`A1.2`)
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_fa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Word {
    /// Non-blank topics if there are any, otherwise the single category
    pub fn categories(&self) -> Vec<&str> {
        let topics: Vec<&str> = self
            .topics
            .iter()
            .flatten()
            .map(|t| t.as_str())
            .filter(|t| !t.trim().is_empty())
            .collect();
        if !topics.is_empty() {
            return topics;
        }
        self.category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .into_iter()
            .collect()
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.categories().contains(&category)
    }

    pub fn translation(&self, language: Language) -> Option<&str> {
        match language {
            Language::Fa => self.translation_fa.as_deref(),
            Language::En => self.translation_en.as_deref(),
        }
    }
}

/// Learned progress for one category card on the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub id: String,
    pub label: String,
    pub count: usize,
    pub learned: usize,
    /// Rounded percentage, 0 for an empty category
    pub percent: u32,
}

impl CategoryStat {
    pub fn new(id: &str, label: &str, count: usize, learned: usize) -> Self {
        let percent = if count == 0 {
            0
        } else {
            (learned as f64 / count as f64 * 100.0).round() as u32
        };
        Self {
            id: id.to_string(),
            label: label.to_string(),
            count,
            learned,
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(category: Option<&str>, topics: Option<Vec<&str>>) -> Word {
        Word {
            id: "w".to_string(),
            word: "Haus".to_string(),
            level: "A1.1".to_string(),
            category: category.map(str::to_string),
            topics: topics.map(|t| t.into_iter().map(str::to_string).collect()),
            translation_en: None,
            translation_fa: None,
            example: None,
            audio: None,
            image: None,
        }
    }

    #[test]
    fn test_topics_take_precedence() {
        let w = word(Some("Wohnen"), Some(vec!["Familie", "", "Alltag"]));
        assert_eq!(w.categories(), vec!["Familie", "Alltag"]);
        assert!(!w.in_category("Wohnen"));
    }

    #[test]
    fn test_falls_back_to_category() {
        assert_eq!(word(Some("Wohnen"), Some(vec![" "])).categories(), vec!["Wohnen"]);
        assert_eq!(word(Some("Wohnen"), None).categories(), vec!["Wohnen"]);
        assert!(word(None, None).categories().is_empty());
        assert!(word(Some(""), Some(vec![])).categories().is_empty());
    }

    #[test]
    fn test_category_stat_percent() {
        assert_eq!(CategoryStat::new("x", "x", 3, 1).percent, 33);
        assert_eq!(CategoryStat::new("x", "x", 8, 1).percent, 13);
        assert_eq!(CategoryStat::new("x", "x", 0, 0).percent, 0);
        assert_eq!(CategoryStat::new("x", "x", 4, 4).percent, 100);
    }

    #[test]
    fn test_parse_word_with_unknown_fields() {
        let w: Word = serde_json::from_str(
            r#"{"id":"a1-1","word":"Hallo","level":"A1.1","topics":["Begrüßung"],"plural":null}"#,
        )
        .unwrap();
        assert_eq!(w.categories(), vec!["Begrüßung"]);
    }
}

//! Word catalog
//!
//! The bundled word lists are static reference data. This module only reads
//! them: level and category filtering, per-category learned statistics, and
//! resolving a navigation filter into the words to show.

mod cursor;
mod models;

pub use cursor::CardCursor;
pub use models::{CategoryStat, Word};

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::navigation::WordFilter;
use crate::progress::FlagLedger;

/// CEFR levels in teaching order
pub const LEVEL_ORDER: [&str; 5] = ["A1", "A2", "B1", "B2", "C1"];

/// Level shown before the learner has picked one
pub const DEFAULT_LEVEL: &str = "A2";

/// Pseudo-category covering every word of a level
pub const ALL_CATEGORY: &str = "all";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid word list {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog path not found: {0:?}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Strip a sub-level suffix: `A1.2` -> `A1`
pub fn normalize_level(level: &str) -> &str {
    let level = level.trim();
    level.split('.').next().unwrap_or(level)
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    words: Vec<Word>,
}

impl Catalog {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Parse a JSON array of words
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a word list file, or every `*.json` list in a directory
    /// (concatenated in file name order)
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }

        let files = if path.is_dir() {
            let mut files = Vec::new();
            for entry in fs::read_dir(path)? {
                let entry_path = entry?.path();
                if entry_path.extension().map_or(false, |ext| ext == "json") {
                    files.push(entry_path);
                }
            }
            files.sort();
            files
        } else {
            vec![path.to_path_buf()]
        };

        let mut words = Vec::new();
        for file in files {
            let content = fs::read_to_string(&file)?;
            let list: Vec<Word> = serde_json::from_str(&content)
                .map_err(|source| CatalogError::Parse { path: file.clone(), source })?;
            log::debug!("Loaded {} words from {:?}", list.len(), file);
            words.extend(list);
        }

        log::info!("Catalog loaded with {} words from {:?}", words.len(), path);
        Ok(Self::new(words))
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.id == id)
    }

    // ==================== Levels ====================

    /// Levels that have at least one word, in teaching order
    pub fn level_options(&self) -> Vec<&'static str> {
        LEVEL_ORDER
            .into_iter()
            .filter(|lvl| self.words.iter().any(|w| normalize_level(&w.level) == *lvl))
            .collect()
    }

    /// Pick the level to browse: the saved one if the catalog has it, then
    /// `default`, then the first level available.
    pub fn resolve_level(&self, saved: Option<&str>, default: &str) -> Option<String> {
        let options = self.level_options();
        [saved.map(normalize_level), Some(normalize_level(default))]
            .into_iter()
            .flatten()
            .find(|candidate| options.contains(candidate))
            .or_else(|| options.first().copied())
            .map(str::to_string)
    }

    pub fn words_in_level(&self, level: &str) -> Vec<&Word> {
        let level = normalize_level(level);
        self.words
            .iter()
            .filter(|w| normalize_level(&w.level) == level)
            .collect()
    }

    // ==================== Categories ====================

    /// Sorted, de-duplicated categories used by a level's words
    pub fn categories(&self, level: &str) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .words_in_level(level)
            .into_iter()
            .flat_map(|w| w.categories())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Words of a level in one category; [`ALL_CATEGORY`] means every word
    pub fn words_in_category(&self, level: &str, category: &str) -> Vec<&Word> {
        let words = self.words_in_level(level);
        if category == ALL_CATEGORY {
            return words;
        }
        words.into_iter().filter(|w| w.in_category(category)).collect()
    }

    /// Ids for bulk operations on a category
    pub fn category_ids(&self, level: &str, category: &str) -> Vec<String> {
        self.words_in_category(level, category)
            .into_iter()
            .map(|w| w.id.clone())
            .collect()
    }

    /// Stats for the category grid: an [`ALL_CATEGORY`] entry first, then
    /// one per category. Labels are the category ids; translating them is
    /// left to the UI.
    pub fn category_stats(&self, level: &str, learned: &FlagLedger) -> Vec<CategoryStat> {
        let build = |id: &str, words: &[&Word]| {
            let learned_count = words.iter().filter(|w| learned.contains(&w.id)).count();
            CategoryStat::new(id, id, words.len(), learned_count)
        };

        let mut stats = vec![build(ALL_CATEGORY, &self.words_in_level(level))];
        for category in self.categories(level) {
            stats.push(build(&category, &self.words_in_category(level, &category)));
        }
        stats
    }

    /// Catalog words for a navigation filter.
    ///
    /// [`WordFilter::MyWords`] selects custom words, which are not part of
    /// the catalog, so it yields nothing here.
    pub fn filtered_words(&self, level: &str, filter: &WordFilter, marked: &FlagLedger) -> Vec<&Word> {
        match filter {
            WordFilter::All => self.words_in_level(level),
            WordFilter::Marked => self
                .words_in_level(level)
                .into_iter()
                .filter(|w| marked.contains(&w.id))
                .collect(),
            WordFilter::MyWords => Vec::new(),
            WordFilter::Category(category) => self.words_in_category(level, category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const WORDS: &str = r#"[
        {"id": "a1-1", "word": "Hallo", "level": "A1.1", "topics": ["Begrüßung", "Alltag"]},
        {"id": "a1-2", "word": "Brot", "level": "A1.2", "category": "Essen"},
        {"id": "a1-3", "word": "Apfel", "level": "A1", "topics": [], "category": "Essen"},
        {"id": "b1-1", "word": "Umwelt", "level": "B1.1", "category": "Natur"}
    ]"#;

    fn catalog() -> Catalog {
        Catalog::from_json_str(WORDS).unwrap()
    }

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level("A1.2"), "A1");
        assert_eq!(normalize_level(" B2 "), "B2");
        assert_eq!(normalize_level(""), "");
    }

    #[test]
    fn test_level_options_in_order() {
        assert_eq!(catalog().level_options(), vec!["A1", "B1"]);
    }

    #[test]
    fn test_resolve_level() {
        let catalog = catalog();
        assert_eq!(catalog.resolve_level(Some("B1.2"), DEFAULT_LEVEL).as_deref(), Some("B1"));
        // Saved level missing from the catalog, default missing too
        assert_eq!(catalog.resolve_level(Some("C1"), DEFAULT_LEVEL).as_deref(), Some("A1"));
        assert_eq!(catalog.resolve_level(None, "B1").as_deref(), Some("B1"));
        assert_eq!(Catalog::default().resolve_level(None, DEFAULT_LEVEL), None);
    }

    #[test]
    fn test_categories_sorted_and_unique() {
        assert_eq!(catalog().categories("A1"), vec!["Alltag", "Begrüßung", "Essen"]);
        assert_eq!(catalog().categories("B1"), vec!["Natur"]);
    }

    #[test]
    fn test_words_in_category() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog
            .words_in_category("A1", "Essen")
            .iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a1-2", "a1-3"]);
        assert_eq!(catalog.words_in_category("A1", ALL_CATEGORY).len(), 3);
        assert_eq!(catalog.category_ids("A1", "Alltag"), vec!["a1-1".to_string()]);
    }

    #[test]
    fn test_category_stats() {
        let learned: FlagLedger = ["a1-2", "b1-1"].into_iter().collect();
        let stats = catalog().category_stats("A1", &learned);

        assert_eq!(stats[0], CategoryStat::new(ALL_CATEGORY, ALL_CATEGORY, 3, 1));
        assert_eq!(stats[0].percent, 33);
        let essen = stats.iter().find(|s| s.id == "Essen").unwrap();
        assert_eq!((essen.count, essen.learned, essen.percent), (2, 1, 50));
        assert_eq!(stats.len(), 4);
    }

    #[test]
    fn test_filtered_words() {
        let catalog = catalog();
        let marked: FlagLedger = ["a1-3", "b1-1"].into_iter().collect();

        assert_eq!(catalog.filtered_words("A1", &WordFilter::All, &marked).len(), 3);
        let marked_words = catalog.filtered_words("A1", &WordFilter::Marked, &marked);
        assert_eq!(marked_words.len(), 1);
        assert_eq!(marked_words[0].id, "a1-3");
        assert!(catalog.filtered_words("A1", &WordFilter::MyWords, &marked).is_empty());
        assert_eq!(
            catalog
                .filtered_words("A1", &WordFilter::Category("Begrüßung".to_string()), &marked)
                .len(),
            1
        );
    }

    #[test]
    fn test_from_path_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("b11.json"),
            r#"[{"id": "b", "word": "Umwelt", "level": "B1.1"}]"#,
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("a11.json"),
            r#"[{"id": "a", "word": "Hallo", "level": "A1.1"}]"#,
        )
        .unwrap();
        fs::write(temp_dir.path().join("README.md"), "ignored").unwrap();

        let catalog = Catalog::from_path(temp_dir.path()).unwrap();
        let ids: Vec<&str> = catalog.words().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_from_path_errors() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            Catalog::from_path(&temp_dir.path().join("missing.json")),
            Err(CatalogError::NotFound(_))
        ));

        let bad = temp_dir.path().join("bad.json");
        fs::write(&bad, "{").unwrap();
        assert!(matches!(Catalog::from_path(&bad), Err(CatalogError::Parse { .. })));
    }
}

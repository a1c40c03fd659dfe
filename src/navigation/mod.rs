//! Vocabulary browsing state
//!
//! Two levels: the category grid, and the word list for one category (or
//! for the marked / my-words tabs). State only changes through the four
//! transitions on [`VocabularyNav`]; callers read the derived flags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseEnumError;
use crate::settings::Settings;
use crate::storage::{KeyValueStore, Persisted};

/// Top-level filter for the word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VocabularyTab {
    #[default]
    All,
    Marked,
    MyWords,
}

impl VocabularyTab {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Marked => "marked",
            Self::MyWords => "my-words",
        }
    }
}

impl fmt::Display for VocabularyTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VocabularyTab {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "marked" => Ok(Self::Marked),
            "my-words" | "my_words" | "mywords" => Ok(Self::MyWords),
            _ => Err(ParseEnumError::new("tab", s, "all, marked, my-words")),
        }
    }
}

/// Active tab plus, on the `all` tab only, the open category
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavState {
    pub tab: VocabularyTab,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl NavState {
    /// Build a state, dropping the category unless the tab is `all`
    pub fn new(tab: VocabularyTab, category_id: Option<String>) -> Self {
        let category_id = match tab {
            VocabularyTab::All => category_id.filter(|c| !c.is_empty()),
            _ => None,
        };
        Self { tab, category_id }
    }
}

/// What the word list should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordFilter {
    All,
    Marked,
    MyWords,
    Category(String),
}

/// The browsing state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyNav {
    initial: NavState,
    state: NavState,
}

impl Default for VocabularyNav {
    fn default() -> Self {
        Self::new(NavState::default())
    }
}

impl VocabularyNav {
    pub fn new(initial: NavState) -> Self {
        let initial = NavState::new(initial.tab, initial.category_id);
        Self {
            state: initial.clone(),
            initial,
        }
    }

    /// Start on the `all` tab, inside `category` if one was linked to
    pub fn from_deep_link(category: Option<&str>) -> Self {
        Self::new(NavState::new(
            VocabularyTab::All,
            category.map(|c| c.trim().to_string()),
        ))
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn tab(&self) -> VocabularyTab {
        self.state.tab
    }

    pub fn category_id(&self) -> Option<&str> {
        self.state.category_id.as_deref()
    }

    // ==================== Transitions ====================

    /// Switch tab. The open category survives only on the `all` tab.
    pub fn set_tab(&mut self, tab: VocabularyTab) {
        let category_id = self.state.category_id.take();
        self.state = NavState::new(tab, category_id);
    }

    /// Open a category's word list; always lands on the `all` tab
    pub fn open_category(&mut self, category_id: &str) {
        self.state = NavState::new(VocabularyTab::All, Some(category_id.to_string()));
    }

    /// Close the open category, keeping the tab
    pub fn back_to_categories(&mut self) {
        self.state.category_id = None;
    }

    /// Return to the state the navigator was created with
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
    }

    /// Store a new level and go back to the category grid of the `all` tab
    pub fn change_level<S: KeyValueStore>(
        &mut self,
        settings: &Settings<'_, S>,
        level: &str,
    ) -> Persisted<String> {
        let persisted = settings.set_level(level);
        self.set_tab(VocabularyTab::All);
        self.back_to_categories();
        persisted
    }

    // ==================== Derived ====================

    pub fn show_categories(&self) -> bool {
        self.state.tab == VocabularyTab::All && self.state.category_id.is_none()
    }

    pub fn show_word_list(&self) -> bool {
        !self.show_categories()
    }

    pub fn active_filter(&self) -> WordFilter {
        match (&self.state.tab, &self.state.category_id) {
            (VocabularyTab::All, Some(category)) => WordFilter::Category(category.clone()),
            (VocabularyTab::All, None) => WordFilter::All,
            (VocabularyTab::Marked, _) => WordFilter::Marked,
            (VocabularyTab::MyWords, _) => WordFilter::MyWords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonStore, MemoryStore};

    fn state(tab: VocabularyTab, category: Option<&str>) -> NavState {
        NavState {
            tab,
            category_id: category.map(str::to_string),
        }
    }

    #[test]
    fn test_open_category_then_switch_tabs() {
        let mut nav = VocabularyNav::default();
        assert_eq!(nav.state(), &state(VocabularyTab::All, None));
        assert!(nav.show_categories());

        nav.open_category("food");
        assert_eq!(nav.state(), &state(VocabularyTab::All, Some("food")));
        assert!(nav.show_word_list());

        nav.set_tab(VocabularyTab::Marked);
        assert_eq!(nav.state(), &state(VocabularyTab::Marked, None));

        nav.back_to_categories();
        assert_eq!(nav.state(), &state(VocabularyTab::Marked, None));
        assert!(nav.show_word_list());
    }

    #[test]
    fn test_set_tab_all_keeps_category() {
        let mut nav = VocabularyNav::default();
        nav.open_category("food");
        nav.set_tab(VocabularyTab::All);
        assert_eq!(nav.category_id(), Some("food"));
    }

    #[test]
    fn test_open_category_from_other_tab() {
        let mut nav = VocabularyNav::default();
        nav.set_tab(VocabularyTab::MyWords);
        nav.open_category("travel");
        assert_eq!(nav.state(), &state(VocabularyTab::All, Some("travel")));
    }

    #[test]
    fn test_open_empty_category_stays_on_grid() {
        let mut nav = VocabularyNav::default();
        nav.open_category("");
        assert_eq!(nav.state(), &state(VocabularyTab::All, None));
        assert!(nav.show_categories());

        nav.set_tab(VocabularyTab::All);
        assert_eq!(nav.state(), &state(VocabularyTab::All, None));
        assert!(nav.show_categories());
    }

    #[test]
    fn test_back_to_categories_from_category() {
        let mut nav = VocabularyNav::default();
        nav.open_category("food");
        nav.back_to_categories();
        assert!(nav.show_categories());
    }

    #[test]
    fn test_reset_returns_to_deep_link() {
        let mut nav = VocabularyNav::from_deep_link(Some("food"));
        assert!(nav.show_word_list());

        nav.set_tab(VocabularyTab::Marked);
        nav.reset();
        assert_eq!(nav.state(), &state(VocabularyTab::All, Some("food")));
    }

    #[test]
    fn test_initial_state_respects_invariant() {
        let nav = VocabularyNav::new(state(VocabularyTab::Marked, Some("food")));
        assert_eq!(nav.category_id(), None);

        let nav = VocabularyNav::from_deep_link(Some(""));
        assert!(nav.show_categories());
    }

    #[test]
    fn test_active_filter() {
        let mut nav = VocabularyNav::default();
        assert_eq!(nav.active_filter(), WordFilter::All);
        nav.open_category("food");
        assert_eq!(nav.active_filter(), WordFilter::Category("food".to_string()));
        nav.set_tab(VocabularyTab::Marked);
        assert_eq!(nav.active_filter(), WordFilter::Marked);
        nav.set_tab(VocabularyTab::MyWords);
        assert_eq!(nav.active_filter(), WordFilter::MyWords);
    }

    #[test]
    fn test_change_level_returns_to_grid() {
        let store = JsonStore::new(MemoryStore::new());
        let settings = Settings::new(&store);
        let mut nav = VocabularyNav::default();
        nav.set_tab(VocabularyTab::Marked);

        assert!(nav.change_level(&settings, "B1").is_saved());
        assert!(nav.show_categories());
        assert_eq!(settings.selected_level().as_deref(), Some("B1"));
    }

    #[test]
    fn test_tab_serialization() {
        assert_eq!(serde_json::to_string(&VocabularyTab::MyWords).unwrap(), "\"my-words\"");
        assert_eq!("my-words".parse::<VocabularyTab>().unwrap(), VocabularyTab::MyWords);
        assert_eq!(
            serde_json::to_value(state(VocabularyTab::All, Some("food"))).unwrap(),
            serde_json::json!({"tab": "all", "categoryId": "food"})
        );
    }
}

//! Persisted learner preferences: selected level and interface language

mod models;

pub use models::Language;

use crate::storage::{keys, JsonStore, KeyValueStore, Persisted};

pub struct Settings<'a, S> {
    store: &'a JsonStore<S>,
}

impl<'a, S: KeyValueStore> Settings<'a, S> {
    pub fn new(store: &'a JsonStore<S>) -> Self {
        Self { store }
    }

    /// The stored level string as the learner picked it, if any
    pub fn selected_level(&self) -> Option<String> {
        self.store
            .read::<Option<String>>(keys::SELECTED_LEVEL, None)
            .filter(|level| !level.trim().is_empty())
    }

    pub fn set_level(&self, level: &str) -> Persisted<String> {
        let level = level.trim().to_string();
        let write = self.store.write(keys::SELECTED_LEVEL, &level);
        Persisted::new(level, write)
    }

    /// Interface language; anything unrecognised falls back to the default
    pub fn language(&self) -> Language {
        self.store
            .read::<Option<String>>(keys::SELECTED_LANGUAGE, None)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_language(&self, language: Language) -> Persisted<Language> {
        let write = self.store.write(keys::SELECTED_LANGUAGE, &language);
        Persisted::new(language, write)
    }
}

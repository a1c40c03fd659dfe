//! Storage operations for learner progress

use thiserror::Error;
use uuid::{NoContext, Timestamp, Uuid};

use super::models::*;
use crate::settings::Settings;
use crate::srs::{Clock, Difficulty, ReviewScheduler, SystemClock};
use crate::storage::{keys, JsonStore, KeyValueStore, Persisted, StorageError};

#[derive(Error, Debug)]
pub enum ProgressError {
    #[error("Word must not be empty")]
    EmptyWord,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, ProgressError>;

/// Owner of the persisted learner state.
///
/// Every read goes to the store; nothing is cached between calls.
pub struct ProgressStore<S, C = SystemClock> {
    store: JsonStore<S>,
    clock: C,
}

impl<S: KeyValueStore> ProgressStore<S, SystemClock> {
    pub fn new(backend: S) -> Self {
        Self::with_clock(backend, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> ProgressStore<S, C> {
    pub fn with_clock(backend: S, clock: C) -> Self {
        Self {
            store: JsonStore::new(backend),
            clock,
        }
    }

    pub fn store(&self) -> &JsonStore<S> {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn scheduler(&self) -> ReviewScheduler<'_, S, C> {
        ReviewScheduler::new(&self.store, &self.clock)
    }

    pub fn settings(&self) -> Settings<'_, S> {
        Settings::new(&self.store)
    }

    pub fn completion(&self, kind: CompletionKind) -> CompletionLedger<'_, S> {
        CompletionLedger {
            store: &self.store,
            kind,
        }
    }

    // ==================== Learned ====================

    pub fn learned(&self) -> FlagLedger {
        self.store.read_or_default(keys::LEARNED_WORDS)
    }

    pub fn is_learned(&self, id: &str) -> bool {
        self.learned().contains(id)
    }

    /// Mark a word mastered and drop its pending review.
    ///
    /// Two writes, learned ledger first.
    pub fn mark_learned(&self, id: &str) -> Persisted<FlagLedger> {
        let learned = self
            .store
            .update(keys::LEARNED_WORDS, FlagLedger::new(), |l| {
                l.insert(id);
            });
        let review = self.scheduler().remove_review(id);
        learned.then_write(review.write)
    }

    /// Remove a word from the learned ledger without touching its review
    pub fn unmark_learned(&self, id: &str) -> Persisted<FlagLedger> {
        self.store
            .update(keys::LEARNED_WORDS, FlagLedger::new(), |l| {
                l.remove(id);
            })
    }

    // ==================== Marked ====================

    pub fn marked(&self) -> FlagLedger {
        self.store.read_or_default(keys::MARKED_WORDS)
    }

    pub fn is_marked(&self, id: &str) -> bool {
        self.marked().contains(id)
    }

    /// Flip the bookmark on a word; the value is the new state
    pub fn toggle_marked(&self, id: &str) -> Persisted<bool> {
        let mut now_marked = false;
        self.store
            .update(keys::MARKED_WORDS, FlagLedger::new(), |l| {
                now_marked = l.toggle(id);
            })
            .map(|_| now_marked)
    }

    // ==================== Status ====================

    pub fn status(&self, id: &str) -> WordStatus {
        if self.is_learned(id) {
            return WordStatus::Mastered;
        }
        WordStatus::derive(false, self.scheduler().has_review_record(id))
    }

    /// Move a word to the given status.
    ///
    /// - mastered: same as [`Self::mark_learned`]
    /// - practice: schedule a medium review, then drop it from learned
    /// - new: drop it from learned and from the review records
    pub fn set_status(&self, id: &str, status: WordStatus) -> Persisted<WordStatus> {
        let persisted = match status {
            WordStatus::Mastered => self.mark_learned(id).map(|_| ()),
            WordStatus::Practice => {
                let review = self.scheduler().schedule(id, Difficulty::Medium);
                let learned = self.unmark_learned(id);
                Persisted::new((), review.write).then_write(learned.write)
            }
            WordStatus::New => {
                let learned = self.unmark_learned(id);
                let review = self.scheduler().remove_review(id);
                Persisted::new((), learned.write).then_write(review.write)
            }
        };
        persisted.map(|()| status)
    }

    // ==================== Bulk ====================

    /// Add every id to the learned ledger in one write.
    /// The value is how many were newly added.
    ///
    /// Review records are left alone; status derivation already ranks
    /// mastered above practice.
    pub fn mark_category_mastered<I, T>(&self, ids: I) -> Persisted<usize>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut added = 0;
        self.store
            .update(keys::LEARNED_WORDS, FlagLedger::new(), |l| {
                for id in ids {
                    if l.insert(id.as_ref()) {
                        added += 1;
                    }
                }
            })
            .map(|_| added)
    }

    /// Clear every id from the learned ledger, then from the review
    /// records. The value is how many learned entries were removed.
    ///
    /// If the second write fails the words stay unlearned but keep their
    /// review records, so they show up as "practice".
    pub fn reset_category<T: AsRef<str>>(&self, ids: &[T]) -> Persisted<usize> {
        let mut removed = 0;
        let learned = self
            .store
            .update(keys::LEARNED_WORDS, FlagLedger::new(), |l| {
                removed = ids.iter().filter(|id| l.remove(id.as_ref())).count();
            });
        let reviews = self.scheduler().remove_reviews(ids.iter().map(|id| id.as_ref()));
        learned.then_write(reviews.write).map(|_| removed)
    }

    // ==================== Custom words ====================

    /// Custom words, newest first
    pub fn custom_words(&self) -> Vec<CustomWordEntry> {
        self.store.read_or_default(keys::CUSTOM_WORDS)
    }

    /// Validate and prepend a custom word
    pub fn add_custom_word(&self, input: NewCustomWord) -> Result<Persisted<CustomWordEntry>> {
        let entry = input
            .normalize(self.next_custom_id())
            .ok_or(ProgressError::EmptyWord)?;

        let persisted = self
            .store
            .update(keys::CUSTOM_WORDS, Vec::<CustomWordEntry>::new(), |words| {
                words.insert(0, entry.clone());
            });
        log::debug!("Added custom word {} ({})", entry.word, entry.id);
        Ok(persisted.map(|_| entry))
    }

    /// Remove a custom word by id; the value tells whether it existed
    pub fn remove_custom_word(&self, id: &str) -> Persisted<bool> {
        let mut found = false;
        self.store
            .update(keys::CUSTOM_WORDS, Vec::<CustomWordEntry>::new(), |words| {
                let before = words.len();
                words.retain(|w| w.id != id);
                found = words.len() != before;
            })
            .map(|_| found)
    }

    /// Time-based id: a UUIDv7 stamped with the clock's current millisecond
    fn next_custom_id(&self) -> String {
        let now_ms = self.clock.now_ms().max(0) as u64;
        let ts = Timestamp::from_unix(NoContext, now_ms / 1000, ((now_ms % 1000) * 1_000_000) as u32);
        format!("custom-{}", Uuid::new_v7(ts))
    }

    // ==================== Summary ====================

    pub fn summary(&self) -> ProgressSummary {
        let learned = self.learned();
        let reviews = self.scheduler().get_review_records();
        let now_ms = self.clock.now_ms();

        ProgressSummary {
            learned: learned.len(),
            marked: self.marked().len(),
            custom_words: self.custom_words().len(),
            in_practice: reviews.keys().filter(|id| !learned.contains(id)).count(),
            due: reviews
                .values()
                .filter(|r| !learned.contains(&r.item_id) && r.is_due(now_ms))
                .count(),
            completed_lessons: self.completion(CompletionKind::Lesson).count(),
            completed_grammar: self.completion(CompletionKind::Grammar).count(),
            completed_dialogues: self.completion(CompletionKind::Dialogue).count(),
        }
    }
}

/// Completed lessons, grammar topics or dialogues
pub struct CompletionLedger<'a, S> {
    store: &'a JsonStore<S>,
    kind: CompletionKind,
}

impl<'a, S: KeyValueStore> CompletionLedger<'a, S> {
    pub fn kind(&self) -> CompletionKind {
        self.kind
    }

    pub fn ledger(&self) -> FlagLedger {
        self.store.read_or_default(self.kind.storage_key())
    }

    pub fn is_complete(&self, id: &str) -> bool {
        self.ledger().contains(id)
    }

    pub fn count(&self) -> usize {
        self.ledger().len()
    }

    pub fn complete(&self, id: &str) -> Persisted<FlagLedger> {
        self.store
            .update(self.kind.storage_key(), FlagLedger::new(), |l| {
                l.insert(id);
            })
    }

    /// Flip completion; the value is the new state
    pub fn toggle(&self, id: &str) -> Persisted<bool> {
        let mut now_complete = false;
        self.store
            .update(self.kind.storage_key(), FlagLedger::new(), |l| {
                now_complete = l.toggle(id);
            })
            .map(|_| now_complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srs::FixedClock;
    use crate::storage::MemoryStore;

    /// Backend that refuses writes to one key
    struct FailingKey<'a> {
        inner: &'a MemoryStore,
        key: &'static str,
    }

    impl KeyValueStore for FailingKey<'_> {
        fn get(&self, key: &str) -> crate::storage::Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> crate::storage::Result<()> {
            if key == self.key {
                return Err(StorageError::Unavailable);
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> crate::storage::Result<()> {
            self.inner.remove(key)
        }

        fn keys(&self) -> crate::storage::Result<Vec<String>> {
            self.inner.keys()
        }
    }

    const NOW: i64 = 1_700_000_000_000;

    fn progress() -> ProgressStore<MemoryStore, FixedClock> {
        ProgressStore::with_clock(MemoryStore::new(), FixedClock::new(NOW))
    }

    #[test]
    fn test_status_new_practice_mastered() {
        let progress = progress();
        assert_eq!(progress.status("w1"), WordStatus::New);

        progress.scheduler().schedule_review("w1", Difficulty::Hard);
        assert_eq!(progress.status("w1"), WordStatus::Practice);

        progress.mark_learned("w1");
        assert_eq!(progress.status("w1"), WordStatus::Mastered);
    }

    #[test]
    fn test_mastered_dominates_existing_review() {
        let progress = progress();
        progress.scheduler().schedule_review("w1", Difficulty::Easy);
        progress.mark_category_mastered(["w1"]);

        assert!(progress.scheduler().get_review_record("w1").is_some());
        assert_eq!(progress.status("w1"), WordStatus::Mastered);
    }

    #[test]
    fn test_mark_learned_clears_review() {
        let progress = progress();
        progress.scheduler().schedule_review("w1", Difficulty::Medium);

        let persisted = progress.mark_learned("w1");
        assert!(persisted.is_saved());
        assert!(persisted.value.contains("w1"));
        assert_eq!(progress.scheduler().get_review_record("w1"), None);
        assert!(progress.learned().contains("w1"));
    }

    #[test]
    fn test_toggle_marked_is_independent() {
        let progress = progress();
        assert!(progress.toggle_marked("w1").into_value());
        assert!(progress.is_marked("w1"));
        assert_eq!(progress.status("w1"), WordStatus::New);

        assert!(!progress.toggle_marked("w1").into_value());
        assert!(!progress.is_marked("w1"));
    }

    #[test]
    fn test_set_status_transitions() {
        let progress = progress();

        progress.set_status("w1", WordStatus::Mastered);
        assert_eq!(progress.status("w1"), WordStatus::Mastered);

        progress.set_status("w1", WordStatus::Practice);
        assert_eq!(progress.status("w1"), WordStatus::Practice);
        let record = progress.scheduler().get_review_record("w1").unwrap();
        assert_eq!(record.difficulty, Difficulty::Medium);
        assert!(!progress.is_learned("w1"));

        progress.set_status("w1", WordStatus::New);
        assert_eq!(progress.status("w1"), WordStatus::New);
        assert_eq!(progress.scheduler().get_review_record("w1"), None);
    }

    #[test]
    fn test_mark_category_mastered_single_write() {
        let progress = progress();
        progress.mark_learned("a");

        let persisted = progress.mark_category_mastered(["a", "b", "c"]);
        assert_eq!(persisted.value, 2);
        assert_eq!(progress.learned().len(), 3);
    }

    #[test]
    fn test_reset_category_clears_both_ledgers() {
        let progress = progress();
        progress.mark_category_mastered(["a", "b"]);
        progress.scheduler().schedule_review("c", Difficulty::Hard);
        progress.scheduler().schedule_review("keep", Difficulty::Hard);

        let persisted = progress.reset_category(&["a", "b", "c"]);
        assert!(persisted.is_saved());
        assert_eq!(persisted.value, 2);

        for id in ["a", "b", "c"] {
            assert_eq!(progress.status(id), WordStatus::New);
        }
        assert_eq!(progress.status("keep"), WordStatus::Practice);
    }

    #[test]
    fn test_reset_category_second_write_failure_leaves_practice() {
        let backend = MemoryStore::new();
        {
            let progress = ProgressStore::with_clock(&backend, FixedClock::new(NOW));
            progress.scheduler().schedule_review("a", Difficulty::Hard);
            progress.mark_category_mastered(["a"]);
        }

        let failing = FailingKey {
            inner: &backend,
            key: keys::REVIEW_RECORDS,
        };
        let progress = ProgressStore::with_clock(failing, FixedClock::new(NOW));
        let persisted = progress.reset_category(&["a"]);

        assert!(!persisted.is_saved());
        assert_eq!(persisted.value, 1);
        assert!(!progress.is_learned("a"));
        assert_eq!(progress.status("a"), WordStatus::Practice);
    }

    #[test]
    fn test_failed_write_keeps_previous_ledger() {
        let backend = MemoryStore::new();
        let progress = ProgressStore::with_clock(&backend, FixedClock::new(NOW));
        progress.mark_learned("a");

        backend.set_available(false);
        let persisted = progress.mark_learned("b");
        assert!(!persisted.is_saved());
        assert!(persisted.value.contains("b"));

        backend.set_available(true);
        assert!(progress.is_learned("a"));
        assert!(!progress.is_learned("b"));
    }

    #[test]
    fn test_add_and_remove_custom_word() {
        let progress = progress();
        progress
            .add_custom_word(NewCustomWord::new("Baum"))
            .unwrap();
        let before = progress.custom_words();

        let added = progress
            .add_custom_word(NewCustomWord::new("Haus"))
            .unwrap()
            .into_result()
            .unwrap();
        let words = progress.custom_words();
        assert_eq!(words.len(), before.len() + 1);
        assert_eq!(words[0], added);
        assert!(added.id.starts_with("custom-"));
        assert!(words[1..].iter().all(|w| w.id != added.id));

        assert!(progress.remove_custom_word(&added.id).into_value());
        assert_eq!(progress.custom_words(), before);
        assert!(!progress.remove_custom_word(&added.id).into_value());
    }

    #[test]
    fn test_custom_words_allow_duplicate_text() {
        let progress = progress();
        let first = progress.add_custom_word(NewCustomWord::new("Haus")).unwrap().value;
        let second = progress.add_custom_word(NewCustomWord::new("Haus")).unwrap().value;

        assert_ne!(first.id, second.id);
        assert_eq!(progress.custom_words().len(), 2);
    }

    #[test]
    fn test_custom_word_ids_are_time_based() {
        let progress = progress();
        let entry = progress.add_custom_word(NewCustomWord::new("Haus")).unwrap().value;

        let uuid = Uuid::parse_str(entry.id.trim_start_matches("custom-")).unwrap();
        let (secs, nanos) = uuid.get_timestamp().unwrap().to_unix();
        assert_eq!(secs as i64 * 1000 + (nanos / 1_000_000) as i64, NOW);
    }

    #[test]
    fn test_empty_custom_word_rejected() {
        let progress = progress();
        let err = progress.add_custom_word(NewCustomWord::new("  ")).unwrap_err();
        assert!(matches!(err, ProgressError::EmptyWord));
        assert!(progress.custom_words().is_empty());
    }

    #[test]
    fn test_completion_ledgers_are_separate() {
        let progress = progress();
        progress.completion(CompletionKind::Lesson).complete("l1");
        assert!(progress.completion(CompletionKind::Grammar).toggle("g1").into_value());

        assert!(progress.completion(CompletionKind::Lesson).is_complete("l1"));
        assert!(!progress.completion(CompletionKind::Dialogue).is_complete("l1"));
        assert_eq!(progress.completion(CompletionKind::Grammar).count(), 1);

        assert!(!progress.completion(CompletionKind::Grammar).toggle("g1").into_value());
        assert_eq!(progress.completion(CompletionKind::Grammar).count(), 0);
    }

    #[test]
    fn test_summary() {
        let progress = progress();
        progress.mark_learned("a");
        progress.toggle_marked("b");
        progress.scheduler().schedule_review("c", Difficulty::Hard);
        progress.scheduler().schedule_review("d", Difficulty::Easy);
        progress.add_custom_word(NewCustomWord::new("Haus")).unwrap();
        progress.completion(CompletionKind::Dialogue).complete("d1");

        progress.clock().advance(crate::srs::algorithm::HARD_INTERVAL_MS);
        let summary = progress.summary();
        assert_eq!(summary.learned, 1);
        assert_eq!(summary.marked, 1);
        assert_eq!(summary.custom_words, 1);
        assert_eq!(summary.in_practice, 2);
        assert_eq!(summary.due, 1);
        assert_eq!(summary.completed_dialogues, 1);
    }
}

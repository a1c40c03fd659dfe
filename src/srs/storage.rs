//! Storage operations for review records
//!
//! All records live in one map under [`keys::REVIEW_RECORDS`]; every mutation
//! rewrites the whole map.

use super::algorithm;
use super::clock::Clock;
use super::models::{Difficulty, ReviewMap, ReviewRecord};
use crate::storage::{keys, JsonStore, KeyValueStore, Persisted};

/// Schedules reviews and reads them back through a [`JsonStore`]
pub struct ReviewScheduler<'a, S, C> {
    store: &'a JsonStore<S>,
    clock: &'a C,
}

impl<'a, S: KeyValueStore, C: Clock> ReviewScheduler<'a, S, C> {
    pub fn new(store: &'a JsonStore<S>, clock: &'a C) -> Self {
        Self { store, clock }
    }

    // ==================== Reads ====================

    /// All records, keyed by item id
    pub fn get_review_records(&self) -> ReviewMap {
        self.store.read_or_default(keys::REVIEW_RECORDS)
    }

    pub fn get_review_record(&self, item_id: &str) -> Option<ReviewRecord> {
        self.get_review_records().remove(item_id)
    }

    pub fn has_review_record(&self, item_id: &str) -> bool {
        self.get_review_records().contains_key(item_id)
    }

    /// Records due at `now_ms`, the longest overdue first
    pub fn due_reviews(&self, now_ms: i64) -> Vec<ReviewRecord> {
        let mut due: Vec<ReviewRecord> = self
            .get_review_records()
            .into_values()
            .filter(|r| r.is_due(now_ms))
            .collect();
        due.sort_by(|a, b| {
            a.next_review
                .cmp(&b.next_review)
                .then_with(|| a.item_id.cmp(&b.item_id))
        });
        due
    }

    /// Records due right now according to the scheduler's clock
    pub fn due_now(&self) -> Vec<ReviewRecord> {
        self.due_reviews(self.clock.now_ms())
    }

    // ==================== Writes ====================

    /// Rate an item and store its new schedule, replacing any earlier record.
    ///
    /// The record is returned even if it could not be stored; it then only
    /// lives as long as the caller keeps it.
    pub fn schedule_review(&self, item_id: &str, difficulty: Difficulty) -> ReviewRecord {
        self.schedule(item_id, difficulty).into_value()
    }

    /// Same as [`Self::schedule_review`], also reporting the write outcome
    pub fn schedule(&self, item_id: &str, difficulty: Difficulty) -> Persisted<ReviewRecord> {
        let record = algorithm::schedule(item_id, difficulty, self.clock.now_ms());

        let mut records = self.get_review_records();
        records.insert(item_id.to_string(), record.clone());
        let write = self.store.write(keys::REVIEW_RECORDS, &records);

        log::debug!(
            "Scheduled {} as {} until {}",
            item_id,
            difficulty,
            record.next_review
        );
        Persisted::new(record, write)
    }

    /// Delete the record for one item. The value tells whether it existed.
    pub fn remove_review(&self, item_id: &str) -> Persisted<bool> {
        self.remove_reviews([item_id]).map(|removed| removed > 0)
    }

    /// Delete the records of several items in a single write.
    /// The value is the number of records that existed.
    pub fn remove_reviews<I, T>(&self, item_ids: I) -> Persisted<usize>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut records = self.get_review_records();
        let removed = item_ids
            .into_iter()
            .filter(|id| {
                let id: &str = id.as_ref();
                records.remove(id).is_some()
            })
            .count();
        let write = self.store.write(keys::REVIEW_RECORDS, &records);
        Persisted::new(removed, write)
    }
}

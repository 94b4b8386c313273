//! Entry store
//!
//! Owns the ordered entry collection. Newest additions sit at the head.
//! Nothing here validates amounts or descriptions; callers do.

use std::collections::BTreeMap;

use crate::models::{Category, Entry, EntryDraft, EntryId, Money, MonthKey, Participant};

/// The canonical list of entries, most recently added first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already ordered list (for example one read from storage)
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Record a new entry with a fresh id and the given creation timestamp
    pub fn add(&mut self, draft: EntryDraft, timestamp: i64) -> Entry {
        let entry = Entry::from_draft(EntryId::new(), timestamp, draft);
        self.entries.insert(0, entry.clone());
        entry
    }

    /// Replace every field but id and timestamp
    ///
    /// Returns `(before, after)`, or `None` when no entry has this id.
    pub fn update(&mut self, id: EntryId, draft: EntryDraft) -> Option<(Entry, Entry)> {
        let entry = self.entries.iter_mut().find(|e| e.id == id)?;
        let before = entry.clone();
        entry.apply(draft);
        Some((before, entry.clone()))
    }

    /// Remove an entry, returning it if it existed
    pub fn delete(&mut self, id: EntryId) -> Option<Entry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All entries in stored order
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` newest entries by timestamp, newest first
    ///
    /// The sort is stable, so equal timestamps keep their stored order.
    pub fn recent(&self, n: usize) -> Vec<Entry> {
        let mut sorted: Vec<&Entry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted.into_iter().take(n).cloned().collect()
    }

    /// Entries whose timestamp falls in `month`
    pub fn in_month(&self, month: MonthKey) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(move |e| e.falls_in(month))
    }

    /// Absolute expense totals per category for `month`
    pub fn monthly_by_category(&self, month: MonthKey) -> BTreeMap<Category, Money> {
        let mut totals = BTreeMap::new();
        for entry in self.in_month(month).filter(|e| e.is_expense()) {
            *totals
                .entry(entry.category.clone())
                .or_insert_with(Money::zero) += entry.amount.abs();
        }
        totals
    }

    /// Absolute expense totals per participant for `month`
    pub fn monthly_by_participant(&self, month: MonthKey) -> BTreeMap<Participant, Money> {
        let mut totals = BTreeMap::new();
        for entry in self.in_month(month).filter(|e| e.is_expense()) {
            *totals.entry(entry.user).or_insert_with(Money::zero) += entry.amount.abs();
        }
        totals
    }
}

use std::collections::HashSet;

use tracker_domain::{EntryKind, LedgerEntry};
use uuid::Uuid;

use crate::CoreError;

/// In-memory, append-only collection of ledger entries.
///
/// Entries keep their insertion order; the date-descending display order is
/// computed on demand. The whole store is replaced on load, individual
/// entries are never edited or removed.
#[derive(Debug, Default)]
pub struct LedgerStore {
    entries: Vec<LedgerEntry>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from previously persisted entries, keeping their order.
    pub fn from_entries(entries: Vec<LedgerEntry>) -> Result<Self, CoreError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id()) {
                return Err(CoreError::DuplicateEntry(entry.id()));
            }
        }
        Ok(Self { entries })
    }

    pub fn add(&mut self, entry: LedgerEntry) -> Uuid {
        let id = entry.id();
        self.entries.push(entry);
        id
    }

    /// Entries in insertion order.
    pub fn all(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Entries ordered newest first. Entries sharing a date stay in insertion order.
    pub fn sorted_by_date_desc(&self) -> Vec<&LedgerEntry> {
        let mut sorted: Vec<&LedgerEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.date().cmp(&a.date()));
        sorted
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn count_by_kind(&self, kind: EntryKind) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.kind() == kind)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&LedgerEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }
}

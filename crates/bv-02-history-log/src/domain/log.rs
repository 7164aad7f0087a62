//! Bounded history log
//!
//! Newest entries sit at the front. Adding to a full log evicts exactly one
//! entry from the back.

use std::collections::VecDeque;

use shared_types::{OperationKind, OperationPayload};

use super::entry::HistoryEntry;

/// Default number of entries kept.
pub const MAX_HISTORY_SIZE: usize = 50;

/// Append log of operation records, most recent first
#[derive(Clone, Debug)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    max_size: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    /// Create an empty log holding up to [`MAX_HISTORY_SIZE`] entries.
    pub fn new() -> Self {
        Self::with_max_size(MAX_HISTORY_SIZE)
    }

    /// Create an empty log with a custom bound (at least 1).
    pub fn with_max_size(max_size: usize) -> Self {
        let max_size = max_size.max(1);
        Self {
            entries: VecDeque::with_capacity(max_size + 1),
            max_size,
        }
    }

    /// Record an operation.
    ///
    /// The entry gets a fresh id and the current time and goes to the front.
    /// If the log then exceeds its bound the oldest entry is dropped.
    pub fn add_entry(
        &mut self,
        kind: OperationKind,
        payload: OperationPayload,
        description: impl Into<String>,
    ) -> HistoryEntry {
        let entry = HistoryEntry::record(kind, payload, description.into());
        self.entries.push_front(entry.clone());

        if self.entries.len() > self.max_size {
            self.entries.pop_back();
        }

        entry
    }

    /// Copy of every entry, most recent first.
    pub fn get_history(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Find an entry by id.
    pub fn get_entry(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Entries of one kind, most recent first.
    pub fn entries_of_kind(&self, kind: OperationKind) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().filter(move |entry| entry.kind() == kind)
    }

    /// Iterate most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Drop every entry.
    pub fn clear_history(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

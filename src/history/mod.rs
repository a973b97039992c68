//! Bounded, in-memory history of generations and conversation turns.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Capacity used for image generation history.
pub const DEFAULT_IMAGE_HISTORY_CAPACITY: usize = 5;

/// Capacity used for chat history, in exchanges (one user message plus its
/// reply).
pub const DEFAULT_CHAT_HISTORY_CAPACITY: usize = 10;

/// One recorded generation or conversation turn.
///
/// Fields are read-only once the entry exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry<T> {
    timestamp: DateTime<Local>,
    payload: T,
}

impl<T> HistoryEntry<T> {
    /// Create an entry stamped with the current local time.
    pub fn new(payload: T) -> Self {
        Self::with_timestamp(Local::now(), payload)
    }

    pub fn with_timestamp(timestamp: DateTime<Local>, payload: T) -> Self {
        Self { timestamp, payload }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Timestamp as shown in history listings (`%Y-%m-%d %H:%M:%S`).
    pub fn display_timestamp(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}

/// Append-only history holding at most `capacity` entries.
///
/// Appending past capacity drops the oldest entry (FIFO). Reading never
/// reorders entries. The store is meant to be owned by a single session and
/// mutated through `&mut self`.
#[derive(Debug, Clone, Serialize)]
pub struct BoundedHistory<T> {
    entries: VecDeque<HistoryEntry<T>>,
    capacity: usize,
}

impl<T> Default for BoundedHistory<T> {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_HISTORY_CAPACITY)
    }
}

impl<T> BoundedHistory<T> {
    /// Create an empty history. A capacity of 0 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add `entry` as the newest record, evicting the oldest one if needed.
    pub fn append(&mut self, entry: HistoryEntry<T>) {
        self.entries.push_back(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
            debug!(capacity = self.capacity, "history full, evicted oldest entry");
        }
    }

    /// Stamp `payload` with the current time, append it and return the
    /// stored entry.
    pub fn record(&mut self, payload: T) -> &HistoryEntry<T> {
        self.append(HistoryEntry::new(payload));
        let newest = self.entries.len() - 1;
        &self.entries[newest]
    }

    /// All entries, oldest first.
    pub fn all(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry<T>> + ExactSizeIterator {
        self.entries.iter()
    }

    /// All entries, newest first (display order).
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &HistoryEntry<T>> {
        self.entries.iter().rev()
    }

    /// The last `n` entries, oldest first.
    pub fn last_n(&self, n: usize) -> impl Iterator<Item = &HistoryEntry<T>> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip)
    }

    pub fn latest(&self) -> Option<&HistoryEntry<T>> {
        self.entries.back()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry<T>> {
        self.entries.get(index)
    }
}

//! Entry model
//!
//! One logged wellness record and the ordered table holding them.
//! Entries are created on validated submission and never mutated.

use serde::{Deserialize, Serialize};

use super::Status;

/// Timestamp format used for persisted entries
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One logged wellness record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Student the entry was logged for
    pub student_name: String,
    /// Wellness activity (letters and spaces)
    pub wellness_activity: String,
    /// Me-time activity (letters and spaces)
    pub me_time_activity: String,
    /// Screen-free time in minutes
    pub screen_free_minutes: u32,
    /// How often the activity happens (e.g. "3x", "2 times")
    pub frequency: String,
    /// Status computed by the classifier
    pub status: Status,
    /// Local time the entry was appended
    pub timestamp: String,
}

impl Entry {
    /// Create an entry, stamping it with the current local time
    #[must_use]
    pub fn new(
        student_name: String,
        wellness_activity: String,
        me_time_activity: String,
        screen_free_minutes: u32,
        frequency: String,
        status: Status,
    ) -> Self {
        Self {
            student_name,
            wellness_activity,
            me_time_activity,
            screen_free_minutes,
            frequency,
            status,
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Aggregate counts over a table of entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    /// Number of entries
    pub total: usize,
    /// Entries classified Healthy
    pub healthy: usize,
    /// Entries classified Needs More Me-Time
    pub needs_more_me_time: usize,
}

/// Ordered, append-only sequence of entries
///
/// The table is the in-memory image of the spreadsheet file. Rows keep
/// their append order; clearing replaces the whole sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntryTable {
    entries: Vec<Entry>,
}

impl EntryTable {
    /// Create a table from existing rows, preserving their order
    #[must_use]
    pub const fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Append one entry to the end of the table
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove the entry at `index` (0-based), returning it
    ///
    /// Returns `None` if the index is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Entry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Drop every row, leaving an empty table with the same schema
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate rows in append order
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Rows in append order
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Consume the table, yielding its rows
    #[must_use]
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// Compute the aggregate counts shown by both shells
    #[must_use]
    pub fn stats(&self) -> StatsSummary {
        let healthy = self.entries.iter().filter(|e| e.status == Status::Healthy).count();
        StatsSummary {
            total: self.entries.len(),
            healthy,
            needs_more_me_time: self.entries.len() - healthy,
        }
    }
}

impl<'a> IntoIterator for &'a EntryTable {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

//! CSV-backed entry store
//!
//! Implements the `EntryStore` port trait over one spreadsheet file with
//! a fixed column order. The file is fully rewritten on every save; a
//! missing file loads as an empty table.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::models::{Entry, EntryTable, Status};
use crate::core::ports::EntryStore;

/// Column order of the persisted spreadsheet
pub const COLUMNS: [&str; 7] = [
    "Student Name",
    "Wellness Activity",
    "Me-Time Activity",
    "Screen-Free Time (mins)",
    "Frequency",
    "Status",
    "Timestamp",
];

/// One spreadsheet row
///
/// Field order matches [`COLUMNS`]; serde renames carry the header
/// spellings.
#[derive(Debug, Serialize, Deserialize)]
struct Record {
    #[serde(rename = "Student Name")]
    student_name: String,
    #[serde(rename = "Wellness Activity")]
    wellness_activity: String,
    #[serde(rename = "Me-Time Activity")]
    me_time_activity: String,
    #[serde(rename = "Screen-Free Time (mins)")]
    screen_free_minutes: u32,
    #[serde(rename = "Frequency")]
    frequency: String,
    #[serde(rename = "Status")]
    status: Status,
    #[serde(rename = "Timestamp")]
    timestamp: String,
}

impl From<&Entry> for Record {
    fn from(entry: &Entry) -> Self {
        Self {
            student_name: entry.student_name.clone(),
            wellness_activity: entry.wellness_activity.clone(),
            me_time_activity: entry.me_time_activity.clone(),
            screen_free_minutes: entry.screen_free_minutes,
            frequency: entry.frequency.clone(),
            status: entry.status,
            timestamp: entry.timestamp.clone(),
        }
    }
}

impl From<Record> for Entry {
    fn from(record: Record) -> Self {
        Self {
            student_name: record.student_name,
            wellness_activity: record.wellness_activity,
            me_time_activity: record.me_time_activity,
            screen_free_minutes: record.screen_free_minutes,
            frequency: record.frequency,
            status: record.status,
            timestamp: record.timestamp,
        }
    }
}

/// Entry store backed by one CSV file
#[derive(Debug, Clone)]
pub struct CsvEntryStore {
    path: PathBuf,
}

impl CsvEntryStore {
    /// Create a store over the given file path
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntryStore for CsvEntryStore {
    fn load(&self) -> anyhow::Result<EntryTable> {
        if !self.path.exists() {
            log::debug!("{} does not exist, starting with empty table", self.path.display());
            return Ok(EntryTable::default());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut entries = Vec::new();
        for result in reader.deserialize::<Record>() {
            entries.push(Entry::from(result?));
        }

        log::debug!("loaded {} entries from {}", entries.len(), self.path.display());
        Ok(EntryTable::from_entries(entries))
    }

    fn save(&self, table: &EntryTable) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // The header row is written explicitly so an empty table still
        // persists the column schema.
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(&self.path)?;
        writer.write_record(COLUMNS)?;
        for entry in table {
            writer.serialize(Record::from(entry))?;
        }
        writer.flush()?;

        log::debug!("saved {} entries to {}", table.len(), self.path.display());
        Ok(())
    }
}

//! Entry store port
//!
//! Defines the interface for loading and persisting the entry table.

use super::super::models::{Entry, EntryTable};

/// Store for the persisted entry table
///
/// Implementations handle reading and writing the spreadsheet file.
/// The whole table is rewritten on every save; a missing file loads as
/// an empty table, any other I/O error propagates to the caller.
pub trait EntryStore {
    /// Load the whole table, or an empty one if no storage exists yet
    fn load(&self) -> anyhow::Result<EntryTable>;

    /// Write the whole table back, replacing previous contents
    fn save(&self, table: &EntryTable) -> anyhow::Result<()>;

    /// Append one entry and persist, returning the updated table
    fn append(&self, entry: Entry) -> anyhow::Result<EntryTable> {
        let mut table = self.load()?;
        table.push(entry);
        self.save(&table)?;
        Ok(table)
    }

    /// Remove the entry at a 1-based row position and persist
    ///
    /// Returns the removed entry.
    fn delete_row(&self, row: usize) -> anyhow::Result<Entry> {
        let mut table = self.load()?;
        if row == 0 || row > table.len() {
            anyhow::bail!("Row {} out of range (table has {} entries)", row, table.len());
        }
        let removed = table
            .remove(row - 1)
            .ok_or_else(|| anyhow::anyhow!("Row {row} out of range"))?;
        self.save(&table)?;
        Ok(removed)
    }

    /// Replace the table with an empty one, same schema
    fn clear(&self) -> anyhow::Result<()> {
        self.save(&EntryTable::default())
    }
}

//! Delete command - remove one entry by row number

use wellog::core::ports::EntryStore;
use wellog::output::{OperationResult, OutputMode};

/// Remove the entry at a 1-based row position and persist the table
pub fn delete(store: &dyn EntryStore, row: usize, mode: OutputMode) -> anyhow::Result<()> {
    let removed = store.delete_row(row)?;

    log::debug!("deleted row {row} ({})", removed.student_name);

    OperationResult {
        success: true,
        message: format!("Deleted entry {} ({})", row, removed.student_name),
    }
    .render(mode);

    Ok(())
}

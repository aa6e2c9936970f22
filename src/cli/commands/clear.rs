//! Clear command - empty the table, keeping the schema

use wellog::core::ports::EntryStore;
use wellog::output::{OperationResult, OutputMode};

/// Replace the persisted table with an empty one
pub fn clear(store: &dyn EntryStore, mode: OutputMode) -> anyhow::Result<()> {
    store.clear()?;

    OperationResult {
        success: true,
        message: "All entries cleared!".to_string(),
    }
    .render(mode);

    Ok(())
}

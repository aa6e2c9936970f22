//! List command - display the full table with aggregate counts

use wellog::core::ports::EntryStore;
use wellog::output::{EntryListResult, OutputMode};

/// Load the table and render every row plus the aggregate counts
pub fn list(store: &dyn EntryStore, mode: OutputMode) -> anyhow::Result<()> {
    let table = store.load()?;
    let stats = table.stats();

    EntryListResult {
        entries: table.into_entries(),
        stats,
    }
    .render(mode);

    Ok(())
}

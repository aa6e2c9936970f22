//! Stats command - the three aggregate counts

use wellog::core::ports::EntryStore;
use wellog::output::{OutputMode, StatsResult};

/// Load the table and render total / Healthy / Needs More Me-Time counts
pub fn stats(store: &dyn EntryStore, mode: OutputMode) -> anyhow::Result<()> {
    let table = store.load()?;

    StatsResult { stats: table.stats() }.render(mode);

    Ok(())
}

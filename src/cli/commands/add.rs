//! Add command - validate and record one entry

use wellog::core::models::Entry;
use wellog::core::ports::EntryStore;
use wellog::core::services::{EntryForm, classify, validate};
use wellog::output::{AddResult, OutputMode};

/// Validate the form, classify it, and append the entry to the store
///
/// Fields are whitespace-trimmed before validation. A validation failure
/// is reported to the user and nothing is recorded.
pub fn add(store: &dyn EntryStore, form: &EntryForm, mode: OutputMode) -> anyhow::Result<()> {
    let form = form.trimmed();
    let minutes = validate(&form)?;
    let status = classify(minutes, &form.wellness_activity, &form.me_time_activity);

    log::debug!("recording entry for {} with status {}", form.student_name, status);

    let entry = Entry::new(
        form.student_name,
        form.wellness_activity,
        form.me_time_activity,
        minutes,
        form.frequency,
        status,
    );
    store.append(entry)?;

    AddResult {
        success: true,
        status,
        message: "Entry added successfully!".to_string(),
    }
    .render(mode);

    Ok(())
}

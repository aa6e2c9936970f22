//! Status classifier
//!
//! Pure function mapping a validated submission to its status label.

use crate::core::models::Status;

/// Screen-free minutes required for a Healthy label
pub const HEALTHY_MINUTES: u32 = 60;

/// Classify an entry from its screen-free minutes and activity fields
///
/// Healthy requires the screen-free threshold and both activities
/// non-empty. The validator already rejects empty activities, but the
/// checks stay so the function is total over its three inputs.
#[must_use]
pub fn classify(screen_free_minutes: u32, wellness_activity: &str, me_time_activity: &str) -> Status {
    if screen_free_minutes >= HEALTHY_MINUTES
        && !wellness_activity.is_empty()
        && !me_time_activity.is_empty()
    {
        Status::Healthy
    } else {
        Status::NeedsMoreMeTime
    }
}

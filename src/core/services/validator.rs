//! Input validator for entry submissions
//!
//! Checks the five raw form fields in a fixed order; the first failing
//! rule wins and the entry is not recorded. On success the screen-free
//! minutes are returned parsed.

use std::sync::LazyLock;

use regex::Regex;

/// Letters and spaces only, for the name and both activity fields
static LETTERS_AND_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").expect("hard-coded pattern"));

/// Frequency grammar: a count with an optional unit suffix
static FREQUENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(x| times| per week)?$").expect("hard-coded pattern"));

/// The five raw string fields of a submission, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    /// Student name field
    pub student_name: String,
    /// Wellness activity field
    pub wellness_activity: String,
    /// Me-time activity field
    pub me_time_activity: String,
    /// Screen-free time field, still a string of digits
    pub screen_free_time: String,
    /// Frequency field (e.g. "3x", "2 times")
    pub frequency: String,
}

impl EntryForm {
    /// Copy of the form with every field whitespace-trimmed
    ///
    /// The CLI shell trims before validating; the web shell submits
    /// fields as typed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            student_name: self.student_name.trim().to_string(),
            wellness_activity: self.wellness_activity.trim().to_string(),
            me_time_activity: self.me_time_activity.trim().to_string(),
            screen_free_time: self.screen_free_time.trim().to_string(),
            frequency: self.frequency.trim().to_string(),
        }
    }
}

/// Rejection reason for an invalid submission
///
/// Each variant names the offending field and carries the message shown
/// to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Name empty or containing a non-letter character
    #[error("Student Name should only contain letters and spaces.")]
    StudentName,
    /// Wellness activity empty or containing a non-letter character
    #[error("Wellness Activity should only contain letters and spaces.")]
    WellnessActivity,
    /// Me-time activity empty or containing a non-letter character
    #[error("Me-Time Activity should only contain letters and spaces.")]
    MeTimeActivity,
    /// Screen-free time not a string of digits greater than zero
    #[error("Screen-Free Time must be a positive integer.")]
    ScreenFreeTime,
    /// Frequency empty or not matching the pattern grammar
    #[error("Frequency should be in a format like '3x' or '3 times'.")]
    Frequency,
}

impl ValidationError {
    /// Machine-readable name of the offending field
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::StudentName => "student_name",
            Self::WellnessActivity => "wellness_activity",
            Self::MeTimeActivity => "me_time_activity",
            Self::ScreenFreeTime => "screen_free_time",
            Self::Frequency => "frequency",
        }
    }
}

/// Validate a submission, returning the parsed screen-free minutes
///
/// Rules are checked in field order; the first failure wins.
pub fn validate(form: &EntryForm) -> Result<u32, ValidationError> {
    if form.student_name.is_empty() || !LETTERS_AND_SPACES.is_match(&form.student_name) {
        return Err(ValidationError::StudentName);
    }
    if form.wellness_activity.is_empty() || !LETTERS_AND_SPACES.is_match(&form.wellness_activity) {
        return Err(ValidationError::WellnessActivity);
    }
    if form.me_time_activity.is_empty() || !LETTERS_AND_SPACES.is_match(&form.me_time_activity) {
        return Err(ValidationError::MeTimeActivity);
    }

    // Digits only, then > 0. A sign or any other character fails the
    // digit check, so "-5" is rejected before parsing.
    let minutes = match parse_minutes(&form.screen_free_time) {
        Some(m) if m > 0 => m,
        _ => return Err(ValidationError::ScreenFreeTime),
    };

    if form.frequency.is_empty() || !FREQUENCY.is_match(&form.frequency) {
        return Err(ValidationError::Frequency);
    }

    Ok(minutes)
}

fn parse_minutes(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

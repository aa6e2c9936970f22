//! Test fixtures and builders
//!
//! Provides convenient builders for creating test data.

use wellog::core::models::{Entry, Status};

/// Builder for creating test entries
pub struct EntryBuilder {
    student_name: String,
    wellness_activity: String,
    me_time_activity: String,
    screen_free_minutes: u32,
    frequency: String,
    status: Status,
    timestamp: String,
}

impl EntryBuilder {
    pub fn new() -> Self {
        Self {
            student_name: "Alice".to_string(),
            wellness_activity: "Yoga".to_string(),
            me_time_activity: "Reading".to_string(),
            screen_free_minutes: 75,
            frequency: "3x".to_string(),
            status: Status::Healthy,
            timestamp: "2026-08-07 10:00:00".to_string(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.student_name = name.to_string();
        self
    }

    pub fn wellness(mut self, activity: &str) -> Self {
        self.wellness_activity = activity.to_string();
        self
    }

    pub fn me_time(mut self, activity: &str) -> Self {
        self.me_time_activity = activity.to_string();
        self
    }

    pub fn minutes(mut self, minutes: u32) -> Self {
        self.screen_free_minutes = minutes;
        self
    }

    pub fn frequency(mut self, frequency: &str) -> Self {
        self.frequency = frequency.to_string();
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    pub fn build(self) -> Entry {
        Entry {
            student_name: self.student_name,
            wellness_activity: self.wellness_activity,
            me_time_activity: self.me_time_activity,
            screen_free_minutes: self.screen_free_minutes,
            frequency: self.frequency,
            status: self.status,
            timestamp: self.timestamp,
        }
    }
}

impl Default for EntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

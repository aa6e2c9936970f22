//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{Entry, StatsSummary, Status};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Status label colored for terminal display
fn colored_status(status: Status) -> ColoredString {
    match status {
        Status::Healthy => status.to_string().green(),
        Status::NeedsMoreMeTime => status.to_string().yellow(),
    }
}

/// Result of adding an entry
#[derive(Debug, Serialize)]
pub struct AddResult {
    /// Whether the entry was recorded
    pub success: bool,
    /// Status the classifier assigned
    pub status: Status,
    /// Human-readable message
    pub message: String,
}

impl AddResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{}", self.message);
                println!("Status: {}", colored_status(self.status));
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Result of listing the entry table
#[derive(Debug, Serialize)]
pub struct EntryListResult {
    /// Rows in append order
    pub entries: Vec<Entry>,
    /// Aggregate counts over the rows
    pub stats: StatsSummary,
}

impl EntryListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        if self.entries.is_empty() {
            println!("No entries logged.");
            return;
        }

        for (row, entry) in self.entries.iter().enumerate() {
            println!(
                "  [{}] {} | {} | {} | {} mins | {} | {} | {}",
                row + 1,
                entry.student_name,
                entry.wellness_activity,
                entry.me_time_activity,
                entry.screen_free_minutes,
                entry.frequency,
                colored_status(entry.status),
                entry.timestamp,
            );
        }
        println!();
        println!(
            "{} entries: {} Healthy, {} Needs More Me-Time",
            self.stats.total, self.stats.healthy, self.stats.needs_more_me_time
        );
    }
}

/// The three aggregate counts shown by the statistics view
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsResult {
    /// Aggregate counts over the table
    pub stats: StatsSummary,
}

impl StatsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Total Entries: {}", self.stats.total);
                println!("{}: {}", "Healthy".green(), self.stats.healthy);
                println!("{}: {}", "Needs More Me-Time".yellow(), self.stats.needs_more_me_time);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

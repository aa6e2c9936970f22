//! wellog - A CLI and local web tool for logging and reporting student
//! wellness entries
//!
//! Entries are validated, classified as Healthy or Needs More Me-Time,
//! and appended to a spreadsheet file shared by both front ends.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

use std::process;

/// Main entry point for the wellog CLI
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

//! Adapter implementations for port traits
//!
//! Concrete implementations that handle I/O:
//!
//! - `csv/` - the spreadsheet file behind both front-end shells

pub mod csv;

pub use csv::CsvEntryStore;

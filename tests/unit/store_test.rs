//! Tests for the CSV entry store

use std::fs;

use tempfile::TempDir;
use wellog::adapters::CsvEntryStore;
use wellog::core::models::{EntryTable, Status};
use wellog::core::ports::EntryStore;

use super::common::EntryBuilder;

fn store_in(dir: &TempDir) -> CsvEntryStore {
    CsvEntryStore::new(dir.path().join("entries.csv"))
}

// =============================================================================
// ROUND-TRIP TESTS
// =============================================================================

#[test]
fn test_round_trip_preserves_rows_in_order() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let entries = vec![
        EntryBuilder::new().name("Alice").build(),
        EntryBuilder::new()
            .name("Bob")
            .minutes(30)
            .status(Status::NeedsMoreMeTime)
            .timestamp("2026-08-07 11:00:00")
            .build(),
        EntryBuilder::new().name("Cara").frequency("2 times").build(),
    ];

    let mut table = EntryTable::default();
    for entry in &entries {
        table.push(entry.clone());
    }
    store.save(&table).unwrap();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.entries(), entries.as_slice());
}

#[test]
fn test_append_adds_to_end() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(EntryBuilder::new().name("Alice").build()).unwrap();
    let table = store.append(EntryBuilder::new().name("Bob").build()).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.entries()[1].student_name, "Bob");

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.entries()[0].student_name, "Alice");
}

#[test]
fn test_missing_file_loads_as_empty_table() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let table = store.load().unwrap();
    assert!(table.is_empty());
    // Loading must not create the file
    assert!(!store.path().exists());
}

// =============================================================================
// CLEAR TESTS
// =============================================================================

#[test]
fn test_clear_leaves_header_only() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(EntryBuilder::new().build()).unwrap();
    store.append(EntryBuilder::new().name("Bob").build()).unwrap();
    store.clear().unwrap();

    let reloaded = store.load().unwrap();
    assert!(reloaded.is_empty());

    // The schema survives: the file still carries the header row
    let content = fs::read_to_string(store.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Student Name,"));
    assert!(lines[0].ends_with(",Timestamp"));
}

#[test]
fn test_clear_then_append_starts_fresh() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(EntryBuilder::new().name("Alice").build()).unwrap();
    store.clear().unwrap();
    store.append(EntryBuilder::new().name("Bob").build()).unwrap();

    let table = store.load().unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.entries()[0].student_name, "Bob");
}

// =============================================================================
// DELETE TESTS
// =============================================================================

#[test]
fn test_delete_row_is_one_based() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(EntryBuilder::new().name("Alice").build()).unwrap();
    store.append(EntryBuilder::new().name("Bob").build()).unwrap();
    store.append(EntryBuilder::new().name("Cara").build()).unwrap();

    let removed = store.delete_row(2).unwrap();
    assert_eq!(removed.student_name, "Bob");

    let names: Vec<String> =
        store.load().unwrap().iter().map(|e| e.student_name.clone()).collect();
    assert_eq!(names, ["Alice", "Cara"]);
}

#[test]
fn test_delete_row_out_of_range() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(EntryBuilder::new().build()).unwrap();

    assert!(store.delete_row(0).is_err());
    assert!(store.delete_row(2).is_err());
    // The table is untouched after a failed delete
    assert_eq!(store.load().unwrap().len(), 1);
}

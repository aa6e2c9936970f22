//! Tests for output result serialization

use wellog::core::models::Status;
use wellog::output::{AddResult, EntryListResult, OperationResult, StatsResult};

use super::common::EntryBuilder;

#[test]
fn test_add_result_json_carries_status_label() {
    let result = AddResult {
        success: true,
        status: Status::NeedsMoreMeTime,
        message: "Entry added successfully!".to_string(),
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["status"], "Needs More Me-Time");
    assert_eq!(json["message"], "Entry added successfully!");
}

#[test]
fn test_entry_list_json_shape() {
    let entries = vec![
        EntryBuilder::new().name("Alice").build(),
        EntryBuilder::new().name("Bob").status(Status::NeedsMoreMeTime).build(),
    ];
    let result = EntryListResult {
        stats: wellog::core::models::EntryTable::from_entries(entries.clone()).stats(),
        entries,
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["entries"].as_array().unwrap().len(), 2);
    assert_eq!(json["entries"][0]["student_name"], "Alice");
    assert_eq!(json["entries"][0]["screen_free_minutes"], 75);
    assert_eq!(json["entries"][1]["status"], "Needs More Me-Time");
    assert_eq!(json["stats"]["total"], 2);
    assert_eq!(json["stats"]["healthy"], 1);
    assert_eq!(json["stats"]["needs_more_me_time"], 1);
}

#[test]
fn test_stats_result_json_shape() {
    let table = wellog::core::models::EntryTable::from_entries(vec![
        EntryBuilder::new().build(),
        EntryBuilder::new().status(Status::NeedsMoreMeTime).build(),
        EntryBuilder::new().status(Status::NeedsMoreMeTime).build(),
    ]);
    let result = StatsResult { stats: table.stats() };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["stats"]["total"], 3);
    assert_eq!(json["stats"]["healthy"], 1);
    assert_eq!(json["stats"]["needs_more_me_time"], 2);
}

#[test]
fn test_operation_result_json_shape() {
    let result = OperationResult {
        success: true,
        message: "All entries cleared!".to_string(),
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "All entries cleared!");
}

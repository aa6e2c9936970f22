//! Full entry lifecycle: add, list, stats, delete, clear
//!
//! Exercises the whole read-validate-write-redisplay cycle against one
//! data file, checking the persisted spreadsheet along the way.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn wellog_in(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("wellog"));
    cmd.current_dir(dir);
    cmd
}

fn add(dir: &Path, name: &str, wellness: &str, me_time: &str, minutes: &str, frequency: &str) {
    wellog_in(dir)
        .args([
            "add",
            "--name",
            name,
            "--wellness",
            wellness,
            "--me-time",
            me_time,
            "--screen-free",
            minutes,
            "--frequency",
            frequency,
        ])
        .assert()
        .success();
}

#[test]
fn test_full_lifecycle() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    let data_file = dir.join("wellness_entries.csv");

    // Start empty
    wellog_in(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries logged."));

    // Add three entries, one below the screen-free threshold
    add(dir, "Alice", "Yoga", "Reading", "75", "3x");
    add(dir, "Bob", "Walking", "Music", "45", "2 times");
    add(dir, "Cara", "Swimming", "Drawing", "60", "1 per week");

    // The spreadsheet holds the rows in append order under the schema
    let content = std::fs::read_to_string(&data_file).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Student Name,Wellness Activity,"));
    assert!(lines[1].starts_with("Alice,"));
    assert!(lines[2].starts_with("Bob,"));
    assert!(lines[3].starts_with("Cara,"));
    assert!(lines[2].contains("Needs More Me-Time"));
    assert!(lines[3].contains("Healthy"));

    // Counts reflect the classification
    wellog_in(dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Entries: 3"))
        .stdout(predicate::str::contains("Healthy: 2"))
        .stdout(predicate::str::contains("Needs More Me-Time: 1"));

    // Rejected submissions leave the table untouched
    wellog_in(dir)
        .args([
            "add", "--name", "Dave", "--wellness", "Gym", "--me-time", "TV",
            "--screen-free", "-10", "--frequency", "3x",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Screen-Free Time must be a positive integer."));
    wellog_in(dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Entries: 3"));

    // Delete the middle row; order of the rest is preserved
    wellog_in(dir)
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry 2 (Bob)"));

    let content = std::fs::read_to_string(&data_file).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("Alice,"));
    assert!(lines[2].starts_with("Cara,"));

    // Clear-all leaves an empty table with the schema intact
    wellog_in(dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("All entries cleared!"));

    let content = std::fs::read_to_string(&data_file).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.starts_with("Student Name,"));

    wellog_in(dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Entries: 0"));
}

#[test]
fn test_reload_after_restart_matches_appended_rows() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    let names = ["Alice", "Bob", "Cara", "Dana", "Ellen"];
    for name in names {
        add(dir, name, "Yoga", "Reading", "90", "3x");
    }

    // A fresh process sees the same rows in the same order
    let output = wellog_in(dir).args(["--json", "list"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let listed: Vec<&str> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["student_name"].as_str().unwrap())
        .collect();
    assert_eq!(listed, names);
    assert_eq!(json["stats"]["total"], 5);
    assert_eq!(json["stats"]["healthy"], 5);
}

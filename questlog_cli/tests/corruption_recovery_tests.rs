//! Corruption recovery tests for questlog.
//!
//! These tests verify the system can handle:
//! - Malformed collection lines
//! - Partial writes at the end of a collection
//! - Missing files
//! - Invalid configuration

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::io::Write as IoWrite;
use std::path::Path;
use tempfile::TempDir;

const NOW: &str = "2024-06-05T18:00:00+00:00";

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("questlog"))
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn status_json(data_dir: &Path) -> Value {
    let output = cli()
        .arg("status")
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--config")
        .arg(data_dir.join("config.toml"))
        .arg("--now")
        .arg(NOW)
        .arg("--json")
        .output()
        .expect("Failed to run questlog");
    assert!(output.status.success(), "questlog failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_malformed_lines_are_skipped() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    fs::write(data_dir.join("config.toml"), "").unwrap();

    fs::write(
        data_dir.join("workouts.jsonl"),
        concat!(
            "{\"id\":\"s1\",\"exercise\":\"Squat\",\"weight\":100,\"reps\":5,\"date\":\"2024-06-05T17:00:00Z\"}\n",
            "{ invalid json }\n",
            "{\"id\":\"s2\",\"exercise\":\"Squat\",\"weight\":100,\"reps\":5,\"date\":\"not a date\"}\n",
            "\n",
            "{\"id\":\"s3\",\"exercise\":\"Bench\",\"weight\":60,\"reps\":8,\"date\":\"2024-06-04T17:00:00Z\"}\n",
        ),
    )
    .unwrap();

    let board = status_json(data_dir);

    // Two valid sets survive
    assert_eq!(board["stats"]["total_workouts"], 2);
    assert_eq!(board["progress"]["xp"], 40);
    assert_eq!(board["stats"]["streak"], 2);
}

#[test]
fn test_bad_numeric_fields_keep_the_entry() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    fs::write(data_dir.join("config.toml"), "").unwrap();

    fs::write(
        data_dir.join("cardio_logs.jsonl"),
        concat!(
            "{\"id\":\"c1\",\"equipment\":\"Running\",\"duration\":50,\"distance\":8,\"calories\":612.5,\"date\":\"2024-06-05T07:00:00Z\"}\n",
            "{\"id\":\"c2\",\"equipment\":\"Running\",\"duration\":30,\"distance\":null,\"calories\":200,\"date\":\"2024-06-04T07:00:00Z\"}\n",
        ),
    )
    .unwrap();
    fs::write(
        data_dir.join("bodyweight_logs.jsonl"),
        "{\"id\":\"b1\",\"type\":\"Situps\",\"count\":12.0,\"date\":\"2024-06-03T07:00:00Z\"}\n",
    )
    .unwrap();

    let board = status_json(data_dir);

    // Every entry still counts toward streak, buckets and XP
    assert_eq!(board["stats"]["streak"], 3);
    assert_eq!(board["stats"]["early_bird_count"], 3);
    assert_eq!(board["xp_breakdown"]["cardio"], 80);
    assert_eq!(board["xp_breakdown"]["bodyweight"], 12);
}

#[test]
fn test_partial_tail_write_ignored() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    fs::write(data_dir.join("config.toml"), "").unwrap();

    let mut file = fs::File::create(data_dir.join("weight_logs.jsonl")).unwrap();
    writeln!(
        file,
        "{{\"id\":\"w1\",\"weight\":90.0,\"date\":\"2024-06-05T07:00:00Z\"}}"
    )
    .unwrap();
    // Simulate a writer interrupted mid-line
    write!(file, "{{\"id\":\"w2\",\"weight\":89.").unwrap();
    drop(file);

    let board = status_json(data_dir);
    assert_eq!(board["xp_breakdown"]["weight"], 50);
}

#[test]
fn test_unknown_enum_values_tolerated() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    fs::write(data_dir.join("config.toml"), "").unwrap();

    fs::write(
        data_dir.join("food_logs.jsonl"),
        "{\"id\":\"n1\",\"status\":\"purple\",\"date\":\"2024-06-05T12:00:00Z\"}\n",
    )
    .unwrap();
    fs::write(
        data_dir.join("bodyweight_logs.jsonl"),
        "{\"id\":\"b1\",\"type\":\"Burpees\",\"count\":15,\"date\":\"2024-06-05T12:00:00Z\"}\n",
    )
    .unwrap();

    let board = status_json(data_dir);

    // Unknown nutrition status earns the lowest tier
    assert_eq!(board["xp_breakdown"]["nutrition"], 5);
    assert_eq!(board["xp_breakdown"]["bodyweight"], 15);
}

#[test]
fn test_missing_data_dir_is_empty() {
    let temp_dir = setup_test_dir();
    let config_dir = temp_dir.path();
    fs::write(config_dir.join("config.toml"), "").unwrap();

    let board = status_json(&config_dir.join("does-not-exist"));
    assert_eq!(board["progress"]["xp"], 0);
    assert_eq!(board["progress"]["level"], 1);
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    fs::write(data_dir.join("config.toml"), "[display\nheatmap_days = ").unwrap();

    cli()
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--config")
        .arg(data_dir.join("config.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Toml"));
}

#[test]
fn test_config_validation_rejects_zero_heatmap_days() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    fs::write(data_dir.join("config.toml"), "[display]\nheatmap_days = 0\n").unwrap();

    cli()
        .arg("heatmap")
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--config")
        .arg(data_dir.join("config.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("heatmap_days"));
}

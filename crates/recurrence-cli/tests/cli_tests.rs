//! Integration tests for the `recur` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise every subcommand
//! through the actual binary, including stdin/stdout piping, file I/O, config
//! files and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Helper: absolute path of a fixture file.
fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Helper: run `recur` with `args` and parse stdout as JSON.
fn run_json(args: &[&str]) -> Value {
    let output = Command::cargo_bin("recur")
        .unwrap()
        .args(args)
        .output()
        .expect("recur must run");
    assert!(output.status.success(), "recur {:?} failed", args);
    serde_json::from_slice(&output.stdout).expect("stdout must be JSON")
}

fn dates(events: &Value) -> Vec<String> {
    events
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|e| e["date"].as_str().unwrap().to_string())
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// expand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn expand_file_skips_short_months() {
    let events = run_json(&["expand", "-i", &fixture("monthly_31st.json")]);
    assert_eq!(dates(&events), ["2025-01-31", "2025-03-31", "2025-05-31"]);
    assert_eq!(events[0]["title"], "Rent due");
    assert_eq!(events[0]["repeat"]["endDate"], "2025-06-30");
}

#[test]
fn expand_stdin_with_sequential_ids() {
    let input = r#"{
        "title": "Walk",
        "date": "2025-05-01",
        "startTime": "07:00",
        "endTime": "07:30",
        "repeat": { "type": "daily", "interval": 2, "endDate": "2025-05-05" }
    }"#;

    let output = Command::cargo_bin("recur")
        .unwrap()
        .args(["expand", "--sequential-ids", "walk"])
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let events: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(dates(&events), ["2025-05-01", "2025-05-03", "2025-05-05"]);
    assert_eq!(events[0]["id"], "walk-2");
    assert_eq!(events[2]["id"], "walk-4");
    assert_eq!(events[1]["repeat"]["id"], "walk-1");
}

#[test]
fn expand_respects_max_occurrences_flag() {
    let input = r#"{
        "title": "Journal",
        "date": "2025-01-01",
        "startTime": "21:00",
        "endTime": "21:15",
        "repeat": { "type": "daily", "interval": 1 }
    }"#;

    let output = Command::cargo_bin("recur")
        .unwrap()
        .args(["expand", "--max-occurrences", "4"])
        .write_stdin(input)
        .output()
        .unwrap();
    let events: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(events.as_array().unwrap().len(), 4);
}

#[test]
fn expand_ceiling_flag_clamps_end_date() {
    let events = run_json(&[
        "expand",
        "-i",
        &fixture("monthly_31st.json"),
        "--ceiling",
        "2025-03-31",
    ]);
    assert_eq!(dates(&events), ["2025-01-31", "2025-03-31"]);
    assert_eq!(events[1]["repeat"]["endDate"], "2025-03-31");
}

#[test]
fn expand_reads_limits_from_toml_config() {
    let events = run_json(&[
        "expand",
        "-i",
        &fixture("monthly_31st.json"),
        "--config",
        &fixture("limits.toml"),
    ]);
    // Three attempts: Jan 31 (kept), Feb 31 (skipped), Mar 31 (kept).
    assert_eq!(dates(&events), ["2025-01-31", "2025-03-31"]);
}

#[test]
fn expand_file_to_file() {
    let output_path = std::env::temp_dir().join("recur-test-expand-output.json");
    let _ = std::fs::remove_file(&output_path);

    Command::cargo_bin("recur")
        .unwrap()
        .args(["expand", "-i", &fixture("monthly_31st.json"), "-o"])
        .arg(&output_path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    let events: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(events.as_array().unwrap().len(), 3);

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn expand_rejects_zero_cap() {
    Command::cargo_bin("recur")
        .unwrap()
        .args(["expand", "-i", &fixture("monthly_31st.json"), "--max-occurrences", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_occurrences must be at least 1"));
}

#[test]
fn expand_rejects_malformed_template() {
    Command::cargo_bin("recur")
        .unwrap()
        .arg("expand")
        .write_stdin(r#"{"title": "x", "date": "01/02/2025"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse event template"));
}

#[test]
fn expand_missing_file_fails() {
    Command::cargo_bin("recur")
        .unwrap()
        .args(["expand", "-i", "/nonexistent/template.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// bulk
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bulk_expands_recurring_and_keeps_one_off_templates() {
    let payload = run_json(&["bulk", "-i", &fixture("templates.json"), "--sequential-ids", "b"]);
    let events = &payload["events"];

    assert_eq!(
        dates(events),
        ["2025-03-03", "2025-03-10", "2025-03-17", "2025-03-05"]
    );
    assert_eq!(events[0]["id"], "b-2");
    assert!(events[3].get("id").is_none());
    assert_eq!(events[3]["title"], "Dentist");
}

// ─────────────────────────────────────────────────────────────────────────────
// next / check
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn next_daily_crosses_month() {
    Command::cargo_bin("recur")
        .unwrap()
        .args(["next", "2025-01-30", "daily", "--interval", "5"])
        .assert()
        .success()
        .stdout("2025-02-04\n");
}

#[test]
fn next_monthly_may_produce_missing_day() {
    Command::cargo_bin("recur")
        .unwrap()
        .args(["next", "2024-01-31", "monthly"])
        .assert()
        .success()
        .stdout("2024-02-31\n");
}

#[test]
fn next_negative_interval_steps_once() {
    Command::cargo_bin("recur")
        .unwrap()
        .args(["next", "2025-11-15", "monthly", "--interval", "-2"])
        .assert()
        .success()
        .stdout("2025-12-15\n");
}

#[test]
fn next_unknown_frequency_fails() {
    Command::cargo_bin("recur")
        .unwrap()
        .args(["next", "2025-01-01", "hourly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid frequency"));
}

#[test]
fn check_leap_day_candidates() {
    Command::cargo_bin("recur")
        .unwrap()
        .args(["check", "2020-02-29", "2024-02-29", "yearly"])
        .assert()
        .success()
        .stdout("true\n");

    Command::cargo_bin("recur")
        .unwrap()
        .args(["check", "2020-02-29", "2021-02-29", "yearly"])
        .assert()
        .success()
        .stdout("false\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// conflicts
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn conflicts_reports_overlapping_pairs_only() {
    let conflicts = run_json(&["conflicts", "-i", &fixture("events.json")]);
    let conflicts = conflicts.as_array().unwrap();

    // Review overlaps lunch by 30 minutes; lunch and gym are merely adjacent.
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0]["event_a"]["id"], "1");
    assert_eq!(conflicts[0]["event_b"]["id"], "2");
    assert_eq!(conflicts[0]["overlap_minutes"], 30);
}

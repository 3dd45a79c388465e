//! Integration tests for the `daygrid` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the pack and grid
//! subcommands through the actual binary, including stdin/stdout piping,
//! file I/O, payload passthrough, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the events.json fixture.
fn events_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/events.json")
}

// ─────────────────────────────────────────────────────────────────────────────
// Pack subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn pack_stdin_to_stdout() {
    let input = r#"[
        {"start":"2026-03-01T09:00:00Z","end":"2026-03-01T10:00:00Z","title":"Standup"},
        {"start":"2026-03-01T09:30:00Z","end":"2026-03-01T10:30:00Z","title":"Design review"}
    ]"#;

    Command::cargo_bin("daygrid")
        .unwrap()
        .arg("pack")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"top\""))
        .stdout(predicate::str::contains("\"left\""))
        .stdout(predicate::str::contains("Standup"));
}

#[test]
fn pack_file_to_stdout() {
    Command::cargo_bin("daygrid")
        .unwrap()
        .args(["pack", "-i", events_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Design review"));
}

#[test]
fn pack_file_to_file_carries_payloads_through() {
    let output_path = "/tmp/daygrid-test-pack-output.json";

    // Clean up from any prior run
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("daygrid")
        .unwrap()
        .args(["pack", "-i", events_json_path(), "-o", output_path])
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    let packed: serde_json::Value = serde_json::from_str(&content).expect("output must be JSON");
    let packed = packed.as_array().expect("output must be an array");

    assert_eq!(packed.len(), 3, "every input event must come back out");

    // The overlapping morning pair splits the default 350 px of usable
    // width; the afternoon 1:1 stands alone and takes all of it.
    assert_eq!(packed[0]["index"], 0);
    assert_eq!(packed[0]["title"], "Standup");
    assert_eq!(packed[0]["color"], "#00aaff");
    assert_eq!(packed[0]["width"], 175.0);
    assert_eq!(packed[1]["left"], 225.0);
    assert_eq!(packed[2]["title"], "1:1");
    assert_eq!(packed[2]["width"], 350.0);

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn pack_honors_width_and_day_start_flags() {
    let input = r#"[{"start":"2026-03-01T09:00:00Z","end":"2026-03-01T10:00:00Z"}]"#;

    Command::cargo_bin("daygrid")
        .unwrap()
        .args(["pack", "--width", "300", "--day-start", "8"])
        .write_stdin(input)
        .assert()
        .success()
        // (9 - 8) hours below the top at 100 px/hour, 250 px wide.
        .stdout(predicate::str::contains("\"top\": 100.0"))
        .stdout(predicate::str::contains("\"width\": 250.0"));
}

#[test]
fn pack_accepts_naive_datetimes() {
    let input = r#"[{"start":"2026-03-01T09:00:00","end":"2026-03-01T10:00:00"}]"#;

    Command::cargo_bin("daygrid")
        .unwrap()
        .arg("pack")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"top\": 900.0"));
}

#[test]
fn pack_invalid_json_fails() {
    Command::cargo_bin("daygrid")
        .unwrap()
        .arg("pack")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse events JSON"));
}

#[test]
fn pack_unparseable_datetime_fails() {
    let input = r#"[{"start":"tomorrow-ish","end":"2026-03-01T10:00:00Z"}]"#;

    Command::cargo_bin("daygrid")
        .unwrap()
        .arg("pack")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid datetime"));
}

#[test]
fn pack_zero_duration_event_fails() {
    let input = r#"[{"start":"2026-03-01T09:00:00Z","end":"2026-03-01T09:00:00Z"}]"#;

    Command::cargo_bin("daygrid")
        .unwrap()
        .arg("pack")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to pack events"));
}

#[test]
fn pack_non_positive_width_fails() {
    let input = r#"[{"start":"2026-03-01T09:00:00Z","end":"2026-03-01T10:00:00Z"}]"#;

    Command::cargo_bin("daygrid")
        .unwrap()
        .args(["pack", "--width", "0"])
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to pack events"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Grid subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn grid_prints_twelve_hour_labels() {
    Command::cargo_bin("daygrid")
        .unwrap()
        .args(["grid", "--day-start", "9", "--day-end", "17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 AM"))
        .stdout(predicate::str::contains("12 PM"))
        .stdout(predicate::str::contains("5 PM"));
}

#[test]
fn grid_prints_twenty_four_hour_labels() {
    Command::cargo_bin("daygrid")
        .unwrap()
        .args(["grid", "--day-start", "9", "--day-end", "17", "--format24h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("13"))
        .stdout(predicate::str::contains("PM").not());
}

#[test]
fn grid_empty_range_fails() {
    Command::cargo_bin("daygrid")
        .unwrap()
        .args(["grid", "--day-start", "17", "--day-end", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("day range is empty"));
}

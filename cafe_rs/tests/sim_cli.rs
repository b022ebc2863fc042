//! End-to-end tests for the `carousel-sim` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn sim() -> Command {
    cargo_bin_cmd!("carousel-sim")
}

#[test]
fn shows_help() {
    sim()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn table_output_lists_every_event() {
    sim()
        .arg(fixtures_path().join("swipes.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("swipe 400->480"))
        .stdout(predicate::str::contains("go_to 9"))
        .stdout(predicate::str::contains("wait 5000ms"));
}

#[test]
fn json_output_tracks_index() {
    let output = sim()
        .arg("--json")
        .arg(fixtures_path().join("swipes.json"))
        .output()
        .expect("run carousel-sim");
    assert!(output.status.success());

    let frames: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json frames");
    let indexes: Vec<u64> = frames
        .as_array()
        .expect("array")
        .iter()
        .map(|f| f["index"].as_u64().expect("index"))
        .collect();
    // init, go_to 2, right swipe, left swipe, short swipe, bad index, autoplay
    assert_eq!(indexes, vec![0, 2, 1, 2, 2, 2, 3]);
}

#[test]
fn config_override_changes_threshold() {
    let temp = TempDir::new().expect("temp dir");
    let config = temp.path().join("carousel.json");
    std::fs::write(&config, r#"{ "swipe_threshold_px": 200 }"#).expect("write config");

    let output = sim()
        .arg("--json")
        .arg("--config")
        .arg(&config)
        .arg(fixtures_path().join("swipes.json"))
        .output()
        .expect("run carousel-sim");
    assert!(output.status.success());

    let frames: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json frames");
    // 80px swipes no longer commit.
    assert_eq!(frames[2]["index"], 2);
    assert_eq!(frames[3]["index"], 2);
}

#[test]
fn missing_script_fails() {
    sim()
        .arg("does-not-exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.json"));
}

#[test]
fn empty_carousel_fails() {
    let temp = TempDir::new().expect("temp dir");
    let script = temp.path().join("empty.json");
    std::fs::write(&script, r#"{ "slides": 0, "events": [] }"#).expect("write script");

    sim()
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no slides"));
}

#[test]
fn oversized_carousel_fails_cleanly() {
    let temp = TempDir::new().expect("temp dir");
    let script = temp.path().join("huge.json");
    std::fs::write(&script, r#"{ "slides": 18446744073709551615, "events": [] }"#)
        .expect("write script");

    sim()
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the limit"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn endless_wait_fails_cleanly() {
    let temp = TempDir::new().expect("temp dir");
    let script = temp.path().join("forever.json");
    std::fs::write(
        &script,
        r#"{ "slides": 3, "events": [ { "type": "wait", "ms": 18446744073709551615 } ] }"#,
    )
    .expect("write script");

    sim()
        .arg(&script)
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .failure()
        .stderr(predicate::str::contains("autoplay intervals"));
}

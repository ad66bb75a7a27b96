//! Integration tests for the `panchang` binary.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn delhi_day(date: &str) -> Command {
    let mut cmd = Command::cargo_bin("panchang").unwrap();
    cmd.args([
        "day", "--date", date, "--lat", "28.6139", "--lon", "77.2090", "--tz", "5.5",
    ]);
    cmd
}

#[test]
fn text_output_lists_elements() {
    delhi_day("2024-01-15")
        .assert()
        .success()
        .stdout(predicate::str::contains("Panchang for 2024-01-15"))
        .stdout(predicate::str::contains("Vaar:      Monday"))
        .stdout(predicate::str::contains("Amanta:      Pausha"))
        .stdout(predicate::str::contains("Vikram:      2080"))
        .stdout(predicate::str::contains("Rahu Kalam"))
        .stdout(predicate::str::contains("Choghadiya:"));
}

#[test]
fn text_output_marks_signs_and_choghadiya() {
    delhi_day("2024-01-15")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sun sign:    Makara (Capricorn)"))
        .stdout(predicate::str::contains("favourable"))
        .stdout(predicate::str::contains("avoid"));
}

#[test]
fn json_output_parses() {
    let out = delhi_day("2024-01-15").arg("--json").output().unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["date"], "2024-01-15");
    assert_eq!(v["vaar"], "Monday");
    assert_eq!(v["month"]["amanta"]["masa"], "Pausha");
    assert_eq!(v["intervals"]["choghadiya"].as_array().map(Vec::len), Some(16));
}

#[test]
fn instant_selects_local_date() {
    // 20:00 UT on the 14th is 01:30 on the 15th in Delhi.
    Command::cargo_bin("panchang")
        .unwrap()
        .args([
            "day",
            "--at",
            "2024-01-14T20:00:00Z",
            "--lat",
            "28.6139",
            "--lon",
            "77.2090",
            "--tz",
            "5.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Panchang for 2024-01-15"));
}

#[test]
fn config_file_is_applied() {
    let out = delhi_day("2024-01-15")
        .args(["--config", &fixture("config.json"), "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["date"], "2024-01-15");
}

#[test]
fn default_config_round_trips() {
    Command::cargo_bin("panchang")
        .unwrap()
        .arg("default-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"min_window_minutes\": 5.0"))
        .stdout(predicate::str::contains("\"varjyam_tradition\": \"double_moola\""));
}

#[test]
fn lists_ayanamshas() {
    Command::cargo_bin("panchang")
        .unwrap()
        .arg("ayanamshas")
        .assert()
        .success()
        .stdout(predicate::str::contains("lahiri"))
        .stdout(predicate::str::contains("krishnamurti"));
}

#[test]
fn rejects_unknown_ayanamsha() {
    delhi_day("2024-01-15")
        .args(["--ayanamsha", "nonesuch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown ayanamsha system"));
}

#[test]
fn rejects_bad_latitude() {
    Command::cargo_bin("panchang")
        .unwrap()
        .args(["day", "--date", "2024-01-15", "--lat", "95", "--lon", "0", "--tz", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid location"));
}

#[test]
fn rejects_bad_date() {
    delhi_day("2024-02-30")
        .assert()
        .failure();
}

#[test]
fn requires_date_or_instant() {
    Command::cargo_bin("panchang")
        .unwrap()
        .args(["day", "--lat", "28.6", "--lon", "77.2", "--tz", "5.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--date or --at"));
}

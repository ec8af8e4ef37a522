//! CLI integration tests for barforge.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn barforge() -> Command {
    Command::cargo_bin("barforge").unwrap()
}

#[test]
fn help_mentions_commands() {
    barforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("encode"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn encode_prints_grid_and_text() {
    barforge()
        .args(["encode", "--symbology", "code39"])
        .args(["--data", "AB", "--format", "ascii-01"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1"))
        .stdout(predicate::str::contains("*AB*"));
}

#[test]
fn encode_json_report() {
    barforge()
        .args(["encode", "-b", "3", "-d", "123", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\": \"0123\""))
        .stdout(predicate::str::contains("\"rows\": 1"));
}

#[test]
fn encode_reads_stdin() {
    barforge()
        .args(["encode", "--symbology", "code93", "--format", "plot"])
        .write_stdin("TEST93")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[\n [ 1 "))
        .stdout(predicate::str::contains("TEST93+6"));
}

#[test]
fn encode_error_fails_with_tagged_message() {
    barforge()
        .args(["encode", "--symbology", "code39", "--data", "AB#"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: Invalid characters in data"));
}

#[test]
fn legacy_id_warns_but_succeeds() {
    barforge()
        .args(["encode", "--symbology", "0", "--data", "ABC"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: Symbology out of range, using Code 128"));
}

#[test]
fn unknown_symbology_name_is_rejected() {
    barforge()
        .args(["encode", "--symbology", "code4000", "--data", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown symbology"));
}

#[test]
fn config_file_is_applied_and_flags_override() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    config
        .write_all(br#"{"symbology": "code39", "check_digit": true}"#)
        .unwrap();
    let path = config.path().to_str().unwrap();

    barforge()
        .args(["encode", "--config", path])
        .args(["--data", "123", "--format", "ascii-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*1236*"));

    barforge()
        .args(["encode", "--config", path, "-b", "hibc39", "-d", "A123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*+A123E*"));
}

#[test]
fn list_shows_encodable_symbologies() {
    barforge()
        .args(["list", "--encodable"])
        .assert()
        .success()
        .stdout(predicate::str::contains("code39"))
        .stdout(predicate::str::contains("hibc128"))
        .stdout(predicate::str::contains("datamatrix").not());
}

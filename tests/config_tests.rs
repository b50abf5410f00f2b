//! Integration tests for configuration loading and the config command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::remit_cmd;

#[test]
fn test_config_defaults() {
    let temp = TempDir::new().unwrap();

    remit_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("short_sentence_policy = \"return-lpd\""))
        .stdout(predicate::str::contains("date_format = \"%d-%m-%Y\""))
        .stdout(predicate::str::contains("strict_ranges = true"));
}

#[test]
fn test_config_get_key() {
    let temp = TempDir::new().unwrap();

    remit_cmd()
        .current_dir(temp.path())
        .args(["config", "short_sentence_policy"])
        .assert()
        .success()
        .stdout("return-lpd\n");
}

#[test]
fn test_config_unknown_key() {
    let temp = TempDir::new().unwrap();

    remit_cmd()
        .current_dir(temp.path())
        .args(["config", "editor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_local_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("remit.toml"),
        "short_sentence_policy = \"add-day\"\ndate_format = \"%Y/%m/%d\"\n",
    )
    .unwrap();

    remit_cmd()
        .current_dir(temp.path())
        .args(["calc", "2024-01-01", "10d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Latest possible discharge:   2024/01/10"))
        .stdout(predicate::str::contains("Earliest possible discharge: 2024/01/11"));
}

#[test]
fn test_explicit_config_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(&path, "strict_ranges = false\n").unwrap();

    remit_cmd()
        .current_dir(temp.path())
        .arg("--config")
        .arg(&path)
        .args(["calc", "2024-01-01", "40d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 years, 0 months, 10 days (short sentence)"));
}

#[test]
fn test_config_path_from_env() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(&path, "short_sentence_policy = \"add-day\"\n").unwrap();

    remit_cmd()
        .current_dir(temp.path())
        .env("REMIT_CONFIG", &path)
        .args(["config", "short_sentence_policy"])
        .assert()
        .success()
        .stdout("add-day\n");
}

#[test]
fn test_missing_explicit_config() {
    let temp = TempDir::new().unwrap();

    remit_cmd()
        .current_dir(temp.path())
        .args(["--config", "missing.toml", "config", "--list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_invalid_date_format_override() {
    let temp = TempDir::new().unwrap();

    remit_cmd()
        .current_dir(temp.path())
        .env("REMIT_DATE_FORMAT", "%Q")
        .args(["calc", "2024-01-01", "10d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date_format"));
}

#[test]
fn test_time_fields_in_date_format_override() {
    let temp = TempDir::new().unwrap();

    remit_cmd()
        .current_dir(temp.path())
        .env("REMIT_DATE_FORMAT", "%d-%m-%Y %H:%M")
        .args(["calc", "2024-01-01", "10d"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid date_format"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_time_fields_in_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("remit.toml"), "date_format = \"%H:%M\"\n").unwrap();

    remit_cmd()
        .current_dir(temp.path())
        .args(["calc", "2024-01-01", "10d"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid date_format"));
}

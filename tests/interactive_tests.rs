//! Integration tests for the interactive prompt

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::remit_cmd;

#[test]
fn test_interactive_session() {
    let temp = TempDir::new().unwrap();

    remit_cmd()
        .current_dir(temp.path())
        .arg("interactive")
        .write_stdin("2024-01-01\n1m 10d\n2024-01-01\n3y\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentence date (YYYY-MM-DD): "))
        .stdout(predicate::str::contains("Earliest possible discharge: 01-02-2024"))
        .stdout(predicate::str::contains("Earliest possible discharge: 31-12-2025"));
}

#[test]
fn test_interactive_recovers_from_errors() {
    let temp = TempDir::new().unwrap();

    remit_cmd()
        .current_dir(temp.path())
        .arg("interactive")
        .write_stdin("31-02-2024\n10d\nclear\n2024-01-01\n10d\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid date: 31-02-2024"))
        .stdout(predicate::str::contains("Cleared."))
        .stdout(predicate::str::contains("Earliest possible discharge: 10-01-2024"));
}

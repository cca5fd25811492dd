//! Integration tests for the `primer` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn primer() -> Command {
    let mut cmd = Command::cargo_bin("primer").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_demo() {
    primer()
        .assert()
        .success()
        .code(0)
        .stdout("Hello, World!\n2 + 3 = 5\n4 * 5 = 20\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn verbose_keeps_stdout_unchanged() {
    primer()
        .arg("-vv")
        .assert()
        .success()
        .stdout("Hello, World!\n2 + 3 = 5\n4 * 5 = 20\n");
}

#[test]
fn version_flag() {
    primer()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("primer "));
}

#[test]
fn help_flag() {
    primer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn unknown_argument_fails() {
    primer()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bogus"));
}

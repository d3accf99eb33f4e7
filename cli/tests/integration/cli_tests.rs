//! Argument parsing and help output.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn ec2ops() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ec2ops"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_lists_operation_flags() {
    ec2ops()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--info"))
        .stdout(predicate::str::contains("--monitor"))
        .stdout(predicate::str::contains("--unmonitor"))
        .stdout(predicate::str::contains("--start"))
        .stdout(predicate::str::contains("--stop"))
        .stdout(predicate::str::contains("--reboot"));
}

#[test]
fn test_version_flag_shows_version() {
    ec2ops()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ec2ops"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    ec2ops()
        .arg("--terminate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected argument"));
}

//! Integration tests for the greeter CLI.
//!
//! These tests verify end-to-end CLI behavior using assert_cmd.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn greeter_cmd() -> Command {
    let mut cmd = Command::cargo_bin("greeter").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() {
    greeter_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--first-name"))
        .stdout(predicate::str::contains("--last-name"))
        .stdout(predicate::str::contains("--title"))
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--log-level"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn cli_shows_version() {
    greeter_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("greeter 0.1.0"));
}

#[test]
fn direct_mode_prints_greeting() {
    greeter_cmd()
        .args(["--first-name", "John", "--last-name", "Doe"])
        .assert()
        .success()
        .stdout("Hello, John Doe!\n");
}

#[test]
fn direct_mode_with_title_and_short_flags() {
    greeter_cmd()
        .args(["-f", "Jane", "-l", "Smith", "-t", "Dr."])
        .assert()
        .success()
        .stdout("Hello, Dr. Jane Smith!\n");
}

#[test]
fn direct_mode_requires_both_names() {
    greeter_cmd()
        .args(["--first-name", "Jane"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: Both --first-name and --last-name are required for direct mode",
        ))
        .stdout(predicate::str::contains("Hello").not());
}

#[test]
fn direct_mode_rejects_invalid_name() {
    greeter_cmd()
        .args(["--first-name", "J0hn", "--last-name", "Doe"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("First name contains invalid characters"));
}

#[test]
fn file_mode_greets_valid_lines_in_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("names.txt");
    fs::write(&path, "John Doe\n# comment\n\nBadName123 X\nJane Smith Dr.\n").unwrap();

    greeter_cmd()
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout("Hello, John Doe!\nHello, Dr. Jane Smith!\n")
        .stderr(predicate::str::contains("First name contains invalid characters"));
}

#[test]
fn file_mode_takes_priority_over_names() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("names.txt");
    fs::write(&path, "Ada Lovelace\n").unwrap();

    greeter_cmd()
        .args(["--first-name", "Jane"])
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout("Hello, Ada Lovelace!\n");
}

#[test]
fn file_mode_warns_about_short_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("names.txt");
    fs::write(&path, "Cher\nJohn Doe\n").unwrap();

    greeter_cmd()
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout("Hello, John Doe!\n")
        .stderr(predicate::str::contains("Line 1: Invalid format - Cher"));
}

#[test]
fn missing_file_is_reported_but_not_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    greeter_cmd()
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: File '"))
        .stdout(predicate::str::contains("' not found"))
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn unreadable_file_is_reported_but_not_fatal() {
    let dir = tempdir().unwrap();

    greeter_cmd()
        .arg("--file")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Error processing file:"))
        .stdout(predicate::str::contains("Hello").not())
        .stderr(predicate::str::contains("Error processing file:"));
}

#[test]
fn interactive_quit_exits_immediately() {
    greeter_cmd()
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Interactive Greeting Mode ==="))
        .stdout(predicate::str::contains("Goodbye!"))
        .stdout(predicate::str::contains("Hello").not());
}

#[test]
fn interactive_greets_until_quit() {
    greeter_cmd()
        .write_stdin("Jane\nSmith\nDr\nJohn\nDoe\n\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, Dr Jane Smith!\n\n"))
        .stdout(predicate::str::contains("Hello, John Doe!\n\n"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn interactive_end_of_input_says_goodbye() {
    greeter_cmd()
        .write_stdin("Jane\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("End of input. Goodbye!"))
        .stdout(predicate::str::contains("Hello").not());
}

#[test]
fn log_level_controls_diagnostics() {
    greeter_cmd()
        .args(["-f", "John", "-l", "Doe", "--log-level", "DEBUG"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Generating greeting"));

    greeter_cmd()
        .args(["-f", "John", "-l", "Doe", "--log-level", "warning"])
        .assert()
        .success()
        .stdout("Hello, John Doe!\n")
        .stderr(predicate::str::contains("Generated greeting").not());
}

#[test]
fn unknown_log_level_is_rejected() {
    greeter_cmd()
        .args(["--log-level", "LOUD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected one of"));
}

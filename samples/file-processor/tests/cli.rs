//! Integration tests for the file-processor binary.

#![allow(deprecated)] // cargo_bin is deprecated but works fine for standard builds

use assert_cmd::Command;
use predicates::prelude::*;

fn file_processor() -> Command {
    Command::cargo_bin("file-processor").unwrap()
}

#[test]
fn test_only_source_prints_defaults() {
    file_processor()
        .arg("my_source")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""source": "my_source""#))
        .stdout(predicate::str::contains(r#""optional_destination": "default_value""#))
        .stdout(predicate::str::contains(r#""files": []"#))
        .stdout(predicate::str::contains(r#""required_files": null"#))
        .stdout(predicate::str::contains(r#""verbose": false"#))
        .stdout(predicate::str::contains(r#""mode": "auto""#))
        .stdout(predicate::str::contains(r#""size": 1048576"#));
}

#[test]
fn test_keys_are_sorted() {
    let output = file_processor().arg("src").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let files = stdout.find("\"files\"").unwrap();
    let mode = stdout.find("\"mode\"").unwrap();
    let verbose = stdout.find("\"verbose\"").unwrap();
    assert!(files < mode && mode < verbose);
}

#[test]
fn test_size_with_unit() {
    file_processor()
        .args(["src", "--size", "500KB"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""size": 512000"#));
}

#[test]
fn test_size_with_unknown_unit() {
    file_processor()
        .args(["src", "--size", "5g"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("file-processor: error: argument -s/--size"))
        .stderr(predicate::str::contains("'5g'"));
}

#[test]
fn test_files_and_required_files() {
    file_processor()
        .args(["src", "--files", "a.txt", "b.txt", "--required-files", "c.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a.txt\",\n    \"b.txt\""))
        .stdout(predicate::str::contains("\"c.txt\""));
}

#[test]
fn test_required_files_without_values() {
    file_processor()
        .args(["src", "--required-files"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "argument --required-files: expected at least one value",
        ));
}

#[test]
fn test_mode_choices() {
    file_processor()
        .args(["src", "--mode", "manual"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""mode": "manual""#));

    file_processor()
        .args(["src", "--mode", "nonexistent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("choose from 'auto', 'manual'"));
}

#[test]
fn test_missing_source() {
    file_processor()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("argument source: is required"));
}

#[test]
fn test_unexpected_argument() {
    file_processor()
        .args(["a", "b", "c"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected argument: 'c'"));
}

#[test]
fn test_unknown_option_suggestion() {
    file_processor()
        .args(["src", "--fils", "a.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("did you mean '--files'?"));
}

#[test]
fn test_help() {
    file_processor()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("usage: file-processor [-h]"))
        .stdout(predicate::str::contains("positional arguments:"))
        .stdout(predicate::str::contains("(default: 1MB)"))
        .stdout(predicate::str::contains("Zero or more arguments (default: [])"))
        .stdout(predicate::str::contains("One or more arguments (default: None)"));
}

#[test]
fn test_verbose_logs_parsed_values() {
    file_processor()
        .env_remove("RUST_LOG")
        .args(["src", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains(r#"parsed values: {"files":[]"#))
        .stderr(predicate::str::contains("classified").not());
}

#[test]
fn test_rust_log_shows_parsing_steps() {
    file_processor()
        .env("RUST_LOG", "debug")
        .arg("src")
        .assert()
        .success()
        .stderr(predicate::str::contains("classified 1 tokens"));
}

#[test]
fn test_quiet_by_default() {
    file_processor()
        .env_remove("RUST_LOG")
        .arg("src")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

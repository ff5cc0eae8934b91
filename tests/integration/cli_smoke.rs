// tests/integration/cli_smoke.rs
use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TempWorkspace;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_line_sieve"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("line_sieve"))
        .stdout(predicate::str::contains("--output-dir"));
}

#[test]
fn no_input_files_does_no_work() {
    let ws = TempWorkspace::new("no_input");
    ws.command()
        .args(["-f", "-o", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input files"));
    assert!(!ws.path().join("out").exists());
}

#[test]
fn missing_output_dir_value_is_a_usage_error() {
    let ws = TempWorkspace::new("usage");
    ws.create_file("in.txt", "1\n");
    ws.command().args(["in.txt", "-o"]).assert().failure().code(2);
    assert!(ws.read("integers.txt").is_none());
}

#[test]
fn missing_prefix_value_is_a_usage_error() {
    let ws = TempWorkspace::new("usage_prefix");
    ws.create_file("in.txt", "1\n");
    ws.command().args(["in.txt", "-p"]).assert().failure().code(2);
}

#[test]
fn missing_input_is_reported_and_skipped() {
    let ws = TempWorkspace::new("missing");
    ws.create_file("present.txt", "42\n");
    ws.command()
        .args(["absent.txt", "present.txt", "-s"])
        .assert()
        .success()
        .stderr(predicate::str::contains("input file not found: absent.txt"))
        .stdout(predicate::str::contains("Integers: count = 1"));
    assert_eq!(ws.read("integers.txt").as_deref(), Some("42\n"));
}

#[test]
fn unknown_flag_is_treated_as_an_input_file() {
    let ws = TempWorkspace::new("unknown_flag");
    ws.create_file("a.txt", "1\n");
    ws.command()
        .args(["a.txt", "-x"])
        .assert()
        .success()
        .stderr(predicate::str::contains("input file not found: -x"));
    assert_eq!(ws.read("integers.txt").as_deref(), Some("1\n"));
}

#[test]
fn repeated_and_hyphen_valued_options_are_accepted() {
    let ws = TempWorkspace::new("repeated");
    ws.create_file("a.txt", "1\n");
    ws.command()
        .args(["-o", "o1", "-o", "o2", "-s", "-s", "-p", "-s", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integers: count = 1"));
    assert!(!ws.path().join("o1").exists());
    assert_eq!(ws.read("o2/-sintegers.txt").as_deref(), Some("1\n"));
}

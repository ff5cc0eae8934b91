// tests/integration/end_to_end.rs
use predicates::prelude::*;
use serde_json::Value;

use crate::common::TempWorkspace;

#[test]
fn sorts_mixed_input_into_three_files() {
    let ws = TempWorkspace::new("mixed");
    ws.create_file("in.txt", "5\n3.2\nhello\n\n7\n");

    ws.command()
        .args(["in.txt", "-f"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integers: count = 2"))
        .stdout(predicate::str::contains("  sum = 12.0\n"))
        .stdout(predicate::str::contains("  avg = 6.0\n"))
        .stdout(predicate::str::contains("Floats: count = 1"))
        .stdout(predicate::str::contains("  min length = 5"));

    assert_eq!(ws.read("integers.txt").as_deref(), Some("5\n7\n"));
    assert_eq!(ws.read("floats.txt").as_deref(), Some("3.2\n"));
    assert_eq!(ws.read("strings.txt").as_deref(), Some("hello\n"));
}

#[test]
fn inputs_are_concatenated_in_argument_order() {
    let ws = TempWorkspace::new("order");
    ws.create_file("a.txt", "1\nalpha\n");
    ws.create_file("b.txt", "2\nbeta\n1e3\n");

    ws.command().args(["b.txt", "a.txt"]).assert().success().stdout("");

    assert_eq!(ws.read("integers.txt").as_deref(), Some("2\n1\n"));
    assert_eq!(ws.read("strings.txt").as_deref(), Some("beta\nalpha\n"));
    assert_eq!(ws.read("floats.txt").as_deref(), Some("1e3\n"));
}

#[test]
fn empty_categories_produce_no_file() {
    let ws = TempWorkspace::new("empty_category");
    ws.create_file("in.txt", "only words\n99999999999999999999\n");

    ws.command().args(["in.txt", "-f"]).assert().success().stdout(
        "Integers: count = 0\nFloats: count = 0\nStrings: count = 2\n  min length = 10\n  max length = 20\n",
    );

    assert!(ws.read("integers.txt").is_none());
    assert!(ws.read("floats.txt").is_none());
    assert_eq!(ws.read("strings.txt").as_deref(), Some("only words\n99999999999999999999\n"));
}

#[test]
fn output_dir_and_prefix_are_applied() {
    let ws = TempWorkspace::new("prefix");
    ws.create_file("in.txt", "10\n");

    ws.command().args(["-o", "nested/out", "-p", "run_", "in.txt"]).assert().success();

    assert_eq!(ws.read("nested/out/run_integers.txt").as_deref(), Some("10\n"));
    assert!(ws.read("integers.txt").is_none());
}

#[test]
fn append_mode_accumulates_runs_in_order() {
    let ws = TempWorkspace::new("append");
    ws.create_file("first.txt", "1\nx\n");
    ws.create_file("second.txt", "2\ny\n");

    ws.command().args(["-a", "first.txt"]).assert().success();
    ws.command().args(["-a", "second.txt"]).assert().success();

    assert_eq!(ws.read("integers.txt").as_deref(), Some("1\n2\n"));
    assert_eq!(ws.read("strings.txt").as_deref(), Some("x\ny\n"));
}

#[test]
fn without_append_previous_output_is_replaced() {
    let ws = TempWorkspace::new("overwrite");
    ws.create_file("first.txt", "1\n");
    ws.create_file("second.txt", "2\n");

    ws.command().arg("first.txt").assert().success();
    ws.command().arg("second.txt").assert().success();

    assert_eq!(ws.read("integers.txt").as_deref(), Some("2\n"));
}

#[test]
fn short_and_full_print_a_single_full_block() {
    let ws = TempWorkspace::new("short_full");
    ws.create_file("in.txt", "4\n");

    let output = ws.command().args(["-s", "-f", "in.txt"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Integers: count").count(), 1);
    assert!(stdout.contains("  min = 4.0\n"));
}

#[test]
fn json_report_is_machine_readable() {
    let ws = TempWorkspace::new("json");
    ws.create_file("in.txt", "5\n3.2\nhello\n\n7\n");

    let output = ws.command().args(["-f", "--format", "json", "in.txt"]).output().unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["integers"]["count"], 2);
    assert_eq!(json["integers"]["avg"], 6.0);
    assert_eq!(json["strings"]["max_length"], 5);
}

#[test]
fn blocked_output_dir_aborts_before_writing_and_reporting() {
    let ws = TempWorkspace::new("blocked");
    ws.create_file("in.txt", "1\n");
    ws.create_file("blocker", "a file, not a directory");

    ws.command()
        .args(["-s", "-o", "blocker/out", "in.txt"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("failed to create output directory"));
}

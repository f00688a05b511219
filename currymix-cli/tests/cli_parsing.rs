//! End-to-end tests for the `currymix` binary: output, exit codes and config handling.

#![allow(deprecated)]

use assert_cmd::Command;
use currymix_types::Finish;
use currymix_types::report::{SolutionReport, SolutionStatus};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn currymix() -> Command {
    let mut cmd = Command::cargo_bin("currymix").expect("currymix binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_order(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_prints_assignment() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_order(&temp, "order.glt", "5\n1 M 3 V 5 V\n2 V 3 M 4 V\n5 M\n");

    currymix()
        .current_dir(temp.path())
        .arg(&input)
        .assert()
        .success()
        .stdout("V V V V M\n");
}

#[test]
fn test_infeasible_order_still_succeeds() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_order(&temp, "order.glt", "1\n1 V\n1 M\n");

    currymix()
        .current_dir(temp.path())
        .arg(&input)
        .assert()
        .code(0)
        .stdout("No solution exists\n");
}

#[test]
fn test_no_args_is_usage_error() {
    currymix().assert().code(1);
}

#[test]
fn test_two_inputs_is_usage_error() {
    let temp = tempfile::tempdir().unwrap();
    let a = write_order(&temp, "a.glt", "1\n");
    let b = write_order(&temp, "b.glt", "1\n");

    currymix().arg(&a).arg(&b).assert().code(1);
}

#[test]
fn test_help_exits_zero() {
    currymix()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Order file"));
}

#[test]
fn test_missing_file_exits_3() {
    let temp = tempfile::tempdir().unwrap();

    currymix()
        .current_dir(temp.path())
        .arg("abc.glt")
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_parse_error_exits_2() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_order(&temp, "bad.glt", "5\n1 M 2 G 5 M\n");

    currymix()
        .current_dir(temp.path())
        .arg(&input)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid finish code"));
}

#[test]
fn test_bad_item_count_exits_2() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_order(&temp, "bad.glt", "five\n1 M\n");

    currymix()
        .current_dir(temp.path())
        .arg(&input)
        .assert()
        .code(2);
}

#[test]
fn test_huge_item_count_exits_2() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_order(&temp, "huge.glt", "18446744073709551615\n1 M\n");

    currymix()
        .current_dir(temp.path())
        .arg(&input)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("exceeds the limit"));
}

#[test]
fn test_directory_input_exits_4() {
    let temp = tempfile::tempdir().unwrap();
    fs::create_dir(temp.path().join("orders")).unwrap();

    currymix()
        .current_dir(temp.path())
        .arg("orders")
        .assert()
        .code(4);
}

#[test]
fn test_json_format() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_order(&temp, "order.glt", "2\n1 M\n2 M\n1 V 2 M\n");

    let output = currymix()
        .current_dir(temp.path())
        .arg(&input)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: SolutionReport = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report.status, SolutionStatus::Feasible);
    assert_eq!(report.finishes, Some(vec![Finish::Meat, Finish::Meat]));
}

#[test]
fn test_invalid_format_is_usage_error() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_order(&temp, "order.glt", "1\n");

    currymix()
        .arg(&input)
        .arg("--format")
        .arg("yaml")
        .assert()
        .code(1);
}

#[test]
fn test_config_file_in_working_dir_is_used() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_order(&temp, "order.glt", "1\n1 V\n1 M\n");
    fs::write(
        temp.path().join("currymix.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    currymix()
        .current_dir(temp.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"infeasible\""));
}

#[test]
fn test_cli_format_overrides_config_file() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_order(&temp, "order.glt", "2\n2 M\n");
    fs::write(
        temp.path().join("currymix.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    currymix()
        .current_dir(temp.path())
        .arg(&input)
        .arg("--format")
        .arg("text")
        .assert()
        .success()
        .stdout("V M\n");
}

#[test]
fn test_broken_config_file_exits_5() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_order(&temp, "order.glt", "1\n");
    fs::write(temp.path().join("currymix.toml"), "[output\n").unwrap();

    currymix()
        .current_dir(temp.path())
        .arg(&input)
        .assert()
        .code(5);
}

#[test]
fn test_missing_explicit_config_exits_5() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_order(&temp, "order.glt", "1\n");

    currymix()
        .current_dir(temp.path())
        .arg(&input)
        .arg("--config")
        .arg("nope.toml")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("read config file"));
}

#[test]
fn test_verify_flag_accepts_solver_output() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_order(
        &temp,
        "order.glt",
        "5\n4 M\n1 V 4 V\n2 M 3 M 4 M\n5 V 1 M\n",
    );

    currymix()
        .current_dir(temp.path())
        .arg(&input)
        .arg("--verify")
        .assert()
        .success()
        .stdout("V V V M V\n");
}

#[test]
fn test_empty_file_prints_empty_line() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_order(&temp, "empty.glt", "");

    currymix()
        .current_dir(temp.path())
        .arg(&input)
        .assert()
        .success()
        .stdout("\n");
}

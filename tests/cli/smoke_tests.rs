use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::sample_tree;

fn code_stats() -> Command {
    Command::new(env!("CARGO_BIN_EXE_code_stats"))
}

#[test]
fn shows_help() {
    code_stats()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--exclude-dirs").and(predicate::str::contains("--max-workers")));
}

#[test]
fn table_output_lists_languages() {
    let ws = sample_tree();
    code_stats()
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Languages").and(predicate::str::contains("Python")));
}

#[test]
fn json_output_parses() {
    let ws = sample_tree();
    let output = code_stats().arg(ws.path()).args(["--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["code_lines"], 8);
}

#[test]
fn exclude_exts_accepts_names_without_dot() {
    let ws = sample_tree();
    let output = code_stats().arg(ws.path()).args(["--format", "json", "--exclude-exts", "PY"]).output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["total_files"], 1);
}

#[test]
fn output_file_is_written_with_parents() {
    let ws = sample_tree();
    let target = ws.path().join("out/reports/stats.md");
    code_stats()
        .arg(ws.path())
        .args(["--format", "markdown", "--output"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&target).unwrap();
    assert!(written.contains("## Languages"));
}

#[test]
fn missing_directory_exits_with_failure() {
    let ws = sample_tree();
    code_stats()
        .arg(ws.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory does not exist"));
}

#[test]
fn path_in_exclude_dirs_is_a_configuration_error() {
    code_stats()
        .args(["--exclude-dirs", "a/b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration Error"));
}

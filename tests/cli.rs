//! End-to-end CLI tests

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_temp_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn datasum() -> Command {
    Command::cargo_bin("datasum").unwrap()
}

#[test]
fn summarizes_a_csv_file() {
    let file = write_temp_csv("id,name\n1,alice\n2,\n3,alice\n");

    datasum()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total rows: 3"))
        .stdout(predicate::str::contains("Total columns: 2"))
        .stdout(predicate::str::contains("Rows with ANY null/empty: 1"))
        .stdout(predicate::str::contains("Rows with ALL null/empty: 0"))
        .stdout(predicate::str::contains("alice"));
}

#[test]
fn reports_numeric_statistics() {
    let file = write_temp_csv("x\n1\n2\n3\n4\n");

    datasum()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2.5"))
        .stdout(predicate::str::contains("int"));
}

#[test]
fn nrows_truncates_the_input() {
    let file = write_temp_csv("id\n1\n2\n3\n4\n");

    datasum()
        .arg(file.path())
        .args(["--nrows", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total rows: 2"));
}

#[test]
fn output_flag_writes_a_summary_csv() {
    let file = write_temp_csv("id,name\n1,alice\n2,bob\n");
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("summary.csv");

    datasum()
        .arg(file.path())
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Per-column summary saved to:"));

    let mut reader = csv::Reader::from_path(&out_path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert!(headers.iter().any(|h| h == "column"));
    assert!(headers.iter().any(|h| h == "null_or_empty_count"));

    let records: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn quitting_the_prompt_exits_cleanly() {
    datasum()
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No file provided. Exiting."));
}

#[test]
fn closed_stdin_at_the_prompt_exits_cleanly() {
    datasum()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No file provided. Exiting."));
}

#[test]
fn missing_input_file_fails_with_diagnostic() {
    datasum()
        .arg("/no/such/input.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Failed to load CSV file"));
}

//! CLI Integration Tests
//!
//! Tests the CLI binary directly using assert_cmd to exercise main.rs code paths.

// Skip all CLI tests during coverage builds
#![cfg(not(coverage))]
#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn sample_workbook(dir: &Path) -> PathBuf {
    let path = dir.join("Input Example.xlsx");
    let mut workbook = Workbook::new();

    let sheet1 = workbook.add_worksheet();
    sheet1.set_name("Sheet1").unwrap();
    sheet1.write_string(0, 0, "Name").unwrap();
    sheet1.write_string(0, 1, "Age").unwrap();
    sheet1.write_string(1, 0, "Alice").unwrap();
    sheet1.write_number(1, 1, 30).unwrap();
    sheet1.write_string(2, 0, "Bob").unwrap();
    sheet1.write_number(2, 1, 25).unwrap();

    let sheet2 = workbook.add_worksheet();
    sheet2.set_name("Sheet2").unwrap();
    sheet2.write_string(0, 0, "City").unwrap();
    sheet2.write_string(1, 0, "Paris").unwrap();

    workbook.save(&path).unwrap();
    path
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("sheetsplit").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sheetsplit"))
        .stdout(predicate::str::contains("OUTPUT_DIR"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("sheetsplit").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sheetsplit"));
}

// ═══════════════════════════════════════════════════════════════════════════
// CONVERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_convert_reports_each_sheet() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = sample_workbook(temp_dir.path());
    let out = temp_dir.path().join("out");
    fs::create_dir(&out).unwrap();

    let mut cmd = Command::cargo_bin("sheetsplit").unwrap();
    cmd.arg(&workbook)
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved Sheet1 to"))
        .stdout(predicate::str::contains("Saved Sheet2 to"))
        .stdout(predicate::str::contains("Sheet2.csv"));

    assert_eq!(
        fs::read_to_string(out.join("Sheet1.csv")).unwrap(),
        "Name,Age\nAlice,30\nBob,25\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("Sheet2.csv")).unwrap(),
        "City\nParis\n"
    );
}

#[test]
fn test_cli_default_locations() {
    let temp_dir = TempDir::new().unwrap();
    let csv_dir = temp_dir.path().join("CSV");
    fs::create_dir(&csv_dir).unwrap();
    sample_workbook(&csv_dir);

    let mut cmd = Command::cargo_bin("sheetsplit").unwrap();
    cmd.current_dir(temp_dir.path()).assert().success();

    assert!(csv_dir.join("Sheet1.csv").exists());
    assert!(csv_dir.join("Sheet2.csv").exists());
}

#[test]
fn test_cli_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = sample_workbook(temp_dir.path());

    let mut cmd = Command::cargo_bin("sheetsplit").unwrap();
    let output = cmd
        .arg(&workbook)
        .arg(temp_dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["dry_run"], false);
    assert_eq!(report["sheets"].as_array().unwrap().len(), 2);
    assert_eq!(report["sheets"][0]["sheet_name"], "Sheet1");
    assert_eq!(report["sheets"][0]["rows"], 2);
}

#[test]
fn test_cli_dry_run() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = sample_workbook(temp_dir.path());
    let out = temp_dir.path().join("out");
    fs::create_dir(&out).unwrap();

    let mut cmd = Command::cargo_bin("sheetsplit").unwrap();
    cmd.arg(&workbook)
        .arg(&out)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would save Sheet1 to"));

    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn test_cli_tab_delimiter() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = sample_workbook(temp_dir.path());

    let mut cmd = Command::cargo_bin("sheetsplit").unwrap();
    cmd.arg(&workbook)
        .arg(temp_dir.path())
        .args(["-d", "tab"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("Sheet1.csv")).unwrap(),
        "Name\tAge\nAlice\t30\nBob\t25\n"
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// FAILURE TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_missing_workbook() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("sheetsplit").unwrap();
    cmd.arg(temp_dir.path().join("missing.xlsx"))
        .arg(temp_dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("open failed"))
        .stderr(predicate::str::contains("missing.xlsx"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_cli_missing_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = sample_workbook(temp_dir.path());

    let mut cmd = Command::cargo_bin("sheetsplit").unwrap();
    cmd.arg(&workbook)
        .arg(temp_dir.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("write failed"))
        .stderr(predicate::str::contains("Sheet1.csv"));
}

#[test]
fn test_cli_rejects_multi_char_delimiter() {
    let mut cmd = Command::cargo_bin("sheetsplit").unwrap();
    cmd.args(["book.xlsx", "out", "--delimiter", ";;"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("single ASCII character"));
}

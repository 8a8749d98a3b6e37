//! CLI integration tests for settle-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn settle_cli() -> Command {
    Command::cargo_bin("settle-cli").unwrap()
}

#[test]
fn help_flag_lists_subcommands() {
    settle_cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("classify"));
}

#[test]
fn classify_prints_the_matched_channel() {
    settle_cli()
        .args(["classify", "BDO_settlement_20240101.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BDO"));
}

#[test]
fn classify_fails_on_unknown_filename() {
    settle_cli()
        .args(["classify", "mystery_export.txt"])
        .assert()
        .failure();
}

#[test]
fn process_requires_payment_mode_when_filename_is_unclassifiable() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("unclassifiable.txt");
    fs::write(&input, "NAME|X|2024-01-05|X|X|1234567890|X|X|X|100.50").unwrap();

    settle_cli()
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--payment-mode"));
}

#[test]
fn process_parses_a_bdo_file_and_writes_an_archive() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("BDO_settlement.txt");
    fs::write(&input, "NAME|X|2024-01-05|X|X|1234567890|X|X|X|100.50\n").unwrap();

    let output = dir.path().join("out.zip");
    settle_cli()
        .arg("process")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("parsed 1 records across 1 groups"));

    assert!(output.exists());
    let bytes = fs::read(&output).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn process_respects_explicit_payment_mode_over_filename_classification() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("anything.txt");
    fs::write(&input, "NAME|X|2024-01-05|X|X|1234567890|X|X|X|100.50\n").unwrap();

    let output = dir.path().join("out.zip");
    settle_cli()
        .arg("process")
        .arg(&input)
        .arg("--payment-mode")
        .arg("BDO")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn process_rejects_an_invalid_area_tag() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("BDO_settlement.txt");
    fs::write(&input, "NAME|X|2024-01-05|X|X|1234567890|X|X|X|100.50\n").unwrap();

    settle_cli()
        .arg("process")
        .arg(&input)
        .arg("--area")
        .arg("ZZZ")
        .assert()
        .failure();
}

//! End-to-end tests for the shiprec binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const INVOICE: &str = "\
1001 01/03/2024 Priority 2 5.50 kg REF123 17,853.00 210.00 18,063.00
Dims: 30x20x10 cm Billed Weight: 6.00 kg
Charges
17,853.00 standard rate Transportation Charge
Discount applied -500.00
Signed: consignee
1002 02/03/2024 Economy 1 2.00 kg REF456 4,100.00 55.00 4,155.00
";

fn write_invoice(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("fedex.txt");
    fs::write(&path, INVOICE).unwrap();
    path
}

#[test]
fn test_parse_emits_records_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_invoice(&dir);

    Command::cargo_bin("shiprec")
        .unwrap()
        .arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"shipment\": \"1001\""))
        .stdout(predicate::str::contains("\"reference\": \"REF456\""))
        .stdout(predicate::str::contains("\"fuel_surcharge\": \"210.00\""));
}

#[test]
fn test_refs_lists_distinct_references() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_invoice(&dir);

    Command::cargo_bin("shiprec")
        .unwrap()
        .arg("refs")
        .arg(&input)
        .assert()
        .success()
        .stdout("REF123\nREF456\n");
}

#[test]
fn test_lookup_finds_single_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_invoice(&dir);

    Command::cargo_bin("shiprec")
        .unwrap()
        .args(["lookup", "--reference", "REF123"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"shipment\": \"1001\""));
}

#[test]
fn test_lookup_missing_reference_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_invoice(&dir);

    Command::cargo_bin("shiprec")
        .unwrap()
        .args(["lookup", "--reference", "NOPE"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("reference not found: NOPE"));
}

#[test]
fn test_extract_rejects_non_pdf_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_invoice(&dir);

    Command::cargo_bin("shiprec")
        .unwrap()
        .arg("extract")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no PDF files to extract"));
}

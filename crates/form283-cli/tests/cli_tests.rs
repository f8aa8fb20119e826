//! Smoke tests for the form283 binary.
//!
//! Only the offline `validate` path is exercised here; `process` and
//! `batch` need live Azure credentials.

use assert_cmd::Command;
use predicates::prelude::*;

fn form283() -> Command {
    Command::cargo_bin("form283").unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    form283()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_validate_prints_summary_and_issues() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("record.json");
    std::fs::write(
        &json_path,
        r#"{
            "שם משפחה": "כהן",
            "מספר זהות": "123456782",
            "טלפון נייד": "650-123-4567"
        }"#,
    )
    .unwrap();

    form283()
        .arg("validate")
        .arg("--json")
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation passed."))
        .stdout(predicate::str::contains("Quality issues:"))
        .stdout(predicate::str::contains("must start with 05"))
        .stdout(predicate::str::contains("Missing fields"));
}

#[test]
fn test_validate_clean_record_reports_no_issues() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("record.json");
    std::fs::write(&json_path, r#"{"שם משפחה": "כהן"}"#).unwrap();

    form283()
        .arg("validate")
        .arg("--json")
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 quality issue(s) detected."))
        .stdout(predicate::str::contains("Quality issues:").not());
}

#[test]
fn test_validate_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("broken.json");
    std::fs::write(&json_path, "{ not json").unwrap();

    form283()
        .arg("validate")
        .arg("--json")
        .arg(&json_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not JSON"));
}

#[test]
fn test_validate_rejects_schema_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("mismatch.json");
    std::fs::write(&json_path, r#"{"שם משפחה": {"lo": "scalar"}}"#).unwrap();

    form283()
        .arg("validate")
        .arg("--json")
        .arg(&json_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match the Form 283 schema"));
}

#[test]
fn test_missing_file_is_a_clean_error() {
    form283()
        .arg("validate")
        .arg("--json")
        .arg("no/such/file.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

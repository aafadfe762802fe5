//! Integration tests for the borderpost CLI

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn borderpost() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("borderpost"))
}

const COMPLETE_RECORD: &str = r#"[{
    "first_name": "ANNA",
    "last_name": "VERDI",
    "birth_date": "1984-05-27",
    "passport": "AB12C-DE34F-GH56I-JK78L-MN90P",
    "home": { "country": "ALB" },
    "from": { "country": "ALB" },
    "entry_reason": "visit"
}]"#;

#[test]
fn test_version() {
    borderpost()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("borderpost"));
}

#[test]
fn test_help() {
    borderpost()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Screen traveler entry records"));
}

#[test]
fn test_no_args_shows_info() {
    borderpost().assert().success().stdout(predicate::str::contains("borderpost"));
}

#[test]
fn test_version_subcommand_json() {
    borderpost()
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_decide_missing_records_file() {
    let temp = TempDir::new().unwrap();

    borderpost()
        .args(["decide", "absent.json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("records file not found"));
}

#[test]
fn test_decide_names_the_missing_reference_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("records.json"), COMPLETE_RECORD).unwrap();

    // No watchlist.json next to the records, no config pointing elsewhere
    borderpost()
        .args(["decide", "records.json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("watchlist file not found"));
}

#[test]
fn test_validate_reports_a_complete_batch() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("records.json"), COMPLETE_RECORD).unwrap();

    borderpost()
        .args(["validate", "records.json"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 complete, 0 incomplete"));
}

#[test]
fn test_validate_lists_the_failed_fields() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("records.json"),
        r#"[{ "first_name": "BO", "last_name": "HAV" }]"#,
    )
    .unwrap();

    borderpost()
        .args(["validate", "records.json"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("passport").and(predicate::str::contains("birth_date")));
}

#[test]
fn test_decide_rejects_a_bad_as_of_date() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("records.json"), COMPLETE_RECORD).unwrap();

    borderpost()
        .args(["decide", "records.json", "--as-of", "not-a-date"])
        .current_dir(temp.path())
        .assert()
        .failure();
}

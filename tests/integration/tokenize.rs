use crate::common::TestProject;
use predicates::prelude::*;

#[test]
fn test_tokenize_text_output() {
    let project = TestProject::new();
    project
        .tiles()
        .args(["tokenize", "io.example:base-tile:${prop:default}"])
        .assert()
        .success()
        .stdout("io.example\nbase-tile\n${prop:default}\n");
}

#[test]
fn test_tokenize_json_output() {
    let project = TestProject::new();
    let output = project
        .tiles()
        .args(["tokenize", "${a${b}c}:x:y", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["fields"], serde_json::json!(["${a${b}c}", "x", "y"]));
    assert_eq!(json["is_coordinate"], true);
}

#[test]
fn test_tokenize_notes_wrong_field_count() {
    let project = TestProject::new();
    project
        .tiles()
        .args(["tokenize", "g:a:"])
        .assert()
        .success()
        .stdout("g\na\n")
        .stderr(predicate::str::contains("expected 3 fields, found 2"));
}

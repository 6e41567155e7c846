use crate::common::TestProject;
use predicates::prelude::*;
use tiles_cli::test_utils::{PROJECT_FIXTURE, WORKSPACE_FIXTURE};

#[test]
fn test_references_adds_workspace_tile() {
    let project = TestProject::new();
    project.write_project(PROJECT_FIXTURE);
    let workspace = project.write_workspace(WORKSPACE_FIXTURE);

    project
        .tiles()
        .arg("references")
        .arg("--workspace")
        .arg(&workspace)
        .assert()
        .success()
        .stdout("library\nbase-tile (added)\n");
}

#[test]
fn test_references_json_from_config() {
    let project = TestProject::new();
    project.write_project(PROJECT_FIXTURE);
    let workspace = project.write_workspace(WORKSPACE_FIXTURE);
    project.write_config(&format!("workspace = {:?}\n", workspace.display().to_string()));

    let output = project.tiles().args(["references", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["project"], "consumer");
    assert_eq!(json["references"], serde_json::json!(["library", "base-tile"]));
    assert_eq!(json["added"], serde_json::json!(["base-tile"]));
    assert_eq!(json["modified"], true);
    assert_eq!(json["applied"].as_array().unwrap().len(), 3);
}

#[test]
fn test_references_up_to_date() {
    let project = TestProject::new();
    project.write_project(PROJECT_FIXTURE);
    let fixture =
        WORKSPACE_FIXTURE.replace(r#"references = ["library"]"#, r#"references = ["base-tile"]"#);
    let workspace = project.write_workspace(&fixture);

    project
        .tiles()
        .arg("references")
        .arg("--workspace")
        .arg(&workspace)
        .assert()
        .success()
        .stdout("base-tile\n")
        .stderr(predicate::str::contains("up to date"));
}

#[test]
fn test_references_without_workspace_fails() {
    let project = TestProject::new();
    project.write_project(PROJECT_FIXTURE);

    project
        .tiles()
        .arg("references")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No workspace file given"));
}

#[test]
fn test_references_unknown_name_fails() {
    let project = TestProject::new();
    project.write_project(PROJECT_FIXTURE);
    let workspace = project.write_workspace(WORKSPACE_FIXTURE);

    project
        .tiles()
        .args(["references", "--name", "ghost", "--workspace"])
        .arg(&workspace)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No workspace project matches 'ghost'"));
}

#[test]
fn test_references_requires_project() {
    let project = TestProject::new();
    let workspace = project.write_workspace(WORKSPACE_FIXTURE);

    project
        .tiles()
        .arg("references")
        .arg("--workspace")
        .arg(&workspace)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project file not found"));
}

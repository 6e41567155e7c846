use crate::common::TestProject;
use predicates::prelude::*;
use tiles_cli::test_utils::{PROJECT_FIXTURE, WORKSPACE_FIXTURE};

#[test]
fn test_locate_in_local_repository() {
    let project = TestProject::new();
    let repo = project.path().join("repo");
    let tile = project.touch("repo/io/example/util/2.0/util-2.0.xml");

    let output = project
        .tiles()
        .args(["locate", "io.example:util:2.0", "--local-repository"])
        .arg(&repo)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), tile.display().to_string());
}

#[test]
fn test_locate_prefers_workspace_tile() {
    let project = TestProject::new();
    project.write_project(PROJECT_FIXTURE);
    let workspace = project.write_workspace(WORKSPACE_FIXTURE);
    let descriptor = project.touch("tiles/base/tile.xml");

    let output = project
        .tiles()
        .args(["locate", "io.example:base-tile:1.0", "--format", "json", "--workspace"])
        .arg(&workspace)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["location"]["source"], "workspace");
    assert_eq!(json["location"]["project"], "base-tile");
    assert_eq!(json["location"]["path"], descriptor.display().to_string());
    assert_eq!(json["exists"], true);
    assert_eq!(json["display_name"], "io.example:base-tile:1.0.xml");
}

#[test]
fn test_locate_uses_configured_repository() {
    let project = TestProject::new();
    project.write_project(PROJECT_FIXTURE);
    let repo = project.path().join("m2");
    project.write_config(&format!("local-repository = {:?}\n", repo.display().to_string()));

    let expected =
        repo.join("io").join("example").join("base-tile").join("2.4").join("base-tile-2.4.xml");
    project
        .tiles()
        .args(["locate", "io.example:base-tile:${tiles.version}"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()))
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_locate_empty_group_fails() {
    let project = TestProject::new();
    project
        .tiles()
        .args(["locate", ":util:1.0", "--local-repository", "repo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("groupId is empty"));
}

#[test]
fn test_locate_rejects_version_escaping_repository() {
    let project = TestProject::new();
    let fixture = PROJECT_FIXTURE
        .replace(r#""tiles.version" = "2.4""#, r#""tiles.version" = "../../../outside""#);
    project.write_project(&fixture);

    project
        .tiles()
        .args(["locate", "io.example:base-tile:${tiles.version}", "--local-repository", "repo"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not a valid path component"));
}

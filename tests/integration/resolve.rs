use crate::common::TestProject;
use predicates::prelude::*;
use tiles_cli::test_utils::PROJECT_FIXTURE;

#[test]
fn test_resolve_concrete_without_project() {
    let project = TestProject::new();
    project
        .tiles()
        .args(["resolve", "io.example:base-tile:1.2.3"])
        .assert()
        .success()
        .stdout("io.example:base-tile:1.2.3\n");
}

#[test]
fn test_resolve_property_from_found_project() {
    let project = TestProject::new();
    project.write_project(PROJECT_FIXTURE);
    let nested = project.path().join("src").join("main");
    std::fs::create_dir_all(&nested).unwrap();

    project
        .tiles()
        .current_dir(&nested)
        .args(["resolve", "io.example:base-tile:${revision}"])
        .assert()
        .success()
        .stdout("io.example:base-tile:2.4.1\n");
}

#[test]
fn test_resolve_managed_fallback_json() {
    let project = TestProject::new();
    let file = project.write_project(PROJECT_FIXTURE);

    let output = project
        .tiles()
        .args(["resolve", "io.example:managed-tile:${undefined}", "--format", "json"])
        .arg("--project")
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["version"], "5.2");
    assert_eq!(json["display_name"], "io.example:managed-tile:5.2.xml");
}

#[test]
fn test_resolve_unresolved_fails() {
    let project = TestProject::new();
    project
        .tiles()
        .args(["resolve", "io.example:base-tile:${tiles.version}"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot determine the version"));
}

#[test]
fn test_resolve_malformed_fails() {
    let project = TestProject::new();
    project
        .tiles()
        .args(["resolve", "io.example:base-tile:"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed tile coordinate"));
}

#[test]
fn test_resolve_missing_explicit_project_fails() {
    let project = TestProject::new();
    project
        .tiles()
        .args(["resolve", "g:a:1", "--project", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn test_rust_log_overrides_quiet() {
    let project = TestProject::new();
    project
        .tiles()
        .env("RUST_LOG", "tiles_cli=debug")
        .args(["--quiet", "resolve", "g:a:1.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("g:a:1.0"))
        .stderr(predicate::str::contains("Global config"));
}

#[test]
fn test_rust_log_overrides_verbose() {
    let project = TestProject::new();
    project
        .tiles()
        .env("RUST_LOG", "error")
        .args(["--verbose", "resolve", "g:a:1.0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Global config").not());
}

#[test]
fn test_verbose_without_rust_log_logs_debug() {
    let project = TestProject::new();
    project
        .tiles()
        .args(["--verbose", "resolve", "g:a:1.0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Global config"));
}

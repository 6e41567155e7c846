//! Version resolution against a project loaded from disk.

use std::path::Path;
use tempfile::TempDir;
use tiles_cli::coordinate::ResolvedTile;
use tiles_cli::core::TilesError;
use tiles_cli::project::{ProjectContext, ProjectModel};
use tiles_cli::resolver::{resolve_coordinate, resolve_version, search_managed_dependencies};
use tiles_cli::test_utils::{PROJECT_FIXTURE, init_test_logging, write_fixture};

fn fixture_project() -> ProjectModel {
    ProjectModel::parse(PROJECT_FIXTURE, Path::new("tiles-project.toml")).unwrap()
}

#[test]
fn resolves_nested_property() {
    init_test_logging(None);
    let project = fixture_project();
    let tile = resolve_coordinate("io.example:base-tile:${revision}", Some(&project)).unwrap();
    assert_eq!(tile, ResolvedTile::new("io.example", "base-tile", "2.4.1"));
}

#[test]
fn resolves_descriptor_alias() {
    let project = fixture_project();
    assert_eq!(
        resolve_version(Some("${pom.version}"), "g", "a", Some(&project)),
        Some("1.0.0".to_string())
    );
    assert_eq!(resolve_version(Some("${version}"), "g", "a", Some(&project)), None);
}

#[test]
fn falls_back_to_managed_tile_of_any_type() {
    let project = fixture_project();
    assert_eq!(
        search_managed_dependencies(&project, "io.example", "managed-tile"),
        Some("5.2".to_string())
    );
    assert_eq!(
        resolve_version(Some("${nope}"), "io.example", "managed-tile", Some(&project)),
        Some("5.2".to_string())
    );
    assert_eq!(
        resolve_version(None, "io.example", "managed-tile", Some(&project)),
        Some("5.2".to_string())
    );
}

#[test]
fn unresolved_without_any_source() {
    let project = fixture_project();
    assert!(matches!(
        resolve_coordinate("io.example:other:${nope}", Some(&project)),
        Err(TilesError::UnresolvedVersion { .. })
    ));
    assert!(matches!(
        resolve_coordinate("io.example:base-tile:${revision}", None),
        Err(TilesError::UnresolvedVersion { .. })
    ));
}

#[test]
fn resolution_does_not_touch_the_project() {
    let project = fixture_project();
    let before = project.clone();
    let _ = resolve_version(Some("${revision}"), "g", "a", Some(&project));
    let _ = resolve_version(None, "io.example", "managed-tile", Some(&project));
    assert_eq!(project, before);
}

#[test]
fn loads_project_from_disk() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(temp.path(), "tiles-project.toml", PROJECT_FIXTURE);
    let project = ProjectModel::load(&path).unwrap();
    assert_eq!(project.lookup_property("tiles.version"), Some("2.4"));
    assert_eq!(project.interpolate("${revision}"), Some("2.4.1".to_string()));
}

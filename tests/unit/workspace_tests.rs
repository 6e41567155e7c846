//! Workspace loading, reference planning and tile location.

use std::path::Path;
use tempfile::TempDir;
use tiles_cli::coordinate::ResolvedTile;
use tiles_cli::locator::{TileLocation, TileLocator};
use tiles_cli::project::ProjectModel;
use tiles_cli::workspace::Workspace;
use tiles_cli::workspace::references::{applied_tiles, plan_references};
use tiles_cli::test_utils::{PROJECT_FIXTURE, WORKSPACE_FIXTURE, write_fixture};

fn load_fixtures(dir: &Path) -> (ProjectModel, Workspace) {
    let project = write_fixture(dir, "tiles-project.toml", PROJECT_FIXTURE);
    let workspace = write_fixture(dir, "ws/tiles-workspace.toml", WORKSPACE_FIXTURE);
    (ProjectModel::load(&project).unwrap(), Workspace::load(&workspace).unwrap())
}

#[test]
fn plans_references_from_applied_tiles() {
    let temp = TempDir::new().unwrap();
    let (project, workspace) = load_fixtures(temp.path());

    let applied = applied_tiles(&project);
    assert_eq!(applied.len(), 3);

    let consumer = workspace.get("consumer").unwrap();
    let plan = plan_references(&applied, &workspace, &consumer.references);
    assert!(plan.modified);
    assert_eq!(plan.references, vec!["library", "base-tile"]);

    // applying the plan again changes nothing
    let again = plan_references(&applied, &workspace, &plan.references);
    assert!(!again.modified);
    assert_eq!(again.references, plan.references);
}

#[test]
fn locates_workspace_tile_relative_to_workspace_file() {
    let temp = TempDir::new().unwrap();
    let (_, workspace) = load_fixtures(temp.path());
    let locator = TileLocator::new(Some(&workspace), temp.path().join("repo"));

    let location = locator.locate(&ResolvedTile::new("io.example", "base-tile", "1.0")).unwrap();
    assert_eq!(
        location,
        TileLocation::Workspace {
            project: "base-tile".to_string(),
            path: temp.path().join("ws").join("tiles/base").join("tile.xml"),
        }
    );

    // other versions of a workspace project come from the repository
    let location = locator.locate(&ResolvedTile::new("io.example", "library", "2.0")).unwrap();
    assert!(matches!(location, TileLocation::Repository { .. }));
}

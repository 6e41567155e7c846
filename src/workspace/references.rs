//! Project references for applied workspace tiles.
//!
//! When tiles are merged into a project, the build records them in the
//! `.applied-tiles` property as a comma separated list of `g:a:v` triples.
//! Every applied tile that is also a `tile` project in the workspace should be
//! a project reference of the consumer, so that editing the tile rebuilds it.

use super::Workspace;
use crate::constants::{
    APPLIED_TILES_PROPERTY, APPLIED_TILES_SEPARATOR, COORDINATE_FIELD_COUNT, COORDINATE_SEPARATOR,
};
use crate::coordinate::ResolvedTile;
use crate::project::ProjectContext;
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of reference planning for one project.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ReferencePlan {
    /// Final reference list: the existing references followed by additions
    pub references: Vec<String>,
    /// Names appended by this plan, in order
    pub added: Vec<String>,
    /// Whether the reference list differs from the existing one
    pub modified: bool,
}

/// Parse a `.applied-tiles` value into tile coordinates.
///
/// Entries with fewer than three fields are skipped with a warning; fields
/// beyond the third are ignored.
#[must_use]
pub fn parse_applied_tiles(value: &str) -> Vec<ResolvedTile> {
    value
        .split(APPLIED_TILES_SEPARATOR)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let fields: Vec<&str> = entry.split(COORDINATE_SEPARATOR).map(str::trim).collect();
            if fields.len() < COORDINATE_FIELD_COUNT {
                warn!("Skipping malformed applied tile '{}'", entry);
                return None;
            }
            Some(ResolvedTile::new(fields[0], fields[1], fields[2]))
        })
        .collect()
}

/// Tiles recorded in the project's `.applied-tiles` property.
///
/// A project without the property has no applied tiles.
#[must_use]
pub fn applied_tiles(project: &dyn ProjectContext) -> Vec<ResolvedTile> {
    project.lookup_property(APPLIED_TILES_PROPERTY).map(parse_applied_tiles).unwrap_or_default()
}

/// Compute the project references after adding the applied workspace tiles.
///
/// Existing references keep their order. Each applied tile that is a `tile`
/// project of the workspace and not referenced yet is appended once.
#[must_use]
pub fn plan_references(
    applied: &[ResolvedTile],
    workspace: &Workspace,
    existing: &[String],
) -> ReferencePlan {
    let mut plan = ReferencePlan {
        references: existing.to_vec(),
        ..ReferencePlan::default()
    };

    for tile in applied {
        let Some(project) = workspace.find(&tile.group_id, &tile.artifact_id, &tile.version) else {
            debug!("Applied tile {} is not a workspace project", tile);
            continue;
        };

        if !project.is_tile() {
            debug!(
                "Workspace project '{}' has packaging '{}', not adding a reference",
                project.name, project.packaging
            );
            continue;
        }

        if plan.references.contains(&project.name) {
            continue;
        }

        debug!("Adding project reference to '{}'", project.name);
        plan.references.push(project.name.clone());
        plan.added.push(project.name.clone());
        plan.modified = true;
    }

    plan
}

//! Version resolution for tile coordinates.
//!
//! A `<tile>` coordinate often leaves its version to the project, either as a
//! property placeholder (`io.example:base-tile:${tiles.version}`) or not at
//! all. This module turns such a coordinate into a concrete one:
//!
//! 1. **Passthrough**: a version without `${` is already concrete and is
//!    returned unchanged, even when empty.
//! 2. **Interpolation**: a version with `${` is interpolated against the
//!    project context. Without a project there is nothing to interpolate
//!    against and the version stays unresolved.
//! 3. **Dependency management**: if interpolation failed or no version was
//!    given, the project's managed dependencies are scanned in declaration
//!    order and the first entry whose management key starts with
//!    `groupId:artifactId:` supplies the version.
//!
//! All failure paths (no project, interpolation failure, no managed match)
//! collapse into the same "unresolved" result: `None` from
//! [`resolve_version`], [`TilesError::UnresolvedVersion`] from
//! [`resolve_coordinate`].
//!
//! # Examples
//!
//! ```rust
//! use tiles_cli::project::{ManagedDependency, ProjectDescriptor, ProjectModel};
//! use tiles_cli::resolver::{resolve_coordinate, resolve_version};
//!
//! let project = ProjectModel::new(ProjectDescriptor::new("io.example", "consumer", "1.0.0"))
//!     .with_property("revision", "9.9")
//!     .with_managed_dependency(ManagedDependency::new("io.example", "util", "3.1"));
//!
//! let tile = resolve_coordinate("io.example:util:${revision}", Some(&project))?;
//! assert_eq!(tile.version, "9.9");
//!
//! assert_eq!(
//!     resolve_version(None, "io.example", "util", Some(&project)),
//!     Some("3.1".to_string())
//! );
//! # Ok::<(), tiles_cli::core::TilesError>(())
//! ```

use crate::coordinate::{Coordinate, ResolvedTile, contains_placeholder, management_prefix};
use crate::core::TilesError;
use crate::project::ProjectContext;
use tracing::{debug, trace};

/// Resolve a possibly-unresolved version to a concrete one.
///
/// Returns `None` when the version cannot be determined. `raw` is `None`
/// when the coordinate did not specify a version at all.
#[must_use]
pub fn resolve_version(
    raw: Option<&str>,
    group_id: &str,
    artifact_id: &str,
    project: Option<&dyn ProjectContext>,
) -> Option<String> {
    if let Some(version) = raw {
        if !contains_placeholder(version) {
            return Some(version.to_string());
        }

        let Some(project) = project else {
            debug!("No project context to interpolate version '{}'", version);
            return None;
        };

        if let Some(interpolated) = project.interpolate(version) {
            trace!("Interpolated version '{}' to '{}'", version, interpolated);
            return Some(interpolated);
        }

        debug!(
            "Version '{}' of {}:{} could not be interpolated, trying dependency management",
            version, group_id, artifact_id
        );
    }

    search_managed_dependencies(project?, group_id, artifact_id)
}

/// Find the managed version of `groupId:artifactId` in declaration order.
///
/// Matching is a prefix match of `groupId:artifactId:` against each entry's
/// management key, so entries with any type or classifier match. The first
/// matching entry decides, even if it carries no version.
#[must_use]
pub fn search_managed_dependencies(
    project: &dyn ProjectContext,
    group_id: &str,
    artifact_id: &str,
) -> Option<String> {
    let prefix = management_prefix(group_id, artifact_id);

    let found = project
        .managed_dependencies()
        .iter()
        .find(|dependency| dependency.management_key().starts_with(&prefix));

    match found {
        Some(dependency) => {
            debug!(
                "Using managed version {:?} from '{}'",
                dependency.version,
                dependency.management_key()
            );
            dependency.version.clone()
        }
        None => {
            debug!("No managed dependency matches '{}'", prefix);
            None
        }
    }
}

/// Tokenize coordinate text and resolve its version.
///
/// # Errors
///
/// - [`TilesError::MalformedCoordinate`] if the text is not exactly three fields
/// - [`TilesError::UnresolvedVersion`] if the version cannot be determined
pub fn resolve_coordinate(
    text: &str,
    project: Option<&dyn ProjectContext>,
) -> Result<ResolvedTile, TilesError> {
    let coordinate = Coordinate::parse(text)?;
    resolve_parsed(&coordinate, project)
}

/// Resolve the version of an already parsed coordinate.
///
/// # Errors
///
/// Returns [`TilesError::UnresolvedVersion`] if the version cannot be determined.
pub fn resolve_parsed(
    coordinate: &Coordinate,
    project: Option<&dyn ProjectContext>,
) -> Result<ResolvedTile, TilesError> {
    resolve_version(
        coordinate.version.as_deref(),
        &coordinate.group_id,
        &coordinate.artifact_id,
        project,
    )
    .map(|version| coordinate.with_version(version))
    .ok_or_else(|| TilesError::UnresolvedVersion {
        coordinate: coordinate.to_string(),
    })
}

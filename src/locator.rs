//! Where the descriptor of a resolved tile lives.
//!
//! A tile checked out in the workspace is read from its project directory
//! (`<project>/tile.xml`). Any other tile is the `xml` artifact in the local
//! Maven repository:
//!
//! ```text
//! <repository>/<groupId with '.' as '/'>/<artifactId>/<version>/<artifactId>-<version>.xml
//! ```
//!
//! The locator only computes paths; it never reads or downloads the tile.

use crate::constants::{TILE_DESCRIPTOR, TILE_EXTENSION};
use crate::coordinate::ResolvedTile;
use crate::core::TilesError;
use crate::workspace::Workspace;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Location of a tile descriptor.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "source", rename_all = "kebab-case")]
pub enum TileLocation {
    /// `tile.xml` of a workspace project
    Workspace {
        /// Workspace project name
        project: String,
        /// Path of the project's tile descriptor
        path: PathBuf,
    },
    /// Tile artifact in the local repository
    Repository {
        /// Path inside the local repository
        path: PathBuf,
    },
}

impl TileLocation {
    /// Path of the tile descriptor.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Workspace {
                path,
                ..
            }
            | Self::Repository {
                path,
            } => path,
        }
    }
}

/// Computes tile locations against a workspace and a local repository.
#[derive(Debug, Clone)]
pub struct TileLocator<'a> {
    workspace: Option<&'a Workspace>,
    local_repository: PathBuf,
}

impl<'a> TileLocator<'a> {
    /// Create a locator; without a workspace every tile comes from the repository.
    pub fn new(workspace: Option<&'a Workspace>, local_repository: impl Into<PathBuf>) -> Self {
        Self {
            workspace,
            local_repository: local_repository.into(),
        }
    }

    /// Locate the descriptor of `tile`.
    ///
    /// # Errors
    ///
    /// Returns [`TilesError::InvalidCoordinate`] if a field is empty or would
    /// not map to a single directory (a separator, `.` or `..`).
    pub fn locate(&self, tile: &ResolvedTile) -> Result<TileLocation, TilesError> {
        validate_segments(tile)?;

        if let Some(workspace) = self.workspace {
            if let Some(project) = workspace.find(&tile.group_id, &tile.artifact_id, &tile.version)
            {
                let path = workspace.project_dir(project).join(TILE_DESCRIPTOR);
                tracing::debug!("Tile {} is workspace project '{}'", tile, project.name);
                return Ok(TileLocation::Workspace {
                    project: project.name.clone(),
                    path,
                });
            }
        }

        let path = self.repository_path(tile);
        tracing::debug!("Tile {} resolves to repository path {}", tile, path.display());
        Ok(TileLocation::Repository {
            path,
        })
    }

    /// Local repository path of the tile artifact.
    #[must_use]
    pub fn repository_path(&self, tile: &ResolvedTile) -> PathBuf {
        let mut path = self.local_repository.clone();
        for segment in tile.group_id.split('.') {
            path.push(segment);
        }
        path.push(&tile.artifact_id);
        path.push(&tile.version);
        path.push(format!("{}-{}.{}", tile.artifact_id, tile.version, TILE_EXTENSION));
        path
    }
}

fn validate_segments(tile: &ResolvedTile) -> Result<(), TilesError> {
    let invalid = |reason: String| TilesError::InvalidCoordinate {
        coordinate: tile.to_string(),
        reason,
    };

    if tile.group_id.is_empty() {
        return Err(invalid("groupId is empty".to_string()));
    }
    if tile.group_id.split('.').any(|segment| !is_path_segment(segment)) {
        return Err(invalid(format!("groupId '{}' is not a valid repository path", tile.group_id)));
    }
    if tile.artifact_id.is_empty() {
        return Err(invalid("artifactId is empty".to_string()));
    }
    if !is_path_segment(&tile.artifact_id) {
        return Err(invalid(format!(
            "artifactId '{}' is not a valid path component",
            tile.artifact_id
        )));
    }
    if tile.version.is_empty() {
        return Err(invalid("version is empty".to_string()));
    }
    if !is_path_segment(&tile.version) {
        return Err(invalid(format!("version '{}' is not a valid path component", tile.version)));
    }
    Ok(())
}

/// A non-empty single path component that stays in its parent directory.
fn is_path_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\', ':'])
        && !segment.contains('\0')
}

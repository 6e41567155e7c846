//! Workspace registry of locally available projects.
//!
//! A workspace lists the projects that are checked out side by side, with
//! their coordinates, packaging, directory and current project references.
//! Tiles that live in the workspace are opened from their directory instead
//! of the local repository, and consuming projects get a project reference
//! to every workspace tile they apply (see [`references`]).
//!
//! # File Format
//!
//! ```toml
//! [[projects]]
//! name = "base-tile"
//! group-id = "io.example"
//! artifact-id = "base-tile"
//! version = "1.0"
//! packaging = "tile"
//! path = "base-tile"
//!
//! [[projects]]
//! name = "consumer"
//! group-id = "io.example"
//! artifact-id = "consumer"
//! version = "1.0.0"
//! path = "consumer"
//! references = ["base-tile"]
//! ```
//!
//! Project paths are relative to the directory containing the workspace file.

pub mod references;

use crate::constants::{DEFAULT_PACKAGING, TILE_PACKAGING};
use crate::core::TilesError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_packaging() -> String {
    DEFAULT_PACKAGING.to_string()
}

/// A project registered in the workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct WorkspaceProject {
    /// Unique project name within the workspace
    pub name: String,
    /// Group identifier
    pub group_id: String,
    /// Artifact identifier
    pub artifact_id: String,
    /// Version
    pub version: String,
    /// Packaging, `jar` unless stated
    #[serde(default = "default_packaging")]
    pub packaging: String,
    /// Project directory, relative to the workspace root
    pub path: PathBuf,
    /// Names of referenced workspace projects, in order
    #[serde(default)]
    pub references: Vec<String>,
}

impl WorkspaceProject {
    /// Whether this project is a tile.
    #[must_use]
    pub fn is_tile(&self) -> bool {
        self.packaging == TILE_PACKAGING
    }

    /// Whether this project has exactly the given coordinate.
    #[must_use]
    pub fn matches(&self, group_id: &str, artifact_id: &str, version: &str) -> bool {
        self.group_id == group_id && self.artifact_id == artifact_id && self.version == version
    }
}

/// The set of projects available in the workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workspace {
    /// Registered projects
    #[serde(default)]
    pub projects: Vec<WorkspaceProject>,

    /// Directory project paths are relative to
    #[serde(skip)]
    pub root: PathBuf,
}

impl Workspace {
    /// Create a workspace rooted at `root` with the given projects.
    pub fn new(root: impl Into<PathBuf>, projects: Vec<WorkspaceProject>) -> Self {
        Self {
            projects,
            root: root.into(),
        }
    }

    /// Load a workspace from a TOML file; its directory becomes the root.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid workspace.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read workspace file {}", path.display()))?;

        let mut workspace: Self = toml::from_str(&content)
            .map_err(|e| TilesError::WorkspaceParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            })
            .with_context(|| format!("Invalid workspace file: {}", path.display()))?;

        workspace.root = path.parent().map(Path::to_path_buf).unwrap_or_default();

        tracing::debug!(
            "Loaded workspace {} with {} projects",
            workspace.root.display(),
            workspace.projects.len()
        );

        Ok(workspace)
    }

    /// Find the project with exactly this coordinate.
    #[must_use]
    pub fn find(
        &self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
    ) -> Option<&WorkspaceProject> {
        self.projects.iter().find(|project| project.matches(group_id, artifact_id, version))
    }

    /// Find a project by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&WorkspaceProject> {
        self.projects.iter().find(|project| project.name == name)
    }

    /// Absolute (root-joined) directory of a project.
    #[must_use]
    pub fn project_dir(&self, project: &WorkspaceProject) -> PathBuf {
        self.root.join(&project.path)
    }
}

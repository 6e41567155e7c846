//! Project model snapshots used as resolution context.
//!
//! The version resolver never talks to a build tool. It works against a
//! [`ProjectContext`]: a read-only view of a project's properties, its
//! interpolation rules and its ordered dependency management. This module
//! defines that trait and [`ProjectModel`], a TOML-backed implementation that
//! captures what a build tool would have materialized for a POM.
//!
//! # File Format (`tiles-project.toml`)
//!
//! ```toml
//! [project]
//! group-id = "io.example"
//! artifact-id = "consumer"
//! version = "1.0.0"
//! packaging = "jar"
//!
//! [project.parent]
//! group-id = "io.example"
//! artifact-id = "parent"
//! version = "7"
//!
//! [properties]
//! revision = "9.9"
//! ".applied-tiles" = "io.example:base-tile:1.0"
//!
//! [[dependency-management]]
//! group-id = "io.example"
//! artifact-id = "util"
//! version = "3.1"
//! ```
//!
//! `[[dependency-management]]` entries keep their declaration order, which
//! decides which entry wins when several match the same artifact.

pub mod interpolation;

use crate::constants::{COORDINATE_SEPARATOR, DEFAULT_PACKAGING, PROJECT_FILE_NAME};
use crate::coordinate::management_prefix;
use crate::core::TilesError;
use anyhow::{Context, Result};
use interpolation::Interpolator;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Read-only project context consulted by the version resolver.
///
/// Implementations are snapshots: nothing in this crate mutates them while
/// resolving, so one context can serve any number of concurrent resolutions.
pub trait ProjectContext {
    /// Look up a project property by exact name.
    fn lookup_property(&self, name: &str) -> Option<&str>;

    /// Substitute every `${...}` expression in `text`.
    ///
    /// Returns `None` if any expression cannot be resolved; a partially
    /// substituted string is never returned.
    fn interpolate(&self, text: &str) -> Option<String>;

    /// Managed dependencies in declaration order.
    fn managed_dependencies(&self) -> &[ManagedDependency];
}

fn default_packaging() -> String {
    DEFAULT_PACKAGING.to_string()
}

/// A dependency declared in a project's dependency-management block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ManagedDependency {
    /// Group identifier
    pub group_id: String,
    /// Artifact identifier
    pub artifact_id: String,
    /// Managed version; a BOM-style entry may leave it out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Artifact type, `jar` unless stated
    #[serde(rename = "type", default = "default_packaging")]
    pub kind: String,
    /// Optional classifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

impl ManagedDependency {
    /// Create a `jar` managed dependency without classifier.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: Some(version.into()),
            kind: default_packaging(),
            classifier: None,
        }
    }

    /// The management key, `groupId:artifactId:type[:classifier]`.
    ///
    /// Every key of an artifact starts with [`management_prefix`], which is
    /// what version lookups match against.
    #[must_use]
    pub fn management_key(&self) -> String {
        let mut key = management_prefix(&self.group_id, &self.artifact_id);
        key.push_str(&self.kind);
        if let Some(classifier) = self.classifier.as_deref().filter(|c| !c.is_empty()) {
            key.push(COORDINATE_SEPARATOR);
            key.push_str(classifier);
        }
        key
    }
}

/// Parent project reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ParentDescriptor {
    /// Parent group identifier
    pub group_id: String,
    /// Parent artifact identifier
    pub artifact_id: String,
    /// Parent version
    pub version: String,
}

/// The project's own descriptor fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectDescriptor {
    /// Group identifier
    pub group_id: String,
    /// Artifact identifier
    pub artifact_id: String,
    /// Project version
    pub version: String,
    /// Packaging, `jar` unless stated
    #[serde(default = "default_packaging")]
    pub packaging: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Project URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Parent project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentDescriptor>,
}

impl ProjectDescriptor {
    /// Create a `jar` descriptor with only coordinates set.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            packaging: default_packaging(),
            name: None,
            description: None,
            url: None,
            parent: None,
        }
    }

    /// Look up a descriptor field by its model name (`version`, `parent.groupId`, ...).
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "groupId" => Some(&self.group_id),
            "artifactId" => Some(&self.artifact_id),
            "version" => Some(&self.version),
            "packaging" => Some(&self.packaging),
            "name" => self.name.as_deref(),
            "description" => self.description.as_deref(),
            "url" => self.url.as_deref(),
            "parent.groupId" => self.parent.as_ref().map(|p| p.group_id.as_str()),
            "parent.artifactId" => self.parent.as_ref().map(|p| p.artifact_id.as_str()),
            "parent.version" => self.parent.as_ref().map(|p| p.version.as_str()),
            _ => None,
        }
    }
}

/// A materialized project: descriptor, properties and dependency management.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectModel {
    /// Descriptor fields, also addressable as `${project.*}` / `${pom.*}`
    pub project: ProjectDescriptor,
    /// Project properties
    #[serde(default)]
    pub properties: HashMap<String, String>,
    /// Managed dependencies in declaration order
    #[serde(default)]
    pub dependency_management: Vec<ManagedDependency>,
}

impl ProjectModel {
    /// Create a model with no properties and no dependency management.
    #[must_use]
    pub fn new(project: ProjectDescriptor) -> Self {
        Self {
            project,
            properties: HashMap::new(),
            dependency_management: Vec::new(),
        }
    }

    /// Add or replace a property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Append a managed dependency after the existing ones.
    #[must_use]
    pub fn with_managed_dependency(mut self, dependency: ManagedDependency) -> Self {
        self.dependency_management.push(dependency);
        self
    }

    /// Interpolator over this model's properties and descriptor.
    #[must_use]
    pub const fn interpolator(&self) -> Interpolator<'_> {
        Interpolator::new(&self.properties, &self.project)
    }

    /// Load a project model from a TOML file.
    ///
    /// # Errors
    ///
    /// - [`TilesError::ProjectNotFound`] if the file does not exist
    /// - [`TilesError::ProjectParseError`] if the file is not a valid project
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TilesError::ProjectNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read project file {}", path.display()))?;

        Self::parse(&content, path)
    }

    /// Parse a project model from TOML text; `origin` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns [`TilesError::ProjectParseError`] on invalid TOML or missing fields.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let model: Self = toml::from_str(content)
            .map_err(|e| TilesError::ProjectParseError {
                file: origin.display().to_string(),
                reason: e.to_string(),
            })
            .with_context(|| format!("Invalid project file: {}", origin.display()))?;

        tracing::debug!(
            "Loaded project {}:{}:{} with {} properties and {} managed dependencies",
            model.project.group_id,
            model.project.artifact_id,
            model.project.version,
            model.properties.len(),
            model.dependency_management.len()
        );

        Ok(model)
    }
}

impl ProjectContext for ProjectModel {
    fn lookup_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    fn interpolate(&self, text: &str) -> Option<String> {
        match self.interpolator().interpolate(text) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("Interpolation of '{}' failed: {}", text, e);
                None
            }
        }
    }

    fn managed_dependencies(&self) -> &[ManagedDependency] {
        &self.dependency_management
    }
}

/// Find a project file by walking from `start` towards the filesystem root.
///
/// Returns the first `tiles-project.toml` found, or `None`.
#[must_use]
pub fn find_project_file(start: &Path) -> Option<PathBuf> {
    find_file_upwards(start, PROJECT_FILE_NAME)
}

/// Find `file_name` in `start` or any of its ancestors.
#[must_use]
pub fn find_file_upwards(start: &Path, file_name: &str) -> Option<PathBuf> {
    start.ancestors().map(|dir| dir.join(file_name)).find(|candidate| candidate.is_file())
}

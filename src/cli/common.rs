//! Helpers shared by the `tiles` subcommands.

use crate::config::GlobalConfig;
use crate::core::TilesError;
use crate::project::{ProjectModel, find_file_upwards};
use crate::workspace::Workspace;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Output format of a command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON for scripts
    Json,
}

/// Print `value` as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Locate the project file: the explicit path, or a search upwards from `start`.
#[must_use]
pub fn project_file(
    explicit: Option<PathBuf>,
    config: &GlobalConfig,
    start: &Path,
) -> Option<PathBuf> {
    explicit.or_else(|| find_file_upwards(start, config.project_file_name()))
}

/// Load the project model, if one can be found.
///
/// An explicit path must exist; a project that is only searched for may be absent.
///
/// # Errors
///
/// Returns an error if the project file cannot be loaded.
pub fn load_project(
    explicit: Option<PathBuf>,
    config: &GlobalConfig,
) -> Result<Option<ProjectModel>> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    match project_file(explicit, config, &cwd) {
        Some(path) => {
            tracing::debug!("Using project file {}", path.display());
            ProjectModel::load(&path).map(Some)
        }
        None => {
            tracing::debug!(
                "No {} found from {} upwards",
                config.project_file_name(),
                cwd.display()
            );
            Ok(None)
        }
    }
}

/// Load the project model, failing if none can be found.
///
/// # Errors
///
/// Returns [`TilesError::ProjectNotFound`] if no project file is found, or
/// an error if it cannot be loaded.
pub fn require_project(explicit: Option<PathBuf>, config: &GlobalConfig) -> Result<ProjectModel> {
    load_project(explicit, config)?.ok_or_else(|| {
        TilesError::ProjectNotFound {
            path: config.project_file_name().to_string(),
        }
        .into()
    })
}

/// Load the workspace named on the command line or in the configuration.
///
/// # Errors
///
/// Returns an error if the workspace file cannot be loaded.
pub fn load_workspace(
    explicit: Option<PathBuf>,
    config: &GlobalConfig,
) -> Result<Option<Workspace>> {
    explicit.or_else(|| config.workspace.clone()).map(|path| Workspace::load(&path)).transpose()
}

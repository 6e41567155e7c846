//! Global user configuration for the `tiles` command.
//!
//! # Configuration File Location
//!
//! - **Unix/macOS**: `~/.tiles/config.toml`
//! - **Windows**: `%LOCALAPPDATA%\tiles\config.toml`
//!
//! The location can be overridden with the `TILES_CONFIG_PATH` environment
//! variable or the `--config` flag.
//!
//! # File Format
//!
//! ```toml
//! # Local Maven repository used to locate tiles that are not in the workspace
//! local-repository = "~/.m2/repository"
//!
//! # Workspace file used by `locate` and `references` when none is given
//! workspace = "/home/me/src/tiles-workspace.toml"
//!
//! # Project file name searched for from the current directory upwards
//! project-file = "tiles-project.toml"
//! ```
//!
//! Every key is optional and a missing file means all defaults.

use crate::constants::{CONFIG_PATH_ENV, PROJECT_FILE_NAME};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Local repository used when the configuration names none.
pub const DEFAULT_LOCAL_REPOSITORY: &str = "~/.m2/repository";

/// Global configuration for the `tiles` command.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Local Maven repository root, `~` is expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_repository: Option<String>,

    /// Default workspace file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<PathBuf>,

    /// Project file name to search for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_file: Option<String>,
}

impl GlobalConfig {
    /// Load the configuration from the default location.
    ///
    /// Returns the default configuration if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the default path cannot be determined, or if the
    /// file exists but cannot be read or parsed.
    pub async fn load() -> Result<Self> {
        Self::load_with_optional(None).await
    }

    /// Load the configuration from `path`, or from the default location.
    ///
    /// An explicit path that does not exist yields the defaults, the same as
    /// a missing default file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };

        if path.exists() {
            Self::load_from(&path).await
        } else {
            tracing::debug!("No global config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load the configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read global config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config from {}", path.display()))
    }

    /// Default configuration file path.
    ///
    /// `TILES_CONFIG_PATH` takes precedence over the platform location.
    ///
    /// # Errors
    ///
    /// Returns an error if the home (or local data) directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("tiles")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".tiles")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Local repository root with `~` and environment variables expanded.
    #[must_use]
    pub fn local_repository_path(&self) -> PathBuf {
        let raw = self.local_repository.as_deref().unwrap_or(DEFAULT_LOCAL_REPOSITORY);
        match shellexpand::full(raw) {
            Ok(expanded) => PathBuf::from(expanded.as_ref()),
            Err(e) => {
                tracing::warn!("Cannot expand local repository '{}': {}", raw, e);
                PathBuf::from(shellexpand::tilde(raw).as_ref())
            }
        }
    }

    /// Project file name to search for.
    #[must_use]
    pub fn project_file_name(&self) -> &str {
        self.project_file.as_deref().unwrap_or(PROJECT_FILE_NAME)
    }
}

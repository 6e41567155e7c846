//! Shared helpers for the `tiles` test suites.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tiles_cli::test_utils::write_fixture;

/// Temporary directory holding project, workspace and config files.
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    root: PathBuf,
}

impl TestProject {
    /// Create an empty test directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Root of the test directory
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write `tiles-project.toml` at the root.
    pub fn write_project(&self, content: &str) -> PathBuf {
        write_fixture(&self.root, "tiles-project.toml", content)
    }

    /// Write a workspace file at the root.
    pub fn write_workspace(&self, content: &str) -> PathBuf {
        write_fixture(&self.root, "tiles-workspace.toml", content)
    }

    /// Write the global config used by [`TestProject::tiles`].
    pub fn write_config(&self, content: &str) -> PathBuf {
        write_fixture(&self.root, "config.toml", content)
    }

    /// Create an empty file relative to the root.
    pub fn touch(&self, relative: &str) -> PathBuf {
        write_fixture(&self.root, relative, "<project/>")
    }

    /// `tiles` command running in the test directory with isolated config.
    pub fn tiles(&self) -> Command {
        let mut cmd = Command::cargo_bin("tiles").expect("tiles binary is built");
        cmd.current_dir(&self.root)
            .env("TILES_CONFIG_PATH", self.root.join("config.toml"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

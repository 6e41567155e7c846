//! Resolve the version of a tile coordinate.

use super::common::{OutputFormat, load_project, print_json};
use crate::config::GlobalConfig;
use crate::project::ProjectContext;
use crate::resolver::resolve_coordinate;
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Command to resolve a coordinate against a project.
#[derive(Args, Debug)]
pub struct ResolveCommand {
    /// Coordinate text, e.g. `io.example:base-tile:${tiles.version}`
    #[arg(value_name = "COORDINATE")]
    pub coordinate: String,

    /// Project file (default: nearest tiles-project.toml)
    #[arg(long, value_name = "FILE")]
    pub project: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct ResolveOutput {
    group_id: String,
    artifact_id: String,
    version: String,
    display_name: String,
}

impl ResolveCommand {
    /// Execute the command.
    ///
    /// Without a project file, only concrete versions resolve.
    ///
    /// # Errors
    ///
    /// Returns an error if the project cannot be loaded, or the coordinate is
    /// malformed or its version unresolved.
    pub async fn execute(self, config: &GlobalConfig) -> Result<()> {
        let project = load_project(self.project, config)?;
        let tile = resolve_coordinate(
            &self.coordinate,
            project.as_ref().map(|p| p as &dyn ProjectContext),
        )?;

        match self.format {
            OutputFormat::Json => print_json(&ResolveOutput {
                display_name: tile.display_name(),
                group_id: tile.group_id,
                artifact_id: tile.artifact_id,
                version: tile.version,
            }),
            OutputFormat::Text => {
                println!("{tile}");
                Ok(())
            }
        }
    }
}

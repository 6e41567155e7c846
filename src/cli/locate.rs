//! Show where the descriptor of a tile coordinate lives.

use super::common::{OutputFormat, load_project, load_workspace, print_json};
use crate::config::GlobalConfig;
use crate::coordinate::ResolvedTile;
use crate::locator::{TileLocation, TileLocator};
use crate::project::ProjectContext;
use crate::resolver::resolve_coordinate;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

/// Command to locate a tile descriptor.
#[derive(Args, Debug)]
pub struct LocateCommand {
    /// Coordinate text, e.g. `io.example:base-tile:${tiles.version}`
    #[arg(value_name = "COORDINATE")]
    pub coordinate: String,

    /// Project file (default: nearest tiles-project.toml)
    #[arg(long, value_name = "FILE")]
    pub project: Option<PathBuf>,

    /// Workspace file (default: `workspace` from the global config)
    #[arg(long, value_name = "FILE")]
    pub workspace: Option<PathBuf>,

    /// Local repository root (default: `local-repository` from the global config)
    #[arg(long, value_name = "DIR")]
    pub local_repository: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct LocateOutput {
    tile: ResolvedTile,
    display_name: String,
    location: TileLocation,
    exists: bool,
}

impl LocateCommand {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns an error if the project or workspace cannot be loaded, or if
    /// the coordinate cannot be resolved or located.
    pub async fn execute(self, config: &GlobalConfig) -> Result<()> {
        let project = load_project(self.project, config)?;
        let workspace = load_workspace(self.workspace, config)?;
        let local_repository =
            self.local_repository.unwrap_or_else(|| config.local_repository_path());

        let tile = resolve_coordinate(
            &self.coordinate,
            project.as_ref().map(|p| p as &dyn ProjectContext),
        )?;
        let location = TileLocator::new(workspace.as_ref(), local_repository).locate(&tile)?;
        let exists = location.path().is_file();

        match self.format {
            OutputFormat::Json => print_json(&LocateOutput {
                display_name: tile.display_name(),
                tile,
                location,
                exists,
            }),
            OutputFormat::Text => {
                let source = match &location {
                    TileLocation::Workspace {
                        project,
                        ..
                    } => format!("workspace project '{project}'"),
                    TileLocation::Repository {
                        ..
                    } => "local repository".to_string(),
                };
                println!("{}", location.path().display());
                eprintln!("{} from {}", tile.display_name().bold(), source);
                if !exists {
                    eprintln!(
                        "{} {} does not exist",
                        "warning:".yellow(),
                        location.path().display()
                    );
                }
                Ok(())
            }
        }
    }
}

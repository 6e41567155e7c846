//! Plan project references for the tiles a project applies.
//!
//! The consuming project is looked up in the workspace by its own coordinate
//! (or by `--name`) to find its current references. The plan is printed, never
//! written back.

use super::common::{OutputFormat, load_workspace, print_json, require_project};
use crate::config::GlobalConfig;
use crate::core::{ErrorContext, IntoAnyhowWithContext, TilesError};
use crate::workspace::references::{ReferencePlan, applied_tiles, plan_references};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

/// Command to compute applied-tile project references.
#[derive(Args, Debug)]
pub struct ReferencesCommand {
    /// Project file (default: nearest tiles-project.toml)
    #[arg(long, value_name = "FILE")]
    pub project: Option<PathBuf>,

    /// Workspace file (default: `workspace` from the global config)
    #[arg(long, value_name = "FILE")]
    pub workspace: Option<PathBuf>,

    /// Workspace name of the consuming project (default: matched by coordinate)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct ReferencesOutput {
    project: Option<String>,
    applied: Vec<String>,
    #[serde(flatten)]
    plan: ReferencePlan,
}

impl ReferencesCommand {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// - [`TilesError::ProjectNotFound`] if no project file is found
    /// - [`TilesError::ConfigError`] if no workspace file is given or configured
    /// - [`TilesError::WorkspaceProjectNotFound`] if `--name` is not in the workspace
    pub async fn execute(self, config: &GlobalConfig) -> Result<()> {
        let project = require_project(self.project, config)?;
        let workspace = load_workspace(self.workspace, config)?.ok_or_else(|| {
            TilesError::ConfigError {
                message: "No workspace file given".to_string(),
            }
            .into_anyhow_with_context(ErrorContext::new(TilesError::Other {
                message: String::new(),
            })
            .with_suggestion("Pass --workspace <FILE> or set `workspace` in the global config"))
        })?;

        let consumer = match &self.name {
            Some(name) => Some(workspace.get(name).ok_or_else(|| {
                TilesError::WorkspaceProjectNotFound {
                    coordinate: name.clone(),
                }
            })?),
            None => workspace.find(
                &project.project.group_id,
                &project.project.artifact_id,
                &project.project.version,
            ),
        };
        let existing = consumer.map(|p| p.references.as_slice()).unwrap_or_default();

        let applied = applied_tiles(&project);
        let plan = plan_references(&applied, &workspace, existing);

        match self.format {
            OutputFormat::Json => print_json(&ReferencesOutput {
                project: consumer.map(|p| p.name.clone()),
                applied: applied.iter().map(ToString::to_string).collect(),
                plan,
            }),
            OutputFormat::Text => {
                for reference in &plan.references {
                    if plan.added.contains(reference) {
                        println!("{} {}", reference, "(added)".green());
                    } else {
                        println!("{reference}");
                    }
                }
                if !plan.modified {
                    eprintln!("{}", "References are up to date".dimmed());
                }
                Ok(())
            }
        }
    }
}

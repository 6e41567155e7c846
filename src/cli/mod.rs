//! Command-line interface for the `tiles` tool.
//!
//! # Commands
//!
//! - `tokenize` - split coordinate text into fields
//! - `resolve` - resolve a coordinate's version against a project
//! - `locate` - show where a tile descriptor lives
//! - `references` - plan project references for applied workspace tiles
//!
//! # Global Options
//!
//! - `--verbose` / `-v`: debug logging
//! - `--quiet` / `-q`: errors only
//! - `--config` / `-c`: global configuration file
//!
//! `RUST_LOG` overrides the level chosen by `--verbose` and `--quiet`. Logs go
//! to stderr so command output on stdout stays parseable.

pub mod common;
pub mod locate;
pub mod references;
pub mod resolve;
pub mod tokenize;

use crate::config::GlobalConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Settings derived from the global command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Explicit global configuration file
    pub config_path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            config_path: None,
        }
    }
}

impl CliConfig {
    /// Install the stderr tracing subscriber.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init_logging(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .try_init();
    }
}

/// Maven Tiles coordinate resolution and tile location.
#[derive(Parser, Debug)]
#[command(
    name = "tiles",
    about = "Resolve and locate Maven Tile coordinates",
    version,
    long_about = "Tokenizes tile coordinates, resolves placeholder versions against a project, \
                  locates tile descriptors in a workspace or local repository and plans \
                  project references for applied tiles."
)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the global configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split coordinate text into its fields
    Tokenize(tokenize::TokenizeCommand),

    /// Resolve the version of a tile coordinate
    Resolve(resolve::ResolveCommand),

    /// Show where a tile descriptor lives
    Locate(locate::LocateCommand),

    /// Plan project references for applied workspace tiles
    References(references::ReferencesCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// # Errors
    ///
    /// Returns the error of the executed command.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Derive the [`CliConfig`] from the global flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
            config_path: self.config.clone(),
        }
    }

    /// Execute with an explicit [`CliConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the global configuration cannot be loaded or the
    /// command fails.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        let global = GlobalConfig::load_with_optional(config.config_path.clone()).await?;
        tracing::debug!("Global config: {:?}", global);

        match self.command {
            Commands::Tokenize(cmd) => cmd.execute().await,
            Commands::Resolve(cmd) => cmd.execute(&global).await,
            Commands::Locate(cmd) => cmd.execute(&global).await,
            Commands::References(cmd) => cmd.execute(&global).await,
        }
    }
}

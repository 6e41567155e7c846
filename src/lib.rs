//! tiles-cli - Maven Tile coordinate resolution
//!
//! Maven Tiles are reusable POM fragments referenced from a project with
//! `<tile>groupId:artifactId:version</tile>`. The version is frequently a
//! property placeholder or left to dependency management, so finding the
//! tile behind a reference means resolving it against the project first.
//!
//! # Architecture Overview
//!
//! - [`coordinate`] - placeholder-aware tokenization into `g:a:v` triples
//! - [`resolver`] - version resolution: passthrough, interpolation, then
//!   dependency management
//! - [`project`] - the project context the resolver reads (properties,
//!   `${project.*}` descriptor fields, managed dependencies)
//! - [`workspace`] - locally checked out projects and applied-tile references
//! - [`locator`] - workspace `tile.xml` or local repository artifact path
//!
//! ## Supporting Modules
//! - [`cli`] - the `tiles` command
//! - [`config`] - global configuration (`~/.tiles/config.toml`)
//! - [`core`] - error types and user-facing error rendering
//! - [`constants`] - markers, separators and file names
//!
//! # Example
//!
//! ```rust
//! use tiles_cli::locator::TileLocator;
//! use tiles_cli::project::{ProjectDescriptor, ProjectModel};
//! use tiles_cli::resolver::resolve_coordinate;
//!
//! let project = ProjectModel::new(ProjectDescriptor::new("io.example", "consumer", "1.0.0"))
//!     .with_property("tiles.version", "2.4");
//!
//! let tile = resolve_coordinate("io.example:base-tile:${tiles.version}", Some(&project))?;
//! assert_eq!(tile.display_name(), "io.example:base-tile:2.4.xml");
//!
//! let location = TileLocator::new(None, "/repo").locate(&tile)?;
//! assert!(location.path().ends_with("io/example/base-tile/2.4/base-tile-2.4.xml"));
//! # Ok::<(), tiles_cli::core::TilesError>(())
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coordinate;
pub mod core;
pub mod locator;
pub mod project;
pub mod resolver;
pub mod workspace;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

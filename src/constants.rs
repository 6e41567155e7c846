//! Global constants used throughout the tiles codebase.
//!
//! This module contains the file names, property names and literal markers
//! that are shared between the coordinate parser, the project model, the
//! workspace registry and the CLI. Defining them centrally keeps the textual
//! conventions of Maven Tiles in one discoverable place.

/// Marker that opens a property placeholder (`${name}`).
///
/// A version field containing this marker is considered "not yet known" and
/// is handed to the version resolver.
pub const PLACEHOLDER_START: &str = "${";

/// Separator between the fields of a `groupId:artifactId:version` coordinate.
pub const COORDINATE_SEPARATOR: char = ':';

/// Number of fields a well-formed tile coordinate must have.
pub const COORDINATE_FIELD_COUNT: usize = 3;

/// Project property holding the comma-separated list of applied tiles.
///
/// The tiles build extension records every tile it merged into a project
/// under this property, one `groupId:artifactId:version` entry per tile.
pub const APPLIED_TILES_PROPERTY: &str = ".applied-tiles";

/// Separator between entries of [`APPLIED_TILES_PROPERTY`].
pub const APPLIED_TILES_SEPARATOR: char = ',';

/// Packaging type of a tile project.
pub const TILE_PACKAGING: &str = "tile";

/// Default packaging type when a project or dependency does not declare one.
pub const DEFAULT_PACKAGING: &str = "jar";

/// Name of the tile descriptor inside a tile project directory.
pub const TILE_DESCRIPTOR: &str = "tile.xml";

/// File extension of a tile artifact in a Maven repository.
pub const TILE_EXTENSION: &str = "xml";

/// Prefixes under which the project descriptor fields are addressable
/// during interpolation (`${project.version}`, `${pom.version}`).
pub const DESCRIPTOR_PREFIXES: &[&str] = &["project.", "pom."];

/// Longest text an interpolation may produce before it is rejected.
pub const MAX_INTERPOLATED_LENGTH: usize = 64 * 1024;

/// Default file name of a project model snapshot.
pub const PROJECT_FILE_NAME: &str = "tiles-project.toml";

/// Environment variable overriding the global configuration path.
pub const CONFIG_PATH_ENV: &str = "TILES_CONFIG_PATH";

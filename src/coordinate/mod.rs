//! Maven coordinates as written in `<tile>` elements.
//!
//! A tile is referenced by a `groupId:artifactId:version` triple. Any of the
//! fields may embed property placeholders (`${...}`), and placeholders may
//! themselves contain colons, so the text is split with the placeholder-aware
//! [`tokenize`] rather than `str::split`.
//!
//! - [`Coordinate`] - the parsed triple, version possibly still a placeholder
//! - [`ResolvedTile`] - a triple whose version is concrete
//!
//! # Examples
//!
//! ```rust
//! use tiles_cli::coordinate::Coordinate;
//!
//! let coordinate = Coordinate::parse("io.example:util:${revision}")?;
//! assert_eq!(coordinate.group_id, "io.example");
//! assert_eq!(coordinate.artifact_id, "util");
//! assert!(coordinate.has_unresolved_version());
//! # Ok::<(), tiles_cli::core::TilesError>(())
//! ```

mod tokenizer;

pub use tokenizer::tokenize;

use crate::constants::{
    COORDINATE_FIELD_COUNT, COORDINATE_SEPARATOR, PLACEHOLDER_START, TILE_EXTENSION,
};
use crate::core::TilesError;
use serde::Serialize;
use std::fmt;

/// Returns `true` when `text` contains a `${` placeholder marker.
#[must_use]
pub fn contains_placeholder(text: &str) -> bool {
    text.contains(PLACEHOLDER_START)
}

/// A `groupId:artifactId:version` triple.
///
/// `version` is `None` when it was not specified at all, which is distinct
/// from an empty version string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coordinate {
    /// Group identifier, possibly empty
    pub group_id: String,
    /// Artifact identifier, possibly empty
    pub artifact_id: String,
    /// Version as written, `None` if not specified
    pub version: Option<String>,
}

impl Coordinate {
    /// Create a coordinate from its parts.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version,
        }
    }

    /// Parse coordinate text into exactly three fields.
    ///
    /// # Errors
    ///
    /// Returns [`TilesError::MalformedCoordinate`] when the text does not
    /// tokenize into exactly three fields. Note that `"g:a:"` has only two
    /// fields because a trailing separator does not open an empty one.
    pub fn parse(text: &str) -> Result<Self, TilesError> {
        let fields = tokenize(text);
        let count = fields.len();
        let [group_id, artifact_id, version]: [String; COORDINATE_FIELD_COUNT] =
            fields.try_into().map_err(|_| TilesError::MalformedCoordinate {
                text: text.to_string(),
                fields: count,
            })?;

        Ok(Self {
            group_id,
            artifact_id,
            version: Some(version),
        })
    }

    /// Whether the version is missing or still contains a placeholder.
    #[must_use]
    pub fn has_unresolved_version(&self) -> bool {
        self.version.as_deref().is_none_or(contains_placeholder)
    }

    /// The `groupId:artifactId:` prefix used to match managed dependencies.
    #[must_use]
    pub fn management_prefix(&self) -> String {
        management_prefix(&self.group_id, &self.artifact_id)
    }

    /// Combine this coordinate with a concrete version.
    #[must_use]
    pub fn with_version(&self, version: impl Into<String>) -> ResolvedTile {
        ResolvedTile {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{COORDINATE_SEPARATOR}{}", self.group_id, self.artifact_id)?;
        if let Some(version) = &self.version {
            write!(f, "{COORDINATE_SEPARATOR}{version}")?;
        }
        Ok(())
    }
}

/// Build the `groupId:artifactId:` prefix shared by all management keys of an artifact.
#[must_use]
pub fn management_prefix(group_id: &str, artifact_id: &str) -> String {
    format!("{group_id}{COORDINATE_SEPARATOR}{artifact_id}{COORDINATE_SEPARATOR}")
}

/// A tile coordinate with a concrete version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedTile {
    /// Group identifier
    pub group_id: String,
    /// Artifact identifier
    pub artifact_id: String,
    /// Concrete version
    pub version: String,
}

impl ResolvedTile {
    /// Create a resolved tile from its parts.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// Name under which the tile descriptor is presented, `g:a:v.xml`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{self}.{TILE_EXTENSION}")
    }
}

impl fmt::Display for ResolvedTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{COORDINATE_SEPARATOR}{}{COORDINATE_SEPARATOR}{}",
            self.group_id, self.artifact_id, self.version
        )
    }
}

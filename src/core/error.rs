//! Error handling for tiles
//!
//! This module provides the error types and user-friendly error reporting for the
//! tiles tooling. The error system follows two principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`TilesError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! # Error Categories
//!
//! - **Coordinates**: [`TilesError::MalformedCoordinate`], [`TilesError::UnresolvedVersion`],
//!   [`TilesError::InvalidCoordinate`]
//! - **Project model**: [`TilesError::ProjectNotFound`], [`TilesError::ProjectParseError`]
//! - **Workspace**: [`TilesError::WorkspaceParseError`], [`TilesError::WorkspaceProjectNotFound`]
//! - **Configuration**: [`TilesError::ConfigError`], [`TilesError::TomlError`]
//!
//! Malformed and unresolvable coordinates are an expected input class (most text in
//! a POM is not a tile reference), so the core never panics on them: the tokenizer
//! always succeeds and the resolver reports through these values.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tiles_cli::core::{TilesError, ErrorContext, user_friendly_error};
//!
//! let error = TilesError::MalformedCoordinate {
//!     text: "io.example:util".to_string(),
//!     fields: 2,
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for tiles operations.
///
/// Each variant names a specific failure mode and carries the text, path or
/// coordinate needed to explain it to the user.
#[derive(Error, Debug)]
pub enum TilesError {
    /// Coordinate text did not split into exactly three fields.
    ///
    /// Callers abort the resolution attempt for this coordinate; the text is
    /// most likely not a tile reference at all.
    ///
    /// # Fields
    /// - `text`: The raw coordinate text
    /// - `fields`: How many top-level fields the tokenizer produced
    #[error("Malformed tile coordinate '{text}': expected 3 fields, found {fields}")]
    MalformedCoordinate {
        /// The raw coordinate text
        text: String,
        /// Number of fields produced by the tokenizer
        fields: usize,
    },

    /// The version of a coordinate could not be determined.
    ///
    /// Raised when the version placeholder could not be interpolated and no
    /// managed dependency supplied a version, or when no project context was
    /// available to interpolate against.
    #[error("Cannot determine the version of tile '{coordinate}'")]
    UnresolvedVersion {
        /// The coordinate whose version is unknown, as written
        coordinate: String,
    },

    /// A resolved coordinate is unusable for locating a tile.
    #[error("Invalid tile coordinate '{coordinate}': {reason}")]
    InvalidCoordinate {
        /// The offending coordinate
        coordinate: String,
        /// Why it cannot be used
        reason: String,
    },

    /// No project file was found.
    #[error("Project file not found: {path}")]
    ProjectNotFound {
        /// Path (or search start directory) that was examined
        path: String,
    },

    /// Project file parsing error
    #[error("Invalid project file syntax in {file}")]
    ProjectParseError {
        /// Path to the project file that failed to parse
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// Workspace file parsing error
    #[error("Invalid workspace file syntax in {file}")]
    WorkspaceParseError {
        /// Path to the workspace file that failed to parse
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// A coordinate or name has no matching workspace project.
    #[error("No workspace project matches '{coordinate}'")]
    WorkspaceProjectNotFound {
        /// The coordinate or name that was looked up
        coordinate: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for TilesError {
    fn clone(&self) -> Self {
        match self {
            Self::MalformedCoordinate {
                text,
                fields,
            } => Self::MalformedCoordinate {
                text: text.clone(),
                fields: *fields,
            },
            Self::UnresolvedVersion {
                coordinate,
            } => Self::UnresolvedVersion {
                coordinate: coordinate.clone(),
            },
            Self::InvalidCoordinate {
                coordinate,
                reason,
            } => Self::InvalidCoordinate {
                coordinate: coordinate.clone(),
                reason: reason.clone(),
            },
            Self::ProjectNotFound {
                path,
            } => Self::ProjectNotFound {
                path: path.clone(),
            },
            Self::ProjectParseError {
                file,
                reason,
            } => Self::ProjectParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::WorkspaceParseError {
                file,
                reason,
            } => Self::WorkspaceParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::WorkspaceProjectNotFound {
                coordinate,
            } => Self::WorkspaceProjectNotFound {
                coordinate: coordinate.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            // io and toml errors don't implement Clone; keep their message
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information.
///
/// Wraps a [`TilesError`] with an optional suggestion (what to do next) and
/// optional details (why it happened).
///
/// # Examples
///
/// ```rust,no_run
/// use tiles_cli::core::{TilesError, ErrorContext};
///
/// let context = ErrorContext::new(TilesError::ProjectNotFound {
///     path: ".".to_string(),
/// })
/// .with_suggestion("Pass --project or create a tiles-project.toml")
/// .with_details("tiles searches the current and parent directories");
///
/// println!("{}", context);
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying tiles error
    pub error: TilesError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from a [`TilesError`] with no suggestion or details.
    pub const fn new(error: TilesError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Extension trait for converting [`TilesError`] to [`anyhow::Error`] with context
pub trait IntoAnyhowWithContext {
    /// Convert the error to an [`anyhow::Error`] with the provided context
    fn into_anyhow_with_context(self, context: ErrorContext) -> anyhow::Error;
}

impl IntoAnyhowWithContext for TilesError {
    fn into_anyhow_with_context(self, context: ErrorContext) -> anyhow::Error {
        anyhow::Error::new(ErrorContext {
            error: self,
            suggestion: context.suggestion,
            details: context.details,
        })
    }
}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Walks the error chain looking for a [`TilesError`] (possibly wrapped by
/// `anyhow` context), then for common standard library and TOML errors, and
/// finally falls back to a generic message that includes the full chain.
///
/// # Examples
///
/// ```rust,no_run
/// use tiles_cli::core::user_friendly_error;
///
/// let error = anyhow::anyhow!("Something went wrong");
/// let context = user_friendly_error(error);
///
/// context.display();
/// ```
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(ctx) = error.downcast_ref::<ErrorContext>() {
        return ErrorContext {
            error: ctx.error.clone(),
            suggestion: ctx.suggestion.clone(),
            details: ctx.details.clone(),
        };
    }

    for cause in error.chain() {
        if let Some(tiles_error) = cause.downcast_ref::<TilesError>() {
            return create_error_context(tiles_error);
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(TilesError::Other {
                    message: format!("Permission denied: {io_error}"),
                })
                .with_suggestion("Check the ownership and permissions of the file")
                .with_details("tiles could not read a project, workspace or configuration file");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(TilesError::Other {
                    message: format!("File not found: {io_error}"),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(TilesError::Other {
            message: format!("TOML parsing error: {toml_error}"),
        })
        .with_suggestion("Check the TOML syntax. Verify quotes, brackets, and table headers")
        .with_details(
            "TOML parsing errors are usually caused by syntax issues like missing quotes or mismatched brackets",
        );
    }

    // Generic error - include the full error chain
    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(TilesError::Other {
        message,
    })
}

/// Map a [`TilesError`] to an [`ErrorContext`] with tailored suggestions.
fn create_error_context(error: &TilesError) -> ErrorContext {
    match error {
        TilesError::MalformedCoordinate { text, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Write the tile as groupId:artifactId:version, e.g. 'io.example:base-tile:1.0' (got '{text}')"
            ))
            .with_details(
                "Colons inside ${...} placeholders do not separate fields; a trailing ':' with no version after it is not a third field",
            ),

        TilesError::UnresolvedVersion { .. } => ErrorContext::new(error.clone())
            .with_suggestion(
                "Define the referenced property in the project's [properties], or add the tile to [[dependency-management]]",
            )
            .with_details(
                "Placeholders are only resolved against a project file; every ${...} in the version must resolve",
            ),

        TilesError::InvalidCoordinate { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Every field must be non-empty and a single path component")
            .with_details("Fields may not contain '/', '\\' or ':', and may not be '.' or '..'"),

        TilesError::ProjectNotFound { .. } => ErrorContext::new(error.clone())
            .with_suggestion(
                "Pass --project <FILE> or create a tiles-project.toml in your project directory",
            )
            .with_details(
                "tiles looks for tiles-project.toml in the current directory and its parents",
            ),

        TilesError::ProjectParseError { file, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Check the TOML syntax in {file}. The [project] table needs group-id, artifact-id and version"
            ))
            .with_details("Common issues: missing quotes, unmatched brackets, misspelled keys"),

        TilesError::WorkspaceParseError { file, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Check the TOML syntax in {file}. Each [[projects]] entry needs name, group-id, artifact-id, version and path"
            )),

        TilesError::WorkspaceProjectNotFound { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Add the project to the workspace file or check its coordinates"),

        TilesError::ConfigError { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Check ~/.tiles/config.toml or the file named by TILES_CONFIG_PATH"),

        _ => ErrorContext::new(error.clone()),
    }
}

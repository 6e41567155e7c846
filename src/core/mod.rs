//! Core types and functionality for tiles
//!
//! This module holds the error types shared by every other module:
//! - [`TilesError`] - Enumerated error types covering all failure modes
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to user-friendly format
//! - [`IntoAnyhowWithContext`] - Extension trait for error conversion
//!
//! # Error Handling Pattern
//!
//! ```rust
//! use tiles_cli::core::{TilesError, user_friendly_error};
//! use anyhow::Result;
//!
//! fn example_operation() -> Result<String> {
//!     Err(TilesError::ProjectNotFound { path: ".".to_string() }.into())
//! }
//!
//! if let Err(e) = example_operation() {
//!     let friendly = user_friendly_error(e);
//!     assert!(friendly.suggestion.is_some());
//! }
//! ```

pub mod error;

pub use error::{ErrorContext, IntoAnyhowWithContext, TilesError, user_friendly_error};

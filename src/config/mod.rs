//! Configuration management for the `tiles` command.
//!
//! Only user-wide settings live here: where the local Maven repository is,
//! which workspace file to use by default, and which project file name to look
//! for. Project and workspace files have their own modules
//! ([`crate::project`], [`crate::workspace`]).
//!
//! See [`global`] for the file location and format.

pub mod global;

pub use global::{DEFAULT_LOCAL_REPOSITORY, GlobalConfig};

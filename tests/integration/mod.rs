//! Integration test suite for the `tiles` binary
//!
//! These tests drive the compiled binary end to end against temporary
//! project, workspace and configuration files.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **tokenize**: field splitting output
//! - **resolve**: version resolution and error exits
//! - **locate**: workspace and repository locations
//! - **references**: applied-tile reference planning

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod locate;
mod references;
mod resolve;
mod tokenize;

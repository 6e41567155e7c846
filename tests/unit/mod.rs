//! Unit test suite for the public tiles-cli API.
//!
//! ```bash
//! cargo test --test unit
//! ```

mod coordinate_tests;
mod resolution_tests;
mod workspace_tests;

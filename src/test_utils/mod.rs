//! Test utilities for tiles-cli
//!
//! Logging setup and fixture files shared by unit and integration tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use tiles_cli::test_utils::{PROJECT_FIXTURE, write_fixture};
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! let project = write_fixture(temp.path(), "tiles-project.toml", PROJECT_FIXTURE);
//! assert!(project.exists());
//! ```

use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` if given, otherwise `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=tiles_cli=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// A consumer project applying two tiles, with a managed tile version.
pub const PROJECT_FIXTURE: &str = r#"[project]
group-id = "io.example"
artifact-id = "consumer"
version = "1.0.0"

[properties]
"tiles.version" = "2.4"
revision = "${tiles.version}.1"
".applied-tiles" = "io.example:base-tile:1.0,io.example:library:1.0,io.example:remote-tile:3.0"

[[dependency-management]]
group-id = "io.example"
artifact-id = "managed-tile"
version = "5.2"
type = "xml"
"#;

/// A workspace with the consumer, one tile project and one jar project.
pub const WORKSPACE_FIXTURE: &str = r#"[[projects]]
name = "consumer"
group-id = "io.example"
artifact-id = "consumer"
version = "1.0.0"
path = "consumer"
references = ["library"]

[[projects]]
name = "base-tile"
group-id = "io.example"
artifact-id = "base-tile"
version = "1.0"
packaging = "tile"
path = "tiles/base"

[[projects]]
name = "library"
group-id = "io.example"
artifact-id = "library"
version = "1.0"
path = "library"
"#;

/// Write `content` to `dir/name`, creating parent directories.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}

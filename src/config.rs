//! Configuration management for tally
//!
//! The database location is resolved from, in order: the `--db` flag, the
//! `TALLY_DB_PATH` environment variable, and the workspace-local default.
//!
//! # Environment Variables
//!
//! - `TALLY_DB_PATH`: Override path to the counter database
//!   (default: `.tally/tally.db` in the current directory)

use std::path::PathBuf;

/// Default database location relative to the working directory.
pub const DEFAULT_DB_PATH: &str = ".tally/tally.db";

/// Resolve the database path from the CLI flag and environment.
pub fn resolve_db_path(flag: Option<&str>) -> PathBuf {
    if let Some(path) = flag {
        return PathBuf::from(path);
    }

    match std::env::var("TALLY_DB_PATH") {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_DB_PATH),
    }
}

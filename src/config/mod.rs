//! Application configuration.
//!
//! Holds the well-known identifiers (app id, database file name) and the
//! per-OS cache directory resolution.

mod paths;

pub use paths::{cache_dir_for, database_path, resolve_cache_dir, APP_ID, DATABASE_FILE};

//! Error types for qrz.
//!
//! Uses `thiserror` for ergonomic error definitions. Each component has its
//! own error enum; `CliError` is the umbrella the driver reports from.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from cache directory resolution.
#[derive(Error, Debug)]
pub enum PathError {
    #[error("unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    #[error("could not determine the current user's home directory")]
    HomeDirNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the record store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl StorageError {
    /// Whether this error is a primary-key violation on insert.
    ///
    /// Duplicate callsigns are expected in dirty source data; the importer
    /// logs them and moves on instead of aborting.
    pub fn is_duplicate(&self) -> bool {
        match self {
            StorageError::Database(rusqlite::Error::SqliteFailure(e, _)) => {
                e.code == rusqlite::ErrorCode::ConstraintViolation
            }
            _ => false,
        }
    }
}

/// Errors from the flat-file importer.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("input file not found: {0}")]
    FileNotFound(PathBuf),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("IO error reading input: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error type reported by the CLI driver.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for path resolution.
pub type PathResult<T> = Result<T, PathError>;

/// Result type alias for store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type alias for import operations.
pub type ImportResult<T> = Result<T, ImportError>;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

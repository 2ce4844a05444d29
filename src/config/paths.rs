//! Cache directory resolution.
//!
//! The database lives in a per-user, per-OS cache directory. The platform
//! layout is an explicit mapping so that an unrecognized OS fails loudly
//! instead of scattering files somewhere surprising.

use crate::error::{PathError, PathResult};
use directories::BaseDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application identifier used as the cache subdirectory name.
pub const APP_ID: &str = "com.ki4hdu.qrz";

/// File name of the embedded database inside the cache directory.
pub const DATABASE_FILE: &str = "mydatabase.db";

/// Compute the cache directory for a given platform identifier and home
/// directory. Pure; performs no filesystem access.
///
/// Recognized platforms are `macos`, `linux`, and `windows` (the values of
/// [`std::env::consts::OS`] on those systems). Anything else is an error.
pub fn cache_dir_for(os: &str, home: &Path) -> PathResult<PathBuf> {
    let dir = match os {
        "macos" => home.join("Library").join("Caches").join(APP_ID),
        "linux" => home.join(".cache").join(APP_ID),
        "windows" => home
            .join("AppData")
            .join("Local")
            .join("Cache")
            .join(APP_ID),
        other => return Err(PathError::UnsupportedPlatform(other.to_string())),
    };
    Ok(dir)
}

/// Resolve the cache directory for the current user and OS, creating it
/// (with all intermediate directories) if it does not already exist.
pub fn resolve_cache_dir() -> PathResult<PathBuf> {
    let base = BaseDirs::new().ok_or(PathError::HomeDirNotFound)?;
    let dir = cache_dir_for(std::env::consts::OS, base.home_dir())?;

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
        debug!(path = %dir.display(), "created cache directory");
    }

    Ok(dir)
}

/// Full path to the database file inside the cache directory.
pub fn database_path() -> PathResult<PathBuf> {
    Ok(resolve_cache_dir()?.join(DATABASE_FILE))
}

//! Startup filesystem helpers: JSON config loading and data-directory
//! creation.
//!
//! These run serially at process startup, before request traffic. The
//! `try_*` functions propagate errors; the plain wrappers implement the
//! fail-fast startup policy (log, exit 1) because running with a corrupt
//! config or a missing data directory is worse than not running.

use std::path::Path;
use thiserror::Error;
use tracing::{error, info};

/// Startup filesystem errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// File could not be read
    #[error("Error reading {path}: {source}")]
    Read {
        /// Path of the file being read
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// File contents were not valid JSON
    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        /// Path of the file being parsed
        path: String,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// Directory could not be created
    #[error("Error creating directory {path}: {source}")]
    CreateDir {
        /// Path of the directory being created
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Read a file and parse it as JSON.
pub fn try_read_json_file(path: impl AsRef<Path>) -> Result<serde_json::Value, FsError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| FsError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| FsError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Read a JSON config file, terminating the process on failure.
///
/// Configuration files are assumed present and well-formed; anything else is
/// a fatal startup error.
pub fn read_json_file(path: impl AsRef<Path>) -> serde_json::Value {
    unwrap_or_exit(try_read_json_file(path))
}

/// Create a directory and all missing ancestors; existing paths are a no-op.
///
/// Tolerates a racing creator: another process winning the
/// `create_dir_all` race is success, not failure.
pub fn try_make_dirs(path: impl AsRef<Path>) -> Result<(), FsError> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(());
    }
    match std::fs::create_dir_all(path) {
        Ok(()) => {
            info!(path = %path.display(), "data directory created");
            Ok(())
        }
        // Another creator won the race; the directory being there is what matters.
        Err(_) if path.is_dir() => Ok(()),
        Err(source) => Err(FsError::CreateDir {
            path: path.display().to_string(),
            source,
        }),
    }
}

/// Ensure a directory exists, terminating the process on failure.
pub fn make_dirs(path: impl AsRef<Path>) {
    unwrap_or_exit(try_make_dirs(path))
}

fn unwrap_or_exit<T>(result: Result<T, FsError>) -> T {
    unwrap_or_exit_with(result, |code| std::process::exit(code))
}

// The exit hook is injectable so the fatal path is testable.
fn unwrap_or_exit_with<T>(result: Result<T, FsError>, exit: impl FnOnce(i32) -> T) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            error!(error = %err, "fatal startup error");
            exit(1)
        }
    }
}

//! Text file helpers: read whole files, read lines, write text
//!
//! Two write conventions are offered:
//!
//! - [`write_file`] returns every failure to the caller
//! - [`write_file_reporting`] reports I/O failures on stderr and returns `Ok(false)`
//!
//! Both refuse an empty path up front with [`FileError::NoPath`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error};

/// Message printed by [`write_file_reporting`] when the write fails.
pub const WRITE_FAILURE_MESSAGE: &str =
    "An error has occurred. Please check your file path and write permissions and try again.";

/// Errors from file operations
#[derive(Error, Debug)]
pub enum FileError {
    #[error("No file specified")]
    NoPath,

    #[error("File not found or unreadable: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write to {}: {source}", path.display())]
    Unwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn require_path(path: &Path) -> Result<&Path, FileError> {
    if path.as_os_str().is_empty() {
        return Err(FileError::NoPath);
    }
    Ok(path)
}

/// Read a whole file as text. Invalid UTF-8 is replaced, not rejected.
pub fn read_file(path: impl AsRef<Path>) -> Result<String, FileError> {
    let path = require_path(path.as_ref())?;
    let bytes = fs::read(path).map_err(|source| FileError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read file");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read a file as a list of lines, terminators removed.
pub fn read_file_lines(path: impl AsRef<Path>) -> Result<Vec<String>, FileError> {
    Ok(read_file(path)?.lines().map(str::to_string).collect())
}

/// Read a file with its line breaks removed (lines concatenated).
pub fn read_file_joined(path: impl AsRef<Path>) -> Result<String, FileError> {
    Ok(read_file(path)?.lines().collect())
}

/// Write `contents` to `path`, creating or truncating the file.
pub fn write_file(path: impl AsRef<Path>, contents: &str) -> Result<(), FileError> {
    let path = require_path(path.as_ref())?;
    fs::write(path, contents).map_err(|source| FileError::Unwritable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}

/// Write `contents` to `path`, reporting I/O failures instead of returning them.
///
/// Returns `Ok(true)` when written, `Ok(false)` when the failure was
/// reported on stderr, and `Err(FileError::NoPath)` for an empty path.
pub fn write_file_reporting(path: impl AsRef<Path>, contents: &str) -> Result<bool, FileError> {
    match write_file(path, contents) {
        Ok(()) => Ok(true),
        Err(FileError::NoPath) => Err(FileError::NoPath),
        Err(e) => {
            error!(error = %e, "File write failed");
            eprintln!("{}", WRITE_FAILURE_MESSAGE);
            Ok(false)
        }
    }
}

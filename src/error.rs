//! Error types and the user-facing message catalogue

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sorting operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fixed message for path problems discovered during verification.
pub const GENERAL_ERROR: &str =
    "Something went wrong while accessing the folder. Please select a different one and try again.";

/// Fixed message shown when a run completes without sorting any file.
pub const NO_FILES_SORTED: &str =
    "No files were sorted. The folder does not contain any images with a usable capture date.";

/// Fixed message for a directory listing that fails mid-run.
pub const DIRECTORY_FAILURE: &str =
    "Failed to process the directory. Please check the path and try again.";

/// The denied filesystem operation, named in access-denied messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Write,
    Read,
}

impl std::fmt::Display for AccessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessKind::Write => f.write_str("Write"),
            AccessKind::Read => f.write_str("Read"),
        }
    }
}

/// Main error type for the folder sorter
///
/// The verification and listing variants render the fixed messages
/// above; per-file variants (`Io`, `ExifRead`) are counted and logged
/// by the engine, never shown to the user directly.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read EXIF data from {path}: {message}")]
    ExifRead { path: PathBuf, message: String },

    /// The folder path was empty
    #[error("{}", GENERAL_ERROR)]
    InvalidPath,

    /// The folder does not exist
    #[error("{}", GENERAL_ERROR)]
    NotFound(PathBuf),

    /// The path points to a file, not a directory
    #[error("{}", GENERAL_ERROR)]
    NotADirectory(PathBuf),

    /// The folder exists but the process lacks read or write access
    #[error(
        "{operation} access denied to folder: {path}. Select a different one or adjust its permissions and try again."
    )]
    AccessDenied { path: PathBuf, operation: AccessKind },

    /// Listing the folder contents failed mid-run
    #[error("{}", DIRECTORY_FAILURE)]
    DirectoryListing(#[source] walkdir::Error),

    /// The run finished without a single successful move
    #[error("{}", NO_FILES_SORTED)]
    NoFilesSorted,
}

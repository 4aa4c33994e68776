//! Error types for the SGM writer.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the SGM writer library.
#[derive(Debug, Error)]
pub enum SgmError {
    /// Command-line arguments could not be parsed. Holds the rendered usage text.
    #[error("{0}")]
    Usage(String),

    /// `--help` or `--version` was requested. Holds the text to print.
    #[error("{0}")]
    Info(String),

    /// No reference files were supplied.
    #[error("At least one reference file is required")]
    NoReferences,

    /// An input file could not be opened or read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be created or written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SgmError {
    /// Build a closure mapping an IO error on `path` to [`SgmError::Read`].
    pub(crate) fn read(path: &std::path::Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Build a closure mapping an IO error on `path` to [`SgmError::Write`].
    pub(crate) fn write(path: &std::path::Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type alias for SGM writer operations.
pub type Result<T> = std::result::Result<T, SgmError>;

//! Typed error definitions for mv_to_dirs.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoveError {
    #[error("Cannot use destination {path}: {source}")]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0} is not directory.")]
    DestinationNotDirectory(PathBuf),

    #[error("Source path has no file name: {0}")]
    MissingFileName(PathBuf),

    #[error("Modification time of {0} cannot be expressed as a calendar date")]
    TimestampOutOfRange(PathBuf),
}

impl MoveError {
    /// Stable identifier used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            MoveError::DestinationUnavailable { .. } => "dest_unavailable",
            MoveError::DestinationNotDirectory(_) => "dest_not_dir",
            MoveError::MissingFileName(_) => "missing_file_name",
            MoveError::TimestampOutOfRange(_) => "mtime_out_of_range",
        }
    }
}

//! Startup validation.

use std::fs;
use std::path::Path;
use tracing::{debug, error};

use crate::errors::MoveError;

/// The destination root must already exist and be a directory.
pub fn validate_destination(dest: &Path) -> Result<(), MoveError> {
    let meta = fs::metadata(dest).map_err(|source| {
        error!(path = %dest.display(), error = %source, "Destination unavailable");
        MoveError::DestinationUnavailable {
            path: dest.to_path_buf(),
            source,
        }
    })?;
    if !meta.is_dir() {
        error!(path = %dest.display(), "Destination is not a directory");
        return Err(MoveError::DestinationNotDirectory(dest.to_path_buf()));
    }
    debug!(path = %dest.display(), "Destination validated");
    Ok(())
}

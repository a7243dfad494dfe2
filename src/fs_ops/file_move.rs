//! File move implementation.
//! Sorts one file into `<destination>/<ext>/<YYYYMMDD>/<name>`.
//! Never overwrites: an occupied destination is reported and skipped.
//! Attempts an atomic rename; only a cross-device failure falls back to copy+delete.

use anyhow::{Context, Result};
use filetime::FileTime;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::MoveError;
use crate::output as out;

use super::helpers::io_error_with_help;
use super::io_copy::copy_streaming;
use super::resolve::destination_subdir;
use super::util::RenameFailure;

/// What happened to a single source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Atomic rename into the destination.
    Renamed(PathBuf),
    /// Copied across filesystems, source removed.
    Copied(PathBuf),
    /// Destination already occupied; source left in place.
    Skipped { existing: PathBuf },
    /// Dry run: the file would have gone here.
    Planned(PathBuf),
}

/// Move a single regular file described by `meta` into the sorted tree.
pub fn move_file(config: &Config, src: &Path, meta: &Metadata) -> Result<MoveOutcome> {
    move_file_with(config, src, meta, |from, to| fs::rename(from, to))
}

/// Same as [`move_file`] with a caller-supplied rename primitive.
pub fn move_file_with<R>(config: &Config, src: &Path, meta: &Metadata, rename: R) -> Result<MoveOutcome>
where
    R: FnOnce(&Path, &Path) -> io::Result<()>,
{
    let file_name = src
        .file_name()
        .ok_or_else(|| MoveError::MissingFileName(src.to_path_buf()))?;
    let modified = meta
        .modified()
        .map_err(io_error_with_help("read modification time of", src))?;

    let subdir = destination_subdir(file_name, modified)
        .ok_or_else(|| MoveError::TimestampOutOfRange(src.to_path_buf()))?;
    let dest_dir = config.destination.join(subdir);
    let dest = dest_dir.join(file_name);
    debug!(src = %src.display(), dest = %dest.display(), "resolved destination");

    if config.dry_run {
        if entry_exists(&dest) {
            return Ok(report_skip(src, dest));
        }
        out::print_info(&format!("would move {} -> {}", src.display(), dest.display()));
        info!(src = %src.display(), dest = %dest.display(), "dry-run: would move file");
        return Ok(MoveOutcome::Planned(dest));
    }

    if !dest_dir.exists() {
        fs::create_dir_all(&dest_dir)
            .map_err(io_error_with_help("create destination directory", &dest_dir))?;
        debug!(path = %dest_dir.display(), "created destination directory");
    }

    if entry_exists(&dest) {
        return Ok(report_skip(src, dest));
    }

    match rename(src, &dest) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dest.display(), "Renamed file atomically");
            Ok(MoveOutcome::Renamed(dest))
        }
        Err(e) => match RenameFailure::classify(&e) {
            RenameFailure::CrossDevice => {
                warn!(error = %e, src = %src.display(), "cross-filesystem rename; copying instead");
                copy_across_devices(src, &dest, modified)?;
                info!(src = %src.display(), dest = %dest.display(), "Copied file and removed source");
                Ok(MoveOutcome::Copied(dest))
            }
            RenameFailure::Other => Err(e)
                .with_context(|| format!("rename '{}' -> '{}'", src.display(), dest.display())),
        },
    }
}

/// Anything at `path` counts as occupied, including dangling symlinks.
fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn report_skip(src: &Path, dest: PathBuf) -> MoveOutcome {
    out::print_info(&format!("{} exists. {} didn't move.", dest.display(), src.display()));
    info!(src = %src.display(), existing = %dest.display(), "Destination exists; skipped");
    MoveOutcome::Skipped { existing: dest }
}

fn copy_across_devices(src: &Path, dest: &Path, modified: SystemTime) -> Result<()> {
    copy_streaming(src, dest).map_err(io_error_with_help("copy to", dest))?;

    if let Err(e) = filetime::set_file_mtime(dest, FileTime::from_system_time(modified)) {
        warn!(error = %e, dest = %dest.display(), "could not carry modification time over to copy");
    }

    fs::remove_file(src).map_err(io_error_with_help("remove original file", src))?;
    Ok(())
}

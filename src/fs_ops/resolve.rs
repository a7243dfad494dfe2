//! Destination resolution.
//! Maps a file name and modification time to `<ext>/<YYYYMMDD>`.
//!
//! - The extension is whatever follows the last `.` of the name, leading dots
//!   stripped and lowercased. `.bashrc` therefore sorts under `bashrc`.
//! - Names without a dot, or ending in a dot, sort under `noext`.
//! - The date uses local calendar fields of the timestamp. Timestamps chrono
//!   cannot represent yield `None` rather than a panic.

use chrono::{DateTime, Local, Utc};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Directory name used for files without an extension.
pub const NO_EXTENSION_DIR: &str = "noext";

/// Lowercased extension of `file_name`, or `noext`.
pub fn extension_dir(file_name: &OsStr) -> String {
    let name = file_name.to_string_lossy();
    let ext = match name.rfind('.') {
        Some(idx) => name[idx..].trim_start_matches('.'),
        None => "",
    };
    if ext.is_empty() {
        NO_EXTENSION_DIR.to_string()
    } else {
        ext.to_lowercase()
    }
}

/// `YYYYMMDD` of `modified` in the local calendar, or `None` when the
/// timestamp is outside the range chrono can represent.
pub fn date_dir(modified: SystemTime) -> Option<String> {
    let utc = match modified.duration_since(UNIX_EPOCH) {
        Ok(d) => DateTime::<Utc>::from_timestamp(i64::try_from(d.as_secs()).ok()?, d.subsec_nanos()),
        Err(before) => {
            let d = before.duration();
            let secs = i64::try_from(d.as_secs()).ok()?;
            match d.subsec_nanos() {
                0 => DateTime::<Utc>::from_timestamp(secs.checked_neg()?, 0),
                n => DateTime::<Utc>::from_timestamp(secs.checked_neg()?.checked_sub(1)?, 1_000_000_000 - n),
            }
        }
    }?;
    Some(utc.with_timezone(&Local).format("%Y%m%d").to_string())
}

/// Relative destination directory for a file: `<ext>/<YYYYMMDD>`.
pub fn destination_subdir(file_name: &OsStr, modified: SystemTime) -> Option<PathBuf> {
    let mut p = PathBuf::from(extension_dir(file_name));
    p.push(date_dir(modified)?);
    Some(p)
}

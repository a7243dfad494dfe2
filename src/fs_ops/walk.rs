//! Directory walkers.
//!
//! - `walk_flat`: direct children of the source only (or the source itself
//!   when it is a regular file).
//! - `walk_recursive`: every regular file of the subtree.
//!
//! Both visit entries in file-name order, move one file at a time and stop at
//! the first error. Files already moved stay moved.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::Config;

use super::file_move::{MoveOutcome, move_file};
use super::helpers::io_error_with_help;

/// Per-run counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    pub renamed: usize,
    pub copied: usize,
    pub skipped: usize,
    pub planned: usize,
}

impl WalkSummary {
    fn record(&mut self, outcome: &MoveOutcome) {
        match outcome {
            MoveOutcome::Renamed(_) => self.renamed += 1,
            MoveOutcome::Copied(_) => self.copied += 1,
            MoveOutcome::Skipped { .. } => self.skipped += 1,
            MoveOutcome::Planned(_) => self.planned += 1,
        }
    }

    /// Files that actually changed place.
    pub fn moved(&self) -> usize {
        self.renamed + self.copied
    }
}

/// Sort the direct regular-file children of `config.source`.
pub fn walk_flat(config: &Config) -> Result<WalkSummary> {
    let src = &config.source;
    let mut summary = WalkSummary::default();

    let meta = fs::symlink_metadata(src).map_err(io_error_with_help("stat source", src))?;
    let ftype = meta.file_type();
    if ftype.is_file() {
        summary.record(&move_file(config, src, &meta)?);
        return Ok(summary);
    }
    if !ftype.is_dir() {
        debug!(path = %src.display(), "source is neither file nor directory; nothing to do");
        return Ok(summary);
    }

    let mut entries = fs::read_dir(src)
        .map_err(io_error_with_help("read directory", src))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error_with_help("read directory", src))?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let meta = entry
            .metadata()
            .map_err(io_error_with_help("stat", &path))?;
        if !meta.file_type().is_file() {
            debug!(path = %path.display(), "skipping non-regular entry");
            continue;
        }
        summary.record(&move_file(config, &path, &meta)?);
    }
    Ok(summary)
}

/// Sort every regular file below `config.source`.
pub fn walk_recursive(config: &Config) -> Result<WalkSummary> {
    let mut summary = WalkSummary::default();

    // WalkDir always follows a symlinked root; treat it like walk_flat does.
    let root = fs::symlink_metadata(&config.source)
        .map_err(io_error_with_help("stat source", &config.source))?;
    if root.file_type().is_symlink() {
        debug!(path = %config.source.display(), "source is a symlink; nothing to do");
        return Ok(summary);
    }

    let nested_dest = nested_destination(&config.source, &config.destination);

    let walker = WalkDir::new(&config.source)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| match &nested_dest {
            Some(dest) if e.depth() > 0 && e.file_type().is_dir() => {
                !fs::canonicalize(e.path()).is_ok_and(|p| &p == dest)
            }
            _ => true,
        });

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let meta = entry.metadata()?;
        summary.record(&move_file(config, entry.path(), &meta)?);
    }
    Ok(summary)
}

/// Canonical destination root when it sits strictly inside the source tree.
fn nested_destination(source: &Path, dest: &Path) -> Option<PathBuf> {
    let src_real = fs::canonicalize(source).ok()?;
    let dest_real = fs::canonicalize(dest).ok()?;
    (dest_real != src_real && dest_real.starts_with(&src_real)).then_some(dest_real)
}

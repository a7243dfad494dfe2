use anyhow::Result;
use tracing::debug;

use crate::config::Config;

use super::walk::{WalkSummary, walk_flat, walk_recursive};

/// Top-level dispatcher: pick the walker requested by `config.recursive`.
pub fn sort_source(config: &Config) -> Result<WalkSummary> {
    debug!(
        source = %config.source.display(),
        dest = %config.destination.display(),
        recursive = config.recursive,
        dry_run = config.dry_run,
        "dispatch sort_source"
    );
    if config.recursive {
        walk_recursive(config)
    } else {
        walk_flat(config)
    }
}

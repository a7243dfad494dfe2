//! Application orchestrator.
//! Builds the config, initializes logging, validates the destination and runs
//! the selected walker.

use anyhow::Result;
use tracing::{debug, error, info};

use mv_to_dirs::cli::Args;
use mv_to_dirs::output as out;
use mv_to_dirs::{MoveError, sort_source, validate_destination};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let cfg = args.to_config();

    // Held until return so the file writer flushes.
    let _guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!(log_level = %cfg.log_level, "Starting mv_to_dirs: {:?}", args);

    validate_destination(&cfg.destination)?;

    match sort_source(&cfg) {
        Ok(summary) => {
            info!(
                renamed = summary.renamed,
                copied = summary.copied,
                skipped = summary.skipped,
                planned = summary.planned,
                dry_run = cfg.dry_run,
                "Sorting completed"
            );
            Ok(())
        }
        Err(e) => {
            if let Some(me) = e.downcast_ref::<MoveError>() {
                error!(code = me.code(), error = %me, "Sorting aborted");
            } else {
                error!(error = %format!("{e:#}"), "Sorting aborted");
            }
            Err(e)
        }
    }
}

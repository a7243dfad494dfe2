//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - `-s` and `-d` are required; any argument error exits with status 3.
//! - --debug is a shorthand for --log-level debug.

use clap::error::ErrorKind;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Exit status used when arguments are missing or malformed.
pub const USAGE_EXIT_CODE: i32 = 3;

/// Sort files into `<ext>/<YYYYMMDD>` directories under a destination root.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Move files into <extension>/<YYYYMMDD> directories, never overwriting"
)]
pub struct Args {
    /// Source directory (or single file) to sort.
    #[arg(
        short = 's',
        long = "source",
        value_name = "PATH",
        value_hint = ValueHint::AnyPath,
        help = "Source directory. (Required)"
    )]
    pub source: PathBuf,

    /// Destination root; must already exist.
    #[arg(
        short = 'd',
        long = "dest",
        value_name = "PATH",
        value_hint = ValueHint::DirPath,
        help = "Destination directory. (Required)"
    )]
    pub dest: PathBuf,

    #[arg(short = 'r', long, help = "Scan files recursively")]
    pub recursive: bool,

    /// Dry-run: report moves but do not modify the filesystem.
    #[arg(
        long,
        help = "Show what would be done, but do not modify files/directories"
    )]
    pub dry_run: bool,

    #[arg(long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    #[arg(long, value_name = "LEVEL", help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<LogLevel>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath, help = "Also append logs to this file")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Precedence: --debug > --log-level value > default.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        self.log_level.unwrap_or_default()
    }

    /// Build the run configuration. Done once; the result is never mutated.
    pub fn to_config(&self) -> Config {
        Config {
            source: self.source.clone(),
            destination: self.dest.clone(),
            recursive: self.recursive,
            dry_run: self.dry_run,
            log_level: self.effective_log_level(),
            log_file: self.log_file.clone(),
        }
    }
}

/// Parse the process arguments. Help and version exit 0; every other
/// argument error prints usage and exits with [`USAGE_EXIT_CODE`].
pub fn parse() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(USAGE_EXIT_CODE)
            }
        },
    }
}

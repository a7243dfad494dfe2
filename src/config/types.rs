//! Core configuration types.
//! - Config holds the settings of one run; built once at startup.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Moves, skips and the final summary (default)
    #[default]
    Normal,
    /// Per-file decisions
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Settings for one run. Walkers and the mover only ever borrow it.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Directory (or single file) to sort
    pub source: PathBuf,
    /// Root of the `<ext>/<YYYYMMDD>` tree; must already exist
    pub destination: PathBuf,
    /// Descend into subdirectories of `source`
    pub recursive: bool,
    /// Report what would happen without touching the filesystem
    pub dry_run: bool,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to an additional log file
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Construct a Config with explicit paths; other fields use defaults.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            recursive,
            ..Default::default()
        }
    }
}

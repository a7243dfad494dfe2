//! Core library for `mv_to_dirs`.
//!
//! Sorts regular files into `<destination>/<ext>/<YYYYMMDD>/` without ever
//! overwriting an existing file. The binary is a thin wrapper: parse [`cli::Args`],
//! build a [`Config`], check the destination, then call [`sort_source`].

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;

pub use config::{Config, LogLevel, validate_destination};
pub use errors::MoveError;
pub use fs_ops::{MoveOutcome, WalkSummary, move_file, sort_source};

//! Config module.
//! Provides the run configuration, log levels and destination validation.

pub mod types;
mod validate;

pub use types::{Config, LogLevel};
pub use validate::validate_destination;

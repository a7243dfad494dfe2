//! Filesystem operations: destination resolution, the single-file mover and
//! the directory walkers built on top of it.

mod entry;
mod file_move;
mod helpers;
mod io_copy;
pub mod resolve;
mod util;
mod walk;

pub use entry::sort_source;
pub use file_move::{MoveOutcome, move_file, move_file_with};
pub use helpers::io_error_with_help;
pub use resolve::{date_dir, destination_subdir, extension_dir};
pub use util::RenameFailure;
pub use walk::{WalkSummary, walk_flat, walk_recursive};

//! I/O error helpers.
//!
//! Wraps io::Error with the failed operation, the path involved and a short
//! platform-aware hint. The original io::Error stays reachable as the source
//! of the returned anyhow::Error.
//!
//! Usage:
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create directory", dir))?;

use std::io;
use std::path::Path;

fn hint(e: &io::Error) -> Option<&'static str> {
    #[cfg(unix)]
    if let Some(code) = e.raw_os_error() {
        return match code {
            libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
            libc::ENOENT => Some("path not found; verify it exists"),
            libc::ENOSPC => Some("insufficient space on device"),
            libc::EROFS => Some("read-only filesystem; cannot write here"),
            libc::ENAMETOOLONG => Some("filename or path too long"),
            libc::EMFILE | libc::ENFILE => Some("too many open files"),
            _ => None,
        };
    }
    match e.kind() {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; verify it exists"),
        io::ErrorKind::AlreadyExists => Some("already exists"),
        _ => None,
    }
}

fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    match hint(e) {
        Some(h) => format!("{} '{}' ({})", op, path.display(), h),
        None => format!("{} '{}'", op, path.display()),
    }
}

/// Returns a closure for `.map_err(...)` converting io::Error into an
/// anyhow::Error whose context names `op` and `path`.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| {
        let msg = build_message(op, path, &e);
        anyhow::Error::new(e).context(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_io_error_as_source() {
        let e = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = io_error_with_help("stat", Path::new("/nowhere"))(e);
        let msg = format!("{err:#}");
        assert!(msg.contains("stat '/nowhere'"), "got: {msg}");
        let root = err.root_cause().downcast_ref::<io::Error>().unwrap();
        assert_eq!(root.kind(), io::ErrorKind::NotFound);
    }
}

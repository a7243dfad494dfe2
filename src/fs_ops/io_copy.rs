//! Streaming copy used by the cross-device fallback.
//!
//! - The destination is created with `create_new(true)`; an existing file is
//!   never clobbered.
//! - Buffered I/O with 1 MiB buffers.
//! - Data is synced to disk before returning, since the caller deletes the
//!   source right after.
//! - Both handles live only inside `copy_streaming` and are closed on every
//!   return path.
//! - A destination created here is removed again if the copy fails. Nothing
//!   is removed when the failure happens before the destination was created.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

const BUF_SIZE: usize = 1024 * 1024;

/// Copy `src` -> `dst`, returning the number of bytes written.
pub(super) fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    let src_f = File::open(src)?;
    let dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;

    let res = stream(src_f, dst_f);
    if res.is_err() {
        let _ = fs::remove_file(dst);
    }
    res
}

fn stream(src_f: File, dst_f: File) -> io::Result<u64> {
    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(bytes)
}

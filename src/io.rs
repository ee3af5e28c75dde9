//! File-level decompression: load the source file, run the core, store the
//! result.
//!
//! The core in [`crate::codec`] is a pure function over an in-memory
//! buffer; this module is the thin shim that feeds it from the filesystem:
//!
//! - [`load_compressed_file`] — reads the whole source file, rejecting
//!   anything over the 24-bit size cap before touching its contents.
//! - [`write_decompressed_file`] — creates/truncates the target and writes
//!   the decoded buffer in one shot (binary, no transformation).
//! - [`decompress_filename`] — orchestrates the three stages, emitting one
//!   verbosity-gated status line per stage, and propagates the source
//!   file's modification time to the target on success.
//!
//! All failures are reported as `io::Error`; decode failures carry the
//! [`DecompressError`](crate::codec::DecompressError) message and map to
//! [`io::ErrorKind::InvalidData`].

use std::fs;
use std::io::{self, Write};

use crate::codec::{self, COMPRESSED_FILE_MAX_SIZE};
use crate::config::is_recognized_extension;

// ─────────────────────────────────────────────────────────────────────────────
// Public stats
// ─────────────────────────────────────────────────────────────────────────────

/// Statistics returned by [`decompress_filename`].
#[derive(Debug, Clone, Default)]
pub struct DecompressStats {
    /// Number of decompressed bytes written to the target file.
    pub decompressed_bytes: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Source file
// ─────────────────────────────────────────────────────────────────────────────

/// Reads the entire compressed file into memory.
///
/// The file's on-disk size is checked against
/// [`COMPRESSED_FILE_MAX_SIZE`] before the read, so an oversized file is
/// rejected without buffering 16 MiB of it first.
pub fn load_compressed_file(path: &str) -> io::Result<Vec<u8>> {
    let metadata = fs::metadata(path)?;
    if metadata.len() > COMPRESSED_FILE_MAX_SIZE as u64 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: exceeds the 16 MiB compressed-file limit", path),
        ));
    }
    fs::read(path)
}

// ─────────────────────────────────────────────────────────────────────────────
// Destination file
// ─────────────────────────────────────────────────────────────────────────────

/// Writes the decompressed buffer to `path`, creating or truncating it.
pub fn write_decompressed_file(path: &str, data: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(data)?;
    file.flush()
}

// ─────────────────────────────────────────────────────────────────────────────
// Orchestration
// ─────────────────────────────────────────────────────────────────────────────

/// Decompresses the file at `src_path` into `dst_path`.
///
/// Emits one status line per stage (read, decode, write) on stderr:
/// failures at display level ≥ 1, successes at level ≥ 2.  On success the
/// source file's modification time is copied to the target, best-effort.
///
/// # Errors
///
/// Returns the underlying `io::Error` for read/write failures, or an
/// [`io::ErrorKind::InvalidData`] error wrapping the decode failure.
pub fn decompress_filename(src_path: &str, dst_path: &str) -> io::Result<DecompressStats> {
    if !is_recognized_extension(src_path) {
        crate::displaylevel!(
            4,
            "{}: extension not recognized as a compressed data file; decoding anyway \n",
            src_path
        );
    }

    let compressed = match load_compressed_file(src_path) {
        Ok(data) => data,
        Err(e) => {
            crate::displaylevel!(1, "Could not read {} : {} \n", src_path, e);
            return Err(e);
        }
    };

    let decoded = match codec::decompress(&compressed) {
        Ok(data) => data,
        Err(e) => {
            crate::displaylevel!(1, "Could not decompress {} : {} \n", src_path, e);
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{}: {}", src_path, e),
            ));
        }
    };
    crate::displaylevel!(2, "Decompressed {} \n", src_path);

    if let Err(e) = write_decompressed_file(dst_path, &decoded) {
        crate::displaylevel!(1, "Could not write {} : {} \n", dst_path, e);
        return Err(e);
    }
    crate::displaylevel!(2, "Wrote {} ({} bytes) \n", dst_path, decoded.len());

    // Carry the source mtime over to the decoded file, best-effort.
    if let Ok(metadata) = fs::metadata(src_path) {
        if let Ok(mtime) = metadata.modified() {
            let _ = filetime::set_file_mtime(dst_path, filetime::FileTime::from_system_time(mtime));
        }
    }

    Ok(DecompressStats {
        decompressed_bytes: decoded.len() as u64,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

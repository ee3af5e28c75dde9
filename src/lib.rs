//! `stunpackr` — a pure-Rust decompressor for the data files of the MS-DOS
//! driving game Stunts / 4D Sports Driving (Distinctive Software, 1990).
//!
//! The game ships most of its data (`.cmn`, `.cod`, `.dif`, `.p3s`,
//! `.pes`, `.pre`, `.pvs`) in a self-describing compressed container that
//! chains run-length (RLE) and canonical variable-length (VLE) passes.
//! This crate decodes that container bit-exactly; it does not re-compress.
//!
//! # Crate layout
//!
//! | Module   | Contents |
//! |----------|----------|
//! | `codec`  | Container parsing, pass chaining, and the RLE / VLE decoder engines. |
//! | `io`     | File-level I/O: load a compressed file, decode, store the result. |
//! | `cli`    | Command-line argument parsing, help text, verbosity plumbing. |
//! | `config` | Compile-time configuration constants. |
//!
//! # Quick start
//!
//! ```
//! // A minimal single-pass RLE container: three literal zero bytes.
//! let container = [0x01, 0x03, 0x00, 0x00, 0, 0, 0, 0, 0x80, 0x00, 0x00, 0x00];
//! let decoded = stunpack::decompress(&container).unwrap();
//! assert_eq!(decoded, [0, 0, 0]);
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod io;

// ── Version constants ─────────────────────────────────────────────────────────
pub const STUNPACK_VERSION_MAJOR: u32 = 1;
pub const STUNPACK_VERSION_MINOR: u32 = 0;
pub const STUNPACK_VERSION_RELEASE: u32 = 0;
pub const STUNPACK_VERSION_NUMBER: u32 =
    STUNPACK_VERSION_MAJOR * 100 * 100 + STUNPACK_VERSION_MINOR * 100 + STUNPACK_VERSION_RELEASE;

/// Returns the runtime version number.
pub fn version_number() -> u32 {
    STUNPACK_VERSION_NUMBER
}

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use codec::{decompress, DecompressError, COMPRESSED_FILE_MAX_SIZE};
pub use io::{decompress_filename, DecompressStats};

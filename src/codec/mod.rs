//! Container parsing and decompression core.
//!
//! A compressed file is a chain of one or more passes.  Byte 0 of the
//! container selects the form: when its high bit is set, the low 7 bits
//! carry the pass count and bytes 1–3 are reserved; otherwise the file is a
//! single pass and byte 0 is already that pass's algorithm tag.  Each pass
//! then starts with a 1-byte algorithm tag (0x01 RLE, 0x02 VLE) and a
//! 3-byte little-endian decompressed length, and the output of each pass is
//! the compressed stream of the next.
//!
//! # Security boundary
//!
//! This module and its submodules are the untrusted-input parsing path.
//! Every read and write is bounds-checked; malformed or truncated input
//! must surface as a [`DecompressError`] — never a panic, never a partial
//! result.  The core performs no I/O and holds no global state: a decode is
//! a pure function of its input bytes, so independent decodes may run on
//! separate threads with no coordination.

use core::fmt;

pub mod rle;
pub mod types;
pub mod vle;

use types::{InputCursor, OutputBuffer};

// ─────────────────────────────────────────────────────────────────────────────
// Container constants
// ─────────────────────────────────────────────────────────────────────────────

/// Maximum size of a compressed file: lengths are 24-bit throughout.
pub const COMPRESSED_FILE_MAX_SIZE: usize = 0xFF_FFFF;

/// High bit of byte 0: the container declares an explicit pass count.
const MULTIPLE_PASSES_FLAG: u8 = 0x80;
/// Bits of byte 0 holding the pass count in the multi-pass form.
const PASS_COUNT_MASK: u8 = 0x7F;
/// Size of the multi-pass container header (count byte + 3 reserved).
const CONTAINER_HEADER_SIZE: usize = 4;

/// Algorithm tag: run-length encoding.
const COMPRESSION_TYPE_RLE: u8 = 0x01;
/// Algorithm tag: variable-length (prefix-code) encoding.
const COMPRESSION_TYPE_VLE: u8 = 0x02;

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by container decompression.
///
/// Every kind is fatal to the whole `decompress` call; nothing is retried
/// and no partial output is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// The compressed input exceeds the 24-bit length cap.
    InputTooLarge,
    /// A read would pass the end of the input at a point where more data
    /// is structurally required.
    Truncated,
    /// A write would pass the declared output length of the current pass.
    OverflowOutput,
    /// The input ran dry between codes while the output was still short of
    /// its declared length.
    UnderflowOutput,
    /// A multi-pass header declaring zero passes.
    BadPassCount,
    /// A per-pass algorithm tag that is neither RLE (0x01) nor VLE (0x02).
    BadAlgorithmTag(u8),
    /// An RLE escape declaration that is out of range or inconsistent.
    BadRleEscapeTable,
    /// A VLE header whose flags, width count, alphabet length, or width
    /// distribution are invalid.
    BadVleHeader,
    /// A VLE code that cannot be resolved: the escape loop ran out of
    /// slots, the decoded index left the alphabet, or a width is
    /// unsupported.
    BadVleCode,
    /// An output or intermediate buffer could not be allocated.
    AllocationFailed,
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompressError::InputTooLarge => {
                write!(f, "compressed input exceeds the 16 MiB format limit")
            }
            DecompressError::Truncated => write!(f, "compressed input is truncated"),
            DecompressError::OverflowOutput => {
                write!(f, "decoded data exceeds the declared output length")
            }
            DecompressError::UnderflowOutput => {
                write!(f, "compressed stream ended before the declared output length")
            }
            DecompressError::BadPassCount => write!(f, "container declares zero passes"),
            DecompressError::BadAlgorithmTag(tag) => {
                write!(f, "unknown compression type 0x{:02X}", tag)
            }
            DecompressError::BadRleEscapeTable => write!(f, "invalid RLE escape table"),
            DecompressError::BadVleHeader => write!(f, "invalid VLE header"),
            DecompressError::BadVleCode => write!(f, "undecodable VLE code"),
            DecompressError::AllocationFailed => write!(f, "output buffer allocation failed"),
        }
    }
}

impl std::error::Error for DecompressError {}

// ─────────────────────────────────────────────────────────────────────────────
// Pass driver
// ─────────────────────────────────────────────────────────────────────────────

/// Decompresses a complete container.
///
/// On success the returned buffer's length equals the last pass's declared
/// decompressed length and has been filled exactly.
///
/// # Errors
///
/// Any structural defect, bounds violation, or allocation failure aborts
/// the whole decompression; see [`DecompressError`] for the taxonomy.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, DecompressError> {
    if input.len() > COMPRESSED_FILE_MAX_SIZE {
        return Err(DecompressError::InputTooLarge);
    }

    let first = *input.first().ok_or(DecompressError::Truncated)?;
    let (pass_count, header_skip) = if first & MULTIPLE_PASSES_FLAG != 0 {
        (first & PASS_COUNT_MASK, CONTAINER_HEADER_SIZE)
    } else {
        // Single-pass form: byte 0 is the sole pass's algorithm tag.
        (1, 0)
    };
    if pass_count == 0 {
        return Err(DecompressError::BadPassCount);
    }

    let mut output = run_pass(input, header_skip)?;
    for _ in 1..pass_count {
        // The buffer a pass produced is the next pass's compressed stream;
        // ownership moves, nothing is copied.
        output = run_pass(&output, 0)?;
    }
    Ok(output)
}

/// Runs one pass: algorithm tag, 3-byte length, engine dispatch.
fn run_pass(data: &[u8], header_skip: usize) -> Result<Vec<u8>, DecompressError> {
    let mut src = InputCursor::new(data);
    src.skip(header_skip)?;

    let tag = src.read_u8()?;
    let sub_file_size = src.read_u24_le()? as usize;
    let mut out = OutputBuffer::with_target(sub_file_size)?;

    match tag {
        COMPRESSION_TYPE_RLE => rle::decompress(&mut src, &mut out)?,
        COMPRESSION_TYPE_VLE => vle::decompress(&mut src, &mut out)?,
        other => return Err(DecompressError::BadAlgorithmTag(other)),
    }

    debug_assert!(out.is_full());
    Ok(out.into_vec())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

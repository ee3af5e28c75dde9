//! RLE pass decoder.
//!
//! An RLE pass starts with 4 reserved bytes, then an `escape_length` byte:
//! the low 7 bits count the escape codes that follow (at most 10), and the
//! high bit, when set, disables the sequence-run pre-pass.  Each escape byte
//! is entered into a 256-entry lookup table mapping the byte value to its
//! 1-based escape index; every other byte value maps to 0 and decodes as a
//! literal.
//!
//! Decoding runs in up to two phases:
//!
//! 1. **Sequence runs** (only when the high bit of `escape_length` is
//!    clear): the *second* escape byte acts as a bracket delimiting a byte
//!    sequence followed by a repetition count.  The expanded stream lands in
//!    an intermediate buffer.
//! 2. **Single-byte runs**: escape indices select a run encoding — index 1
//!    is a short run (1-byte length), index 3 a long run (2-byte
//!    little-endian length), and any other index is an implicit run of
//!    `index − 1` bytes.  The run value byte follows the length in all
//!    three forms.

use super::types::{InputCursor, OutputBuffer};
use super::DecompressError;

/// Bits of `escape_length` holding the escape-code count.
const ESCAPE_LENGTH_MASK: u8 = 0x7F;
/// High bit of `escape_length`: decode single-byte runs only.
const NO_SEQUENCE_RUNS_FLAG: u8 = 0x80;
/// Hard cap on the number of escape codes a pass may declare.
const MAX_ESCAPE_CODES: usize = 10;
/// Zero-based position of the escape code reused as the sequence bracket.
const BRACKET_INDEX: usize = 1;
/// Reserved bytes between the pass header and `escape_length`.
const RESERVED_HEADER_BYTES: usize = 4;

// ─────────────────────────────────────────────────────────────────────────────
// Escape table
// ─────────────────────────────────────────────────────────────────────────────

/// Parsed escape declaration of one RLE pass.
#[derive(Debug, PartialEq)]
struct EscapeTable {
    /// Byte value → 1-based escape index, 0 for literals.
    lookup: [u8; 256],
    /// The declared escape codes, in declaration order.
    codes: [u8; MAX_ESCAPE_CODES],
    /// When set, only the single-byte-run phase runs.
    single_byte_only: bool,
}

impl EscapeTable {
    fn parse(src: &mut InputCursor<'_>) -> Result<Self, DecompressError> {
        let escape_length = src.read_u8()?;
        let count = usize::from(escape_length & ESCAPE_LENGTH_MASK);
        if count > MAX_ESCAPE_CODES {
            return Err(DecompressError::BadRleEscapeTable);
        }
        let single_byte_only = escape_length & NO_SEQUENCE_RUNS_FLAG != 0;
        // The sequence-run phase reads its bracket from the second escape
        // code, so at least two must have been declared.
        if !single_byte_only && count < 2 {
            return Err(DecompressError::BadRleEscapeTable);
        }

        let mut codes = [0u8; MAX_ESCAPE_CODES];
        for code in codes.iter_mut().take(count) {
            *code = src.read_u8()?;
        }

        let mut lookup = [0u8; 256];
        for (index, &code) in codes.iter().take(count).enumerate() {
            // On duplicate escape bytes the later declaration wins.
            lookup[usize::from(code)] = (index + 1) as u8;
        }

        Ok(EscapeTable {
            lookup,
            codes,
            single_byte_only,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pass entry point
// ─────────────────────────────────────────────────────────────────────────────

/// Decodes one RLE pass from `src` into `out`.
pub(crate) fn decompress(
    src: &mut InputCursor<'_>,
    out: &mut OutputBuffer,
) -> Result<(), DecompressError> {
    src.skip(RESERVED_HEADER_BYTES)?;
    let table = EscapeTable::parse(src)?;

    if table.single_byte_only {
        return decode_single_byte_runs(src, out, &table.lookup);
    }

    // Sequence runs expand into an intermediate buffer sized like the final
    // output; whatever it produced becomes the single-byte phase's input.
    let mut intermediate = OutputBuffer::with_target(out.target())?;
    decode_sequence_runs(src, &mut intermediate, table.codes[BRACKET_INDEX])?;
    let expanded = intermediate.into_vec();
    let mut mid = InputCursor::new(&expanded);
    decode_single_byte_runs(&mut mid, out, &table.lookup)
}

// ─────────────────────────────────────────────────────────────────────────────
// Phase 1: sequence runs
// ─────────────────────────────────────────────────────────────────────────────

/// Expands bracketed sequence runs, copying everything else through.
///
/// The phase is input-driven: it ends when `src` is exhausted, and the
/// number of bytes it produced is simply the write position of `out`.
fn decode_sequence_runs(
    src: &mut InputCursor<'_>,
    out: &mut OutputBuffer,
    bracket: u8,
) -> Result<(), DecompressError> {
    while !src.is_exhausted() {
        let byte = src.read_u8()?;
        if byte != bracket {
            out.push(byte)?;
            continue;
        }

        // Everything between this bracket and the next is the repeatable
        // unit; it is emitted once while being scanned.
        let seq_start = src.position();
        loop {
            let inner = src.read_u8()?;
            if inner == bracket {
                break;
            }
            out.push(inner)?;
        }
        let repetitions = src.read_u8()?;

        // Cursor sits just past the repetition byte: the unit spans from
        // seq_start up to (but not including) the closing bracket.
        let seq_len = src.position() - seq_start - 2;
        let sequence = src.slice_at(seq_start, seq_len)?;
        // A count of 0 re-emits nothing, same as a count of 1.
        for _ in 0..repetitions.saturating_sub(1) {
            out.push_slice(sequence)?;
        }
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Phase 2: single-byte runs
// ─────────────────────────────────────────────────────────────────────────────

/// Decodes literals and single-byte runs until `out` reaches its target.
fn decode_single_byte_runs(
    src: &mut InputCursor<'_>,
    out: &mut OutputBuffer,
    lookup: &[u8; 256],
) -> Result<(), DecompressError> {
    while !out.is_full() {
        if src.is_exhausted() {
            return Err(DecompressError::UnderflowOutput);
        }
        let byte = src.read_u8()?;
        // A zero lookup entry means literal; any nonzero entry is the
        // 1-based escape index and dispatches on the run encoding.
        match lookup[usize::from(byte)] {
            0 => out.push(byte)?,
            1 => {
                let len = usize::from(src.read_u8()?);
                let value = src.read_u8()?;
                out.push_run(value, len)?;
            }
            3 => {
                let len = usize::from(src.read_u16_le()?);
                let value = src.read_u8()?;
                out.push_run(value, len)?;
            }
            index => {
                let value = src.read_u8()?;
                out.push_run(value, usize::from(index) - 1)?;
            }
        }
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

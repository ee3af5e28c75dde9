//! Buffer primitives shared by the pass driver and both decoder engines.
//!
//! The container format is decoded with two distinct buffer roles:
//!
//! - [`InputCursor`] — an immutable byte view plus a read position.  All
//!   header fields and compressed payloads are pulled through its checked
//!   read methods; a read past the end of the view is a hard
//!   [`DecompressError::Truncated`] error, never a panic.
//! - [`OutputBuffer`] — an owned, append-only byte buffer whose target
//!   length is fixed up front by the per-pass header.  Every write is
//!   checked against the target; exceeding it is
//!   [`DecompressError::OverflowOutput`].
//!
//! Keeping the roles separate means "position" always has exactly one
//! meaning per type: read cursor on the input side, write cursor on the
//! output side.

use super::DecompressError;

// ─────────────────────────────────────────────────────────────────────────────
// InputCursor
// ─────────────────────────────────────────────────────────────────────────────

/// A checked read cursor over an immutable byte slice.
#[derive(Debug)]
pub struct InputCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> InputCursor<'a> {
    /// Creates a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        InputCursor { data, pos: 0 }
    }

    /// Current read position in bytes from the start of the view.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// `true` when every byte of the view has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Reads one byte and advances the cursor.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, DecompressError> {
        let byte = *self
            .data
            .get(self.pos)
            .ok_or(DecompressError::Truncated)?;
        self.pos += 1;
        Ok(byte)
    }

    /// Reads a little-endian `u16` and advances the cursor by 2.
    #[inline]
    pub fn read_u16_le(&mut self) -> Result<u16, DecompressError> {
        let lo = self.read_u8()?;
        let hi = self.read_u8()?;
        Ok(u16::from(lo) | (u16::from(hi) << 8))
    }

    /// Reads a 24-bit little-endian length field and advances the cursor by 3.
    #[inline]
    pub fn read_u24_le(&mut self) -> Result<u32, DecompressError> {
        let b0 = self.read_u8()?;
        let b1 = self.read_u8()?;
        let b2 = self.read_u8()?;
        Ok(u32::from(b0) | (u32::from(b1) << 8) | (u32::from(b2) << 16))
    }

    /// Advances the cursor by `n` bytes without inspecting them.
    pub fn skip(&mut self, n: usize) -> Result<(), DecompressError> {
        if self.remaining() < n {
            return Err(DecompressError::Truncated);
        }
        self.pos += n;
        Ok(())
    }

    /// Borrows `len` bytes starting at absolute offset `start`.
    ///
    /// Used by the RLE sequence-run phase to re-emit a span that the cursor
    /// has already walked over.  The borrow is tied to the underlying view,
    /// not to the cursor, so the cursor may keep advancing.
    pub fn slice_at(&self, start: usize, len: usize) -> Result<&'a [u8], DecompressError> {
        self.data
            .get(start..start + len)
            .ok_or(DecompressError::Truncated)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// OutputBuffer
// ─────────────────────────────────────────────────────────────────────────────

/// An owned output buffer with a fixed target length and a write cursor.
///
/// The write cursor is implicit: it is the current length of the inner
/// vector.  A pass is complete exactly when [`OutputBuffer::is_full`]
/// becomes `true`.
#[derive(Debug)]
pub struct OutputBuffer {
    buf: Vec<u8>,
    target: usize,
}

impl OutputBuffer {
    /// Allocates a buffer that will hold exactly `target` bytes.
    ///
    /// The allocation is made up front through `try_reserve_exact` so that
    /// an unsatisfiable `sub_file_size` surfaces as
    /// [`DecompressError::AllocationFailed`] instead of aborting the
    /// process.
    pub fn with_target(target: usize) -> Result<Self, DecompressError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(target)
            .map_err(|_| DecompressError::AllocationFailed)?;
        Ok(OutputBuffer { buf, target })
    }

    /// Declared target length of this pass.
    #[inline]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn written(&self) -> usize {
        self.buf.len()
    }

    /// Remaining capacity before the target length is reached.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.target - self.buf.len()
    }

    /// `true` once the write cursor has reached the target length.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.buf.len() >= self.target
    }

    /// Appends a single byte.
    #[inline]
    pub fn push(&mut self, byte: u8) -> Result<(), DecompressError> {
        if self.is_full() {
            return Err(DecompressError::OverflowOutput);
        }
        self.buf.push(byte);
        Ok(())
    }

    /// Appends `len` copies of `value` (a decoded run).
    pub fn push_run(&mut self, value: u8, len: usize) -> Result<(), DecompressError> {
        if len > self.remaining() {
            return Err(DecompressError::OverflowOutput);
        }
        self.buf.resize(self.buf.len() + len, value);
        Ok(())
    }

    /// Appends a previously decoded span verbatim.
    pub fn push_slice(&mut self, bytes: &[u8]) -> Result<(), DecompressError> {
        if bytes.len() > self.remaining() {
            return Err(DecompressError::OverflowOutput);
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Consumes the buffer, yielding the written bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

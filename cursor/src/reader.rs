//! Byte reader with bounded operations.

use crate::error::{CursorError, CursorResult};

/// A little-endian reader for decoding untrusted bytes.
///
/// All reads are bounds-checked and return errors on failure. A failed read
/// leaves the position exactly where it was.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` positioned at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current read position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Moves the read position, clamped to the end of the data.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.data.len());
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Reads a boolean byte. Any nonzero value decodes to `true`.
    pub fn read_bool(&mut self) -> CursorResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> CursorResult<u8> {
        let [value] = self.read_array::<1>()?;
        Ok(value)
    }

    /// Reads a `u16` (little-endian).
    pub fn read_u16(&mut self) -> CursorResult<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    /// Reads a `u32` (little-endian).
    pub fn read_u32(&mut self) -> CursorResult<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Reads a `u64` (little-endian).
    pub fn read_u64(&mut self) -> CursorResult<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    /// Reads an `f32` from its raw bit pattern.
    pub fn read_f32(&mut self) -> CursorResult<f32> {
        self.read_u32().map(f32::from_bits)
    }

    /// Reads an `f64` from its raw bit pattern.
    pub fn read_f64(&mut self) -> CursorResult<f64> {
        self.read_u64().map(f64::from_bits)
    }

    /// Reads a `u32` length-prefixed UTF-8 string.
    ///
    /// The declared length is checked against `max_len` and the remaining
    /// bytes before anything is allocated.
    pub fn read_string(&mut self, max_len: u32) -> CursorResult<String> {
        let start = self.pos;
        let result = self.read_string_body(max_len);
        if result.is_err() {
            self.pos = start;
        }
        result
    }

    fn read_string_body(&mut self, max_len: u32) -> CursorResult<String> {
        let length = self.read_u32()?;
        if length > max_len {
            return Err(CursorError::StringTooLong {
                length,
                max: max_len,
            });
        }
        let bytes = self.read_bytes(usize::try_from(length).unwrap_or(usize::MAX))?;
        let value = std::str::from_utf8(bytes).map_err(|_| CursorError::InvalidUtf8 {
            length: bytes.len(),
        })?;
        Ok(value.to_owned())
    }

    /// Reads `count` raw bytes, borrowing them from the underlying buffer.
    pub fn read_bytes(&mut self, count: usize) -> CursorResult<&'a [u8]> {
        self.ensure(count)?;
        let start = self.pos;
        self.pos += count;
        Ok(&self.data[start..self.pos])
    }

    /// Reads exactly `N` raw bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> CursorResult<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    fn ensure(&self, count: usize) -> CursorResult<()> {
        let available = self.remaining();
        if count > available {
            return Err(CursorError::UnexpectedEof {
                requested: count,
                available,
            });
        }
        Ok(())
    }
}

//! Byte writer over a caller-owned buffer.

/// A little-endian writer over a fixed, caller-owned byte buffer.
///
/// Buffers are sized up front by the caller, so running out of room is a
/// programming error rather than a property of the input: every write that
/// does not fit panics instead of truncating. The position is plain state
/// and may be inspected or moved with [`set_position`](Self::set_position).
#[derive(Debug)]
pub struct ByteWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> ByteWriter<'a> {
    /// Creates a writer positioned at the start of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Creates a writer positioned at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past the end of `buf`.
    pub fn at(buf: &'a mut [u8], pos: usize) -> Self {
        assert!(
            pos <= buf.len(),
            "writer position {pos} past end of {}-byte buffer",
            buf.len()
        );
        Self { buf, pos }
    }

    /// Returns the current write position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Moves the write position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past the end of the buffer.
    pub fn set_position(&mut self, pos: usize) {
        assert!(
            pos <= self.buf.len(),
            "writer position {pos} past end of {}-byte buffer",
            self.buf.len()
        );
        self.pos = pos;
    }

    /// Returns the total size of the underlying buffer.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of bytes left after the current position.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Writes a boolean as a single `0` or `1` byte.
    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(u8::from(value));
    }

    /// Writes a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.claim(1)[0] = value;
    }

    /// Writes a `u16` (little-endian).
    pub fn write_u16(&mut self, value: u16) {
        self.claim(2).copy_from_slice(&value.to_le_bytes());
    }

    /// Writes a `u32` (little-endian).
    pub fn write_u32(&mut self, value: u32) {
        self.claim(4).copy_from_slice(&value.to_le_bytes());
    }

    /// Writes a `u64` (little-endian).
    pub fn write_u64(&mut self, value: u64) {
        self.claim(8).copy_from_slice(&value.to_le_bytes());
    }

    /// Writes an `f32` as its raw IEEE-754 bit pattern.
    pub fn write_f32(&mut self, value: f32) {
        self.write_u32(value.to_bits());
    }

    /// Writes an `f64` as its raw IEEE-754 bit pattern.
    pub fn write_f64(&mut self, value: f64) {
        self.write_u64(value.to_bits());
    }

    /// Writes a string as a `u32` length prefix followed by its UTF-8 bytes.
    ///
    /// # Panics
    ///
    /// Panics if the string is longer than `max_len` bytes or does not fit
    /// in the remaining buffer.
    pub fn write_string(&mut self, value: &str, max_len: u32) {
        let len = u32::try_from(value.len()).ok().filter(|len| *len <= max_len);
        let Some(len) = len else {
            panic!(
                "string of {} bytes exceeds maximum of {max_len}",
                value.len()
            );
        };
        // Check the whole string up front so a panic leaves no prefix behind.
        self.ensure(4 + value.len());
        self.write_u32(len);
        self.write_bytes(value.as_bytes());
    }

    /// Copies `bytes` verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.claim(bytes.len()).copy_from_slice(bytes);
    }

    /// Returns the number of bytes written, consuming the writer.
    #[must_use]
    pub const fn finish(self) -> usize {
        self.pos
    }

    fn ensure(&self, len: usize) {
        let available = self.remaining();
        assert!(
            len <= available,
            "attempted to write {len} bytes but only {available} bytes remain"
        );
    }

    fn claim(&mut self, len: usize) -> &mut [u8] {
        self.ensure(len);
        let start = self.pos;
        self.pos += len;
        &mut self.buf[start..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_writer() {
        let mut buf = [0u8; 0];
        let writer = ByteWriter::new(&mut buf);
        assert_eq!(writer.remaining(), 0);
        assert_eq!(writer.finish(), 0);
    }

    #[test]
    fn write_scalars_little_endian() {
        let mut buf = [0u8; 15];
        let mut writer = ByteWriter::new(&mut buf);
        writer.write_u8(0xAB);
        writer.write_u16(0x1234);
        writer.write_u32(0xDEAD_BEEF);
        writer.write_u64(0x0102_0304_0506_0708);
        assert_eq!(writer.finish(), 15);
        assert_eq!(
            buf,
            [
                0xAB, 0x34, 0x12, 0xEF, 0xBE, 0xAD, 0xDE, 0x08, 0x07, 0x06, 0x05, 0x04, 0x03,
                0x02, 0x01
            ]
        );
    }

    #[test]
    fn write_bool_is_canonical() {
        let mut buf = [0xFFu8; 2];
        let mut writer = ByteWriter::new(&mut buf);
        writer.write_bool(true);
        writer.write_bool(false);
        assert_eq!(buf, [1, 0]);
    }

    #[test]
    fn write_float_bits() {
        let mut buf = [0u8; 12];
        let mut writer = ByteWriter::new(&mut buf);
        writer.write_f32(1.0);
        writer.write_f64(-2.0);
        assert_eq!(&buf[0..4], &0x3F80_0000u32.to_le_bytes());
        assert_eq!(&buf[4..12], &0xC000_0000_0000_0000u64.to_le_bytes());
    }

    #[test]
    fn write_string_prefix() {
        let mut buf = [0u8; 9];
        let mut writer = ByteWriter::new(&mut buf);
        writer.write_string("hello", 16);
        assert_eq!(writer.position(), 9);
        assert_eq!(buf, [5, 0, 0, 0, b'h', b'e', b'l', b'l', b'o']);
    }

    #[test]
    fn write_string_at_max_len() {
        let mut buf = [0u8; 7];
        let mut writer = ByteWriter::new(&mut buf);
        writer.write_string("abc", 3);
        assert_eq!(writer.finish(), 7);
    }

    #[test]
    #[should_panic(expected = "exceeds maximum")]
    fn write_string_over_max_panics() {
        let mut buf = [0u8; 64];
        let mut writer = ByteWriter::new(&mut buf);
        writer.write_string("too long", 4);
    }

    #[test]
    #[should_panic(expected = "only 3 bytes remain")]
    fn write_past_end_panics() {
        let mut buf = [0u8; 3];
        let mut writer = ByteWriter::new(&mut buf);
        writer.write_u32(7);
    }

    #[test]
    fn write_bytes_verbatim() {
        let mut buf = [0u8; 4];
        let mut writer = ByteWriter::new(&mut buf);
        writer.write_bytes(&[9, 8, 7]);
        assert_eq!(writer.remaining(), 1);
        assert_eq!(buf, [9, 8, 7, 0]);
    }

    #[test]
    fn set_position_rewinds() {
        let mut buf = [0u8; 4];
        let mut writer = ByteWriter::new(&mut buf);
        writer.write_u16(0xFFFF);
        writer.set_position(1);
        writer.write_u8(0x11);
        assert_eq!(writer.position(), 2);
        assert_eq!(buf, [0xFF, 0x11, 0, 0]);
    }

    #[test]
    fn at_starts_mid_buffer() {
        let mut buf = [0u8; 4];
        let mut writer = ByteWriter::at(&mut buf, 2);
        writer.write_u16(0x0201);
        assert_eq!(writer.capacity(), 4);
        assert_eq!(buf, [0, 0, 1, 2]);
    }
}

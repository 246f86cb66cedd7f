//! Little-endian byte cursor primitives for the udpx wire protocol.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for fixed-width and
//! length-prefixed encoding over caller-owned buffers. The position travels
//! with the cursor and can be inspected or reset at any time.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Writes trust the caller** - Buffers are sized up front; overflowing one panics.
//! - **Reads never trust the input** - Every read is bounds-checked and a failed
//!   read leaves the position untouched.
//! - **No domain knowledge** - This crate knows nothing about addresses or packets.
//!
//! # Example
//!
//! ```
//! use cursor::{ByteReader, ByteWriter};
//!
//! let mut buf = [0u8; 16];
//! let mut writer = ByteWriter::new(&mut buf);
//! writer.write_bool(true);
//! writer.write_u32(40_000);
//! writer.write_string("relay", 32);
//! let len = writer.finish();
//!
//! let mut reader = ByteReader::new(&buf[..len]);
//! assert!(reader.read_bool().unwrap());
//! assert_eq!(reader.read_u32().unwrap(), 40_000);
//! assert_eq!(reader.read_string(32).unwrap(), "relay");
//! ```

mod error;
mod reader;
mod writer;

pub use error::{CursorError, CursorResult};
pub use reader::ByteReader;
pub use writer::ByteWriter;

//! Error types for byte cursor reads.

use std::fmt;

/// Result type for cursor read operations.
pub type CursorResult<T> = Result<T, CursorError>;

/// Errors that can occur while decoding untrusted bytes.
///
/// Writes never produce these: a write that does not fit is a caller bug
/// and panics instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// Attempted to read past the end of the buffer.
    UnexpectedEof {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A length-prefixed string declared more bytes than the caller allows.
    StringTooLong {
        /// Length declared by the prefix.
        length: u32,
        /// Maximum accepted length.
        max: u32,
    },

    /// A length-prefixed string was not valid UTF-8.
    InvalidUtf8 {
        /// Length of the rejected string payload.
        length: usize,
    },
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::StringTooLong { length, max } => {
                write!(f, "string length {length} exceeds maximum of {max}")
            }
            Self::InvalidUtf8 { length } => {
                write!(f, "string of {length} bytes is not valid utf-8")
            }
        }
    }
}

impl std::error::Error for CursorError {}

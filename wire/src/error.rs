//! Error types for wire helpers.
//!
//! Packet filters deliberately have no error type: they answer accept or
//! reject and nothing else.

use std::fmt;

/// Human-readable address text that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressParseError {
    input: String,
}

impl AddressParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for AddressParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid address: {:?}", self.input)
    }
}

impl std::error::Error for AddressParseError {}

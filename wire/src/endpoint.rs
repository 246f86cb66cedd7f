//! Raw address bytes used as tag input.

use crate::address::Address;

/// The address bytes and port that feed Pittle and Chonkle.
///
/// IPv4 contributes its 4 octets. IPv6 contributes its 8 segments, each
/// high byte first. No address contributes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddressData {
    bytes: [u8; 16],
    len: usize,
    port: u16,
}

impl AddressData {
    /// Extracts tag input from an address.
    #[must_use]
    pub fn from_address(address: &Address) -> Self {
        let mut data = Self {
            port: address.port(),
            ..Self::default()
        };
        match address.canonical() {
            Address::None => {}
            Address::V4(addr) => {
                data.bytes[..4].copy_from_slice(&addr.ip().octets());
                data.len = 4;
            }
            Address::V6(addr) => {
                for (i, segment) in addr.ip().segments().iter().enumerate() {
                    data.bytes[i * 2..i * 2 + 2].copy_from_slice(&segment.to_be_bytes());
                }
                data.len = 16;
            }
        }
        data
    }

    /// Returns the raw address bytes (0, 4 or 16 of them).
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Returns the port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }
}

impl From<&Address> for AddressData {
    fn from(address: &Address) -> Self {
        Self::from_address(address)
    }
}

//! Tag helpers keyed by a pair of addresses.

use crate::address::Address;
use crate::endpoint::AddressData;
use crate::filter::advanced_packet_filter;
use crate::packet::stamp_packet;
use crate::tags::{chonkle, pittle, CHONKLE_BYTES, PITTLE_BYTES};

/// The `(from, to)` endpoint pair a packet travels along.
///
/// Extracts the raw tag input once so a relay can stamp or check many
/// packets on the same route without re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    from: AddressData,
    to: AddressData,
}

impl Route {
    /// Creates a route from sender and receiver addresses.
    #[must_use]
    pub fn new(from: &Address, to: &Address) -> Self {
        Self {
            from: AddressData::from_address(from),
            to: AddressData::from_address(to),
        }
    }

    /// Returns the sender's tag input.
    #[must_use]
    pub const fn sender(&self) -> &AddressData {
        &self.from
    }

    /// Returns the receiver's tag input.
    #[must_use]
    pub const fn receiver(&self) -> &AddressData {
        &self.to
    }

    /// Computes Pittle for a packet of `packet_len` bytes on this route.
    #[must_use]
    pub fn pittle(&self, packet_len: u32) -> [u8; PITTLE_BYTES] {
        pittle(
            self.from.bytes(),
            self.from.port(),
            self.to.bytes(),
            self.to.port(),
            packet_len,
        )
    }

    /// Computes Chonkle for a packet of `packet_len` bytes on this route.
    #[must_use]
    pub fn chonkle(&self, magic: &[u8], packet_len: u32) -> [u8; CHONKLE_BYTES] {
        chonkle(
            magic,
            self.from.bytes(),
            self.from.port(),
            self.to.bytes(),
            self.to.port(),
            packet_len,
        )
    }

    /// Stamps both tags onto `packet`. See [`stamp_packet`].
    pub fn stamp(&self, magic: &[u8], packet: &mut [u8]) {
        stamp_packet(
            packet,
            magic,
            self.from.bytes(),
            self.from.port(),
            self.to.bytes(),
            self.to.port(),
        );
    }

    /// Runs the advanced filter for this route.
    #[must_use]
    pub fn accepts(&self, magic: &[u8], packet: &[u8]) -> bool {
        advanced_packet_filter(
            packet,
            magic,
            self.from.bytes(),
            self.from.port(),
            self.to.bytes(),
            self.to.port(),
        )
    }

    /// Returns the route in the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

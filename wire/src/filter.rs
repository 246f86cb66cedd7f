//! Packet admission filters.
//!
//! The basic filter needs no secret: it checks that the header bytes sit in
//! the ranges Chonkle's construction can produce. The advanced filter
//! recomputes both tags for the claimed route and compares them byte for
//! byte. Run basic first; it is much cheaper.

use crate::packet::{CHONKLE_OFFSET, MIN_PACKET_BYTES, PAYLOAD_OFFSET};
use crate::tags::{chonkle, pittle, PITTLE_BYTES};

/// What a single header byte is allowed to hold.
#[derive(Debug, Clone, Copy)]
enum ByteRule {
    Any,
    Range(u8, u8),
    OneOf(&'static [u8]),
}

impl ByteRule {
    fn allows(self, value: u8) -> bool {
        match self {
            Self::Any => true,
            Self::Range(lo, hi) => (lo..=hi).contains(&value),
            Self::OneOf(set) => set.contains(&value),
        }
    }
}

/// Rules for bytes `[0, 16)`: the type byte, then one rule per Chonkle byte.
const HEADER_RULES: [ByteRule; PAYLOAD_OFFSET] = [
    ByteRule::Range(0x01, 0x63),
    ByteRule::Range(0x2A, 0x2D),
    ByteRule::Range(0xC8, 0xE7),
    ByteRule::Range(0x05, 0x44),
    ByteRule::Any,
    ByteRule::Range(0x4E, 0x51),
    ByteRule::Range(0x60, 0xDF),
    ByteRule::Range(0x64, 0xE3),
    ByteRule::OneOf(&[0x07, 0x4F]),
    ByteRule::OneOf(&[0x25, 0x53]),
    ByteRule::Range(0x7C, 0x83),
    ByteRule::Range(0xAF, 0xB6),
    ByteRule::Range(0x21, 0x60),
    ByteRule::OneOf(&[0x61, 0x05, 0x2B, 0x0D]),
    ByteRule::Range(0xD2, 0xF1),
    ByteRule::Range(0x11, 0x90),
];

/// Cheap structural check on a received packet. Needs no keys.
///
/// Necessary but not sufficient: anything that passes must still go
/// through [`advanced_packet_filter`].
#[must_use]
pub fn basic_packet_filter(packet: &[u8]) -> bool {
    if packet.len() < MIN_PACKET_BYTES {
        tracing::trace!(len = packet.len(), "basic filter: packet too small");
        return false;
    }

    for (index, (rule, &value)) in HEADER_RULES.iter().zip(packet).enumerate() {
        if !rule.allows(value) {
            tracing::trace!(index, value, "basic filter: header byte out of range");
            return false;
        }
    }
    true
}

/// Recomputes Chonkle and Pittle for the claimed route and compares them
/// with the packet's tags.
///
/// Accepts only if both tags match exactly. The packet length used for the
/// tags is `packet.len()`.
#[must_use]
pub fn advanced_packet_filter(
    packet: &[u8],
    magic: &[u8],
    from_address: &[u8],
    from_port: u16,
    to_address: &[u8],
    to_port: u16,
) -> bool {
    if packet.len() < MIN_PACKET_BYTES {
        tracing::trace!(len = packet.len(), "advanced filter: packet too small");
        return false;
    }
    let Ok(packet_len) = u32::try_from(packet.len()) else {
        tracing::trace!(len = packet.len(), "advanced filter: packet too large");
        return false;
    };

    let expected = chonkle(magic, from_address, from_port, to_address, to_port, packet_len);
    if packet[CHONKLE_OFFSET..PAYLOAD_OFFSET] != expected {
        tracing::trace!("advanced filter: chonkle mismatch");
        return false;
    }

    let expected = pittle(from_address, from_port, to_address, to_port, packet_len);
    if packet[packet.len() - PITTLE_BYTES..] != expected {
        tracing::trace!("advanced filter: pittle mismatch");
        return false;
    }
    true
}

//! Packet layout and tag stamping.
//!
//! ```text
//! [type(1)] [chonkle(15)] [payload(N)] [pittle(2)]
//! ```
//!
//! The type byte is owned by upper layers; this module only reserves its
//! range.

use crate::tags::{chonkle, pittle, CHONKLE_BYTES, PITTLE_BYTES};

/// Smallest packet that can carry both tags.
pub const MIN_PACKET_BYTES: usize = 1 + CHONKLE_BYTES + PITTLE_BYTES;

/// Lowest valid packet type byte.
pub const PACKET_TYPE_MIN: u8 = 0x01;

/// Highest valid packet type byte.
pub const PACKET_TYPE_MAX: u8 = 0x63;

/// Offset of the Chonkle tag.
pub const CHONKLE_OFFSET: usize = 1;

/// Offset of the first payload byte.
pub const PAYLOAD_OFFSET: usize = CHONKLE_OFFSET + CHONKLE_BYTES;

/// Returns the payload bytes between the two tags, if the packet is long
/// enough to have tags at all.
#[must_use]
pub fn payload(packet: &[u8]) -> Option<&[u8]> {
    if packet.len() < MIN_PACKET_BYTES {
        return None;
    }
    Some(&packet[PAYLOAD_OFFSET..packet.len() - PITTLE_BYTES])
}

/// Writes Chonkle at `[1, 16)` and Pittle over the last two bytes.
///
/// The packet length fed to both tags is `packet.len()`. The type byte and
/// payload are left untouched.
///
/// # Panics
///
/// Panics if the packet is shorter than [`MIN_PACKET_BYTES`] or longer than
/// `u32::MAX` bytes.
pub fn stamp_packet(
    packet: &mut [u8],
    magic: &[u8],
    from_address: &[u8],
    from_port: u16,
    to_address: &[u8],
    to_port: u16,
) {
    assert!(
        packet.len() >= MIN_PACKET_BYTES,
        "packet of {} bytes is too small to stamp, need at least {MIN_PACKET_BYTES}",
        packet.len()
    );
    let Ok(packet_len) = u32::try_from(packet.len()) else {
        panic!("packet of {} bytes is too large to stamp", packet.len());
    };

    let chonkle = chonkle(magic, from_address, from_port, to_address, to_port, packet_len);
    let pittle = pittle(from_address, from_port, to_address, to_port, packet_len);

    let tail = packet.len() - PITTLE_BYTES;
    packet[CHONKLE_OFFSET..PAYLOAD_OFFSET].copy_from_slice(&chonkle);
    packet[tail..].copy_from_slice(&pittle);
}

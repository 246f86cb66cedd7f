//! Pittle and Chonkle packet tags.
//!
//! Both tags are pure functions of the packet's endpoints and length. Pittle
//! is an additive checksum cheap enough for middleboxes; Chonkle mixes in the
//! shared magic through FNV-1a and scatters the hash over 15 bytes.
//!
//! Every constant below is part of the wire contract. Other participants
//! compute the same bytes independently, so none of it may be "tidied".

/// Size of a Pittle tag in bytes.
pub const PITTLE_BYTES: usize = 2;

/// Size of a Chonkle tag in bytes.
pub const CHONKLE_BYTES: usize = 15;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Incremental 64-bit FNV-1a.
#[derive(Debug, Clone, Copy)]
struct Fnv1a(u64);

impl Fnv1a {
    const fn new() -> Self {
        Self(FNV_OFFSET_BASIS)
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 ^= u64::from(byte);
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
    }

    const fn finish(self) -> u64 {
        self.0
    }
}

/// Computes the 2-byte Pittle tag.
///
/// Sums every byte of both addresses, both little-endian ports and the
/// little-endian packet length with 16-bit wraparound, then folds the sum.
#[must_use]
pub fn pittle(
    from_address: &[u8],
    from_port: u16,
    to_address: &[u8],
    to_port: u16,
    packet_len: u32,
) -> [u8; PITTLE_BYTES] {
    let sum = from_address
        .iter()
        .chain(&from_port.to_le_bytes())
        .chain(to_address)
        .chain(&to_port.to_le_bytes())
        .chain(&packet_len.to_le_bytes())
        .fold(0u16, |sum, &byte| sum.wrapping_add(u16::from(byte)));

    let [lo, hi] = sum.to_le_bytes();
    let first = 1 | (lo ^ hi ^ 193);
    let second = 1 | ((255 - first) ^ 113);
    [first, second]
}

/// Computes the 15-byte Chonkle tag.
///
/// Hashes `magic`, the from address and port, the to address and port and
/// the packet length (ports and length little-endian) with FNV-1a, then
/// redistributes the hash bytes through a fixed table.
#[must_use]
pub fn chonkle(
    magic: &[u8],
    from_address: &[u8],
    from_port: u16,
    to_address: &[u8],
    to_port: u16,
    packet_len: u32,
) -> [u8; CHONKLE_BYTES] {
    let mut hasher = Fnv1a::new();
    hasher.write(magic);
    hasher.write(from_address);
    hasher.write(&from_port.to_le_bytes());
    hasher.write(to_address);
    hasher.write(&to_port.to_le_bytes());
    hasher.write(&packet_len.to_le_bytes());
    let h = hasher.finish().to_le_bytes();

    [
        ((h[6] & 0xC0) >> 6) + 42,
        (h[3] & 0x1F) + 200,
        ((h[2] & 0xFC) >> 2) + 5,
        h[0],
        (h[2] & 0x03) + 78,
        (h[4] & 0x7F) + 96,
        ((h[1] & 0xFC) >> 2) + 100,
        if h[7] & 0x01 == 0 { 79 } else { 7 },
        if h[4] & 0x80 == 0 { 37 } else { 83 },
        (h[5] & 0x07) + 124,
        ((h[1] & 0xE0) >> 5) + 175,
        (h[6] & 0x3F) + 33,
        match h[1] & 0x03 {
            0 => 97,
            1 => 5,
            2 => 43,
            _ => 13,
        },
        ((h[5] & 0xF8) >> 3) + 210,
        ((h[7] & 0xFE) >> 1) + 17,
    ]
}

//! Inspection and packet-crafting tools for the udpx wire protocol.
//!
//! This crate provides the pieces behind the `udpx-tools` binary:
//!
//! - Compute Chonkle/Pittle tags for a route
//! - Build stamped packets around a payload
//! - Run both packet filters over captured bytes and explain the verdict
//!
//! # Design Principles
//!
//! - **Same code path as production** - Everything goes through `wire`, never a re-implementation.
//! - **Human-readable output** - JSON for scripts, pretty text for people.

use anyhow::{bail, Context, Result};
use cursor::{ByteReader, ByteWriter};
use serde::Serialize;
use wire::{
    basic_packet_filter, encode_address, payload, Address, Route, CHONKLE_BYTES,
    MIN_PACKET_BYTES, PACKET_TYPE_MAX, PACKET_TYPE_MIN, PITTLE_BYTES,
};

/// Tags computed for one route and packet length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagReport {
    /// Sender address as text.
    pub from: String,
    /// Receiver address as text.
    pub to: String,
    /// Total packet length the tags were computed for.
    pub packet_len: u32,
    /// Magic value, hex encoded.
    pub magic: String,
    /// 15-byte Chonkle tag, hex encoded.
    pub chonkle: String,
    /// 2-byte Pittle tag, hex encoded.
    pub pittle: String,
}

/// Filter verdicts for one packet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    /// Total packet length in bytes.
    pub packet_len: usize,
    /// First byte, if the packet is non-empty.
    pub packet_type: Option<u8>,
    /// Bytes between the tags, if the packet is long enough to carry them.
    pub payload_len: Option<usize>,
    /// Basic filter verdict.
    pub basic: bool,
    /// `None` when no route context was supplied.
    pub advanced: Option<bool>,
}

impl FilterReport {
    /// Returns `true` if every filter that ran accepted the packet.
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.basic && self.advanced.unwrap_or(true)
    }
}

/// Decodes a hex magic value.
pub fn parse_magic(text: &str) -> Result<Vec<u8>> {
    hex::decode(text.trim()).with_context(|| format!("invalid magic hex {text:?}"))
}

/// Computes both tags for a route.
#[must_use]
pub fn compute_tags(magic: &[u8], from: &Address, to: &Address, packet_len: u32) -> TagReport {
    let route = Route::new(from, to);
    TagReport {
        from: from.to_string(),
        to: to.to_string(),
        packet_len,
        magic: hex::encode(magic),
        chonkle: hex::encode(route.chonkle(magic, packet_len)),
        pittle: hex::encode(route.pittle(packet_len)),
    }
}

/// Builds a stamped packet: type byte, Chonkle, payload, Pittle.
pub fn build_packet(
    packet_type: u8,
    body: &[u8],
    magic: &[u8],
    from: &Address,
    to: &Address,
) -> Result<Vec<u8>> {
    if !(PACKET_TYPE_MIN..=PACKET_TYPE_MAX).contains(&packet_type) {
        bail!(
            "packet type 0x{packet_type:02x} outside 0x{PACKET_TYPE_MIN:02x}..=0x{PACKET_TYPE_MAX:02x}"
        );
    }
    let len = MIN_PACKET_BYTES + body.len();
    if u32::try_from(len).is_err() {
        bail!("payload of {} bytes is too large", body.len());
    }

    let mut packet = vec![0u8; len];
    let mut writer = ByteWriter::new(&mut packet);
    writer.write_u8(packet_type);
    writer.write_bytes(&[0u8; CHONKLE_BYTES]);
    writer.write_bytes(body);
    writer.write_bytes(&[0u8; PITTLE_BYTES]);
    debug_assert_eq!(writer.finish(), len);

    Route::new(from, to).stamp(magic, &mut packet);
    tracing::debug!(len, packet_type, "stamped packet");
    Ok(packet)
}

/// Runs the basic filter, and the advanced filter when a route is given.
#[must_use]
pub fn inspect_packet(packet: &[u8], context: Option<(&[u8], &Route)>) -> FilterReport {
    let packet_type = ByteReader::new(packet).read_u8().ok();
    let basic = basic_packet_filter(packet);
    let advanced = context.map(|(magic, route)| route.accepts(magic, packet));
    tracing::debug!(len = packet.len(), basic, ?advanced, "inspected packet");

    FilterReport {
        packet_len: packet.len(),
        packet_type,
        payload_len: payload(packet).map(<[u8]>::len),
        basic,
        advanced,
    }
}

/// Hex of the 19-byte wire slot for an address.
#[must_use]
pub fn address_slot_hex(address: &Address) -> String {
    hex::encode(encode_address(address))
}

#[must_use]
pub fn format_tags_pretty(report: &TagReport) -> String {
    format!(
        "route: {} -> {} ({} bytes)\nmagic: {}\nchonkle: {}\npittle: {}",
        report.from, report.to, report.packet_len, report.magic, report.chonkle, report.pittle
    )
}

#[must_use]
pub fn format_filter_pretty(report: &FilterReport) -> String {
    let verdict = |pass: bool| if pass { "pass" } else { "reject" };
    let packet_type = report
        .packet_type
        .map_or_else(|| "n/a".to_string(), |t| format!("0x{t:02x}"));
    let payload_len = report
        .payload_len
        .map_or_else(|| "n/a".to_string(), |len| format!("{len} bytes"));
    let advanced = report.advanced.map_or("skipped (no route)", verdict);
    format!(
        "length: {} bytes\ntype: {packet_type}\npayload: {payload_len}\nbasic filter: {}\nadvanced filter: {advanced}\nverdict: {}",
        report.packet_len,
        verdict(report.basic),
        if report.accepted() { "accept" } else { "reject" }
    )
}

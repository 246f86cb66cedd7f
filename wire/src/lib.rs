//! Address codec, packet tags and packet filters for the udpx relay protocol.
//!
//! Every participant (client, gateway, relay) must produce these bytes
//! identically. A packet on the wire looks like:
//!
//! ```text
//! [type(1)] [chonkle(15)] [payload(N)] [pittle(2)]
//! ```
//!
//! Receivers run [`basic_packet_filter`] and then [`advanced_packet_filter`]
//! before handing the packet to anything that decrypts or parses it.
//!
//! # Design Principles
//!
//! - **Byte-exact** - Tag tables and slot layouts are wire contract, not implementation detail.
//! - **Accept or reject** - Filters return `bool` and never explain themselves to the caller.
//! - **Pure** - No shared state; every call works only on its arguments.
//!
//! See `WIRE_FORMAT.md` for the complete specification.
//!
//! # Example
//!
//! ```
//! use wire::{basic_packet_filter, parse_address, Route};
//!
//! let from = parse_address("1.2.3.4:1000").unwrap();
//! let to = parse_address("5.6.7.8:2000").unwrap();
//! let route = Route::new(&from, &to);
//!
//! let mut packet = vec![0u8; 20];
//! packet[0] = 0x01;
//! route.stamp(&[0u8; 8], &mut packet);
//!
//! assert!(basic_packet_filter(&packet));
//! assert!(route.accepts(&[0u8; 8], &packet));
//! ```

mod address;
pub mod config;
mod endpoint;
mod error;
mod filter;
mod packet;
mod random;
mod route;
mod tags;

pub use address::{
    decode_address, encode_address, parse_address, read_address, write_address, Address,
    ADDRESS_BYTES, ADDRESS_IPV4, ADDRESS_IPV6, ADDRESS_NONE,
};
pub use config::LogConfig;
pub use endpoint::AddressData;
pub use error::AddressParseError;
pub use filter::{advanced_packet_filter, basic_packet_filter};
pub use packet::{
    payload, stamp_packet, CHONKLE_OFFSET, MIN_PACKET_BYTES, PACKET_TYPE_MAX, PACKET_TYPE_MIN,
    PAYLOAD_OFFSET,
};
pub use random::{fill_random, random_bytes};
pub use route::Route;
pub use tags::{chonkle, pittle, CHONKLE_BYTES, PITTLE_BYTES};

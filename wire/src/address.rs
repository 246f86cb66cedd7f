//! Fixed-slot address codec.
//!
//! Every address occupies a 19-byte slot regardless of family so it can sit
//! inside fixed-layout headers without a length field:
//!
//! ```text
//! none: [0]
//! ipv4: [1] [a b c d] [port lo, port hi] [zero x 12]
//! ipv6: [2] [16 address bytes] [port lo, port hi]
//! ```

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::str::FromStr;

use cursor::{ByteReader, ByteWriter, CursorResult};

use crate::error::AddressParseError;

/// Encoded size of an address slot in bytes.
pub const ADDRESS_BYTES: usize = 19;

/// Slot tag for "no address".
pub const ADDRESS_NONE: u8 = 0;

/// Slot tag for an IPv4 address.
pub const ADDRESS_IPV4: u8 = 1;

/// Slot tag for an IPv6 address.
pub const ADDRESS_IPV6: u8 = 2;

const IPV4_PORT_OFFSET: usize = 5;
const IPV6_PORT_OFFSET: usize = 17;

/// An optional UDP endpoint as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Address {
    /// No address. Always encodable.
    #[default]
    None,
    /// IPv4 address and port.
    V4(SocketAddrV4),
    /// IPv6 address and port.
    V6(SocketAddrV6),
}

impl Address {
    /// Returns `true` for [`Address::None`].
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the port, or `0` when there is no address.
    #[must_use]
    pub const fn port(&self) -> u16 {
        match self {
            Self::None => 0,
            Self::V4(addr) => addr.port(),
            Self::V6(addr) => addr.port(),
        }
    }

    /// Converts to a standard socket address, if there is one.
    #[must_use]
    pub fn to_socket_addr(&self) -> Option<SocketAddr> {
        match *self {
            Self::None => None,
            Self::V4(addr) => Some(SocketAddr::V4(addr)),
            Self::V6(addr) => Some(SocketAddr::V6(addr)),
        }
    }

    /// Folds IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) into [`Address::V4`].
    #[must_use]
    pub fn canonical(self) -> Self {
        match self {
            Self::V6(addr) => match addr.ip().to_ipv4_mapped() {
                Some(ip) => Self::V4(SocketAddrV4::new(ip, addr.port())),
                None => self,
            },
            other => other,
        }
    }
}

impl From<SocketAddr> for Address {
    fn from(addr: SocketAddr) -> Self {
        match addr {
            SocketAddr::V4(addr) => Self::V4(addr),
            SocketAddr::V6(addr) => Self::V6(addr),
        }
    }
}

impl From<Option<SocketAddr>> for Address {
    fn from(addr: Option<SocketAddr>) -> Self {
        addr.map_or(Self::None, Self::from)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::V4(addr) => write!(f, "{addr}"),
            Self::V6(addr) => write!(f, "{addr}"),
        }
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

/// Parses `host:port` text into an address.
///
/// A bare IP with no port is accepted and gets port `0`.
pub fn parse_address(input: &str) -> Result<Address, AddressParseError> {
    let input = input.trim();
    if let Ok(addr) = input.parse::<SocketAddr>() {
        return Ok(Address::from(addr));
    }
    match input.parse::<IpAddr>() {
        Ok(ip) => Ok(Address::from(SocketAddr::new(ip, 0))),
        Err(_) => Err(AddressParseError::new(input)),
    }
}

/// Encodes an address into a fresh slot. Unused bytes are zero.
#[must_use]
pub fn encode_address(address: &Address) -> [u8; ADDRESS_BYTES] {
    let mut slot = [0u8; ADDRESS_BYTES];
    match address.canonical() {
        Address::None => {
            slot[0] = ADDRESS_NONE;
        }
        Address::V4(addr) => {
            let [lo, hi] = addr.port().to_le_bytes();
            slot[0] = ADDRESS_IPV4;
            slot[1..IPV4_PORT_OFFSET].copy_from_slice(&addr.ip().octets());
            slot[IPV4_PORT_OFFSET] = lo;
            slot[IPV4_PORT_OFFSET + 1] = hi;
        }
        Address::V6(addr) => {
            let [lo, hi] = addr.port().to_le_bytes();
            slot[0] = ADDRESS_IPV6;
            slot[1..IPV6_PORT_OFFSET].copy_from_slice(&addr.ip().octets());
            slot[IPV6_PORT_OFFSET] = lo;
            slot[IPV6_PORT_OFFSET + 1] = hi;
        }
    }
    slot
}

/// Decodes an address slot.
///
/// Unknown tags decode to [`Address::None`]; that is a valid empty result,
/// not a parse failure.
#[must_use]
pub fn decode_address(slot: &[u8; ADDRESS_BYTES]) -> Address {
    match slot[0] {
        ADDRESS_IPV4 => {
            let ip = Ipv4Addr::new(slot[1], slot[2], slot[3], slot[4]);
            let port = u16::from_le_bytes([slot[IPV4_PORT_OFFSET], slot[IPV4_PORT_OFFSET + 1]]);
            Address::V4(SocketAddrV4::new(ip, port))
        }
        ADDRESS_IPV6 => {
            let mut octets = [0u8; 16];
            octets.copy_from_slice(&slot[1..IPV6_PORT_OFFSET]);
            let port = u16::from_le_bytes([slot[IPV6_PORT_OFFSET], slot[IPV6_PORT_OFFSET + 1]]);
            Address::V6(SocketAddrV6::new(Ipv6Addr::from(octets), port, 0, 0))
        }
        _ => Address::None,
    }
}

/// Writes a full address slot at the writer's position.
///
/// # Panics
///
/// Panics if fewer than [`ADDRESS_BYTES`] bytes remain.
pub fn write_address(writer: &mut ByteWriter<'_>, address: &Address) {
    writer.write_bytes(&encode_address(address));
}

/// Reads a full address slot at the reader's position.
///
/// Fails without moving the reader if fewer than [`ADDRESS_BYTES`] bytes remain.
pub fn read_address(reader: &mut ByteReader<'_>) -> CursorResult<Address> {
    let slot = reader.read_array::<ADDRESS_BYTES>()?;
    Ok(decode_address(&slot))
}

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddrV4, SocketAddrV6};

use cursor::{ByteReader, ByteWriter};
use proptest::prelude::*;
use wire::{
    basic_packet_filter, decode_address, encode_address, read_address, write_address, Address,
    Route, ADDRESS_BYTES, MIN_PACKET_BYTES,
};

fn address_strategy() -> impl Strategy<Value = Address> {
    prop_oneof![
        Just(Address::None),
        (any::<[u8; 4]>(), any::<u16>())
            .prop_map(|(ip, port)| Address::V4(SocketAddrV4::new(Ipv4Addr::from(ip), port))),
        (any::<[u8; 16]>(), any::<u16>())
            .prop_filter("ipv4-mapped addresses fold to ipv4", |(ip, _)| {
                Ipv6Addr::from(*ip).to_ipv4_mapped().is_none()
            })
            .prop_map(|(ip, port)| Address::V6(SocketAddrV6::new(Ipv6Addr::from(ip), port, 0, 0))),
    ]
}

fn routed_packet() -> impl Strategy<Value = (Vec<u8>, Address, Address, Vec<u8>)> {
    (
        prop::collection::vec(any::<u8>(), 0..32),
        address_strategy(),
        address_strategy(),
        1u8..=0x63,
        prop::collection::vec(any::<u8>(), 0..64),
    )
        .prop_map(|(magic, from, to, packet_type, payload)| {
            let mut packet = Vec::with_capacity(MIN_PACKET_BYTES + payload.len());
            packet.push(packet_type);
            packet.extend_from_slice(&[0u8; 15]);
            packet.extend_from_slice(&payload);
            packet.extend_from_slice(&[0u8; 2]);
            Route::new(&from, &to).stamp(&magic, &mut packet);
            (magic, from, to, packet)
        })
}

proptest! {
    #[test]
    fn prop_address_slot_roundtrip(address in address_strategy()) {
        let slot = encode_address(&address);
        prop_assert_eq!(decode_address(&slot), address);
    }

    #[test]
    fn prop_address_cursor_roundtrip(addresses in prop::collection::vec(address_strategy(), 1..8)) {
        let mut buf = vec![0u8; addresses.len() * ADDRESS_BYTES];
        let mut writer = ByteWriter::new(&mut buf);
        for address in &addresses {
            write_address(&mut writer, address);
        }
        prop_assert_eq!(writer.finish(), addresses.len() * ADDRESS_BYTES);

        let mut reader = ByteReader::new(&buf);
        for address in &addresses {
            prop_assert_eq!(read_address(&mut reader).unwrap(), *address);
        }
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn prop_short_address_read_does_not_move(
        data in prop::collection::vec(any::<u8>(), 0..40),
        pos in 0usize..40,
    ) {
        let mut reader = ByteReader::new(&data);
        reader.set_position(pos);
        let before = reader.position();
        let available = reader.remaining();
        let result = read_address(&mut reader);
        if available < ADDRESS_BYTES {
            prop_assert!(result.is_err());
            prop_assert_eq!(reader.position(), before);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(reader.position(), before + ADDRESS_BYTES);
        }
    }

    #[test]
    fn prop_stamped_packets_pass_both_filters((magic, from, to, packet) in routed_packet()) {
        prop_assert!(basic_packet_filter(&packet));
        prop_assert!(Route::new(&from, &to).accepts(&magic, &packet));
    }

    #[test]
    fn prop_tag_byte_flip_rejected(
        (magic, from, to, packet) in routed_packet(),
        pick in 0usize..17,
        mask in 1u8..=u8::MAX,
    ) {
        let index = if pick < 15 { 1 + pick } else { packet.len() - 17 + pick };
        let mut corrupted = packet;
        corrupted[index] ^= mask;
        prop_assert!(!Route::new(&from, &to).accepts(&magic, &corrupted));
    }

    #[test]
    fn prop_short_packets_rejected(
        packet in prop::collection::vec(any::<u8>(), 0..MIN_PACKET_BYTES),
    ) {
        prop_assert!(!basic_packet_filter(&packet));
        let route = Route::new(&Address::None, &Address::None);
        prop_assert!(!route.accepts(&[], &packet));
    }
}

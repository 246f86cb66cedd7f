//! Pinned tag vectors. Any change here breaks every other participant.

use wire::{
    advanced_packet_filter, basic_packet_filter, chonkle, parse_address, pittle, Address, Route,
};

struct Vector {
    magic: &'static [u8],
    from: &'static str,
    to: &'static str,
    packet_len: u32,
    chonkle: [u8; 15],
    pittle: [u8; 2],
}

const VECTORS: &[Vector] = &[
    Vector {
        magic: &[0, 0, 0, 0, 0, 0, 0, 0],
        from: "1.2.3.4:1000",
        to: "5.6.7.8:2000",
        packet_len: 20,
        chonkle: [
            0x2d, 0xd8, 0x18, 0x21, 0x50, 0x60, 0xa2, 0x07, 0x53, 0x7e, 0xb6, 0x29, 0x2b, 0xd6,
            0x86,
        ],
        pittle: [0x3b, 0xb5],
    },
    Vector {
        magic: &[1, 2, 3, 4, 5, 6, 7, 8],
        from: "127.0.0.1:40000",
        to: "10.0.0.2:30000",
        packet_len: 100,
        chonkle: [
            0x2b, 0xe4, 0x0b, 0x4e, 0x4f, 0x9d, 0x72, 0x07, 0x25, 0x7d, 0xb0, 0x2b, 0x05, 0xef,
            0x1b,
        ],
        pittle: [0xb3, 0x3d],
    },
    Vector {
        magic: &[0, 0, 0, 0, 0, 0, 0, 0],
        from: "[2001:db8::1]:1000",
        to: "[fe80::2]:2000",
        packet_len: 64,
        chonkle: [
            0x2d, 0xe1, 0x2f, 0xdc, 0x50, 0x8e, 0x8f, 0x4f, 0x53, 0x7e, 0xb4, 0x60, 0x61, 0xed,
            0x84,
        ],
        pittle: [0xad, 0x23],
    },
];

fn route(vector: &Vector) -> Route {
    let from: Address = parse_address(vector.from).unwrap();
    let to: Address = parse_address(vector.to).unwrap();
    Route::new(&from, &to)
}

#[test]
fn route_reproduces_vectors() {
    for vector in VECTORS {
        let route = route(vector);
        assert_eq!(
            route.chonkle(vector.magic, vector.packet_len),
            vector.chonkle,
            "chonkle for {} -> {}",
            vector.from,
            vector.to
        );
        assert_eq!(
            route.pittle(vector.packet_len),
            vector.pittle,
            "pittle for {} -> {}",
            vector.from,
            vector.to
        );
    }
}

#[test]
fn raw_functions_reproduce_first_vector() {
    let vector = &VECTORS[0];
    assert_eq!(
        chonkle(vector.magic, &[1, 2, 3, 4], 1000, &[5, 6, 7, 8], 2000, 20),
        vector.chonkle
    );
    assert_eq!(pittle(&[1, 2, 3, 4], 1000, &[5, 6, 7, 8], 2000, 20), vector.pittle);
}

#[test]
fn vector_packets_pass_both_filters() {
    for vector in VECTORS {
        let len = vector.packet_len as usize;
        let mut packet = vec![0u8; len];
        packet[0] = 0x01;
        packet[1..16].copy_from_slice(&vector.chonkle);
        packet[len - 2..].copy_from_slice(&vector.pittle);

        assert!(basic_packet_filter(&packet));
        let route = route(vector);
        assert!(
            route.accepts(vector.magic, &packet),
            "vector {} -> {} rejected",
            vector.from,
            vector.to
        );
        let from = route.sender();
        let to = route.receiver();
        assert!(advanced_packet_filter(
            &packet,
            vector.magic,
            from.bytes(),
            from.port(),
            to.bytes(),
            to.port()
        ));
    }
}

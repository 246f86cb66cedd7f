#![no_main]

use libfuzzer_sys::fuzz_target;
use wire::{advanced_packet_filter, basic_packet_filter, payload, MIN_PACKET_BYTES};

fuzz_target!(|data: &[u8]| {
    let basic = basic_packet_filter(data);
    if basic {
        assert!(data.len() >= MIN_PACKET_BYTES);
    }
    assert_eq!(payload(data).is_some(), data.len() >= MIN_PACKET_BYTES);

    // First bytes double as the claimed route; the whole input is the packet.
    let magic = data.get(..8).unwrap_or_default();
    let from = data.get(..4).unwrap_or_default();
    let to = data.get(4..8).unwrap_or_default();
    let advanced = advanced_packet_filter(data, magic, from, 1000, to, 2000);
    if advanced {
        assert!(data.len() >= MIN_PACKET_BYTES);
    }
});

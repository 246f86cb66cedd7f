#![no_main]

use cursor::ByteReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 8;
        idx += 1;

        let before = reader.position();
        let ok = match op {
            0 => reader.read_bool().is_ok(),
            1 => reader.read_u8().is_ok(),
            2 => reader.read_u16().is_ok(),
            3 => reader.read_u32().is_ok(),
            4 => reader.read_u64().is_ok(),
            5 => reader.read_f64().is_ok(),
            6 => {
                let max_len = u32::from(data[idx.saturating_sub(1)]);
                reader.read_string(max_len).is_ok()
            }
            _ => wire::read_address(&mut reader).is_ok(),
        };
        if !ok {
            assert_eq!(reader.position(), before);
        }
    }
});

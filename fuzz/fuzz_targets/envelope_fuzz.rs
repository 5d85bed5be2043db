#![no_main]
use geodelta::compress::{self, Compression};
use geodelta::format::DecodeLimits;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = DecodeLimits::default().with_max_input_len(1 << 20);

    // Arbitrary envelopes (and bare buffers) must fail cleanly.
    let _ = compress::decode_any(data, &limits);

    // Anything that decodes survives a zlib re-pack.
    if let Ok(m) = compress::decode_any(data, &limits) {
        let packed = compress::pack(&m, Compression::Zlib { level: 1 }).expect("pack failed");
        let unpacked = compress::unpack(&packed, &limits).expect("unpack failed");
        assert_eq!(unpacked, m);
    }
});

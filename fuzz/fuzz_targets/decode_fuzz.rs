#![no_main]
use geodelta::format::{DecodeLimits, Measurement};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must only ever produce errors, never panics.
    let _ = Measurement::decode(data);

    // Tight limits exercise the count checks.
    let limits = DecodeLimits::default().with_max_samples(16);
    if let Ok(m) = Measurement::decode_with_limits(data, &limits) {
        assert!(m.sample_count() <= 16);
        // Anything that decodes survives a re-encode.
        assert_eq!(Measurement::decode(&m.encode()).as_ref(), Ok(&m));
    }
});

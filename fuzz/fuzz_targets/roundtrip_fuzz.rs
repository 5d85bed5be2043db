#![no_main]
use geodelta::format::{LocationSample, LocationTrack, Measurement};
use libfuzzer_sys::fuzz_target;

fn le_i32(chunk: &[u8]) -> i32 {
    i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
}

fuzz_target!(|data: &[u8]| {
    // 21 bytes per sample: timestamp, lat, lon, accuracy, speed, elevation flag.
    let track: LocationTrack = data
        .chunks_exact(21)
        .map(|c| {
            let ts = i64::from(le_i32(&c[0..4])) * 1000 + i64::from(c[4]);
            let sample = LocationSample::new(
                ts,
                le_i32(&c[5..9]),
                le_i32(&c[9..13]),
                le_i32(&c[13..17]) as u32,
                i32::from(i16::from_le_bytes([c[17], c[18]])),
            );
            if c[19] & 1 == 1 {
                sample.with_elevation(i32::from(c[20]) * 100)
            } else {
                sample
            }
        })
        .collect();

    let m = Measurement::default().with_track(track);
    let bytes = m.encode();
    assert_eq!(bytes.len(), m.encoded_len());
    let decoded = Measurement::decode(&bytes).expect("decode of fresh encoding failed");
    assert_eq!(decoded, m);
});

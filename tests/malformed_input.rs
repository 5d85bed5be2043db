use geodelta::format::{
    DecodeError, DecodeLimits, LocationSample, LocationTrack, Measurement, NullableValue,
    SeriesKind, VarintError, delta, nullable, varint,
};

const T0: i64 = 1_621_582_427_000;

/// Assemble a measurement around hand-written series blocks.
fn with_track_body(body: &[u8]) -> Vec<u8> {
    let mut out = vec![0x00, 0x02, 0x01];
    varint::write_usize(&mut out, body.len());
    out.extend_from_slice(body);
    out
}

fn numeric_block(out: &mut Vec<u8>, series: SeriesKind, values: &[i64]) {
    out.push(series.tag());
    out.extend_from_slice(&delta::encode(values));
}

fn two_location_bytes() -> Vec<u8> {
    let track: LocationTrack = [
        LocationSample::new(T0, 51_064_590, 13_699_045, 800, 1000),
        LocationSample::new(T0 + 1000, 51_064_780, 13_698_345, 500, 0).with_elevation(48_000),
    ]
    .into_iter()
    .collect();
    Measurement::default().with_track(track).encode()
}

#[test]
fn elevation_shorter_than_timestamps() {
    let mut body = Vec::new();
    numeric_block(&mut body, SeriesKind::Timestamp, &[T0, T0 + 1000]);
    numeric_block(&mut body, SeriesKind::Latitude, &[51_064_590, 51_064_780]);
    numeric_block(&mut body, SeriesKind::Longitude, &[13_699_045, 13_698_345]);
    numeric_block(&mut body, SeriesKind::Accuracy, &[800, 500]);
    numeric_block(&mut body, SeriesKind::Speed, &[1000, 0]);
    body.push(SeriesKind::Elevation.tag());
    nullable::encode_series_into(&mut body, &[NullableValue::present(48_000i32)]);

    assert_eq!(
        Measurement::decode(&with_track_body(&body)),
        Err(DecodeError::SeriesLengthMismatch {
            series: SeriesKind::Elevation,
            expected: 2,
            actual: 1,
        })
    );
}

#[test]
fn latitude_longer_than_timestamps() {
    let mut body = Vec::new();
    numeric_block(&mut body, SeriesKind::Timestamp, &[T0]);
    numeric_block(&mut body, SeriesKind::Latitude, &[1, 2, 3]);
    for series in [SeriesKind::Longitude, SeriesKind::Accuracy, SeriesKind::Speed] {
        numeric_block(&mut body, series, &[]);
    }
    body.extend_from_slice(&[SeriesKind::Elevation.tag(), 0x00]);

    assert_eq!(
        Measurement::decode(&with_track_body(&body)),
        Err(DecodeError::SeriesLengthMismatch {
            series: SeriesKind::Latitude,
            expected: 1,
            actual: 3,
        })
    );
}

#[test]
fn every_truncation_fails_cleanly() {
    let bytes = two_location_bytes();
    for cut in 0..bytes.len() {
        let err = Measurement::decode(&bytes[..cut]).unwrap_err();
        assert!(err.is_truncation(), "cut at {cut}: {err:?}");
    }
}

#[test]
fn extra_byte_is_trailing() {
    let mut bytes = two_location_bytes();
    bytes.push(0x00);
    assert_eq!(
        Measurement::decode(&bytes),
        Err(DecodeError::TrailingBytes { count: 1 })
    );
}

#[test]
fn overlong_varint_count() {
    let mut body = vec![SeriesKind::Timestamp.tag()];
    body.extend_from_slice(&[0xFF; 10]);
    let err = Measurement::decode(&with_track_body(&body)).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MalformedVarint {
            source: VarintError::Overlong,
            ..
        }
    ));
}

#[test]
fn wrong_block_tag() {
    let mut bytes = two_location_bytes();
    // First block tag sits right after the header and the one-byte length.
    assert_eq!(bytes[4], SeriesKind::Timestamp.tag());
    bytes[4] = SeriesKind::Latitude.tag();
    assert_eq!(
        Measurement::decode(&bytes),
        Err(DecodeError::UnexpectedTag {
            offset: 4,
            expected: SeriesKind::Timestamp.tag(),
            found: SeriesKind::Latitude.tag(),
        })
    );
}

#[test]
fn invalid_track_flag() {
    assert_eq!(
        Measurement::decode(&[0x00, 0x02, 0x07]),
        Err(DecodeError::InvalidFlag {
            offset: 2,
            value: 0x07
        })
    );
}

#[test]
fn track_length_prefix_too_long() {
    let track: LocationTrack = [LocationSample::new(T0, 1, 2, 3, 4)].into_iter().collect();
    let mut body = Vec::new();
    track.encode_into(&mut body);
    body.push(0x00);
    assert!(matches!(
        Measurement::decode(&with_track_body(&body)),
        Err(DecodeError::TrackLengthMismatch { actual, declared }) if declared == actual + 1
    ));
}

#[test]
fn huge_declared_count_is_rejected_without_allocating() {
    let mut body = vec![SeriesKind::Timestamp.tag()];
    varint::write_usize(&mut body, 1 << 40);
    let err = Measurement::decode(&with_track_body(&body)).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::TooManySamples {
            series: SeriesKind::Timestamp,
            ..
        }
    ));

    let mut body = vec![SeriesKind::Timestamp.tag()];
    varint::write_usize(&mut body, 1000);
    let err = Measurement::decode_with_limits(&with_track_body(&body), &DecodeLimits::unbounded())
        .unwrap_err();
    assert!(err.is_truncation(), "{err:?}");
}

#[test]
fn accuracy_out_of_range() {
    let mut body = Vec::new();
    numeric_block(&mut body, SeriesKind::Timestamp, &[T0]);
    numeric_block(&mut body, SeriesKind::Latitude, &[0]);
    numeric_block(&mut body, SeriesKind::Longitude, &[0]);
    numeric_block(&mut body, SeriesKind::Accuracy, &[-1]);
    numeric_block(&mut body, SeriesKind::Speed, &[0]);
    body.extend_from_slice(&[SeriesKind::Elevation.tag(), 0x00]);

    assert_eq!(
        Measurement::decode(&with_track_body(&body)),
        Err(DecodeError::ValueOutOfRange {
            series: SeriesKind::Accuracy,
            index: 0
        })
    );
}

#[test]
fn elevation_record_flag_must_be_boolean() {
    let mut bytes = two_location_bytes();
    // Null record near the end: 0x0A 0x02 <flag> 0x00.
    let at = bytes.len() - 8;
    assert_eq!(&bytes[at - 2..at + 2], &[0x0A, 0x02, 0x01, 0x00]);
    bytes[at] = 0x05;
    assert!(matches!(
        Measurement::decode(&bytes),
        Err(DecodeError::InvalidFlag { value: 0x05, .. })
    ));
}

#[test]
fn input_limit_is_checked_first() {
    let bytes = two_location_bytes();
    let limits = DecodeLimits::default().with_max_input_len(10);
    assert_eq!(
        Measurement::decode_with_limits(&bytes, &limits),
        Err(DecodeError::InputTooLarge {
            len: bytes.len(),
            max: 10
        })
    );
}

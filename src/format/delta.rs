// Delta series: count, then the first value absolute and every following
// value as the difference from its predecessor, all as zig-zag varints.
//
// Differences use wrapping arithmetic, so any i64 sequence round-trips and
// encoding cannot fail.

use super::cursor::ByteCursor;
use super::error::{DecodeError, SeriesKind};
use super::varint;

/// Append `count` and the delta-encoded values to `out`.
pub fn encode_into<I>(out: &mut Vec<u8>, values: I)
where
    I: IntoIterator<Item = i64>,
    I::IntoIter: ExactSizeIterator,
{
    let values = values.into_iter();
    varint::write_usize(out, values.len());
    let mut prev = 0i64;
    for value in values {
        varint::write_signed(out, value.wrapping_sub(prev));
        prev = value;
    }
}

/// Delta-encode `values` into a fresh buffer.
pub fn encode(values: &[i64]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(values.iter().copied()));
    encode_into(&mut out, values.iter().copied());
    out
}

/// Encoded size of the series without writing it.
pub fn encoded_len<I>(values: I) -> usize
where
    I: IntoIterator<Item = i64>,
    I::IntoIter: ExactSizeIterator,
{
    let values = values.into_iter();
    let mut len = varint::sizeof_usize(values.len());
    let mut prev = 0i64;
    for value in values {
        len += varint::sizeof_signed(value.wrapping_sub(prev));
        prev = value;
    }
    len
}

/// Decode a delta series, reconstructing absolute values by running sum.
///
/// The declared count is checked against `max_samples` and against the bytes
/// left in the cursor (every entry takes at least one byte) before anything
/// is allocated.
pub fn decode(
    cur: &mut ByteCursor<'_>,
    series: SeriesKind,
    max_samples: usize,
) -> Result<Vec<i64>, DecodeError> {
    let count = read_count(cur, series, max_samples)?;
    let mut values = Vec::with_capacity(count);
    let mut prev = 0i64;
    for _ in 0..count {
        prev = prev.wrapping_add(cur.read_signed()?);
        values.push(prev);
    }
    Ok(values)
}

/// Read an entry count and bound it by `max_samples` and by the remaining
/// input, assuming each entry takes at least `min_entry_len` bytes.
pub(crate) fn read_count_with_min(
    cur: &mut ByteCursor<'_>,
    series: SeriesKind,
    max_samples: usize,
    min_entry_len: usize,
) -> Result<usize, DecodeError> {
    let count = cur.read_usize()?;
    if count > max_samples {
        return Err(DecodeError::TooManySamples {
            series,
            count,
            max: max_samples,
        });
    }
    cur.require(count.saturating_mul(min_entry_len))?;
    Ok(count)
}

fn read_count(
    cur: &mut ByteCursor<'_>,
    series: SeriesKind,
    max_samples: usize,
) -> Result<usize, DecodeError> {
    read_count_with_min(cur, series, max_samples, 1)
}

/// Convert decoded `i64` values into the series' storage type.
pub fn narrow<T: TryFrom<i64>>(values: Vec<i64>, series: SeriesKind) -> Result<Vec<T>, DecodeError> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, v)| T::try_from(v).map_err(|_| DecodeError::ValueOutOfRange { series, index }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(bytes: &[u8]) -> Result<Vec<i64>, DecodeError> {
        let mut cur = ByteCursor::new(bytes);
        decode(&mut cur, SeriesKind::Timestamp, usize::MAX)
    }

    #[test]
    fn empty_series_is_single_zero_byte() {
        assert_eq!(encode(&[]), vec![0x00]);
        assert_eq!(decode_all(&[0x00]).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn first_value_absolute_then_deltas() {
        // count 3, 100 (zz 200), +5 (zz 10), -7 (zz 13)
        let bytes = encode(&[100, 105, 98]);
        assert_eq!(bytes, vec![0x03, 0xC8, 0x01, 0x0A, 0x0D]);
        assert_eq!(decode_all(&bytes).unwrap(), vec![100, 105, 98]);
    }

    #[test]
    fn small_deltas_stay_short() {
        let values: Vec<i64> = (0..100).map(|i| 1_621_582_427_000 + i * 1000).collect();
        let bytes = encode(&values);
        // 1 count + 6 absolute + 99 * 2 for 1000 ms steps
        assert_eq!(bytes.len(), 1 + 6 + 99 * 2);
        assert_eq!(encoded_len(values.iter().copied()), bytes.len());
    }

    #[test]
    fn extreme_values_wrap_and_roundtrip() {
        let values = vec![i64::MIN, i64::MAX, 0, i64::MIN, -1];
        assert_eq!(decode_all(&encode(&values)).unwrap(), values);
    }

    #[test]
    fn oversized_count_fails_before_allocating() {
        // Count claims u32::MAX entries with one byte of payload.
        let mut bytes = Vec::new();
        varint::write_unsigned(&mut bytes, u32::MAX as u64);
        bytes.push(0x00);
        let err = decode_all(&bytes).unwrap_err();
        assert!(matches!(err, DecodeError::TruncatedInput { .. }));
    }

    #[test]
    fn count_above_limit_is_rejected() {
        let bytes = encode(&[1, 2, 3]);
        let mut cur = ByteCursor::new(&bytes);
        let err = decode(&mut cur, SeriesKind::Speed, 2).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TooManySamples {
                series: SeriesKind::Speed,
                count: 3,
                max: 2
            }
        );
    }

    #[test]
    fn narrow_reports_index() {
        let err = narrow::<i32>(vec![0, i64::from(i32::MAX) + 1], SeriesKind::Latitude).unwrap_err();
        assert_eq!(
            err,
            DecodeError::ValueOutOfRange {
                series: SeriesKind::Latitude,
                index: 1
            }
        );
        assert_eq!(narrow::<u32>(vec![0, 800], SeriesKind::Accuracy).unwrap(), vec![0u32, 800]);
    }
}

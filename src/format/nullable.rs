// Nullable values with an explicit null flag.
//
// Each entry of a nullable series is a self-delimiting record:
//
//   ENTRY_TAG   1 byte (0x0A)
//   payload_len unsigned varint
//   flag        1 byte, 0 = present, 1 = null
//   value       zig-zag varint; zero placeholder when null
//
// Present values are delta encoded against the previous present value, the
// first one absolute. Nulls do not move the running value. A null entry
// always writes its placeholder, so it costs exactly 4 bytes.

use super::cursor::ByteCursor;
use super::delta;
use super::error::{DecodeError, SeriesKind};
use super::varint;

/// Leading byte of every nullable record.
pub const ENTRY_TAG: u8 = 0x0A;

const FLAG_PRESENT: u8 = 0;
const FLAG_NULL: u8 = 1;

/// Smallest possible record: tag, length, flag, one-byte value.
const MIN_RECORD_LEN: usize = 4;

/// A value that may be explicitly absent.
///
/// A null entry carries `T::default()` as a placeholder which is never
/// exposed through [`NullableValue::get`]. Two nulls always compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NullableValue<T> {
    is_null: bool,
    value: T,
}

impl<T: Default> NullableValue<T> {
    pub fn null() -> Self {
        Self {
            is_null: true,
            value: T::default(),
        }
    }
}

impl<T> NullableValue<T> {
    pub fn present(value: T) -> Self {
        Self {
            is_null: false,
            value,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.is_null
    }
}

impl<T: Copy> NullableValue<T> {
    /// The value, or `None` for a null entry.
    #[inline]
    pub fn get(&self) -> Option<T> {
        if self.is_null { None } else { Some(self.value) }
    }
}

impl<T: Default> From<Option<T>> for NullableValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::present(v),
            None => Self::null(),
        }
    }
}

impl<T> From<NullableValue<T>> for Option<T> {
    fn from(value: NullableValue<T>) -> Self {
        if value.is_null { None } else { Some(value.value) }
    }
}

// ---------------------------------------------------------------------------
// Single records
// ---------------------------------------------------------------------------

fn write_record(out: &mut Vec<u8>, is_null: bool, value: i64) {
    out.push(ENTRY_TAG);
    varint::write_usize(out, 1 + varint::sizeof_signed(value));
    out.push(if is_null { FLAG_NULL } else { FLAG_PRESENT });
    varint::write_signed(out, value);
}

fn record_len(value: i64) -> usize {
    let payload = 1 + varint::sizeof_signed(value);
    1 + varint::sizeof_usize(payload) + payload
}

/// Read one record. Returns `None` for null, `Some(delta)` otherwise.
fn read_record(cur: &mut ByteCursor<'_>) -> Result<Option<i64>, DecodeError> {
    let offset = cur.position();
    cur.expect_tag(ENTRY_TAG)?;
    let declared = cur.read_usize()?;
    let mut payload = cur.sub_cursor(declared)?;
    let start = payload.position();
    let is_null = payload.read_flag()?;
    let value = payload.read_signed()?;
    if !payload.is_empty() {
        return Err(DecodeError::RecordLengthMismatch {
            offset,
            declared,
            actual: payload.position() - start,
        });
    }
    Ok(if is_null { None } else { Some(value) })
}

/// Encode a single nullable value as a standalone record (no delta).
pub fn encode<T: Copy + Into<i64>>(value: NullableValue<T>) -> Vec<u8> {
    let mut out = Vec::with_capacity(MIN_RECORD_LEN);
    match value.get() {
        Some(v) => write_record(&mut out, false, v.into()),
        None => write_record(&mut out, true, 0),
    }
    out
}

/// Decode a single standalone record written by [`encode`].
pub fn decode<T>(cur: &mut ByteCursor<'_>, series: SeriesKind) -> Result<NullableValue<T>, DecodeError>
where
    T: TryFrom<i64> + Default,
{
    match read_record(cur)? {
        None => Ok(NullableValue::null()),
        Some(v) => T::try_from(v)
            .map(NullableValue::present)
            .map_err(|_| DecodeError::ValueOutOfRange { series, index: 0 }),
    }
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

/// Append `count` and one record per entry.
pub fn encode_series_into<T: Copy + Into<i64>>(out: &mut Vec<u8>, entries: &[NullableValue<T>]) {
    varint::write_usize(out, entries.len());
    let mut prev = 0i64;
    for entry in entries {
        match entry.get() {
            Some(v) => {
                let v: i64 = v.into();
                write_record(out, false, v.wrapping_sub(prev));
                prev = v;
            }
            None => write_record(out, true, 0),
        }
    }
}

/// Encoded size of a nullable series without writing it.
pub fn series_encoded_len<T: Copy + Into<i64>>(entries: &[NullableValue<T>]) -> usize {
    let mut len = varint::sizeof_usize(entries.len());
    let mut prev = 0i64;
    for entry in entries {
        len += match entry.get() {
            Some(v) => {
                let v: i64 = v.into();
                let delta = v.wrapping_sub(prev);
                prev = v;
                record_len(delta)
            }
            None => record_len(0),
        };
    }
    len
}

/// Decode a nullable series written by [`encode_series_into`].
pub fn decode_series<T>(
    cur: &mut ByteCursor<'_>,
    series: SeriesKind,
    max_samples: usize,
) -> Result<Vec<NullableValue<T>>, DecodeError>
where
    T: TryFrom<i64> + Default,
{
    let count = delta::read_count_with_min(cur, series, max_samples, MIN_RECORD_LEN)?;
    let mut entries = Vec::with_capacity(count);
    let mut prev = 0i64;
    for index in 0..count {
        let entry = match read_record(cur)? {
            None => NullableValue::null(),
            Some(d) => {
                prev = prev.wrapping_add(d);
                let v = T::try_from(prev).map_err(|_| DecodeError::ValueOutOfRange { series, index })?;
                NullableValue::present(v)
            }
        };
        entries.push(entry);
    }
    Ok(entries)
}

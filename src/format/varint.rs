// Variable-length integer encoding.
//
// Base-128, little-endian: least-significant group first.
// Each byte has bit 7 set except the final byte.
// Signed values are zig-zag mapped before encoding so that small negative
// deltas stay as short as small positive ones.

/// Maximum encoded length for a 64-bit value (ceil(64/7) = 10).
pub const MAX_VARINT_LEN: usize = 10;

/// Payload bits allowed in the 10th byte of a 64-bit varint (64 - 9*7 = 1).
const LAST_BYTE_MASK: u8 = 0x01;

// ---------------------------------------------------------------------------
// Zig-zag mapping
// ---------------------------------------------------------------------------

/// Map a signed value onto an unsigned one: 0, -1, 1, -2, 2 ... → 0, 1, 2, 3, 4 ...
#[inline]
pub fn zigzag_encode(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

/// Inverse of [`zigzag_encode`].
#[inline]
pub fn zigzag_decode(u: u64) -> i64 {
    ((u >> 1) as i64) ^ -((u & 1) as i64)
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Encode a `u64` into `buf`. Returns the number of bytes written (1..=10).
#[inline]
pub fn encode_u64(mut num: u64, buf: &mut [u8; MAX_VARINT_LEN]) -> usize {
    let mut i = 0;
    while num >= 0x80 {
        buf[i] = (num as u8 & 0x7F) | 0x80;
        num >>= 7;
        i += 1;
    }
    buf[i] = num as u8;
    i + 1
}

/// Append an unsigned varint to `out`.
pub fn write_unsigned(out: &mut Vec<u8>, num: u64) {
    let mut buf = [0u8; MAX_VARINT_LEN];
    let len = encode_u64(num, &mut buf);
    out.extend_from_slice(&buf[..len]);
}

/// Append a zig-zag signed varint to `out`.
pub fn write_signed(out: &mut Vec<u8>, num: i64) {
    write_unsigned(out, zigzag_encode(num));
}

/// Append a `usize` (counts, lengths) as an unsigned varint.
pub fn write_usize(out: &mut Vec<u8>, num: usize) {
    write_unsigned(out, num as u64);
}

/// Encode an unsigned varint into a fresh buffer.
pub fn encode_unsigned(num: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(sizeof_unsigned(num));
    write_unsigned(&mut out, num);
    out
}

/// Encode a zig-zag signed varint into a fresh buffer.
pub fn encode_signed(num: i64) -> Vec<u8> {
    encode_unsigned(zigzag_encode(num))
}

// ---------------------------------------------------------------------------
// Decoding from byte slices
// ---------------------------------------------------------------------------

/// Decode an unsigned varint from the start of `data`.
/// Returns `(value, bytes_consumed)` or an error.
pub fn read_unsigned(data: &[u8]) -> Result<(u64, usize), VarintError> {
    let mut val: u64 = 0;
    for (i, &byte) in data.iter().take(MAX_VARINT_LEN).enumerate() {
        if i == MAX_VARINT_LEN - 1 && byte & !LAST_BYTE_MASK != 0 {
            // Either a continuation bit or payload bits past bit 63.
            return Err(VarintError::Overlong);
        }
        val |= u64::from(byte & 0x7F) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((val, i + 1));
        }
    }
    Err(VarintError::Truncated)
}

/// Decode a zig-zag signed varint from the start of `data`.
pub fn read_signed(data: &[u8]) -> Result<(i64, usize), VarintError> {
    let (val, len) = read_unsigned(data)?;
    Ok((zigzag_decode(val), len))
}

/// Decode a `usize` (counts, lengths).
pub fn read_usize(data: &[u8]) -> Result<(usize, usize), VarintError> {
    let (val, len) = read_unsigned(data)?;
    let val = usize::try_from(val).map_err(|_| VarintError::Overlong)?;
    Ok((val, len))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Return the encoded byte-length of a `u64` value.
#[inline]
pub fn sizeof_unsigned(num: u64) -> usize {
    let bits = 64 - num.leading_zeros();
    (bits.max(1).div_ceil(7) as usize).min(MAX_VARINT_LEN)
}

/// Return the encoded byte-length of a zig-zag signed value.
#[inline]
pub fn sizeof_signed(num: i64) -> usize {
    sizeof_unsigned(zigzag_encode(num))
}

/// Return the encoded byte-length of a `usize` value.
#[inline]
pub fn sizeof_usize(num: usize) -> usize {
    sizeof_unsigned(num as u64)
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VarintError {
    /// The input ended before the terminating byte.
    #[error("varint truncated (input ended mid-value)")]
    Truncated,
    /// No terminating byte within 10 bytes, or bits beyond 64.
    #[error("varint overlong (exceeds 64 bits)")]
    Overlong,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_unsigned() {
        let cases: &[u64] = &[
            0,
            1,
            127,
            128,
            255,
            256,
            16383,
            16384,
            u32::MAX as u64,
            u64::MAX,
        ];
        for &val in cases {
            let bytes = encode_unsigned(val);
            let (decoded, consumed) = read_unsigned(&bytes).unwrap();
            assert_eq!(decoded, val, "roundtrip failed for {val}");
            assert_eq!(consumed, bytes.len(), "length mismatch for {val}");
            assert_eq!(sizeof_unsigned(val), bytes.len(), "sizeof mismatch for {val}");
        }
    }

    #[test]
    fn roundtrip_signed_extremes() {
        for val in [0i64, -1, 1, -64, 63, -65, 64, i64::MIN, i64::MAX] {
            let bytes = encode_signed(val);
            assert_eq!(read_signed(&bytes).unwrap(), (val, bytes.len()));
            assert_eq!(sizeof_signed(val), bytes.len());
        }
    }

    #[test]
    fn encoding_is_little_endian() {
        // 300 = 0b10_0101100: low group first with continuation bit.
        assert_eq!(encode_unsigned(300), vec![0xAC, 0x02]);
    }

    #[test]
    fn zigzag_interleaves_signs() {
        assert_eq!(zigzag_encode(0), 0);
        assert_eq!(zigzag_encode(-1), 1);
        assert_eq!(zigzag_encode(1), 2);
        assert_eq!(zigzag_encode(-2), 3);
        assert_eq!(zigzag_encode(i64::MAX), u64::MAX - 1);
        assert_eq!(zigzag_encode(i64::MIN), u64::MAX);
    }

    #[test]
    fn small_magnitudes_take_one_byte() {
        for val in -64i64..=63 {
            assert_eq!(encode_signed(val).len(), 1, "value {val}");
        }
        assert_eq!(encode_signed(64).len(), 2);
        assert_eq!(encode_signed(-65).len(), 2);
    }

    #[test]
    fn truncated_detection() {
        // All continuation bytes, no terminator.
        assert_eq!(read_unsigned(&[0x80, 0x80, 0x80]), Err(VarintError::Truncated));
        assert_eq!(read_unsigned(&[]), Err(VarintError::Truncated));
    }

    #[test]
    fn overlong_detection() {
        // Eleven bytes of continuation never terminate within the bound.
        let data = [0xFFu8; 11];
        assert_eq!(read_unsigned(&data), Err(VarintError::Overlong));

        // Tenth byte carrying more than one payload bit overflows 64 bits.
        let mut data = [0xFFu8; 10];
        data[9] = 0x02;
        assert_eq!(read_unsigned(&data), Err(VarintError::Overlong));
    }

    #[test]
    fn max_value_uses_ten_bytes() {
        let bytes = encode_unsigned(u64::MAX);
        assert_eq!(bytes.len(), MAX_VARINT_LEN);
        assert_eq!(bytes[9], 0x01);
    }

    #[test]
    fn reads_only_the_first_value() {
        let mut out = Vec::new();
        write_unsigned(&mut out, 999_999);
        write_signed(&mut out, -3);
        let (val, len) = read_unsigned(&out).unwrap();
        assert_eq!(val, 999_999);
        assert_eq!(read_signed(&out[len..]).unwrap(), (-3, 1));
    }
}

// Measurement: format version plus an optional location track.
//
// Layout:
//   0..2  format_version  u16 big-endian
//   2     track flag      0x00 absent, 0x01 present
//   -- present only --
//         track_len       unsigned varint, bytes of the six series blocks
//         series blocks   see `track`
//
// Format version 2 writes a null elevation as flag plus a zero placeholder
// value (4 bytes per null record).

use log::debug;

use super::cursor::ByteCursor;
use super::error::DecodeError;
use super::limits::DecodeLimits;
use super::track::LocationTrack;
use super::varint;

/// Format version written by this crate.
pub const FORMAT_VERSION: u16 = 2;

const TRACK_ABSENT: u8 = 0;
const TRACK_PRESENT: u8 = 1;

/// Size of the fixed header (version + track flag).
pub const HEADER_LEN: usize = 3;

/// Top-level message: a version tag and an optional track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    format_version: u16,
    track: Option<LocationTrack>,
}

impl Default for Measurement {
    fn default() -> Self {
        Self::new(FORMAT_VERSION)
    }
}

impl Measurement {
    /// A measurement without a track.
    pub fn new(format_version: u16) -> Self {
        Self {
            format_version,
            track: None,
        }
    }

    pub fn with_track(self, track: LocationTrack) -> Self {
        Self {
            track: Some(track),
            ..self
        }
    }

    #[inline]
    pub fn format_version(&self) -> u16 {
        self.format_version
    }

    pub fn track(&self) -> Option<&LocationTrack> {
        self.track.as_ref()
    }

    pub fn into_track(self) -> Option<LocationTrack> {
        self.track
    }

    /// Number of samples, zero when the track is absent.
    pub fn sample_count(&self) -> usize {
        self.track.as_ref().map_or(0, LocationTrack::len)
    }

    // -----------------------------------------------------------------------
    // Encoding
    // -----------------------------------------------------------------------

    /// Encode to a fresh buffer. Encoding cannot fail.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut out);
        out
    }

    /// Append the encoded measurement to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        let start = out.len();
        out.extend_from_slice(&self.format_version.to_be_bytes());
        match &self.track {
            None => out.push(TRACK_ABSENT),
            Some(track) => {
                out.push(TRACK_PRESENT);
                varint::write_usize(out, track.encoded_len());
                track.encode_into(out);
            }
        }
        debug!(
            "encoded measurement v{}: {} samples, {} bytes",
            self.format_version,
            self.sample_count(),
            out.len() - start
        );
    }

    /// Encoded size, computed without encoding.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN
            + self.track.as_ref().map_or(0, |track| {
                let len = track.encoded_len();
                varint::sizeof_usize(len) + len
            })
    }

    // -----------------------------------------------------------------------
    // Decoding
    // -----------------------------------------------------------------------

    /// Decode with [`DecodeLimits::default`].
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        Self::decode_with_limits(data, &DecodeLimits::default())
    }

    /// Decode a complete buffer. Trailing bytes are an error.
    pub fn decode_with_limits(data: &[u8], limits: &DecodeLimits) -> Result<Self, DecodeError> {
        if data.len() > limits.max_input_len {
            return Err(DecodeError::InputTooLarge {
                len: data.len(),
                max: limits.max_input_len,
            });
        }

        let mut cur = ByteCursor::new(data);
        let measurement = Self::decode_from(&mut cur, limits)?;
        if !cur.is_empty() {
            return Err(DecodeError::TrailingBytes {
                count: cur.remaining(),
            });
        }

        debug!(
            "decoded measurement v{}: {} samples, {} bytes",
            measurement.format_version,
            measurement.sample_count(),
            data.len()
        );
        Ok(measurement)
    }

    /// Decode one measurement from the cursor, leaving any following bytes.
    pub fn decode_from(cur: &mut ByteCursor<'_>, limits: &DecodeLimits) -> Result<Self, DecodeError> {
        let format_version = cur.read_u16_be()?;
        let track = if cur.read_flag()? {
            let declared = cur.read_usize()?;
            let mut block = cur.sub_cursor(declared)?;
            let start = block.position();
            let track = LocationTrack::decode(&mut block, limits)?;
            if !block.is_empty() {
                return Err(DecodeError::TrackLengthMismatch {
                    declared,
                    actual: block.position() - start,
                });
            }
            Some(track)
        } else {
            None
        };
        Ok(Self {
            format_version,
            track,
        })
    }
}

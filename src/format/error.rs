// Decode errors for the measurement format.

use std::fmt;

use super::varint::VarintError;

/// Which series of a location track an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Timestamp,
    Latitude,
    Longitude,
    Accuracy,
    Speed,
    Elevation,
}

impl SeriesKind {
    /// All series in wire order.
    pub const ALL: [SeriesKind; 6] = [
        SeriesKind::Timestamp,
        SeriesKind::Latitude,
        SeriesKind::Longitude,
        SeriesKind::Accuracy,
        SeriesKind::Speed,
        SeriesKind::Elevation,
    ];

    /// Tag byte written in front of the series block.
    pub fn tag(self) -> u8 {
        match self {
            SeriesKind::Timestamp => 1,
            SeriesKind::Latitude => 2,
            SeriesKind::Longitude => 3,
            SeriesKind::Accuracy => 4,
            SeriesKind::Speed => 5,
            SeriesKind::Elevation => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SeriesKind::Timestamp => "timestamp",
            SeriesKind::Latitude => "latitude",
            SeriesKind::Longitude => "longitude",
            SeriesKind::Accuracy => "accuracy",
            SeriesKind::Speed => "speed",
            SeriesKind::Elevation => "elevation",
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised while decoding a measurement.
///
/// Decoding aborts at the first error; no partially decoded value is ever
/// returned. Offsets are byte positions in the decoded buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed varint at offset {offset}: {source}")]
    MalformedVarint {
        offset: usize,
        #[source]
        source: VarintError,
    },

    #[error("truncated input at offset {offset}: need {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("{series} series has {actual} entries, track has {expected}")]
    SeriesLengthMismatch {
        series: SeriesKind,
        expected: usize,
        actual: usize,
    },

    #[error("unexpected tag at offset {offset}: expected {expected:#04X}, got {found:#04X}")]
    UnexpectedTag { offset: usize, expected: u8, found: u8 },

    #[error("invalid flag byte at offset {offset}: {value:#04X}")]
    InvalidFlag { offset: usize, value: u8 },

    #[error("record at offset {offset} declares {declared} bytes, consumed {actual}")]
    RecordLengthMismatch {
        offset: usize,
        declared: usize,
        actual: usize,
    },

    #[error("track block declares {declared} bytes, series consumed {actual}")]
    TrackLengthMismatch { declared: usize, actual: usize },

    #[error("{series} value at index {index} is out of range")]
    ValueOutOfRange { series: SeriesKind, index: usize },

    #[error("{count} trailing bytes after measurement")]
    TrailingBytes { count: usize },

    #[error("input of {len} bytes exceeds limit of {max}")]
    InputTooLarge { len: usize, max: usize },

    #[error("{series} series declares {count} samples, limit is {max}")]
    TooManySamples {
        series: SeriesKind,
        count: usize,
        max: usize,
    },
}

impl DecodeError {
    /// True for the errors that mean the buffer ended too early.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            DecodeError::TruncatedInput { .. }
                | DecodeError::MalformedVarint {
                    source: VarintError::Truncated,
                    ..
                }
        )
    }
}

/// Errors raised while assembling a track from in-memory series.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackError {
    #[error("{series} series has {actual} entries, expected {expected}")]
    SeriesLengthMismatch {
        series: SeriesKind,
        expected: usize,
        actual: usize,
    },
}

// Caller-side bounds on decode work.
//
// A length-prefixed series can claim an arbitrary element count, so decoders
// check every declared count against these limits before allocating.

/// Default maximum encoded input size (64 MiB).
pub const DEFAULT_MAX_INPUT_LEN: usize = 1 << 26;

/// Default maximum number of samples per series (16 Mi).
pub const DEFAULT_MAX_SAMPLES: usize = 1 << 24;

/// Resource limits applied while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum accepted input length in bytes.
    pub max_input_len: usize,
    /// Maximum declared entry count of any single series.
    pub max_samples: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }
}

impl DecodeLimits {
    /// No limits beyond the input buffer itself.
    pub fn unbounded() -> Self {
        Self {
            max_input_len: usize::MAX,
            max_samples: usize::MAX,
        }
    }

    pub fn with_max_input_len(self, max_input_len: usize) -> Self {
        Self {
            max_input_len,
            ..self
        }
    }

    pub fn with_max_samples(self, max_samples: usize) -> Self {
        Self {
            max_samples,
            ..self
        }
    }
}

// Compression backends for the transfer envelope.
//
// Provides a pluggable `CompressBackend` trait with built-in implementations:
//   - Stored (passthrough)
//   - Zlib/Deflate (via flate2, feature-gated `zlib`)
//
// The envelope header stores the backend ID:
//   ID 0 = stored
//   ID 1 = zlib

use std::io;

use super::UnpackError;

/// Backend ID for uncompressed payloads.
pub const STORED_ID: u8 = 0;
/// Backend ID for zlib payloads.
pub const ZLIB_ID: u8 = 1;

/// A pluggable compressor for envelope payloads.
///
/// # Implementing a custom backend
///
/// ```no_run
/// use geodelta::compress::{CompressBackend, UnpackError};
///
/// struct MyCompressor;
///
/// impl CompressBackend for MyCompressor {
///     fn id(&self) -> u8 { 42 }
///     fn compress(&self, data: &[u8]) -> std::io::Result<Vec<u8>> {
///         Ok(data.to_vec()) // placeholder
///     }
///     fn decompress(&self, data: &[u8], _limit: usize) -> Result<Vec<u8>, UnpackError> {
///         Ok(data.to_vec()) // placeholder
///     }
/// }
/// ```
pub trait CompressBackend: Send + Sync {
    /// The ID stored in the envelope header.
    fn id(&self) -> u8;

    /// Compress a payload.
    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>>;

    /// Decompress a payload, producing at most `limit` bytes.
    fn decompress(&self, data: &[u8], limit: usize) -> Result<Vec<u8>, UnpackError>;
}

// ---------------------------------------------------------------------------
// Stored backend
// ---------------------------------------------------------------------------

/// Passthrough backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stored;

impl CompressBackend for Stored {
    fn id(&self) -> u8 {
        STORED_ID
    }

    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn decompress(&self, data: &[u8], limit: usize) -> Result<Vec<u8>, UnpackError> {
        if data.len() > limit {
            return Err(UnpackError::TooLarge { max: limit });
        }
        Ok(data.to_vec())
    }
}

// ---------------------------------------------------------------------------
// Zlib backend
// ---------------------------------------------------------------------------

/// Zlib/Deflate backend (ID 1).
///
/// Uses zlib format (deflate + zlib header), not raw deflate,
/// so the stream is self-describing and includes a checksum.
#[cfg(feature = "zlib")]
#[derive(Debug, Clone, Copy)]
pub struct ZlibBackend {
    level: flate2::Compression,
}

#[cfg(feature = "zlib")]
impl ZlibBackend {
    /// Create a Zlib backend with the given compression level (0-9).
    pub fn new(level: u32) -> Self {
        Self {
            level: flate2::Compression::new(level.min(9)),
        }
    }
}

#[cfg(feature = "zlib")]
impl Default for ZlibBackend {
    fn default() -> Self {
        Self::new(6)
    }
}

#[cfg(feature = "zlib")]
impl CompressBackend for ZlibBackend {
    fn id(&self) -> u8 {
        ZLIB_ID
    }

    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        use flate2::write::ZlibEncoder;
        use io::Write;

        let mut encoder = ZlibEncoder::new(Vec::new(), self.level);
        encoder.write_all(data)?;
        encoder.finish()
    }

    fn decompress(&self, data: &[u8], limit: usize) -> Result<Vec<u8>, UnpackError> {
        use flate2::read::ZlibDecoder;
        use io::Read;

        // Read one byte past the limit to detect oversized payloads.
        let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
        let mut decoder = ZlibDecoder::new(data).take(cap);
        let mut output = Vec::new();
        decoder
            .read_to_end(&mut output)
            .map_err(|e| UnpackError::Decompress(format!("zlib: {e}")))?;
        if output.len() > limit {
            return Err(UnpackError::TooLarge { max: limit });
        }
        Ok(output)
    }
}

// ---------------------------------------------------------------------------
// Backend selection
// ---------------------------------------------------------------------------

/// Compression applied when packing an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Payload is stored as-is.
    #[default]
    Stored,
    /// Zlib with the given level (0-9).
    #[cfg(feature = "zlib")]
    Zlib { level: u32 },
}

impl Compression {
    pub fn backend(self) -> Box<dyn CompressBackend> {
        match self {
            Compression::Stored => Box::new(Stored),
            #[cfg(feature = "zlib")]
            Compression::Zlib { level } => Box::new(ZlibBackend::new(level)),
        }
    }
}

/// Look up the backend that unpacks payloads tagged with `id`.
pub fn backend_for_id(id: u8) -> Result<Box<dyn CompressBackend>, UnpackError> {
    match id {
        STORED_ID => Ok(Box::new(Stored)),
        #[cfg(feature = "zlib")]
        ZLIB_ID => Ok(Box::new(ZlibBackend::default())),
        #[cfg(not(feature = "zlib"))]
        ZLIB_ID => Err(UnpackError::Unsupported(
            "zlib envelopes require the 'zlib' feature".into(),
        )),
        other => Err(UnpackError::UnknownBackend(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_is_passthrough() {
        let data = b"track bytes";
        let packed = Stored.compress(data).unwrap();
        assert_eq!(packed, data);
        assert_eq!(Stored.decompress(&packed, 64).unwrap(), data);
    }

    #[test]
    fn stored_respects_limit() {
        assert!(matches!(
            Stored.decompress(&[0u8; 10], 9),
            Err(UnpackError::TooLarge { max: 9 })
        ));
    }

    #[cfg(feature = "zlib")]
    #[test]
    fn zlib_roundtrip() {
        let data: Vec<u8> = (0..4096u32).map(|i| (i % 7) as u8).collect();
        let backend = ZlibBackend::new(9);
        let packed = backend.compress(&data).unwrap();
        assert!(packed.len() < data.len());
        assert_eq!(backend.decompress(&packed, data.len()).unwrap(), data);
    }

    #[cfg(feature = "zlib")]
    #[test]
    fn zlib_limit_stops_inflation() {
        let data = vec![0u8; 1 << 16];
        let backend = ZlibBackend::default();
        let packed = backend.compress(&data).unwrap();
        assert!(matches!(
            backend.decompress(&packed, 1024),
            Err(UnpackError::TooLarge { max: 1024 })
        ));
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert!(matches!(backend_for_id(0x7F), Err(UnpackError::UnknownBackend(0x7F))));
    }
}

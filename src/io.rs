// File-level I/O helpers for measurements.
//
// Provides `write_measurement_file()` and `read_measurement_file()` that wrap
// encoding/decoding with buffered file I/O. Optionally computes SHA-256
// digests of the bytes on disk (feature-gated behind `file-io`).

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "file-io")]
use sha2::Digest;

use crate::compress::{self, Compression, UnpackError};
use crate::format::{DecodeLimits, Measurement};

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Statistics returned by `write_measurement_file()`.
#[derive(Debug, Clone)]
pub struct WriteStats {
    /// Number of location samples written.
    pub samples: usize,
    /// Size of the bare encoded measurement.
    pub encoded_size: u64,
    /// Bytes written to disk (envelope included).
    pub file_size: u64,
    /// SHA-256 of the file contents (if `file-io` feature is enabled).
    pub sha256: Option<[u8; 32]>,
}

/// Statistics returned by `read_measurement_file()`.
#[derive(Debug, Clone)]
pub struct ReadStats {
    /// Bytes read from disk.
    pub file_size: u64,
    /// Whether the file was a transfer envelope.
    pub packed: bool,
    /// Envelope backend id, if packed.
    pub backend: Option<u8>,
    /// Number of location samples decoded.
    pub samples: usize,
    /// SHA-256 of the file contents (if `file-io` feature is enabled).
    pub sha256: Option<[u8; 32]>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for file I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("decode error: {0}")]
    Unpack(#[from] UnpackError),
    #[error("file of {len} bytes exceeds limit of {max}")]
    TooLarge { len: u64, max: usize },
}

const BUF_SIZE: usize = 64 * 1024; // 64 KiB

#[cfg(feature = "file-io")]
fn digest(bytes: &[u8]) -> Option<[u8; 32]> {
    let mut h = sha2::Sha256::new();
    h.update(bytes);
    Some(h.finalize().into())
}

#[cfg(not(feature = "file-io"))]
fn digest(_bytes: &[u8]) -> Option<[u8; 32]> {
    None
}

/// Lowercase hex rendering of a digest.
pub fn hex_digest(digest: &[u8; 32]) -> String {
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

// ---------------------------------------------------------------------------
// Encoding to bytes / files
// ---------------------------------------------------------------------------

/// Encode a measurement, wrapping it in an envelope unless `compression` is
/// `None`.
pub fn encode_measurement(
    measurement: &Measurement,
    compression: Option<Compression>,
) -> io::Result<Vec<u8>> {
    match compression {
        Some(c) => compress::pack(measurement, c),
        None => Ok(measurement.encode()),
    }
}

/// Write `measurement` to `path`.
pub fn write_measurement_file(
    path: &Path,
    measurement: &Measurement,
    compression: Option<Compression>,
) -> Result<WriteStats, IoError> {
    let bytes = encode_measurement(measurement, compression)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(BUF_SIZE, file);
    writer.write_all(&bytes)?;
    writer.flush()?;

    Ok(WriteStats {
        samples: measurement.sample_count(),
        encoded_size: measurement.encoded_len() as u64,
        file_size: bytes.len() as u64,
        sha256: digest(&bytes),
    })
}

// ---------------------------------------------------------------------------
// Decoding from files
// ---------------------------------------------------------------------------

/// Read all of `reader`, refusing inputs larger than `max` bytes.
pub fn read_bounded<R: Read>(reader: R, max: usize) -> Result<Vec<u8>, IoError> {
    let cap = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
    let mut bytes = Vec::new();
    reader.take(cap).read_to_end(&mut bytes)?;
    if bytes.len() > max {
        return Err(IoError::TooLarge {
            len: bytes.len() as u64,
            max,
        });
    }
    Ok(bytes)
}

/// Read and decode a measurement file (bare or enveloped).
///
/// The file size is checked against `limits.max_input_len` before reading.
pub fn read_measurement_file(
    path: &Path,
    limits: &DecodeLimits,
) -> Result<(Measurement, ReadStats), IoError> {
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    if len > limits.max_input_len as u64 {
        return Err(IoError::TooLarge {
            len,
            max: limits.max_input_len,
        });
    }
    let bytes = read_bounded(file, limits.max_input_len)?;
    let backend = compress::envelope_backend(&bytes);
    let measurement = compress::decode_any(&bytes, limits)?;

    let stats = ReadStats {
        file_size: bytes.len() as u64,
        packed: backend.is_some(),
        backend,
        samples: measurement.sample_count(),
        sha256: digest(&bytes),
    };
    Ok((measurement, stats))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

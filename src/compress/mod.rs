// Transfer envelope for encoded measurements.
//
// Layout:
//   MAGIC       3 bytes, b"GDT"
//   backend_id  1 byte (see `backend`)
//   payload     encoded measurement, possibly compressed
//
// A bare measurement can never start with the magic: its third byte is the
// track flag, which only takes the values 0 and 1.
//
// - `backend`: CompressBackend trait, stored and zlib backends

pub mod backend;

pub use backend::{CompressBackend, Compression, Stored, backend_for_id};
#[cfg(feature = "zlib")]
pub use backend::ZlibBackend;

use std::io;

use log::debug;

use crate::format::{DecodeError, DecodeLimits, Measurement};

/// Envelope magic bytes.
pub const ENVELOPE_MAGIC: [u8; 3] = *b"GDT";

/// Magic plus backend id.
pub const ENVELOPE_HEADER_LEN: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum UnpackError {
    #[error("not an envelope: bad magic")]
    BadMagic,
    #[error("envelope header truncated")]
    Truncated,
    #[error("unknown compression backend id {0}")]
    UnknownBackend(u8),
    #[error("unsupported: {0}")]
    Unsupported(String),
    #[error("decompression failed: {0}")]
    Decompress(String),
    #[error("payload exceeds limit of {max} bytes")]
    TooLarge { max: usize },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// True when `data` starts with the envelope magic.
pub fn is_packed(data: &[u8]) -> bool {
    data.starts_with(&ENVELOPE_MAGIC)
}

/// Backend id of an envelope, or `None` for anything else.
pub fn envelope_backend(data: &[u8]) -> Option<u8> {
    if is_packed(data) {
        data.get(ENVELOPE_HEADER_LEN - 1).copied()
    } else {
        None
    }
}

/// Encode `measurement` and wrap it in an envelope.
pub fn pack(measurement: &Measurement, compression: Compression) -> io::Result<Vec<u8>> {
    let backend = compression.backend();
    let raw = measurement.encode();
    let payload = backend.compress(&raw)?;

    let mut out = Vec::with_capacity(ENVELOPE_HEADER_LEN + payload.len());
    out.extend_from_slice(&ENVELOPE_MAGIC);
    out.push(backend.id());
    out.extend_from_slice(&payload);
    debug!(
        "packed measurement: {} bytes raw, {} bytes enveloped (backend {})",
        raw.len(),
        out.len(),
        backend.id()
    );
    Ok(out)
}

/// Unwrap an envelope and decode the measurement inside.
///
/// The decompressed payload is bounded by `limits.max_input_len`.
pub fn unpack(data: &[u8], limits: &DecodeLimits) -> Result<Measurement, UnpackError> {
    if data.len() < ENVELOPE_HEADER_LEN {
        return if ENVELOPE_MAGIC.starts_with(data) {
            Err(UnpackError::Truncated)
        } else {
            Err(UnpackError::BadMagic)
        };
    }
    if !is_packed(data) {
        return Err(UnpackError::BadMagic);
    }
    let backend = backend_for_id(data[3])?;
    let raw = backend.decompress(&data[ENVELOPE_HEADER_LEN..], limits.max_input_len)?;
    Ok(Measurement::decode_with_limits(&raw, limits)?)
}

/// Decode either an envelope or a bare measurement.
pub fn decode_any(data: &[u8], limits: &DecodeLimits) -> Result<Measurement, UnpackError> {
    if is_packed(data) {
        unpack(data, limits)
    } else {
        Ok(Measurement::decode_with_limits(data, limits)?)
    }
}

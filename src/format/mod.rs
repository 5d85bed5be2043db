// Binary measurement format.
//
// # Modules
//
// - `varint`     : LEB128 varints and zig-zag signed mapping
// - `cursor`     : Bounded read cursor with offset-carrying errors
// - `delta`      : Delta series (first absolute, then differences)
// - `nullable`   : Nullable values with explicit null flag records
// - `track`      : Location track: six parallel series
// - `measurement`: Version header + optional track, top-level entry point
// - `limits`     : Decode resource limits
// - `error`      : Decode and track construction errors

pub mod cursor;
pub mod delta;
pub mod error;
pub mod limits;
pub mod measurement;
pub mod nullable;
pub mod track;
pub mod varint;

// Re-export key types for convenience.
pub use cursor::ByteCursor;
pub use error::{DecodeError, SeriesKind, TrackError};
pub use limits::DecodeLimits;
pub use measurement::{FORMAT_VERSION, Measurement};
pub use nullable::NullableValue;
pub use track::{LocationSample, LocationTrack, TrackBuilder};
pub use varint::VarintError;

//! Geodelta: compact delta/zig-zag encoding of GPS measurement tracks.
//!
//! The crate provides:
//! - The binary measurement format (`format`)
//! - An optional compressed transfer envelope (`compress`)
//! - File-oriented helpers (`io`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```no_run
//! use geodelta::format::{LocationSample, LocationTrack, Measurement};
//!
//! let track: LocationTrack = [
//!     LocationSample::new(1_621_582_427_000, 51_064_590, 13_699_045, 800, 1000),
//!     LocationSample::new(1_621_582_428_000, 51_064_780, 13_698_345, 500, 0)
//!         .with_elevation(48_000),
//! ]
//! .into_iter()
//! .collect();
//!
//! let measurement = Measurement::default().with_track(track);
//! let bytes = measurement.encode();
//! assert_eq!(bytes.len(), 54);
//!
//! let decoded = Measurement::decode(&bytes).unwrap();
//! assert_eq!(decoded, measurement);
//! ```

pub mod compress;
pub mod format;
pub mod io;

#[cfg(feature = "cli")]
pub mod cli;

pub use format::{DecodeError, DecodeLimits, LocationSample, LocationTrack, Measurement};

// Location track: six parallel series in fixed wire order.
//
// Block layout, repeated for every series:
//   tag    1 byte (SeriesKind::tag)
//   count  unsigned varint
//   data   delta series (numeric) or nullable records (elevation)
//
// Every populated series has the length of the timestamp series. The
// elevation series is either empty or fully populated, using explicit nulls
// for samples without elevation.

use log::trace;

use super::cursor::ByteCursor;
use super::delta;
use super::error::{DecodeError, SeriesKind, TrackError};
use super::limits::DecodeLimits;
use super::nullable::{self, NullableValue};

/// One row of a fully populated track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationSample {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Latitude in 1e-6 degrees.
    pub latitude: i32,
    /// Longitude in 1e-6 degrees.
    pub longitude: i32,
    /// Horizontal accuracy in cm.
    pub accuracy: u32,
    /// Speed in cm/s.
    pub speed: i32,
    /// Elevation in cm, if the device reported one.
    pub elevation: Option<i32>,
}

impl LocationSample {
    pub fn new(timestamp: i64, latitude: i32, longitude: i32, accuracy: u32, speed: i32) -> Self {
        Self {
            timestamp,
            latitude,
            longitude,
            accuracy,
            speed,
            elevation: None,
        }
    }

    pub fn with_elevation(self, elevation: i32) -> Self {
        Self {
            elevation: Some(elevation),
            ..self
        }
    }
}

/// GPS samples stored column-wise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationTrack {
    timestamps: Vec<i64>,
    latitudes: Vec<i32>,
    longitudes: Vec<i32>,
    accuracies: Vec<u32>,
    speeds: Vec<i32>,
    elevations: Vec<NullableValue<i32>>,
}

impl LocationTrack {
    /// A track with no samples. Still encodes a header for every series.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> TrackBuilder {
        TrackBuilder::default()
    }

    /// Assemble a track from raw series.
    ///
    /// Any non-empty series must match the timestamp series in length;
    /// series may be left empty when the recording has no data for them.
    pub fn from_series(
        timestamps: Vec<i64>,
        latitudes: Vec<i32>,
        longitudes: Vec<i32>,
        accuracies: Vec<u32>,
        speeds: Vec<i32>,
        elevations: Vec<NullableValue<i32>>,
    ) -> Result<Self, TrackError> {
        let track = Self {
            timestamps,
            latitudes,
            longitudes,
            accuracies,
            speeds,
            elevations,
        };
        match track.length_mismatch() {
            Some((series, expected, actual)) => Err(TrackError::SeriesLengthMismatch {
                series,
                expected,
                actual,
            }),
            None => Ok(track),
        }
    }

    /// Number of samples (length of the timestamp series).
    #[inline]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// True when the elevation series is populated (possibly with nulls).
    pub fn has_elevations(&self) -> bool {
        !self.elevations.is_empty()
    }

    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    pub fn latitudes(&self) -> &[i32] {
        &self.latitudes
    }

    pub fn longitudes(&self) -> &[i32] {
        &self.longitudes
    }

    pub fn accuracies(&self) -> &[u32] {
        &self.accuracies
    }

    pub fn speeds(&self) -> &[i32] {
        &self.speeds
    }

    pub fn elevations(&self) -> &[NullableValue<i32>] {
        &self.elevations
    }

    /// Entry count of one series.
    pub fn series_len(&self, series: SeriesKind) -> usize {
        match series {
            SeriesKind::Timestamp => self.timestamps.len(),
            SeriesKind::Latitude => self.latitudes.len(),
            SeriesKind::Longitude => self.longitudes.len(),
            SeriesKind::Accuracy => self.accuracies.len(),
            SeriesKind::Speed => self.speeds.len(),
            SeriesKind::Elevation => self.elevations.len(),
        }
    }

    /// Row `index`, if every core series is populated there.
    pub fn sample(&self, index: usize) -> Option<LocationSample> {
        Some(LocationSample {
            timestamp: *self.timestamps.get(index)?,
            latitude: *self.latitudes.get(index)?,
            longitude: *self.longitudes.get(index)?,
            accuracy: *self.accuracies.get(index)?,
            speed: *self.speeds.get(index)?,
            elevation: self.elevations.get(index).and_then(NullableValue::get),
        })
    }

    /// Rows of the track. Stops early on partially populated tracks.
    pub fn samples(&self) -> impl Iterator<Item = LocationSample> + '_ {
        (0..self.len()).map_while(|i| self.sample(i))
    }

    /// First series whose length disagrees with the timestamp series.
    fn length_mismatch(&self) -> Option<(SeriesKind, usize, usize)> {
        let expected = self.timestamps.len();
        [
            (SeriesKind::Latitude, self.latitudes.len()),
            (SeriesKind::Longitude, self.longitudes.len()),
            (SeriesKind::Accuracy, self.accuracies.len()),
            (SeriesKind::Speed, self.speeds.len()),
            (SeriesKind::Elevation, self.elevations.len()),
        ]
        .into_iter()
        .find(|&(_, actual)| actual != 0 && actual != expected)
        .map(|(series, actual)| (series, expected, actual))
    }

    // -----------------------------------------------------------------------
    // Encoding
    // -----------------------------------------------------------------------

    /// Append the six series blocks to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        for series in SeriesKind::ALL {
            let start = out.len();
            out.push(series.tag());
            match series {
                SeriesKind::Timestamp => delta::encode_into(out, self.timestamps.iter().copied()),
                SeriesKind::Latitude => {
                    delta::encode_into(out, self.latitudes.iter().map(|&v| i64::from(v)))
                }
                SeriesKind::Longitude => {
                    delta::encode_into(out, self.longitudes.iter().map(|&v| i64::from(v)))
                }
                SeriesKind::Accuracy => {
                    delta::encode_into(out, self.accuracies.iter().map(|&v| i64::from(v)))
                }
                SeriesKind::Speed => {
                    delta::encode_into(out, self.speeds.iter().map(|&v| i64::from(v)))
                }
                SeriesKind::Elevation => nullable::encode_series_into(out, &self.elevations),
            }
            trace!("{series} block: {} bytes", out.len() - start);
        }
    }

    /// Size of one series block, tag included.
    pub fn block_len(&self, series: SeriesKind) -> usize {
        1 + match series {
            SeriesKind::Timestamp => delta::encoded_len(self.timestamps.iter().copied()),
            SeriesKind::Latitude => delta::encoded_len(self.latitudes.iter().map(|&v| i64::from(v))),
            SeriesKind::Longitude => {
                delta::encoded_len(self.longitudes.iter().map(|&v| i64::from(v)))
            }
            SeriesKind::Accuracy => {
                delta::encoded_len(self.accuracies.iter().map(|&v| i64::from(v)))
            }
            SeriesKind::Speed => delta::encoded_len(self.speeds.iter().map(|&v| i64::from(v))),
            SeriesKind::Elevation => nullable::series_encoded_len(&self.elevations),
        }
    }

    /// Size of all six blocks, equal to what `encode_into` appends.
    pub fn encoded_len(&self) -> usize {
        SeriesKind::ALL.iter().map(|&s| self.block_len(s)).sum()
    }

    // -----------------------------------------------------------------------
    // Decoding
    // -----------------------------------------------------------------------

    /// Read the six series blocks in wire order.
    ///
    /// Fails with `SeriesLengthMismatch` as soon as a populated series
    /// disagrees with the timestamp count.
    pub fn decode(cur: &mut ByteCursor<'_>, limits: &DecodeLimits) -> Result<Self, DecodeError> {
        let max = limits.max_samples;

        cur.expect_tag(SeriesKind::Timestamp.tag())?;
        let timestamps = delta::decode(cur, SeriesKind::Timestamp, max)?;
        let expected = timestamps.len();

        let latitudes = read_numeric(cur, SeriesKind::Latitude, max, expected)?;
        let longitudes = read_numeric(cur, SeriesKind::Longitude, max, expected)?;
        let accuracies = read_numeric(cur, SeriesKind::Accuracy, max, expected)?;
        let speeds = read_numeric(cur, SeriesKind::Speed, max, expected)?;

        cur.expect_tag(SeriesKind::Elevation.tag())?;
        let elevations = nullable::decode_series(cur, SeriesKind::Elevation, max)?;
        check_len(SeriesKind::Elevation, expected, elevations.len())?;

        Ok(Self {
            timestamps,
            latitudes,
            longitudes,
            accuracies,
            speeds,
            elevations,
        })
    }
}

fn read_numeric<T: TryFrom<i64>>(
    cur: &mut ByteCursor<'_>,
    series: SeriesKind,
    max_samples: usize,
    expected: usize,
) -> Result<Vec<T>, DecodeError> {
    cur.expect_tag(series.tag())?;
    let values = delta::decode(cur, series, max_samples)?;
    check_len(series, expected, values.len())?;
    delta::narrow(values, series)
}

fn check_len(series: SeriesKind, expected: usize, actual: usize) -> Result<(), DecodeError> {
    if actual != 0 && actual != expected {
        return Err(DecodeError::SeriesLengthMismatch {
            series,
            expected,
            actual,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Accumulates samples row by row and produces an aligned track.
#[derive(Debug, Clone, Default)]
pub struct TrackBuilder {
    timestamps: Vec<i64>,
    latitudes: Vec<i32>,
    longitudes: Vec<i32>,
    accuracies: Vec<u32>,
    speeds: Vec<i32>,
    elevations: Vec<Option<i32>>,
}

impl TrackBuilder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            timestamps: Vec::with_capacity(capacity),
            latitudes: Vec::with_capacity(capacity),
            longitudes: Vec::with_capacity(capacity),
            accuracies: Vec::with_capacity(capacity),
            speeds: Vec::with_capacity(capacity),
            elevations: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, sample: LocationSample) -> &mut Self {
        self.timestamps.push(sample.timestamp);
        self.latitudes.push(sample.latitude);
        self.longitudes.push(sample.longitude);
        self.accuracies.push(sample.accuracy);
        self.speeds.push(sample.speed);
        self.elevations.push(sample.elevation);
        self
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Finish the track. The elevation series is dropped entirely when no
    /// sample carried one, otherwise every sample gets an entry.
    pub fn build(self) -> LocationTrack {
        let elevations = if self.elevations.iter().any(Option::is_some) {
            self.elevations.into_iter().map(NullableValue::from).collect()
        } else {
            Vec::new()
        };
        LocationTrack {
            timestamps: self.timestamps,
            latitudes: self.latitudes,
            longitudes: self.longitudes,
            accuracies: self.accuracies,
            speeds: self.speeds,
            elevations,
        }
    }
}

impl Extend<LocationSample> for TrackBuilder {
    fn extend<I: IntoIterator<Item = LocationSample>>(&mut self, iter: I) {
        for sample in iter {
            self.push(sample);
        }
    }
}

impl FromIterator<LocationSample> for LocationTrack {
    fn from_iter<I: IntoIterator<Item = LocationSample>>(iter: I) -> Self {
        let mut builder = TrackBuilder::default();
        builder.extend(iter);
        builder.build()
    }
}

//! Geohash to bounding-cell decoding.

use crate::alphabet::{self, BITS_PER_CHAR};
use crate::coord::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::error::{GeohashError, Result};

/// The extent of a cell along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound in decimal degrees.
    pub min: f64,
    /// Upper bound in decimal degrees.
    pub max: f64,
    /// Midpoint of the interval.
    pub center: f64,
    /// Half the interval width: the largest distance from `center` to a
    /// point inside the cell.
    pub error: f64,
}

impl Interval {
    fn from_bounds(min: f64, max: f64, error: f64) -> Self {
        Self {
            min,
            max,
            center: (min + max) / 2.0,
            error,
        }
    }

    /// Returns `[min, max, center, error]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.min, self.max, self.center, self.error]
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// The rectangle a geohash stands for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Latitude extent.
    pub lat: Interval,
    /// Longitude extent.
    pub lon: Interval,
}

impl Cell {
    /// The cell covering the whole encoding space (an empty geohash).
    pub fn world() -> Self {
        Self {
            lat: Interval::from_bounds(MIN_LAT, MAX_LAT, MAX_LAT),
            lon: Interval::from_bounds(MIN_LON, MAX_LON, MAX_LON),
        }
    }

    /// Returns the `(lat, lon)` center of the cell.
    pub fn center(&self) -> (f64, f64) {
        (self.lat.center, self.lon.center)
    }

    /// Returns `true` if the point lies inside the cell, edges included.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.lat.contains(lat) && self.lon.contains(lon)
    }
}

/// Decode a geohash into the cell it covers.
///
/// Decoding ignores ASCII case. The empty string decodes to [`Cell::world`].
///
/// # Errors
///
/// Returns [`GeohashError::InvalidCharacter`] if the input contains a
/// character outside the geohash alphabet.
///
/// # Examples
///
/// ```
/// use geohash::decode;
///
/// let cell = decode("ezs42").unwrap();
/// assert!((cell.lat.center - 42.605).abs() < 0.001);
/// assert!((cell.lon.center - -5.603).abs() < 0.001);
/// ```
pub fn decode(geohash: &str) -> Result<Cell> {
    let mut lat = (MIN_LAT, MAX_LAT);
    let mut lon = (MIN_LON, MAX_LON);
    let mut lat_error = MAX_LAT;
    let mut lon_error = MAX_LON;
    let mut is_lon_bit = true;

    for (position, character) in geohash.chars().enumerate() {
        let index = alphabet::index_of(character).ok_or(GeohashError::InvalidCharacter {
            character,
            position,
        })?;

        for shift in (0..BITS_PER_CHAR).rev() {
            let bit_set = (index >> shift) & 1 == 1;
            if is_lon_bit {
                lon_error /= 2.0;
                refine(&mut lon, bit_set);
            } else {
                lat_error /= 2.0;
                refine(&mut lat, bit_set);
            }
            is_lon_bit = !is_lon_bit;
        }
    }

    Ok(Cell {
        lat: Interval::from_bounds(lat.0, lat.1, lat_error),
        lon: Interval::from_bounds(lon.0, lon.1, lon_error),
    })
}

/// Decode a geohash straight to the `(lat, lon)` center of its cell.
pub fn decode_center(geohash: &str) -> Result<(f64, f64)> {
    decode(geohash).map(|cell| cell.center())
}

fn refine(range: &mut (f64, f64), bit_set: bool) {
    let mid = (range.0 + range.1) / 2.0;
    if bit_set {
        range.0 = mid;
    } else {
        range.1 = mid;
    }
}

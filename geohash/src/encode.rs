//! Coordinate to geohash encoding.

use crate::alphabet::{ALPHABET, BITS_PER_CHAR};
use crate::coord::{validate_coordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::error::{GeohashError, Result};

/// Longest geohash `encode` produces. At 22 characters both axes are already
/// below `f64` resolution for any coordinate.
pub const MAX_PRECISION: usize = 22;

/// Encode a coordinate as a geohash of `precision` characters.
///
/// Bits alternate between longitude and latitude, starting with longitude.
/// Each bit halves the current interval; a coordinate exactly on the midpoint
/// falls into the lower half.
///
/// # Arguments
///
/// * `lat` - Latitude in decimal degrees (-90 to 90)
/// * `lon` - Longitude in decimal degrees (-180 to 180)
/// * `precision` - Number of characters in the result (1 to [`MAX_PRECISION`])
///
/// # Errors
///
/// Returns [`GeohashError::InvalidLatitude`], [`GeohashError::InvalidLongitude`]
/// or [`GeohashError::InvalidPrecision`] if an argument is out of range.
///
/// # Examples
///
/// ```
/// use geohash::encode;
///
/// assert_eq!(encode(39.928167, 116.389550, 4).unwrap(), "wx4g");
/// assert!(encode(91.0, 0.0, 4).is_err());
/// ```
pub fn encode(lat: f64, lon: f64, precision: usize) -> Result<String> {
    validate_coordinate(lat, lon)?;
    if precision == 0 || precision > MAX_PRECISION {
        return Err(GeohashError::InvalidPrecision {
            precision: i64::try_from(precision).unwrap_or(i64::MAX),
        });
    }

    let mut lat_range = (MIN_LAT, MAX_LAT);
    let mut lon_range = (MIN_LON, MAX_LON);
    let mut is_lon_bit = true;
    let mut geohash = String::with_capacity(precision);

    for _ in 0..precision {
        let mut index = 0;
        for _ in 0..BITS_PER_CHAR {
            let (range, value) = if is_lon_bit {
                (&mut lon_range, lon)
            } else {
                (&mut lat_range, lat)
            };
            index <<= 1;
            if bisect(range, value) {
                index |= 1;
            }
            is_lon_bit = !is_lon_bit;
        }
        geohash.push(ALPHABET[index] as char);
    }

    Ok(geohash)
}

/// Narrow `range` to the half containing `value`; `true` for the upper half.
fn bisect(range: &mut (f64, f64), value: f64) -> bool {
    let mid = (range.0 + range.1) / 2.0;
    if value > mid {
        range.0 = mid;
        true
    } else {
        range.1 = mid;
        false
    }
}

/// Convert a signed precision (as received from a query string or a
/// binding) into a character count.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidPrecision`] if `precision` is not between
/// 1 and [`MAX_PRECISION`].
pub fn checked_precision(precision: i64) -> Result<usize> {
    match usize::try_from(precision) {
        Ok(value) if (1..=MAX_PRECISION).contains(&value) => Ok(value),
        _ => Err(GeohashError::InvalidPrecision { precision }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_value() {
        assert_eq!(encode(39.928167, 116.389550, 4).unwrap(), "wx4g");
        assert_eq!(encode(42.605, -5.603, 5).unwrap(), "ezs42");
        assert_eq!(encode(57.64911, 10.40744, 11).unwrap(), "u4pruydqqvj");
    }

    #[test]
    fn test_encode_length_matches_precision() {
        for precision in 1..=MAX_PRECISION {
            let geohash = encode(-33.8688, 151.2093, precision).unwrap();
            assert_eq!(geohash.len(), precision);
        }
    }

    #[test]
    fn test_encode_prefix_stable() {
        let long = encode(35.3606, 138.7274, 12).unwrap();
        let short = encode(35.3606, 138.7274, 6).unwrap();
        assert!(long.starts_with(&short));
    }

    #[test]
    fn test_encode_midpoint_goes_low() {
        // (0, 0) sits on the first midpoint of both axes
        assert_eq!(encode(0.0, 0.0, 1).unwrap(), "7");
        assert_eq!(encode(0.0, 0.0, 2).unwrap(), "7z");
        // Just past the midpoint flips to the upper half
        assert_eq!(encode(0.0, 1e-9, 1).unwrap(), "k");
    }

    #[test]
    fn test_encode_corners() {
        assert_eq!(encode(-90.0, -180.0, 4).unwrap(), "0000");
        assert_eq!(encode(90.0, 180.0, 4).unwrap(), "zzzz");
    }

    #[test]
    fn test_encode_invalid_latitude() {
        let result = encode(91.0, 0.0, 1);
        assert_eq!(result, Err(GeohashError::InvalidLatitude { lat: 91.0 }));
    }

    #[test]
    fn test_encode_invalid_longitude() {
        let result = encode(23.4, 181.2, 1);
        assert_eq!(result, Err(GeohashError::InvalidLongitude { lon: 181.2 }));
    }

    #[test]
    fn test_encode_invalid_precision() {
        let result = encode(23.4, 121.2, 0);
        assert_eq!(result, Err(GeohashError::InvalidPrecision { precision: 0 }));
    }

    #[test]
    fn test_encode_precision_above_limit() {
        assert_eq!(
            encode(0.0, 0.0, MAX_PRECISION + 1),
            Err(GeohashError::InvalidPrecision { precision: 23 })
        );
        assert_eq!(
            encode(0.0, 0.0, usize::MAX),
            Err(GeohashError::InvalidPrecision { precision: i64::MAX })
        );
    }

    #[test]
    fn test_checked_precision() {
        assert_eq!(checked_precision(4), Ok(4));
        assert_eq!(
            checked_precision(-1),
            Err(GeohashError::InvalidPrecision { precision: -1 })
        );
        assert_eq!(
            checked_precision(0),
            Err(GeohashError::InvalidPrecision { precision: 0 })
        );
        assert_eq!(checked_precision(MAX_PRECISION as i64), Ok(MAX_PRECISION));
        assert_eq!(
            checked_precision(23),
            Err(GeohashError::InvalidPrecision { precision: 23 })
        );
        assert_eq!(
            checked_precision(i64::MAX),
            Err(GeohashError::InvalidPrecision { precision: i64::MAX })
        );
    }
}

//! Coordinate range checks.
//!
//! Geohashes cover the full WGS84 range: latitude -90° to 90° and longitude
//! -180° to 180°, both bounds inclusive. `NaN` is never valid.

use crate::error::{GeohashError, Result};

/// Southern bound of the encoding space.
pub const MIN_LAT: f64 = -90.0;
/// Northern bound of the encoding space.
pub const MAX_LAT: f64 = 90.0;
/// Western bound of the encoding space.
pub const MIN_LON: f64 = -180.0;
/// Eastern bound of the encoding space.
pub const MAX_LON: f64 = 180.0;

/// Returns `true` if `lat` is within [-90, 90].
pub fn is_valid_latitude(lat: f64) -> bool {
    (MIN_LAT..=MAX_LAT).contains(&lat)
}

/// Returns `true` if `lon` is within [-180, 180].
pub fn is_valid_longitude(lon: f64) -> bool {
    (MIN_LON..=MAX_LON).contains(&lon)
}

/// Returns `true` if both coordinates are within range.
///
/// # Examples
///
/// ```
/// use geohash::coord::is_valid_coordinate;
///
/// assert!(is_valid_coordinate(39.928167, 116.389550));
/// assert!(!is_valid_coordinate(91.0, 0.0));
/// ```
pub fn is_valid_coordinate(lat: f64, lon: f64) -> bool {
    is_valid_latitude(lat) && is_valid_longitude(lon)
}

/// Checks both coordinates, reporting the first one out of range.
pub fn validate_coordinate(lat: f64, lon: f64) -> Result<()> {
    if !is_valid_latitude(lat) {
        return Err(GeohashError::InvalidLatitude { lat });
    }
    if !is_valid_longitude(lon) {
        return Err(GeohashError::InvalidLongitude { lon });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_coordinate() {
        // Valid coordinates
        assert!(is_valid_coordinate(0.0, 0.0));
        assert!(is_valid_coordinate(90.0, 180.0));
        assert!(is_valid_coordinate(-90.0, -180.0));
        assert!(is_valid_coordinate(42.605, -5.603));

        // Invalid coordinates
        assert!(!is_valid_coordinate(90.1, 0.0)); // Lat too high
        assert!(!is_valid_coordinate(-91.0, 0.0)); // Lat too low
        assert!(!is_valid_coordinate(0.0, 181.0)); // Lon too high
        assert!(!is_valid_coordinate(0.0, -180.5)); // Lon too low
        assert!(!is_valid_coordinate(f64::NAN, 0.0));
        assert!(!is_valid_coordinate(0.0, f64::INFINITY));
    }

    #[test]
    fn test_validate_reports_axis() {
        assert_eq!(validate_coordinate(10.0, 20.0), Ok(()));
        assert_eq!(
            validate_coordinate(91.0, 0.0),
            Err(GeohashError::InvalidLatitude { lat: 91.0 })
        );
        assert_eq!(
            validate_coordinate(23.4, 181.2),
            Err(GeohashError::InvalidLongitude { lon: 181.2 })
        );
    }
}

//! Error types for the geohash library.

use thiserror::Error;

/// Errors that can occur when encoding, decoding or walking geohashes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeohashError {
    /// Latitude is outside [-90, 90] or not a number.
    #[error("Invalid latitude: {lat} (valid: -90 to 90)")]
    InvalidLatitude { lat: f64 },

    /// Longitude is outside [-180, 180] or not a number.
    #[error("Invalid longitude: {lon} (valid: -180 to 180)")]
    InvalidLongitude { lon: f64 },

    /// Precision must be between 1 and `MAX_PRECISION` characters.
    #[error("Invalid precision: {precision} (valid: 1 to {})", crate::encode::MAX_PRECISION)]
    InvalidPrecision { precision: i64 },

    /// A character outside the base-32 geohash alphabet.
    #[error("Invalid geohash character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// A direction name that is not one of top/right/bottom/left.
    #[error("Invalid direction: {value:?} (expected top, right, bottom or left)")]
    InvalidDirection { value: String },
}

impl GeohashError {
    /// Returns `true` for errors caused by a bad `encode` argument
    /// (latitude, longitude or precision).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            GeohashError::InvalidLatitude { .. }
                | GeohashError::InvalidLongitude { .. }
                | GeohashError::InvalidPrecision { .. }
        )
    }
}

/// Result type alias using [`GeohashError`].
pub type Result<T> = std::result::Result<T, GeohashError>;

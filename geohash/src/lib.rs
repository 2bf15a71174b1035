//! # Geohash - Geospatial Cell Encoding
//!
//! Encode latitude/longitude pairs as short base-32 strings, decode them back
//! into the rectangle they cover, and find neighboring cells without going
//! through coordinates.
//!
//! ## Features
//!
//! - **Exact**: bit-compatible with the classic geohash encoding
//! - **String-only adjacency**: neighbors are derived from the geohash text
//! - **Stateless**: all lookup tables are computed at compile time, so every
//!   function is safe to call from any thread
//!
//! ## Quick Start
//!
//! ```
//! use geohash::{adjacent, adjacent_grid, decode, encode, Direction};
//!
//! let hash = encode(39.928167, 116.389550, 4)?;
//! assert_eq!(hash, "wx4g");
//!
//! let cell = decode(&hash)?;
//! assert!(cell.contains(39.928167, 116.389550));
//!
//! assert_eq!(adjacent(&hash, Direction::Top)?.as_deref(), Some("wx4u"));
//!
//! let grid = adjacent_grid(&hash)?;
//! assert_eq!(grid.len(), 8);
//! # Ok::<(), geohash::GeohashError>(())
//! ```
//!
//! ## Encoding
//!
//! Each character carries 5 bits. Bits alternate between longitude and
//! latitude, starting with longitude, and each bit halves the current
//! interval. A geohash of precision `p` therefore has a longitude error of
//! `180 / 2^ceil(5p/2)` and a latitude error of `90 / 2^floor(5p/2)` degrees:
//!
//! | Precision | Lat error | Lon error |
//! |-----------|-----------|-----------|
//! | 1 | ±22.5° | ±22.5° |
//! | 4 | ±0.088° | ±0.176° |
//! | 6 | ±0.0027° | ±0.0055° |
//! | 12 | ±8.4e-8° | ±1.7e-7° |
//!
//! ## Map Edges
//!
//! There is no wraparound across the poles or the antimeridian. Asking for a
//! neighbor past the edge of the map returns `None`.

pub mod adjacent;
pub mod alphabet;
pub mod coord;
pub mod decode;
pub mod direction;
pub mod encode;
pub mod error;

#[cfg(feature = "geojson")]
pub mod geojson;

// Re-export main types at crate root for convenience
pub use adjacent::{adjacent, adjacent_grid, GRID_DIRECTIONS};
pub use alphabet::ALPHABET;
pub use coord::is_valid_coordinate;
pub use decode::{decode, decode_center, Cell, Interval};
pub use direction::Direction;
pub use encode::{checked_precision, encode, MAX_PRECISION};
pub use error::{GeohashError, Result};

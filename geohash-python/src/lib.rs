//! Python bindings for the geohash library.

#![allow(clippy::useless_conversion)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

// Use fully qualified path to avoid collision with the Python module name
use ::geohash as geohash_lib;
use geohash_lib::{Direction, GeohashError, Interval};

type IntervalTuple = (f64, f64, f64, f64);

fn to_py_err(e: GeohashError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn interval_tuple(interval: Interval) -> IntervalTuple {
    let [min, max, center, error] = interval.to_array();
    (min, max, center, error)
}

/// Encode a coordinate as a geohash.
///
/// Args:
///     lat: Latitude in decimal degrees (-90 to 90).
///     lon: Longitude in decimal degrees (-180 to 180).
///     precision: Number of characters, 1 to 22 (default: 12).
///
/// Returns:
///     Lowercase geohash string.
///
/// Raises:
///     ValueError: If the coordinate or precision is out of range.
///
/// Example:
///     >>> encode(39.928167, 116.389550, 4)
///     'wx4g'
#[pyfunction]
#[pyo3(signature = (lat, lon, precision=12))]
fn encode(lat: f64, lon: f64, precision: i64) -> PyResult<String> {
    geohash_lib::checked_precision(precision)
        .and_then(|precision| geohash_lib::encode(lat, lon, precision))
        .map_err(to_py_err)
}

/// Decode a geohash into the cell it covers.
///
/// Args:
///     geohash: Geohash string (case-insensitive).
///
/// Returns:
///     Tuple of ((lat_min, lat_max, lat_center, lat_error),
///               (lon_min, lon_max, lon_center, lon_error)).
///
/// Raises:
///     ValueError: If the geohash contains a character outside the alphabet.
#[pyfunction]
fn decode(geohash: &str) -> PyResult<(IntervalTuple, IntervalTuple)> {
    let cell = geohash_lib::decode(geohash).map_err(to_py_err)?;
    Ok((interval_tuple(cell.lat), interval_tuple(cell.lon)))
}

/// Get the cell next to a geohash.
///
/// Args:
///     geohash: Geohash string (case-insensitive).
///     direction: "top", "right", "bottom" or "left"
///         ("north", "east", "south", "west" also work).
///
/// Returns:
///     Neighboring geohash, or None past the edge of the map.
///
/// Raises:
///     ValueError: If the geohash or direction is invalid.
///
/// Example:
///     >>> adjacent("wx4g", "right")
///     'wx55'
#[pyfunction]
fn adjacent(geohash: &str, direction: &str) -> PyResult<Option<String>> {
    let direction: Direction = direction.parse().map_err(to_py_err)?;
    geohash_lib::adjacent(geohash, direction).map_err(to_py_err)
}

/// Get the eight cells surrounding a geohash.
///
/// Args:
///     geohash: Geohash string (case-insensitive).
///
/// Returns:
///     List of 8 entries ordered top, top-right, right, bottom-right,
///     bottom, bottom-left, left, top-left. Entries past the edge of the
///     map are None.
///
/// Raises:
///     ValueError: If the geohash contains a character outside the alphabet.
#[pyfunction]
fn neighbors(geohash: &str) -> PyResult<Vec<Option<String>>> {
    geohash_lib::adjacent_grid(geohash)
        .map(Vec::from)
        .map_err(to_py_err)
}

/// Check whether a coordinate lies within the valid latitude/longitude ranges.
#[pyfunction]
fn is_valid_coordinate(lat: f64, lon: f64) -> bool {
    geohash_lib::is_valid_coordinate(lat, lon)
}

/// Geohash - encoding, decoding and adjacency for geohash strings.
///
/// Example:
///     >>> import geohash_rs
///     >>> geohash_rs.encode(42.605, -5.603, 5)
///     'ezs42'
///     >>> geohash_rs.neighbors("wx4g")[0]
///     'wx4u'
#[pymodule]
fn geohash_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    m.add_function(wrap_pyfunction!(adjacent, m)?)?;
    m.add_function(wrap_pyfunction!(neighbors, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid_coordinate, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("ALPHABET", std::str::from_utf8(geohash_lib::ALPHABET)?)?;
    Ok(())
}

//! GeoJSON export of geohash cells.
//!
//! This module turns decoded cells into GeoJSON polygons so they can be drawn
//! on a map. Enable the `geojson` feature to use this module.
//!
//! # Example
//!
//! ```ignore
//! use geohash::geojson::{geohash_to_feature, grid_to_feature_collection};
//!
//! let feature = geohash_to_feature("wx4g")?;
//! // {"type": "Feature", "geometry": {"type": "Polygon", ...},
//! //  "properties": {"geohash": "wx4g", "center": [116.36, 39.90], ...}}
//!
//! // The cell and its eight neighbors, ready for geojson.io
//! let collection = grid_to_feature_collection("wx4g")?;
//! println!("{}", collection);
//! ```

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value as GeoJsonValue};

use crate::adjacent::{adjacent_grid, GRID_DIRECTIONS};
use crate::alphabet;
use crate::decode::{decode, Cell};
use crate::error::Result;

/// Build the polygon outlining a cell.
///
/// The ring is closed and runs counter-clockwise from the south-west corner,
/// with positions in GeoJSON order `[lon, lat]`.
pub fn cell_to_polygon(cell: &Cell) -> Geometry {
    let ring = vec![
        vec![cell.lon.min, cell.lat.min],
        vec![cell.lon.max, cell.lat.min],
        vec![cell.lon.max, cell.lat.max],
        vec![cell.lon.min, cell.lat.max],
        vec![cell.lon.min, cell.lat.min],
    ];
    Geometry::new(GeoJsonValue::Polygon(vec![ring]))
}

/// Decode a geohash into a GeoJSON feature.
///
/// Properties: `geohash` (lowercase), `center` as `[lon, lat]`, `lat_error`
/// and `lon_error`. The feature's `bbox` is set to the cell bounds.
///
/// # Errors
///
/// Returns [`crate::GeohashError::InvalidCharacter`] if the input contains a
/// character outside the geohash alphabet.
pub fn geohash_to_feature(geohash: &str) -> Result<Feature> {
    let geohash = alphabet::normalize(geohash)?;
    let cell = decode(&geohash)?;
    Ok(cell_feature(&geohash, &cell, None))
}

/// Build a collection with the cell itself followed by its existing
/// neighbors.
///
/// Every feature carries a `position` property: `center` for the input cell,
/// otherwise its slot name (`top`, `top_right`, ...). Neighbors beyond the
/// edge of the map are left out.
///
/// # Errors
///
/// Returns [`crate::GeohashError::InvalidCharacter`] if the input contains a
/// character outside the geohash alphabet.
pub fn grid_to_feature_collection(geohash: &str) -> Result<FeatureCollection> {
    let geohash = alphabet::normalize(geohash)?;
    let grid = adjacent_grid(&geohash)?;

    let mut features = Vec::with_capacity(grid.len() + 1);
    features.push(cell_feature(&geohash, &decode(&geohash)?, Some("center")));

    for (slot, position) in grid.iter().zip(GRID_DIRECTIONS) {
        if let Some(neighbor) = slot {
            features.push(cell_feature(neighbor, &decode(neighbor)?, Some(position)));
        }
    }

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

fn cell_feature(geohash: &str, cell: &Cell, position: Option<&str>) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("geohash".to_string(), JsonValue::from(geohash));
    properties.insert(
        "center".to_string(),
        JsonValue::from(vec![cell.lon.center, cell.lat.center]),
    );
    properties.insert("lat_error".to_string(), JsonValue::from(cell.lat.error));
    properties.insert("lon_error".to_string(), JsonValue::from(cell.lon.error));
    if let Some(position) = position {
        properties.insert("position".to_string(), JsonValue::from(position));
    }

    Feature {
        bbox: Some(vec![cell.lon.min, cell.lat.min, cell.lon.max, cell.lat.max]),
        geometry: Some(cell_to_polygon(cell)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeohashError;

    #[test]
    fn test_cell_to_polygon() {
        let cell = decode("s").unwrap();
        let geometry = cell_to_polygon(&cell);

        if let GeoJsonValue::Polygon(rings) = geometry.value {
            assert_eq!(rings.len(), 1);
            let ring = &rings[0];
            assert_eq!(ring.len(), 5);
            assert_eq!(ring[0], vec![0.0, 0.0]);
            assert_eq!(ring[2], vec![45.0, 45.0]);
            assert_eq!(ring.first(), ring.last()); // closed ring
        } else {
            panic!("Expected Polygon geometry");
        }
    }

    #[test]
    fn test_geohash_to_feature() {
        let feature = geohash_to_feature("EZS42").unwrap();

        let properties = feature.properties.as_ref().unwrap();
        assert_eq!(properties["geohash"], "ezs42");
        assert_eq!(properties["lat_error"], 0.02197265625);
        assert!(properties.get("position").is_none());

        let bbox = feature.bbox.as_ref().unwrap();
        assert_eq!(bbox[0], -5.625);
        assert_eq!(bbox[3], 42.626953125);
    }

    #[test]
    fn test_geohash_to_feature_invalid() {
        let result = geohash_to_feature("ezs4a");
        assert!(matches!(
            result,
            Err(GeohashError::InvalidCharacter { position: 4, .. })
        ));
    }

    #[test]
    fn test_grid_to_feature_collection() {
        let collection = grid_to_feature_collection("wx4g").unwrap();
        assert_eq!(collection.features.len(), 9);

        let positions: Vec<_> = collection
            .features
            .iter()
            .map(|f| f.properties.as_ref().unwrap()["position"].clone())
            .collect();
        assert_eq!(positions[0], "center");
        assert_eq!(positions[1], "top");
        assert_eq!(positions[2], "top_right");
        assert_eq!(positions[8], "top_left");
    }

    #[test]
    fn test_grid_to_feature_collection_skips_edge() {
        let collection = grid_to_feature_collection("zvxupc").unwrap();
        // Three eastern neighbors fall off the map
        assert_eq!(collection.features.len(), 6);
    }
}

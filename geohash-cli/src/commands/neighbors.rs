use anyhow::{Context, Result};
use geohash::{Direction, GRID_DIRECTIONS};
use serde_json::{Map, Value};

pub fn run_single(hash: &str, direction: Direction) -> Result<()> {
    println!("{}", format_single(hash, direction)?);
    Ok(())
}

pub fn run(hash: &str, json: bool, geojson: bool) -> Result<()> {
    println!("{}", format_grid(hash, json, geojson)?);
    Ok(())
}

fn format_single(hash: &str, direction: Direction) -> Result<String> {
    let neighbor = geohash::adjacent(hash, direction)
        .with_context(|| format!("Failed to find neighbor of '{}'", hash))?;

    Ok(neighbor.unwrap_or_else(|| "none".to_string()))
}

fn format_grid(hash: &str, json: bool, geojson: bool) -> Result<String> {
    if geojson {
        let collection = geohash::geojson::grid_to_feature_collection(hash)
            .with_context(|| format!("Failed to build grid for '{}'", hash))?;
        return Ok(serde_json::to_string_pretty(&collection)?);
    }

    let grid = geohash::adjacent_grid(hash)
        .with_context(|| format!("Failed to find neighbors of '{}'", hash))?;

    if json {
        // Edge-of-map slots are serialized as null
        let mut object: Map<String, Value> = Map::new();
        object.insert("geohash".to_string(), Value::from(hash.to_lowercase()));
        for (position, neighbor) in GRID_DIRECTIONS.iter().zip(grid) {
            object.insert(position.to_string(), Value::from(neighbor));
        }
        return Ok(serde_json::to_string(&object)?);
    }

    // 3x3 block with the input in the middle
    let cell = |slot: usize| grid[slot].clone().unwrap_or_else(|| "-".to_string());
    let center = hash.to_lowercase();
    let width = center.len().max(1);
    let rows = [
        [cell(7), cell(0), cell(1)],
        [cell(6), center.clone(), cell(2)],
        [cell(5), cell(4), cell(3)],
    ];

    Ok(rows
        .iter()
        .map(|[a, b, c]| format!("{:>w$}  {:>w$}  {:>w$}", a, b, c, w = width))
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_neighbor() {
        assert_eq!(format_single("wx4g", Direction::Right).unwrap(), "wx55");
    }

    #[test]
    fn test_single_neighbor_at_map_edge() {
        assert_eq!(format_single("zzzz", Direction::Top).unwrap(), "none");
    }

    #[test]
    fn test_grid_json_matches_service_keys() {
        let output = format_grid("zvxupc", true, false).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["geohash"], "zvxupc");
        assert_eq!(json["top"], "zvxupf");
        assert!(json["top_right"].is_null());
        assert!(json["right"].is_null());
        assert!(json["bottom_right"].is_null());
        assert_eq!(json["bottom_left"], "zvxup8");
        assert_eq!(json["top_left"], "zvxupd");
    }

    #[test]
    fn test_grid_text() {
        let output = format_grid("wx4g", false, false).unwrap();
        assert_eq!(
            output,
            "wx4s  wx4u  wx5h\nwx4e  wx4g  wx55\nwx4d  wx4f  wx54"
        );
    }

    #[test]
    fn test_grid_text_marks_missing_cells() {
        let output = format_grid("z", false, false).unwrap();
        let first_row: Vec<&str> = output.lines().next().unwrap().split_whitespace().collect();
        assert_eq!(first_row, vec!["-", "-", "-"]);
    }

    #[test]
    fn test_grid_geojson() {
        let output = format_grid("wx4g", false, true).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn test_invalid_geohash() {
        assert!(format_grid("wx4o", true, false).is_err());
    }
}

//! Neighboring cells, computed on the geohash string alone.
//!
//! Stepping one cell in a direction replaces the last character with its
//! neighbor from the lookup tables. When the last character sits on the edge
//! of its parent cell, the parent (the prefix) has to step in the same
//! direction first, which can cascade all the way to the first character.
//! A cascade that runs off the first character means the requested cell lies
//! beyond the edge of the map: there is no wrap across the poles or the
//! antimeridian.

use crate::alphabet::{self, Parity};
use crate::direction::Direction;
use crate::error::Result;

/// Labels for the slots returned by [`adjacent_grid`], in order.
pub const GRID_DIRECTIONS: [&str; 8] = [
    "top",
    "top_right",
    "right",
    "bottom_right",
    "bottom",
    "bottom_left",
    "left",
    "top_left",
];

/// Returns the geohash of the cell next to `geohash` in `direction`.
///
/// The result has the same length as the input and is lowercase.
/// `Ok(None)` means no such cell exists: the input is empty, or the step
/// would cross the edge of the map.
///
/// # Errors
///
/// Returns [`crate::GeohashError::InvalidCharacter`] if the input contains a
/// character outside the geohash alphabet.
///
/// # Examples
///
/// ```
/// use geohash::{adjacent, Direction};
///
/// assert_eq!(adjacent("wx4g", Direction::Top).unwrap().as_deref(), Some("wx4u"));
/// assert_eq!(adjacent("wx4g", Direction::Right).unwrap().as_deref(), Some("wx55"));
/// assert_eq!(adjacent("zzzz", Direction::Top).unwrap(), None);
/// ```
pub fn adjacent(geohash: &str, direction: Direction) -> Result<Option<String>> {
    let geohash = alphabet::normalize(geohash)?;
    Ok(step(&geohash, direction))
}

/// Returns the eight cells surrounding `geohash`, clockwise from the top:
/// `[top, top-right, right, bottom-right, bottom, bottom-left, left, top-left]`.
///
/// Diagonals are reached through the vertical neighbor. Slots past the edge
/// of the map are `None`.
///
/// # Errors
///
/// Returns [`crate::GeohashError::InvalidCharacter`] if the input contains a
/// character outside the geohash alphabet.
///
/// # Examples
///
/// ```
/// use geohash::adjacent_grid;
///
/// let grid = adjacent_grid("wx4g").unwrap();
/// assert_eq!(grid[0].as_deref(), Some("wx4u"));
/// assert_eq!(grid[1].as_deref(), Some("wx5h"));
/// ```
pub fn adjacent_grid(geohash: &str) -> Result<[Option<String>; 8]> {
    let geohash = alphabet::normalize(geohash)?;

    let top = step(&geohash, Direction::Top);
    let bottom = step(&geohash, Direction::Bottom);
    let diagonal = |vertical: &Option<String>, direction| {
        vertical
            .as_deref()
            .and_then(|cell| step(cell, direction))
    };

    let top_right = diagonal(&top, Direction::Right);
    let top_left = diagonal(&top, Direction::Left);
    let bottom_right = diagonal(&bottom, Direction::Right);
    let bottom_left = diagonal(&bottom, Direction::Left);

    Ok([
        top,
        top_right,
        step(&geohash, Direction::Right),
        bottom_right,
        bottom,
        bottom_left,
        step(&geohash, Direction::Left),
        top_left,
    ])
}

/// Recursive step over an already normalized geohash.
fn step(geohash: &str, direction: Direction) -> Option<String> {
    let mut chars = geohash.chars();
    let last = chars.next_back()?;
    let prefix = chars.as_str();
    let parity = Parity::of_length(geohash.len());

    let mut cell = if alphabet::is_on_border(parity, direction, last) {
        step(prefix, direction)?
    } else {
        prefix.to_string()
    };
    cell.push(alphabet::neighbor(parity, direction, last)?);
    Some(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeohashError;

    fn neighbor_of(geohash: &str, direction: Direction) -> Option<String> {
        adjacent(geohash, direction).unwrap()
    }

    #[test]
    fn test_adjacent_cardinal() {
        assert_eq!(neighbor_of("wx4g", Direction::Top).as_deref(), Some("wx4u"));
        assert_eq!(neighbor_of("wx4g", Direction::Right).as_deref(), Some("wx55"));
        assert_eq!(neighbor_of("wx4g", Direction::Bottom).as_deref(), Some("wx4f"));
        assert_eq!(neighbor_of("wx4g", Direction::Left).as_deref(), Some("wx4e"));
    }

    #[test]
    fn test_adjacent_chained() {
        assert_eq!(neighbor_of("wx4u", Direction::Left).as_deref(), Some("wx4s"));
        assert_eq!(neighbor_of("wx4u", Direction::Right).as_deref(), Some("wx5h"));
        assert_eq!(neighbor_of("wx4f", Direction::Left).as_deref(), Some("wx4d"));
        assert_eq!(neighbor_of("wx4f", Direction::Right).as_deref(), Some("wx54"));
    }

    #[test]
    fn test_adjacent_uppercase_input() {
        assert_eq!(neighbor_of("WX4G", Direction::Top).as_deref(), Some("wx4u"));
    }

    #[test]
    fn test_adjacent_empty() {
        assert_eq!(neighbor_of("", Direction::Top), None);
    }

    #[test]
    fn test_adjacent_map_edges() {
        assert_eq!(neighbor_of("z", Direction::Top), None);
        assert_eq!(neighbor_of("z", Direction::Right), None);
        assert_eq!(neighbor_of("0", Direction::Left), None);
        assert_eq!(neighbor_of("0", Direction::Bottom), None);
        assert_eq!(neighbor_of("zzzz", Direction::Top), None);
        assert_eq!(neighbor_of("zzzz", Direction::Left).as_deref(), Some("zzzx"));
    }

    #[test]
    fn test_adjacent_single_character() {
        assert_eq!(neighbor_of("0", Direction::Top).as_deref(), Some("2"));
        assert_eq!(neighbor_of("0", Direction::Right).as_deref(), Some("1"));
        assert_eq!(neighbor_of("u", Direction::Right).as_deref(), Some("v"));
    }

    #[test]
    fn test_adjacent_invalid_character() {
        assert_eq!(
            adjacent("wx4a", Direction::Top),
            Err(GeohashError::InvalidCharacter {
                character: 'a',
                position: 3
            })
        );
        // Rejected even when the bad character would never be looked up
        assert!(adjacent("o0", Direction::Top).is_err());
    }

    #[test]
    fn test_adjacent_grid_order() {
        let grid = adjacent_grid("wx4g").unwrap();
        let expected = [
            "wx4u", "wx5h", "wx55", "wx54", "wx4f", "wx4d", "wx4e", "wx4s",
        ];
        for (slot, want) in grid.iter().zip(expected) {
            assert_eq!(slot.as_deref(), Some(want));
        }
    }

    #[test]
    fn test_adjacent_grid_single_character() {
        let grid = adjacent_grid("s").unwrap();
        let cells: Vec<_> = grid.iter().map(|c| c.as_deref().unwrap()).collect();
        assert_eq!(cells, ["u", "v", "t", "m", "k", "7", "e", "g"]);
    }

    #[test]
    fn test_adjacent_grid_east_edge() {
        let grid = adjacent_grid("zvxupc").unwrap();
        assert_eq!(grid[0].as_deref(), Some("zvxupf"));
        assert_eq!(grid[1], None);
        assert_eq!(grid[2], None);
        assert_eq!(grid[3], None);
        assert_eq!(grid[4].as_deref(), Some("zvxupb"));
        assert_eq!(grid[5].as_deref(), Some("zvxup8"));
        assert_eq!(grid[6].as_deref(), Some("zvxup9"));
        assert_eq!(grid[7].as_deref(), Some("zvxupd"));
    }

    #[test]
    fn test_adjacent_grid_invalid() {
        assert!(adjacent_grid("zvxupa").is_err());
    }

    #[test]
    fn test_grid_labels_match_order() {
        assert_eq!(GRID_DIRECTIONS[0], Direction::Top.name());
        assert_eq!(GRID_DIRECTIONS[2], Direction::Right.name());
        assert_eq!(GRID_DIRECTIONS[4], Direction::Bottom.name());
        assert_eq!(GRID_DIRECTIONS[6], Direction::Left.name());
    }
}

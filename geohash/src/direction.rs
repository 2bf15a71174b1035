//! Cardinal directions used by the adjacency engine.

use std::fmt;
use std::str::FromStr;

use crate::error::GeohashError;

/// One of the four cardinal steps between neighboring cells.
///
/// `Top` is north (increasing latitude) and `Right` is east (increasing
/// longitude).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// All four directions, clockwise from `Top`.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Returns the direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    /// Swaps the latitude and longitude roles of the direction.
    ///
    /// Odd-position characters split latitude first, so their grid is the
    /// even grid mirrored across the diagonal.
    pub(crate) const fn transpose(self) -> Self {
        match self {
            Direction::Top => Direction::Right,
            Direction::Right => Direction::Top,
            Direction::Bottom => Direction::Left,
            Direction::Left => Direction::Bottom,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name of the direction.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = GeohashError;

    /// Parses `top`/`right`/`bottom`/`left` (or `north`/`east`/`south`/`west`),
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" | "north" | "n" => Ok(Direction::Top),
            "right" | "east" | "e" => Ok(Direction::Right),
            "bottom" | "south" | "s" => Ok(Direction::Bottom),
            "left" | "west" | "w" => Ok(Direction::Left),
            _ => Err(GeohashError::InvalidDirection {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_transpose_swaps_axes() {
        assert_eq!(Direction::Top.transpose(), Direction::Right);
        assert_eq!(Direction::Left.transpose(), Direction::Bottom);
        for direction in Direction::ALL {
            assert_eq!(direction.transpose().transpose(), direction);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("top".parse::<Direction>().unwrap(), Direction::Top);
        assert_eq!("EAST".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!(" south ".parse::<Direction>().unwrap(), Direction::Bottom);
        assert_eq!("w".parse::<Direction>().unwrap(), Direction::Left);
        assert!(matches!(
            "up".parse::<Direction>(),
            Err(GeohashError::InvalidDirection { .. })
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>().unwrap(), direction);
        }
    }
}

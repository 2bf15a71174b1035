//! The base-32 geohash alphabet and the neighbor/border lookup tables.
//!
//! # Grid Layout
//!
//! Each character picks one of 32 sub-cells of its parent. The last
//! character of an even-length geohash starts on a latitude bit, so its 5 bits
//! split latitude, longitude, latitude, longitude, latitude and lay the
//! alphabet out as a 4×8 grid:
//!
//! ```text
//! p  r  x  z
//! n  q  w  y
//! j  m  t  v
//! h  k  s  u
//! 5  7  e  g
//! 4  6  d  f
//! 1  3  9  c
//! 0  2  8  b
//! ```
//!
//! Odd positions start on a longitude bit and produce the transposed 8×4
//! grid. Only the even tables are written out; odd lookups transpose the
//! direction (`Top`↔`Right`, `Bottom`↔`Left`) and reuse them.
//!
//! All tables are computed at compile time.

use crate::direction::Direction;
use crate::error::{GeohashError, Result};

/// The 32 geohash symbols, ordered by their 5-bit value.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Number of bits encoded by one character.
pub const BITS_PER_CHAR: usize = 5;

const INVALID: u8 = u8::MAX;

/// ASCII byte → alphabet index, uppercase letters included.
const INDEX: [u8; 128] = build_index();

/// Even-position neighbor tables in reverse form: entry `i` is the character
/// whose neighbor in that direction is `ALPHABET[i]`. Ordered by
/// [`Direction::index`].
const EVEN_NEIGHBORS_REVERSE: [&[u8; 32]; 4] = [
    b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
    b"bc01fg45238967deuvhjyznpkmstqrwx",
    b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
    b"238967debc01fg45kmstqrwxuvhjyznp",
];

/// Even-position characters on the edge of their parent, per direction.
const EVEN_BORDERS: [&[u8]; 4] = [b"prxz", b"bcfguvyz", b"028b", b"0145hjnp"];

/// Forward neighbor tables: `EVEN_NEIGHBORS[d][i]` is the neighbor of
/// `ALPHABET[i]` in direction `d`.
const EVEN_NEIGHBORS: [[u8; 32]; 4] = [
    invert(EVEN_NEIGHBORS_REVERSE[0]),
    invert(EVEN_NEIGHBORS_REVERSE[1]),
    invert(EVEN_NEIGHBORS_REVERSE[2]),
    invert(EVEN_NEIGHBORS_REVERSE[3]),
];

/// Border sets as bitmasks over alphabet indices.
const EVEN_BORDER_MASKS: [u32; 4] = [
    border_mask(EVEN_BORDERS[0]),
    border_mask(EVEN_BORDERS[1]),
    border_mask(EVEN_BORDERS[2]),
    border_mask(EVEN_BORDERS[3]),
];

const fn build_index() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        let c = ALPHABET[i];
        table[c as usize] = i as u8;
        table[c.to_ascii_uppercase() as usize] = i as u8;
        i += 1;
    }
    table
}

const fn invert(reverse: &[u8; 32]) -> [u8; 32] {
    let mut forward = [0u8; 32];
    let mut i = 0;
    while i < reverse.len() {
        forward[INDEX[reverse[i] as usize] as usize] = ALPHABET[i];
        i += 1;
    }
    forward
}

const fn border_mask(chars: &[u8]) -> u32 {
    let mut mask = 0;
    let mut i = 0;
    while i < chars.len() {
        mask |= 1 << INDEX[chars[i] as usize];
        i += 1;
    }
    mask
}

/// Position class of a character inside a geohash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Parity of the last character of a geohash with `len` characters.
    pub fn of_length(len: usize) -> Self {
        if len % 2 == 1 {
            Parity::Odd
        } else {
            Parity::Even
        }
    }

    /// Direction to look up in the even tables for this parity.
    fn table_direction(self, direction: Direction) -> Direction {
        match self {
            Parity::Even => direction,
            Parity::Odd => direction.transpose(),
        }
    }
}

/// Returns the 5-bit value of a geohash character, ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use geohash::alphabet::index_of;
///
/// assert_eq!(index_of('0'), Some(0));
/// assert_eq!(index_of('Z'), Some(31));
/// assert_eq!(index_of('a'), None);
/// ```
pub fn index_of(c: char) -> Option<usize> {
    let byte = u8::try_from(c).ok()?;
    match INDEX.get(byte as usize) {
        Some(&index) if index != INVALID => Some(index as usize),
        _ => None,
    }
}

/// Returns the character with the given 5-bit value.
pub fn char_at(index: usize) -> Option<char> {
    ALPHABET.get(index).map(|&b| b as char)
}

/// Returns the neighbor of `c` in `direction` within the same parent cell
/// grid, ignoring wraparound. `None` if `c` is not a geohash character.
pub fn neighbor(parity: Parity, direction: Direction, c: char) -> Option<char> {
    let index = index_of(c)?;
    let table = &EVEN_NEIGHBORS[parity.table_direction(direction).index()];
    Some(table[index] as char)
}

/// Returns `true` if stepping from `c` in `direction` leaves the parent cell.
pub fn is_on_border(parity: Parity, direction: Direction, c: char) -> bool {
    match index_of(c) {
        Some(index) => {
            EVEN_BORDER_MASKS[parity.table_direction(direction).index()] & (1 << index) != 0
        }
        None => false,
    }
}

/// Lowercases a geohash and checks every character against the alphabet.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidCharacter`] for the first character that is
/// not part of the alphabet.
pub fn normalize(geohash: &str) -> Result<String> {
    geohash
        .chars()
        .enumerate()
        .map(|(position, character)| {
            let lower = character.to_ascii_lowercase();
            match index_of(lower) {
                Some(_) => Ok(lower),
                None => Err(GeohashError::InvalidCharacter {
                    character,
                    position,
                }),
            }
        })
        .collect()
}

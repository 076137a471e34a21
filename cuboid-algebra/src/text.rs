//! Parsing of the comma-separated text forms of [`Point`], [`Cuboid`] and [`Points`].
//!
//! The matching [`Display`](core::fmt::Display) implementations live alongside each type.

use alloc::string::{String, ToString as _};
use alloc::vec::Vec;
use core::num::ParseIntError;
use core::str::FromStr;

use crate::math::{Coordinate, Cuboid, InvertedCuboidError, Point};
use crate::set::Points;

/// Error from parsing the text form of a [`Point`], [`Cuboid`] or [`Points`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The text did not contain the number of coordinates the type needs.
    #[non_exhaustive]
    #[error("expected {expected} comma-separated coordinates, found {found}")]
    WrongCount {
        /// Number of coordinates the type needs.
        expected: usize,
        /// Number of comma-separated items in the text.
        found: usize,
    },

    /// The text was a list of points whose length was not a multiple of 3.
    #[non_exhaustive]
    #[error("expected a multiple of 3 comma-separated coordinates, found {found}")]
    NotTriples {
        /// Number of comma-separated items in the text.
        found: usize,
    },

    /// One of the comma-separated items was not an integer in the range of [`Coordinate`].
    #[non_exhaustive]
    #[error("invalid coordinate {text:?}")]
    InvalidCoordinate {
        /// The offending item, with surrounding whitespace removed.
        text: String,
        /// Why the item could not be parsed.
        #[source]
        source: ParseIntError,
    },

    /// The coordinates were valid but described a cuboid whose maximum is less than its
    /// minimum.
    #[error(transparent)]
    Inverted(#[from] InvertedCuboidError),
}

/// Splits `text` on commas and parses every item as a [`Coordinate`].
fn coordinates(text: &str) -> Result<Vec<Coordinate>, ParseError> {
    text.split(',')
        .map(|item| {
            let item = item.trim();
            item.parse::<Coordinate>()
                .map_err(|source| ParseError::InvalidCoordinate {
                    text: item.to_string(),
                    source,
                })
        })
        .collect()
}

/// Like [`coordinates()`], but also requires exactly `N` of them.
fn exact_coordinates<const N: usize>(text: &str) -> Result<[Coordinate; N], ParseError> {
    let found = text.split(',').count();
    if found != N {
        return Err(ParseError::WrongCount { expected: N, found });
    }
    coordinates(text)?
        .try_into()
        .map_err(|_: Vec<Coordinate>| ParseError::WrongCount { expected: N, found })
}

/// Parses `x,y,z`.
impl FromStr for Point {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        exact_coordinates::<3>(s).map(Point::from)
    }
}

/// Parses `x1,y1,z1,x2,y2,z2`, where the first point is the minimum corner.
///
/// The corners are not reordered; if the second is less than the first on any axis, the
/// result is [`ParseError::Inverted`].
impl FromStr for Cuboid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x1, y1, z1, x2, y2, z2] = exact_coordinates::<6>(s)?;
        Ok(Cuboid::checked_new([x1, y1, z1], [x2, y2, z2])?)
    }
}

/// Parses a comma-separated list of coordinates, three per point.
/// Empty or all-whitespace text is an empty list.
impl FromStr for Points {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Points::new());
        }
        let coordinates = coordinates(s)?;
        if coordinates.len() % 3 != 0 {
            return Err(ParseError::NotTriples {
                found: coordinates.len(),
            });
        }
        Ok(coordinates
            .chunks_exact(3)
            .map(|chunk| Point::new(chunk[0], chunk[1], chunk[2]))
            .collect())
    }
}

//! Numeric types used for coordinates and related quantities.

use euclid::Vector3D;

/// Coordinates of lattice points.
pub type Coordinate = i64;

/// Number of lattice points in, or volume of, a region.
///
/// This is wider than [`Coordinate`] so that the count for any single axis always fits,
/// but products of several axes may still overflow; operations returning it are checked.
pub type PointCount = u128;

/// Unit marker for [`euclid`] types whose coordinates are in lattice space.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Lattice {}

/// Offsets between [`Point`](crate::math::Point)s.
pub type Vector = Vector3D<Coordinate, Lattice>;

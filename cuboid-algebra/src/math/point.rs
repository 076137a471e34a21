use core::fmt;

use crate::math::{Axis, Coordinate, Lattice, Vector};

/// A lattice point: a point in 3-D space whose coordinates are all integers.
///
/// Points are ordered lexicographically by `(x, y, z)`; this is the order used by
/// [`Points::sorted()`](crate::set::Points::sorted) and the order in which
/// [`Cuboid::interior_points()`](crate::math::Cuboid::interior_points) visits them.
///
/// The text form, produced by [`Display`](fmt::Display) and accepted by
/// [`FromStr`](core::str::FromStr), is three comma-separated integers, `x,y,z`.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[allow(missing_docs, clippy::exhaustive_structs)]
pub struct Point {
    pub x: Coordinate,
    pub y: Coordinate,
    pub z: Coordinate,
}

impl Point {
    /// Equal to `Point::new(0, 0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    /// Construct `Point { x, y, z }` from the given coordinates.
    #[inline]
    pub const fn new(x: Coordinate, y: Coordinate, z: Coordinate) -> Self {
        Self { x, y, z }
    }

    /// Componentwise [`Coordinate::checked_add()`].
    #[must_use]
    #[inline]
    pub fn checked_add(self, v: Vector) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(v.x)?,
            y: self.y.checked_add(v.y)?,
            z: self.z.checked_add(v.z)?,
        })
    }

    /// Multiplies every coordinate by `factor`.
    ///
    /// Panics on overflow.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn scale(self, factor: Coordinate) -> Self {
        self.map(|c| c * factor)
    }

    /// Componentwise minimum.
    ///
    /// ```
    /// use cuboid_algebra::math::Point;
    ///
    /// assert_eq!(
    ///     Point::new(1, 5, -3).min(Point::new(2, 0, -3)),
    ///     Point::new(1, 0, -3),
    /// );
    /// ```
    #[must_use]
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
        }
    }

    /// Componentwise maximum.
    #[must_use]
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            z: self.z.max(other.z),
        }
    }

    /// Returns a copy of `self` with the coordinate on `axis` replaced by `other`'s.
    ///
    /// ```
    /// use cuboid_algebra::math::{Axis, Point};
    ///
    /// assert_eq!(
    ///     Point::new(1, 2, 3).snap(Point::new(7, 8, 9), Axis::Y),
    ///     Point::new(1, 8, 3),
    /// );
    /// ```
    #[must_use]
    #[inline]
    pub fn snap(mut self, other: Self, axis: Axis) -> Self {
        self[axis] = other[axis];
        self
    }

    /// Apply a function to each coordinate independently.
    #[expect(clippy::return_self_not_must_use)]
    #[inline]
    pub fn map(self, mut f: impl FnMut(Coordinate) -> Coordinate) -> Self {
        Self {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { x, y, z } = self;
        write!(f, "({x:+?}, {y:+?}, {z:+?})")
    }
}

/// Formats the point as `x,y,z`, the same form that [`str::parse()`] accepts.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { x, y, z } = self;
        write!(f, "{x},{y},{z}")
    }
}

mod arithmetic {
    use super::*;
    use core::ops;

    /// Panics on overflow; use [`Point::checked_add()`] where that is possible.
    impl ops::Add<Vector> for Point {
        type Output = Self;
        #[inline]
        fn add(self, rhs: Vector) -> Self::Output {
            Self {
                x: self.x + rhs.x,
                y: self.y + rhs.y,
                z: self.z + rhs.z,
            }
        }
    }
    impl ops::AddAssign<Vector> for Point {
        #[inline]
        fn add_assign(&mut self, rhs: Vector) {
            *self = *self + rhs;
        }
    }

    impl ops::Sub<Point> for Point {
        type Output = Vector;
        #[inline]
        fn sub(self, rhs: Point) -> Self::Output {
            Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
        }
    }

    impl ops::Index<Axis> for Point {
        type Output = Coordinate;
        #[inline]
        fn index(&self, index: Axis) -> &Self::Output {
            match index {
                Axis::X => &self.x,
                Axis::Y => &self.y,
                Axis::Z => &self.z,
            }
        }
    }
    impl ops::IndexMut<Axis> for Point {
        #[inline]
        fn index_mut(&mut self, index: Axis) -> &mut Self::Output {
            match index {
                Axis::X => &mut self.x,
                Axis::Y => &mut self.y,
                Axis::Z => &mut self.z,
            }
        }
    }
}

mod conversion {
    use super::*;
    use euclid::Point3D;

    impl From<Point> for [Coordinate; 3] {
        #[inline]
        fn from(Point { x, y, z }: Point) -> [Coordinate; 3] {
            [x, y, z]
        }
    }
    impl From<[Coordinate; 3]> for Point {
        #[inline]
        fn from([x, y, z]: [Coordinate; 3]) -> Self {
            Self { x, y, z }
        }
    }

    impl From<Point> for Point3D<Coordinate, Lattice> {
        #[inline]
        fn from(Point { x, y, z }: Point) -> Self {
            Point3D::new(x, y, z)
        }
    }
    impl From<Point3D<Coordinate, Lattice>> for Point {
        #[inline]
        fn from(Point3D { x, y, z, _unit }: Point3D<Coordinate, Lattice>) -> Self {
            Self { x, y, z }
        }
    }
}

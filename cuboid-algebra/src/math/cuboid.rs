//! Axis-aligned integer-coordinate boxes ([`Cuboid`]).

use core::fmt;
use core::ops::RangeInclusive;

use crate::math::{Axis, Coordinate, Corner, Face6, Point, PointCount, PointIter, Vector};
use crate::set::Points;

/// An axis-aligned box in integer space, inclusive of its boundary.
///
/// A [`Cuboid`] is described by its minimum and maximum corners, which are both
/// [contained](Self::contains) in it. The two corners may be equal (a single point) or share
/// some coordinates (a flat box or a line); all such boxes are valid and nonempty.
///
/// There are two different ways to measure a cuboid:
///
/// * [`Cuboid::points_count()`] counts the lattice points it contains, which is what every
///   decomposition in this library conserves.
/// * [`Cuboid::volume()`] measures the continuous region between the corners, so that a
///   single point has volume 0.
///
/// The text form, produced by [`Display`](fmt::Display) and accepted by
/// [`FromStr`](core::str::FromStr), is the minimum corner followed by the maximum corner:
/// `x1,y1,z1,x2,y2,z2`.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Cuboid {
    min: Point,
    /// Constructor checks ensure this is not smaller than `min` on any axis.
    max: Point,
}

impl Cuboid {
    /// Constructs a [`Cuboid`] from its minimum and maximum corners, inclusive.
    ///
    /// Panics if `max` is less than `min` on any axis.
    /// Use [`Cuboid::checked_new()`] to avoid panics.
    ///
    /// ```
    /// use cuboid_algebra::math::{Cuboid, Point};
    ///
    /// let c = Cuboid::new([0, 0, 0], [1, 1, 1]);
    /// assert!(c.contains(Point::new(1, 1, 1)));
    /// assert_eq!(c.points_count(), Some(8));
    /// assert_eq!(c.volume(), Some(1));
    /// ```
    #[track_caller]
    pub fn new(min: impl Into<Point>, max: impl Into<Point>) -> Self {
        Self::checked_new(min, max).expect("Cuboid::new")
    }

    /// Constructs a [`Cuboid`] from its minimum and maximum corners, inclusive.
    ///
    /// Returns [`Err`] if `max` is less than `min` on any axis.
    pub fn checked_new(
        min: impl Into<Point>,
        max: impl Into<Point>,
    ) -> Result<Self, InvertedCuboidError> {
        Self::const_checked_new(min.into(), max.into())
    }

    pub(crate) const fn const_checked_new(
        min: Point,
        max: Point,
    ) -> Result<Self, InvertedCuboidError> {
        if max.x < min.x || max.y < min.y || max.z < min.z {
            return Err(InvertedCuboidError { min, max });
        }
        Ok(Self { min, max })
    }

    /// Like [`Cuboid::checked_new()`], for candidates that are expected to be discarded often.
    #[inline]
    pub(crate) fn try_new(min: Point, max: Point) -> Option<Self> {
        Self::const_checked_new(min, max).ok()
    }

    /// Constructs the [`Cuboid`] containing only the given point.
    #[inline]
    pub const fn single_point(point: Point) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// The corner with the most negative coordinates, which is contained in the cuboid.
    #[inline]
    pub const fn min(&self) -> Point {
        self.min
    }

    /// The corner with the most positive coordinates, which is contained in the cuboid.
    #[inline]
    pub const fn max(&self) -> Point {
        self.max
    }

    /// Distance between the minimum and maximum coordinate on the given axis.
    ///
    /// This is unsigned so that it cannot overflow.
    #[inline]
    pub const fn extent(&self, axis: Axis) -> u64 {
        let (min, max) = match axis {
            Axis::X => (self.min.x, self.max.x),
            Axis::Y => (self.min.y, self.max.y),
            Axis::Z => (self.min.z, self.max.z),
        };
        // If the subtraction wraps, the conversion to unsigned gives the right answer anyway.
        Coordinate::wrapping_sub(max, min).cast_unsigned()
    }

    /// The range of coordinates within the cuboid on the given axis.
    #[inline]
    pub fn axis_range(&self, axis: Axis) -> RangeInclusive<Coordinate> {
        self.min[axis]..=self.max[axis]
    }

    /// The range of X coordinates within the cuboid.
    #[inline]
    pub fn x_range(&self) -> RangeInclusive<Coordinate> {
        self.axis_range(Axis::X)
    }

    /// The range of Y coordinates within the cuboid.
    #[inline]
    pub fn y_range(&self) -> RangeInclusive<Coordinate> {
        self.axis_range(Axis::Y)
    }

    /// The range of Z coordinates within the cuboid.
    #[inline]
    pub fn z_range(&self) -> RangeInclusive<Coordinate> {
        self.axis_range(Axis::Z)
    }

    /// Computes the continuous volume between the corners: the product of the
    /// [extents](Self::extent) on each axis. A single point, line or flat box has volume 0.
    ///
    /// Returns [`None`] if the result does not fit in [`PointCount`].
    #[inline]
    pub fn volume(&self) -> Option<PointCount> {
        Axis::ALL.into_iter().try_fold(1, |product: PointCount, axis| {
            product.checked_mul(PointCount::from(self.extent(axis)))
        })
    }

    /// Counts the lattice points the cuboid contains: the product of
    /// [extent](Self::extent) + 1 on each axis.
    ///
    /// Returns [`None`] if the result does not fit in [`PointCount`].
    ///
    /// ```
    /// use cuboid_algebra::math::Cuboid;
    ///
    /// assert_eq!(Cuboid::new([0, 0, 0], [0, 0, 0]).points_count(), Some(1));
    /// assert_eq!(Cuboid::new([0, 0, 0], [9, 0, 4]).points_count(), Some(50));
    /// assert_eq!(Cuboid::new([i64::MIN; 3], [i64::MAX; 3]).points_count(), None);
    /// ```
    #[inline]
    pub fn points_count(&self) -> Option<PointCount> {
        Axis::ALL.into_iter().try_fold(1, |product: PointCount, axis| {
            product.checked_mul(PointCount::from(self.extent(axis)) + 1)
        })
    }

    /// Returns the given corner of the cuboid.
    #[inline]
    pub fn corner(&self, corner: Corner) -> Point {
        let mut point = self.min;
        for axis in Axis::ALL {
            if corner.is_positive_on(axis) {
                point[axis] = self.max[axis];
            }
        }
        point
    }

    /// Returns all eight corners of the cuboid, in [`Corner::ALL`] order.
    ///
    /// Corners coincide when the cuboid is flat on some axis.
    #[inline]
    pub fn corners(&self) -> [Point; 8] {
        Corner::ALL.map(|corner| self.corner(corner))
    }

    /// Returns the four corners of the given face, in [`Corner::face_corners()`] order.
    #[inline]
    pub fn face_corners(&self, face: Face6) -> [Point; 4] {
        Corner::face_corners(face).map(|corner| self.corner(corner))
    }

    /// Returns whether the cuboid includes the given point.
    ///
    /// Both bounds are inclusive.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        Axis::ALL
            .into_iter()
            .all(|axis| self.min[axis] <= point[axis] && point[axis] <= self.max[axis])
    }

    /// Returns whether this cuboid includes every point of the other cuboid.
    ///
    /// Every cuboid encloses itself.
    ///
    /// ```
    /// use cuboid_algebra::math::Cuboid;
    ///
    /// let outer = Cuboid::new([0, 0, 0], [9, 9, 9]);
    /// assert!(outer.encloses(outer));
    /// assert!(outer.encloses(Cuboid::new([0, 3, 3], [5, 9, 9])));
    /// assert!(!outer.encloses(Cuboid::new([0, 3, 3], [5, 10, 9])));
    /// ```
    #[inline]
    pub fn encloses(&self, other: Cuboid) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// Returns whether the given point is one of the corners of the cuboid.
    #[inline]
    pub fn is_corner(&self, point: Point) -> bool {
        Axis::ALL
            .into_iter()
            .all(|axis| point[axis] == self.min[axis] || point[axis] == self.max[axis])
    }

    /// Returns whether the given point is contained in the cuboid and lies on at least one
    /// of its faces.
    #[inline]
    pub fn is_on_boundary(&self, point: Point) -> bool {
        self.contains(point)
            && Axis::ALL
                .into_iter()
                .any(|axis| point[axis] == self.min[axis] || point[axis] == self.max[axis])
    }

    /// Returns the corners of `other` which are contained in `self`, de-duplicated,
    /// in [`Corner::ALL`] order.
    pub fn intersecting_corners(&self, other: Cuboid) -> Points {
        other
            .corners()
            .into_iter()
            .filter(|&corner| self.contains(corner))
            .collect::<Points>()
            .dedup()
    }

    /// Returns whether the two cuboids have at least one point in common.
    ///
    /// Cuboids which are merely adjacent do not overlap:
    ///
    /// ```
    /// use cuboid_algebra::math::Cuboid;
    ///
    /// let left = Cuboid::new([0, 0, 0], [1, 1, 1]);
    /// assert!(!left.overlaps(Cuboid::new([2, 0, 0], [3, 1, 1])));
    /// assert!(left.overlaps(Cuboid::new([1, 0, 0], [3, 1, 1])));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: Cuboid) -> bool {
        self.overlap_box(other).is_some()
    }

    /// Returns the cuboid of points both `self` and `other` contain,
    /// or [`None`] if there are no such points.
    #[inline]
    #[must_use]
    pub fn overlap_box(&self, other: Cuboid) -> Option<Cuboid> {
        Self::try_new(self.min.max(other.min), self.max.min(other.max))
    }

    /// Returns the smallest [`Cuboid`] which encloses both inputs.
    ///
    /// ```
    /// use cuboid_algebra::math::Cuboid;
    ///
    /// let a = Cuboid::new([1, 2, 3], [1, 2, 3]);
    /// let b = Cuboid::new([4, 7, 11], [4, 7, 11]);
    /// assert_eq!(a.union_box(b), Cuboid::new([1, 2, 3], [4, 7, 11]));
    /// ```
    #[inline]
    #[must_use]
    pub fn union_box(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Translates the cuboid by the given offset, or returns [`None`] if any coordinate
    /// would overflow.
    #[inline]
    #[must_use]
    pub fn translate(&self, offset: impl Into<Vector>) -> Option<Self> {
        let offset = offset.into();
        Some(Self {
            min: self.min.checked_add(offset)?,
            max: self.max.checked_add(offset)?,
        })
    }

    /// Iterate over all points contained in the cuboid, with X as the most significant
    /// coordinate; that is, in lexicographic order.
    ///
    /// ```
    /// use cuboid_algebra::math::{Cuboid, Point};
    ///
    /// let c = Cuboid::new([10, 20, 30], [11, 20, 31]);
    /// assert_eq!(
    ///     c.interior_points().collect::<Vec<Point>>(),
    ///     vec![
    ///         Point::new(10, 20, 30),
    ///         Point::new(10, 20, 31),
    ///         Point::new(11, 20, 30),
    ///         Point::new(11, 20, 31),
    ///     ]
    /// );
    /// ```
    #[inline]
    pub fn interior_points(self) -> PointIter {
        PointIter::new(self)
    }

    /// Collects all points contained in the cuboid.
    ///
    /// This enumerates every point, so it is only reasonable for small cuboids.
    pub fn points(&self) -> Points {
        self.interior_points().collect()
    }
}

impl fmt::Debug for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cuboid")
            .field(&RangeWithLength(self.x_range()))
            .field(&RangeWithLength(self.y_range()))
            .field(&RangeWithLength(self.z_range()))
            .finish()
    }
}

/// Formats the cuboid as `x1,y1,z1,x2,y2,z2`, the same form that [`str::parse()`] accepts.
impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.min, self.max)
    }
}

impl From<Point> for Cuboid {
    #[inline]
    fn from(point: Point) -> Self {
        Self::single_point(point)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Cuboid {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let [a, b] = <[Point; 2] as arbitrary::Arbitrary<'a>>::arbitrary(u)?;
        Ok(Self {
            min: a.min(b),
            max: a.max(b),
        })
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <[Point; 2] as arbitrary::Arbitrary<'a>>::size_hint(depth)
    }
}

/// Error when a [`Cuboid`] cannot be constructed because its corners are out of order.
#[derive(Clone, Copy, Debug, displaydoc::Display, Eq, PartialEq)]
#[displaydoc("cuboid's minimum corner {min} is greater than its maximum corner {max}")]
pub struct InvertedCuboidError {
    min: Point,
    max: Point,
}

impl core::error::Error for InvertedCuboidError {}

/// `Debug`-formatting helper
struct RangeWithLength(RangeInclusive<Coordinate>);
impl fmt::Debug for RangeWithLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = &self.0;
        if f.alternate() {
            write!(
                f,
                "{range:?} ({len})",
                len = i128::from(*range.end()) - i128::from(*range.start()) + 1
            )
        } else {
            range.fmt(f)
        }
    }
}

use core::cmp::Ordering;
use core::iter::FusedIterator;

use crate::math::{Axis, Cuboid, Point, PointCount};

/// Iterator produced by [`Cuboid::interior_points()`].
///
/// Points are produced in lexicographic order: X is the most significant coordinate and Z
/// the least.
#[derive(Clone, Debug)]
pub struct PointIter {
    bounds: Cuboid,
    /// The next point to produce, or [`None`] once the last one has been produced.
    /// A cuboid may reach the edge of the coordinate range, so there is no out-of-bounds
    /// point available to mark the end.
    point: Option<Point>,
}

impl PointIter {
    #[inline]
    pub(in crate::math) fn new(bounds: Cuboid) -> Self {
        Self {
            bounds,
            point: Some(bounds.min()),
        }
    }

    /// Returns the bounds which this iterator iterates over.
    /// This may be larger than the set of remaining points, but it will not be smaller.
    #[inline]
    pub fn bounds(&self) -> Cuboid {
        self.bounds
    }

    /// Returns whether the iterator will produce the given point.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        let Some(next) = self.point else {
            return false;
        };
        self.bounds.contains(point) && point.cmp(&next) != Ordering::Less
    }

    /// Number of points not yet produced, if it fits in [`PointCount`].
    fn remaining(&self) -> Option<PointCount> {
        let Some(next) = self.point else {
            return Some(0);
        };
        let total = self.bounds.points_count()?;
        // Position of `next` in iteration order, computed like a mixed-radix number.
        let position = Axis::ALL.into_iter().try_fold(0, |acc: PointCount, axis| {
            let radix = PointCount::from(self.bounds.extent(axis)) + 1;
            let digit = PointCount::from(
                next[axis]
                    .wrapping_sub(self.bounds.min()[axis])
                    .cast_unsigned(),
            );
            acc.checked_mul(radix)?.checked_add(digit)
        })?;
        Some(total - position)
    }
}

impl Iterator for PointIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let result = self.point?;
        let min = self.bounds.min();
        let max = self.bounds.max();

        let mut next = result;
        if next.z < max.z {
            next.z += 1;
        } else {
            next.z = min.z;
            if next.y < max.y {
                next.y += 1;
            } else {
                next.y = min.y;
                if next.x < max.x {
                    next.x += 1;
                } else {
                    self.point = None;
                    return Some(result);
                }
            }
        }
        self.point = Some(next);

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().map(usize::try_from) {
            Some(Ok(remaining)) => (remaining, Some(remaining)),
            _ => (usize::MAX, None),
        }
    }
}

impl FusedIterator for PointIter {}

//! Decomposition of pairs of cuboids into disjoint pieces.

use crate::math::{Axis, Corner, Cuboid, Point};
use crate::set::Cuboids;

/// The three disjoint parts of a pair of cuboids, as produced by [`Cuboid::intersect()`].
///
/// The union of all three parts is exactly the union of the two input cuboids, and no two
/// of the cuboids in the three parts overlap.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)]
pub struct Intersection {
    /// Points of the first cuboid that are not in the second.
    pub only_a: Cuboids,
    /// Points in both cuboids; empty or a single cuboid.
    pub both: Cuboids,
    /// Points of the second cuboid that are not in the first.
    pub only_b: Cuboids,
}

impl Cuboid {
    /// Splits `self` and `other` into the points only `self` contains, the points both
    /// contain, and the points only `other` contains.
    ///
    /// ```
    /// use cuboid_algebra::math::Cuboid;
    ///
    /// let a = Cuboid::new([0, 0, 0], [10, 10, 10]);
    /// let b = Cuboid::new([0, 0, 0], [10, 10, 5]);
    /// let parts = a.intersect(b);
    /// assert_eq!(parts.only_a.as_slice(), [Cuboid::new([0, 0, 6], [10, 10, 10])]);
    /// assert_eq!(parts.both.as_slice(), [b]);
    /// assert!(parts.only_b.is_empty());
    /// ```
    pub fn intersect(self, other: Cuboid) -> Intersection {
        if self == other {
            return Intersection {
                only_a: Cuboids::new(),
                both: Cuboids::from(self),
                only_b: Cuboids::new(),
            };
        }
        let Some(both) = self.overlap_box(other) else {
            return Intersection {
                only_a: Cuboids::from(self),
                both: Cuboids::new(),
                only_b: Cuboids::from(other),
            };
        };

        let only_b = if other == both {
            Cuboids::new()
        } else {
            // Going through `intersect()` again means both operands are cut around `both`
            // by the same rules.
            other.intersect(both).only_a
        };
        Intersection {
            only_a: slabs_around(self, both),
            both: Cuboids::from(both),
            only_b,
        }
    }

    /// Returns the points of `self` which are not in `other`, as up to six disjoint cuboids.
    ///
    /// ```
    /// use cuboid_algebra::math::Cuboid;
    ///
    /// let a = Cuboid::new([0, 0, 0], [9, 9, 9]);
    /// assert_eq!(a.subtract(a).len(), 0);
    /// assert_eq!(a.subtract(Cuboid::new([20, 0, 0], [29, 9, 9])).as_slice(), [a]);
    /// assert_eq!(a.subtract(Cuboid::new([1, 1, 1], [8, 8, 8])).len(), 6);
    /// ```
    pub fn subtract(self, other: Cuboid) -> Cuboids {
        match self.overlap_box(other) {
            None => Cuboids::from(self),
            Some(both) if both == self => Cuboids::new(),
            Some(both) => slabs_around(self, both),
        }
    }

    /// Splits `self` into up to eight octants meeting at `point`.
    ///
    /// On each axis, the lower piece spans from the minimum up to and including `point`,
    /// and the upper piece from just after `point` to the maximum. Pieces which would be
    /// empty are omitted, so the result has 1, 2, 4 or 8 cuboids, in [`Corner::ALL`] order.
    /// If `point` is not contained in `self`, the result is empty.
    ///
    /// ```
    /// use cuboid_algebra::math::{Cuboid, Point};
    ///
    /// let c = Cuboid::new([0, 0, 0], [10, 10, 10]);
    /// assert_eq!(c.split_at(Point::new(5, 5, 5)).len(), 8);
    /// assert_eq!(c.split_at(Point::new(5, 10, 10)).len(), 2);
    /// assert_eq!(c.split_at(Point::new(10, 10, 10)).as_slice(), [c]);
    /// assert!(c.split_at(Point::new(-1, -1, -1)).is_empty());
    /// ```
    pub fn split_at(self, point: Point) -> Cuboids {
        if !self.contains(point) {
            return Cuboids::new();
        }
        Corner::ALL
            .into_iter()
            .filter_map(|octant| {
                let mut min = self.min();
                let mut max = self.max();
                for axis in Axis::ALL {
                    if octant.is_positive_on(axis) {
                        min[axis] = point[axis].checked_add(1)?;
                    } else {
                        max[axis] = point[axis];
                    }
                }
                Cuboid::try_new(min, max).filter(|piece| self.encloses(*piece))
            })
            .collect()
    }
}

/// Returns the pieces of `outer` surrounding `inner`, which must be enclosed by `outer`.
///
/// There is one pair of slabs per axis, produced in the order −X, +X, −Y, +Y, −Z, +Z.
/// The X slabs take the full extent of `outer` on the other axes; the Y slabs are limited
/// to `inner`'s X range; the Z slabs to `inner`'s X and Y ranges. Slabs which would be
/// empty because `inner` reaches `outer`'s face are omitted.
fn slabs_around(outer: Cuboid, inner: Cuboid) -> Cuboids {
    debug_assert!(outer.encloses(inner), "{outer:?} does not enclose {inner:?}");

    let mut slabs = Cuboids::new();
    for (index, axis) in Axis::ALL.into_iter().enumerate() {
        for positive in [false, true] {
            let mut min = outer.min();
            let mut max = outer.max();
            for earlier in &Axis::ALL[..index] {
                min[*earlier] = inner.min()[*earlier];
                max[*earlier] = inner.max()[*earlier];
            }
            // If `inner` is at the limit of the coordinate range, there is nothing beyond it.
            if positive {
                let Some(start) = inner.max()[axis].checked_add(1) else {
                    continue;
                };
                min[axis] = start;
            } else {
                let Some(end) = inner.min()[axis].checked_sub(1) else {
                    continue;
                };
                max[axis] = end;
            }
            if let Some(slab) = Cuboid::try_new(min, max).filter(|slab| outer.encloses(*slab)) {
                slabs.push(slab);
            }
        }
    }
    slabs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Coordinate, PointCount};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn c([x1, y1, z1, x2, y2, z2]: [Coordinate; 6]) -> Cuboid {
        Cuboid::new([x1, y1, z1], [x2, y2, z2])
    }

    fn count(cuboids: &Cuboids) -> PointCount {
        cuboids.points_count().unwrap()
    }

    #[test]
    fn intersect_equal() {
        let a = c([0, 0, 0, 3, 3, 3]);
        assert_eq!(
            a.intersect(a),
            Intersection {
                only_a: Cuboids::new(),
                both: Cuboids::from(a),
                only_b: Cuboids::new(),
            }
        );
    }

    #[test]
    fn intersect_disjoint() {
        let a = c([5, 5, 5, 10, 10, 10]);
        let b = c([0, 0, 0, 4, 4, 4]);
        assert_eq!(
            a.intersect(b),
            Intersection {
                only_a: Cuboids::from(a),
                both: Cuboids::new(),
                only_b: Cuboids::from(b),
            }
        );
    }

    #[test]
    fn intersect_shared_faces() {
        let a = c([0, 0, 0, 10, 10, 10]);
        let b = c([0, 0, 0, 10, 10, 5]);
        assert_eq!(
            a.intersect(b),
            Intersection {
                only_a: Cuboids::from(c([0, 0, 6, 10, 10, 10])),
                both: Cuboids::from(b),
                only_b: Cuboids::new(),
            }
        );
    }

    #[test]
    fn intersect_corner_overlap() {
        let a = c([0, 0, 0, 5, 5, 5]);
        let b = c([-5, -5, -5, 2, 2, 2]);
        let parts = a.intersect(b);
        assert_eq!(
            parts.only_a.as_slice(),
            [
                c([3, 0, 0, 5, 5, 5]),
                c([0, 3, 0, 2, 5, 5]),
                c([0, 0, 3, 2, 2, 5]),
            ]
        );
        assert_eq!(parts.both.as_slice(), [c([0, 0, 0, 2, 2, 2])]);
        assert_eq!(
            parts.only_b.as_slice(),
            [
                c([-5, -5, -5, -1, 2, 2]),
                c([0, -5, -5, 2, -1, 2]),
                c([0, 0, -5, 2, 2, -1]),
            ]
        );
    }

    #[rstest]
    #[case::nested([0, 0, 0, 9, 9, 9], [3, 3, 3, 6, 6, 6])]
    #[case::containing([3, 3, 3, 6, 6, 6], [0, 0, 0, 9, 9, 9])]
    #[case::crossing([0, 4, 4, 10, 6, 6], [4, 0, 4, 6, 10, 6])]
    #[case::corner([0, 0, 0, 5, 5, 5], [5, 5, 5, 8, 8, 8])]
    #[case::flat([0, 0, 0, 9, 9, 0], [2, -3, 0, 4, 20, 0])]
    fn intersect_conserves_points(#[case] a: [Coordinate; 6], #[case] b: [Coordinate; 6]) {
        let a = c(a);
        let b = c(b);
        let parts = a.intersect(b);
        let total = count(&parts.only_a) + count(&parts.both) + count(&parts.only_b);
        assert_eq!(
            a.points_count().unwrap() + b.points_count().unwrap() - count(&parts.both),
            total
        );
        let mut all = parts.only_a.clone();
        all.extend(parts.both.iter().copied());
        all.extend(parts.only_b.iter().copied());
        assert!(all.is_disjoint(), "{all:#?}");
    }

    #[test]
    fn subtract_cases() {
        let a = c([0, 0, 0, 9, 9, 9]);
        assert_eq!(a.subtract(c([-5, -5, -5, 20, 20, 20])), Cuboids::new());
        assert_eq!(
            a.subtract(c([0, 0, 0, 9, 9, 4])).as_slice(),
            [c([0, 0, 5, 9, 9, 9])]
        );
        assert_eq!(count(&a.subtract(c([1, 1, 1, 8, 8, 8]))), 1000 - 512);
    }

    #[test]
    fn slabs_at_coordinate_limits() {
        let everywhere = Cuboid::new([Coordinate::MIN; 3], [Coordinate::MAX; 3]);
        let upper = Cuboid::new([0, Coordinate::MIN, Coordinate::MIN], [Coordinate::MAX; 3]);
        assert_eq!(
            everywhere.subtract(upper).as_slice(),
            [Cuboid::new(
                [Coordinate::MIN; 3],
                [-1, Coordinate::MAX, Coordinate::MAX]
            )]
        );
    }

    #[test]
    fn split_outside_is_empty() {
        assert!(
            c([0, 0, 0, 10, 10, 10])
                .split_at(Point::new(-1, -1, -1))
                .is_empty()
        );
    }

    #[test]
    fn split_at_minimum() {
        let whole = c([0, 0, 0, 10, 10, 10]);
        let pieces = whole.split_at(Point::ORIGIN);
        assert_eq!(pieces.len(), 8);
        assert_eq!(pieces.as_slice()[0], Cuboid::single_point(Point::ORIGIN));
        for point in [Point::ORIGIN, Point::new(1, 1, 1)] {
            assert_eq!(
                pieces.iter().filter(|piece| piece.contains(point)).count(),
                1,
                "{point:?}"
            );
        }
        assert_eq!(pieces.points_count(), whole.points_count());
    }

    #[rstest]
    #[case::center([5, 5, 5], 8)]
    #[case::maximum([10, 10, 10], 1)]
    #[case::max_x([10, 5, 5], 4)]
    #[case::max_xy([10, 10, 5], 2)]
    #[case::minimum([0, 0, 0], 8)]
    fn split_piece_counts(#[case] point: [Coordinate; 3], #[case] expected: usize) {
        let whole = c([0, 0, 0, 10, 10, 10]);
        let pieces = whole.split_at(point.into());
        assert_eq!(pieces.len(), expected);
        assert_eq!(pieces.points_count(), whole.points_count());
        assert!(pieces.is_disjoint());
        assert!(pieces.iter().all(|piece| whole.encloses(*piece)));
    }

    #[test]
    fn split_then_combine_restores() {
        let whole = c([0, 0, 0, 10, 10, 10]);
        assert_eq!(
            whole.split_at(Point::new(3, 4, 5)).combine().as_slice(),
            [whole]
        );
    }
}

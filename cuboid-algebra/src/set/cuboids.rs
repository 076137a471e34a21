use alloc::vec::Vec;
use core::fmt;

use crate::math::{Cuboid, PointCount};
use crate::set::Points;

/// An ordered collection of [`Cuboid`]s, standing for the union of the points they contain.
///
/// A collection may be *raw*, with members that overlap, or *disjoint*, with no two members
/// sharing a point. The building operations ([`merge()`](Self::merge),
/// [`remove()`](Self::remove), [`break_overlaps()`](Self::break_overlaps)) always produce
/// disjoint collections; [`push()`](Self::push) and the [`FromIterator`] and [`Extend`]
/// implementations add members as they are.
///
/// All operations leave `self` unchanged and return a new collection.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct Cuboids {
    cuboids: Vec<Cuboid>,
}

impl Cuboids {
    /// Constructs an empty collection.
    #[inline]
    pub const fn new() -> Self {
        Self {
            cuboids: Vec::new(),
        }
    }

    /// Number of member cuboids.
    #[inline]
    pub fn len(&self) -> usize {
        self.cuboids.len()
    }

    /// Returns whether there are no member cuboids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cuboids.is_empty()
    }

    /// The member cuboids, in order.
    #[inline]
    pub fn as_slice(&self) -> &[Cuboid] {
        &self.cuboids
    }

    /// Iterates over the member cuboids, in order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Cuboid> {
        self.cuboids.iter()
    }

    /// Appends a cuboid without checking it against the existing members.
    #[inline]
    pub fn push(&mut self, cuboid: Cuboid) {
        self.cuboids.push(cuboid);
    }

    /// Returns whether the given cuboid is exactly equal to one of the members.
    ///
    /// This is not a test of whether the region includes its points; for that, use
    /// [`Cuboids::encloses()`].
    #[inline]
    pub fn contains(&self, cuboid: &Cuboid) -> bool {
        self.cuboids.contains(cuboid)
    }

    /// Returns whether every point of `cuboid` is in some member of this collection.
    ///
    /// The region need not contain `cuboid` within a single member.
    pub fn encloses(&self, cuboid: Cuboid) -> bool {
        let mut remainder = Cuboids::from(cuboid);
        for member in self {
            remainder = remainder
                .iter()
                .flat_map(|piece| piece.subtract(*member))
                .collect();
            if remainder.is_empty() {
                return true;
            }
        }
        remainder.is_empty()
    }

    /// Returns whether no two members share a point.
    pub fn is_disjoint(&self) -> bool {
        self.cuboids.iter().enumerate().all(|(i, a)| {
            self.cuboids[i + 1..]
                .iter()
                .all(|b| !a.overlaps(*b))
        })
    }

    /// Returns a copy with exact duplicates removed. The first occurrence of each cuboid is
    /// kept in its original position.
    #[must_use]
    pub fn dedup(&self) -> Self {
        let mut seen = hashbrown::HashSet::with_capacity(self.len());
        self.iter().copied().filter(|c| seen.insert(*c)).collect()
    }

    /// Returns the union of this collection's region and `add`, as a disjoint collection.
    ///
    /// Every member is cut down to the pieces outside of `add`, and the canonical form of
    /// `add` followed by those pieces is returned (see [`Cuboids::combine()`]).
    /// If `self` is disjoint, so is the result.
    ///
    /// ```
    /// use cuboid_algebra::math::Cuboid;
    /// use cuboid_algebra::set::Cuboids;
    ///
    /// let left = Cuboid::new([0, 0, 0], [4, 9, 9]);
    /// let right = Cuboid::new([5, 0, 0], [9, 9, 9]);
    /// assert_eq!(
    ///     Cuboids::from(left).merge(right).as_slice(),
    ///     [Cuboid::new([0, 0, 0], [9, 9, 9])],
    /// );
    /// ```
    #[must_use]
    pub fn merge(&self, add: Cuboid) -> Self {
        let mut pieces = Cuboids::from(add);
        pieces.extend(self.outside_of(add));
        pieces.combine()
    }

    /// Returns this collection's region without the points of `sub`,
    /// in canonical form (see [`Cuboids::combine()`]).
    ///
    /// Removing a cuboid which does not overlap the region changes nothing except possibly
    /// the recombination of members.
    #[must_use]
    pub fn remove(&self, sub: Cuboid) -> Self {
        self.outside_of(sub).collect::<Cuboids>().combine()
    }

    /// The pieces of every member which lie outside of `cut`, in member order.
    fn outside_of(&self, cut: Cuboid) -> impl Iterator<Item = Cuboid> + '_ {
        self.iter().flat_map(move |member| member.subtract(cut))
    }

    /// Returns a disjoint collection covering the same region as `self`, which may have
    /// overlapping members.
    #[must_use]
    pub fn break_overlaps(&self) -> Self {
        let result = self
            .iter()
            .fold(Cuboids::new(), |region, &cuboid| region.merge(cuboid));
        log::debug!(
            "break_overlaps: {input} cuboids in, {output} disjoint cuboids out",
            input = self.len(),
            output = result.len(),
        );
        result
    }

    /// Sum of the members' [volumes](Cuboid::volume), or [`None`] on overflow.
    ///
    /// This is the volume of the region only if the collection is disjoint.
    pub fn volume(&self) -> Option<PointCount> {
        self.iter()
            .try_fold(0, |sum: PointCount, cuboid| sum.checked_add(cuboid.volume()?))
    }

    /// Sum of the members' [point counts](Cuboid::points_count), or [`None`] on overflow.
    ///
    /// This is the number of points in the region only if the collection is disjoint.
    pub fn points_count(&self) -> Option<PointCount> {
        self.iter()
            .try_fold(0, |sum: PointCount, cuboid| {
                sum.checked_add(cuboid.points_count()?)
            })
    }

    /// Every point of the region, without duplicates and in sorted order.
    ///
    /// This enumerates every point, so it is only reasonable for small regions.
    pub fn points(&self) -> Points {
        self.iter()
            .flat_map(|cuboid| cuboid.interior_points())
            .collect::<Points>()
            .dedup()
            .sorted()
    }
}

impl fmt::Debug for Cuboids {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.cuboids).finish()
    }
}

/// Formats the members in their text form, one per line.
impl fmt::Display for Cuboids {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cuboid in self {
            writeln!(f, "{cuboid}")?;
        }
        Ok(())
    }
}

impl From<Cuboid> for Cuboids {
    #[inline]
    fn from(cuboid: Cuboid) -> Self {
        Self {
            cuboids: vec![cuboid],
        }
    }
}

impl From<Vec<Cuboid>> for Cuboids {
    #[inline]
    fn from(cuboids: Vec<Cuboid>) -> Self {
        Self { cuboids }
    }
}

impl From<Cuboids> for Vec<Cuboid> {
    #[inline]
    fn from(value: Cuboids) -> Self {
        value.cuboids
    }
}

impl FromIterator<Cuboid> for Cuboids {
    fn from_iter<T: IntoIterator<Item = Cuboid>>(iter: T) -> Self {
        Self {
            cuboids: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cuboid> for Cuboids {
    fn extend<T: IntoIterator<Item = Cuboid>>(&mut self, iter: T) {
        self.cuboids.extend(iter);
    }
}

impl IntoIterator for Cuboids {
    type Item = Cuboid;
    type IntoIter = alloc::vec::IntoIter<Cuboid>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.cuboids.into_iter()
    }
}

impl<'a> IntoIterator for &'a Cuboids {
    type Item = &'a Cuboid;
    type IntoIter = core::slice::Iter<'a, Cuboid>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.cuboids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Coordinate, Point};
    use alloc::string::ToString as _;
    use pretty_assertions::assert_eq;

    fn c([x1, y1, z1, x2, y2, z2]: [Coordinate; 6]) -> Cuboid {
        Cuboid::new([x1, y1, z1], [x2, y2, z2])
    }

    #[test]
    fn merge_into_empty() {
        let a = c([0, 0, 0, 3, 3, 3]);
        assert_eq!(Cuboids::new().merge(a), Cuboids::from(a));
    }

    #[test]
    fn merge_overlapping_counts() {
        let region = Cuboids::new()
            .merge(c([0, 0, 0, 9, 9, 9]))
            .merge(c([5, 5, 5, 14, 14, 14]));
        assert!(region.is_disjoint());
        assert_eq!(region.points_count(), Some(1000 + 1000 - 125));
    }

    #[test]
    fn merge_enclosed_is_absorbed() {
        let outer = c([0, 0, 0, 9, 9, 9]);
        let region = Cuboids::from(outer).merge(c([2, 2, 2, 3, 3, 3]));
        assert_eq!(region.as_slice(), [outer]);
    }

    #[test]
    fn merge_enclosing_replaces() {
        let outer = c([0, 0, 0, 9, 9, 9]);
        let region = Cuboids::from(c([2, 2, 2, 3, 3, 3])).merge(outer);
        assert_eq!(region.as_slice(), [outer]);
    }

    #[test]
    fn remove_hole() {
        let region = Cuboids::from(c([0, 0, 0, 9, 9, 9])).remove(c([3, 3, 3, 4, 4, 4]));
        assert!(region.is_disjoint());
        assert_eq!(region.points_count(), Some(1000 - 8));
        assert!(!region.encloses(c([3, 3, 3, 3, 3, 3])));
        assert!(region.encloses(c([0, 0, 0, 9, 2, 9])));
    }

    #[test]
    fn remove_absent_is_noop() {
        let a = c([0, 0, 0, 3, 3, 3]);
        assert_eq!(Cuboids::from(a).remove(c([10, 10, 10, 12, 12, 12])), Cuboids::from(a));
        assert_eq!(Cuboids::new().remove(a), Cuboids::new());
    }

    #[test]
    fn remove_everything() {
        let a = c([0, 0, 0, 3, 3, 3]);
        assert!(Cuboids::from(a).remove(a).is_empty());
    }

    #[test]
    fn break_overlaps_counts() {
        let raw: Cuboids = [
            c([0, 0, 0, 2, 2, 2]),
            c([1, 1, 1, 3, 3, 3]),
            c([0, 0, 0, 2, 2, 2]),
            c([10, 10, 10, 10, 10, 10]),
        ]
        .into_iter()
        .collect();
        assert!(!raw.is_disjoint());

        let disjoint = raw.break_overlaps();
        assert!(disjoint.is_disjoint());
        assert_eq!(disjoint.points_count(), Some(27 + 27 - 8 + 1));
        assert_eq!(disjoint.points(), raw.points());
    }

    #[test]
    fn dedup_keeps_first() {
        let a = c([0, 0, 0, 1, 1, 1]);
        let b = c([5, 5, 5, 6, 6, 6]);
        let raw = Cuboids::from(vec![b, a, b, a, a]);
        assert_eq!(raw.dedup().as_slice(), [b, a]);
        assert!(raw.contains(&a));
        assert!(!raw.contains(&c([0, 0, 0, 1, 1, 2])));
    }

    #[test]
    fn measures() {
        let region = Cuboids::from(vec![c([0, 0, 0, 1, 1, 1]), c([5, 5, 5, 5, 5, 5])]);
        assert_eq!(region.volume(), Some(1));
        assert_eq!(region.points_count(), Some(9));
        assert_eq!(Cuboids::new().points_count(), Some(0));

        let huge = Cuboid::new([Coordinate::MIN, Coordinate::MIN, 0], [Coordinate::MAX, 0, 0]);
        assert_eq!(Cuboids::from(vec![huge, huge]).points_count(), None);
    }

    #[test]
    fn points_sorted_and_unique() {
        let region = Cuboids::from(vec![c([1, 0, 0, 1, 0, 1]), c([0, 0, 0, 1, 0, 0])]);
        assert_eq!(region.points().to_string(), "0,0,0,1,0,0,1,0,1");
        assert!(region.points().contains(Point::new(1, 0, 1)));
    }

    #[test]
    fn display_lines() {
        let region = Cuboids::from(vec![c([0, 0, 0, 1, 1, 1]), c([-5, 5, 5, 5, 5, 5])]);
        assert_eq!(region.to_string(), "0,0,0,1,1,1\n-5,5,5,5,5,5\n");
    }
}

use alloc::vec::Vec;
use core::fmt;

use crate::math::{Point, Vector};

/// An ordered list of [`Point`]s.
///
/// This is the explicit counterpart of [`Cuboids`](crate::set::Cuboids), used to check
/// small regions point by point. Its text form is every coordinate of every point, joined
/// by commas: `x1,y1,z1,x2,y2,z2,…`.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct Points {
    points: Vec<Point>,
}

impl Points {
    /// Constructs an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Number of points in the list, including any duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points, in order.
    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points, in order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Appends a point.
    #[inline]
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Returns whether the list includes the given point.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// Returns a copy with duplicates removed. The first occurrence of each point is kept in
    /// its original position.
    #[must_use]
    pub fn dedup(&self) -> Self {
        let mut seen = hashbrown::HashSet::with_capacity(self.len());
        self.iter().copied().filter(|p| seen.insert(*p)).collect()
    }

    /// Returns a copy sorted in lexicographic `(x, y, z)` order.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut points = self.points.clone();
        points.sort_unstable();
        Self { points }
    }

    /// Returns a copy with every point moved by `offset`,
    /// or [`None`] if any coordinate would overflow.
    #[must_use]
    pub fn translate(&self, offset: impl Into<Vector>) -> Option<Self> {
        let offset = offset.into();
        self.iter().map(|p| p.checked_add(offset)).collect()
    }
}

impl fmt::Debug for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.points).finish()
    }
}

/// Formats the list as comma-separated coordinates, the same form that [`str::parse()`]
/// accepts.
impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            fmt::Display::fmt(point, f)?;
        }
        Ok(())
    }
}

impl From<Vec<Point>> for Points {
    #[inline]
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for Points {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for Points {
    fn extend<T: IntoIterator<Item = Point>>(&mut self, iter: T) {
        self.points.extend(iter);
    }
}

impl IntoIterator for Points {
    type Item = Point;
    type IntoIter = alloc::vec::IntoIter<Point>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Points {
    type Item = &'a Point;
    type IntoIter = core::slice::Iter<'a, Point>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Coordinate, Cuboid};
    use alloc::string::ToString as _;
    use pretty_assertions::assert_eq;

    #[test]
    fn unit_cube_points_string() {
        let points = Cuboid::new([0, 0, 0], [1, 1, 1]).points();
        assert_eq!(
            points.to_string(),
            "0,0,0,0,0,1,0,1,0,0,1,1,1,0,0,1,0,1,1,1,0,1,1,1"
        );
    }

    #[test]
    fn dedup_keeps_first_position() {
        let points = Points::from(vec![
            Point::new(2, 0, 0),
            Point::new(1, 0, 0),
            Point::new(2, 0, 0),
        ]);
        assert_eq!(points.dedup().to_string(), "2,0,0,1,0,0");
        assert_eq!(points.sorted().to_string(), "1,0,0,2,0,0,2,0,0");
    }

    #[test]
    fn translate() {
        let points = Points::from(vec![Point::ORIGIN, Point::new(1, 2, 3)]);
        assert_eq!(
            points.translate([10, 0, 0]),
            Some(Points::from(vec![Point::new(10, 0, 0), Point::new(11, 2, 3)]))
        );
        assert_eq!(points.translate([0, 0, Coordinate::MAX]), None);
    }

    #[test]
    fn contains() {
        let points = Points::from(vec![Point::ORIGIN]);
        assert!(points.contains(Point::ORIGIN));
        assert!(!points.contains(Point::new(0, 0, 1)));
    }
}

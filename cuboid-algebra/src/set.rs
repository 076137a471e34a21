//! Collections of [`Cuboid`](crate::math::Cuboid)s and [`Point`](crate::math::Point)s.
//!
//! A [`Cuboids`] describes a region of space as the union of its members. The
//! operations which build regions, [`Cuboids::merge()`] and [`Cuboids::remove()`], keep the
//! members pairwise disjoint, so that the region's size is the sum of theirs.
//! [`Points`] is the same region spelled out point by point, for checking small cases.

mod combine;
mod cuboids;
pub use cuboids::*;
mod points;
pub use points::*;

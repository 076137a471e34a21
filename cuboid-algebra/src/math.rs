//! Points, cuboids, and the enumerations used to index their axes, faces and corners.

mod axis;
pub use axis::*;
mod coord;
pub use coord::*;
mod corner;
pub use corner::*;
mod cuboid;
pub use cuboid::*;
mod face;
pub use face::*;
mod point;
pub use point::*;
mod point_iter;
pub use point_iter::*;

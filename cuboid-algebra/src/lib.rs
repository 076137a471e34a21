//! Exact set algebra on unions of axis-aligned integer cuboids.
//!
//! A region of 3-D integer space is represented as a collection of pairwise-disjoint
//! [`Cuboid`](math::Cuboid)s. The operations in this library decompose, split and
//! recombine such collections without ever enumerating their individual lattice points,
//! so that point counts and volumes of astronomically large regions can be computed
//! exactly.
//!
//! ```
//! use cuboid_algebra::math::Cuboid;
//! use cuboid_algebra::set::Cuboids;
//!
//! let region = Cuboids::new()
//!     .merge(Cuboid::new([0, 0, 0], [9, 9, 9]))
//!     .merge(Cuboid::new([5, 5, 5], [14, 14, 14]))
//!     .remove(Cuboid::new([0, 0, 0], [0, 9, 9]));
//!
//! assert!(region.is_disjoint());
//! assert_eq!(region.points_count(), Some(1000 + 1000 - 125 - 100));
//! ```

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(any(test, feature = "arbitrary")),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;
#[macro_use]
extern crate alloc;

pub mod math;

mod decompose;
pub use decompose::Intersection;

mod text;
pub use text::ParseError;

pub mod set;

pub mod util;


// reexport for convenience of our tests and callers building offsets
#[doc(hidden)]
pub use euclid;

use core::fmt;

use crate::math::{Axis, Face6};

/// Identifies one of the eight corners of a [`Cuboid`](crate::math::Cuboid).
///
/// Each letter of the variant name says whether the corner takes the minimum (`N`, for
/// negative) or the maximum (`P`, for positive) bound on the X, Y and Z axes in that order.
///
/// The discriminant is a 3-bit mask with the X axis in the lowest bit, so [`Corner::ALL`]
/// lists the corners with X varying fastest, then Y, then Z.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Corner {
    /// The −X, −Y, −Z corner; the minimum point of the cuboid.
    Nnn = 0b000,
    /// The +X, −Y, −Z corner.
    Pnn = 0b001,
    /// The −X, +Y, −Z corner.
    Npn = 0b010,
    /// The +X, +Y, −Z corner.
    Ppn = 0b011,
    /// The −X, −Y, +Z corner.
    Nnp = 0b100,
    /// The +X, −Y, +Z corner.
    Pnp = 0b101,
    /// The −X, +Y, +Z corner.
    Npp = 0b110,
    /// The +X, +Y, +Z corner; the maximum point of the cuboid.
    Ppp = 0b111,
}

impl Corner {
    /// All values of the enum, in discriminant order.
    //---
    // Note: `Cuboid::corners()` depends on the ordering of this.
    pub const ALL: [Self; 8] = [
        Self::Nnn,
        Self::Pnn,
        Self::Npn,
        Self::Ppn,
        Self::Nnp,
        Self::Pnp,
        Self::Npp,
        Self::Ppp,
    ];

    #[inline]
    const fn from_mask(mask: u8) -> Self {
        Self::ALL[(mask & 0b111) as usize]
    }

    const fn mask(self) -> u8 {
        self as u8
    }

    #[inline]
    const fn axis_bit(axis: Axis) -> u8 {
        1 << axis as u8
    }

    /// Returns whether this corner takes the maximum bound on the given axis.
    #[inline]
    pub const fn is_positive_on(self, axis: Axis) -> bool {
        self.mask() & Self::axis_bit(axis) != 0
    }

    /// Returns whether this corner is one of the four corners of the given face.
    ///
    /// ```
    /// use cuboid_algebra::math::{Corner, Face6};
    ///
    /// assert!(Corner::Pnn.lies_on(Face6::PX));
    /// assert!(!Corner::Pnn.lies_on(Face6::NX));
    /// ```
    #[inline]
    pub const fn lies_on(self, face: Face6) -> bool {
        self.is_positive_on(face.axis()) == face.is_positive()
    }

    /// Returns the corner on the other side of the cuboid along the given axis.
    #[inline]
    #[must_use]
    pub const fn mirrored(self, axis: Axis) -> Self {
        Self::from_mask(self.mask() ^ Self::axis_bit(axis))
    }

    /// Returns the four corners of the given face, in [`Corner::ALL`] order.
    ///
    /// For any face, `face_corners(face.opposite())` lists the mirror images of
    /// `face_corners(face)` in the same positions.
    #[inline]
    pub fn face_corners(face: Face6) -> [Self; 4] {
        let mut corners = [Self::Nnn; 4];
        let matching = Self::ALL.into_iter().filter(|corner| corner.lies_on(face));
        for (slot, corner) in corners.iter_mut().zip(matching) {
            *slot = corner;
        }
        corners
    }
}

impl fmt::Debug for Corner {
    #[inline(never)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nnn => "−X−Y−Z",
            Self::Pnn => "+X−Y−Z",
            Self::Npn => "−X+Y−Z",
            Self::Ppn => "+X+Y−Z",
            Self::Nnp => "−X−Y+Z",
            Self::Pnp => "+X−Y+Z",
            Self::Npp => "−X+Y+Z",
            Self::Ppp => "+X+Y+Z",
        })
    }
}

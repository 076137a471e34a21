/// Enumeration of the axes of three-dimensional space.
///
/// Can be used to infallibly index 3-component arrays, vectors and [`Point`]s.
///
/// See also:
///
/// * [`Face6`](crate::math::Face6) specifies an axis and a direction on the axis.
///
/// [`Point`]: crate::math::Point
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// All three axes in the standard order, [X, Y, Z].
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}

mod impl_index_axis {
    use super::Axis;
    use core::ops;

    impl<T> ops::Index<Axis> for [T; 3] {
        type Output = T;

        #[inline]
        fn index(&self, index: Axis) -> &Self::Output {
            &self[index as usize]
        }
    }
    impl<T> ops::IndexMut<Axis> for [T; 3] {
        #[inline]
        fn index_mut(&mut self, index: Axis) -> &mut Self::Output {
            &mut self[index as usize]
        }
    }

    impl<T, U> ops::Index<Axis> for euclid::Vector3D<T, U> {
        type Output = T;

        #[inline]
        fn index(&self, index: Axis) -> &Self::Output {
            match index {
                Axis::X => &self.x,
                Axis::Y => &self.y,
                Axis::Z => &self.z,
            }
        }
    }
    impl<T, U> ops::IndexMut<Axis> for euclid::Vector3D<T, U> {
        #[inline]
        fn index_mut(&mut self, index: Axis) -> &mut Self::Output {
            match index {
                Axis::X => &mut self.x,
                Axis::Y => &mut self.y,
                Axis::Z => &mut self.z,
            }
        }
    }

    // `Point` also has implementations like this, in its own module.
}

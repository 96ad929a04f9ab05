use core::ops::{Add, Mul, Sub};

use num_traits::Float;

/// Trait defined over generic points P which themselves are generic over their Scalar.
/// Keeping the trait as minimal as possible so the store, the segmentation and the
/// renderer can work with any point type that provides the arithmetic curves need.
pub trait Point:
    Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<<Self as Point>::Scalar, Output = Self>
    + Copy
    + PartialEq
    + Default
{
    type Scalar: Float;
    const DIM: usize;

    /// Returns the component of the Point on its axis corresponding to index e.g. [0, 1] -> [x, y]
    fn axis(&self, index: usize) -> Self::Scalar;

    /// Returns the squared L2 norm of the Point interpreted as a vector
    fn squared_length(&self) -> Self::Scalar;

    /// True if no component is NaN or infinite
    fn is_finite(&self) -> bool {
        (0..Self::DIM).all(|i| Float::is_finite(self.axis(i)))
    }
}

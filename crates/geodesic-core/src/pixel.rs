//! Scalar pixel types
//!
//! [`Pixel`] bounds the values a [`Grid`](crate::Grid) can hold. Every
//! implementor is totally ordered in practice: integer types trivially,
//! floating-point types only as long as no NaN is stored. Grids containing
//! NaN are not supported by any operation in this workspace.

use std::fmt::Debug;

/// Trait for scalar values stored in a grid cell.
pub trait Pixel: Copy + Debug + PartialOrd + PartialEq + Send + Sync + 'static {
    /// Smallest representable value
    const MIN_VALUE: Self;

    /// Largest representable value
    const MAX_VALUE: Self;

    /// Unit step (1 for integers, 1.0 for floats)
    const ONE: Self;

    /// Additive identity
    const ZERO: Self;

    /// Addition clamped to the representable range
    fn saturating_add(self, rhs: Self) -> Self;

    /// Subtraction clamped to the representable range
    fn saturating_sub(self, rhs: Self) -> Self;

    /// Larger of two values
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Smaller of two values
    #[inline]
    fn min_of(self, other: Self) -> Self {
        if other < self { other } else { self }
    }
}

macro_rules! impl_pixel_int {
    ($($t:ty),*) => {
        $(
            impl Pixel for $t {
                const MIN_VALUE: Self = <$t>::MIN;
                const MAX_VALUE: Self = <$t>::MAX;
                const ONE: Self = 1;
                const ZERO: Self = 0;

                #[inline]
                fn saturating_add(self, rhs: Self) -> Self {
                    <$t>::saturating_add(self, rhs)
                }

                #[inline]
                fn saturating_sub(self, rhs: Self) -> Self {
                    <$t>::saturating_sub(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_pixel_float {
    ($($t:ty),*) => {
        $(
            impl Pixel for $t {
                const MIN_VALUE: Self = <$t>::MIN;
                const MAX_VALUE: Self = <$t>::MAX;
                const ONE: Self = 1.0;
                const ZERO: Self = 0.0;

                #[inline]
                fn saturating_add(self, rhs: Self) -> Self {
                    (self + rhs).clamp(<$t>::MIN, <$t>::MAX)
                }

                #[inline]
                fn saturating_sub(self, rhs: Self) -> Self {
                    (self - rhs).clamp(<$t>::MIN, <$t>::MAX)
                }
            }
        )*
    };
}

impl_pixel_int!(u8, u16, u32, u64, i8, i16, i32, i64);
impl_pixel_float!(f32, f64);

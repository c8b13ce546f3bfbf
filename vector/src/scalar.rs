use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

mod sealed {
    pub trait Sealed {}
}

/// Coordinate type of a [`Vector`](crate::Vector).
///
/// Implemented for the primitive integer and floating-point types only.
pub trait Scalar:
    sealed::Sealed
    + Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Square root; integers truncate toward zero and negative integers yield zero.
    fn sqrt(self) -> Self;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn sqrt(self) -> Self {
                    <$t>::isqrt(self)
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn sqrt(self) -> Self {
                    if self < 0 { 0 } else { <$t>::isqrt(self) }
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_integer!(u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_sqrt_truncates() {
        assert_eq!(Scalar::sqrt(16_i32), 4);
        assert_eq!(Scalar::sqrt(15_i32), 3);
        assert_eq!(Scalar::sqrt(2_u8), 1);
    }

    #[test]
    fn integer_sqrt_is_exact_beyond_f64_mantissa() {
        // 2^54 - 1 rounds up to 2^54 as an f64.
        assert_eq!(Scalar::sqrt((1_i64 << 54) - 1), (1 << 27) - 1);
        assert_eq!(Scalar::sqrt(u64::MAX), u32::MAX as u64);
    }

    #[test]
    fn negative_integer_sqrt_is_zero() {
        assert_eq!(Scalar::sqrt(-4_i32), 0);
        assert_eq!(Scalar::sqrt(i8::MIN), 0);
    }

    #[test]
    fn float_sqrt_is_native() {
        assert_eq!(Scalar::sqrt(2.25_f64), 1.5);
        assert_eq!(Scalar::sqrt(0.25_f32), 0.5);
    }
}

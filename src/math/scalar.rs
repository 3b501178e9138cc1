//! Numeric element types for vectors.
//!
//! [`Scalar`] is the set of element types a [`VecN`](super::VecN) can hold,
//! and [`Promote`] picks the common type of two element types so that mixed
//! arithmetic (`Vec2<i32> + Vec2<f32>`) yields the wider type, the same way
//! integer/float promotion works for plain numbers.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A numeric vector element: `i32`, `f32` or `f64`.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// Widen to `f64`. Exact for every supported type.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`. Integer types truncate toward zero.
    fn from_f64(value: f64) -> Self;

    fn abs(self) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty => $zero:expr, $one:expr);* $(;)?) => {$(
        impl Scalar for $t {
            const ZERO: Self = $zero;
            const ONE: Self = $one;

            #[inline]
            #[allow(clippy::unnecessary_cast)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }
        }
    )*};
}

impl_scalar! {
    i32 => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
}

/// The common type of `Self` and `Rhs`.
///
/// Implemented for every pair of [`Scalar`] types: `i32` promotes to any
/// float, `f32` promotes to `f64`, and a type paired with itself stays put.
pub trait Promote<Rhs: Scalar>: Scalar {
    type Output: Scalar;

    fn promote(self) -> <Self as Promote<Rhs>>::Output;

    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

macro_rules! impl_promote {
    ($($lhs:ty, $rhs:ty => $out:ty);* $(;)?) => {$(
        impl Promote<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            #[allow(clippy::unnecessary_cast)]
            fn promote(self) -> $out {
                self as $out
            }

            #[inline]
            #[allow(clippy::unnecessary_cast)]
            fn promote_rhs(rhs: $rhs) -> $out {
                rhs as $out
            }
        }
    )*};
}

impl_promote! {
    i32, i32 => i32;
    i32, f32 => f32;
    i32, f64 => f64;
    f32, i32 => f32;
    f32, f32 => f32;
    f32, f64 => f64;
    f64, i32 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_f64_truncates_toward_zero() {
        assert_eq!(i32::from_f64(2.9), 2);
        assert_eq!(i32::from_f64(-2.9), -2);
        assert_eq!(f32::from_f64(0.5), 0.5);
    }

    #[test]
    fn promotion_picks_the_wider_type() {
        let sum = <i32 as Promote<f32>>::promote(2) + <i32 as Promote<f32>>::promote_rhs(0.5);
        assert_eq!(sum, 2.5_f32);

        let wide: f64 = <f32 as Promote<f64>>::promote(1.5);
        assert_eq!(wide, 1.5);
    }
}

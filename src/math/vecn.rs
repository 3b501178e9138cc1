//! Fixed-arity numeric vector.
//!
//! All arithmetic is written once here for every arity; [`Vec2`](super::Vec2)
//! and [`Vec3`](super::Vec3) only add named accessors and the operations that
//! exist for their dimension (cross product for 3D).

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use super::scalar::{Promote, Scalar};
use crate::error::MathError;

/// An `N`-dimensional vector of `T`.
///
/// Binary operators promote mixed element types (`VecN<i32, N> + VecN<f32, N>`
/// gives `VecN<f32, N>`). Compound assignment keeps the left operand's type,
/// truncating when it is an integer vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VecN<T, const N: usize>(pub(crate) [T; N]);

impl<T, const N: usize> VecN<T, N> {
    /// Number of components.
    pub const DIMS: usize = N;

    pub const fn from_array(components: [T; N]) -> Self {
        Self(components)
    }

    pub fn into_array(self) -> [T; N] {
        self.0
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Scalar, const N: usize> VecN<T, N> {
    pub fn zero() -> Self {
        Self([T::ZERO; N])
    }

    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// Component `index`, or `None` past the last dimension.
    pub fn get(&self, index: usize) -> Option<T> {
        self.0.get(index).copied()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> VecN<U, N> {
        VecN(self.0.map(f))
    }

    /// Convert every component to `U` (integers truncate toward zero).
    pub fn cast<U: Scalar>(self) -> VecN<U, N> {
        self.map(|v| U::from_f64(v.to_f64()))
    }

    /// Sum of pairwise products, always accumulated in `f64`.
    pub fn dot<U: Scalar>(&self, other: &VecN<U, N>) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.to_f64() * b.to_f64())
            .sum()
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| *v == T::ZERO)
    }

    /// Scale to unit length.
    ///
    /// # Errors
    /// [`MathError::ZeroLength`] for the zero vector, [`MathError::NonFinite`]
    /// when the length overflows or a component is NaN.
    pub fn normalize(&self) -> Result<Self, MathError> {
        self.normalize_to(1.0)
    }

    /// Scale to `length`, keeping the direction.
    pub fn normalize_to(&self, length: f64) -> Result<Self, MathError> {
        let norm = self.norm();
        if !norm.is_finite() {
            return Err(MathError::NonFinite);
        }
        if norm == 0.0 {
            return Err(MathError::ZeroLength);
        }
        let scale = length / norm;
        Ok(self.map(|v| T::from_f64(v.to_f64() * scale)))
    }

    /// Component-wise absolute value.
    pub fn abs(&self) -> Self {
        self.map(|v| v.abs())
    }
}

impl<T: Scalar, const N: usize> Default for VecN<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> From<[T; N]> for VecN<T, N> {
    fn from(components: [T; N]) -> Self {
        Self(components)
    }
}

impl<T, const N: usize> From<VecN<T, N>> for [T; N] {
    fn from(v: VecN<T, N>) -> Self {
        v.0
    }
}

impl<T, const N: usize> Index<usize> for VecN<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for VecN<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

/// Component-wise addition in the promoted element type.
impl<T, U, const N: usize> Add<VecN<U, N>> for VecN<T, N>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = VecN<<T as Promote<U>>::Output, N>;

    fn add(self, rhs: VecN<U, N>) -> Self::Output {
        VecN(std::array::from_fn(|i| {
            <T as Promote<U>>::promote(self.0[i]) + <T as Promote<U>>::promote_rhs(rhs.0[i])
        }))
    }
}

/// Component-wise subtraction in the promoted element type.
impl<T, U, const N: usize> Sub<VecN<U, N>> for VecN<T, N>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = VecN<<T as Promote<U>>::Output, N>;

    fn sub(self, rhs: VecN<U, N>) -> Self::Output {
        VecN(std::array::from_fn(|i| {
            <T as Promote<U>>::promote(self.0[i]) - <T as Promote<U>>::promote_rhs(rhs.0[i])
        }))
    }
}

/// Scalar multiplication in the promoted element type.
impl<T, S, const N: usize> Mul<S> for VecN<T, N>
where
    T: Promote<S>,
    S: Scalar,
{
    type Output = VecN<<T as Promote<S>>::Output, N>;

    fn mul(self, rhs: S) -> Self::Output {
        let rhs = <T as Promote<S>>::promote_rhs(rhs);
        VecN(self.0.map(|v| <T as Promote<S>>::promote(v) * rhs))
    }
}

/// Scalar division in the promoted element type.
impl<T, S, const N: usize> Div<S> for VecN<T, N>
where
    T: Promote<S>,
    S: Scalar,
{
    type Output = VecN<<T as Promote<S>>::Output, N>;

    fn div(self, rhs: S) -> Self::Output {
        let rhs = <T as Promote<S>>::promote_rhs(rhs);
        VecN(self.0.map(|v| <T as Promote<S>>::promote(v) / rhs))
    }
}

impl<T: Scalar, const N: usize> Neg for VecN<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

impl<T: Scalar, U: Scalar, const N: usize> AddAssign<VecN<U, N>> for VecN<T, N> {
    fn add_assign(&mut self, rhs: VecN<U, N>) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs = T::from_f64(lhs.to_f64() + rhs.to_f64());
        }
    }
}

impl<T: Scalar, U: Scalar, const N: usize> SubAssign<VecN<U, N>> for VecN<T, N> {
    fn sub_assign(&mut self, rhs: VecN<U, N>) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs = T::from_f64(lhs.to_f64() - rhs.to_f64());
        }
    }
}

impl<T: Scalar, S: Scalar, const N: usize> MulAssign<S> for VecN<T, N> {
    fn mul_assign(&mut self, rhs: S) {
        let rhs = rhs.to_f64();
        for v in self.0.iter_mut() {
            *v = T::from_f64(v.to_f64() * rhs);
        }
    }
}

impl<T: Scalar, S: Scalar, const N: usize> DivAssign<S> for VecN<T, N> {
    fn div_assign(&mut self, rhs: S) {
        let rhs = rhs.to_f64();
        for v in self.0.iter_mut() {
            *v = T::from_f64(v.to_f64() / rhs);
        }
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for VecN<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

impl<T, const N: usize> AbsDiffEq for VecN<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for VecN<T, N>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

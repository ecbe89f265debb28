// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{MathError, EPSILON};

/// Fixed-dimension `f32` vector.
///
/// * The component count is part of the type; storage is an inline
///   `[f32; N]` and is never reallocated.
/// * Values are `Copy`. Named accessors (`x()`, `y()`, ...) for the common
///   sizes live on the [`Vec2`], [`Vec3`] and [`Vec4`] aliases and read the
///   same storage; there are no aliasing references into it.
///
/// # Examples
/// ```
/// use gimbal_math::Vec3;
/// let a = Vec3::new(1.0, 2.0, 3.0);
/// let b = Vec3::new(4.0, 5.0, 6.0);
/// assert_eq!(a.dot(&b), 32.0);
/// assert_eq!((a + b).to_array(), [5.0, 7.0, 9.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector<const N: usize> {
    data: [f32; N],
}

/// Two-component vector.
pub type Vec2 = Vector<2>;
/// Three-component vector.
pub type Vec3 = Vector<3>;
/// Four-component vector.
pub type Vec4 = Vector<4>;

impl<const N: usize> Vector<N> {
    /// Vector with every component set to zero.
    pub const ZERO: Self = Self { data: [0.0; N] };

    /// Creates a vector from its components.
    pub const fn from_array(data: [f32; N]) -> Self {
        Self { data }
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; N] {
        self.data
    }

    /// Borrows the components as a slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Number of components (`N`).
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` only for the zero-dimensional vector.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::from_array(core::array::from_fn(|i| self.data[i] + other.data[i]))
    }

    /// Component-wise difference.
    pub fn sub(&self, other: &Self) -> Self {
        Self::from_array(core::array::from_fn(|i| self.data[i] - other.data[i]))
    }

    /// Returns the vector scaled by `scalar`.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::from_array(self.data.map(|c| c * scalar))
    }

    /// Dot product, `Σ aᵢ·bᵢ`.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Squared length.
    pub fn sq_magnitude(&self) -> f32 {
        self.dot(self)
    }

    /// Length (Euclidean norm).
    pub fn magnitude(&self) -> f32 {
        self.sq_magnitude().sqrt()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// Degenerate policy: when the length is ≤ [`EPSILON`] the zero vector is
    /// returned instead of NaN components, so callers can detect it with
    /// [`Vector::is_zero`]. Use [`Vector::try_normal`] to get an error.
    pub fn normal(&self) -> Self {
        let len = self.magnitude();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Strict variant of [`Vector::normal`].
    pub fn try_normal(&self) -> Result<Self, MathError> {
        let len = self.magnitude();
        if len <= EPSILON {
            return Err(MathError::ZeroLength);
        }
        Ok(self.scale(1.0 / len))
    }

    /// Normalizes in place, following the same degenerate policy as
    /// [`Vector::normal`].
    pub fn normalize(&mut self) {
        *self = self.normal();
    }

    /// Angle in radians between `self` and `other`, in `[0, π]`.
    ///
    /// The cosine ratio is clamped to `[-1, 1]` before `acos`, so (anti)parallel
    /// inputs never produce NaN through rounding. Returns `0.0` when either
    /// vector has length ≤ [`EPSILON`].
    pub fn angle(&self, other: &Self) -> f32 {
        let denom = self.magnitude() * other.magnitude();
        if denom <= EPSILON * EPSILON {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(-1.0, 1.0).acos()
    }

    /// Sets every component to zero.
    pub fn zero(&mut self) {
        self.data = [0.0; N];
    }

    /// Returns `true` when every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&c| c == 0.0)
    }

    /// Rescales the vector to length `magnitude`; the zero vector is left
    /// unchanged.
    pub fn set_magnitude(&mut self, magnitude: f32) {
        let current = self.magnitude();
        if current != 0.0 {
            *self = self.scale(magnitude / current);
        }
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    fn from(value: [f32; N]) -> Self {
        Self { data: value }
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    fn from(value: Vector<N>) -> Self {
        value.data
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vector::add(&self, &rhs)
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vector::sub(&self, &rhs)
    }
}

impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl<const N: usize> Mul<Vector<N>> for f32 {
    type Output = Vector<N>;
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        rhs.scale(self)
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vector::add(self, &rhs);
    }
}

impl<const N: usize> SubAssign for Vector<N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Vector::sub(self, &rhs);
    }
}

impl<const N: usize> MulAssign<f32> for Vector<N> {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

/// Formats as `<a, b, c>`.
impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(">")
    }
}

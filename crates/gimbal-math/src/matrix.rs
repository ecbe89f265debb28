// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use crate::{MathError, Vector};

/// Row-major `N×N` matrix of `f32`.
///
/// * `element(row, col)` addresses row `row`, column `col`.
/// * Vectors multiply as columns: `M * v`.
/// * [`SquareMatrix::as_flat`] exposes the row-major buffer handed to the
///   renderer; transpose-on-upload is the renderer's concern.
///
/// Determinant, cofactors and inverse are defined recursively on the size
/// through [`Minor`] and [`Determinant`], implemented for `N` in `1..=4`.
///
/// # Examples
/// ```
/// use gimbal_math::{Determinant, Mat3};
/// let m = Mat3::from_rows([[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]);
/// assert_eq!(m.determinant(), 24.0);
/// assert!((m.inverse().element(0, 0) - 0.5).abs() < 1e-6);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SquareMatrix<const N: usize> {
    rows: [[f32; N]; N],
}

/// 2×2 matrix.
pub type Mat2 = SquareMatrix<2>;
/// 3×3 matrix (2D homogeneous transforms).
pub type Mat3 = SquareMatrix<3>;
/// 4×4 matrix (3D homogeneous transforms).
pub type Mat4 = SquareMatrix<4>;

/// Submatrix obtained by striking one row and one column.
pub trait Minor {
    /// The matrix one size smaller.
    type Output;

    /// Returns the matrix without `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> Self::Output;
}

/// Determinant by cofactor expansion.
pub trait Determinant {
    /// Returns the determinant.
    fn determinant(&self) -> f32;
}

impl<const N: usize> SquareMatrix<N> {
    /// Matrix with every element zero (the additive identity).
    pub const ZERO: Self = Self {
        rows: [[0.0; N]; N],
    };

    /// Returns the identity matrix.
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { 1.0 } else { 0.0 })
    }

    /// Creates a matrix from row-major rows.
    pub const fn from_rows(rows: [[f32; N]; N]) -> Self {
        Self { rows }
    }

    /// Builds a matrix by evaluating `f(row, col)` for every element.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> f32) -> Self {
        Self {
            rows: core::array::from_fn(|row| core::array::from_fn(|col| f(row, col))),
        }
    }

    /// Returns the rows.
    pub const fn to_rows(self) -> [[f32; N]; N] {
        self.rows
    }

    /// Borrows the elements as one contiguous row-major slice of `N*N` floats.
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(self.rows.as_slice())
    }

    /// Element at (`row`, `col`).
    pub fn element(&self, row: usize, col: usize) -> f32 {
        self.rows[row][col]
    }

    /// Sets the element at (`row`, `col`).
    pub fn set_element(&mut self, row: usize, col: usize, value: f32) {
        self.rows[row][col] = value;
    }

    /// Returns row `row` as a vector.
    pub fn row(&self, row: usize) -> Vector<N> {
        Vector::from_array(self.rows[row])
    }

    /// Returns column `col` as a vector.
    pub fn col(&self, col: usize) -> Vector<N> {
        Vector::from_array(core::array::from_fn(|row| self.rows[row][col]))
    }

    /// Overwrites row `row`.
    pub fn set_row(&mut self, row: usize, values: &Vector<N>) {
        self.rows[row] = values.to_array();
    }

    /// Overwrites column `col`.
    pub fn set_col(&mut self, col: usize, values: &Vector<N>) {
        for (row, value) in self.rows.iter_mut().zip(values.as_slice()) {
            row[col] = *value;
        }
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        Self::from_fn(|row, col| self.rows[col][row])
    }

    /// Checkerboard sign of the cofactor at (`row`, `col`): `+1` when
    /// `row + col` is even, `-1` otherwise.
    pub const fn cofactor_sign(row: usize, col: usize) -> f32 {
        if (row + col) % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    }

    /// Matrix product `self * rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self::from_fn(|row, col| self.row(row).dot(&rhs.col(col)))
    }

    /// Matrix-vector product, treating `v` as an `N×1` column.
    pub fn mul_vector(&self, v: &Vector<N>) -> Vector<N> {
        Vector::from_array(core::array::from_fn(|row| self.row(row).dot(v)))
    }

    /// Returns every element multiplied by `scalar`.
    pub fn scale_by(&self, scalar: f32) -> Self {
        Self::from_fn(|row, col| self.rows[row][col] * scalar)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::from_fn(|row, col| f(self.rows[row][col], other.rows[row][col]))
    }
}

impl<const N: usize> SquareMatrix<N>
where
    Self: Minor,
    <Self as Minor>::Output: Determinant,
{
    /// Signed minor determinant at (`row`, `col`).
    pub fn cofactor(&self, row: usize, col: usize) -> f32 {
        Self::cofactor_sign(row, col) * self.minor(row, col).determinant()
    }

    /// Matrix of all cofactors.
    pub fn cofactor_matrix(&self) -> Self {
        Self::from_fn(|row, col| self.cofactor(row, col))
    }

    /// Adjugate, the transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Self {
        self.cofactor_matrix().transpose()
    }
}

impl<const N: usize> SquareMatrix<N>
where
    Self: Minor + Determinant,
    <Self as Minor>::Output: Determinant,
{
    /// Inverse via `adjugate / determinant`.
    ///
    /// Caller-checks policy: when the determinant is exactly `0.0` this
    /// returns [`SquareMatrix::ZERO`] rather than failing. Check the
    /// determinant first, or use [`SquareMatrix::try_inverse`], when a singular
    /// input must be told apart.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or(Self::ZERO)
    }

    /// Strict variant of [`SquareMatrix::inverse`].
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(MathError::Singular);
        }
        Ok(self.adjugate().scale_by(1.0 / det))
    }
}

/// Copies `src` without `skip_row`/`skip_col` into an `M×M` array (`M = N-1`).
fn strike<const N: usize, const M: usize>(
    src: &[[f32; N]; N],
    skip_row: usize,
    skip_col: usize,
) -> [[f32; M]; M] {
    debug_assert_eq!(M + 1, N, "minor must be exactly one size smaller");
    let mut out = [[0.0; M]; M];
    let kept_rows = src
        .iter()
        .enumerate()
        .filter(|(r, _)| *r != skip_row)
        .map(|(_, row)| row);
    for (dst, row) in out.iter_mut().zip(kept_rows) {
        let kept = row
            .iter()
            .enumerate()
            .filter(|(c, _)| *c != skip_col)
            .map(|(_, v)| *v);
        for (slot, value) in dst.iter_mut().zip(kept) {
            *slot = value;
        }
    }
    out
}

impl Determinant for SquareMatrix<1> {
    fn determinant(&self) -> f32 {
        self.rows[0][0]
    }
}

macro_rules! impl_cofactor_expansion {
    ($($n:literal => $m:literal),* $(,)?) => {$(
        impl Minor for SquareMatrix<$n> {
            type Output = SquareMatrix<$m>;

            fn minor(&self, row: usize, col: usize) -> SquareMatrix<$m> {
                SquareMatrix::from_rows(strike::<$n, $m>(&self.rows, row, col))
            }
        }

        impl Determinant for SquareMatrix<$n> {
            // Expansion along row 0.
            fn determinant(&self) -> f32 {
                (0..$n).map(|col| self.rows[0][col] * self.cofactor(0, col)).sum()
            }
        }
    )*};
}

impl_cofactor_expansion!(2 => 1, 3 => 2, 4 => 3);

impl<const N: usize> Default for SquareMatrix<N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const N: usize> From<[[f32; N]; N]> for SquareMatrix<N> {
    fn from(rows: [[f32; N]; N]) -> Self {
        Self { rows }
    }
}

impl<const N: usize> Index<usize> for SquareMatrix<N> {
    type Output = [f32; N];
    fn index(&self, row: usize) -> &[f32; N] {
        &self.rows[row]
    }
}

impl<const N: usize> IndexMut<usize> for SquareMatrix<N> {
    fn index_mut(&mut self, row: usize) -> &mut [f32; N] {
        &mut self.rows[row]
    }
}

impl<const N: usize> Mul for SquareMatrix<N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<const N: usize> Mul<Vector<N>> for SquareMatrix<N> {
    type Output = Vector<N>;
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        self.mul_vector(&rhs)
    }
}

impl<const N: usize> Mul<f32> for SquareMatrix<N> {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale_by(rhs)
    }
}

impl<const N: usize> Add for SquareMatrix<N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl<const N: usize> Sub for SquareMatrix<N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl<const N: usize> MulAssign for SquareMatrix<N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<const N: usize> MulAssign<f32> for SquareMatrix<N> {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale_by(rhs);
    }
}

impl<const N: usize> AddAssign for SquareMatrix<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const N: usize> SubAssign for SquareMatrix<N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// One row per line, formatted as `[a, b, c]`.
impl<const N: usize> fmt::Display for SquareMatrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows.iter().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            f.write_str("[")?;
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{value}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minor_strikes_row_and_column() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.minor(1, 1).to_rows(), [[1.0, 3.0], [7.0, 9.0]]);
        assert_eq!(m.minor(0, 2).to_rows(), [[4.0, 5.0], [7.0, 8.0]]);
    }

    #[test]
    fn one_by_one_determinant_is_the_element() {
        assert_eq!(SquareMatrix::<1>::from_rows([[-3.5]]).determinant(), -3.5);
    }

    #[test]
    fn flat_view_is_row_major() {
        let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.as_flat(), &[1.0, 2.0, 3.0, 4.0]);
    }
}

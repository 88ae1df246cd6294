//! Fixed-dimension matrix built from row vectors.
//!
//! # Convention
//! - Storage is **row-major**: `m[row][col]`
//! - Vectors are **column vectors** on the right: `Matrix * Vector`
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use super::scalar::Scalar;
use super::vector::Vector;

/// `R x C` matrix stored as `R` row vectors of length `C`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> {
    rows: [Vector<T, C>; R],
}

pub type Matrix2<T> = Matrix<T, 2, 2>;
pub type Matrix3<T> = Matrix<T, 3, 3>;
pub type Matrix4<T> = Matrix<T, 4, 4>;

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    pub fn new(data: [[T; C]; R]) -> Self {
        Self {
            rows: data.map(Vector::new),
        }
    }

    pub fn from_rows(rows: [Vector<T, C>; R]) -> Self {
        Self { rows }
    }

    pub fn zero() -> Self {
        Self {
            rows: [Vector::zero(); R],
        }
    }

    pub const fn n_rows(&self) -> usize {
        R
    }

    pub const fn n_cols(&self) -> usize {
        C
    }

    pub fn rows(&self) -> &[Vector<T, C>; R] {
        &self.rows
    }

    pub fn column(&self, col: usize) -> Vector<T, R> {
        let mut out = Vector::zero();
        for row in 0..R {
            out[row] = self.rows[row][col];
        }
        out
    }

    pub fn transpose(&self) -> Matrix<T, C, R> {
        let mut out = Matrix::<T, C, R>::zero();
        for row in 0..R {
            for col in 0..C {
                out[col][row] = self.rows[row][col];
            }
        }
        out
    }
}

impl<T: Scalar> Matrix<T, 3, 3> {
    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        let m = &self.rows;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = Vector<T, C>;

    #[inline]
    fn index(&self, row: usize) -> &Vector<T, C> {
        &self.rows[row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut Vector<T, C> {
        &mut self.rows[row]
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        for (row, other) in self.rows.iter_mut().zip(rhs.rows) {
            *row += other;
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        for (row, other) in self.rows.iter_mut().zip(rhs.rows) {
            *row -= other;
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: T) {
        for row in self.rows.iter_mut() {
            *row *= rhs;
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C> {
    fn div_assign(&mut self, rhs: T) {
        for row in self.rows.iter_mut() {
            *row /= rhs;
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

// Scalar products are spelled out per float type so they stay disjoint from
// the matrix-vector and matrix-matrix `Mul` impls.
macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Mul<$t> for Matrix<$t, R, C> {
                type Output = Self;

                fn mul(mut self, rhs: $t) -> Self {
                    self *= rhs;
                    self
                }
            }

            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64);

/// Transform a column vector: each output component is a row dotted with `v`.
impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, v: Vector<T, C>) -> Vector<T, R> {
        let mut out = Vector::zero();
        for row in 0..R {
            out[row] = self.rows[row].dot(&v);
        }
        out
    }
}

/// Matrix product `(L x M) * (M x N) -> (L x N)`.
///
/// For column vectors, `A * B * v` applies B first, then A.
impl<T: Scalar, const L: usize, const M: usize, const N: usize> Mul<Matrix<T, M, N>>
    for Matrix<T, L, M>
{
    type Output = Matrix<T, L, N>;

    fn mul(self, rhs: Matrix<T, M, N>) -> Matrix<T, L, N> {
        let mut out = Matrix::<T, L, N>::zero();
        for n in 0..N {
            for l in 0..L {
                for m in 0..M {
                    out[l][n] += self.rows[l][m] * rhs.rows[m][n];
                }
            }
        }
        out
    }
}

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
where
    T: Scalar + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::transform::identity;
    use approx::assert_relative_eq;

    fn sample() -> Matrix<f64, 2, 3> {
        Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])
    }

    #[test]
    fn transpose_swaps_shape() {
        let t = sample().transpose();
        assert_eq!(t.n_rows(), 3);
        assert_eq!(t.n_cols(), 2);
        assert_eq!(t, Matrix::new([[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]));
        assert_eq!(t.transpose(), sample());
    }

    #[test]
    fn matrix_vector_product() {
        let v = Vector::new([1.0, 0.0, -1.0]);
        assert_eq!(sample() * v, Vector::new([-2.0, -2.0]));
    }

    #[test]
    fn matrix_matrix_product() {
        let a = sample();
        let b = Matrix::new([[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
        assert_eq!(a * b, Matrix::new([[4.0, 5.0], [10.0, 11.0]]));
    }

    #[test]
    fn product_with_transpose_is_symmetric() {
        let m = sample();
        let p = m * m.transpose();
        assert_eq!(p, p.transpose());
    }

    #[test]
    fn orthonormal_rows_give_identity() {
        let s = 0.5f64.sqrt();
        let m = Matrix::new([[s, s, 0.0], [-s, s, 0.0], [0.0, 0.0, 1.0]]);
        assert_relative_eq!(m * m.transpose(), identity::<f64, 3>(), epsilon = 1e-12);
    }

    #[test]
    fn elementwise_and_scalar_ops() {
        let a = sample();
        assert_eq!(a + a, 2.0 * a);
        assert_eq!(a - a, Matrix::zero());
        assert_eq!((a * 4.0) / 2.0, a + a);
    }

    #[test]
    fn column_reads_down_rows() {
        assert_eq!(sample().column(1), Vector::new([2.0, 5.0]));
    }

    #[test]
    fn determinant_of_identity_and_swap() {
        assert_eq!(identity::<f32, 3>().determinant(), 1.0);
        let swap = Matrix::new([[0.0f32, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(swap.determinant(), -1.0);
    }
}

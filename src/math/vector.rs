//! Fixed-dimension vector.
//!
//! [`Vector<T, N>`] stores `N` components positionally (`x, y, z, w` for the
//! usual dimensions). The arity is part of the type, so adding a 2D vector to
//! a 3D vector does not compile.
//!
//! ```ignore
//! let a = Vector::new([3.0, 4.0]);
//! let b = Vector::new([5.0, 12.0]);
//! assert_eq!(a.norm(), 5.0);
//! assert_eq!(a.dot(&b), 63.0);
//! ```

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use super::scalar::Scalar;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
pub type Vector4<T> = Vector<T, 4>;

impl<T, const N: usize> Vector<T, N> {
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    pub fn into_array(self) -> [T; N] {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn zero() -> Self {
        Self::new([T::ZERO; N])
    }

    pub fn dot(&self, other: &Self) -> T {
        let mut sum = T::ZERO;
        for idx in 0..N {
            sum += self.data[idx] * other.data[idx];
        }
        sum
    }

    /// Squared euclidean length, `self · self`.
    pub fn sqr_norm(&self) -> T {
        self.dot(self)
    }

    /// Euclidean (L2) length.
    pub fn norm(&self) -> T {
        self.sqr_norm().sqrt()
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// The zero vector has no direction; every component comes out NaN.
    pub fn normalize(&self) -> Self {
        *self / self.norm()
    }
}

impl<T: Scalar> Vector<T, 2> {
    pub fn x(&self) -> T {
        self.data[0]
    }

    pub fn y(&self) -> T {
        self.data[1]
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub fn x(&self) -> T {
        self.data[0]
    }

    pub fn y(&self) -> T {
        self.data[1]
    }

    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Returns the cross product of two vectors.
    /// The resulting vector is perpendicular to both input vectors.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

impl<T: Scalar> Vector<T, 4> {
    pub fn w(&self) -> T {
        self.data[3]
    }
}

/// Moves between a vector and its homogeneous counterpart one dimension up.
macro_rules! impl_affine_dims {
    ($($n:literal => $m:literal),* $(,)?) => {
        $(
            impl<T: Scalar> Vector<T, $m> {
                /// Drops the trailing homogeneous component.
                pub fn truncate(&self) -> Vector<T, $n> {
                    let mut data = [T::ZERO; $n];
                    data.copy_from_slice(&self.data[..$n]);
                    Vector::new(data)
                }
            }

            impl<T: Scalar> Vector<T, $n> {
                /// Appends `w` as a trailing homogeneous component.
                pub fn extend_with(&self, w: T) -> Vector<T, $m> {
                    let mut data = [w; $m];
                    data[..$n].copy_from_slice(&self.data);
                    Vector::new(data)
                }
            }
        )*
    };
}

impl_affine_dims!(1 => 2, 2 => 3, 3 => 4);

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &T {
        &self.data[idx]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.data[idx]
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for idx in 0..N {
            self.data[idx] += rhs.data[idx];
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for idx in 0..N {
            self.data[idx] -= rhs.data[idx];
        }
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        for idx in 0..N {
            self.data[idx] *= rhs;
        }
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    /// Multiplies by the reciprocal; a zero divisor is not guarded.
    fn div_assign(&mut self, rhs: T) {
        *self *= T::ONE / rhs;
    }
}

/// Component-wise addition of two vectors.
impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// Component-wise subtraction of two vectors.
impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

/// Scalar multiplication of a vector.
impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

/// Scalar division of a vector.
impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for c in self.data.iter_mut() {
            *c = -*c;
        }
        self
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: Scalar + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

//! Transform builders: identity, translation, axis-angle rotation and
//! homogeneous extension.
//!
//! `translation` and `extend` produce a matrix one dimension larger than their
//! input. Const generics cannot spell `N + 1` on stable, so both go through a
//! small trait implemented for the 1D, 2D and 3D cases.

use super::matrix::Matrix;
use super::scalar::Scalar;
use super::vector::Vector;

pub fn identity<T: Scalar, const N: usize>() -> Matrix<T, N, N> {
    let mut result = Matrix::zero();
    for n in 0..N {
        result[n][n] = T::ONE;
    }
    result
}

/// Vectors that can be turned into a homogeneous translation matrix.
pub trait Translation {
    type Output;

    fn translation(&self) -> Self::Output;
}

/// Square matrices that can be embedded one dimension up.
pub trait Extend {
    type Output;

    fn extend(&self) -> Self::Output;
}

macro_rules! impl_homogeneous {
    ($($n:literal => $m:literal),* $(,)?) => {
        $(
            impl<T: Scalar> Translation for Vector<T, $n> {
                type Output = Matrix<T, $m, $m>;

                fn translation(&self) -> Matrix<T, $m, $m> {
                    let mut result = identity::<T, $m>();
                    for n in 0..$n {
                        result[n][$n] = self[n];
                    }
                    result
                }
            }

            impl<T: Scalar> Extend for Matrix<T, $n, $n> {
                type Output = Matrix<T, $m, $m>;

                fn extend(&self) -> Matrix<T, $m, $m> {
                    let mut result = Matrix::<T, $m, $m>::zero();
                    for row in 0..$n {
                        for col in 0..$n {
                            result[row][col] = self[row][col];
                        }
                    }
                    result[$n][$n] = T::ONE;
                    result
                }
            }
        )*
    };
}

impl_homogeneous!(1 => 2, 2 => 3, 3 => 4);

/// Homogeneous matrix translating by `v`.
///
/// Identity one dimension up, with `v` in the first rows of the last column.
pub fn translation<V: Translation>(v: &V) -> V::Output {
    v.translation()
}

/// Embeds a linear map into the top-left block of a homogeneous matrix.
///
/// The new row and column are zero apart from a 1 on the diagonal, so no
/// translation is introduced.
pub fn extend<M: Extend>(m: &M) -> M::Output {
    m.extend()
}

/// Rotation from an axis-angle vector.
///
/// The direction of `axis_angle` is the rotation axis and its length is the
/// angle in radians. A zero vector yields the identity. Otherwise Rodrigues'
/// formula is applied to the normalized axis `v`:
///
/// ```text
/// R = cos(a) * I + (1 - cos(a)) * (v ⊗ v) + sin(a) * [v]x
/// ```
///
/// where `[v]x` is the cross-product matrix, so `R * x` rotates `x`
/// counter-clockwise around `v` (right-hand rule).
pub fn rotation<T: Scalar>(axis_angle: Vector<T, 3>) -> Matrix<T, 3, 3> {
    let angle = axis_angle.norm();
    if angle == T::ZERO {
        return identity();
    }

    let v = axis_angle / angle;
    let cos = angle.cos();
    let sin = angle.sin();

    let mut outer = Matrix::<T, 3, 3>::zero();
    for row in 0..3 {
        for col in 0..3 {
            outer[row][col] = v[row] * v[col];
        }
    }

    let zero = T::ZERO;
    let mut cross = Matrix::new([
        [zero, -v[2], v[1]],
        [v[2], zero, -v[0]],
        [-v[1], v[0], zero],
    ]);

    let mut result = identity::<T, 3>();
    result *= cos;
    outer *= T::ONE - cos;
    cross *= sin;
    result + outer + cross
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn identity_has_unit_diagonal() {
        let m = identity::<f32, 4>();
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(m[row][col], if row == col { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn translation_moves_points_not_directions() {
        let t = translation(&Vector::new([1.0f64, -2.0, 3.0]));
        let point = Vector::new([1.0, 1.0, 1.0, 1.0]);
        let direction = Vector::new([1.0, 1.0, 1.0, 0.0]);
        assert_eq!(t * point, Vector::new([2.0, -1.0, 4.0, 1.0]));
        assert_eq!(t * direction, direction);
    }

    #[test]
    fn translation_2d() {
        let t = translation(&Vector::new([5.0f32, 7.0]));
        assert_eq!(t, Matrix::new([[1.0, 0.0, 5.0], [0.0, 1.0, 7.0], [0.0, 0.0, 1.0]]));
    }

    #[test]
    fn zero_rotation_is_identity() {
        assert_eq!(rotation(Vector::<f64, 3>::zero()), identity::<f64, 3>());
    }

    #[test]
    fn rotation_is_orthogonal() {
        for axis_angle in [
            Vector::new([0.3f64, -1.2, 0.7]),
            Vector::new([0.0, 0.0, 5.0]),
            Vector::new([-2.0, 0.1, 0.0]),
        ] {
            let r = rotation(axis_angle);
            assert_relative_eq!(r * r.transpose(), identity::<f64, 3>(), epsilon = 1e-12);
            assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn quarter_turn_about_z() {
        let r = rotation(Vector::new([0.0, 0.0, FRAC_PI_2]));
        let x = Vector::new([1.0, 0.0, 0.0]);
        assert_relative_eq!(r * x, Vector::new([0.0, 1.0, 0.0]), epsilon = 1e-12);
    }

    #[test]
    fn skew_sign_convention() {
        // Small angle: R ~ I + a * [v]x, so the off-diagonals expose the sign.
        let a = 1e-6f64;
        let r = rotation(Vector::new([a, 0.0, 0.0]));
        assert!(r[1][2] < 0.0);
        assert!(r[2][1] > 0.0);
    }

    #[test]
    fn rotation_keeps_axis_fixed() {
        let axis = Vector::new([1.0f64, 2.0, 2.0]);
        let r = rotation(axis.normalize() * PI / 3.0);
        assert_relative_eq!(r * axis, axis, epsilon = 1e-12);
    }

    #[test]
    fn extend_embeds_linear_map() {
        let m = rotation(Vector::new([0.4f64, 0.5, -0.6]));
        let e = extend(&m);
        assert_eq!(e[3][3], 1.0);
        for i in 0..3 {
            assert_eq!(e[i][3], 0.0);
            assert_eq!(e[3][i], 0.0);
        }

        let x = Vector::new([1.0, -3.0, 2.0]);
        assert_eq!(e * x.extend_with(0.0), (m * x).extend_with(0.0));
    }

    #[test]
    fn composition_order_matters() {
        let pitch = rotation(Vector::new([FRAC_PI_2, 0.0, 0.0]));
        let yaw = rotation(Vector::new([0.0, FRAC_PI_2, 0.0]));
        let x = Vector::new([1.0, 0.0, 0.0]);
        // yaw takes x to -z, pitch takes -z to +y
        assert_relative_eq!(pitch * yaw * x, Vector::new([0.0, 1.0, 0.0]), epsilon = 1e-12);
        // the other way round leaves -z
        assert_relative_eq!(yaw * pitch * x, Vector::new([0.0, 0.0, -1.0]), epsilon = 1e-12);
    }

    #[test]
    fn translated_rotation() {
        let model = translation(&Vector::new([0.0f64, 0.0, 4.0]))
            * extend(&rotation(Vector::new([0.0, 0.0, FRAC_PI_2])));
        let p = Vector::new([1.0, 0.0, 0.0, 1.0]);
        assert_relative_eq!(model * p, Vector::new([0.0, 1.0, 4.0, 1.0]), epsilon = 1e-12);
    }
}

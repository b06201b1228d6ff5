//! Scalar capability shared by every screw type.
//!
//! All the types of this crate are generic over a [`Real`] scalar. The trait is implemented for
//! `f32` and `f64` through a small `macro_rules!` helper, and maps each precision onto the
//! matching `glam` storage (`Vec3`/`Mat3`/`Mat4` or `DVec3`/`DMat3`/`DMat4`), so the dense
//! fixed-size linear algebra is always delegated to `glam`.

use std::fmt::{self, Debug, Display};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use num_traits::{Float, FloatConst};

/// Norm threshold under which vectors and generators are treated as zero.
pub const NORM_EPSILON: f64 = 1e-10;

/// Large value returned for quantities that are infinite by construction (e.g. the pitch of a
/// pure translation).
pub const INFINITE_PITCH: f64 = 1e10;

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating point scalar usable by the screw types.
///
/// This trait is sealed: it is implemented for `f32` and `f64` only.
pub trait Real:
    Float + FloatConst + Default + Debug + Display + Send + Sync + 'static + private::Sealed
{
    /// The `glam` 3-vector of this precision.
    type Vec3: Copy
        + Debug
        + PartialEq
        + Default
        + Send
        + Sync
        + Index<usize, Output = Self>
        + IndexMut<usize>
        + Add<Output = Self::Vec3>
        + Sub<Output = Self::Vec3>
        + Neg<Output = Self::Vec3>
        + Mul<Output = Self::Vec3>
        + Mul<Self, Output = Self::Vec3>
        + Div<Self, Output = Self::Vec3>;

    /// The `glam` 3x3 matrix of this precision.
    type Mat3: Copy
        + Debug
        + PartialEq
        + Send
        + Sync
        + Add<Output = Self::Mat3>
        + Sub<Output = Self::Mat3>
        + Mul<Output = Self::Mat3>
        + Mul<Self::Vec3, Output = Self::Vec3>
        + Mul<Self, Output = Self::Mat3>;

    /// The `glam` 4x4 matrix of this precision.
    type Mat4: Copy + Debug + PartialEq + Send + Sync;

    /// Convert an `f64` literal into this precision.
    fn cast(x: f64) -> Self;

    /// Default tolerance of the approximate comparisons (single precision epsilon).
    fn default_tolerance() -> Self;

    /// Tolerance used when checking that a matrix is a proper rotation.
    fn validity_tolerance() -> Self;

    /// Build a 3-vector.
    fn vec3(x: Self, y: Self, z: Self) -> Self::Vec3;

    /// Dot product of two 3-vectors.
    fn vec3_dot(a: Self::Vec3, b: Self::Vec3) -> Self;

    /// Cross product of two 3-vectors.
    fn vec3_cross(a: Self::Vec3, b: Self::Vec3) -> Self::Vec3;

    /// The 3x3 identity matrix.
    fn mat3_identity() -> Self::Mat3;

    /// The 3x3 zero matrix.
    fn mat3_zero() -> Self::Mat3;

    /// Build a 3x3 matrix from its columns.
    fn mat3_from_cols(c0: Self::Vec3, c1: Self::Vec3, c2: Self::Vec3) -> Self::Mat3;

    /// Build a 3x3 matrix from row-major entries.
    fn mat3_from_rows(rows: &[[Self; 3]; 3]) -> Self::Mat3;

    /// Column `j` of a 3x3 matrix.
    fn mat3_col(m: &Self::Mat3, j: usize) -> Self::Vec3;

    /// Element `(i, j)` of a 3x3 matrix.
    fn mat3_get(m: &Self::Mat3, i: usize, j: usize) -> Self {
        Self::mat3_col(m, j)[i]
    }

    /// Transpose of a 3x3 matrix.
    fn mat3_transpose(m: &Self::Mat3) -> Self::Mat3;

    /// Determinant of a 3x3 matrix.
    fn mat3_determinant(m: &Self::Mat3) -> Self;

    /// Homogeneous 4x4 matrix `[[m, t], [0, 1]]`.
    fn mat4_from_rotation_translation(m: &Self::Mat3, t: Self::Vec3) -> Self::Mat4;

    /// Element `(i, j)` of a 4x4 matrix.
    fn mat4_get(m: &Self::Mat4, i: usize, j: usize) -> Self;
}

macro_rules! impl_real {
    ($scalar:ty, $vec3:ty, $mat3:ty, $mat4:ty, $validity:expr) => {
        impl Real for $scalar {
            type Vec3 = $vec3;
            type Mat3 = $mat3;
            type Mat4 = $mat4;

            #[inline]
            fn cast(x: f64) -> Self {
                x as $scalar
            }

            #[inline]
            fn default_tolerance() -> Self {
                f32::EPSILON as $scalar
            }

            #[inline]
            fn validity_tolerance() -> Self {
                $validity
            }

            #[inline]
            fn vec3(x: Self, y: Self, z: Self) -> Self::Vec3 {
                <$vec3>::new(x, y, z)
            }

            #[inline]
            fn vec3_dot(a: Self::Vec3, b: Self::Vec3) -> Self {
                a.dot(b)
            }

            #[inline]
            fn vec3_cross(a: Self::Vec3, b: Self::Vec3) -> Self::Vec3 {
                a.cross(b)
            }

            #[inline]
            fn mat3_identity() -> Self::Mat3 {
                <$mat3>::IDENTITY
            }

            #[inline]
            fn mat3_zero() -> Self::Mat3 {
                <$mat3>::ZERO
            }

            #[inline]
            fn mat3_from_cols(c0: Self::Vec3, c1: Self::Vec3, c2: Self::Vec3) -> Self::Mat3 {
                <$mat3>::from_cols(c0, c1, c2)
            }

            #[inline]
            fn mat3_from_rows(rows: &[[Self; 3]; 3]) -> Self::Mat3 {
                <$mat3>::from_cols(
                    <$vec3>::new(rows[0][0], rows[1][0], rows[2][0]),
                    <$vec3>::new(rows[0][1], rows[1][1], rows[2][1]),
                    <$vec3>::new(rows[0][2], rows[1][2], rows[2][2]),
                )
            }

            #[inline]
            fn mat3_col(m: &Self::Mat3, j: usize) -> Self::Vec3 {
                m.col(j)
            }

            #[inline]
            fn mat3_transpose(m: &Self::Mat3) -> Self::Mat3 {
                m.transpose()
            }

            #[inline]
            fn mat3_determinant(m: &Self::Mat3) -> Self {
                m.determinant()
            }

            #[inline]
            fn mat4_from_rotation_translation(m: &Self::Mat3, t: Self::Vec3) -> Self::Mat4 {
                let mut out = <$mat4>::from_mat3(*m);
                out.w_axis = t.extend(1.0);
                out
            }

            #[inline]
            fn mat4_get(m: &Self::Mat4, i: usize, j: usize) -> Self {
                m.col(j)[i]
            }
        }
    };
}

/// Row-major bracketed rendering, rows separated by `;` and a line break.
pub(crate) fn fmt_matrix<T: Display>(
    f: &mut fmt::Formatter<'_>,
    rows: usize,
    cols: usize,
    get: impl Fn(usize, usize) -> T,
) -> fmt::Result {
    for i in 0..rows {
        f.write_str(if i == 0 { "[" } else { " " })?;
        for j in 0..cols {
            if j > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", get(i, j))?;
        }
        f.write_str(if i + 1 == rows { "]" } else { ";\n" })?;
    }
    Ok(())
}

// f32 accumulates a few ulps in the orthonormality sums, so its validity band is wider.
impl_real!(f32, glam::Vec3, glam::Mat3, glam::Mat4, 8.0 * f32::EPSILON);
impl_real!(f64, glam::DVec3, glam::DMat3, glam::DMat4, f32::EPSILON as f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat3_from_rows_is_row_major() {
        let m = f64::mat3_from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(f64::mat3_get(&m, 0, 1), 2.0);
        assert_eq!(f64::mat3_get(&m, 1, 0), 4.0);
        assert_eq!(f64::mat3_get(&m, 2, 2), 9.0);
    }

    #[test]
    fn test_mat4_bottom_row() {
        let m = f32::mat4_from_rotation_translation(
            &f32::mat3_identity(),
            f32::vec3(1.0, 2.0, 3.0),
        );
        assert_eq!(f32::mat4_get(&m, 0, 3), 1.0);
        assert_eq!(f32::mat4_get(&m, 2, 3), 3.0);
        assert_eq!(f32::mat4_get(&m, 3, 0), 0.0);
        assert_eq!(f32::mat4_get(&m, 3, 3), 1.0);
    }

    #[test]
    fn test_tolerances() {
        assert_eq!(f64::default_tolerance(), f32::EPSILON as f64);
        assert!(f32::validity_tolerance() > f32::default_tolerance());
    }
}

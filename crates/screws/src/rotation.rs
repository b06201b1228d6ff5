//! # SO(3) — rotation matrices
//!
//! [`Rotation`] stores a proper 3x3 rotation matrix (orthonormal columns, determinant +1).
//! Every constructor that accepts raw data validates it; the closed-form constructors
//! (elementary axis, axis-angle, Rodrigues) produce valid matrices by construction.
//!
//! ## Axis-angle convention
//!
//! Angles handed to the constructors must lie in `[0, 2π)`. When the axis and the angle are
//! recovered from a matrix, the axis is canonicalised so that its x component is non-negative:
//! if it is negative, the axis is flipped and the angle becomes `2π - angle`. At the identity
//! (and at the 180° singularity where the antisymmetric part vanishes) the axis defaults to
//! `(0, 0, 1)`.

use std::fmt;
use std::ops::{Mul, MulAssign};

use approx::AbsDiffEq;
use rand::Rng;

use crate::error::{RotationDiagnostics, ScrewError, ScrewErrorKind};
use crate::scalar::{fmt_matrix, Real, NORM_EPSILON};
use crate::skew::Skew;
use crate::translation::Translation;

/// One of the three elementary axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The x axis.
    X,
    /// The y axis.
    Y,
    /// The z axis.
    Z,
}

impl Axis {
    /// The unit vector along this axis.
    pub fn unit<T: Real>(self) -> Translation<T> {
        let (o, i) = (T::zero(), T::one());
        match self {
            Axis::X => Translation::new(i, o, o),
            Axis::Y => Translation::new(o, i, o),
            Axis::Z => Translation::new(o, o, i),
        }
    }
}

impl TryFrom<char> for Axis {
    type Error = ScrewError;

    fn try_from(tag: char) -> Result<Self, Self::Error> {
        match tag {
            'x' => Ok(Axis::X),
            'y' => Ok(Axis::Y),
            'z' => Ok(Axis::Z),
            other => Err(screw_error!(ScrewErrorKind::InvalidAxis(other))),
        }
    }
}

/// A 3D rotation matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation<T: Real> {
    m: T::Mat3,
}

/// Single precision rotation.
pub type RotationF32 = Rotation<f32>;
/// Double precision rotation.
pub type RotationF64 = Rotation<f64>;

impl<T: Real> Rotation<T> {
    /// The identity rotation.
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: T::mat3_identity(),
        }
    }

    /// Trusted constructor for matrices that are rotations by construction.
    #[inline]
    pub(crate) fn from_matrix_unchecked(m: T::Mat3) -> Self {
        Self { m }
    }

    /// Create a rotation from a `glam` matrix.
    ///
    /// # Errors
    ///
    /// `InvalidRotation` if the matrix is not orthonormal with determinant +1.
    pub fn from_matrix(m: T::Mat3) -> Result<Self, ScrewError> {
        let r = Self { m };
        r.is_valid()?;
        Ok(r)
    }

    /// Create a rotation whose columns are `c0`, `c1` and `c2`.
    ///
    /// # Errors
    ///
    /// `InvalidRotation` if the columns are not orthonormal or the frame is left handed.
    pub fn from_columns(
        c0: &Translation<T>,
        c1: &Translation<T>,
        c2: &Translation<T>,
    ) -> Result<Self, ScrewError> {
        Self::from_matrix(T::mat3_from_cols(
            c0.to_glam(),
            c1.to_glam(),
            c2.to_glam(),
        ))
    }

    /// Rotation of `angle` radians around an elementary axis.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `angle` is not in `[0, 2π)`.
    pub fn about(axis: Axis, angle: T) -> Result<Self, ScrewError> {
        check_angle(angle)?;
        Ok(Self::rodrigues(&axis.unit(), angle))
    }

    /// Rotation of `angle` radians around the axis named by `tag` (`'x'`, `'y'` or `'z'`).
    ///
    /// # Errors
    ///
    /// `InvalidAxis` for any other tag, `OutOfRange` if `angle` is not in `[0, 2π)`.
    pub fn from_axis_tag(tag: char, angle: T) -> Result<Self, ScrewError> {
        Self::about(Axis::try_from(tag)?, angle)
    }

    /// Rotation of `angle` radians around `axis` (Rodrigues' formula). The axis does not need
    /// to be normalised.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` for a zero axis, `OutOfRange` if `angle` is not in `[0, 2π)`.
    pub fn from_axis_angle(axis: &Translation<T>, angle: T) -> Result<Self, ScrewError> {
        let k = axis.normalised()?;
        check_angle(angle)?;
        Ok(Self::rodrigues(&k, angle))
    }

    // R = I + sin(θ)[k] + (1 - cos(θ))[k]^2 for a unit axis k, expanded.
    fn rodrigues(k: &Translation<T>, theta: T) -> Self {
        let (ux, uy, uz) = (k.x(), k.y(), k.z());
        let cs = theta.cos();
        let ss = theta.sin();
        let vs = T::one() - cs;

        Self {
            m: T::mat3_from_rows(&[
                [cs + ux * ux * vs, ux * uy * vs - uz * ss, ux * uz * vs + uy * ss],
                [uy * ux * vs + uz * ss, cs + uy * uy * vs, uy * uz * vs - ux * ss],
                [ux * uz * vs - uy * ss, uz * uy * vs + ux * ss, cs + uz * uz * vs],
            ]),
        }
    }

    /// A right handed frame whose third column is the direction of `z_axis`.
    ///
    /// The x axis is seeded with the world axis least parallel to `z_axis`, so the result is
    /// deterministic.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` for a zero `z_axis`.
    pub fn from_z_axis(z_axis: &Translation<T>) -> Result<Self, ScrewError> {
        let z = z_axis.normalised()?;
        let (ax, ay, az) = (z.x().abs(), z.y().abs(), z.z().abs());
        let seed = if ax <= ay && ax <= az {
            Axis::X
        } else if ay <= az {
            Axis::Y
        } else {
            Axis::Z
        };
        Self::from_z_axis_with_hint(&z, &seed.unit())
    }

    /// A right handed frame whose third column is the direction of `z_axis` and whose first
    /// column is the component of `x_hint` orthogonal to it.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if either vector is zero or `x_hint` is parallel to `z_axis`.
    pub fn from_z_axis_with_hint(
        z_axis: &Translation<T>,
        x_hint: &Translation<T>,
    ) -> Result<Self, ScrewError> {
        let z = z_axis.normalised()?;
        let x = x_hint.normalised()?;
        let y = z.cross(&x).normalised()?;
        let x = y.cross(&z);
        Self::from_columns(&x, &y, &z)
    }

    /// Rotation `Rz(yaw) * Ry(pitch) * Rx(roll)`, the inverse of [`Rotation::rpy`].
    ///
    /// # Errors
    ///
    /// `OutOfRange` if any angle is not in `[0, 2π)`.
    pub fn from_rpy(roll: T, pitch: T, yaw: T) -> Result<Self, ScrewError> {
        Ok(Self::about(Axis::Z, yaw)? * Self::about(Axis::Y, pitch)? * Self::about(Axis::X, roll)?)
    }

    /// A random rotation: random axis on the unit sphere, random angle in `[0, 2π)`.
    pub fn from_random() -> Self {
        let mut rng = rand::rng();

        let z: f64 = rng.random_range(-1.0..1.0);
        let phi: f64 = rng.random_range(0.0..std::f64::consts::TAU);
        let angle: f64 = rng.random_range(0.0..std::f64::consts::TAU);

        let r = (1.0 - z * z).sqrt();
        let axis = Translation::new(T::cast(r * phi.cos()), T::cast(r * phi.sin()), T::cast(z));

        Self::rodrigues(&axis, T::cast(angle))
    }

    /// The underlying `glam` matrix.
    #[inline]
    pub fn matrix(&self) -> T::Mat3 {
        self.m
    }

    /// Element at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// If `i` or `j` is not below 3.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        T::mat3_get(&self.m, i, j)
    }

    /// Column `j` as a vector.
    ///
    /// # Panics
    ///
    /// If `j` is not below 3.
    #[inline]
    pub fn column(&self, j: usize) -> Translation<T> {
        Translation::from_glam(T::mat3_col(&self.m, j))
    }

    /// Determinant of the matrix.
    #[inline]
    pub fn determinant(&self) -> T {
        T::mat3_determinant(&self.m)
    }

    /// Inverse rotation, i.e. the transpose.
    #[inline]
    pub fn inv(&self) -> Self {
        Self {
            m: T::mat3_transpose(&self.m),
        }
    }

    /// Axis of rotation (unit, canonical sign).
    pub fn axis(&self) -> Translation<T> {
        self.axis_angle().0
    }

    /// Angle of rotation in `[0, 2π)`, consistent with [`Rotation::axis`].
    pub fn angle(&self) -> T {
        self.axis_angle().1
    }

    /// Axis and angle, extracted together.
    pub fn axis_angle(&self) -> (Translation<T>, T) {
        let r = |i, j| self.get(i, j);
        let half = T::cast(0.5);

        // Clamp absorbs drift pushing the trace slightly out of range.
        let tr = (half * (r(0, 0) + r(1, 1) + r(2, 2) - T::one()))
            .max(-T::one())
            .min(T::one());
        let mut angle = tr.acos();

        let mut axis = Translation::new(r(2, 1) - r(1, 2), r(0, 2) - r(2, 0), r(1, 0) - r(0, 1));
        let n = axis.norm();
        axis = if n.abs() > T::cast(NORM_EPSILON) {
            axis.scale(n.recip())
        } else {
            Axis::Z.unit()
        };

        if axis.x() < T::zero() {
            axis = -axis;
            angle = T::cast(std::f64::consts::TAU) - angle;
        }

        (axis, angle)
    }

    /// Roll, pitch and yaw (Z-Y-X Euler angles), each folded into `[0, 2π)`.
    ///
    /// The result satisfies `R = Rz(yaw) * Ry(pitch) * Rx(roll)`. At gimbal lock
    /// (`pitch = ±π/2`) the yaw is set to zero.
    pub fn rpy(&self) -> Translation<T> {
        let r = |i, j| self.get(i, j);
        let eps = T::default_tolerance();
        let pi = T::PI();
        let half_pi = T::FRAC_PI_2();

        let beta = (-r(2, 0)).atan2((r(0, 0) * r(0, 0) + r(1, 0) * r(1, 0)).sqrt());
        let (alpha, gamma) = if (beta - half_pi).abs() < eps {
            (T::zero(), r(0, 1).atan2(r(1, 1)))
        } else if (beta + half_pi).abs() < eps {
            (T::zero(), -r(0, 1).atan2(r(1, 1)))
        } else {
            let cb = beta.cos();
            (
                (r(1, 0) / cb).atan2(r(0, 0) / cb),
                (r(2, 1) / cb).atan2(r(2, 2) / cb),
            )
        };

        let (mut roll, mut pitch, mut yaw) = (gamma, beta, alpha);

        // (π, β, π) and (0, π - β, 0) describe the same rotation.
        if (roll - pi).abs() < eps && (yaw - pi).abs() < eps {
            roll = T::zero();
            yaw = T::zero();
            pitch = pi - pitch;
        }

        let tau = pi + pi;
        let fold = |a: T| {
            let a = if a < T::zero() { a + tau } else { a };
            // a tiny negative angle can round up to 2π
            if a >= tau {
                a - tau
            } else {
                a
            }
        };
        Translation::new(fold(roll), fold(pitch), fold(yaw))
    }

    /// Matrix logarithm: the skew symmetric generator of this rotation.
    #[inline]
    pub fn log(&self) -> Skew<T> {
        Skew::from_rotation(self)
    }

    /// Same as [`Rotation::log`].
    #[inline]
    pub fn skew(&self) -> Skew<T> {
        self.log()
    }

    /// Check the determinant and the orthonormality of the columns.
    ///
    /// # Errors
    ///
    /// `InvalidRotation` carrying the measured determinant, column norms and dot products.
    pub fn is_valid(&self) -> Result<(), ScrewError> {
        let c = [self.column(0), self.column(1), self.column(2)];
        let det = self.determinant();
        let norms = [c[0].dot(&c[0]), c[1].dot(&c[1]), c[2].dot(&c[2])];
        let dots = [c[0].dot(&c[1]), c[0].dot(&c[2]), c[1].dot(&c[2])];

        let tol = T::validity_tolerance();
        let valid = (det - T::one()).abs() < tol
            && norms.iter().all(|&n| (n - T::one()).abs() < tol)
            && dots.iter().all(|&d| d.abs() < tol);

        if valid {
            return Ok(());
        }

        let to_f64 = |x: T| x.to_f64().unwrap_or(f64::NAN);
        Err(screw_error!(ScrewErrorKind::InvalidRotation(
            RotationDiagnostics {
                determinant: to_f64(det),
                column_norms: norms.map(to_f64),
                column_dots: dots.map(to_f64),
            }
        )))
    }

    /// Approximate equality with the default tolerance (single precision epsilon).
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }
}

fn check_angle<T: Real>(angle: T) -> Result<(), ScrewError> {
    if angle < T::zero() || angle >= T::cast(std::f64::consts::TAU) {
        return Err(screw_error!(ScrewErrorKind::OutOfRange {
            angle: angle.to_f64().unwrap_or(f64::NAN),
        }));
    }
    Ok(())
}

impl<T: Real> Default for Rotation<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> Mul for Rotation<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self { m: self.m * rhs.m }
    }
}

impl<T: Real> MulAssign for Rotation<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.m = self.m * rhs.m;
    }
}

/// Rotate a point.
impl<T: Real> Mul<Translation<T>> for Rotation<T> {
    type Output = Translation<T>;

    #[inline]
    fn mul(self, rhs: Translation<T>) -> Translation<T> {
        Translation::from_glam(self.m * rhs.to_glam())
    }
}

impl<T: Real> AbsDiffEq for Rotation<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        (0..3).all(|i| (0..3).all(|j| (self.get(i, j) - other.get(i, j)).abs() <= epsilon))
    }
}

impl<T: Real> fmt::Display for Rotation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_matrix(f, 3, 3, |i, j| self.get(i, j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::TranslationF64;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

    const EPSILON: f64 = f32::EPSILON as f64;

    fn make_random_angle() -> f64 {
        let mut rng = rand::rng();
        rng.random_range(0.0..1.999 * PI)
    }

    fn make_random_axis() -> TranslationF64 {
        let mut rng = rand::rng();
        Translation::new(
            rng.random_range(0.01..1.0),
            rng.random_range(0.01..1.0),
            rng.random_range(0.01..1.0),
        )
    }

    #[test]
    fn test_identity() {
        let r = RotationF64::default();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(r.get(i, j), if i == j { 1.0 } else { 0.0 });
            }
        }
        assert!(r.is_valid().is_ok());
    }

    #[test]
    fn test_elementary_axes() -> Result<(), ScrewError> {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let rx = RotationF64::from_axis_tag('x', FRAC_PI_4)?;
        let expected = RotationF64::from_matrix_unchecked(f64::mat3_from_rows(&[
            [1.0, 0.0, 0.0],
            [0.0, s, -s],
            [0.0, s, s],
        ]));
        assert_abs_diff_eq!(rx, expected, epsilon = EPSILON);

        let ry = RotationF64::from_axis_tag('y', FRAC_PI_4)?;
        assert_relative_eq!(ry.get(0, 2), s, epsilon = EPSILON);
        assert_relative_eq!(ry.get(2, 0), -s, epsilon = EPSILON);
        assert_eq!(ry.get(1, 1), 1.0);

        let rz = RotationF64::about(Axis::Z, FRAC_PI_4)?;
        assert_relative_eq!(rz.get(0, 1), -s, epsilon = EPSILON);
        assert_relative_eq!(rz.get(1, 0), s, epsilon = EPSILON);
        assert_eq!(rz.get(2, 2), 1.0);

        assert_abs_diff_eq!(rx * rx.inv(), Rotation::identity(), epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_invalid_axis_tag() {
        let err = RotationF64::from_axis_tag('w', 0.5).unwrap_err();
        assert_eq!(err.kind(), &ScrewErrorKind::InvalidAxis('w'));
    }

    #[test]
    fn test_angle_out_of_range() {
        for angle in [-0.1, TAU, 7.0] {
            let err = RotationF64::from_axis_tag('x', angle).unwrap_err();
            assert!(matches!(err.kind(), ScrewErrorKind::OutOfRange { .. }));
        }
        let axis = Translation::new(1.0, 1.0, 0.0);
        assert!(RotationF64::from_axis_angle(&axis, -1.0).is_err());
        assert!(RotationF64::from_axis_angle(&axis, 0.0).is_ok());
    }

    #[test]
    fn test_from_axis_angle_zero_axis() {
        let err = RotationF64::from_axis_angle(&Translation::zero(), 1.0).unwrap_err();
        assert_eq!(err.kind(), &ScrewErrorKind::DivisionByZero);
    }

    #[test]
    fn test_orthonormality_closure() -> Result<(), ScrewError> {
        for _ in 0..50 {
            let r = RotationF64::from_axis_angle(&make_random_axis(), make_random_angle())?;
            r.is_valid()?;
            assert_abs_diff_eq!(r * r.inv(), Rotation::identity(), epsilon = 1e-12);
            assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_from_columns() -> Result<(), ScrewError> {
        let r = RotationF64::from_axis_angle(&make_random_axis(), make_random_angle())?;
        let rebuilt = RotationF64::from_columns(&r.column(0), &r.column(1), &r.column(2))?;
        assert_eq!(rebuilt, r);

        let e0 = Translation::new(1.0, 0.0, 0.0);
        let e1 = Translation::new(0.0, 1.0, 0.0);
        let e2 = Translation::new(0.0, 0.0, 1.0);

        // left handed
        let err = RotationF64::from_columns(&e1, &e0, &e2).unwrap_err();
        match err.kind() {
            ScrewErrorKind::InvalidRotation(diag) => {
                assert_relative_eq!(diag.determinant, -1.0);
            }
            other => panic!("unexpected error {other:?}"),
        }

        // not unit
        assert!(RotationF64::from_columns(&(e0 * 2.0), &e1, &e2).is_err());
        Ok(())
    }

    #[test]
    fn test_axis_angle_extraction() -> Result<(), ScrewError> {
        for _ in 0..50 {
            let axis = make_random_axis().normalised()?;
            let angle = make_random_angle();
            let r = RotationF64::from_axis_angle(&axis, angle)?;
            let (a, theta) = r.axis_angle();
            // random axes have a positive x component, so no canonical flip is expected
            assert_abs_diff_eq!(a, axis, epsilon = 1e-6);
            assert_relative_eq!(theta, angle, epsilon = 1e-6);
        }
        Ok(())
    }

    #[test]
    fn test_axis_sign_canonicalisation() -> Result<(), ScrewError> {
        let axis = Translation::new(-1.0, 0.0, 0.0);
        let r = RotationF64::from_axis_angle(&axis, 0.5)?;
        assert_abs_diff_eq!(r.axis(), Translation::new(1.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(r.angle(), TAU - 0.5, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_identity_axis_defaults_to_z() {
        let (axis, angle) = RotationF64::identity().axis_angle();
        assert_eq!(axis, Translation::new(0.0, 0.0, 1.0));
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_composition() -> Result<(), ScrewError> {
        let axis = make_random_axis();
        let angle = 0.3;
        let r = RotationF64::from_axis_angle(&axis, angle)?;

        let mut r3 = r * r;
        assert_abs_diff_eq!(r3, RotationF64::from_axis_angle(&axis, 2.0 * angle)?, epsilon = EPSILON);
        r3 *= r;
        assert_abs_diff_eq!(r3, RotationF64::from_axis_angle(&axis, 3.0 * angle)?, epsilon = EPSILON);
        Ok(())
    }

    #[test]
    fn test_rotate_point() -> Result<(), ScrewError> {
        let r = RotationF64::about(Axis::Z, FRAC_PI_2)?;
        let p = r * Translation::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(p, Translation::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_rpy_elementary() -> Result<(), ScrewError> {
        let (ax, ay, az) = (make_random_angle(), make_random_angle(), make_random_angle());

        let rpy = RotationF64::about(Axis::X, ax)?.rpy();
        assert_abs_diff_eq!(rpy, Translation::new(ax, 0.0, 0.0), epsilon = 1e-6);

        let rpy = RotationF64::about(Axis::Y, ay)?.rpy();
        assert_relative_eq!(rpy.y(), ay, epsilon = 1e-6);

        let rpy = RotationF64::about(Axis::Z, az)?.rpy();
        assert_abs_diff_eq!(rpy, Translation::new(0.0, 0.0, az), epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_rpy_roundtrip() -> Result<(), ScrewError> {
        for _ in 0..50 {
            let r = RotationF64::from_rpy(make_random_angle(), make_random_angle(), make_random_angle())?;
            let rpy = r.rpy();
            let rebuilt = RotationF64::from_rpy(rpy.x(), rpy.y(), rpy.z())?;
            assert_abs_diff_eq!(r, rebuilt, epsilon = 1e-6);
        }
        Ok(())
    }

    #[test]
    fn test_rpy_gimbal_lock() -> Result<(), ScrewError> {
        let r = RotationF64::from_rpy(0.4, FRAC_PI_2, 0.0)?;
        let rpy = r.rpy();
        assert_relative_eq!(rpy.y(), FRAC_PI_2, epsilon = 1e-6);
        assert_eq!(rpy.z(), 0.0);
        assert_abs_diff_eq!(RotationF64::from_rpy(rpy.x(), rpy.y(), rpy.z())?, r, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_from_z_axis() -> Result<(), ScrewError> {
        for _ in 0..20 {
            let r = RotationF64::from_axis_angle(&make_random_axis(), make_random_angle())?;
            let z = r.column(2);
            let frame = RotationF64::from_z_axis(&z)?;
            frame.is_valid()?;
            assert_abs_diff_eq!(frame.column(2), z, epsilon = EPSILON);
            // deterministic
            assert_eq!(frame, RotationF64::from_z_axis(&z)?);
        }

        let frame = RotationF64::from_z_axis(&Translation::new(0.0, 0.0, 2.0))?;
        assert_abs_diff_eq!(frame, Rotation::identity(), epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_from_z_axis_with_hint() -> Result<(), ScrewError> {
        let z = Translation::new(0.0, 0.0, 1.0);
        let frame = RotationF64::from_z_axis_with_hint(&z, &Translation::new(0.0, 1.0, 0.3))?;
        assert_abs_diff_eq!(frame.column(0), Translation::new(0.0, 1.0, 0.0), epsilon = 1e-12);

        let err = RotationF64::from_z_axis_with_hint(&z, &Translation::new(0.0, 0.0, -3.0))
            .unwrap_err();
        assert_eq!(err.kind(), &ScrewErrorKind::DivisionByZero);
        assert!(RotationF64::from_z_axis(&Translation::zero()).is_err());
        Ok(())
    }

    #[test]
    fn test_from_random() -> Result<(), ScrewError> {
        for _ in 0..20 {
            let r = RotationF64::from_random();
            r.is_valid()?;
        }
        RotationF32::from_random().is_valid()
    }

    #[test]
    fn test_single_precision() -> Result<(), ScrewError> {
        let r = RotationF32::from_axis_angle(&Translation::new(0.2, 0.3, 0.9), 1.2)?;
        r.is_valid()?;
        assert_abs_diff_eq!(r * r.inv(), Rotation::identity(), epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_display() {
        let r = RotationF64::identity();
        assert_eq!(r.to_string(), "[1, 0, 0;\n 0, 1, 0;\n 0, 0, 1]");
    }
}

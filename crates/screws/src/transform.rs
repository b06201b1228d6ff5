//! # SE(3) — homogeneous transforms
//!
//! A [`HomogeneousTransform`] holds a [`Rotation`] and a [`Translation`] and behaves as the 4x4
//! matrix `[[R, T], [0, 1]]`. Composition and inversion use the closed forms
//! `(R₁, T₁)(R₂, T₂) = (R₁R₂, R₁T₂ + T₁)` and `(R, T)⁻¹ = (Rᵀ, -RᵀT)`.

use std::fmt;
use std::ops::{Mul, MulAssign};

use approx::AbsDiffEq;
use rand::Rng;

use crate::adjoint::Adjoint;
use crate::error::{ScrewError, ScrewErrorKind};
use crate::rotation::Rotation;
use crate::scalar::{fmt_matrix, Real};
use crate::translation::Translation;
use crate::twist::Twist;

/// A rigid body transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomogeneousTransform<T: Real> {
    rotation: Rotation<T>,
    translation: Translation<T>,
}

/// Single precision transform.
pub type HomogeneousTransformF32 = HomogeneousTransform<f32>;
/// Double precision transform.
pub type HomogeneousTransformF64 = HomogeneousTransform<f64>;

impl<T: Real> HomogeneousTransform<T> {
    /// Create a transform from its rotation and translation.
    #[inline]
    pub fn new(rotation: Rotation<T>, translation: Translation<T>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// The identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self::new(Rotation::identity(), Translation::zero())
    }

    /// A random rotation paired with a random translation in the `[-1, 1)` cube.
    pub fn from_random() -> Self {
        let mut rng = rand::rng();
        let mut coord = || T::cast(rng.random_range(-1.0..1.0));
        let translation = Translation::new(coord(), coord(), coord());
        Self::new(Rotation::from_random(), translation)
    }

    /// The rotation block.
    #[inline]
    pub fn rotation(&self) -> Rotation<T> {
        self.rotation
    }

    /// The translation column.
    #[inline]
    pub fn translation(&self) -> Translation<T> {
        self.translation
    }

    /// Replace the rotation block.
    #[inline]
    pub fn set_rotation(&mut self, rotation: Rotation<T>) {
        self.rotation = rotation;
    }

    /// Replace the translation column.
    #[inline]
    pub fn set_translation(&mut self, translation: Translation<T>) {
        self.translation = translation;
    }

    /// Element `(i, j)` of the 4x4 matrix.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if `i` or `j` is not below 4.
    pub fn get(&self, i: usize, j: usize) -> Result<T, ScrewError> {
        if i < 4 && j < 4 {
            Ok(self.element(i, j))
        } else {
            Err(screw_error!(ScrewErrorKind::IndexOutOfBounds { row: i, col: j }))
        }
    }

    /// The 4x4 `glam` matrix.
    pub fn matrix(&self) -> T::Mat4 {
        T::mat4_from_rotation_translation(&self.rotation.matrix(), self.translation.to_glam())
    }

    /// The inverse transform.
    pub fn inv(&self) -> Self {
        let rt = self.rotation.inv();
        Self::new(rt, -(rt * self.translation))
    }

    /// Matrix logarithm, i.e. the twist generating this transform.
    #[inline]
    pub fn log(&self) -> Twist<T> {
        Twist::from_transform(self)
    }

    /// Same as [`HomogeneousTransform::log`].
    #[inline]
    pub fn twist(&self) -> Twist<T> {
        self.log()
    }

    /// The 6x6 adjoint of this transform.
    #[inline]
    pub fn adjoint(&self) -> Adjoint<T> {
        Adjoint::from_transform(self)
    }

    /// Check the rotation block.
    ///
    /// # Errors
    ///
    /// `InvalidRotation` when the rotation block is not a proper rotation.
    #[inline]
    pub fn is_valid(&self) -> Result<(), ScrewError> {
        self.rotation.is_valid()
    }

    /// Approximate equality with the default tolerance (single precision epsilon).
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }

    // `i` and `j` below 4.
    fn element(&self, i: usize, j: usize) -> T {
        match (i, j) {
            (3, 3) => T::one(),
            (3, _) => T::zero(),
            (_, 3) => self.translation[i],
            _ => self.rotation.get(i, j),
        }
    }
}

impl<T: Real> Default for HomogeneousTransform<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> Mul for HomogeneousTransform<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.rotation * rhs.rotation,
            self.rotation * rhs.translation + self.translation,
        )
    }
}

impl<T: Real> MulAssign for HomogeneousTransform<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Transform a point, `R * p + T`.
impl<T: Real> Mul<Translation<T>> for HomogeneousTransform<T> {
    type Output = Translation<T>;

    #[inline]
    fn mul(self, rhs: Translation<T>) -> Translation<T> {
        self.rotation * rhs + self.translation
    }
}

impl<T: Real> AbsDiffEq for HomogeneousTransform<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.rotation.abs_diff_eq(&other.rotation, epsilon)
            && self.translation.abs_diff_eq(&other.translation, epsilon)
    }
}

impl<T: Real> fmt::Display for HomogeneousTransform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_matrix(f, 4, 4, |i, j| self.element(i, j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::{Axis, RotationF64};
    use crate::translation::TranslationF64;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn make_random_se3() -> HomogeneousTransformF64 {
        HomogeneousTransform::from_random()
    }

    #[test]
    fn test_identity() -> Result<(), ScrewError> {
        let h = HomogeneousTransformF64::default();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(h.get(i, j)?, if i == j { 1.0 } else { 0.0 });
            }
        }
        assert_eq!(h.inv(), h);
        Ok(())
    }

    #[test]
    fn test_get_out_of_bounds() {
        let h = HomogeneousTransformF64::identity();
        let err = h.get(4, 0).unwrap_err();
        assert_eq!(err.kind(), &ScrewErrorKind::IndexOutOfBounds { row: 4, col: 0 });
        assert!(h.get(0, 4).is_err());
        assert!(err.diagnostic().contains("transform.rs"));
    }

    #[test]
    fn test_get_blocks() -> Result<(), ScrewError> {
        let h = make_random_se3();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(h.get(i, j)?, h.rotation().get(i, j));
            }
            assert_eq!(h.get(i, 3)?, h.translation()[i]);
            assert_eq!(h.get(3, i)?, 0.0);
        }
        assert_eq!(h.get(3, 3)?, 1.0);
        Ok(())
    }

    #[test]
    fn test_matrix() -> Result<(), ScrewError> {
        let h = make_random_se3();
        let m = h.matrix();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(m.col(j)[i], h.get(i, j)?);
            }
        }
        Ok(())
    }

    #[test]
    fn test_setters() -> Result<(), ScrewError> {
        let mut h = HomogeneousTransformF64::identity();
        let r = RotationF64::about(Axis::Y, 0.3)?;
        h.set_rotation(r);
        h.set_translation(Translation::new(1.0, 2.0, 3.0));
        assert_eq!(h, HomogeneousTransform::new(r, Translation::new(1.0, 2.0, 3.0)));
        Ok(())
    }

    #[test]
    fn test_inverse() {
        for _ in 0..20 {
            let h = make_random_se3();
            assert_abs_diff_eq!(h.inv() * h, HomogeneousTransform::identity(), epsilon = 1e-12);
            assert_abs_diff_eq!(h * h.inv(), HomogeneousTransform::identity(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_composition() -> Result<(), ScrewError> {
        let h1 = HomogeneousTransformF64::new(
            RotationF64::about(Axis::Z, FRAC_PI_2)?,
            Translation::new(1.0, 0.0, 0.0),
        );
        let h2 = HomogeneousTransformF64::new(Rotation::identity(), Translation::new(1.0, 0.0, 0.0));

        let h = h1 * h2;
        assert_abs_diff_eq!(h.translation(), Translation::new(1.0, 1.0, 0.0), epsilon = 1e-12);
        assert_eq!(h.rotation(), h1.rotation());

        let mut h3 = h1;
        h3 *= h2;
        assert_eq!(h3, h);
        Ok(())
    }

    #[test]
    fn test_associativity() {
        let (a, b, c) = (make_random_se3(), make_random_se3(), make_random_se3());
        assert_abs_diff_eq!((a * b) * c, a * (b * c), epsilon = 1e-12);
    }

    #[test]
    fn test_transform_point() {
        let h = make_random_se3();
        let p: TranslationF64 = Translation::new(0.3, -0.2, 0.9);
        let q = h * p;
        assert_abs_diff_eq!(h.inv() * q, p, epsilon = 1e-12);
        assert_abs_diff_eq!(q, h.rotation() * p + h.translation(), epsilon = 1e-15);
    }

    #[test]
    fn test_is_valid() {
        assert!(make_random_se3().is_valid().is_ok());
    }

    #[test]
    fn test_display() {
        let h = HomogeneousTransformF64::new(Rotation::identity(), Translation::new(1.0, 2.0, 3.0));
        assert_eq!(
            h.to_string(),
            "[1, 0, 0, 1;\n 0, 1, 0, 2;\n 0, 0, 1, 3;\n 0, 0, 0, 1]"
        );
    }
}

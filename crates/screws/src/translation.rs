//! 3D translation vector.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::AbsDiffEq;

use crate::error::{ScrewError, ScrewErrorKind};
use crate::scalar::{Real, NORM_EPSILON};

/// A 3x1 translation, also used as a general 3-vector (rotation axes, angular velocities).
///
/// Storage is the `glam` vector of the scalar precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translation<T: Real> {
    v: T::Vec3,
}

/// Single precision translation.
pub type TranslationF32 = Translation<f32>;
/// Double precision translation.
pub type TranslationF64 = Translation<f64>;

/// A general 3-vector. Same type as [`Translation`].
pub type Vector3<T> = Translation<T>;

impl<T: Real> Translation<T> {
    /// Create a translation from its components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { v: T::vec3(x, y, z) }
    }

    /// The zero translation.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Create a translation from an array.
    #[inline]
    pub fn from_array(arr: [T; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert to an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.v[0], self.v[1], self.v[2]]
    }

    /// Wrap a `glam` vector.
    #[inline]
    pub fn from_glam(v: T::Vec3) -> Self {
        Self { v }
    }

    /// The underlying `glam` vector.
    #[inline]
    pub fn to_glam(self) -> T::Vec3 {
        self.v
    }

    /// The x component.
    #[inline]
    pub fn x(&self) -> T {
        self.v[0]
    }

    /// The y component.
    #[inline]
    pub fn y(&self) -> T {
        self.v[1]
    }

    /// The z component.
    #[inline]
    pub fn z(&self) -> T {
        self.v[2]
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(&self) -> T {
        T::vec3_dot(self.v, self.v).sqrt()
    }

    /// Unit vector with the same direction.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when the norm is below `1e-10`.
    pub fn normalised(&self) -> Result<Self, ScrewError> {
        let n = self.norm();
        if n.abs() < T::cast(NORM_EPSILON) {
            return Err(screw_error!(ScrewErrorKind::DivisionByZero));
        }
        Ok(Self { v: self.v / n })
    }

    /// Cross product `self x other`.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            v: T::vec3_cross(self.v, other.v),
        }
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        T::vec3_dot(self.v, other.v)
    }

    /// Multiply every element by `s`.
    #[inline]
    pub fn scale(&self, s: T) -> Self {
        Self { v: self.v * s }
    }

    /// Element-by-element division.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when any component of `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self, ScrewError> {
        if other.to_array().iter().any(|c| c.is_zero()) {
            return Err(screw_error!(ScrewErrorKind::DivisionByZero));
        }
        Ok(Self::new(
            self.x() / other.x(),
            self.y() / other.y(),
            self.z() / other.z(),
        ))
    }

    /// Divide every element by `s`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when `s` is zero.
    pub fn checked_div_scalar(&self, s: T) -> Result<Self, ScrewError> {
        if s.is_zero() {
            return Err(screw_error!(ScrewErrorKind::DivisionByZero));
        }
        Ok(Self { v: self.v / s })
    }

    /// In-place element-by-element division. `self` is left untouched on error.
    pub fn checked_div_assign(&mut self, other: &Self) -> Result<(), ScrewError> {
        *self = self.checked_div(other)?;
        Ok(())
    }

    /// In-place division by a scalar. `self` is left untouched on error.
    pub fn checked_div_scalar_assign(&mut self, s: T) -> Result<(), ScrewError> {
        *self = self.checked_div_scalar(s)?;
        Ok(())
    }

    /// Approximate equality with the default tolerance (single precision epsilon).
    ///
    /// Use [`AbsDiffEq::abs_diff_eq`] to pick another tolerance.
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }
}

impl<T: Real> Default for Translation<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Real> Index<usize> for Translation<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.v[index]
    }
}

impl<T: Real> IndexMut<usize> for Translation<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.v[index]
    }
}

impl<T: Real> Add for Translation<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self { v: self.v + rhs.v }
    }
}

impl<T: Real> Add<T> for Translation<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self {
        Self::new(self.x() + rhs, self.y() + rhs, self.z() + rhs)
    }
}

impl<T: Real> AddAssign for Translation<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real> AddAssign<T> for Translation<T> {
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs;
    }
}

impl<T: Real> Sub for Translation<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self { v: self.v - rhs.v }
    }
}

impl<T: Real> Sub<T> for Translation<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self {
        Self::new(self.x() - rhs, self.y() - rhs, self.z() - rhs)
    }
}

impl<T: Real> SubAssign for Translation<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Real> SubAssign<T> for Translation<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs;
    }
}

/// Element-by-element product.
impl<T: Real> Mul for Translation<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self { v: self.v * rhs.v }
    }
}

impl<T: Real> Mul<T> for Translation<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T: Real> MulAssign for Translation<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> MulAssign<T> for Translation<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = self.scale(rhs);
    }
}

impl<T: Real> Neg for Translation<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self { v: -self.v }
    }
}

macro_rules! impl_scalar_lhs {
    ($scalar:ty, $glam:ty) => {
        impl Mul<Translation<$scalar>> for $scalar {
            type Output = Translation<$scalar>;

            #[inline]
            fn mul(self, rhs: Translation<$scalar>) -> Translation<$scalar> {
                rhs.scale(self)
            }
        }

        impl From<$glam> for Translation<$scalar> {
            #[inline]
            fn from(v: $glam) -> Self {
                Self::from_glam(v)
            }
        }

        impl From<Translation<$scalar>> for $glam {
            #[inline]
            fn from(t: Translation<$scalar>) -> Self {
                t.to_glam()
            }
        }
    };
}

impl_scalar_lhs!(f32, glam::Vec3);
impl_scalar_lhs!(f64, glam::DVec3);

impl<T: Real> From<[T; 3]> for Translation<T> {
    #[inline]
    fn from(arr: [T; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl<T: Real> AbsDiffEq for Translation<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        (0..3).all(|i| (self[i] - other[i]).abs() <= epsilon)
    }
}

impl<T: Real> fmt::Display for Translation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x(), self.y(), self.z())
    }
}

//! 6-vector used for twist coordinates and Jacobian columns.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::AbsDiffEq;

use crate::error::{ScrewError, ScrewErrorKind};
use crate::scalar::{Real, NORM_EPSILON};
use crate::translation::Translation;

/// A 6x1 vector stored as two stacked 3-vectors.
///
/// For twist coordinates the head is the linear velocity `v` and the tail the angular velocity `ω`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector6<T: Real> {
    head: Translation<T>,
    tail: Translation<T>,
}

/// Single precision 6-vector.
pub type Vector6F32 = Vector6<f32>;
/// Double precision 6-vector.
pub type Vector6F64 = Vector6<f64>;

impl<T: Real> Vector6<T> {
    /// Create a 6-vector from its elements.
    #[inline]
    pub fn new(v0: T, v1: T, v2: T, v3: T, v4: T, v5: T) -> Self {
        Self {
            head: Translation::new(v0, v1, v2),
            tail: Translation::new(v3, v4, v5),
        }
    }

    /// Stack two 3-vectors.
    #[inline]
    pub fn from_parts(head: Translation<T>, tail: Translation<T>) -> Self {
        Self { head, tail }
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::from_parts(Translation::zero(), Translation::zero())
    }

    /// Create a 6-vector from an array.
    #[inline]
    pub fn from_array(arr: [T; 6]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3], arr[4], arr[5])
    }

    /// Elements as an array.
    #[inline]
    pub fn to_array(self) -> [T; 6] {
        let (h, t) = (self.head, self.tail);
        [h.x(), h.y(), h.z(), t.x(), t.y(), t.z()]
    }

    /// The first three elements.
    #[inline]
    pub fn head(&self) -> Translation<T> {
        self.head
    }

    /// The last three elements.
    #[inline]
    pub fn tail(&self) -> Translation<T> {
        self.tail
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(&self) -> T {
        self.dot(self).sqrt()
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.head.dot(&other.head) + self.tail.dot(&other.tail)
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
        Ok(self.scale(n.recip()))
    }

    /// Multiply every element by `s`.
    #[inline]
    pub fn scale(&self, s: T) -> Self {
        Self::from_parts(self.head.scale(s), self.tail.scale(s))
    }

    /// Element-by-element division.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when any element of `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self, ScrewError> {
        Ok(Self::from_parts(
            self.head.checked_div(&other.head)?,
            self.tail.checked_div(&other.tail)?,
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
        Ok(self.scale(s.recip()))
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
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }
}

impl<T: Real> Default for Vector6<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Real> From<[T; 6]> for Vector6<T> {
    #[inline]
    fn from(arr: [T; 6]) -> Self {
        Self::from_array(arr)
    }
}

impl<T: Real> Index<usize> for Vector6<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        if index < 3 {
            &self.head[index]
        } else {
            &self.tail[index - 3]
        }
    }
}

impl<T: Real> IndexMut<usize> for Vector6<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        if index < 3 {
            &mut self.head[index]
        } else {
            &mut self.tail[index - 3]
        }
    }
}

macro_rules! impl_elementwise_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl<T: Real> $trait for Vector6<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::from_parts(self.head.$method(rhs.head), self.tail.$method(rhs.tail))
            }
        }

        impl<T: Real> $trait<T> for Vector6<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                Self::from_parts(self.head.$method(rhs), self.tail.$method(rhs))
            }
        }

        impl<T: Real> $assign_trait for Vector6<T> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = (*self).$method(rhs);
            }
        }

        impl<T: Real> $assign_trait<T> for Vector6<T> {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                *self = (*self).$method(rhs);
            }
        }
    };
}

impl_elementwise_op!(Add, add, AddAssign, add_assign);
impl_elementwise_op!(Sub, sub, SubAssign, sub_assign);
impl_elementwise_op!(Mul, mul, MulAssign, mul_assign);

impl<T: Real> Neg for Vector6<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_parts(-self.head, -self.tail)
    }
}

macro_rules! impl_scalar_lhs {
    ($($scalar:ty),*) => {
        $(
            impl Mul<Vector6<$scalar>> for $scalar {
                type Output = Vector6<$scalar>;

                #[inline]
                fn mul(self, rhs: Vector6<$scalar>) -> Vector6<$scalar> {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64);

impl<T: Real> AbsDiffEq for Vector6<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.head.abs_diff_eq(&other.head, epsilon) && self.tail.abs_diff_eq(&other.tail, epsilon)
    }
}

impl<T: Real> fmt::Display for Vector6<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.to_array();
        write!(f, "[{}, {}, {}, {}, {}, {}]", a[0], a[1], a[2], a[3], a[4], a[5])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::Rng;

    fn make_random_vector6() -> Vector6F64 {
        let mut rng = rand::rng();
        Vector6::from_array(std::array::from_fn(|_| rng.random_range(-1.0..1.0)))
    }

    #[test]
    fn test_layout() {
        let mut v = Vector6F64::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(v.head(), Translation::new(1.0, 2.0, 3.0));
        assert_eq!(v.tail(), Translation::new(4.0, 5.0, 6.0));
        assert_eq!(v[4], 5.0);
        v[5] = -1.0;
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, -1.0]);
        assert_eq!(Vector6F64::default(), Vector6::zero());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let v = Vector6F64::zero();
        let _value = v[6];
    }

    #[test]
    fn test_arithmetic() {
        let a = make_random_vector6();
        let b = Vector6F64::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        assert_eq!((a + b)[3], a[3] + 4.0);
        assert_eq!((a - b)[0], a[0] - 1.0);
        assert_eq!((a * b)[5], a[5] * 6.0);
        assert_eq!(b + 1.0, Vector6::new(2.0, 3.0, 4.0, 5.0, 6.0, 7.0));
        assert_eq!(b - 1.0, Vector6::new(0.0, 1.0, 2.0, 3.0, 4.0, 5.0));
        assert_eq!(2.0 * b, b * 2.0);
        assert_eq!(-b, b * -1.0);

        let mut c = a;
        c += b;
        c -= b;
        assert_abs_diff_eq!(c, a, epsilon = 1e-12);
        c *= 3.0;
        c -= 1.0;
        c += 1.0;
        c *= b;
        assert_abs_diff_eq!(c, a * b * 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_division() -> Result<(), ScrewError> {
        let a = Vector6F64::new(2.0, 4.0, 6.0, 8.0, 10.0, 12.0);
        let b = Vector6F64::new(2.0, 2.0, 2.0, 2.0, 2.0, 2.0);
        assert_eq!(a.checked_div(&b)?, a.checked_div_scalar(2.0)?);

        let mut c = a;
        c.checked_div_scalar_assign(2.0)?;
        c.checked_div_assign(&Vector6::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0))?;
        assert_eq!(c, Vector6::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0));

        let err = a.checked_div(&Vector6::new(1.0, 1.0, 1.0, 1.0, 0.0, 1.0)).unwrap_err();
        assert_eq!(err.kind(), &ScrewErrorKind::DivisionByZero);
        assert!(c.checked_div_scalar_assign(0.0).is_err());
        assert_eq!(c, Vector6::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0));
        Ok(())
    }

    #[test]
    fn test_norm_and_dot() -> Result<(), ScrewError> {
        let v = Vector6F64::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0);
        assert_relative_eq!(v.norm(), 6.0f64.sqrt());
        assert_eq!(v.dot(&v), 6.0);
        assert_relative_eq!(make_random_vector6().normalised()?.norm(), 1.0, epsilon = 1e-12);

        let err = Vector6F64::zero().normalised().unwrap_err();
        assert_eq!(err.kind(), &ScrewErrorKind::DivisionByZero);
        Ok(())
    }

    #[test]
    fn test_display() {
        let v = Vector6F32::new(1.0, 2.0, 3.0, 4.5, 5.0, -6.0);
        assert_eq!(v.to_string(), "[1, 2, 3, 4.5, 5, -6]");
    }
}

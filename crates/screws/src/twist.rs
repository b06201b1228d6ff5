//! # se(3) — twists
//!
//! A [`Twist`] is the 4x4 matrix `[[S, v], [0, 0]]` where `S` is a [`Skew`] (angular velocity)
//! and `v` the linear velocity. Twist coordinates are stacked as `(v, ω)`: the first three
//! elements are the linear velocity, the last three the angular velocity.
//!
//! The exponential and logarithm follow the closed forms of Murray, Li and Sastry,
//! *A Mathematical Introduction to Robotic Manipulation*, pp. 413-414.

use std::fmt;
use std::ops::{Add, AddAssign};

use approx::AbsDiffEq;

use crate::error::{ScrewError, ScrewErrorKind};
use crate::rotation::Rotation;
use crate::scalar::{fmt_matrix, Real, INFINITE_PITCH, NORM_EPSILON};
use crate::skew::Skew;
use crate::transform::HomogeneousTransform;
use crate::translation::Translation;
use crate::vector6::Vector6;

/// Twist coordinates, `(v, ω)`.
pub type TwistCoordinates<T> = Vector6<T>;

/// An element of se(3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Twist<T: Real> {
    skew: Skew<T>,
    velocity: Translation<T>,
}

/// Single precision twist.
pub type TwistF32 = Twist<f32>;
/// Double precision twist.
pub type TwistF64 = Twist<f64>;

impl<T: Real> Twist<T> {
    /// Create a twist from its six coordinates: `v0..v2` linear, `w0..w2` angular.
    #[inline]
    pub fn new(v0: T, v1: T, v2: T, w0: T, w1: T, w2: T) -> Self {
        Self::from_parts(
            Skew::new(&Translation::new(w0, w1, w2)),
            Translation::new(v0, v1, v2),
        )
    }

    /// Create a twist from its angular and linear parts.
    #[inline]
    pub fn from_parts(skew: Skew<T>, velocity: Translation<T>) -> Self {
        Self { skew, velocity }
    }

    /// Create a twist from stacked coordinates `(v, ω)`.
    #[inline]
    pub fn from_coordinates(coordinates: &TwistCoordinates<T>) -> Self {
        Self::from_parts(Skew::new(&coordinates.tail()), coordinates.head())
    }

    /// The zero twist, generator of the identity transform.
    #[inline]
    pub fn zero() -> Self {
        Self::from_parts(Skew::zero(), Translation::zero())
    }

    /// Logarithm of a homogeneous transform.
    ///
    /// The angular part is the logarithm of the rotation. The linear part is `A⁻¹ T`, with
    /// `A⁻¹ = 0` for a pure rotation, `A⁻¹ = I` for a pure translation and otherwise
    /// `A⁻¹ = I - S/2 + c S²`, `c = (1 - (m/2) cot(m/2)) / m²`, `m = |S| ∈ [0, π]`.
    pub fn from_transform(h: &HomogeneousTransform<T>) -> Self {
        let skew = h.rotation().log();
        let trans = h.translation();
        let m = skew.norm();
        let eps = T::cast(NORM_EPSILON);

        let velocity = if trans.norm().abs() < eps {
            Translation::zero()
        } else if m.abs() < eps {
            trans
        } else {
            let c = if m < T::cast(1e-2) {
                T::cast(1.0 / 12.0) + m * m / T::cast(720.0)
            } else {
                let half = m * T::cast(0.5);
                (T::one() - half * half.cos() / half.sin()) / (m * m)
            };
            let s = skew.matrix();
            let a_inv = T::mat3_identity() - s * T::cast(0.5) + s * s * c;
            Translation::from_glam(a_inv * trans.to_glam())
        };

        Self::from_parts(skew, velocity)
    }

    /// The angular part.
    #[inline]
    pub fn skew(&self) -> Skew<T> {
        self.skew
    }

    /// The linear velocity.
    #[inline]
    pub fn velocity(&self) -> Translation<T> {
        self.velocity
    }

    /// Stacked coordinates `(v, ω)`.
    #[inline]
    pub fn coordinates(&self) -> TwistCoordinates<T> {
        Vector6::from_parts(self.velocity, self.skew.coordinates())
    }

    /// Screw pitch `ω·v / |ω|²`.
    ///
    /// A pure translation has infinite pitch, reported as `1e10`.
    pub fn pitch(&self) -> T {
        let omega = self.skew.coordinates();
        let n = omega.norm();
        if n.abs() < T::cast(NORM_EPSILON) {
            return T::cast(INFINITE_PITCH);
        }
        omega.dot(&self.velocity) / (n * n)
    }

    /// Screw axis, as the point of the axis closest to the origin stacked with its direction.
    ///
    /// For a pure translation the point is the origin and the direction is the velocity.
    pub fn axis(&self) -> Vector6<T> {
        let omega = self.skew.coordinates();
        let n = omega.norm();
        if n.abs() < T::cast(NORM_EPSILON) {
            return Vector6::from_parts(Translation::zero(), self.velocity);
        }
        let point = (self.skew * self.velocity).scale((n * n).recip());
        Vector6::from_parts(point, omega)
    }

    /// Screw magnitude: `|ω|`, or `|v|` for a pure translation.
    pub fn norm(&self) -> T {
        let n = self.skew.norm();
        if n.abs() < T::cast(NORM_EPSILON) {
            self.velocity.norm()
        } else {
            n
        }
    }

    /// Exponential `exp(θ ξ)`.
    pub fn exp(&self, theta: T) -> HomogeneousTransform<T> {
        let m = self.skew.angle();
        if m.abs() < T::cast(NORM_EPSILON) || theta.is_zero() {
            return HomogeneousTransform::new(Rotation::identity(), self.velocity * theta);
        }

        let s = self.skew.matrix();
        let mt = m * theta;
        let sh = (mt * T::cast(0.5)).sin();
        let m2 = theta * m * m;
        let a = T::mat3_identity()
            + s * (T::cast(2.0) * sh * sh / m2)
            + s * s * ((mt - mt.sin()) / (m2 * m));

        let v = Translation::from_glam(a * self.velocity.to_glam()) * theta;
        HomogeneousTransform::new(self.skew.exp(theta), v)
    }

    /// Same as `exp(1)`.
    #[inline]
    pub fn exp_unit(&self) -> HomogeneousTransform<T> {
        self.exp(T::one())
    }

    /// Element `(i, j)` of the 4x4 matrix `[[S, v], [0, 0]]`.
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

    /// Antisymmetry of the angular part.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.skew.is_valid()
    }

    /// Approximate equality with the default tolerance (single precision epsilon).
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }

    // `i` and `j` below 4.
    fn element(&self, i: usize, j: usize) -> T {
        match (i, j) {
            (3, _) => T::zero(),
            (_, 3) => self.velocity[i],
            _ => self.skew.get(i, j),
        }
    }
}

impl<T: Real> Default for Twist<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Real> From<Vector6<T>> for Twist<T> {
    #[inline]
    fn from(coordinates: Vector6<T>) -> Self {
        Self::from_coordinates(&coordinates)
    }
}

impl<T: Real> From<HomogeneousTransform<T>> for Twist<T> {
    #[inline]
    fn from(h: HomogeneousTransform<T>) -> Self {
        Self::from_transform(&h)
    }
}

/// Element-wise sum of the coordinates. This is not the twist of the composed transforms.
impl<T: Real> Add for Twist<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_coordinates(&(self.coordinates() + rhs.coordinates()))
    }
}

impl<T: Real> AddAssign for Twist<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real> AbsDiffEq for Twist<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.skew.abs_diff_eq(&other.skew, epsilon)
            && self.velocity.abs_diff_eq(&other.velocity, epsilon)
    }
}

impl<T: Real> fmt::Display for Twist<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_matrix(f, 4, 4, |i, j| self.element(i, j))
    }
}

//! # so(3) — skew symmetric generators
//!
//! A [`Skew`] is the 3x3 antisymmetric matrix `[v]` of a vector `v`, so that `[v] * p = v × p`.
//! Its coordinates are the angular velocity of the rotation it generates, and its magnitude is
//! the rotation angle per unit of the exponential parameter.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg};

use approx::AbsDiffEq;

use crate::rotation::Rotation;
use crate::scalar::{fmt_matrix, Real};
use crate::translation::Translation;

/// A 3x3 skew symmetric matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skew<T: Real> {
    m: T::Mat3,
}

/// Single precision skew matrix.
pub type SkewF32 = Skew<f32>;
/// Double precision skew matrix.
pub type SkewF64 = Skew<f64>;

impl<T: Real> Skew<T> {
    /// Skew matrix of `v`.
    pub fn new(v: &Translation<T>) -> Self {
        let o = T::zero();
        let (x, y, z) = (v.x(), v.y(), v.z());
        Self {
            m: T::mat3_from_rows(&[[o, -z, y], [z, o, -x], [-y, x, o]]),
        }
    }

    /// The zero matrix.
    #[inline]
    pub fn zero() -> Self {
        Self { m: T::mat3_zero() }
    }

    /// Generator of `r`: the skew matrix of `θ u`, with `u` the axis of `r` and `θ ∈ [0, π]`.
    ///
    /// The identity maps to the zero matrix. Past a quarter turn the axis is recovered from
    /// the symmetric part of `r`, so half turns keep their axis (its sign is arbitrary at
    /// exactly `θ = π`).
    pub fn from_rotation(r: &Rotation<T>) -> Self {
        let half = T::cast(0.5);
        let m = r.matrix();
        let mt = T::mat3_transpose(&m);

        // (R - Rᵀ) / 2 = sin θ [u]
        let w = Self { m: (m - mt) * half }.coordinates();
        let sin = w.norm();
        let cos = half * (r.get(0, 0) + r.get(1, 1) + r.get(2, 2) - T::one());
        let theta = sin.atan2(cos);

        if cos >= T::zero() {
            let k = if theta < T::default_tolerance() {
                T::one() + theta * theta / T::cast(6.0)
            } else {
                theta / sin
            };
            return Self::new(&w.scale(k));
        }

        // (R + Rᵀ) / 2 = cos θ I + (1 - cos θ) u uᵀ
        let uu = ((m + mt) * half - T::mat3_identity() * cos) * (T::one() - cos).recip();
        let j = (1..3).fold(0, |best, k| {
            if T::mat3_get(&uu, k, k) > T::mat3_get(&uu, best, best) {
                k
            } else {
                best
            }
        });
        let column: Translation<T> = Translation::from_glam(T::mat3_col(&uu, j));
        let mut axis = column.scale(column.norm().recip());
        if axis.dot(&w) < T::zero() {
            axis = -axis;
        }
        Self::new(&axis.scale(theta))
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

    /// The vector `v` such that this matrix is `[v]`.
    pub fn coordinates(&self) -> Translation<T> {
        Translation::new(-self.get(1, 2), self.get(0, 2), -self.get(0, 1))
    }

    /// Euclidean norm of the coordinates.
    #[inline]
    pub fn norm(&self) -> T {
        self.coordinates().norm()
    }

    /// Rotation angle per unit parameter. Same as [`Skew::norm`].
    #[inline]
    pub fn angle(&self) -> T {
        self.norm()
    }

    /// Unit axis of the generated rotation.
    ///
    /// Undefined (NaN components) for the zero matrix; check [`Skew::angle`] first.
    pub fn axis(&self) -> Translation<T> {
        let angle = self.angle();
        let c = self.coordinates();
        Translation::new(c.x() / angle, c.y() / angle, c.z() / angle)
    }

    /// Skew matrix of unit magnitude with the same axis. The zero matrix is returned unchanged.
    pub fn normalised(&self) -> Self {
        let angle = self.angle();
        if angle.is_zero() {
            return *self;
        }
        *self * angle.recip()
    }

    /// Transpose, which equals the negation.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self {
            m: T::mat3_transpose(&self.m),
        }
    }

    /// Rotation `exp(θ [v])`, by the generalised Rodrigues formula.
    ///
    /// Returns the identity when `theta` is zero or the magnitude is below single precision
    /// epsilon.
    pub fn exp(&self, theta: T) -> Rotation<T> {
        let mag = self.angle();
        if theta.is_zero() || mag.abs() < T::default_tolerance() {
            return Rotation::identity();
        }

        let s = self.m;
        let s2 = s * s;
        let mt = mag * theta;
        let sh = (mt * T::cast(0.5)).sin() / mag;
        let m = T::mat3_identity() + s * (mt.sin() / mag) + s2 * (T::cast(2.0) * sh * sh);
        Rotation::from_matrix_unchecked(m)
    }

    /// Same as `exp(1)`.
    #[inline]
    pub fn exp_unit(&self) -> Rotation<T> {
        self.exp(T::one())
    }

    /// Algebraic antisymmetry check: `Σ (S[i, j] + S[j, i]) == 0`.
    pub fn is_valid(&self) -> bool {
        let mut sum = T::zero();
        for i in 0..3 {
            for j in 0..3 {
                sum = sum + self.get(i, j) + self.get(j, i);
            }
        }
        sum.is_zero()
    }

    /// Approximate equality with the default tolerance (single precision epsilon).
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }
}

impl<T: Real> Default for Skew<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Real> From<Translation<T>> for Skew<T> {
    #[inline]
    fn from(v: Translation<T>) -> Self {
        Self::new(&v)
    }
}

impl<T: Real> Add for Skew<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self { m: self.m + rhs.m }
    }
}

impl<T: Real> AddAssign for Skew<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.m = self.m + rhs.m;
    }
}

impl<T: Real> Mul<T> for Skew<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self { m: self.m * rhs }
    }
}

impl<T: Real> MulAssign<T> for Skew<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.m = self.m * rhs;
    }
}

/// `[v] * p`, the cross product `v × p`.
impl<T: Real> Mul<Translation<T>> for Skew<T> {
    type Output = Translation<T>;

    #[inline]
    fn mul(self, rhs: Translation<T>) -> Translation<T> {
        Translation::from_glam(self.m * rhs.to_glam())
    }
}

impl<T: Real> Neg for Skew<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self * -T::one()
    }
}

macro_rules! impl_scalar_lhs {
    ($($scalar:ty),*) => {
        $(
            impl Mul<Skew<$scalar>> for $scalar {
                type Output = Skew<$scalar>;

                #[inline]
                fn mul(self, rhs: Skew<$scalar>) -> Skew<$scalar> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64);

impl<T: Real> AbsDiffEq for Skew<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        (0..3).all(|i| (0..3).all(|j| (self.get(i, j) - other.get(i, j)).abs() <= epsilon))
    }
}

impl<T: Real> fmt::Display for Skew<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_matrix(f, 3, 3, |i, j| self.get(i, j))
    }
}

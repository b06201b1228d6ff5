//! 6x6 adjoint of a rigid transform.
//!
//! For `H = (R, T)` acting on twist coordinates `(v, ω)` the adjoint is
//!
//! ```text
//! Ad(H) = | R   [T] R |
//!         | 0     R   |
//! ```
//!
//! so that `H exp(ξ) H⁻¹ = exp(Ad(H) ξ)`.

use std::fmt;
use std::ops::Mul;

use approx::AbsDiffEq;

use crate::error::{ScrewError, ScrewErrorKind};
use crate::rotation::Rotation;
use crate::scalar::{fmt_matrix, Real};
use crate::skew::Skew;
use crate::transform::HomogeneousTransform;
use crate::translation::Translation;
use crate::twist::Twist;
use crate::vector6::Vector6;

/// The adjoint matrix of a homogeneous transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjoint<T: Real> {
    data: [[T; 6]; 6],
    rotation: Rotation<T>,
    translation: Translation<T>,
}

/// Single precision adjoint.
pub type AdjointF32 = Adjoint<f32>;
/// Double precision adjoint.
pub type AdjointF64 = Adjoint<f64>;

impl<T: Real> Adjoint<T> {
    /// Adjoint of the transform `(rotation, translation)`.
    pub fn new(rotation: &Rotation<T>, translation: &Translation<T>) -> Self {
        let off_diagonal = Skew::new(translation).matrix() * rotation.matrix();

        let mut data = [[T::zero(); 6]; 6];
        for i in 0..3 {
            for j in 0..3 {
                let r = rotation.get(i, j);
                data[i][j] = r;
                data[i + 3][j + 3] = r;
                data[i][j + 3] = T::mat3_get(&off_diagonal, i, j);
            }
        }

        Self {
            data,
            rotation: *rotation,
            translation: *translation,
        }
    }

    /// Adjoint of a homogeneous transform.
    #[inline]
    pub fn from_transform(h: &HomogeneousTransform<T>) -> Self {
        Self::new(&h.rotation(), &h.translation())
    }

    /// Adjoint of the identity transform, the 6x6 identity.
    #[inline]
    pub fn identity() -> Self {
        Self::new(&Rotation::identity(), &Translation::zero())
    }

    /// Element `(i, j)`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if `i` or `j` is not below 6.
    pub fn get(&self, i: usize, j: usize) -> Result<T, ScrewError> {
        self.data
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .ok_or_else(|| screw_error!(ScrewErrorKind::IndexOutOfBounds { row: i, col: j }))
    }

    /// Rows of the matrix.
    #[inline]
    pub fn to_array(&self) -> [[T; 6]; 6] {
        self.data
    }

    /// The rotation the adjoint was built from.
    #[inline]
    pub fn rotation(&self) -> Rotation<T> {
        self.rotation
    }

    /// The translation the adjoint was built from.
    #[inline]
    pub fn translation(&self) -> Translation<T> {
        self.translation
    }

    /// The adjoint of the inverse transform.
    pub fn inv(&self) -> Self {
        Self::from_transform(&HomogeneousTransform::new(self.rotation, self.translation).inv())
    }

    /// Re-express the columns of a 6xN Jacobian, each column given as twist coordinates.
    pub fn transport(&self, columns: &[Vector6<T>]) -> Vec<Vector6<T>> {
        columns.iter().map(|c| *self * *c).collect()
    }

    /// Approximate equality with the default tolerance (single precision epsilon).
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }
}

impl<T: Real> Default for Adjoint<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> From<HomogeneousTransform<T>> for Adjoint<T> {
    #[inline]
    fn from(h: HomogeneousTransform<T>) -> Self {
        Self::from_transform(&h)
    }
}

/// Transport twist coordinates `(v, ω)`.
impl<T: Real> Mul<Vector6<T>> for Adjoint<T> {
    type Output = Vector6<T>;

    fn mul(self, rhs: Vector6<T>) -> Vector6<T> {
        let mut out = Vector6::zero();
        for (i, row) in self.data.iter().enumerate() {
            out[i] = row
                .iter()
                .enumerate()
                .fold(T::zero(), |acc, (j, &a)| acc + a * rhs[j]);
        }
        out
    }
}

impl<T: Real> Mul<Twist<T>> for Adjoint<T> {
    type Output = Twist<T>;

    #[inline]
    fn mul(self, rhs: Twist<T>) -> Twist<T> {
        Twist::from_coordinates(&(self * rhs.coordinates()))
    }
}

/// Jacobian transport, see [`Adjoint::transport`].
impl<T: Real> Mul<&[Vector6<T>]> for Adjoint<T> {
    type Output = Vec<Vector6<T>>;

    #[inline]
    fn mul(self, rhs: &[Vector6<T>]) -> Vec<Vector6<T>> {
        self.transport(rhs)
    }
}

impl<T: Real> AbsDiffEq for Adjoint<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| (*a - *b).abs() <= epsilon)
    }
}

impl<T: Real> fmt::Display for Adjoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_matrix(f, 6, 6, |i, j| self.data[i][j])
    }
}

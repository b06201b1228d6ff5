#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Screws
//!
//! Closed-form algebra of rigid body motion: rotations, translations, homogeneous transforms and
//! their generators (skew matrices and twists), with the exponential and logarithm maps between
//! the groups SO(3)/SE(3) and the algebras so(3)/se(3).
//!
//! ## Types
//!
//! - [`Translation`]: 3-vector, also used for axes and angular velocities.
//! - [`Rotation`]: proper 3x3 rotation matrix.
//! - [`Skew`]: 3x3 skew symmetric matrix, generator of a rotation.
//! - [`HomogeneousTransform`]: rotation plus translation.
//! - [`Twist`]: generator of a homogeneous transform.
//! - [`Vector6`]: stacked 6-vector for twist coordinates `(v, ω)`.
//! - [`Adjoint`]: 6x6 operator moving twists between frames.
//!
//! Every type is generic over `f32` and `f64`; the `F32`/`F64` aliases name both precisions.
//!
//! ## Example
//!
//! ```rust
//! use screws::{HomogeneousTransformF64, RotationF64, ScrewError, Translation};
//!
//! # fn main() -> Result<(), ScrewError> {
//! let rotation = RotationF64::from_axis_tag('z', std::f64::consts::FRAC_PI_2)?;
//! let h = HomogeneousTransformF64::new(rotation, Translation::new(1.0, 0.0, 0.5));
//!
//! // logarithm, then back through the exponential
//! let twist = h.log();
//! assert!(twist.exp_unit().approx_eq(&h));
//!
//! // move the twist coordinates into another frame
//! let moved = h.adjoint() * twist.coordinates();
//! assert!(moved.norm() > 0.0);
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod error;

/// Adjoint of a homogeneous transform.
pub mod adjoint;

/// SO(3) rotation matrices.
pub mod rotation;

/// Scalar trait and shared numeric thresholds.
pub mod scalar;

/// so(3) skew symmetric matrices.
pub mod skew;

/// SE(3) homogeneous transforms.
pub mod transform;

/// 3D translations.
pub mod translation;

/// se(3) twists.
pub mod twist;

/// Stacked 6-vectors.
pub mod vector6;

pub use crate::adjoint::{Adjoint, AdjointF32, AdjointF64};
pub use crate::error::{RotationDiagnostics, ScrewError, ScrewErrorKind};
pub use crate::rotation::{Axis, Rotation, RotationF32, RotationF64};
pub use crate::scalar::{Real, INFINITE_PITCH, NORM_EPSILON};
pub use crate::skew::{Skew, SkewF32, SkewF64};
pub use crate::transform::{HomogeneousTransform, HomogeneousTransformF32, HomogeneousTransformF64};
pub use crate::translation::{Translation, TranslationF32, TranslationF64, Vector3};
pub use crate::twist::{Twist, TwistCoordinates, TwistF32, TwistF64};
pub use crate::vector6::{Vector6, Vector6F32, Vector6F64};

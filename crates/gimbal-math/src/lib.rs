// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Spatial math for Gimbal: fixed-size vectors, square matrices with
//! cofactor-based inversion, angle units, and quaternion rotations.
//!
//! All arithmetic is `f32`. Matrices are row-major; vectors are treated as
//! column vectors (`M * v`).
//!
//! Coordinate convention: left-handed, +X right, +Y up, +Z forward. Every
//! factory and directional accessor in this crate follows it.
//!
//! Degenerate inputs are the caller's responsibility. The default call sites
//! return a documented fallback (zero vector, zero matrix, identity
//! quaternion); `try_*` twins surface a [`MathError`] instead.

pub mod angle;
mod error;
mod mat3;
mod mat4;
mod matrix;
mod quat;
mod vec_named;
mod vector;

pub use angle::{Degrees, Radians};
pub use error::MathError;
pub use matrix::{Determinant, Mat2, Mat3, Mat4, Minor, SquareMatrix};
pub use quat::Quat;
pub use vector::{Vec2, Vec3, Vec4, Vector};

/// Degeneracy threshold for lengths and norms.
///
/// Vectors and quaternions whose length is ≤ `EPSILON` are treated as zero by
/// the normalizing operations.
pub const EPSILON: f32 = 1e-6;

/// Allowed drift of a quaternion's squared magnitude away from 1 before
/// [`Quat::rotate`] renormalizes it.
pub const RENORMALIZE_EPSILON: f32 = 1e-4;

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign};

use crate::{Mat4, Radians, Vec3, EPSILON, RENORMALIZE_EPSILON};

/// Quaternion `w + xi + yj + zk` used as a rotation.
///
/// Rotation APIs assume a unit quaternion. [`Quat::rotate`] keeps the value
/// unit by renormalizing whenever `|1 - |q|²|` exceeds
/// [`RENORMALIZE_EPSILON`].
///
/// Euler angles use yaw about +Y, pitch about +X and roll about +Z, composed
/// as `q_yaw · q_pitch · q_roll` (roll acts first).
///
/// # Examples
/// ```
/// use gimbal_math::{Degrees, Quat, Vec3};
/// let q = Quat::from_axis_angle(Degrees(90.0), Vec3::UNIT_Y);
/// let v = q.rotate_vector(Vec3::UNIT_Z);
/// assert!((v.x() - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat {
    w: f32,
    x: f32,
    y: f32,
    z: f32,
}

impl Quat {
    /// The identity rotation `(1, 0, 0, 0)`.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from raw components.
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Returns the identity rotation.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Rotation of `angle` about `axis`: `w = cos(θ/2)`, `v = axis·sin(θ/2)`.
    ///
    /// The axis is used as given; pass a unit axis to get a unit quaternion.
    pub fn from_axis_angle(angle: impl Into<Radians>, axis: Vec3) -> Self {
        let (s, c) = (angle.into().value() / 2.0).sin_cos();
        Self::new(c, axis.x() * s, axis.y() * s, axis.z() * s)
    }

    /// Scalar part.
    pub const fn w(&self) -> f32 {
        self.w
    }

    /// `i` component.
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// `j` component.
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// `k` component.
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// Squared norm.
    pub fn sq_magnitude(&self) -> f32 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Norm.
    pub fn magnitude(&self) -> f32 {
        self.sq_magnitude().sqrt()
    }

    /// Scales to unit norm in place; a norm ≤ [`EPSILON`] becomes identity.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Unit copy of `self`; a norm ≤ [`EPSILON`] yields identity.
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag <= EPSILON {
            return Self::IDENTITY;
        }
        let inv = 1.0 / mag;
        Self::new(self.w * inv, self.x * inv, self.y * inv, self.z * inv)
    }

    /// Returns `(w, -x, -y, -z)`.
    pub const fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Negates the vector part in place.
    pub fn conjugate_in_place(&mut self) {
        *self = self.conjugate();
    }

    /// Applies a further rotation of `angle` about `axis` in world space
    /// (`self = increment · self`).
    ///
    /// The angle is wrapped into `[0, 2π)` and the increment is normalized
    /// before it is applied. With a non-unit axis the normalized increment
    /// turns by a different angle than `angle`; pass a unit axis.
    pub fn rotate(&mut self, angle: impl Into<Radians>, axis: Vec3) {
        let wrapped = angle.into().value().rem_euclid(core::f32::consts::TAU);
        let increment = Self::from_axis_angle(wrapped, axis).normalized();
        *self = increment * *self;
        if (1.0 - self.sq_magnitude()).abs() > RENORMALIZE_EPSILON {
            self.normalize();
        }
    }

    /// Row-major rotation matrix embedded in a 4×4 with no translation.
    ///
    /// Exact for unit quaternions only; the norm is not checked.
    pub fn to_mat4(&self) -> Mat4 {
        let Self { w, x, y, z } = *self;
        let (x2, y2, z2) = (x * x, y * y, z * z);
        Mat4::from_rows([
            [
                1.0 - 2.0 * (y2 + z2),
                2.0 * (x * y - w * z),
                2.0 * (x * z + w * y),
                0.0,
            ],
            [
                2.0 * (x * y + w * z),
                1.0 - 2.0 * (x2 + z2),
                2.0 * (y * z - w * x),
                0.0,
            ],
            [
                2.0 * (x * z - w * y),
                2.0 * (y * z + w * x),
                1.0 - 2.0 * (x2 + y2),
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Vector part `(x, y, z)`.
    pub const fn to_vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Rotates `v` by the sandwich `q·(0, v)·q̄`.
    ///
    /// `self` is normalized first, so the magnitude of `v` is preserved.
    pub fn rotate_vector(&self, v: Vec3) -> Vec3 {
        let q = self.normalized();
        let p = Self::new(0.0, v.x(), v.y(), v.z());
        (q * p * q.conjugate()).to_vector()
    }

    /// Rotates `v` by `angle` about `axis`; the axis is normalized first and a
    /// zero axis leaves `v` unchanged.
    pub fn rotate_about(angle: impl Into<Radians>, v: Vec3, axis: Vec3) -> Vec3 {
        Self::from_axis_angle(angle, axis.normal()).rotate_vector(v)
    }

    fn basis(&self, axis: Vec3) -> Vec3 {
        self.rotate_vector(axis).normal()
    }

    /// Rotated +Z.
    pub fn forward(&self) -> Vec3 {
        self.basis(Vec3::UNIT_Z)
    }

    /// Rotated −Z.
    pub fn back(&self) -> Vec3 {
        self.basis(-Vec3::UNIT_Z)
    }

    /// Rotated +Y.
    pub fn up(&self) -> Vec3 {
        self.basis(Vec3::UNIT_Y)
    }

    /// Rotated −Y.
    pub fn down(&self) -> Vec3 {
        self.basis(-Vec3::UNIT_Y)
    }

    /// Rotated +X.
    pub fn right(&self) -> Vec3 {
        self.basis(Vec3::UNIT_X)
    }

    /// Rotated −X.
    pub fn left(&self) -> Vec3 {
        self.basis(-Vec3::UNIT_X)
    }

    /// Rotation from Euler angles, `q_yaw · q_pitch · q_roll`.
    pub fn from_euler(
        yaw: impl Into<Radians>,
        pitch: impl Into<Radians>,
        roll: impl Into<Radians>,
    ) -> Self {
        let q_yaw = Self::from_axis_angle(yaw, Vec3::UNIT_Y);
        let q_pitch = Self::from_axis_angle(pitch, Vec3::UNIT_X);
        let q_roll = Self::from_axis_angle(roll, Vec3::UNIT_Z);
        q_yaw * q_pitch * q_roll
    }

    /// Replaces the rotation with [`Quat::from_euler`].
    pub fn set_euler_angles(
        &mut self,
        yaw: impl Into<Radians>,
        pitch: impl Into<Radians>,
        roll: impl Into<Radians>,
    ) {
        *self = Self::from_euler(yaw, pitch, roll);
    }

    /// Euler rotation from `(x = pitch, y = yaw, z = roll)` in radians.
    pub fn from_euler_vec(angles: Vec3) -> Self {
        Self::from_euler(angles.y(), angles.x(), angles.z())
    }

    /// [`Quat::from_euler_vec`] with the angles in degrees.
    pub fn from_euler_vec_deg(angles: Vec3) -> Self {
        Self::from_euler(
            angles.y().to_radians(),
            angles.x().to_radians(),
            angles.z().to_radians(),
        )
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Hamilton product.
impl Mul for Quat {
    type Output = Self;
    fn mul(self, q: Self) -> Self {
        Self::new(
            self.w * q.w - self.x * q.x - self.y * q.y - self.z * q.z,
            self.w * q.x + self.x * q.w + self.y * q.z - self.z * q.y,
            self.w * q.y - self.x * q.z + self.y * q.w + self.z * q.x,
            self.w * q.z + self.x * q.y - self.y * q.x + self.z * q.w,
        )
    }
}

impl MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        self.rotate_vector(v)
    }
}

impl Add for Quat {
    type Output = Self;
    fn add(self, q: Self) -> Self {
        Self::new(self.w + q.w, self.x + q.x, self.y + q.y, self.z + q.z)
    }
}

impl AddAssign for Quat {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q: {}, <{}, {}, {}>", self.w, self.x, self.y, self.z)
    }
}

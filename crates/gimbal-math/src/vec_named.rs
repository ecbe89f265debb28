// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Named-component facades over [`Vector`] for the 2/3/4 sizes.
//!
//! Components are read and written through methods; the generic array stays
//! the single source of truth.

use crate::{Radians, Vec2, Vec3, Vec4, Vector};

impl Vector<2> {
    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self::from_array([x, y])
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self[1]
    }

    /// Sets the X component.
    pub fn set_x(&mut self, x: f32) {
        self[0] = x;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, y: f32) {
        self[1] = y;
    }

    /// Unit vector perpendicular to this one, `(y, -x)` normalized.
    pub fn orthogonal(&self) -> Self {
        Self::new(self.y(), -self.x()).normal()
    }

    /// Signed angle in radians from +X, in `(-π, π]`.
    pub fn direction(&self) -> f32 {
        self.y().atan2(self.x())
    }

    /// Points the vector at `angle` from +X, keeping its magnitude.
    pub fn set_direction(&mut self, angle: impl Into<Radians>) {
        let m = self.magnitude();
        let (s, c) = angle.into().value().sin_cos();
        self.set_x(m * c);
        self.set_y(m * s);
    }

    /// Appends a Z component.
    pub fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.x(), self.y(), z)
    }
}

impl Vector<3> {
    /// Unit vector along +X (right).
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along +Y (up).
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along +Z (forward).
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);
    /// Vector with all components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_array([x, y, z])
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self[2]
    }

    /// Sets the X component.
    pub fn set_x(&mut self, x: f32) {
        self[0] = x;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, y: f32) {
        self[1] = y;
    }

    /// Sets the Z component.
    pub fn set_z(&mut self, z: f32) {
        self[2] = z;
    }

    /// Cross product (`self × other`).
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.to_array();
        let [bx, by, bz] = other.to_array();
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Drops the Z component.
    pub fn truncate(self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }

    /// Appends a W component.
    pub fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x(), self.y(), self.z(), w)
    }
}

impl Vector<4> {
    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_array([x, y, z, w])
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self[2]
    }

    /// W component.
    pub fn w(&self) -> f32 {
        self[3]
    }

    /// Sets the X component.
    pub fn set_x(&mut self, x: f32) {
        self[0] = x;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, y: f32) {
        self[1] = y;
    }

    /// Sets the Z component.
    pub fn set_z(&mut self, z: f32) {
        self[2] = z;
    }

    /// Sets the W component.
    pub fn set_w(&mut self, w: f32) {
        self[3] = w;
    }

    /// Drops the W component.
    pub fn truncate(self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! 3D homogeneous factories on [`Mat4`].
//!
//! Left-handed: +X right, +Y up, +Z forward. Rotations follow the right-hand
//! rule of the column-vector convention (`Mat4::rotation_z(90°)` maps +X to
//! +Y). None of the factories validate degenerate input.

use crate::{Mat4, Radians, Vec3, Vec4};

impl Mat4 {
    /// Translation by `t`, stored in the last column.
    pub fn translation(t: Vec3) -> Self {
        let mut m = Self::identity();
        m.set_element(0, 3, t.x());
        m.set_element(1, 3, t.y());
        m.set_element(2, 3, t.z());
        m
    }

    /// Non-uniform scale.
    pub fn scale(s: Vec3) -> Self {
        let mut m = Self::identity();
        m.set_element(0, 0, s.x());
        m.set_element(1, 1, s.y());
        m.set_element(2, 2, s.z());
        m
    }

    /// Cyclic shear: `x' = x + s.x·y`, `y' = y + s.y·z`, `z' = z + s.z·x`.
    pub fn shear(s: Vec3) -> Self {
        let mut m = Self::identity();
        m.set_element(0, 1, s.x());
        m.set_element(1, 2, s.y());
        m.set_element(2, 0, s.z());
        m
    }

    /// Rotation about +X.
    pub fn rotation_x(angle: impl Into<Radians>) -> Self {
        let (s, c) = angle.into().value().sin_cos();
        let mut m = Self::identity();
        m.set_element(1, 1, c);
        m.set_element(1, 2, -s);
        m.set_element(2, 1, s);
        m.set_element(2, 2, c);
        m
    }

    /// Rotation about +Y.
    pub fn rotation_y(angle: impl Into<Radians>) -> Self {
        let (s, c) = angle.into().value().sin_cos();
        let mut m = Self::identity();
        m.set_element(0, 0, c);
        m.set_element(0, 2, s);
        m.set_element(2, 0, -s);
        m.set_element(2, 2, c);
        m
    }

    /// Rotation about +Z.
    pub fn rotation_z(angle: impl Into<Radians>) -> Self {
        let (s, c) = angle.into().value().sin_cos();
        let mut m = Self::identity();
        m.set_element(0, 0, c);
        m.set_element(0, 1, -s);
        m.set_element(1, 0, s);
        m.set_element(1, 1, c);
        m
    }

    /// Combined rotation `Rz · Ry · Rx` from per-axis angles in radians
    /// (X applied first).
    pub fn rotation_euler(angles: Vec3) -> Self {
        Self::rotation_z(angles.z()) * Self::rotation_y(angles.y()) * Self::rotation_x(angles.x())
    }

    /// [`Mat4::rotation_euler`] with the angles given in degrees.
    pub fn rotation_euler_deg(angles: Vec3) -> Self {
        Self::rotation_euler(Vec3::from_array(angles.to_array().map(f32::to_radians)))
    }

    /// Perspective projection mapping view-space depth `[near, far]` to NDC
    /// `[-1, 1]`, with `w' = z`.
    ///
    /// `fov` is the full vertical field of view.
    pub fn perspective(fov: impl Into<Radians>, aspect: f32, near: f32, far: f32) -> Self {
        let t = (fov.into().value() / 2.0).tan();
        let depth = far - near;
        let mut m = Self::ZERO;
        m.set_element(0, 0, 1.0 / (aspect * t));
        m.set_element(1, 1, 1.0 / t);
        m.set_element(2, 2, (near + far) / depth);
        m.set_element(2, 3, -2.0 * near * far / depth);
        m.set_element(3, 2, 1.0);
        m
    }

    /// Orthographic projection of the box `[l, r] × [b, t] × [near, far]`
    /// onto NDC `[-1, 1]³`.
    pub fn orthographic(l: f32, r: f32, b: f32, t: f32, near: f32, far: f32) -> Self {
        let (w, h, d) = (r - l, t - b, far - near);
        let mut m = Self::identity();
        m.set_element(0, 0, 2.0 / w);
        m.set_element(1, 1, 2.0 / h);
        m.set_element(2, 2, 2.0 / d);
        m.set_element(0, 3, -(r + l) / w);
        m.set_element(1, 3, -(t + b) / h);
        m.set_element(2, 3, -(far + near) / d);
        m
    }

    /// View basis looking from `eye` toward `target`.
    ///
    /// Rows are `s`, `u`, `f` with `f = normalize(target - eye)`,
    /// `s = normalize(up × f)` and `u = f × s`. Orientation only: the caller
    /// composes `Mat4::translation(-eye)` on the right.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normal();
        let s = up.cross(&f).normal();
        let u = f.cross(&s);
        let mut m = Self::identity();
        m.set_row(0, &s.extend(0.0));
        m.set_row(1, &u.extend(0.0));
        m.set_row(2, &f.extend(0.0));
        m
    }

    /// Applies the transform to a point (`w = 1`), ignoring the resulting `w`.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        (*self * p.extend(1.0)).truncate()
    }

    /// Applies the transform to a direction (`w = 0`); translation has no effect.
    pub fn transform_direction(&self, d: Vec3) -> Vec3 {
        (*self * d.extend(0.0)).truncate()
    }

    /// Transforms `p` and applies the perspective divide.
    ///
    /// When the resulting `w` is zero the undivided coordinates are returned.
    pub fn project_point(&self, p: Vec3) -> Vec3 {
        let clip: Vec4 = *self * p.extend(1.0);
        let w = clip.w();
        if w == 0.0 {
            return clip.truncate();
        }
        clip.truncate() * (1.0 / w)
    }

    /// Row-major copy of the sixteen elements.
    pub fn to_array(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        out.copy_from_slice(self.as_flat());
        out
    }
}

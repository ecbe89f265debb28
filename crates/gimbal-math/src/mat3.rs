// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! 2D homogeneous factories on [`Mat3`].

use crate::{Mat3, Radians, Vec2};

impl Mat3 {
    /// Translation by `t`, stored in the last column.
    pub fn translation(t: Vec2) -> Self {
        let mut m = Self::identity();
        m.set_element(0, 2, t.x());
        m.set_element(1, 2, t.y());
        m
    }

    /// Counter-clockwise rotation about the origin.
    pub fn rotation(angle: impl Into<Radians>) -> Self {
        let (s, c) = angle.into().value().sin_cos();
        Self::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Non-uniform scale.
    pub fn scale(s: Vec2) -> Self {
        Self::from_rows([[s.x(), 0.0, 0.0], [0.0, s.y(), 0.0], [0.0, 0.0, 1.0]])
    }

    /// Shear: `x' = x + s.x * y`, `y' = y + s.y * x`.
    pub fn shear(s: Vec2) -> Self {
        let mut m = Self::identity();
        m.set_element(0, 1, s.x());
        m.set_element(1, 0, s.y());
        m
    }

    /// Applies the transform to a point (`w = 1`).
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        (*self * p.extend(1.0)).truncate()
    }
}

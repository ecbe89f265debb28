// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use gimbal_math::{Mat4, Quat, Vec3};

/// Position, rotation and non-uniform scale of one object.
///
/// Conventions:
/// - `position` is in the parent's space (world space for roots).
/// - `rotation` is a unit quaternion.
/// - `scale` is applied first, then rotation, then translation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pose {
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Pose {
    /// Identity pose (origin, no rotation, unit scale).
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    /// Creates a pose from components.
    #[must_use]
    pub const fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Returns a copy with `position` replaced.
    #[must_use]
    pub const fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Returns a copy with `rotation` replaced.
    #[must_use]
    pub const fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns a copy with `scale` replaced.
    #[must_use]
    pub const fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Position component.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Rotation component.
    #[must_use]
    pub const fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Scale component.
    #[must_use]
    pub const fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Sets the position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Sets the rotation.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    /// Sets the scale.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Local matrix `T(position) · R(rotation) · S(scale)`.
    #[must_use]
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::translation(self.position) * self.rotation.to_mat4() * Mat4::scale(self.scale)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

/// A [`Pose`] plus the snapshot taken at the last [`SpatialTransform::commit`].
///
/// The transform is dirty whenever the live pose differs from the snapshot.
/// Callers commit once per frame, after everything that reads the change has
/// run.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SpatialTransform {
    pose: Pose,
    previous: Pose,
}

impl SpatialTransform {
    /// Creates a clean transform whose snapshot equals `pose`.
    #[must_use]
    pub const fn new(pose: Pose) -> Self {
        Self {
            pose,
            previous: pose,
        }
    }

    /// The live pose.
    #[must_use]
    pub const fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Mutable access to the live pose.
    pub fn pose_mut(&mut self) -> &mut Pose {
        &mut self.pose
    }

    /// The pose captured by the last commit.
    #[must_use]
    pub const fn previous(&self) -> &Pose {
        &self.previous
    }

    /// Live position.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.pose.position
    }

    /// Live rotation.
    #[must_use]
    pub const fn rotation(&self) -> Quat {
        self.pose.rotation
    }

    /// Live scale.
    #[must_use]
    pub const fn scale(&self) -> Vec3 {
        self.pose.scale
    }

    /// Sets the live position.
    pub fn set_position(&mut self, position: Vec3) {
        self.pose.position = position;
    }

    /// Sets the live rotation.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.pose.rotation = rotation;
    }

    /// Sets the live scale.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.pose.scale = scale;
    }

    /// Replaces the whole live pose.
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// `true` when the live pose differs from the last committed snapshot.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.pose != self.previous
    }

    /// Captures the live pose as the new snapshot.
    pub fn commit(&mut self) {
        self.previous = self.pose;
    }

    /// Local matrix of the live pose.
    #[must_use]
    pub fn local_matrix(&self) -> Mat4 {
        self.pose.local_matrix()
    }
}

impl From<Pose> for SpatialTransform {
    fn from(pose: Pose) -> Self {
        Self::new(pose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_matrix_scales_then_translates() {
        let pose = Pose::identity()
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_scale(Vec3::new(2.0, 2.0, 2.0));
        let p = pose.local_matrix().transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(p.to_array(), [3.0, 2.0, 3.0]);
    }

    #[test]
    fn dirty_until_commit() {
        let mut t = SpatialTransform::default();
        assert!(!t.is_dirty());
        t.set_position(Vec3::UNIT_X);
        assert!(t.is_dirty());
        t.commit();
        assert!(!t.is_dirty());
        assert_eq!(t.previous().position(), Vec3::UNIT_X);

        // Restoring the committed value clears the dirty state.
        t.pose_mut().set_position(Vec3::UNIT_Y);
        assert!(t.is_dirty());
        t.set_position(Vec3::UNIT_X);
        assert!(!t.is_dirty());
    }
}

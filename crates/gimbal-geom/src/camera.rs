// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Camera math and controls.
//!
//! The camera sits at its transform's position and, with identity rotation,
//! looks down +Z with +Y up. Perspective and orthographic lenses are chosen
//! at construction and never change.

use gimbal_math::{Mat4, Radians, Vec3};
use tracing::debug;

use crate::SpatialTransform;

/// Projection kind of a [`Camera`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CameraKind {
    /// Frustum projection with a vertical field of view.
    Perspective,
    /// Box projection anchored at the camera position.
    Orthographic,
}

/// Camera-relative movement direction for [`Camera::move_in`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along the view direction.
    Forward,
    /// Against the view direction.
    Back,
    /// Toward the camera's left.
    Left,
    /// Toward the camera's right.
    Right,
    /// Along the camera's up vector.
    Up,
    /// Against the camera's up vector.
    Down,
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Lens {
    Perspective {
        default_fov: f32,
        fov: f32,
        tan_half_fov: f32,
    },
    Orthographic {
        default_width: f32,
        default_height: f32,
        width: f32,
        height: f32,
    },
}

/// A perspective or orthographic camera with a free-look transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    lens: Lens,
    aspect_ratio: f32,
    z_near: f32,
    z_far: f32,
    up: Vec3,
    look_dir: Vec3,
    projection: Mat4,
    transform: SpatialTransform,
}

impl Camera {
    /// Perspective camera with vertical field of view `fov`.
    ///
    /// Nothing is validated; degenerate values produce a degenerate
    /// projection and a frustum test that rejects everything.
    pub fn perspective(fov: impl Into<Radians>, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        let fov = fov.into().value();
        Self {
            lens: Lens::Perspective {
                default_fov: fov,
                fov,
                tan_half_fov: (fov / 2.0).tan(),
            },
            aspect_ratio,
            z_near,
            z_far,
            up: Vec3::UNIT_Y,
            look_dir: Vec3::UNIT_Z,
            projection: Mat4::perspective(fov, aspect_ratio, z_near, z_far),
            transform: SpatialTransform::default(),
        }
    }

    /// Orthographic camera covering `width × height` units from its position,
    /// with depth range `[-1, 1]`.
    pub fn orthographic(width: f32, height: f32) -> Self {
        Self {
            lens: Lens::Orthographic {
                default_width: width,
                default_height: height,
                width,
                height,
            },
            aspect_ratio: width / height,
            z_near: -1.0,
            z_far: 1.0,
            up: Vec3::UNIT_Y,
            look_dir: Vec3::UNIT_Z,
            projection: Mat4::orthographic(0.0, width, 0.0, height, -1.0, 1.0),
            transform: SpatialTransform::default(),
        }
    }

    /// Projection kind fixed at construction.
    #[must_use]
    pub const fn kind(&self) -> CameraKind {
        match self.lens {
            Lens::Perspective { .. } => CameraKind::Perspective,
            Lens::Orthographic { .. } => CameraKind::Orthographic,
        }
    }

    /// World-to-clip matrix.
    ///
    /// Orthographic: `P · look_at(p, p + look_dir, up) · T(-p)`.
    /// Perspective additionally applies the inverse camera rotation,
    /// `P · look_at(..) · conj(q) · T(-p)`.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        let position = self.transform.position();
        let translation = Mat4::translation(-position);
        let view = Mat4::look_at(position, position + self.look_dir, self.up);
        match self.lens {
            Lens::Orthographic { .. } => self.projection * view * translation,
            Lens::Perspective { .. } => {
                let rotation = self.transform.rotation().conjugate().to_mat4();
                self.projection * view * rotation * translation
            }
        }
    }

    /// Moves `speed` units along a camera-relative direction.
    pub fn move_in(&mut self, direction: Direction, speed: f32) {
        let q = self.transform.rotation();
        let axis = match direction {
            Direction::Forward => q.forward(),
            Direction::Back => q.back(),
            Direction::Left => q.left(),
            Direction::Right => q.right(),
            Direction::Up => q.up(),
            Direction::Down => q.down(),
        };
        self.transform.set_position(self.transform.position() + axis * speed);
    }

    /// Free-look rotation, applied in order: yaw about the world up vector,
    /// pitch about the camera's current right axis, roll about its current
    /// forward axis.
    pub fn rotate(
        &mut self,
        yaw: impl Into<Radians>,
        pitch: impl Into<Radians>,
        roll: impl Into<Radians>,
    ) {
        let mut q = self.transform.rotation();
        q.rotate(yaw, self.up);
        let right = q.right();
        q.rotate(pitch, right);
        let forward = q.forward();
        q.rotate(roll, forward);
        self.transform.set_rotation(q);
    }

    /// Rebuilds the projection at `scale` times the construction defaults.
    ///
    /// The scale is relative to the defaults, so repeated calls with the same
    /// value do not compound. Perspective cameras scale the field of view;
    /// orthographic cameras scale width and height.
    pub fn zoom(&mut self, scale: f32) {
        match &mut self.lens {
            Lens::Perspective {
                default_fov,
                fov,
                tan_half_fov,
            } => {
                *fov = *default_fov * scale;
                *tan_half_fov = (*fov / 2.0).tan();
                self.projection = Mat4::perspective(*fov, self.aspect_ratio, self.z_near, self.z_far);
                debug!(scale, fov = *fov, "rebuilt perspective projection");
            }
            Lens::Orthographic {
                default_width,
                default_height,
                width,
                height,
            } => {
                *width = *default_width * scale;
                *height = *default_height * scale;
                self.projection = Mat4::orthographic(0.0, *width, 0.0, *height, -1.0, 1.0);
                debug!(scale, width = *width, height = *height, "rebuilt orthographic projection");
            }
        }
    }

    /// `true` when `point` lies in the view volume (frustum or prism).
    #[must_use]
    pub fn is_inside_view(&self, point: Vec3) -> bool {
        match self.lens {
            Lens::Perspective { tan_half_fov, .. } => self.is_inside_frustum(point, tan_half_fov),
            Lens::Orthographic { width, height, .. } => {
                self.is_inside_prism(point, width, height)
            }
        }
    }

    fn is_inside_frustum(&self, point: Vec3, tan_half_fov: f32) -> bool {
        if tan_half_fov <= 0.0 {
            return false;
        }
        let q = self.transform.rotation();
        let to_point = point - self.transform.position();
        let depth = to_point.dot(&q.forward());
        if depth < self.z_near || depth > self.z_far {
            return false;
        }
        let half_height = depth.abs() * tan_half_fov;
        let half_width = self.aspect_ratio * half_height;
        to_point.dot(&q.up()).abs() <= half_height && to_point.dot(&q.right()).abs() <= half_width
    }

    fn is_inside_prism(&self, point: Vec3, width: f32, height: f32) -> bool {
        let c = self.transform.position();
        (c.x()..=c.x() + width).contains(&point.x())
            && (c.y()..=c.y() + height).contains(&point.y())
            && (self.z_near..=self.z_far).contains(&point.z())
    }

    /// Half-width and half-height of the frustum cross-section at `depth`
    /// along the view direction. `None` for orthographic cameras.
    #[must_use]
    pub fn frustum_half_extents(&self, depth: f32) -> Option<(f32, f32)> {
        match self.lens {
            Lens::Perspective { tan_half_fov, .. } => {
                let half_height = depth.abs() * tan_half_fov;
                Some((self.aspect_ratio * half_height, half_height))
            }
            Lens::Orthographic { .. } => None,
        }
    }

    /// View direction in camera space, `(0, 0, 1)`.
    #[must_use]
    pub const fn look_dir(&self) -> Vec3 {
        self.look_dir
    }

    /// World up vector, `(0, 1, 0)`.
    #[must_use]
    pub const fn up(&self) -> Vec3 {
        self.up
    }

    /// Current orthographic width; `0.0` for perspective cameras.
    #[must_use]
    pub const fn width(&self) -> f32 {
        match self.lens {
            Lens::Orthographic { width, .. } => width,
            Lens::Perspective { .. } => 0.0,
        }
    }

    /// Current orthographic height; `0.0` for perspective cameras.
    #[must_use]
    pub const fn height(&self) -> f32 {
        match self.lens {
            Lens::Orthographic { height, .. } => height,
            Lens::Perspective { .. } => 0.0,
        }
    }

    /// Current vertical field of view in radians; `0.0` for orthographic
    /// cameras.
    #[must_use]
    pub const fn fov(&self) -> f32 {
        match self.lens {
            Lens::Perspective { fov, .. } => fov,
            Lens::Orthographic { .. } => 0.0,
        }
    }

    /// Field of view given at construction; `0.0` for orthographic cameras.
    #[must_use]
    pub const fn default_fov(&self) -> f32 {
        match self.lens {
            Lens::Perspective { default_fov, .. } => default_fov,
            Lens::Orthographic { .. } => 0.0,
        }
    }

    /// `tan(fov / 2)` of the current field of view; `0.0` for orthographic
    /// cameras.
    #[must_use]
    pub const fn tan_half_fov(&self) -> f32 {
        match self.lens {
            Lens::Perspective { tan_half_fov, .. } => tan_half_fov,
            Lens::Orthographic { .. } => 0.0,
        }
    }

    /// Width over height of the target.
    #[must_use]
    pub const fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Near plane distance.
    #[must_use]
    pub const fn z_near(&self) -> f32 {
        self.z_near
    }

    /// Far plane distance.
    #[must_use]
    pub const fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Current projection matrix.
    #[must_use]
    pub const fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// The camera's transform.
    #[must_use]
    pub const fn transform(&self) -> &SpatialTransform {
        &self.transform
    }

    /// Mutable access to the camera's transform.
    pub fn transform_mut(&mut self) -> &mut SpatialTransform {
        &mut self.transform
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![deny(
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![doc = r"Geometry for Gimbal.

This crate provides:
- Poses and change-detecting transforms (`Pose`, `SpatialTransform`).
- An arena-backed parent/child hierarchy with cached parent matrices
  (`TransformTree`).
- Perspective and orthographic cameras with free-look controls and
  point-in-view tests (`Camera`).

Design notes:
- Float32 throughout, built on `gimbal-math`.
- Left-handed coordinates: +X right, +Y up, +Z forward.
- Hierarchy nodes are addressed by generational handles, never references.
"]

/// Cameras.
pub mod camera;
mod error;
/// Transform hierarchy.
pub mod hierarchy;
/// Poses and change-detecting transforms.
pub mod transform;

pub use camera::{Camera, CameraKind, Direction};
pub use error::GeomError;
pub use hierarchy::{TransformId, TransformTree};
pub use transform::{Pose, SpatialTransform};

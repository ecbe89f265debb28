// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Camera lens preferences stored through the config service.

use gimbal_geom::Camera;
use gimbal_math::Degrees;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{ConfigError, ConfigService, ConfigStore};

/// Config key holding the camera preferences.
pub const CAMERA_KEY: &str = "camera";

/// Saved lens settings for the host camera.
///
/// Serialized as JSON with a `kind` tag, e.g.
/// `{"kind":"orthographic","width":800.0,"height":600.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CameraPrefs {
    /// Perspective lens.
    Perspective {
        /// Vertical field of view in degrees.
        fov_deg: f32,
        /// Width over height of the target.
        aspect_ratio: f32,
        /// Near plane distance.
        z_near: f32,
        /// Far plane distance.
        z_far: f32,
        /// Initial zoom relative to `fov_deg`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        zoom: Option<f32>,
    },
    /// Orthographic lens.
    Orthographic {
        /// Viewport width in world units.
        width: f32,
        /// Viewport height in world units.
        height: f32,
        /// Initial zoom relative to `width`/`height`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        zoom: Option<f32>,
    },
}

impl Default for CameraPrefs {
    fn default() -> Self {
        Self::Perspective {
            fov_deg: 60.0,
            aspect_ratio: 16.0 / 9.0,
            z_near: 0.1,
            z_far: 1000.0,
            zoom: None,
        }
    }
}

fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be positive and finite, got {value}")))
    }
}

impl CameraPrefs {
    /// Rejects values that would build a degenerate camera.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Perspective {
                fov_deg,
                aspect_ratio,
                z_near,
                z_far,
                zoom,
            } => {
                if !(fov_deg.is_finite() && fov_deg > 0.0 && fov_deg < 180.0) {
                    return Err(ConfigError::Invalid(format!(
                        "fov_deg must lie in (0, 180), got {fov_deg}"
                    )));
                }
                positive("aspect_ratio", aspect_ratio)?;
                positive("z_near", z_near)?;
                if !(z_far.is_finite() && z_far > z_near) {
                    return Err(ConfigError::Invalid(format!(
                        "z_far ({z_far}) must exceed z_near ({z_near})"
                    )));
                }
                zoom.map_or(Ok(()), |z| positive("zoom", z))
            }
            Self::Orthographic {
                width,
                height,
                zoom,
            } => {
                positive("width", width)?;
                positive("height", height)?;
                zoom.map_or(Ok(()), |z| positive("zoom", z))
            }
        }
    }

    /// Validates, then builds the camera with the initial zoom applied.
    pub fn build(&self) -> Result<Camera, ConfigError> {
        self.validate()?;
        let (mut camera, zoom) = match *self {
            Self::Perspective {
                fov_deg,
                aspect_ratio,
                z_near,
                z_far,
                zoom,
            } => (
                Camera::perspective(Degrees(fov_deg), aspect_ratio, z_near, z_far),
                zoom,
            ),
            Self::Orthographic {
                width,
                height,
                zoom,
            } => (Camera::orthographic(width, height), zoom),
        };
        if let Some(scale) = zoom {
            camera.zoom(scale);
        }
        Ok(camera)
    }
}

/// Loads [`CameraPrefs`] from [`CAMERA_KEY`] (defaults when absent) and
/// builds the camera.
pub fn load_camera<S: ConfigStore>(config: &ConfigService<S>) -> Result<Camera, ConfigError> {
    let prefs = match config.load::<CameraPrefs>(CAMERA_KEY)? {
        Some(prefs) => prefs,
        None => {
            info!(key = CAMERA_KEY, "no saved camera prefs; using defaults");
            CameraPrefs::default()
        }
    };
    prefs.build()
}

/// Validates and stores `prefs` under [`CAMERA_KEY`].
pub fn save_camera<S: ConfigStore>(
    config: &ConfigService<S>,
    prefs: &CameraPrefs,
) -> Result<(), ConfigError> {
    prefs.validate()?;
    config.save(CAMERA_KEY, prefs)
}

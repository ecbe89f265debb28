// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Application services for Gimbal hosts: config storage and camera prefs.
//! Storage is a port; `gimbal-config-fs` provides the filesystem adapter.

pub mod config;
pub mod prefs;

pub use config::{ConfigError, ConfigService, ConfigStore, MemoryConfigStore};
pub use prefs::{load_camera, save_camera, CameraPrefs, CAMERA_KEY};

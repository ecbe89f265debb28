// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use gimbal_app_core::{
    load_camera, save_camera, CameraPrefs, ConfigError, ConfigService, ConfigStore,
    MemoryConfigStore, CAMERA_KEY,
};
use gimbal_geom::CameraKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Sample {
    name: String,
    level: u8,
}

#[test]
fn missing_and_empty_blobs_load_as_none() {
    let config = ConfigService::new(MemoryConfigStore::new());
    assert!(config.load::<Sample>("absent").unwrap().is_none());
    config.store().save_raw("empty", b"").unwrap();
    assert!(config.load::<Sample>("empty").unwrap().is_none());
}

#[test]
fn values_round_trip_as_pretty_json() {
    let config = ConfigService::new(MemoryConfigStore::new());
    let value = Sample {
        name: "lens".into(),
        level: 3,
    };
    config.save("sample", &value).unwrap();
    assert_eq!(config.load::<Sample>("sample").unwrap(), Some(value));

    let raw = config.store().load_raw("sample").unwrap();
    assert!(String::from_utf8(raw).unwrap().contains('\n'));
    assert_eq!(config.into_inner().keys(), vec!["sample".to_owned()]);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let store = MemoryConfigStore::new();
    store.save_raw("sample", b"{not json").unwrap();
    let config = ConfigService::new(store);
    assert!(matches!(
        config.load::<Sample>("sample"),
        Err(ConfigError::Serde(_))
    ));
}

#[test]
fn camera_prefs_are_tagged_by_kind() {
    let prefs = CameraPrefs::Orthographic {
        width: 800.0,
        height: 600.0,
        zoom: None,
    };
    let json = serde_json::to_value(prefs).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"kind": "orthographic", "width": 800.0, "height": 600.0})
    );

    let parsed: CameraPrefs = serde_json::from_str(
        r#"{"kind":"perspective","fov_deg":90.0,"aspect_ratio":1.0,"z_near":1.0,"z_far":100.0,"zoom":0.5}"#,
    )
    .unwrap();
    assert_eq!(
        parsed,
        CameraPrefs::Perspective {
            fov_deg: 90.0,
            aspect_ratio: 1.0,
            z_near: 1.0,
            z_far: 100.0,
            zoom: Some(0.5),
        }
    );
}

#[test]
fn load_camera_falls_back_to_defaults() {
    let config = ConfigService::new(MemoryConfigStore::new());
    let camera = load_camera(&config).unwrap();
    assert_eq!(camera.kind(), CameraKind::Perspective);
    assert!((camera.default_fov() - 60_f32.to_radians()).abs() < 1e-6);
}

#[test]
fn saved_prefs_build_the_camera_with_zoom() {
    let config = ConfigService::new(MemoryConfigStore::new());
    let prefs = CameraPrefs::Orthographic {
        width: 800.0,
        height: 600.0,
        zoom: Some(2.0),
    };
    save_camera(&config, &prefs).unwrap();
    assert!(config.store().load_raw(CAMERA_KEY).is_ok());

    let camera = load_camera(&config).unwrap();
    assert_eq!(camera.kind(), CameraKind::Orthographic);
    assert_eq!((camera.width(), camera.height()), (1600.0, 1200.0));
}

#[test]
fn invalid_prefs_are_rejected() {
    let cases = [
        CameraPrefs::Perspective {
            fov_deg: 180.0,
            aspect_ratio: 1.0,
            z_near: 1.0,
            z_far: 10.0,
            zoom: None,
        },
        CameraPrefs::Perspective {
            fov_deg: 60.0,
            aspect_ratio: 0.0,
            z_near: 1.0,
            z_far: 10.0,
            zoom: None,
        },
        CameraPrefs::Perspective {
            fov_deg: 60.0,
            aspect_ratio: 1.0,
            z_near: 10.0,
            z_far: 1.0,
            zoom: None,
        },
        CameraPrefs::Perspective {
            fov_deg: f32::NAN,
            aspect_ratio: 1.0,
            z_near: 1.0,
            z_far: 10.0,
            zoom: None,
        },
        CameraPrefs::Orthographic {
            width: -1.0,
            height: 600.0,
            zoom: None,
        },
        CameraPrefs::Orthographic {
            width: 800.0,
            height: 600.0,
            zoom: Some(0.0),
        },
    ];
    for prefs in cases {
        assert!(
            matches!(prefs.validate(), Err(ConfigError::Invalid(_))),
            "{prefs:?} should be invalid"
        );
        assert!(prefs.build().is_err());
    }

    let config = ConfigService::new(MemoryConfigStore::new());
    assert!(save_camera(&config, &cases[0]).is_err());
    assert!(config.store().keys().is_empty());

    // A stored invalid blob fails on load instead of building a bad camera.
    config.save(CAMERA_KEY, &cases[1]).unwrap();
    assert!(matches!(load_camera(&config), Err(ConfigError::Invalid(_))));
}

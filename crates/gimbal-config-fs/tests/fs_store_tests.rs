// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use gimbal_app_core::{
    load_camera, save_camera, CameraPrefs, ConfigError, ConfigService, ConfigStore,
};
use gimbal_config_fs::FsConfigStore;
use gimbal_geom::CameraKind;

#[test]
fn missing_key_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::at(dir.path());
    assert!(matches!(store.load_raw("camera"), Err(ConfigError::NotFound)));
}

#[test]
fn save_creates_the_base_dir_and_writes_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::at(dir.path().join("nested").join("gimbal"));
    store.save_raw("camera", b"{}").unwrap();

    let path = store.path_for("camera").unwrap();
    assert_eq!(path.file_name().unwrap(), "camera.json");
    assert_eq!(std::fs::read(&path).unwrap(), b"{}");
    assert_eq!(store.load_raw("camera").unwrap(), b"{}");

    store.save_raw("camera", b"[]").unwrap();
    assert_eq!(store.load_raw("camera").unwrap(), b"[]");
}

#[test]
fn camera_prefs_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigService::new(FsConfigStore::at(dir.path()));

    let defaults = load_camera(&config).unwrap();
    assert_eq!(defaults.kind(), CameraKind::Perspective);

    let prefs = CameraPrefs::Perspective {
        fov_deg: 90.0,
        aspect_ratio: 2.0,
        z_near: 0.5,
        z_far: 50.0,
        zoom: None,
    };
    save_camera(&config, &prefs).unwrap();
    assert_eq!(config.load::<CameraPrefs>("camera").unwrap(), Some(prefs));

    let camera = load_camera(&config).unwrap();
    assert!((camera.fov() - 90_f32.to_radians()).abs() < 1e-6);
    assert_eq!(camera.aspect_ratio(), 2.0);
    assert_eq!((camera.z_near(), camera.z_far()), (0.5, 50.0));
}

#[test]
fn corrupt_file_surfaces_a_serde_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("camera.json"), "kind = perspective").unwrap();
    let config = ConfigService::new(FsConfigStore::at(dir.path()));
    assert!(matches!(load_camera(&config), Err(ConfigError::Serde(_))));
}

#[test]
fn keys_that_escape_the_base_dir_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::at(dir.path().join("base"));
    for key in ["", "../camera", "nested/camera", "camera.json", "c:amera", "caméra"] {
        assert!(
            matches!(store.save_raw(key, b"{}"), Err(ConfigError::Invalid(_))),
            "{key:?} should be rejected"
        );
        assert!(matches!(store.load_raw(key), Err(ConfigError::Invalid(_))));
    }
    assert!(!dir.path().join("camera.json").exists());
    assert!(!store.base().exists());
}

#[test]
fn keys_lists_saved_blobs_without_staging_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::at(dir.path().join("cfg"));
    assert!(store.keys().unwrap().is_empty());

    store.save_raw("viewer", b"{}").unwrap();
    store.save_raw("camera", b"{}").unwrap();
    std::fs::write(store.base().join("notes.txt"), "ignored").unwrap();
    std::fs::write(store.base().join("camera.json.tmp"), "partial").unwrap();

    assert_eq!(store.keys().unwrap(), vec!["camera".to_owned(), "viewer".to_owned()]);
}

#[test]
fn saving_replaces_the_file_without_leaving_a_staging_copy() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigService::new(FsConfigStore::at(dir.path()));
    let prefs = CameraPrefs::Orthographic {
        width: 320.0,
        height: 240.0,
        zoom: Some(1.5),
    };
    save_camera(&config, &CameraPrefs::default()).unwrap();
    save_camera(&config, &prefs).unwrap();

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("camera.json")]);

    let camera = load_camera(&config).unwrap();
    assert_eq!(camera.kind(), CameraKind::Orthographic);
    assert_eq!((camera.width(), camera.height()), (480.0, 360.0));
}

#[test]
fn invalid_prefs_on_disk_fail_validation_on_load() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("camera.json"),
        r#"{"kind":"orthographic","width":0.0,"height":240.0}"#,
    )
    .unwrap();
    let config = ConfigService::new(FsConfigStore::at(dir.path()));
    assert!(matches!(load_camera(&config), Err(ConfigError::Invalid(_))));
}

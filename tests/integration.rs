// SPDX-License-Identifier: MPL-2.0
use iced_entry::camera::{Backend, StreamRequest};
use iced_entry::config::{self, CameraConfig, Config};
use iced_entry::error::CameraError;
use iced_entry::i18n::fluent::I18n;
use iced_entry::session::{Session, TickOutcome, DETECTION_TICKS};
use tempfile::tempdir;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("Failed to build tokio runtime")
}

fn instant_camera() -> CameraConfig {
    CameraConfig {
        request_latency_ms: Some(0),
        ..CameraConfig::default()
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        camera: CameraConfig::default(),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(
        i18n_en.tr("scanner-status-idle"),
        "Click the camera icon to start scanning"
    );

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        camera: CameraConfig::default(),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        language: Some("fr".to_string()),
        camera: CameraConfig::default(),
    };
    let i18n = I18n::new(Some("en-US".to_string()), None, &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_camera_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        language: None,
        camera: CameraConfig {
            supported: Some(true),
            failure: Some("busy".to_string()),
            facing: Some("user".to_string()),
            ideal_width: Some(640),
            ideal_height: Some(480),
            request_latency_ms: Some(5),
        },
    };
    config::save_to_path(&config, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.camera.forced_failure(), Some(CameraError::Busy));
    assert_eq!(loaded.camera.ideal_width, Some(640));

    let request = StreamRequest::from_config(&loaded.camera);
    assert_eq!(request.ideal_width, 640);
    assert_eq!(request.ideal_height, 480);
    assert!(!request.audio);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_scan_lifecycle_reaches_detection() {
    let camera = instant_camera();
    let backend = Backend::from_config(&camera);
    let request = StreamRequest::from_config(&camera);
    let mut session = Session::new();

    let token = session.begin_request();
    let stream = runtime()
        .block_on(backend.open(request))
        .expect("Simulated open should succeed");
    assert!(session.activate(token, stream));
    session.begin_scanning();

    for tick in 1..DETECTION_TICKS {
        match session.record_tick() {
            TickOutcome::Continue { attempts } => assert_eq!(attempts, tick),
            other => panic!("Unexpected outcome before detection: {other:?}"),
        }
    }
    let redirect = match session.record_tick() {
        TickOutcome::Detected(token) => token,
        other => panic!("Expected detection on the final tick, got {other:?}"),
    };
    assert_eq!(session.status_key(), "scanner-status-detected");

    // The stream is released exactly once, on completion.
    assert!(session.has_stream());
    assert!(session.redirect_due(redirect));
    session.stop();
    assert!(!session.has_stream());
    assert!(!session.redirect_due(redirect));
}

#[test]
fn test_forced_failure_maps_to_status_message() {
    let camera = CameraConfig {
        failure: Some("permission-denied".to_string()),
        ..instant_camera()
    };
    let backend = Backend::from_config(&camera);
    let request = StreamRequest::from_config(&camera);
    let mut session = Session::new();

    let token = session.begin_request();
    let error = runtime()
        .block_on(backend.open(request))
        .expect_err("Forced failure should be reported");
    assert!(session.fail_request(token));
    assert!(session.is_idle());

    let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
    assert_eq!(
        i18n.tr(error.i18n_key()),
        "Camera access denied. Please allow camera access in your browser settings."
    );
}

#[test]
fn test_restart_invalidates_pending_activation() {
    let camera = instant_camera();
    let backend = Backend::from_config(&camera);
    let request = StreamRequest::from_config(&camera);
    let mut session = Session::new();

    let stale = session.begin_request();
    let fresh = session.begin_request();

    let stale_stream = runtime()
        .block_on(backend.open(request.clone()))
        .expect("Simulated open should succeed");
    assert!(!session.activate(stale, stale_stream));
    assert!(!session.has_stream());

    let fresh_stream = runtime()
        .block_on(backend.open(request))
        .expect("Simulated open should succeed");
    assert!(session.activate(fresh, fresh_stream));
    assert!(session.has_stream());
}

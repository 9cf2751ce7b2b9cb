#![forbid(unsafe_code)]

//! Loading `WheelConfig` from TOML and JSON files.
//!
//! Run:
//!   cargo test -p wheelpick-widgets --test config_loading

use std::io::Write;

use wheelpick_core::event::Modalities;
use wheelpick_widgets::testing::FrameDriver;
use wheelpick_widgets::wheel::config::WheelConfigError;
use wheelpick_widgets::wheel::{Wheel, WheelConfig, WheelItem};

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn toml_file_overrides_selected_fields() {
    let file = write_temp(
        ".toml",
        r#"
item_height = 48.0
visible_items = 7

[wheel]
debounce_ms = 150

[snap]
direct_base_ms = 100
"#,
    );
    let config = WheelConfig::from_toml_file(file.path()).unwrap();
    assert_eq!(config.item_height, 48.0);
    assert_eq!(config.visible_items, 7);
    assert_eq!(config.viewport_height(), 336.0);
    assert_eq!(config.wheel.debounce_ms, 150);
    assert_eq!(config.snap.direct_base_ms, 100);
    assert_eq!(config.snap.direct_per_item_ms, 30);
    assert_eq!(config.drag, WheelConfig::default().drag);
}

#[test]
fn json_file_round_trips_through_engine() {
    let file = write_temp(".json", r#"{ "item_height": 30.0, "drag": { "tap_slop": 2.0 } }"#);
    let config = WheelConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.drag.tap_slop, 2.0);

    let items = (1..=5).map(WheelItem::from).collect();
    let mut d = FrameDriver::new(Wheel::with_config(items, Some(&1), config).unwrap());
    d.click(2);
    d.settle();
    assert_eq!(d.committed_values(), vec![3]);
    assert_eq!(d.wheel().offset(), -60.0);
}

#[test]
fn invalid_values_are_reported_together() {
    let file = write_temp(
        ".toml",
        r#"
item_height = -1.0

[wheel]
smoothing = 2.0
"#,
    );
    match WheelConfig::from_toml_file(file.path()) {
        Err(WheelConfigError::Validation(errors)) => {
            assert_eq!(errors.len(), 2, "{errors:?}");
            assert!(errors.iter().any(|e| e.contains("item_height")));
            assert!(errors.iter().any(|e| e.contains("smoothing")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn malformed_documents_report_parse_errors() {
    let toml = write_temp(".toml", "item_height = [");
    assert!(matches!(
        WheelConfig::from_toml_file(toml.path()),
        Err(WheelConfigError::Toml(_))
    ));

    let json = write_temp(".json", "{ \"item_height\": ");
    assert!(matches!(
        WheelConfig::from_json_file(json.path()),
        Err(WheelConfigError::Json(_))
    ));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = WheelConfig::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, WheelConfigError::Io(_)));
    assert!(err.to_string().starts_with("I/O error"));
}

#[test]
fn serialized_defaults_reload_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wheel.toml");
    let config = WheelConfig::default().with_modalities(Modalities::WHEEL | Modalities::TOUCH);
    std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();
    let reloaded = WheelConfig::from_toml_file(&path).unwrap();
    assert_eq!(reloaded, config);
}

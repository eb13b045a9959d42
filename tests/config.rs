//! Integration tests for configuration options.

use receipt_render::{ColorScheme, Config, Error, PX_TO_MM};
use std::time::Duration;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.width, 900);
    assert_eq!(config.height, 500);
    assert_eq!(config.scale, 2.0);
    assert_eq!(config.color_scheme, ColorScheme::Light);
    assert_eq!(config.background, [255, 255, 255, 255]);
    assert!(!config.logging);
    assert_eq!(config.filename_prefix, "Recibo");
    assert_eq!(config.success_marker, "Sucesso");
    assert_eq!(config.restore_delay, Duration::from_secs(3));
}

#[test]
fn test_config_new_equals_default() {
    let new = Config::new();
    let default = Config::default();

    assert_eq!(new.width, default.width);
    assert_eq!(new.height, default.height);
    assert_eq!(new.scale, default.scale);
    assert_eq!(new.filename_prefix, default.filename_prefix);
}

#[test]
fn test_config_builder_chaining() {
    let config = Config::new()
        .width(1200)
        .height(600)
        .scale(3.0)
        .color_scheme(ColorScheme::Dark)
        .background([100, 100, 100, 255])
        .logging(true)
        .filename_prefix("Nota")
        .success_marker("OK")
        .restore_delay(Duration::from_millis(500));

    assert_eq!(config.width, 1200);
    assert_eq!(config.height, 600);
    assert_eq!(config.scale, 3.0);
    assert_eq!(config.color_scheme, ColorScheme::Dark);
    assert_eq!(config.background, [100, 100, 100, 255]);
    assert!(config.logging);
    assert_eq!(config.filename_prefix, "Nota");
    assert_eq!(config.success_marker, "OK");
    assert_eq!(config.restore_delay, Duration::from_millis(500));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_size_convenience() {
    let config = Config::new().size(1280, 720);

    assert_eq!(config.width, 1280);
    assert_eq!(config.height, 720);
}

#[test]
fn test_page_size_conversion() {
    let config = Config::new().size(96, 192);
    let (w, h) = config.page_size_mm();
    assert!((w - 25.4).abs() < 1e-4);
    assert!((h - 50.8).abs() < 1e-4);

    let (w_pt, h_pt) = config.page_size_pt();
    assert!((w_pt - 72.0).abs() < 1e-3);
    assert!((h_pt - 144.0).abs() < 1e-3);

    assert!((PX_TO_MM - 0.264_583_3).abs() < 1e-6);
}

#[test]
fn test_raster_size_applies_scale() {
    assert_eq!(Config::default().raster_size(), (1800, 1000));
    assert_eq!(Config::new().size(100, 50).scale(1.5).raster_size(), (150, 75));
}

#[test]
fn test_config_validation_rejects_bad_scale() {
    for scale in [0.0, -1.0, f32::INFINITY, f32::NAN] {
        let err = Config::new().scale(scale).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)), "scale {scale}");
    }
}

#[test]
fn test_config_validation_rejects_tiny_scaled_size() {
    let config = Config::new().size(1, 1).scale(0.1);
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_rejects_huge_scaled_size() {
    let config = Config::new().size(10_000, 500).scale(2.0);
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_rejects_bad_prefix() {
    assert!(Config::new().filename_prefix("").validate().is_err());
    assert!(Config::new().filename_prefix("../Recibo").validate().is_err());
    assert!(Config::new().filename_prefix("a\\b").validate().is_err());
}

#[test]
fn test_config_validation_rejects_empty_marker() {
    assert!(Config::new().success_marker("").validate().is_err());
}

#[test]
fn test_error_display_invalid_config() {
    let err = Config::new().width(0).validate().unwrap_err();

    let msg = err.to_string();
    assert!(
        msg.contains("width"),
        "error message should be descriptive: {}",
        msg
    );
}

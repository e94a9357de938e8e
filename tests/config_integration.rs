//! Integration tests for configuration loading
//!
//! Verify config loading from the checked-in default file and from
//! environment variable overrides.

use hyperwire::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("HW_WINDOW__TITLE");
    std::env::remove_var("HW_ANIMATION__SPEED");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.width, 800);
    assert_eq!(config.window.height, 600);
    assert_eq!(config.camera.viewer_distance, 5.0);
    assert_eq!(config.scene.objects.len(), 2);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("HW_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("HW_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_numeric() {
    std::env::set_var("HW_ANIMATION__SPEED", "0.5");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.animation.speed, 0.5);
    std::env::remove_var("HW_ANIMATION__SPEED");
}

#[test]
#[serial]
fn test_missing_config_dir_falls_back_to_env_and_defaults() {
    std::env::remove_var("HW_WINDOW__TITLE");
    let config = AppConfig::load_from("no_such_dir").unwrap();
    // Nothing merged: serde defaults apply
    assert_eq!(config.window.width, 800);
    assert!(config.animation.reset_each_frame);
}

// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::config::{self, Config, OptionsConfig};
use iced_snackbar::ui::notifications::{Ease, Manager, Severity};
use std::time::Instant;
use tempfile::tempdir;

#[test]
fn settings_file_configures_the_manager() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let settings = Config {
        ease: Some(Ease::Linear),
        global: OptionsConfig {
            show_close_button: Some(true),
            ..OptionsConfig::default()
        },
        info: OptionsConfig {
            auto_hide: Some(false),
            color: Some("#222222".to_string()),
            ..OptionsConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&settings, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let mut manager = Manager::with_layers(loaded.to_layers(), loaded.ease());

    manager.show("hello", Severity::Info, Instant::now());
    let live = manager.notification().expect("notification should be live");
    assert_eq!(live.color(), "#222222");
    assert!(!live.auto_hide());
    assert!(live.show_close_button());
    assert!(manager.auto_dismiss_deadline().is_none());

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn corrupt_settings_fall_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "ease = 42").expect("Failed to write config file");

    let (loaded, warning) = config::load_or_default(&path);
    assert_eq!(loaded, Config::default());
    assert!(warning.expect("warning expected").contains("Config Error"));
}

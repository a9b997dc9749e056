// SPDX-License-Identifier: MPL-2.0
use classdesk::config::{self, Config};
use classdesk::i18n::fluent::I18n;
use classdesk::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: ThemeMode::System,
        start_screen: None,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme_mode: ThemeMode::System,
        start_screen: None,
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_catalogs_translate_shared_keys() {
    let mut i18n = I18n::default();
    i18n.set_locale("en-US".parse().unwrap());
    let english = i18n.tr("editor-save");

    i18n.set_locale("fr".parse().unwrap());
    let french = i18n.tr("editor-save");

    assert!(!english.starts_with("MISSING:"));
    assert!(!french.starts_with("MISSING:"));
    assert_ne!(english, french);
}

#[test]
fn test_theme_mode_round_trips_through_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        language: None,
        theme_mode: ThemeMode::Dark,
        start_screen: Some("corrections".to_string()),
    };
    config::save_to_path(&config, &path).expect("Failed to save config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.theme_mode, ThemeMode::Dark);
    assert_eq!(loaded.start_screen.as_deref(), Some("corrections"));
}

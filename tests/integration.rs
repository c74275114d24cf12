// SPDX-License-Identifier: MPL-2.0
use iced_resizer::app::config::{self, Config, EditorConfig, GeneralConfig};
use iced_resizer::i18n::fluent::I18n;
use iced_resizer::media::{self, ResizeFilter};
use iced_resizer::ui::dimension_editor::{Dimensions, Event, Message, State};
use iced_resizer::ui::theming::ThemeMode;
use image_rs::{Rgba, RgbaImage};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("dimension-editor-apply"), "Apply Resize");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_ne!(i18n_fr.tr("dimension-editor-apply"), "Apply Resize");
}

#[test]
fn test_cli_language_wins_over_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_editor_config_drives_initial_lock() {
    let config = Config {
        editor: EditorConfig {
            lock_aspect_by_default: Some(false),
            resize_filter: Some(ResizeFilter::Triangle),
        },
        ..Config::default()
    };
    let state = State::with_lock(Dimensions::new(300, 200), config.editor.lock_aspect());

    assert!(!state.is_aspect_locked());
}

#[test]
fn test_resize_round_trip_through_panel() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("sample.png");
    RgbaImage::from_pixel(64, 32, Rgba([10, 20, 30, 255]))
        .save(&path)
        .expect("Failed to write sample image");

    let document = media::load(&path).expect("Failed to load sample image");
    let mut panel = State::new(document.dimensions());
    assert!(!panel.can_submit(false));

    let _ = panel.update(Message::WidthInputChanged("32".to_string()));
    assert_eq!(panel.height(), 16);

    let Event::ResizeRequested { width, height } = panel.update(Message::ApplyResize) else {
        panic!("expected a resize request");
    };
    let resized = media::resize(&document, width, height, ResizeFilter::default())
        .expect("Failed to resize");
    assert_eq!(resized.dimensions(), Dimensions::new(32, 16));
    assert_eq!(resized.path, document.path);

    panel.set_source(resized.dimensions());
    assert_eq!((panel.width(), panel.height()), (32, 16));
    assert!(!panel.can_submit(false));
}

#[test]
fn test_loading_missing_file_fails() {
    let dir = tempdir().expect("Failed to create temporary directory");
    assert!(media::load(&dir.path().join("missing.png")).is_err());
}

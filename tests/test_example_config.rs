use crossterm::event::{KeyCode, KeyModifiers};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;
use thyne_shell::config::Config;
use thyne_shell::keymap::{Action, KeymapPreset};

const EXAMPLE: &str = r#"
theme = "light"

[keymap]
preset = "vim"

[[keymap.overrides]]
key = "z"
action = "quit"

[[keymap.overrides]]
key = "ctrl+h"
action = "help"

[chrome]
jitter_threshold = 3
collapse_offset = 80

[timings]
splash_slide_ms = 500
search_debounce_ms = 250
"#;

#[test]
fn test_example_config_loads() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, EXAMPLE).unwrap();

    let config = Config::load_or_create(&config_path).unwrap();

    assert_eq!(config.theme, "light");
    assert_eq!(config.keymap.preset, KeymapPreset::Vim);
    assert_eq!(
        config.keymap.get_action(KeyCode::Char('z'), KeyModifiers::NONE),
        Some(Action::Quit)
    );
    assert_eq!(
        config.keymap.get_action(KeyCode::Char('h'), KeyModifiers::CONTROL),
        Some(Action::Help)
    );

    let thresholds = config.chrome.thresholds();
    assert_eq!(thresholds.jitter, 3);
    assert_eq!(thresholds.collapse_offset, 80);

    // Unset keys keep their defaults
    let auth = config.auth_timings();
    assert_eq!(auth.splash_slide, Duration::from_millis(500));
    assert_eq!(auth.otp_code, "123456");
    assert_eq!(config.timings.search_debounce(), Duration::from_millis(250));
}

#[test]
fn test_missing_config_is_created_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let config = Config::load_or_create(&config_path).unwrap();
    assert!(config_path.exists());
    assert_eq!(config.chrome.collapse_offset, 50);

    let written = fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("[chrome]"));
    assert!(written.contains("jitter_threshold = 5"));
}

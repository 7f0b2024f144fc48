use crossterm::event::{KeyCode, KeyModifiers};
use thyne_shell::keymap::{Action, KeyBinding, Keymap, KeymapPreset};

#[test]
fn test_override_shadows_preset_binding() {
    let keymap = Keymap {
        preset: KeymapPreset::Vim,
        overrides: vec![KeyBinding::new("u", Action::MoveUp)],
    };

    assert_eq!(
        keymap.get_action(KeyCode::Char('u'), KeyModifiers::NONE),
        Some(Action::MoveUp)
    );
    // Both preset keys for MoveUp are gone
    assert_eq!(
        keymap.get_action(KeyCode::Char('k'), KeyModifiers::NONE),
        None
    );
    assert_eq!(keymap.get_action(KeyCode::Up, KeyModifiers::NONE), None);

    assert_eq!(
        keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
}

#[test]
fn test_display_reflects_overrides() {
    let keymap = Keymap {
        preset: KeymapPreset::Vim,
        overrides: vec![
            KeyBinding::new("u", Action::MoveUp),
            KeyBinding::new("z", Action::Quit),
        ],
    };

    assert_eq!(keymap.get_key_display_for_action(Action::MoveUp), "U");
    assert_eq!(keymap.get_key_display_for_action(Action::Quit), "Z");
    assert_eq!(keymap.get_key_display_for_action(Action::Confirm), "Enter");

    let hints = keymap.hints(&[(Action::MoveUp, "up"), (Action::Quit, "quit")]);
    assert!(hints.contains("U"), "hints should show the override, got: '{}'", hints);
    assert!(!hints.contains("K"), "shadowed key leaked into hints: '{}'", hints);
}

#[test]
fn test_help_lists_each_action_once_per_binding() {
    let keymap = Keymap {
        preset: KeymapPreset::Standard,
        overrides: vec![KeyBinding::new("ctrl+q", Action::Quit)],
    };

    let quit: Vec<String> = keymap
        .all_bindings()
        .into_iter()
        .filter(|b| b.action == Action::Quit)
        .map(|b| b.key)
        .collect();
    assert_eq!(quit, vec!["ctrl+q".to_string()]);
}

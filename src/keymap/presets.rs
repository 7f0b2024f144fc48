//! Preset keymaps: Standard, Vim, Emacs
//!
//! Every preset binds the full action set. Bindings shared by all presets
//! (section shortcuts, shopping keys, the search chords) live in
//! [`common_bindings`].

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc
    #[default]
    Standard,
    /// hjkl and friends
    Vim,
    /// Ctrl+N/P and friends
    Emacs,
}

impl KeymapPreset {
    /// All key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        };
        bindings.extend(common_bindings());
        bindings
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

/// Shared by every preset
fn common_bindings() -> Vec<KeyBinding> {
    vec![
        // Sections
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("shift+tab", Action::PrevTab),
        KeyBinding::new("1", Action::SelectCommerce),
        KeyBinding::new("2", Action::SelectCommunity),
        KeyBinding::new("3", Action::SelectCreate),
        // Search: slash plus the platform chords
        KeyBinding::new("/", Action::Search),
        KeyBinding::new("ctrl+k", Action::Search),
        KeyBinding::new("cmd+k", Action::Search),
        // Shopping
        KeyBinding::new("w", Action::OpenWishlist),
        KeyBinding::new("b", Action::OpenBag),
        KeyBinding::new("a", Action::AddToBag),
        KeyBinding::new("s", Action::ToggleWishlist),
        // Community
        KeyBinding::new("f", Action::ToggleFullscreen),
        KeyBinding::new("r", Action::Remix),
        // Sign-in
        KeyBinding::new("ctrl+s", Action::Skip),
        KeyBinding::new("ctrl+r", Action::Resend),
        KeyBinding::new("ctrl+o", Action::ToggleNewsletter),
        KeyBinding::new("ctrl+t", Action::ToggleNotify),
        // Global
        KeyBinding::new("?", Action::Help),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        // Text editing
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
    ]
}

fn standard_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("shift+up", Action::ScrollUp),
        KeyBinding::new("shift+down", Action::ScrollDown),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
    ]
}

fn vim_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("ctrl+u", Action::PageUp),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("ctrl+d", Action::PageDown),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("g", Action::Home), // gg in real vim
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("shift+g", Action::End),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("ctrl+y", Action::ScrollUp),
        KeyBinding::new("ctrl+e", Action::ScrollDown),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("x", Action::DeleteChar),
    ]
}

fn emacs_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("alt+v", Action::PageUp),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("ctrl+v", Action::PageDown),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("ctrl+a", Action::Home),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("ctrl+e", Action::End),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("alt+p", Action::ScrollUp),
        KeyBinding::new("alt+n", Action::ScrollDown),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("ctrl+g", Action::Cancel), // C-g is cancel in emacs
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("ctrl+d", Action::DeleteChar),
        KeyBinding::new("ctrl+h", Action::Backspace),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    const PRESETS: [KeymapPreset; 3] = [
        KeymapPreset::Standard,
        KeymapPreset::Vim,
        KeymapPreset::Emacs,
    ];

    #[test]
    fn test_preset_names() {
        assert_eq!(KeymapPreset::Standard.name(), "Standard");
        assert_eq!(KeymapPreset::Vim.name(), "Vim");
        assert_eq!(KeymapPreset::Emacs.name(), "Emacs");
    }

    #[test]
    fn test_search_chords_in_every_preset() {
        for preset in PRESETS {
            let bindings = preset.bindings();
            for (code, modifiers) in [
                (KeyCode::Char('k'), KeyModifiers::CONTROL),
                (KeyCode::Char('k'), KeyModifiers::SUPER),
            ] {
                let action = bindings
                    .iter()
                    .find(|b| b.matches(code, modifiers))
                    .map(|b| b.action);
                assert_eq!(action, Some(Action::Search), "{:?}", preset);
            }
        }
    }

    #[test]
    fn test_every_preset_binds_core_actions() {
        for preset in PRESETS {
            let bindings = preset.bindings();
            for action in [
                Action::MoveUp,
                Action::MoveDown,
                Action::Confirm,
                Action::Cancel,
                Action::PageDown,
                Action::OpenBag,
                Action::Skip,
                Action::Quit,
            ] {
                assert!(
                    bindings.iter().any(|b| b.action == action),
                    "{:?} lacks {:?}",
                    preset,
                    action
                );
            }
        }
    }

    #[test]
    fn test_bindings_parse() {
        for preset in PRESETS {
            for binding in preset.bindings() {
                assert!(binding.parse().is_ok(), "{}", binding.key);
            }
        }
    }

    #[test]
    fn test_vim_has_hjkl() {
        let bindings = KeymapPreset::Vim.bindings();
        for (key, action) in [
            ("h", Action::MoveLeft),
            ("j", Action::MoveDown),
            ("k", Action::MoveUp),
            ("l", Action::MoveRight),
        ] {
            assert!(bindings.iter().any(|b| b.key == key && b.action == action));
        }
    }

    #[test]
    fn test_preset_serialization() {
        let json = serde_json::to_string(&KeymapPreset::Vim).unwrap();
        assert_eq!(json, "\"vim\"");
        let preset: KeymapPreset = serde_json::from_str("\"emacs\"").unwrap();
        assert_eq!(preset, KeymapPreset::Emacs);
    }
}

//! Keymap configuration
//!
//! Customizable keyboard shortcuts: a preset (standard, vim, emacs) plus
//! user overrides from the config file.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{parse_key_string, KeyBinding, KeyParseError, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Action for a key event, overrides first then preset.
    ///
    /// An overridden action loses all of its preset bindings.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// All effective bindings (overrides + non-shadowed preset) for help
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|preset| !self.overrides.iter().any(|o| o.action == preset.action)),
        );
        bindings
    }

    /// Overrides whose key string does not parse, with the reason.
    pub fn invalid_overrides(&self) -> Vec<(String, KeyParseError)> {
        self.overrides
            .iter()
            .filter_map(|b| b.parse().err().map(|e| (b.key.clone(), e)))
            .collect()
    }

    /// Display string for an action's first binding (e.g. Action::Quit -> "Q")
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .into_iter()
            .find(|b| b.action == action)
            .map(|b| b.display())
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// "key: label" pairs joined for a footer line
    pub fn hints(&self, entries: &[(Action, &str)]) -> String {
        entries
            .iter()
            .map(|(action, label)| format!("{}: {}", self.get_key_display_for_action(*action), label))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

//! Key bindings: parsing of key strings like "ctrl+k", "shift+tab", "j"
//! and matching against terminal key events.

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a key string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    /// A `+`-separated prefix that is not ctrl, alt or shift
    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),
    /// The final segment names no key
    #[error("Unknown key: {0}")]
    UnknownKey(String),
    #[error("Empty key string")]
    Empty,
}

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "j", "down", "ctrl+k", "shift+tab")
    pub key: String,

    /// The action this key triggers
    pub action: Action,

    /// Optional description override (uses action description if None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A key combination in canonical form.
///
/// Terminals disagree on how shifted keys are reported (`?` may or may not
/// carry SHIFT, `G` may arrive as `shift+g` or a bare `G`), so both parsed
/// bindings and incoming events go through [`ParsedKey::normalized`] before
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey {
    /// The key itself, lowercased for letters
    pub code: KeyCode,
    /// Modifiers, with SHIFT kept only where it changes the key
    pub modifiers: KeyModifiers,
}

impl ParsedKey {
    pub fn normalized(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let (code, modifiers) = match code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => {
                (KeyCode::Char(c.to_ascii_lowercase()), modifiers | KeyModifiers::SHIFT)
            }
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => (code, modifiers - KeyModifiers::SHIFT),
            KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => {
                (KeyCode::BackTab, modifiers - KeyModifiers::SHIFT)
            }
            KeyCode::BackTab => (code, modifiers - KeyModifiers::SHIFT),
            _ => (code, modifiers),
        };
        Self { code, modifiers }
    }
}

impl KeyBinding {
    /// Create a new key binding
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    /// Check if this binding matches the given key event
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.parse() {
            Ok(parsed) => parsed == ParsedKey::normalized(code, modifiers),
            Err(_) => false,
        }
    }

    /// Parse the key string into its canonical form
    pub fn parse(&self) -> Result<ParsedKey, KeyParseError> {
        parse_key_string(&self.key)
    }

    /// Display string for this binding (e.g., "Ctrl+K")
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }

    /// The description (custom or from action)
    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

/// Parse a key string like "ctrl+shift+n" into a canonical [`ParsedKey`]
pub fn parse_key_string(key: &str) -> Result<ParsedKey, KeyParseError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(KeyParseError::Empty);
    }

    // A trailing "+" is the plus key itself, not a separator
    let (head, key_part) = match key.strip_suffix("++") {
        Some(head) => (head, "+"),
        None if key == "+" => ("", "+"),
        None => match key.rsplit_once('+') {
            Some((head, last)) => (head, last),
            None => ("", key),
        },
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in head.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        modifiers |= match part.to_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            "super" | "meta" | "cmd" | "command" => KeyModifiers::SUPER,
            _ => return Err(KeyParseError::UnknownModifier(part.to_string())),
        };
    }

    let code = parse_key_code(key_part)?;
    Ok(ParsedKey::normalized(code, modifiers))
}

/// Named keys, matched case-insensitively
const NAMED_KEYS: &[(&[&str], KeyCode)] = &[
    (&["up", "arrow_up"], KeyCode::Up),
    (&["down", "arrow_down"], KeyCode::Down),
    (&["left", "arrow_left"], KeyCode::Left),
    (&["right", "arrow_right"], KeyCode::Right),
    (&["home"], KeyCode::Home),
    (&["end"], KeyCode::End),
    (&["pageup", "page_up", "pgup"], KeyCode::PageUp),
    (&["pagedown", "page_down", "pgdn"], KeyCode::PageDown),
    (&["enter", "return"], KeyCode::Enter),
    (&["esc", "escape"], KeyCode::Esc),
    (&["space"], KeyCode::Char(' ')),
    (&["tab"], KeyCode::Tab),
    (&["backtab"], KeyCode::BackTab),
    (&["backspace", "bs"], KeyCode::Backspace),
    (&["delete", "del"], KeyCode::Delete),
    (&["insert", "ins"], KeyCode::Insert),
];

fn parse_key_code(key: &str) -> Result<KeyCode, KeyParseError> {
    let lower = key.trim().to_lowercase();

    if let Some((_, code)) = NAMED_KEYS
        .iter()
        .find(|(names, _)| names.contains(&lower.as_str()))
    {
        return Ok(*code);
    }

    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=12).contains(&n) {
            return Ok(KeyCode::F(n));
        }
    }

    let mut chars = key.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(KeyCode::Char(c)),
        _ => Err(KeyParseError::UnknownKey(key.to_string())),
    }
}

/// Format a key string for display (e.g., "ctrl+k" -> "Ctrl+K")
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "super" | "meta" | "cmd" | "command" => "Cmd".to_string(),
                "up" | "arrow_up" => "↑".to_string(),
                "down" | "arrow_down" => "↓".to_string(),
                "left" | "arrow_left" => "←".to_string(),
                "right" | "arrow_right" => "→".to_string(),
                "enter" | "return" => "Enter".to_string(),
                "esc" | "escape" => "Esc".to_string(),
                "space" => "Space".to_string(),
                "tab" => "Tab".to_string(),
                "backtab" => "Shift+Tab".to_string(),
                "backspace" | "bs" => "Backspace".to_string(),
                "delete" | "del" => "Del".to_string(),
                "pageup" | "page_up" | "pgup" => "PgUp".to_string(),
                "pagedown" | "page_down" | "pgdn" => "PgDn".to_string(),
                "home" => "Home".to_string(),
                "end" => "End".to_string(),
                _ if part.chars().count() == 1 => part.to_uppercase(),
                _ if part.starts_with('f') && part.len() <= 3 => part.to_uppercase(),
                _ => part,
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

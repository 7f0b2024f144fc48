use crate::keymap::Action;

/// Which characters a [`TextInput`] accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFilter {
    /// Any printable character
    #[default]
    Printable,
    /// ASCII digits only (OTP entry)
    Digits,
}

impl InputFilter {
    fn accepts(self, c: char) -> bool {
        match self {
            InputFilter::Printable => !c.is_control(),
            InputFilter::Digits => c.is_ascii_digit(),
        }
    }
}

/// A single-line text field with a cursor, an optional length cap and a
/// character filter.
///
/// Cursor positions are counted in characters, not bytes.
///
/// # Example
/// ```
/// use thyne_shell::utils::text_input::TextInput;
///
/// let mut otp = TextInput::digits(6);
/// for c in "12a3".chars() {
///     otp.insert_char(c);
/// }
/// assert_eq!(otp.text(), "123");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
    max_chars: Option<usize>,
    filter: InputFilter,
}

impl TextInput {
    /// Create a new empty text input accepting any printable character.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a digits-only input capped at `max_chars`.
    pub fn digits(max_chars: usize) -> Self {
        Self {
            max_chars: Some(max_chars),
            filter: InputFilter::Digits,
            ..Self::default()
        }
    }

    /// Create a text input with initial text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set_text(text);
        input
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters currently entered.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the text is empty (ignoring whitespace).
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether the length cap has been reached.
    pub fn is_full(&self) -> bool {
        self.max_chars.is_some_and(|max| self.len() >= max)
    }

    /// Replace the text (filtered and capped) and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let filter = self.filter;
        let cap = self.max_chars.unwrap_or(usize::MAX);
        self.text = text
            .into()
            .chars()
            .filter(|c| filter.accepts(*c))
            .take(cap)
            .collect();
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor position.
    ///
    /// Returns false when the character was rejected by the filter or cap.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.filter.accepts(c) || self.is_full() {
            return false;
        }
        let byte_index = self
            .text
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.text.len());
        self.text.insert(byte_index, c);
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.remove_at(self.cursor);
        true
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        self.remove_at(self.cursor);
        true
    }

    fn remove_at(&mut self, index: usize) {
        if let Some((byte_index, _)) = self.text.char_indices().nth(index) {
            self.text.remove(byte_index);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Apply an editing action from the keymap.
    ///
    /// Returns true if the action was an editing action.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => {
                self.backspace();
            }
            Action::DeleteChar => {
                self.delete();
            }
            _ => return false,
        }
        true
    }

    /// Check if an action should still run while a text input has focus.
    ///
    /// Printable keys never reach the keymap while a field is focused, so a
    /// plain `q` is typed; chords such as Ctrl+C still resolve here.
    pub fn is_action_allowed_when_focused(action: &Action) -> bool {
        matches!(
            action,
            Action::Cancel
                | Action::Confirm
                | Action::MoveUp
                | Action::MoveDown
                | Action::MoveLeft
                | Action::MoveRight
                | Action::Home
                | Action::End
                | Action::Backspace
                | Action::DeleteChar
                | Action::Skip
                | Action::Resend
                | Action::ToggleNewsletter
                | Action::ToggleNotify
                | Action::Search
                | Action::Quit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::with_text("hllo");
        input.move_home();
        input.move_right();
        assert!(input.insert_char('e'));
        assert_eq!(input.text(), "hello");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = TextInput::with_text("hello");
        assert!(input.backspace());
        assert_eq!(input.text(), "hell");

        input.move_home();
        assert!(!input.backspace());
        assert!(input.delete());
        assert_eq!(input.text(), "ell");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_unicode_cursor() {
        let mut input = TextInput::with_text("héllo");
        input.move_home();
        input.move_right();
        input.move_right();
        input.insert_char('x');
        assert_eq!(input.text(), "héxllo");
        assert!(input.backspace());
        assert!(input.backspace());
        assert_eq!(input.text(), "hllo");
    }

    #[test]
    fn test_digits_filter_and_cap() {
        let mut input = TextInput::digits(6);
        for c in "12ab345678".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.text(), "123456");
        assert!(input.is_full());
        assert!(!input.insert_char('9'));
    }

    #[test]
    fn test_set_text_respects_filter() {
        let mut input = TextInput::digits(4);
        input.set_text("9a8b7c6d5");
        assert_eq!(input.text(), "9876");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_is_empty_whitespace() {
        assert!(TextInput::with_text("   ").is_empty());
        assert!(!TextInput::with_text(" a ").is_empty());
    }

    #[test]
    fn test_handle_action() {
        let mut input = TextInput::with_text("hello");
        assert!(input.handle_action(Action::Home));
        assert_eq!(input.cursor(), 0);
        assert!(input.handle_action(Action::DeleteChar));
        assert_eq!(input.text(), "ello");
        assert!(!input.handle_action(Action::Quit));
    }

    #[test]
    fn test_is_action_allowed_when_focused() {
        assert!(TextInput::is_action_allowed_when_focused(&Action::Cancel));
        assert!(TextInput::is_action_allowed_when_focused(&Action::Backspace));
        assert!(TextInput::is_action_allowed_when_focused(&Action::Search));
        assert!(TextInput::is_action_allowed_when_focused(&Action::Skip));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::OpenBag));
    }
}

//! Text input widget for rendering [`TextInput`] fields.
//!
//! Used by the sign-up contact field, the OTP boxes and the search bar.

use crate::styles::theme;
use crate::utils::text_input::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// A bordered single-line field with placeholder and cursor support.
///
/// # Example
/// ```
/// use thyne_shell::widgets::TextInputWidget;
/// use thyne_shell::utils::TextInput;
///
/// let input = TextInput::with_text("98765");
/// let widget = TextInputWidget::new(&input)
///     .title("Phone or email")
///     .placeholder("Enter phone number or email")
///     .focused(true);
/// // frame.render_text_input_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    /// Shown under the field in the error color; also colors the border.
    error: Option<String>,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
            error: None,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    fn display_text(&self) -> &str {
        let text = self.input.text();
        if text.is_empty() {
            self.placeholder.unwrap_or("")
        } else {
            text
        }
    }

    fn text_style(&self) -> Style {
        let t = theme();
        if self.input.is_empty() {
            t.muted_style()
        } else {
            t.text_style()
        }
    }

    fn border_style(&self) -> Style {
        let t = theme();
        if self.error.is_some() {
            t.error_style()
        } else if self.focused {
            t.border_focused_style()
        } else {
            t.border_style()
        }
    }

    fn create_block(&self) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style());
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        if let Some(error) = &self.error {
            block = block
                .title_bottom(Line::from(format!(" {} ", error)))
                .title_style(theme().error_style());
        }
        block
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.create_block();
        Paragraph::new(self.display_text())
            .block(block)
            .style(self.text_style())
            .render(area, buf);
    }
}

/// Renders a [`TextInputWidget`] and places the terminal cursor in it.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let focused = widget.focused;
        let cursor = widget.input.cursor();
        let inner = widget.create_block().inner(area);

        self.render_widget(widget, area);

        if focused && inner.width > 0 {
            let x = inner.x + (cursor as u16).min(inner.width - 1);
            self.set_cursor_position((x, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_shown_when_empty() {
        let input = TextInput::new();
        let widget = TextInputWidget::new(&input).placeholder("Search jewellery...");
        assert_eq!(widget.display_text(), "Search jewellery...");
    }

    #[test]
    fn test_text_shown_when_present() {
        let input = TextInput::with_text("ring");
        let widget = TextInputWidget::new(&input).placeholder("Search jewellery...");
        assert_eq!(widget.display_text(), "ring");
    }

    #[test]
    fn test_error_renders_under_field() {
        let input = TextInput::with_text("abc");
        let widget = TextInputWidget::new(&input)
            .error(Some("Please enter a valid email address".to_string()));
        let area = Rect::new(0, 0, 50, 3);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        let bottom: String = (0..50).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert!(bottom.contains("valid email"));
    }
}

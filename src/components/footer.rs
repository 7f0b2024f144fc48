use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Bottom toolbar with key hints.
pub struct Footer;

impl Footer {
    /// Render `"key: label | key: label"` hints. Keys are emphasized.
    ///
    /// Returns the height used (1 for border, 1 for text).
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> u16 {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(theme().border_style());
        let inner = block.inner(area);

        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(hint_line(text)).alignment(Alignment::Center), inner);
        2
    }
}

/// Style a hint string the way the toolbar shows it.
pub fn hint_line(text: &str) -> Line<'static> {
    let t = theme();
    let mut spans = Vec::new();
    for (i, part) in text.split(" | ").enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", t.muted_style()));
        }
        match part.split_once(": ") {
            Some((keys, label)) => {
                spans.push(Span::styled(keys.to_string(), t.emphasis_style().add_modifier(Modifier::BOLD)));
                spans.push(Span::styled(format!(" {label}"), t.muted_style()));
            }
            None => spans.push(Span::styled(part.to_string(), t.text_style())),
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_line_splits_keys_and_labels() {
        let line = hint_line("/: Search | b: Bag");
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "/ Search  b Bag");
    }
}

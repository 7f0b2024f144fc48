//! Help Overlay Component
//!
//! Lists the effective key bindings, grouped by category.

use crate::keymap::Keymap;
use crate::styles::theme;
use crate::utils::center_popup;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) {
        let t = theme();
        let popup = center_popup(area, 80, 90);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name()))
            .title_alignment(Alignment::Center)
            .title_style(t.title_style())
            .border_style(t.border_focused_style());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(2)])
            .split(inner);

        frame.render_widget(
            Paragraph::new(binding_lines(keymap)).wrap(Wrap { trim: false }),
            chunks[0],
        );

        let footer = format!("Edit keybindings in: {}\nPress any key to close", config_path);
        frame.render_widget(
            Paragraph::new(footer)
                .style(t.muted_style())
                .alignment(Alignment::Center),
            chunks[1],
        );
    }
}

fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
    let t = theme();
    let mut bindings = keymap.all_bindings();
    // Stable sort keeps preset order inside each category.
    bindings.sort_by_key(|b| b.action.category());

    let mut lines = Vec::new();
    let mut current = "";
    for binding in &bindings {
        let category = binding.action.category();
        if category != current {
            if !current.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::styled(
                format!("  {}", category),
                t.secondary_style().add_modifier(Modifier::BOLD),
            ));
            current = category;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("    {:14}", binding.display()), t.emphasis_style()),
            Span::styled(binding.get_description().to_string(), t.text_style()),
        ]));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_one_heading() {
        let keymap = Keymap::default();
        let lines = binding_lines(&keymap);
        let headings: Vec<String> = lines
            .iter()
            .filter(|l| l.spans.len() == 1 && l.spans[0].content.starts_with("  ") && !l.spans[0].content.starts_with("    "))
            .map(|l| l.spans[0].content.trim().to_string())
            .collect();
        let mut unique = headings.clone();
        unique.dedup();
        assert_eq!(headings, unique);
        assert!(headings.iter().any(|h| h == "Shopping"));
    }
}

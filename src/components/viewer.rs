use crate::catalog::content::FeedPost;
use crate::components::footer::hint_line;
use crate::keymap::{Action, Keymap};
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// Immersive view of one community post. Owns the whole frame: no header,
/// no toolbar.
pub struct PostViewer;

impl PostViewer {
    pub fn render(frame: &mut Frame, area: Rect, post: &FeedPost, wishlist: &[String], keymap: &Keymap) {
        let t = theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(format!(" @{} · {} ", post.username, post.time_ago))
            .title_style(t.title_style());

        let tagged = post
            .products
            .iter()
            .map(|id| {
                if wishlist.iter().any(|w| w == id) {
                    format!("♥ {id}")
                } else {
                    (*id).to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("  ");

        let lines = vec![
            Line::default(),
            Line::styled(post.caption, t.text_style().add_modifier(Modifier::BOLD)),
            Line::default(),
            Line::styled(post.hashtags.join(" "), t.secondary_style()),
            Line::default(),
            Line::styled(format!("♥ {}   ✎ {}", post.likes, post.comments), t.muted_style()),
            Line::default(),
            Line::from(vec![
                Span::styled("Shop the look: ", t.muted_style()),
                Span::styled(tagged, t.emphasis_style()),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("Prompt: ", t.muted_style()),
                Span::styled(post.prompt, t.text_style().add_modifier(Modifier::ITALIC)),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[0],
        );

        let hints = keymap.hints(&[
            (Action::MoveLeft, "Previous"),
            (Action::MoveRight, "Next"),
            (Action::Confirm, "Shop"),
            (Action::Remix, "Remix"),
            (Action::Cancel, "Exit"),
        ]);
        frame.render_widget(Paragraph::new(hint_line(&hints)).alignment(Alignment::Center), chunks[1]);
    }
}

use crate::catalog::search::HitKind;
use crate::state::search::SearchOverlay;
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::center_popup;
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

/// Search popup drawn over the shell.
pub struct SearchOverlayView;

impl SearchOverlayView {
    pub fn render(frame: &mut Frame, area: Rect, search: &SearchOverlay) {
        let t = theme();
        let popup = center_popup(area, 80, 80);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(" Search ")
            .title_style(t.title_style());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(inner);

        let input = TextInputWidget::new(search.input())
            .placeholder("Search jewellery, posts or ideas...")
            .focused(true);
        frame.render_text_input_widget(input, chunks[0]);

        frame.render_widget(Paragraph::new(result_lines(search)), chunks[1]);
    }
}

fn kind_tag(kind: HitKind) -> &'static str {
    match kind {
        HitKind::Product => "product",
        HitKind::Collection => "collection",
        HitKind::Combo => "combo",
        HitKind::NewArrival => "new",
        HitKind::Deal => "deal",
        HitKind::CommunityPost => "post",
        HitKind::AiCreate => "create",
    }
}

fn result_lines(search: &SearchOverlay) -> Vec<Line<'static>> {
    let t = theme();
    if search.query().trim().is_empty() {
        return vec![Line::styled(" Type to search", t.muted_style())];
    }
    if search.is_searching() {
        return vec![Line::styled(" Searching…", t.muted_style())];
    }
    if search.results().is_empty() {
        return vec![Line::styled(
            format!(" No results for \"{}\"", search.query().trim()),
            t.muted_style(),
        )];
    }

    let mut lines = Vec::new();
    let mut index = 0;
    for section in &search.results().sections {
        lines.push(Line::styled(
            format!(" {}", section.category.label()),
            t.secondary_style().add_modifier(Modifier::BOLD),
        ));
        for hit in &section.hits {
            let selected = index == search.selected();
            let (marker, style) = if selected {
                (LIST_HIGHLIGHT_SYMBOL, t.highlight_style())
            } else {
                ("  ", t.text_style())
            };
            let mut spans = vec![
                Span::styled(format!(" {marker}{}", hit.title), style),
                Span::styled(format!("  {}", kind_tag(hit.kind)), t.muted_style()),
            ];
            if let Some(subtitle) = &hit.subtitle {
                spans.push(Span::styled(format!("  {subtitle}"), t.emphasis_style()));
            }
            lines.push(Line::from(spans));
            index += 1;
        }
        lines.push(Line::default());
    }
    lines
}

use crate::state::tabs::{PrimaryTab, SubTab};
use crate::styles::theme;
use crate::widgets::ThyneLogo;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// App bar: brand, primary sections and the wishlist/bag counters.
pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, active: PrimaryTab, bag_count: u32, wishlist_count: usize) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(t.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(ThyneLogo::inline().width() + 3),
                Constraint::Min(0),
                Constraint::Length(18),
            ])
            .split(inner);

        frame.render_widget(ThyneLogo::inline(), chunks[0]);

        let mut tabs = Vec::new();
        for (i, tab) in PrimaryTab::ALL.iter().enumerate() {
            if i > 0 {
                tabs.push(Span::styled("   ", t.muted_style()));
            }
            let style = if *tab == active {
                t.active_tab_style()
            } else {
                t.muted_style()
            };
            tabs.push(Span::styled(format!("{} {}", i + 1, tab.label()), style));
        }
        frame.render_widget(Paragraph::new(Line::from(tabs)), chunks[1]);

        let counters = Line::from(vec![
            Span::styled(format!("♡ {wishlist_count}"), t.secondary_style()),
            Span::raw("   "),
            Span::styled(format!("Bag {bag_count}"), t.emphasis_style()),
        ]);
        frame.render_widget(Paragraph::new(counters).alignment(Alignment::Right), chunks[2]);
    }
}

/// Strip of sub-tabs for the active section.
pub struct SectionNav;

impl SectionNav {
    pub fn render(frame: &mut Frame, area: Rect, active: SubTab, loading: bool, generating: bool) {
        let t = theme();
        let mut spans = vec![Span::raw(" ")];
        for (i, sub) in siblings(active).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", t.muted_style()));
            }
            let style = if sub == active {
                t.active_tab_style()
            } else {
                t.text_style()
            };
            spans.push(Span::styled(sub.label(), style));
        }
        if generating {
            spans.push(Span::styled("   designing…", t.warning_style()));
        } else if loading {
            spans.push(Span::styled("   loading…", t.muted_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// Every sub-tab of the section `active` belongs to.
fn siblings(active: SubTab) -> Vec<SubTab> {
    use crate::state::tabs::{CommerceCategory, CommunityTab, CreateTab};
    match active {
        SubTab::Commerce(_) => CommerceCategory::ALL.into_iter().map(SubTab::Commerce).collect(),
        SubTab::Community(_) => CommunityTab::ALL.into_iter().map(SubTab::Community).collect(),
        SubTab::Create(_) => CreateTab::ALL.into_iter().map(SubTab::Create).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tabs::CommunityTab;

    #[test]
    fn test_siblings_stay_in_section() {
        let subs = siblings(SubTab::Community(CommunityTab::Profile));
        assert_eq!(subs.len(), 3);
        assert!(subs.iter().all(|s| s.primary() == PrimaryTab::Community));
    }
}

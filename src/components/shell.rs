//! The main tabbed shell: app bar, section nav, scrollable content and the
//! bottom toolbar.

use crate::catalog::format_price;
use crate::components::footer::Footer;
use crate::components::header::{Header, SectionNav};
use crate::components::search_overlay::SearchOverlayView;
use crate::components::viewer::PostViewer;
use crate::keymap::{Action, Keymap};
use crate::state::chrome::ChromeVisibility;
use crate::state::composer::ShellView;
use crate::state::shell::{ChatRole, ShellItem};
use crate::state::tabs::PrimaryTab;
use crate::styles::{theme, Theme, LIST_HIGHLIGHT_SYMBOL};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Rows taken by the app bar including its bottom border.
pub const HEADER_HEIGHT: u16 = 2;
/// Rows taken by the sub-tab strip.
pub const NAV_HEIGHT: u16 = 1;
/// Rows taken by the toolbar including its top border.
pub const TOOLBAR_HEIGHT: u16 = 2;

/// Where each part of the shell goes for a given chrome state.
///
/// The header and the sub-tab strip collapse together. A hidden part takes
/// no rows, so the content grows into the freed space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellAreas {
    pub header: Option<Rect>,
    pub nav: Option<Rect>,
    pub content: Rect,
    pub toolbar: Option<Rect>,
}

impl ShellAreas {
    /// Rows the content gains when every collapsible part is hidden.
    pub const COLLAPSIBLE_ROWS: u16 = HEADER_HEIGHT + NAV_HEIGHT + TOOLBAR_HEIGHT;

    pub fn split(area: Rect, chrome: Option<ChromeVisibility>) -> Self {
        let chrome = chrome.unwrap_or(ChromeVisibility::HIDDEN);
        let top = if chrome.header { HEADER_HEIGHT + NAV_HEIGHT } else { 0 };
        let bottom = if chrome.toolbar { TOOLBAR_HEIGHT } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(top),
                Constraint::Min(0),
                Constraint::Length(bottom),
            ])
            .split(area);

        let (header, nav) = if chrome.header {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Length(NAV_HEIGHT)])
                .split(chunks[0]);
            (Some(rows[0]), Some(rows[1]))
        } else {
            (None, None)
        };

        Self {
            header,
            nav,
            content: chunks[1],
            toolbar: chrome.toolbar.then_some(chunks[2]),
        }
    }
}

pub struct ShellScreen;

impl ShellScreen {
    pub fn render(frame: &mut Frame, area: Rect, view: &ShellView, keymap: &Keymap) {
        if let Some(post) = view.viewer {
            PostViewer::render(frame, area, post, view.wishlist, keymap);
            if let Some(search) = view.search {
                SearchOverlayView::render(frame, area, search);
            }
            return;
        }

        let areas = ShellAreas::split(area, view.chrome);
        if let Some(header) = areas.header {
            Header::render(frame, header, view.tab, view.bag_count, view.wishlist.len());
        }
        if let Some(nav) = areas.nav {
            SectionNav::render(frame, nav, view.sub_tab, view.loading, view.generating);
        }

        render_content(frame, areas.content, view);

        if let Some(toolbar) = areas.toolbar {
            Footer::render(frame, toolbar, &keymap.hints(toolbar_hints(view.tab)));
        }
        if let Some(search) = view.search {
            SearchOverlayView::render(frame, area, search);
        }
    }
}

fn toolbar_hints(tab: PrimaryTab) -> &'static [(Action, &'static str)] {
    match tab {
        PrimaryTab::Commerce => &[
            (Action::Search, "Search"),
            (Action::OpenWishlist, "Wishlist"),
            (Action::OpenBag, "Bag"),
            (Action::AddToBag, "Add"),
            (Action::Help, "Help"),
        ],
        PrimaryTab::Community => &[
            (Action::Search, "Search"),
            (Action::ToggleFullscreen, "Immersive"),
            (Action::Remix, "Remix"),
            (Action::Help, "Help"),
        ],
        PrimaryTab::Create => &[
            (Action::Confirm, "Use idea"),
            (Action::NextTab, "Sections"),
            (Action::Help, "Help"),
        ],
    }
}

fn render_content(frame: &mut Frame, area: Rect, view: &ShellView) {
    let t = theme();
    let lines = if view.loading {
        shimmer_lines(&t, area.height)
    } else if view.items.is_empty() {
        empty_lines(&t, view)
    } else {
        view.items
            .iter()
            .enumerate()
            .flat_map(|(i, item)| item_lines(&t, item, i == view.focus, view.wishlist))
            .collect()
    };

    let offset = if view.loading { 0 } else { view.scroll_offset };
    let paragraph = Paragraph::new(lines).scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

fn shimmer_lines(t: &Theme, height: u16) -> Vec<Line<'static>> {
    (0..height)
        .map(|row| match row % 4 {
            0 => Line::styled("  ▆▆▆▆▆▆▆▆▆▆▆▆▆▆▆▆▆▆▆▆▆▆▆▆", t.shimmer_style()),
            1 => Line::styled("  ▂▂▂▂▂▂▂▂▂▂▂▂▂▂▂▂", t.shimmer_style()),
            2 => Line::styled("  ▂▂▂▂▂▂▂▂", t.shimmer_style()),
            _ => Line::default(),
        })
        .collect()
}

fn empty_lines(t: &Theme, view: &ShellView) -> Vec<Line<'static>> {
    let message = match view.tab {
        PrimaryTab::Community => "Wishlist a product to see posts featuring it here.",
        PrimaryTab::Create => "Nothing created yet. Pick an idea in Chat to get started.",
        PrimaryTab::Commerce => "Nothing to show in this category.",
    };
    vec![Line::default(), Line::styled(format!("  {message}"), t.muted_style())]
}

/// Lines for one item. The count always equals [`ShellItem::height`] so
/// scroll offsets computed by the composer line up with what is drawn.
fn item_lines(t: &Theme, item: &ShellItem, focused: bool, wishlist: &[String]) -> Vec<Line<'static>> {
    let (marker, title_style) = if focused {
        (LIST_HIGHLIGHT_SYMBOL, t.highlight_style())
    } else {
        ("  ", t.text_style().add_modifier(Modifier::BOLD))
    };
    let indent = "  ";

    let mut lines = match item {
        ShellItem::Bundle(bundle) => vec![
            Line::from(vec![
                Span::styled(format!("{marker}{}", bundle.name), title_style),
                Span::styled(format!("  ★ {:.1}", bundle.rating), t.muted_style()),
            ]),
            Line::styled(format!("{indent}{}", bundle.description), t.muted_style()),
            Line::from(vec![
                Span::raw(indent),
                Span::styled(format_price(bundle.discounted_price), t.emphasis_style()),
                Span::raw("  "),
                Span::styled(
                    format_price(bundle.total_price),
                    t.muted_style().add_modifier(Modifier::CROSSED_OUT),
                ),
                Span::styled(format!("  Save {}%", bundle.savings_percent()), t.success_style()),
            ]),
        ],
        ShellItem::Collection { title, subtitle, .. } => vec![
            Line::styled(format!("{marker}{title}"), title_style),
            Line::styled(format!("{indent}{subtitle}"), t.muted_style()),
        ],
        ShellItem::Product(product) => {
            let heart = if wishlist.contains(&product.id) { "  ♥" } else { "" };
            let mut title = vec![Span::styled(format!("{marker}{}", product.name), title_style)];
            if let Some(badge) = &product.badge {
                title.push(Span::styled(format!("  [{badge}]"), t.secondary_style()));
            }
            title.push(Span::styled(heart, t.secondary_style()));

            let mut price = vec![
                Span::raw(indent),
                Span::styled(format_price(product.price), t.emphasis_style()),
            ];
            if let (Some(original), Some(pct)) = (product.original_price, product.discount_percent()) {
                price.push(Span::styled(
                    format!("  {}", format_price(original)),
                    t.muted_style().add_modifier(Modifier::CROSSED_OUT),
                ));
                price.push(Span::styled(format!("  {pct}% off"), t.success_style()));
            }
            price.push(Span::styled(format!("  ★ {:.1}", product.rating), t.muted_style()));
            vec![Line::from(title), Line::from(price)]
        }
        ShellItem::ViewAll => vec![Line::styled(format!("{marker}View all products →"), title_style)],
        ShellItem::Post(post) => vec![
            Line::from(vec![
                Span::styled(format!("{marker}@{}", post.username), title_style),
                Span::styled(format!(" · {}", post.time_ago), t.muted_style()),
            ]),
            Line::styled(format!("{indent}{}", post.caption), t.text_style()),
            Line::styled(format!("{indent}{}", post.hashtags.join(" ")), t.secondary_style()),
            Line::styled(
                format!("{indent}♥ {}   ✎ {}", post.likes, post.comments),
                t.muted_style(),
            ),
            Line::styled(
                format!("{indent}{} tagged product(s)", post.products.len()),
                t.emphasis_style(),
            ),
            Line::default(),
        ],
        ShellItem::Message(message) => {
            let who = match message.role {
                ChatRole::User => "You",
                ChatRole::Assistant => "Thyne",
            };
            vec![
                Line::styled(format!("{marker}{who}"), title_style),
                Line::styled(format!("{indent}{}", message.content), t.text_style()),
                Line::default(),
            ]
        }
        ShellItem::Prompt(prompt) => vec![Line::styled(format!("{marker}✧ {prompt}"), title_style)],
        ShellItem::Creation(prompt) => vec![
            Line::styled(format!("{marker}◆ Design"), title_style),
            Line::styled(format!("{indent}{prompt}"), t.muted_style()),
        ],
    };

    lines.resize(usize::from(item.height()), Line::default());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::content::FEED;
    use crate::catalog::default_catalog;
    use crate::catalog::Catalog;
    use crate::state::shell::ChatMessage;

    #[test]
    fn test_hidden_chrome_gives_content_full_height() {
        let area = Rect::new(0, 0, 80, 30);
        let shown = ShellAreas::split(area, Some(ChromeVisibility::VISIBLE));
        let hidden = ShellAreas::split(area, Some(ChromeVisibility::HIDDEN));
        let fullscreen = ShellAreas::split(area, None);

        assert_eq!(shown.content.height, 30 - HEADER_HEIGHT - NAV_HEIGHT - TOOLBAR_HEIGHT);
        assert!(hidden.header.is_none() && hidden.toolbar.is_none());
        assert_eq!(hidden.content, area);
        assert_eq!(fullscreen.content, area);
    }

    #[test]
    fn test_item_lines_match_item_height() {
        let t = theme();
        let catalog = default_catalog().unwrap();
        let items = vec![
            ShellItem::Bundle(catalog.all_bundles()[0].clone()),
            ShellItem::Product(catalog.all_products()[0].clone()),
            ShellItem::Collection {
                category: "rings".into(),
                title: "Diamond Luxe".into(),
                subtitle: "Brilliance that captivates".into(),
            },
            ShellItem::ViewAll,
            ShellItem::Post(&FEED[0]),
            ShellItem::Message(ChatMessage {
                role: ChatRole::User,
                content: "A gold ring".into(),
            }),
            ShellItem::Prompt("A gold ring".into()),
            ShellItem::Creation("A gold ring".into()),
        ];
        for item in &items {
            for focused in [true, false] {
                assert_eq!(item_lines(&t, item, focused, &[]).len(), usize::from(item.height()));
            }
        }
    }
}

//! Full-screen pages that replace the shell: wishlist, bag, product and
//! bundle details, product lists.

use crate::catalog::{format_price, Product};
use crate::components::footer::Footer;
use crate::keymap::{Action, Keymap};
use crate::state::composer::ScreenView;
use crate::state::router::ScreenState;
use crate::styles::{theme, Theme, LIST_HIGHLIGHT_SYMBOL};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

pub struct ScreenPage;

impl ScreenPage {
    pub fn render(frame: &mut Frame, area: Rect, view: &ScreenView, keymap: &Keymap) {
        let t = theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", title(view)))
            .title_style(t.title_style());
        let inner = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);

        let mut lines = intro_lines(&t, view);
        if !view.products.is_empty() {
            lines.extend(product_lines(&t, view));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);

        let hints = keymap.hints(&[
            (Action::Cancel, "Back"),
            (Action::Confirm, "Open"),
            (Action::AddToBag, "Add to bag"),
            (Action::ToggleWishlist, "Wishlist"),
        ]);
        Footer::render(frame, chunks[1], &hints);
    }
}

fn title(view: &ScreenView) -> String {
    match view.screen {
        ScreenState::Main => String::new(),
        ScreenState::Wishlist => format!("Wishlist ({})", view.products.len()),
        ScreenState::Bag => format!("Bag ({} items)", view.bag_count),
        ScreenState::ProductDetail { product, .. } => product.name.clone(),
        ScreenState::BundleDetail { bundle, .. } => bundle.name.clone(),
        ScreenState::ProductList { title, .. } => title.clone(),
    }
}

fn intro_lines(t: &Theme, view: &ScreenView) -> Vec<Line<'static>> {
    match view.screen {
        ScreenState::Main => Vec::new(),
        ScreenState::Wishlist if view.products.is_empty() => vec![
            Line::default(),
            Line::styled(" Your wishlist is empty.", t.muted_style()),
            Line::styled(" Press the wishlist key on any product to save it here.", t.muted_style()),
        ],
        ScreenState::Wishlist => vec![Line::default()],
        ScreenState::Bag => {
            let total: u32 = view.products.iter().map(|p| p.price).sum();
            vec![
                Line::default(),
                Line::from(vec![
                    Span::styled(" Total  ", t.muted_style()),
                    Span::styled(format_price(total), t.emphasis_style().add_modifier(Modifier::BOLD)),
                ]),
                Line::default(),
            ]
        }
        ScreenState::ProductDetail { product, .. } => product_detail_lines(t, product, view.wishlist),
        ScreenState::BundleDetail { bundle, .. } => vec![
            Line::default(),
            Line::styled(format!(" {}", bundle.description), t.text_style()),
            Line::default(),
            Line::from(vec![
                Span::raw(" "),
                Span::styled(format_price(bundle.discounted_price), t.emphasis_style().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(format_price(bundle.total_price), t.muted_style().add_modifier(Modifier::CROSSED_OUT)),
                Span::styled(
                    format!("  You save {} ({}%)", format_price(bundle.savings()), bundle.savings_percent()),
                    t.success_style(),
                ),
            ]),
            Line::styled(format!(" ★ {:.1}", bundle.rating), t.muted_style()),
            Line::default(),
            Line::styled(" In this set", t.secondary_style().add_modifier(Modifier::BOLD)),
        ],
        ScreenState::ProductList { products, .. } if products.is_empty() => vec![
            Line::default(),
            Line::styled(" No products in this collection yet.", t.muted_style()),
        ],
        ScreenState::ProductList { products, .. } => vec![
            Line::styled(format!(" {} products", products.len()), t.muted_style()),
            Line::default(),
        ],
    }
}

fn product_detail_lines(t: &Theme, product: &Product, wishlist: &[String]) -> Vec<Line<'static>> {
    let mut price = vec![
        Span::raw(" "),
        Span::styled(format_price(product.price), t.emphasis_style().add_modifier(Modifier::BOLD)),
    ];
    if let (Some(original), Some(pct)) = (product.original_price, product.discount_percent()) {
        price.push(Span::styled(
            format!("  {}", format_price(original)),
            t.muted_style().add_modifier(Modifier::CROSSED_OUT),
        ));
        price.push(Span::styled(format!("  {pct}% off"), t.success_style()));
    }

    let mut lines = vec![
        Line::default(),
        Line::from(price),
        Line::styled(format!(" ★ {:.1}", product.rating), t.muted_style()),
        Line::default(),
        Line::styled(format!(" {}", product.description_or_default()), t.text_style()),
        Line::default(),
        Line::from(vec![
            Span::styled(" Material  ", t.muted_style()),
            Span::styled(product.material().to_string(), t.text_style()),
        ]),
    ];
    if !product.sizes.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(" Sizes     ", t.muted_style()),
            Span::styled(product.sizes.join("  "), t.text_style()),
        ]));
    }
    if wishlist.contains(&product.id) {
        lines.push(Line::styled(" ♥ In your wishlist", t.secondary_style()));
    }
    lines.push(Line::default());
    lines.push(Line::styled(
        " You may also like",
        t.secondary_style().add_modifier(Modifier::BOLD),
    ));
    lines
}

fn product_lines(t: &Theme, view: &ScreenView) -> Vec<Line<'static>> {
    view.products
        .iter()
        .enumerate()
        .map(|(i, product)| {
            let (marker, style) = if i == view.focus {
                (LIST_HIGHLIGHT_SYMBOL, t.highlight_style())
            } else {
                ("  ", t.text_style())
            };
            let heart = if view.wishlist.contains(&product.id) { " ♥" } else { "" };
            Line::from(vec![
                Span::styled(format!(" {marker}{}", product.name), style),
                Span::styled(heart, t.secondary_style()),
                Span::styled(format!("  {}", format_price(product.price)), t.emphasis_style()),
                Span::styled(format!("  ★ {:.1}", product.rating), t.muted_style()),
            ])
        })
        .collect()
}

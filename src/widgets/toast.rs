//! Toast notification widget.
//!
//! A short-lived message drawn above the bottom toolbar. It never takes
//! focus and disappears on the first tick after its duration.

use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget};
use std::time::{Duration, Instant};

/// How long a toast stays up unless overridden
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(2500);

/// Toast notification variant for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    /// Added to the bag (green)
    Success,
    /// Wishlist changes (accent)
    Info,
    /// Something could not be done (yellow)
    Warning,
}

impl ToastVariant {
    /// Get the icon for this variant
    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "\u{2714}", // ✔
            ToastVariant::Info => "\u{2665}",    // ♥
            ToastVariant::Warning => "\u{26A0}", // ⚠
        }
    }

    /// Get the border color for this variant
    pub fn color(&self) -> Color {
        let t = theme();
        match self {
            ToastVariant::Success => t.success,
            ToastVariant::Info => t.accent,
            ToastVariant::Warning => t.warning,
        }
    }
}

/// Toast notification data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// The message to display
    pub message: String,
    /// The variant (success, info, warning)
    pub variant: ToastVariant,
    /// First instant at which the toast is gone
    expires_at: Instant,
}

impl Toast {
    /// Create a toast shown from `now` for the default duration
    pub fn new(message: impl Into<String>, variant: ToastVariant, now: Instant) -> Self {
        Self {
            message: message.into(),
            variant,
            expires_at: now + DEFAULT_TOAST_DURATION,
        }
    }

    /// Show for `duration` from `now` instead
    pub fn with_duration(mut self, now: Instant, duration: Duration) -> Self {
        self.expires_at = now + duration;
        self
    }

    /// Check if the toast should be dismissed
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Renders one toast centered just above the bottom of `area`.
pub struct ToastWidget<'a> {
    /// The toast to render
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    /// Create a new toast widget
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    /// Calculate the toast area (centered above the toolbar)
    fn calculate_area(&self, area: Rect) -> Rect {
        let text_width = self.toast.message.chars().count() as u16 + 6;
        let width = text_width.clamp(20, 48).min(area.width);
        let height = 3u16.min(area.height);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + area.height.saturating_sub(height + 3);
        Rect::new(x, y, width, height)
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toast_area = self.calculate_area(area);
        let t = theme();
        Widget::render(Clear, toast_area, buf);

        let border = if t.theme_type == crate::styles::ThemeType::NoColor {
            Style::default()
        } else {
            Style::default().fg(self.toast.variant.color())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        Paragraph::new(format!("{} {}", self.toast.variant.icon(), self.toast.message))
            .block(block)
            .style(t.text_style().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .render(toast_area, buf);
    }
}

/// Holds at most one toast; a new one replaces the old.
#[derive(Debug, Default)]
pub struct ToastManager {
    /// Currently displayed toast
    current: Option<Toast>,
}

impl ToastManager {
    /// Create a new toast manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast, replacing any existing toast
    pub fn push(&mut self, toast: Toast) {
        self.current = Some(toast);
    }

    /// Show a success toast
    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Toast::new(message, ToastVariant::Success, now));
    }

    /// Show an info toast
    pub fn info(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Toast::new(message, ToastVariant::Info, now));
    }

    /// Show a warning toast
    pub fn warning(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Toast::new(message, ToastVariant::Warning, now));
    }

    /// Drop an expired toast. Returns true if one was dropped.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.current = None;
            return true;
        }
        false
    }

    /// Get the current toast, if any
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Render the current toast, if any
    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        if let Some(toast) = self.current() {
            frame.render_widget(ToastWidget::new(toast), area);
        }
    }
}

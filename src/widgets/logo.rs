//! The [`ThyneLogo`] widget renders the brand wordmark.
use crate::styles::theme;
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::Widget;

/// The wordmark, in a one-line form for the app bar and a large form for
/// the splash.
///
/// ```rust
/// use thyne_shell::widgets::ThyneLogo;
///
/// # fn draw(frame: &mut ratatui::Frame) {
/// frame.render_widget(ThyneLogo::large(), frame.area());
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ThyneLogo {
    size: Size,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Size {
    /// ```text
    /// ✦ THYNE
    /// ```
    #[default]
    Inline,
    /// ```text
    /// ╺┳╸╻ ╻╻ ╻┏┓╻┏━╸
    ///  ┃ ┣━┫┗┳┛┃┗┫┣╸
    ///  ╹ ╹ ╹ ╹ ╹ ╹┗━╸
    /// ```
    Large,
}

impl ThyneLogo {
    pub const fn new(size: Size) -> Self {
        Self { size }
    }

    pub const fn inline() -> Self {
        Self::new(Size::Inline)
    }

    pub const fn large() -> Self {
        Self::new(Size::Large)
    }

    pub const fn width(&self) -> u16 {
        self.size.width()
    }

    pub const fn height(&self) -> u16 {
        self.size.height()
    }
}

impl Widget for ThyneLogo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Text::raw(self.size.as_str())
            .style(theme().title_style())
            .render(area, buf);
    }
}

impl Size {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "✦ THYNE",
            Self::Large => indoc! {"
                ╺┳╸╻ ╻╻ ╻┏┓╻┏━╸
                 ┃ ┣━┫┗┳┛┃┗┫┣╸
                 ╹ ╹ ╹ ╹ ╹ ╹┗━╸
            "},
        }
    }

    pub const fn width(self) -> u16 {
        match self {
            Self::Inline => 7,
            Self::Large => 15,
        }
    }

    pub const fn height(self) -> u16 {
        match self {
            Self::Inline => 1,
            Self::Large => 3,
        }
    }
}

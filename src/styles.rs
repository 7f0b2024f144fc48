//! Theme and style system for the storefront shell
//!
//! One palette is active at a time. Components read it through [`theme`]
//! on every frame, so switching at runtime takes effect on the next draw.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::RwLock;

/// Selection indicator shown next to the focused row
pub const LIST_HIGHLIGHT_SYMBOL: &str = "» ";

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Dark,
    accent: Color::Rgb(212, 175, 55),
    secondary: Color::Magenta,
    success: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,
    text: Color::White,
    text_muted: Color::DarkGray,
    text_emphasis: Color::Rgb(212, 175, 55),
    border: Color::DarkGray,
    border_focused: Color::Rgb(212, 175, 55),
    highlight_bg: Color::Rgb(48, 44, 36),
    shimmer: Color::Rgb(60, 60, 60),
    background: Color::Reset,
});

/// Install the theme used by every subsequent draw
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(|e| e.into_inner());
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap_or_else(|e| e.into_inner()).clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

impl ThemeType {
    /// Resolve the configured theme, letting `NO_COLOR` override it
    pub fn resolve(configured: &str, no_color_env: bool) -> Self {
        if no_color_env {
            return ThemeType::NoColor;
        }
        configured.parse().unwrap_or_default()
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme type
    pub theme_type: ThemeType,

    // === Brand Colors ===
    /// Brand accent (active tab, prices, focused borders)
    pub accent: Color,
    /// Secondary accent (community content, badges)
    pub secondary: Color,

    // === Semantic Colors ===
    /// Success states (added to bag, verified)
    pub success: Color,
    /// Warning states (cooldowns, nothing to act on)
    pub warning: Color,
    /// Error states (invalid contact, wrong code)
    pub error: Color,

    // === Text Colors ===
    /// Main text color
    pub text: Color,
    /// Muted/secondary text
    pub text_muted: Color,
    /// Emphasized text (product names, key hints)
    pub text_emphasis: Color,

    // === UI Colors ===
    /// Default border color
    pub border: Color,
    /// Focused/active border color
    pub border_focused: Color,
    /// Background of the focused row
    pub highlight_bg: Color,
    /// Placeholder blocks drawn while a section is loading
    pub shimmer: Color,
    /// Background color (use Reset for terminal default)
    pub background: Color,
}

impl Theme {
    /// Palette for the given theme type
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme, for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            accent: Color::Rgb(212, 175, 55),
            secondary: Color::Magenta,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Rgb(212, 175, 55),
            border: Color::DarkGray,
            border_focused: Color::Rgb(212, 175, 55),
            highlight_bg: Color::Rgb(48, 44, 36),
            shimmer: Color::Rgb(60, 60, 60),
            background: Color::Reset,
        }
    }

    /// Light theme, for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            accent: Color::Rgb(150, 110, 20),
            secondary: Color::Magenta,
            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Rgb(150, 110, 20),
            border: Color::DarkGray,
            border_focused: Color::Rgb(150, 110, 20),
            highlight_bg: Color::Rgb(238, 230, 210),
            shimmer: Color::Gray,
            background: Color::Reset,
        }
    }

    /// No-color theme. Style helpers avoid setting fg/bg in this mode and
    /// rely on modifiers only.
    pub fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            accent: Color::Reset,
            secondary: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            highlight_bg: Color::Reset,
            shimmer: Color::Reset,
            background: Color::Reset,
        }
    }

    fn is_plain(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    /// Style for titles and the brand mark
    pub fn title_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for regular text
    pub fn text_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    /// Style for muted/secondary text
    pub fn muted_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    /// Prices, key hints and other call-outs
    pub fn emphasis_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.text_emphasis)
    }

    /// Community accents (usernames, hashtags)
    pub fn secondary_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::ITALIC);
        }
        Style::default().fg(self.secondary)
    }

    /// Style for success states
    pub fn success_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.success)
    }

    /// Style for warnings such as a running resend cooldown
    pub fn warning_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.warning)
    }

    /// Style for inline validation errors
    pub fn error_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.error)
    }

    /// Style for focused borders
    pub fn border_focused_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.border_focused)
    }

    /// Style for unfocused borders
    pub fn border_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    /// Style for the focused row
    pub fn highlight_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.text_emphasis)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Active tab in the app bar and the sub-tab strip
    pub fn active_tab_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Loading placeholder blocks
    pub fn shimmer_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.shimmer)
    }

    pub fn background_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().bg(self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_type_from_str() {
        assert_eq!("dark".parse::<ThemeType>().unwrap(), ThemeType::Dark);
        assert_eq!("light".parse::<ThemeType>().unwrap(), ThemeType::Light);
        assert_eq!("nocolor".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("no-color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("anything".parse::<ThemeType>().unwrap(), ThemeType::Dark);
    }

    #[test]
    fn test_no_color_env_wins() {
        assert_eq!(ThemeType::resolve("light", true), ThemeType::NoColor);
        assert_eq!(ThemeType::resolve("light", false), ThemeType::Light);
    }

    #[test]
    fn test_no_color_theme_styles_do_not_set_colors() {
        let t = Theme::new(ThemeType::NoColor);
        for s in [t.highlight_style(), t.active_tab_style(), t.error_style()] {
            assert!(s.fg.is_none());
            assert!(s.bg.is_none());
        }
    }
}

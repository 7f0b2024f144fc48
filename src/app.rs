//! Event loop and input routing.
//!
//! [`App`] owns the terminal. [`AppState`] owns everything else and turns
//! key, mouse and timer events into [`ViewComposer`] intents, so the
//! routing can be exercised without a terminal.

use crate::catalog::default_catalog;
use crate::components::{HelpOverlay, OtpScreen, ScreenPage, ShellAreas, ShellScreen, SignUpScreen, SplashScreen};
use crate::config::Config;
use crate::keymap::Action;
use crate::state::composer::{ComposerSettings, View, ViewComposer};
use crate::state::AuthStep;
use crate::tui::Tui;
use crate::utils::text_input::TextInput;
use crate::widgets::ToastManager;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::Frame;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long the loop waits for input before running timers.
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Which text field, if any, receives printable keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFocus {
    None,
    Auth,
    Search,
}

/// Everything the app needs apart from the terminal.
pub struct AppState {
    config: Config,
    config_path: String,
    composer: ViewComposer,
    toasts: ToastManager,
    show_help: bool,
    should_quit: bool,
}

impl AppState {
    pub fn new(config: Config, config_path: String, skip_auth: bool, now: Instant) -> Result<Self> {
        let catalog = default_catalog()?;
        let settings = ComposerSettings::from_config(&config)
            .chrome_rows(u32::from(ShellAreas::COLLAPSIBLE_ROWS))
            .skip_auth(skip_auth);
        Ok(Self {
            config,
            config_path,
            composer: ViewComposer::new(settings, Box::new(catalog), now),
            toasts: ToastManager::new(),
            show_help: false,
            should_quit: false,
        })
    }

    pub fn composer(&self) -> &ViewComposer {
        &self.composer
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run timers. Returns true if a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.composer.tick(now);
        self.toasts.tick(now) || changed
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn input_focus(&self) -> InputFocus {
        if self.composer.is_search_active() {
            return InputFocus::Search;
        }
        match self.composer.auth().step() {
            AuthStep::SignUp | AuthStep::Otp => InputFocus::Auth,
            AuthStep::Splash | AuthStep::Authenticated => InputFocus::None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.show_help {
            self.show_help = false;
            return;
        }

        let focus = self.input_focus();
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);
        if let (KeyCode::Char(c), true) = (key.code, plain) {
            match focus {
                InputFocus::Auth => {
                    self.composer.auth_input_char(c, now);
                    return;
                }
                InputFocus::Search => {
                    self.composer.search_input_char(c, now);
                    return;
                }
                InputFocus::None => {}
            }
        }

        let action = self.config.keymap.get_action(key.code, key.modifiers);
        if focus != InputFocus::None
            && !action.is_some_and(|a| TextInput::is_action_allowed_when_focused(&a))
        {
            return;
        }

        match self.composer.auth().step() {
            AuthStep::Splash => match action {
                Some(Action::Quit) => self.quit(),
                _ => {
                    self.composer.complete_splash();
                }
            },
            AuthStep::SignUp | AuthStep::Otp => {
                if let Some(action) = action {
                    self.handle_auth_action(action, now);
                }
            }
            AuthStep::Authenticated => {
                if let Some(action) = action {
                    self.handle_app_action(action, now);
                }
            }
        }
    }

    fn handle_auth_action(&mut self, action: Action, now: Instant) {
        let on_otp = self.composer.auth().step() == AuthStep::Otp;
        match action {
            Action::Confirm if on_otp => self.composer.verify_otp(now),
            Action::Confirm => {
                self.composer.submit_contact(now);
            }
            Action::Cancel => {
                self.composer.auth_back(now);
            }
            Action::Skip => {
                if self.composer.skip_sign_up(now).is_some() {
                    self.toasts.info("Welcome to Thyne", now);
                }
            }
            Action::Resend => {
                if self.composer.resend_otp(now) {
                    self.toasts.success("A new code is on its way", now);
                }
            }
            Action::ToggleNewsletter => {
                self.composer.toggle_newsletter();
            }
            Action::ToggleNotify => {
                self.composer.toggle_notify();
            }
            Action::Quit => self.quit(),
            other => {
                self.composer.auth_edit(other, now);
            }
        }
    }

    fn handle_app_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => {
                self.quit();
                return;
            }
            Action::Help => {
                self.show_help = true;
                return;
            }
            _ => {}
        }

        if self.composer.is_search_active() {
            self.handle_search_action(action, now);
        } else if !self.composer.router().is_main() {
            self.handle_screen_action(action, now);
        } else if self.composer.viewer_post().is_some() {
            self.handle_viewer_action(action, now);
        } else {
            self.handle_shell_action(action, now);
        }
    }

    fn handle_search_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Cancel | Action::Search => self.composer.close_search(),
            Action::Confirm => {
                self.composer.activate_search_hit(now);
            }
            Action::MoveDown => self.composer.search_select(true),
            Action::MoveUp => self.composer.search_select(false),
            other => {
                self.composer.search_edit(other, now);
            }
        }
    }

    fn handle_screen_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Cancel | Action::Backspace => {
                self.composer.back();
            }
            Action::MoveDown => self.composer.move_screen_focus(1),
            Action::MoveUp => self.composer.move_screen_focus(-1),
            Action::Confirm => {
                self.composer.activate_screen_focus();
            }
            Action::OpenWishlist => {
                self.composer.open_wishlist();
            }
            Action::OpenBag => {
                self.composer.open_bag();
            }
            Action::AddToBag => self.add_to_bag(now),
            Action::ToggleWishlist => self.toggle_wishlist(now),
            _ => {}
        }
    }

    fn handle_viewer_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Cancel | Action::ToggleFullscreen => {
                self.composer.close_viewer();
            }
            Action::MoveRight | Action::MoveDown => {
                self.composer.viewer_step(true);
            }
            Action::MoveLeft | Action::MoveUp => {
                self.composer.viewer_step(false);
            }
            Action::Confirm => {
                self.composer.activate_focused(now);
            }
            Action::Remix => self.remix(now),
            Action::AddToBag => self.add_to_bag(now),
            Action::ToggleWishlist => self.toggle_wishlist(now),
            Action::Search => {
                self.composer.open_search();
            }
            _ => {}
        }
    }

    fn handle_shell_action(&mut self, action: Action, now: Instant) {
        let step = i32::try_from(self.config.chrome.scroll_step).unwrap_or(i32::MAX);
        match action {
            Action::NextTab => {
                self.composer.next_primary_tab(now);
            }
            Action::PrevTab => {
                self.composer.prev_primary_tab(now);
            }
            Action::SelectCommerce => {
                self.composer.select_primary_tab(crate::state::PrimaryTab::Commerce, now);
            }
            Action::SelectCommunity => {
                self.composer.select_primary_tab(crate::state::PrimaryTab::Community, now);
            }
            Action::SelectCreate => {
                self.composer.select_primary_tab(crate::state::PrimaryTab::Create, now);
            }
            Action::MoveRight => {
                self.composer.next_sub_tab(now);
            }
            Action::MoveLeft => {
                self.composer.prev_sub_tab(now);
            }
            Action::MoveDown => self.composer.move_focus(1),
            Action::MoveUp => self.composer.move_focus(-1),
            Action::PageDown => {
                self.composer.page(true);
            }
            Action::PageUp => {
                self.composer.page(false);
            }
            Action::Home => {
                self.composer.scroll_to(0);
            }
            Action::End => {
                self.composer.scroll_to(u32::MAX);
            }
            Action::ScrollDown => {
                self.composer.scroll_by(step);
            }
            Action::ScrollUp => {
                self.composer.scroll_by(-step);
            }
            Action::Confirm => {
                self.composer.activate_focused(now);
            }
            Action::Search => {
                if !self.composer.open_search() {
                    debug!("search unavailable on this tab");
                }
            }
            Action::OpenWishlist => {
                self.composer.open_wishlist();
            }
            Action::OpenBag => {
                self.composer.open_bag();
            }
            Action::AddToBag => self.add_to_bag(now),
            Action::ToggleWishlist => self.toggle_wishlist(now),
            Action::ToggleFullscreen => {
                self.composer.open_viewer();
            }
            Action::Remix => self.remix(now),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.show_help {
            return;
        }
        let wheel = i32::try_from(self.config.chrome.wheel_step).unwrap_or(i32::MAX);
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.composer.scroll_by(wheel);
            }
            MouseEventKind::ScrollUp => {
                self.composer.scroll_by(-wheel);
            }
            _ => {}
        }
    }

    fn add_to_bag(&mut self, now: Instant) {
        if let Some(product) = self.composer.add_to_bag() {
            self.toasts.success(format!("Added {} to bag", product.name), now);
        }
    }

    fn toggle_wishlist(&mut self, now: Instant) {
        match self.composer.toggle_wishlist() {
            Some((_, true)) => self.toasts.info("Added to wishlist", now),
            Some((_, false)) => self.toasts.info("Removed from wishlist", now),
            None => {}
        }
    }

    fn remix(&mut self, now: Instant) {
        if self.composer.remix(now) {
            self.toasts.success("Remixing in Create", now);
        }
    }

    fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }

    /// Draw the composed view for this frame.
    pub fn render(&mut self, frame: &mut Frame, now: Instant) {
        let area = frame.area();

        // Extent is sized with all chrome collapsed
        let viewport = ShellAreas::split(area, None).content.height;
        self.composer.set_viewport(u32::from(viewport));

        let keymap = &self.config.keymap;
        match self.composer.compose() {
            View::Splash(splash) => SplashScreen::render(frame, area, splash),
            View::SignUp(signup) => SignUpScreen::render(frame, area, signup, keymap),
            View::Otp { state, contact } => OtpScreen::render(frame, area, state, contact, keymap, now),
            View::Screen(screen) => ScreenPage::render(frame, area, &screen, keymap),
            View::Shell(shell) => ShellScreen::render(frame, area, &shell, keymap),
        }

        self.toasts.render(frame, area);
        if self.show_help {
            HelpOverlay::render(frame, area, keymap, &self.config_path);
        }
    }
}

/// Terminal application.
pub struct App {
    tui: Tui,
    state: AppState,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf, skip_auth: bool) -> Result<Self> {
        let state = AppState::new(
            config,
            config_path.display().to_string(),
            skip_auth,
            Instant::now(),
        )?;
        Ok(Self {
            tui: Tui::new()?,
            state,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        info!("terminal ready");

        let result = self.event_loop();
        self.tui.exit()?;
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            let state = &mut self.state;
            self.tui.draw(|frame| state.render(frame, Instant::now()))?;

            if self.state.should_quit() {
                return Ok(());
            }

            if let Some(event) = self.tui.poll_event(TICK_RATE)? {
                self.state.handle_event(event, Instant::now());
            }
            self.state.tick(Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::router::ScreenId;
    use crate::state::PrimaryTab;
    use crossterm::event::{KeyEventState, MouseEvent};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app(skip_auth: bool, now: Instant) -> AppState {
        AppState::new(Config::default(), "config.toml".into(), skip_auth, now).unwrap()
    }

    fn type_str(app: &mut AppState, text: &str, now: Instant) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)), now);
        }
    }

    #[test]
    fn test_any_key_dismisses_splash() {
        let now = Instant::now();
        let mut app = app(false, now);
        app.handle_key(key(KeyCode::Char('x')), now);
        assert_eq!(app.composer().auth().step(), AuthStep::SignUp);
    }

    #[test]
    fn test_sign_up_typing_does_not_trigger_shortcuts() {
        let now = Instant::now();
        let mut app = app(false, now);
        app.handle_key(key(KeyCode::Enter), now);
        type_str(&mut app, "quit@example.com", now);
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Enter), now);
        assert_eq!(app.composer().auth().step(), AuthStep::Otp);
    }

    #[test]
    fn test_ctrl_s_skips_sign_up() {
        let now = Instant::now();
        let mut app = app(false, now);
        app.handle_key(key(KeyCode::Enter), now);
        app.handle_key(ctrl('s'), now);
        assert!(app.composer().auth().is_authenticated());
        assert!(app.toasts().current().is_some());
    }

    #[test]
    fn test_release_events_are_ignored() {
        let now = Instant::now();
        let mut app = app(false, now);
        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        release.state = KeyEventState::NONE;
        app.handle_key(release, now);
        assert_eq!(app.composer().auth().step(), AuthStep::Splash);
    }

    #[test]
    fn test_search_captures_letters() {
        let now = Instant::now();
        let mut app = app(true, now);
        app.handle_key(key(KeyCode::Char('/')), now);
        assert!(app.composer().is_search_active());

        type_str(&mut app, "qb", now);
        assert!(!app.should_quit());
        assert_eq!(app.composer().search().query(), "qb");
        assert_eq!(app.composer().router().current(), ScreenId::Main);

        app.handle_key(key(KeyCode::Esc), now);
        assert!(!app.composer().is_search_active());
    }

    #[test]
    fn test_ctrl_k_opens_search() {
        let now = Instant::now();
        let mut app = app(true, now);
        app.handle_key(ctrl('k'), now);
        assert!(app.composer().is_search_active());
    }

    #[test]
    fn test_help_overlay_swallows_next_key() {
        let now = Instant::now();
        let mut app = app(true, now);
        app.handle_key(key(KeyCode::Char('?')), now);
        assert!(app.is_help_visible());
        app.handle_key(key(KeyCode::Char('q')), now);
        assert!(!app.is_help_visible());
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Char('q')), now);
        assert!(app.should_quit());
    }

    #[test]
    fn test_section_keys_switch_tabs() {
        let now = Instant::now();
        let mut app = app(true, now);
        app.handle_key(key(KeyCode::Char('2')), now);
        assert_eq!(app.composer().tabs().primary(), PrimaryTab::Community);
        app.handle_key(key(KeyCode::Tab), now);
        assert_eq!(app.composer().tabs().primary(), PrimaryTab::Create);
    }

    #[test]
    fn test_bag_screen_and_back() {
        let now = Instant::now();
        let mut app = app(true, now);
        app.handle_key(key(KeyCode::Char('b')), now);
        assert_eq!(app.composer().router().current(), ScreenId::Bag);
        app.handle_key(key(KeyCode::Esc), now);
        assert_eq!(app.composer().router().current(), ScreenId::Main);
    }

    #[test]
    fn test_wheel_scrolls_shell() {
        let now = Instant::now();
        let mut app = app(true, now);
        app.tick(now + Duration::from_secs(2));
        app.composer.set_viewport(10);
        app.composer.compose();

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.composer().region().offset(), 3);
    }

    fn draw(terminal: &mut Terminal<TestBackend>, app: &mut AppState, now: Instant) {
        terminal.draw(|frame| app.render(frame, now)).unwrap();
    }

    #[test]
    fn test_scrolling_down_at_the_bottom_brings_chrome_back() {
        let now = Instant::now();
        let mut app = app(true, now);
        app.tick(now + Duration::from_secs(2));
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        draw(&mut terminal, &mut app, now);

        app.composer.scroll_to(u32::MAX);
        draw(&mut terminal, &mut app, now);
        let bottom = app.composer().region().offset();
        assert!(app.composer().chrome().visibility().is_visible());

        app.composer.scroll_by(-6);
        assert!(!app.composer().chrome().visibility().is_visible());
        // The frame with hidden chrome must not move the scroll bounds
        draw(&mut terminal, &mut app, now);
        assert_eq!(app.composer().region().max_offset(), bottom);
        assert_eq!(app.composer().region().offset(), bottom - 6);

        app.composer.scroll_by(6);
        draw(&mut terminal, &mut app, now);
        assert_eq!(app.composer().region().offset(), bottom);
        assert!(app.composer().chrome().visibility().is_visible());
    }
}

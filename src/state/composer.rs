//! Root controller: combines auth, routing, tabs, chrome and search into
//! exactly one renderable view.
//!
//! All input reaches the controllers through the intent methods here so the
//! cross-cutting rules live in one place:
//!
//! - nothing behind the auth gate is reachable until Authenticated
//! - an open screen replaces the shell and detaches its scroll region
//! - chrome-originated intents are ignored while fullscreen
//! - a primary tab reset wins over scroll input until the next render

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::catalog::content::{FeedPost, FEED};
use crate::catalog::search::{CatalogSearch, SearchTarget};
use crate::catalog::{Catalog, Product};
use crate::config::Config;
use crate::keymap::Action;
use crate::state::auth::{AuthFlow, AuthState, AuthStep, AuthTimings, OtpState, SignUpState, SplashState};
use crate::state::chrome::{ChromeThresholds, ChromeVisibility, ScrollChromeController, ScrollRegion};
use crate::state::router::{ScreenId, ScreenRouter, ScreenState};
use crate::state::search::SearchOverlay;
use crate::state::shell::{item_offsets, LoadTimings, ShellItem, ShellState};
use crate::state::tabs::{PrimaryTab, SubTab, TabSelector};

/// Everything the composer needs from configuration.
#[derive(Debug, Clone)]
pub struct ComposerSettings {
    pub auth: AuthTimings,
    pub loads: LoadTimings,
    pub chrome: ChromeThresholds,
    pub search_debounce: Duration,
    /// Rows the collapsible chrome takes from the content while shown.
    pub chrome_rows: u32,
    /// Start past the auth gate.
    pub skip_auth: bool,
}

impl Default for ComposerSettings {
    fn default() -> Self {
        Self {
            auth: AuthTimings::default(),
            loads: LoadTimings::default(),
            chrome: ChromeThresholds::default(),
            search_debounce: Duration::from_millis(600),
            chrome_rows: 0,
            skip_auth: false,
        }
    }
}

impl ComposerSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            auth: config.auth_timings(),
            loads: config.timings.load_timings(),
            chrome: config.chrome.thresholds(),
            search_debounce: config.timings.search_debounce(),
            chrome_rows: 0,
            skip_auth: false,
        }
    }

    pub fn skip_auth(mut self, skip: bool) -> Self {
        self.skip_auth = skip;
        self
    }

    pub fn chrome_rows(mut self, rows: u32) -> Self {
        self.chrome_rows = rows;
        self
    }
}

/// The one tree to render this frame.
#[derive(Debug)]
pub enum View<'a> {
    Splash(&'a SplashState),
    SignUp(&'a SignUpState),
    Otp {
        state: &'a OtpState,
        contact: &'a str,
    },
    Screen(ScreenView<'a>),
    Shell(ShellView<'a>),
}

/// A full-screen view replacing the shell.
#[derive(Debug)]
pub struct ScreenView<'a> {
    pub screen: &'a ScreenState,
    /// Selectable products listed on the screen.
    pub products: Vec<Product>,
    pub focus: usize,
    pub bag_count: u32,
    pub wishlist: &'a [String],
}

/// The main tabbed shell.
#[derive(Debug)]
pub struct ShellView<'a> {
    pub tab: PrimaryTab,
    pub sub_tab: SubTab,
    /// `None` while fullscreen: no header or toolbar at all.
    pub chrome: Option<ChromeVisibility>,
    pub loading: bool,
    pub generating: bool,
    pub scroll_offset: u32,
    pub items: Vec<ShellItem>,
    pub focus: usize,
    pub bag_count: u32,
    pub wishlist: &'a [String],
    /// Post shown in the immersive viewer.
    pub viewer: Option<&'static FeedPost>,
    /// Present only when search is open and the tab allows it.
    pub search: Option<&'a SearchOverlay>,
}

pub struct ViewComposer {
    auth: AuthFlow,
    router: ScreenRouter,
    tabs: TabSelector,
    chrome: ScrollChromeController,
    region: ScrollRegion,
    search: SearchOverlay,
    shell: ShellState,
    catalog: Box<dyn Catalog>,
    viewer: Option<usize>,
    screen_focus: usize,
    reset_pending: bool,
    viewport: u32,
    chrome_rows: u32,
}

impl ViewComposer {
    pub fn new(settings: ComposerSettings, catalog: Box<dyn Catalog>, now: Instant) -> Self {
        let auth = if settings.skip_auth {
            AuthFlow::authenticated(settings.auth)
        } else {
            AuthFlow::new(settings.auth, now)
        };

        let mut composer = Self {
            auth,
            router: ScreenRouter::new(),
            tabs: TabSelector::new(),
            chrome: ScrollChromeController::new(settings.chrome),
            region: ScrollRegion::new(),
            search: SearchOverlay::new(settings.search_debounce),
            shell: ShellState::new(settings.loads),
            catalog,
            viewer: None,
            screen_focus: 0,
            reset_pending: false,
            viewport: 0,
            chrome_rows: settings.chrome_rows,
        };
        if composer.auth.is_authenticated() {
            composer.on_authenticated(now);
        }
        composer
    }

    // ---- accessors ----

    pub fn auth(&self) -> &AuthFlow {
        &self.auth
    }

    pub fn router(&self) -> &ScreenRouter {
        &self.router
    }

    pub fn tabs(&self) -> &TabSelector {
        &self.tabs
    }

    pub fn chrome(&self) -> &ScrollChromeController {
        &self.chrome
    }

    pub fn region(&self) -> &ScrollRegion {
        &self.region
    }

    pub fn search(&self) -> &SearchOverlay {
        &self.search
    }

    pub fn shell(&self) -> &ShellState {
        &self.shell
    }

    pub fn catalog(&self) -> &dyn Catalog {
        self.catalog.as_ref()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.chrome.is_fullscreen()
    }

    fn in_shell(&self) -> bool {
        self.auth.is_authenticated() && self.router.is_main()
    }

    // ---- composition ----

    /// Decide the view for this render pass.
    ///
    /// Also ends the pass that started with a tab change, letting scroll
    /// input through again.
    pub fn compose(&mut self) -> View<'_> {
        self.reset_pending = false;
        let this = &*self;

        match this.auth.state() {
            AuthState::Splash(splash) => return View::Splash(splash),
            AuthState::SignUp(signup) => return View::SignUp(signup),
            AuthState::Otp(otp) => {
                return View::Otp {
                    state: otp,
                    contact: this.auth.pending_contact().unwrap_or_default(),
                }
            }
            AuthState::Authenticated => {}
        }

        if !this.router.is_main() {
            return View::Screen(ScreenView {
                screen: this.router.screen(),
                products: this.screen_products(),
                focus: this.screen_focus,
                bag_count: this.shell.bag_count(),
                wishlist: this.shell.wishlist(),
            });
        }

        let tab = this.tabs.primary();
        View::Shell(ShellView {
            tab,
            sub_tab: this.tabs.sub_tab(),
            chrome: (!this.chrome.is_fullscreen()).then(|| this.chrome.visibility()),
            loading: this.shell.is_loading(tab),
            generating: this.shell.is_generating(),
            scroll_offset: this.region.offset(),
            items: this.shell_items(),
            focus: this.shell.focus(),
            bag_count: this.shell.bag_count(),
            wishlist: this.shell.wishlist(),
            viewer: this.viewer.and_then(|i| FEED.get(i)),
            search: this.search.is_visible(tab).then_some(&this.search),
        })
    }

    fn shell_items(&self) -> Vec<ShellItem> {
        self.shell.items(&self.tabs, self.catalog.as_ref())
    }

    /// Products listed on the open screen, in display order.
    pub fn screen_products(&self) -> Vec<Product> {
        match self.router.screen() {
            ScreenState::Main => Vec::new(),
            ScreenState::Wishlist => self.resolve(self.shell.wishlist()),
            ScreenState::Bag => self.resolve(self.shell.bag()),
            ScreenState::ProductDetail { similar, .. } => similar.clone(),
            ScreenState::BundleDetail { products, .. } => products.clone(),
            ScreenState::ProductList { products, .. } => products.clone(),
        }
    }

    fn resolve(&self, ids: &[String]) -> Vec<Product> {
        ids.iter()
            .filter_map(|id| self.catalog.find_product(id))
            .collect()
    }

    // ---- timers ----

    /// Fire every due deadline. Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let step = self.auth.tick(now);
        let mut changed = step.is_some();
        self.after_auth(step, now);

        if self.auth.is_authenticated() {
            changed |= self.shell.tick(now);
            let tab = self.tabs.primary();
            let provider = CatalogSearch::new(self.catalog.as_ref());
            changed |= self.search.tick(now, tab, &provider);
        }
        changed
    }

    // ---- auth ----

    fn after_auth(&mut self, step: Option<AuthStep>, now: Instant) -> Option<AuthStep> {
        if step == Some(AuthStep::Authenticated) {
            self.on_authenticated(now);
        }
        step
    }

    fn on_authenticated(&mut self, now: Instant) {
        if self.shell.start_initial_load(now) {
            info!("authenticated, loading content");
        }
        self.region.attach();
    }

    pub fn complete_splash(&mut self) -> Option<AuthStep> {
        self.auth.complete_splash()
    }

    pub fn submit_contact(&mut self, now: Instant) -> Option<AuthStep> {
        self.auth.submit_contact(now)
    }

    pub fn skip_sign_up(&mut self, now: Instant) -> Option<AuthStep> {
        let step = self.auth.skip();
        self.after_auth(step, now)
    }

    pub fn auth_back(&mut self, now: Instant) -> Option<AuthStep> {
        self.auth.back(now)
    }

    pub fn auth_input_char(&mut self, c: char, now: Instant) -> bool {
        self.auth.input_char(c, now)
    }

    pub fn auth_edit(&mut self, action: Action, now: Instant) -> bool {
        self.auth.edit(action, now)
    }

    pub fn verify_otp(&mut self, now: Instant) {
        self.auth.verify(now);
    }

    pub fn resend_otp(&mut self, now: Instant) -> bool {
        self.auth.resend(now)
    }

    pub fn toggle_newsletter(&mut self) -> bool {
        self.auth.toggle_newsletter()
    }

    pub fn toggle_notify(&mut self) -> bool {
        self.auth.toggle_notify()
    }

    // ---- screens ----

    fn after_route(&mut self, screen: ScreenId) -> ScreenId {
        self.screen_focus = 0;
        if screen == ScreenId::Main {
            self.region.attach();
        } else {
            if self.viewer.take().is_some() {
                self.chrome.set_fullscreen(false);
            }
            self.region.detach();
        }
        screen
    }

    /// Wishlist button in the header. Ignored while fullscreen.
    pub fn open_wishlist(&mut self) -> Option<ScreenId> {
        if !self.auth.is_authenticated() || self.chrome.is_fullscreen() {
            return None;
        }
        let screen = self.router.open_wishlist();
        Some(self.after_route(screen))
    }

    /// Bag button in the header. Ignored while fullscreen.
    pub fn open_bag(&mut self) -> Option<ScreenId> {
        if !self.auth.is_authenticated() || self.chrome.is_fullscreen() {
            return None;
        }
        let screen = self.router.open_bag();
        Some(self.after_route(screen))
    }

    pub fn open_product_detail(&mut self, id: &str) -> Option<ScreenId> {
        if !self.auth.is_authenticated() {
            return None;
        }
        let screen = self.router.open_product_detail(id, self.catalog.as_ref());
        Some(self.after_route(screen))
    }

    pub fn open_bundle_detail(&mut self, id: &str) -> Option<ScreenId> {
        if !self.auth.is_authenticated() {
            return None;
        }
        let screen = self.router.open_bundle_detail(id, self.catalog.as_ref());
        Some(self.after_route(screen))
    }

    pub fn open_product_list(&mut self, category: Option<&str>, title: Option<&str>) -> Option<ScreenId> {
        if !self.auth.is_authenticated() {
            return None;
        }
        let screen = self
            .router
            .open_product_list(category, title, self.catalog.as_ref());
        Some(self.after_route(screen))
    }

    /// Close the open screen.
    pub fn back(&mut self) -> ScreenId {
        let screen = self.router.back();
        if self.auth.is_authenticated() {
            self.after_route(screen);
        }
        screen
    }

    pub fn move_screen_focus(&mut self, delta: isize) {
        let count = self.screen_products().len();
        if count == 0 {
            return;
        }
        let max = count - 1;
        self.screen_focus = self.screen_focus.saturating_add_signed(delta).min(max);
    }

    /// Open the focused product of the current screen.
    pub fn activate_screen_focus(&mut self) -> Option<ScreenId> {
        let product = self.screen_products().into_iter().nth(self.screen_focus)?;
        self.open_product_detail(&product.id)
    }

    // ---- tabs ----

    /// Switch section. Always resets chrome and scroll, even when the tab
    /// is already active. Ignored while fullscreen.
    pub fn select_primary_tab(&mut self, tab: PrimaryTab, now: Instant) -> bool {
        if !self.in_shell() || self.chrome.is_fullscreen() {
            return false;
        }
        let changed = self.tabs.select_primary_tab(tab);
        self.chrome.reset_for_tab_change();
        self.region.reset();
        self.reset_pending = true;
        self.shell.on_primary_tab(tab, now);
        debug!(?tab, changed, "primary tab selected");
        true
    }

    pub fn next_primary_tab(&mut self, now: Instant) -> bool {
        let tab = self.tabs.next_primary();
        self.select_primary_tab(tab, now)
    }

    pub fn prev_primary_tab(&mut self, now: Instant) -> bool {
        let tab = self.tabs.prev_primary();
        self.select_primary_tab(tab, now)
    }

    /// Switch sub-tab of the active section. Chrome is left alone.
    pub fn select_sub_tab(&mut self, sub: SubTab, now: Instant) -> bool {
        if !self.in_shell() || self.chrome.is_fullscreen() {
            return false;
        }
        if !self.tabs.select_sub_tab(sub) {
            return false;
        }
        self.shell.on_sub_tab(sub, now);
        true
    }

    pub fn next_sub_tab(&mut self, now: Instant) -> bool {
        let sub = self.tabs.next_sub_tab();
        self.select_sub_tab(sub, now)
    }

    pub fn prev_sub_tab(&mut self, now: Instant) -> bool {
        let sub = self.tabs.prev_sub_tab();
        self.select_sub_tab(sub, now)
    }

    // ---- scrolling ----

    /// Set the content height with all chrome collapsed and recompute the
    /// scrollable extent.
    ///
    /// The extent never depends on whether chrome is shown, so collapsing it
    /// cannot pull the bottom of the content closer. A shrink that moves the
    /// offset is reported to the chrome like any other scroll.
    pub fn set_viewport(&mut self, rows: u32) {
        self.viewport = rows;
        let (_, total) = item_offsets(&self.shell_items());
        if let Some(top) = self.region.set_max_offset(total.saturating_sub(rows)) {
            self.chrome.handle_scroll(top);
        }
    }

    /// Content rows actually on screen right now.
    pub fn visible_rows(&self) -> u32 {
        if self.chrome.is_fullscreen() || !self.chrome.visibility().is_visible() {
            self.viewport
        } else {
            self.viewport.saturating_sub(self.chrome_rows)
        }
    }

    fn accepts_scroll(&self) -> bool {
        self.in_shell() && !self.reset_pending && !self.chrome.is_fullscreen()
    }

    /// Scroll the content by `delta` rows and feed the result to the chrome.
    pub fn scroll_by(&mut self, delta: i32) -> Option<ChromeVisibility> {
        if !self.accepts_scroll() {
            return None;
        }
        let top = self.region.scroll_by(delta)?;
        Some(self.chrome.handle_scroll(top))
    }

    /// Scroll the content to `top` and feed the result to the chrome.
    pub fn scroll_to(&mut self, top: u32) -> Option<ChromeVisibility> {
        if !self.accepts_scroll() {
            return None;
        }
        let top = self.region.scroll_to(top)?;
        Some(self.chrome.handle_scroll(top))
    }

    /// Scroll by a viewport height.
    pub fn page(&mut self, down: bool) -> Option<ChromeVisibility> {
        let rows = i32::try_from(self.visible_rows().max(1)).unwrap_or(i32::MAX);
        self.scroll_by(if down { rows } else { -rows })
    }

    // ---- fullscreen ----

    /// Raise or lower the fullscreen flag directly.
    pub fn set_fullscreen(&mut self, fullscreen: bool) -> ChromeVisibility {
        if !fullscreen {
            self.viewer = None;
        }
        self.chrome.set_fullscreen(fullscreen)
    }

    /// Open the focused community post in the immersive viewer.
    pub fn open_viewer(&mut self) -> bool {
        if !self.in_shell() || self.tabs.primary() != PrimaryTab::Community {
            return false;
        }
        let Some(ShellItem::Post(post)) = self.shell_items().into_iter().nth(self.shell.focus()) else {
            return false;
        };
        let Some(index) = FEED.iter().position(|p| p.id == post.id) else {
            return false;
        };
        self.viewer = Some(index);
        self.chrome.set_fullscreen(true);
        true
    }

    pub fn close_viewer(&mut self) -> bool {
        if self.viewer.is_none() {
            return false;
        }
        self.set_fullscreen(false);
        true
    }

    /// Step to the next or previous post inside the viewer.
    pub fn viewer_step(&mut self, forward: bool) -> bool {
        let Some(index) = self.viewer else {
            return false;
        };
        let next = if forward {
            (index + 1).min(FEED.len() - 1)
        } else {
            index.saturating_sub(1)
        };
        self.viewer = Some(next);
        next != index
    }

    pub fn viewer_post(&self) -> Option<&'static FeedPost> {
        self.viewer.and_then(|i| FEED.get(i))
    }

    // ---- shell content ----

    pub fn move_focus(&mut self, delta: isize) {
        let items = self.shell_items();
        let focus = self.shell.focus().saturating_add_signed(delta);
        self.shell.set_focus(focus, items.len());
        self.reveal_focus(&items);
    }

    /// Scroll just enough to bring the focused item into view.
    fn reveal_focus(&mut self, items: &[ShellItem]) {
        let focus = self.shell.focus();
        let Some(item) = items.get(focus) else {
            return;
        };
        let (offsets, _) = item_offsets(items);
        let top = offsets[focus];
        let bottom = top + u32::from(item.height());
        let offset = self.region.offset();

        if top < offset {
            self.scroll_to(top);
        } else if bottom > offset + self.visible_rows() {
            self.scroll_to(bottom.saturating_sub(self.visible_rows()));
        }
    }

    pub fn focused_item(&self) -> Option<ShellItem> {
        self.shell_items().into_iter().nth(self.shell.focus())
    }

    /// Confirm on the focused item.
    pub fn activate_focused(&mut self, now: Instant) -> bool {
        if !self.in_shell() {
            return false;
        }
        if let Some(post) = self.viewer_post() {
            return match post.products.first() {
                Some(id) => self.open_product_detail(id).is_some(),
                None => false,
            };
        }
        let Some(item) = self.focused_item().filter(ShellItem::is_actionable) else {
            return false;
        };
        match item {
            ShellItem::Bundle(bundle) => self.open_bundle_detail(&bundle.id).is_some(),
            ShellItem::Collection { category, title, .. } => {
                self.open_product_list(Some(category.as_str()), Some(title.as_str()))
                    .is_some()
            }
            ShellItem::Product(product) => self.open_product_detail(&product.id).is_some(),
            ShellItem::ViewAll => self.open_product_list(None, None).is_some(),
            ShellItem::Post(_) => self.open_viewer(),
            ShellItem::Prompt(prompt) => self.shell.send_prompt(&prompt, now),
            ShellItem::Message(_) | ShellItem::Creation(_) => false,
        }
    }

    /// Send the post's prompt to the create tab.
    pub fn remix(&mut self, now: Instant) -> bool {
        let post = match (self.viewer_post(), self.focused_item()) {
            (Some(post), _) | (None, Some(ShellItem::Post(post))) => post,
            _ => return false,
        };
        self.close_viewer();
        if !self.select_primary_tab(PrimaryTab::Create, now) {
            return false;
        }
        self.shell.send_prompt(post.prompt, now)
    }

    /// Product the add-to-bag and wishlist keys apply to, if any.
    pub fn target_product(&self) -> Option<Product> {
        match self.router.screen() {
            ScreenState::ProductDetail { product, .. } => return Some(product.clone()),
            ScreenState::Main => {}
            _ => return self.screen_products().into_iter().nth(self.screen_focus),
        }
        if let Some(post) = self.viewer_post() {
            return post.products.first().and_then(|id| self.catalog.find_product(id));
        }
        match self.focused_item()? {
            ShellItem::Product(product) => Some(product),
            _ => None,
        }
    }

    /// Add the targeted product to the bag. Returns it for notifications.
    pub fn add_to_bag(&mut self) -> Option<Product> {
        if !self.auth.is_authenticated() {
            return None;
        }
        let product = self.target_product()?;
        self.shell.add_to_bag(&product.id);
        Some(product)
    }

    /// Toggle the targeted product on the wishlist. Returns the new state.
    pub fn toggle_wishlist(&mut self) -> Option<(Product, bool)> {
        if !self.auth.is_authenticated() {
            return None;
        }
        let product = self.target_product()?;
        let added = self.shell.toggle_wishlist(&product.id);
        Some((product, added))
    }

    // ---- search ----

    /// Open search. Gated by tab, not by fullscreen.
    pub fn open_search(&mut self) -> bool {
        if !self.in_shell() {
            return false;
        }
        self.search.open(self.tabs.primary())
    }

    pub fn close_search(&mut self) {
        self.search.close();
    }

    pub fn is_search_active(&self) -> bool {
        self.in_shell() && self.search.is_visible(self.tabs.primary())
    }

    pub fn set_search_query(&mut self, query: &str, now: Instant) {
        self.search.set_query(query, now);
    }

    pub fn search_input_char(&mut self, c: char, now: Instant) -> bool {
        self.search.input_char(c, now)
    }

    pub fn search_edit(&mut self, action: Action, now: Instant) -> bool {
        self.search.edit(action, now)
    }

    pub fn search_select(&mut self, down: bool) {
        if down {
            self.search.select_next();
        } else {
            self.search.select_prev();
        }
    }

    /// Navigate to the selected search result and close search.
    pub fn activate_search_hit(&mut self, now: Instant) -> bool {
        let Some(hit) = self.search.selected_hit().cloned() else {
            return false;
        };
        let query = self.search.query().trim().to_string();
        self.search.close();

        match hit.target {
            SearchTarget::Product(id) => self.open_product_detail(&id).is_some(),
            SearchTarget::Bundle(id) => self.open_bundle_detail(&id).is_some(),
            SearchTarget::ProductList { category, title } => {
                self.open_product_list(Some(category.as_str()), Some(title.as_str()))
                    .is_some()
            }
            SearchTarget::Community => self.select_primary_tab(PrimaryTab::Community, now),
            SearchTarget::Create => {
                self.select_primary_tab(PrimaryTab::Create, now)
                    && self.shell.send_prompt(&query, now)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::state::tabs::{CommerceCategory, CommunityTab};

    fn shell(now: Instant) -> ViewComposer {
        let catalog = Box::new(default_catalog().unwrap());
        let mut composer =
            ViewComposer::new(ComposerSettings::default().skip_auth(true), catalog, now);
        composer.set_viewport(20);
        composer.compose();
        composer
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_auth_gate_comes_first() {
        let now = Instant::now();
        let catalog = Box::new(default_catalog().unwrap());
        let mut composer = ViewComposer::new(ComposerSettings::default(), catalog, now);

        assert!(matches!(composer.compose(), View::Splash(_)));
        assert_eq!(composer.open_bag(), None);
        assert!(!composer.open_search());
        assert_eq!(composer.scroll_by(10), None);
    }

    #[test]
    fn test_initial_load_starts_once_on_authentication() {
        let t0 = Instant::now();
        let catalog = Box::new(default_catalog().unwrap());
        let mut composer = ViewComposer::new(ComposerSettings::default(), catalog, t0);
        composer.complete_splash();
        composer.skip_sign_up(t0);

        let View::Shell(view) = composer.compose() else {
            panic!("expected shell");
        };
        assert!(view.loading);

        composer.tick(t0 + ms(1500));
        let View::Shell(view) = composer.compose() else {
            panic!("expected shell");
        };
        assert!(!view.loading);
    }

    #[test]
    fn test_screen_replaces_shell_and_detaches_region() {
        let now = Instant::now();
        let mut composer = shell(now);
        assert!(composer.region().is_attached());

        composer.open_bag();
        assert!(matches!(composer.compose(), View::Screen(_)));
        assert!(!composer.region().is_attached());
        assert_eq!(composer.scroll_by(10), None);

        composer.back();
        assert!(composer.region().is_attached());
        assert!(matches!(composer.compose(), View::Shell(_)));
    }

    #[test]
    fn test_tab_reset_wins_until_next_render() {
        let now = Instant::now();
        let mut composer = shell(now);
        composer.scroll_to(100);
        composer.scroll_to(80);
        assert_eq!(composer.chrome().visibility(), ChromeVisibility::HIDDEN);

        composer.select_primary_tab(PrimaryTab::Commerce, now);
        assert_eq!(composer.scroll_to(100), None);
        assert_eq!(composer.region().offset(), 0);
        assert_eq!(composer.chrome().visibility(), ChromeVisibility::VISIBLE);

        composer.compose();
        assert!(composer.scroll_to(100).is_some());
    }

    #[test]
    fn test_fullscreen_hides_chrome_and_blocks_chrome_intents() {
        let now = Instant::now();
        let mut composer = shell(now);
        composer.select_primary_tab(PrimaryTab::Community, now);
        composer.compose();
        assert!(composer.open_viewer());

        let View::Shell(view) = composer.compose() else {
            panic!("expected shell");
        };
        assert_eq!(view.chrome, None);
        assert!(view.viewer.is_some());

        assert_eq!(composer.open_bag(), None);
        assert!(!composer.select_primary_tab(PrimaryTab::Commerce, now));
        assert!(composer.open_search());

        composer.close_viewer();
        assert_eq!(composer.chrome().visibility(), ChromeVisibility::VISIBLE);
        assert!(!composer.is_fullscreen());
    }

    #[test]
    fn test_product_from_viewer_closes_it() {
        let now = Instant::now();
        let mut composer = shell(now);
        composer.select_primary_tab(PrimaryTab::Community, now);
        composer.open_viewer();

        assert!(composer.activate_focused(now));
        assert_eq!(composer.router().current(), ScreenId::ProductDetail);
        assert!(!composer.is_fullscreen());
    }

    #[test]
    fn test_search_hidden_on_create() {
        let now = Instant::now();
        let mut composer = shell(now);
        composer.select_primary_tab(PrimaryTab::Create, now);
        assert!(!composer.open_search());

        let View::Shell(view) = composer.compose() else {
            panic!("expected shell");
        };
        assert!(view.search.is_none());
    }

    #[test]
    fn test_search_hit_opens_product() {
        let t0 = Instant::now();
        let mut composer = shell(t0);
        composer.open_search();
        composer.set_search_query("silk", t0);
        composer.tick(t0 + ms(600));

        assert!(composer.activate_search_hit(t0 + ms(700)));
        assert_eq!(composer.router().current(), ScreenId::ProductDetail);
        assert!(!composer.search().is_open());
        assert_eq!(composer.search().query(), "");
    }

    #[test]
    fn test_sub_tab_keeps_chrome() {
        let now = Instant::now();
        let mut composer = shell(now);
        composer.scroll_to(100);
        composer.scroll_to(80);

        assert!(composer.select_sub_tab(SubTab::Commerce(CommerceCategory::Women), now));
        assert_eq!(composer.chrome().visibility(), ChromeVisibility::HIDDEN);
        assert!(!composer.select_sub_tab(SubTab::Community(CommunityTab::Profile), now));
    }

    #[test]
    fn test_add_to_bag_from_detail() {
        let now = Instant::now();
        let mut composer = shell(now);
        composer.open_product_detail("ring-3");

        let added = composer.add_to_bag().map(|p| p.id);
        assert_eq!(added.as_deref(), Some("ring-3"));
        assert_eq!(composer.shell().bag_count(), 4);
    }

    #[test]
    fn test_remix_switches_to_create() {
        let now = Instant::now();
        let mut composer = shell(now);
        composer.select_primary_tab(PrimaryTab::Community, now);
        composer.compose();

        assert!(composer.remix(now));
        assert_eq!(composer.tabs().primary(), PrimaryTab::Create);
        assert_eq!(composer.shell().history().len(), 1);
    }

    #[test]
    fn test_shrinking_extent_is_reported_to_chrome() {
        let now = Instant::now();
        let mut composer = shell(now);
        composer.scroll_to(u32::MAX);
        let bottom = composer.region().offset();
        assert!(bottom > 100);

        // A taller viewport pulls the bottom of the content up
        composer.set_viewport(40);
        assert_eq!(composer.region().offset(), bottom - 20);
        assert_eq!(composer.chrome().last_top(), bottom - 20);
        assert_eq!(composer.chrome().visibility(), ChromeVisibility::HIDDEN);

        composer.scroll_to(u32::MAX);
        assert_eq!(composer.chrome().visibility(), ChromeVisibility::HIDDEN);
        composer.scroll_by(-6);
        assert_eq!(composer.scroll_by(6), Some(ChromeVisibility::VISIBLE));
    }

    #[test]
    fn test_visible_rows_follow_chrome() {
        let now = Instant::now();
        let catalog = Box::new(default_catalog().unwrap());
        let settings = ComposerSettings::default().skip_auth(true).chrome_rows(5);
        let mut composer = ViewComposer::new(settings, catalog, now);
        composer.set_viewport(25);
        composer.compose();
        assert_eq!(composer.visible_rows(), 20);

        composer.scroll_to(120);
        composer.scroll_by(-10);
        assert_eq!(composer.chrome().visibility(), ChromeVisibility::HIDDEN);
        assert_eq!(composer.visible_rows(), 25);
    }
}

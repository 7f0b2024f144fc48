//! State local to the main shell: simulated content loading, the bag and
//! wishlist, the focused item and the create chat.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::catalog::content::{featured_collections, FeedPost, FEED, PROMPT_IDEAS};
use crate::catalog::{Bundle, Catalog, Product};
use crate::state::tabs::{CommerceCategory, CommunityTab, CreateTab, PrimaryTab, SubTab, TabSelector};
use crate::state::timer::{take_due, Deadline};

/// Products a new session starts with in the bag.
pub const INITIAL_BAG: [&str; 3] = ["p1", "earring-1", "ring-2"];

/// Delay before the assistant answers a prompt.
pub const GENERATION_DELAY: Duration = Duration::from_millis(2000);

const ASSISTANT_REPLY: &str = "I understand you're looking for elegant jewelry. Let me create some \
    design options for you. Based on your preferences, I'd recommend considering rose gold with \
    heart motifs, which are both romantic and timeless.";

/// Simulated loading delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTimings {
    pub initial: Duration,
    pub category: Duration,
    pub community: Duration,
    pub create: Duration,
}

impl Default for LoadTimings {
    fn default() -> Self {
        Self {
            initial: Duration::from_millis(1500),
            category: Duration::from_millis(800),
            community: Duration::from_millis(800),
            create: Duration::from_millis(1200),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// One row group of the shell's scrollable content.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellItem {
    Bundle(Bundle),
    Collection {
        category: String,
        title: String,
        subtitle: String,
    },
    Product(Product),
    ViewAll,
    Post(&'static FeedPost),
    Message(ChatMessage),
    Prompt(String),
    Creation(String),
}

impl ShellItem {
    /// Rows the item occupies when drawn.
    pub fn height(&self) -> u16 {
        match self {
            ShellItem::Bundle(_) => 4,
            ShellItem::Collection { .. } | ShellItem::Product(_) | ShellItem::Creation(_) => 3,
            ShellItem::Message(_) => 4,
            ShellItem::Post(_) => 7,
            ShellItem::ViewAll | ShellItem::Prompt(_) => 2,
        }
    }

    /// Whether confirming the item does anything.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, ShellItem::Message(_) | ShellItem::Creation(_))
    }
}

/// Row offset of each item's top edge, plus the total height.
pub fn item_offsets(items: &[ShellItem]) -> (Vec<u32>, u32) {
    let mut offsets = Vec::with_capacity(items.len());
    let mut top = 0u32;
    for item in items {
        offsets.push(top);
        top += u32::from(item.height());
    }
    (offsets, top)
}

#[derive(Debug, Clone)]
pub struct ShellState {
    timings: LoadTimings,
    initial_started: bool,
    initial_load: Option<Deadline>,
    category_load: Option<Deadline>,
    /// Community or create section load; only one of them can be on screen.
    section_load: Option<(PrimaryTab, Deadline)>,
    generating: Option<Deadline>,
    bag: Vec<String>,
    wishlist: Vec<String>,
    focus: usize,
    messages: Vec<ChatMessage>,
    history: Vec<String>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(LoadTimings::default())
    }
}

impl ShellState {
    pub fn new(timings: LoadTimings) -> Self {
        Self {
            timings,
            initial_started: false,
            initial_load: None,
            category_load: None,
            section_load: None,
            generating: None,
            bag: INITIAL_BAG.iter().map(|id| (*id).to_string()).collect(),
            wishlist: Vec::new(),
            focus: 0,
            messages: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Start the first content load. Only the first call has an effect.
    pub fn start_initial_load(&mut self, now: Instant) -> bool {
        if self.initial_started {
            return false;
        }
        self.initial_started = true;
        self.initial_load = Some(Deadline::after(now, self.timings.initial));
        true
    }

    /// React to the active primary tab being (re)selected.
    pub fn on_primary_tab(&mut self, tab: PrimaryTab, now: Instant) {
        self.focus = 0;
        match tab {
            PrimaryTab::Commerce => self.section_load = None,
            PrimaryTab::Community => {
                self.section_load = Some((tab, Deadline::after(now, self.timings.community)));
            }
            PrimaryTab::Create => {
                self.section_load = Some((tab, Deadline::after(now, self.timings.create)));
            }
        }
    }

    /// React to a sub-tab change within the active primary tab.
    pub fn on_sub_tab(&mut self, sub: SubTab, now: Instant) {
        self.focus = 0;
        match sub {
            SubTab::Commerce(CommerceCategory::All) => {
                self.category_load = None;
            }
            SubTab::Commerce(_) => {
                self.category_load = Some(Deadline::after(now, self.timings.category));
            }
            SubTab::Community(_) => self.on_primary_tab(PrimaryTab::Community, now),
            SubTab::Create(_) => self.on_primary_tab(PrimaryTab::Create, now),
        }
    }

    /// Whether the given section shows placeholders instead of content.
    /// The initial load covers every section.
    pub fn is_loading(&self, tab: PrimaryTab) -> bool {
        if self.initial_load.is_some() {
            return true;
        }
        match tab {
            PrimaryTab::Commerce => self.category_load.is_some(),
            PrimaryTab::Community | PrimaryTab::Create => {
                matches!(self.section_load, Some((t, _)) if t == tab)
            }
        }
    }

    pub fn is_generating(&self) -> bool {
        self.generating.is_some()
    }

    /// Fire due loads. Returns true if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = take_due(&mut self.initial_load, now).is_some();
        changed |= take_due(&mut self.category_load, now).is_some();

        if matches!(self.section_load, Some((_, d)) if d.is_due(now)) {
            self.section_load = None;
            changed = true;
        }

        if take_due(&mut self.generating, now).is_some() {
            self.messages.push(ChatMessage {
                role: ChatRole::Assistant,
                content: ASSISTANT_REPLY.to_string(),
            });
            changed = true;
        }
        changed
    }

    pub fn bag_count(&self) -> u32 {
        u32::try_from(self.bag.len()).unwrap_or(u32::MAX)
    }

    /// Product ids in the bag, oldest first. The same product may appear
    /// more than once.
    pub fn bag(&self) -> &[String] {
        &self.bag
    }

    pub fn add_to_bag(&mut self, product_id: &str) -> u32 {
        self.bag.push(product_id.to_string());
        debug!(product_id, count = self.bag.len(), "added to bag");
        self.bag_count()
    }

    pub fn wishlist(&self) -> &[String] {
        &self.wishlist
    }

    pub fn is_wishlisted(&self, id: &str) -> bool {
        self.wishlist.iter().any(|w| w == id)
    }

    /// Add or remove an id. Returns true if it is now wishlisted.
    pub fn toggle_wishlist(&mut self, id: &str) -> bool {
        if let Some(pos) = self.wishlist.iter().position(|w| w == id) {
            self.wishlist.remove(pos);
            false
        } else {
            self.wishlist.push(id.to_string());
            true
        }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn set_focus(&mut self, focus: usize, item_count: usize) {
        self.focus = focus.min(item_count.saturating_sub(1));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Send a prompt to the create chat; the reply arrives after a delay.
    pub fn send_prompt(&mut self, prompt: &str, now: Instant) -> bool {
        let prompt = prompt.trim();
        if prompt.is_empty() || self.is_generating() {
            return false;
        }
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: prompt.to_string(),
        });
        self.history.push(prompt.to_string());
        self.generating = Some(Deadline::after(now, GENERATION_DELAY));
        true
    }

    /// Content of the active section.
    pub fn items(&self, tabs: &TabSelector, catalog: &dyn Catalog) -> Vec<ShellItem> {
        match tabs.sub_tab() {
            SubTab::Commerce(CommerceCategory::All) => storefront(catalog),
            SubTab::Commerce(category) => featured_collections(category)
                .iter()
                .map(|c| ShellItem::Collection {
                    category: c.category.to_string(),
                    title: c.title.to_string(),
                    subtitle: c.subtitle.to_string(),
                })
                .chain(std::iter::once(ShellItem::ViewAll))
                .collect(),
            SubTab::Community(CommunityTab::Verse) => FEED.iter().map(ShellItem::Post).collect(),
            SubTab::Community(CommunityTab::Spotlight) => {
                let mut posts: Vec<&'static FeedPost> = FEED.iter().collect();
                posts.sort_by(|a, b| b.likes.cmp(&a.likes));
                posts.into_iter().take(3).map(ShellItem::Post).collect()
            }
            SubTab::Community(CommunityTab::Profile) => FEED
                .iter()
                .filter(|p| p.products.iter().any(|id| self.is_wishlisted(id)))
                .map(ShellItem::Post)
                .collect(),
            SubTab::Create(CreateTab::Chat) => self
                .messages
                .iter()
                .cloned()
                .map(ShellItem::Message)
                .chain(PROMPT_IDEAS.iter().map(|p| ShellItem::Prompt((*p).to_string())))
                .collect(),
            SubTab::Create(CreateTab::Creations) => self
                .history
                .iter()
                .rev()
                .cloned()
                .map(ShellItem::Creation)
                .collect(),
            SubTab::Create(CreateTab::History) => self
                .history
                .iter()
                .rev()
                .cloned()
                .map(ShellItem::Prompt)
                .collect(),
        }
    }
}

/// The "All" storefront: bundles, one collection per category, every
/// product, then a view-all link.
fn storefront(catalog: &dyn Catalog) -> Vec<ShellItem> {
    let products = catalog.all_products();

    let mut categories: Vec<&str> = Vec::new();
    for product in &products {
        if !categories.contains(&product.category.as_str()) {
            categories.push(&product.category);
        }
    }

    let mut items: Vec<ShellItem> = catalog.all_bundles().into_iter().map(ShellItem::Bundle).collect();
    items.extend(categories.iter().map(|category| {
        let count = products.iter().filter(|p| p.category == *category).count();
        ShellItem::Collection {
            category: (*category).to_string(),
            title: title_case(category),
            subtitle: format!("{} designs", count),
        }
    }));
    items.extend(products.iter().cloned().map(ShellItem::Product));
    items.push(ShellItem::ViewAll);
    items
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_initial_load_runs_once() {
        let t0 = Instant::now();
        let mut shell = ShellState::default();
        assert!(shell.start_initial_load(t0));
        assert!(!shell.start_initial_load(t0 + ms(100)));
        assert!(shell.is_loading(PrimaryTab::Commerce));

        assert!(!shell.tick(t0 + ms(1499)));
        assert!(shell.tick(t0 + ms(1500)));
        assert!(!shell.is_loading(PrimaryTab::Commerce));
    }

    #[test]
    fn test_category_change_loads() {
        let t0 = Instant::now();
        let mut shell = ShellState::default();
        shell.on_sub_tab(SubTab::Commerce(CommerceCategory::Men), t0);
        assert!(shell.is_loading(PrimaryTab::Commerce));

        // Back to All drops the pending load
        shell.on_sub_tab(SubTab::Commerce(CommerceCategory::All), t0 + ms(100));
        assert!(!shell.is_loading(PrimaryTab::Commerce));
    }

    #[test]
    fn test_leaving_section_cancels_its_load() {
        let t0 = Instant::now();
        let mut shell = ShellState::default();
        shell.on_primary_tab(PrimaryTab::Community, t0);
        assert!(shell.is_loading(PrimaryTab::Community));

        shell.on_primary_tab(PrimaryTab::Commerce, t0 + ms(100));
        assert!(!shell.is_loading(PrimaryTab::Community));
        assert!(!shell.tick(t0 + ms(900)));
    }

    #[test]
    fn test_initial_load_covers_every_section() {
        let t0 = Instant::now();
        let mut shell = ShellState::default();
        shell.start_initial_load(t0);
        shell.on_primary_tab(PrimaryTab::Community, t0 + ms(100));
        shell.tick(t0 + ms(900));

        // Section load is done but the initial load is not
        assert!(shell.is_loading(PrimaryTab::Community));
        assert!(shell.is_loading(PrimaryTab::Create));

        shell.tick(t0 + ms(1500));
        assert!(!shell.is_loading(PrimaryTab::Community));
        assert!(!shell.is_loading(PrimaryTab::Create));
    }

    #[test]
    fn test_only_navigating_items_are_actionable() {
        let message = ShellItem::Message(ChatMessage {
            role: ChatRole::User,
            content: "hi".into(),
        });
        assert!(!message.is_actionable());
        assert!(!ShellItem::Creation("A gold ring".into()).is_actionable());
        assert!(ShellItem::Prompt("A gold ring".into()).is_actionable());
        assert!(ShellItem::ViewAll.is_actionable());
    }

    #[test]
    fn test_create_load_is_longer() {
        let t0 = Instant::now();
        let mut shell = ShellState::default();
        shell.on_primary_tab(PrimaryTab::Create, t0);
        shell.tick(t0 + ms(800));
        assert!(shell.is_loading(PrimaryTab::Create));
        shell.tick(t0 + ms(1200));
        assert!(!shell.is_loading(PrimaryTab::Create));
    }

    #[test]
    fn test_bag_and_wishlist() {
        let mut shell = ShellState::default();
        assert_eq!(shell.bag_count(), 3);
        assert_eq!(shell.add_to_bag("ring-1"), 4);
        assert_eq!(shell.bag().last().map(String::as_str), Some("ring-1"));

        assert!(shell.toggle_wishlist("ring-1"));
        assert!(shell.is_wishlisted("ring-1"));
        assert!(!shell.toggle_wishlist("ring-1"));
        assert!(shell.wishlist().is_empty());
    }

    #[test]
    fn test_prompt_gets_reply() {
        let t0 = Instant::now();
        let mut shell = ShellState::default();
        assert!(shell.send_prompt("  a pearl ring ", t0));
        assert!(!shell.send_prompt("another", t0 + ms(10)));
        assert_eq!(shell.history(), ["a pearl ring".to_string()]);

        shell.tick(t0 + GENERATION_DELAY);
        let roles: Vec<ChatRole> = shell.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::User, ChatRole::Assistant]);
    }

    #[test]
    fn test_storefront_items() {
        let catalog = default_catalog().unwrap();
        let shell = ShellState::default();
        let tabs = TabSelector::new();
        let items = shell.items(&tabs, &catalog);

        assert!(matches!(items.first(), Some(ShellItem::Bundle(_))));
        assert_eq!(items.last(), Some(&ShellItem::ViewAll));
        let products = items.iter().filter(|i| matches!(i, ShellItem::Product(_))).count();
        assert_eq!(products, catalog.all_products().len());
    }

    #[test]
    fn test_item_offsets() {
        let items = vec![ShellItem::ViewAll, ShellItem::Post(&FEED[0]), ShellItem::ViewAll];
        let (offsets, total) = item_offsets(&items);
        assert_eq!(offsets, vec![0, 2, 9]);
        assert_eq!(total, 11);
    }

    #[test]
    fn test_focus_clamped() {
        let mut shell = ShellState::default();
        shell.set_focus(10, 3);
        assert_eq!(shell.focus(), 2);
        shell.set_focus(10, 0);
        assert_eq!(shell.focus(), 0);
    }
}

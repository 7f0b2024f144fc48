//! Search overlay: open/closed and the typed query.
//!
//! Results are computed by a [`SearchProvider`] once the query has been
//! still for the debounce interval.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::catalog::search::{SearchHit, SearchProvider, SearchResults};
use crate::keymap::Action;
use crate::state::tabs::PrimaryTab;
use crate::state::timer::{take_due, Deadline};
use crate::utils::text_input::TextInput;

#[derive(Debug, Clone)]
pub struct SearchOverlay {
    open: bool,
    query: TextInput,
    results: SearchResults,
    selected: usize,
    pending: Option<Deadline>,
    debounce: Duration,
}

impl Default for SearchOverlay {
    fn default() -> Self {
        Self::new(Duration::from_millis(600))
    }
}

impl SearchOverlay {
    pub fn new(debounce: Duration) -> Self {
        Self {
            open: false,
            query: TextInput::new(),
            results: SearchResults::default(),
            selected: 0,
            pending: None,
            debounce,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the overlay should be drawn over the given tab.
    pub fn is_visible(&self, tab: PrimaryTab) -> bool {
        self.open && tab.allows_search()
    }

    pub fn query(&self) -> &str {
        self.query.text()
    }

    pub fn input(&self) -> &TextInput {
        &self.query
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_hit(&self) -> Option<&SearchHit> {
        self.results.hit(self.selected)
    }

    /// True while an edit is waiting for results.
    pub fn is_searching(&self) -> bool {
        self.pending.is_some()
    }

    /// Open the overlay. Only Commerce and Community have anything to search.
    ///
    /// Opening an already open overlay keeps its query.
    pub fn open(&mut self, tab: PrimaryTab) -> bool {
        if !tab.allows_search() {
            debug!(?tab, "search not available on this tab");
            return false;
        }
        self.open = true;
        true
    }

    /// Close and forget the query.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.results = SearchResults::default();
        self.selected = 0;
        self.pending = None;
    }

    /// Replace the query.
    pub fn set_query(&mut self, query: &str, now: Instant) {
        if query == self.query.text() {
            return;
        }
        self.query.set_text(query);
        self.query_changed(now);
    }

    pub fn input_char(&mut self, c: char, now: Instant) -> bool {
        if !self.open {
            return false;
        }
        let changed = self.query.insert_char(c);
        if changed {
            self.query_changed(now);
        }
        changed
    }

    /// Cursor movement and deletion inside the query field.
    pub fn edit(&mut self, action: Action, now: Instant) -> bool {
        if !self.open {
            return false;
        }
        let before = self.query.text().to_string();
        let handled = self.query.handle_action(action);
        if self.query.text() != before {
            self.query_changed(now);
        }
        handled
    }

    fn query_changed(&mut self, now: Instant) {
        self.selected = 0;
        if self.query.is_empty() {
            self.results = SearchResults::default();
            self.pending = None;
        } else {
            self.pending = Some(Deadline::after(now, self.debounce));
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.results.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Fetch results if the debounce elapsed. Returns true if they changed.
    pub fn tick(&mut self, now: Instant, tab: PrimaryTab, provider: &dyn SearchProvider) -> bool {
        if take_due(&mut self.pending, now).is_none() {
            return false;
        }
        self.results = provider.search(self.query.text().trim(), tab);
        self.selected = 0;
        debug!(query = self.query.text(), hits = self.results.len(), "search results");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::search::{HitKind, ResultCategory, SearchSection, SearchTarget};

    struct Echo;

    impl SearchProvider for Echo {
        fn search(&self, query: &str, _tab: PrimaryTab) -> SearchResults {
            let hit = |title: &str| SearchHit {
                kind: HitKind::Product,
                title: title.to_string(),
                subtitle: None,
                target: SearchTarget::Product(title.to_string()),
            };
            SearchResults {
                sections: vec![SearchSection {
                    category: ResultCategory::Shop,
                    hits: vec![hit(query), hit("second")],
                }],
            }
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_open_gated_by_tab() {
        let mut search = SearchOverlay::default();
        assert!(!search.open(PrimaryTab::Create));
        assert!(!search.is_open());
        assert!(search.open(PrimaryTab::Community));
        assert!(search.is_visible(PrimaryTab::Community));
        assert!(!search.is_visible(PrimaryTab::Create));
    }

    #[test]
    fn test_open_twice_keeps_query() {
        let now = Instant::now();
        let mut search = SearchOverlay::default();
        search.open(PrimaryTab::Commerce);
        search.set_query("ring", now);
        search.open(PrimaryTab::Commerce);
        assert!(search.is_open());
        assert_eq!(search.query(), "ring");
    }

    #[test]
    fn test_close_clears_query_and_pending() {
        let now = Instant::now();
        let mut search = SearchOverlay::default();
        search.open(PrimaryTab::Commerce);
        search.set_query("ring", now);
        search.close();

        assert!(!search.is_open());
        assert_eq!(search.query(), "");
        assert!(!search.tick(now + ms(1000), PrimaryTab::Commerce, &Echo));
    }

    #[test]
    fn test_results_arrive_after_debounce() {
        let t0 = Instant::now();
        let mut search = SearchOverlay::default();
        search.open(PrimaryTab::Commerce);
        search.input_char('g', t0);
        search.input_char('o', t0 + ms(400));

        assert!(!search.tick(t0 + ms(700), PrimaryTab::Commerce, &Echo));
        assert!(search.tick(t0 + ms(1000), PrimaryTab::Commerce, &Echo));
        assert_eq!(search.selected_hit().map(|h| h.title.as_str()), Some("go"));
    }

    #[test]
    fn test_typing_ignored_while_closed() {
        let now = Instant::now();
        let mut search = SearchOverlay::default();
        assert!(!search.input_char('x', now));
        assert_eq!(search.query(), "");
    }

    #[test]
    fn test_selection_bounds() {
        let now = Instant::now();
        let mut search = SearchOverlay::default();
        search.open(PrimaryTab::Commerce);
        search.set_query("x", now);
        search.tick(now + ms(600), PrimaryTab::Commerce, &Echo);

        search.select_prev();
        assert_eq!(search.selected(), 0);
        search.select_next();
        search.select_next();
        assert_eq!(search.selected(), 1);
    }

    #[test]
    fn test_clearing_query_drops_results() {
        let now = Instant::now();
        let mut search = SearchOverlay::default();
        search.open(PrimaryTab::Commerce);
        search.set_query("x", now);
        search.tick(now + ms(600), PrimaryTab::Commerce, &Echo);
        assert!(!search.results().is_empty());

        search.edit(Action::Backspace, now + ms(700));
        assert!(search.results().is_empty());
        assert!(!search.is_searching());
    }
}

//! Active top-level section and its sub-tab.

use tracing::debug;

/// Top-level section of the main shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimaryTab {
    #[default]
    Commerce,
    Community,
    Create,
}

impl PrimaryTab {
    pub const ALL: [PrimaryTab; 3] = [PrimaryTab::Commerce, PrimaryTab::Community, PrimaryTab::Create];

    pub fn label(&self) -> &'static str {
        match self {
            PrimaryTab::Commerce => "Shop",
            PrimaryTab::Community => "Community",
            PrimaryTab::Create => "Create",
        }
    }

    /// Whether the search overlay has anything to search under this tab.
    pub fn allows_search(&self) -> bool {
        matches!(self, PrimaryTab::Commerce | PrimaryTab::Community)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

/// Commerce category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommerceCategory {
    #[default]
    All,
    Women,
    Men,
    Inclusive,
    Kids,
}

impl CommerceCategory {
    pub const ALL: [CommerceCategory; 5] = [
        CommerceCategory::All,
        CommerceCategory::Women,
        CommerceCategory::Men,
        CommerceCategory::Inclusive,
        CommerceCategory::Kids,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            CommerceCategory::All => "all",
            CommerceCategory::Women => "women",
            CommerceCategory::Men => "men",
            CommerceCategory::Inclusive => "inclusive",
            CommerceCategory::Kids => "kids",
        }
    }
}

/// Community sub-tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommunityTab {
    #[default]
    Verse,
    Spotlight,
    Profile,
}

impl CommunityTab {
    pub const ALL: [CommunityTab; 3] = [CommunityTab::Verse, CommunityTab::Spotlight, CommunityTab::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            CommunityTab::Verse => "feed",
            CommunityTab::Spotlight => "spotlight",
            CommunityTab::Profile => "profile",
        }
    }
}

/// Create sub-tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CreateTab {
    #[default]
    Chat,
    Creations,
    History,
}

impl CreateTab {
    pub const ALL: [CreateTab; 3] = [CreateTab::Chat, CreateTab::Creations, CreateTab::History];

    pub fn label(&self) -> &'static str {
        match self {
            CreateTab::Chat => "chat",
            CreateTab::Creations => "creations",
            CreateTab::History => "history",
        }
    }
}

/// A sub-tab tagged with the primary tab whose domain it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubTab {
    Commerce(CommerceCategory),
    Community(CommunityTab),
    Create(CreateTab),
}

impl SubTab {
    /// The primary tab this sub-tab belongs to.
    pub fn primary(&self) -> PrimaryTab {
        match self {
            SubTab::Commerce(_) => PrimaryTab::Commerce,
            SubTab::Community(_) => PrimaryTab::Community,
            SubTab::Create(_) => PrimaryTab::Create,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubTab::Commerce(c) => c.id(),
            SubTab::Community(c) => c.label(),
            SubTab::Create(c) => c.label(),
        }
    }
}

/// Holds the active primary tab and each primary tab's last sub-tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSelector {
    primary: PrimaryTab,
    commerce: CommerceCategory,
    community: CommunityTab,
    create: CreateTab,
}

impl TabSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(&self) -> PrimaryTab {
        self.primary
    }

    /// Sub-tab of the active primary tab.
    pub fn sub_tab(&self) -> SubTab {
        self.sub_tab_of(self.primary)
    }

    /// Remembered sub-tab of any primary tab.
    pub fn sub_tab_of(&self, tab: PrimaryTab) -> SubTab {
        match tab {
            PrimaryTab::Commerce => SubTab::Commerce(self.commerce),
            PrimaryTab::Community => SubTab::Community(self.community),
            PrimaryTab::Create => SubTab::Create(self.create),
        }
    }

    pub fn commerce_category(&self) -> CommerceCategory {
        self.commerce
    }

    /// Switch section. Sub-tabs are left alone.
    ///
    /// Returns true if the active tab changed. The chrome and scroll reset is
    /// applied by the composer on every call, changed or not.
    pub fn select_primary_tab(&mut self, tab: PrimaryTab) -> bool {
        let changed = self.primary != tab;
        self.primary = tab;
        changed
    }

    /// Select a sub-tab of the active primary tab.
    ///
    /// Returns false (and leaves state untouched) if the sub-tab belongs to a
    /// different primary tab or is already selected.
    pub fn select_sub_tab(&mut self, sub: SubTab) -> bool {
        if sub.primary() != self.primary {
            debug!(?sub, active = ?self.primary, "sub-tab rejected: not in active tab's domain");
            return false;
        }
        if sub == self.sub_tab() {
            return false;
        }
        match sub {
            SubTab::Commerce(c) => self.commerce = c,
            SubTab::Community(c) => self.community = c,
            SubTab::Create(c) => self.create = c,
        }
        true
    }

    pub fn next_primary(&self) -> PrimaryTab {
        PrimaryTab::ALL[(self.primary.index() + 1) % PrimaryTab::ALL.len()]
    }

    pub fn prev_primary(&self) -> PrimaryTab {
        let len = PrimaryTab::ALL.len();
        PrimaryTab::ALL[(self.primary.index() + len - 1) % len]
    }

    /// The sub-tab after the current one, wrapping.
    pub fn next_sub_tab(&self) -> SubTab {
        self.cycle_sub_tab(1)
    }

    /// The sub-tab before the current one, wrapping.
    pub fn prev_sub_tab(&self) -> SubTab {
        self.cycle_sub_tab(-1)
    }

    fn cycle_sub_tab(&self, step: isize) -> SubTab {
        fn pick<T: Copy + PartialEq>(all: &[T], current: T, step: isize) -> T {
            let len = all.len() as isize;
            let index = all.iter().position(|t| *t == current).unwrap_or(0) as isize;
            all[(index + step).rem_euclid(len) as usize]
        }

        match self.primary {
            PrimaryTab::Commerce => {
                SubTab::Commerce(pick(&CommerceCategory::ALL, self.commerce, step))
            }
            PrimaryTab::Community => {
                SubTab::Community(pick(&CommunityTab::ALL, self.community, step))
            }
            PrimaryTab::Create => SubTab::Create(pick(&CreateTab::ALL, self.create, step)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let tabs = TabSelector::new();
        assert_eq!(tabs.primary(), PrimaryTab::Commerce);
        assert_eq!(tabs.sub_tab(), SubTab::Commerce(CommerceCategory::All));
    }

    #[test]
    fn test_each_tab_remembers_its_sub_tab() {
        let mut tabs = TabSelector::new();
        assert!(tabs.select_sub_tab(SubTab::Commerce(CommerceCategory::Kids)));

        tabs.select_primary_tab(PrimaryTab::Community);
        assert!(tabs.select_sub_tab(SubTab::Community(CommunityTab::Profile)));

        tabs.select_primary_tab(PrimaryTab::Commerce);
        assert_eq!(tabs.sub_tab(), SubTab::Commerce(CommerceCategory::Kids));

        tabs.select_primary_tab(PrimaryTab::Community);
        assert_eq!(tabs.sub_tab(), SubTab::Community(CommunityTab::Profile));
    }

    #[test]
    fn test_sub_tab_from_other_domain_rejected() {
        let mut tabs = TabSelector::new();
        assert!(!tabs.select_sub_tab(SubTab::Create(CreateTab::History)));
        assert_eq!(tabs.sub_tab_of(PrimaryTab::Create), SubTab::Create(CreateTab::Chat));
    }

    #[test]
    fn test_reselecting_same_sub_tab_is_not_a_change() {
        let mut tabs = TabSelector::new();
        assert!(!tabs.select_sub_tab(SubTab::Commerce(CommerceCategory::All)));
    }

    #[test]
    fn test_primary_cycling_wraps() {
        let mut tabs = TabSelector::new();
        assert_eq!(tabs.prev_primary(), PrimaryTab::Create);
        tabs.select_primary_tab(PrimaryTab::Create);
        assert_eq!(tabs.next_primary(), PrimaryTab::Commerce);
    }

    #[test]
    fn test_sub_tab_cycling_wraps() {
        let mut tabs = TabSelector::new();
        assert_eq!(tabs.prev_sub_tab(), SubTab::Commerce(CommerceCategory::Kids));
        assert_eq!(tabs.next_sub_tab(), SubTab::Commerce(CommerceCategory::Women));

        tabs.select_primary_tab(PrimaryTab::Create);
        assert_eq!(tabs.next_sub_tab(), SubTab::Create(CreateTab::Creations));
    }

    #[test]
    fn test_search_gating() {
        assert!(PrimaryTab::Commerce.allows_search());
        assert!(PrimaryTab::Community.allows_search());
        assert!(!PrimaryTab::Create.allows_search());
    }
}

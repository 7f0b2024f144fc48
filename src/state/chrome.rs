//! Header and toolbar ("chrome") visibility derived from scroll movement.
//!
//! [`ScrollChromeController`] is a pure transition function over scroll
//! offsets: it knows nothing about terminals or rendering. [`ScrollRegion`]
//! is the single scrollable content area of the shell that produces those
//! offsets.

use tracing::debug;

/// Which pieces of chrome are currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeVisibility {
    pub header: bool,
    pub toolbar: bool,
}

impl ChromeVisibility {
    pub const VISIBLE: Self = Self {
        header: true,
        toolbar: true,
    };

    pub const HIDDEN: Self = Self {
        header: false,
        toolbar: false,
    };

    pub fn is_visible(&self) -> bool {
        *self == Self::VISIBLE
    }
}

impl Default for ChromeVisibility {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Tunables for the scroll response, in content rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeThresholds {
    /// Movements smaller than this are treated as jitter and accumulate.
    pub jitter: u32,
    /// Upward movement only collapses chrome past this offset.
    pub collapse_offset: u32,
}

impl Default for ChromeThresholds {
    fn default() -> Self {
        Self {
            jitter: 5,
            collapse_offset: 50,
        }
    }
}

/// Derives [`ChromeVisibility`] from successive scroll offsets.
#[derive(Debug, Clone)]
pub struct ScrollChromeController {
    visibility: ChromeVisibility,
    last_top: u32,
    fullscreen: bool,
    thresholds: ChromeThresholds,
}

impl Default for ScrollChromeController {
    fn default() -> Self {
        Self::new(ChromeThresholds::default())
    }
}

impl ScrollChromeController {
    pub fn new(thresholds: ChromeThresholds) -> Self {
        Self {
            visibility: ChromeVisibility::VISIBLE,
            last_top: 0,
            fullscreen: false,
            thresholds,
        }
    }

    pub fn visibility(&self) -> ChromeVisibility {
        self.visibility
    }

    /// Offset of the last event that cleared the jitter threshold.
    pub fn last_top(&self) -> u32 {
        self.last_top
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn thresholds(&self) -> ChromeThresholds {
        self.thresholds
    }

    /// Process one scroll event and return the resulting visibility.
    ///
    /// While fullscreen nothing changes, not even the retained offset.
    /// Sub-threshold movement leaves the retained offset where it was so
    /// successive small movements add up.
    pub fn handle_scroll(&mut self, new_top: u32) -> ChromeVisibility {
        if self.fullscreen {
            debug!(new_top, "scroll ignored: fullscreen");
            return self.visibility;
        }

        let delta = i64::from(new_top) - i64::from(self.last_top);
        if delta.unsigned_abs() < u64::from(self.thresholds.jitter) {
            debug!(new_top, delta, "scroll ignored: below jitter threshold");
            return self.visibility;
        }

        if delta < 0 && new_top > self.thresholds.collapse_offset {
            self.visibility = ChromeVisibility::HIDDEN;
        } else if delta > 0 {
            self.visibility = ChromeVisibility::VISIBLE;
        }

        self.last_top = new_top;
        self.visibility
    }

    /// Raise or lower the fullscreen flag.
    ///
    /// Lowering it forces the chrome back on. The retained offset is kept.
    pub fn set_fullscreen(&mut self, fullscreen: bool) -> ChromeVisibility {
        let leaving = self.fullscreen && !fullscreen;
        self.fullscreen = fullscreen;
        if leaving {
            self.visibility = ChromeVisibility::VISIBLE;
        }
        self.visibility
    }

    /// Show all chrome and forget the retained offset.
    pub fn reset_for_tab_change(&mut self) {
        self.visibility = ChromeVisibility::VISIBLE;
        self.last_top = 0;
    }
}

/// The shell's single scrollable content area.
///
/// Scroll input only reaches the region while it is attached. Attaching is
/// idempotent, so re-rendering never stacks a second listener.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollRegion {
    offset: u32,
    max_offset: u32,
    attached: bool,
}

impl ScrollRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn max_offset(&self) -> u32 {
        self.max_offset
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Start listening. Returns false if already attached.
    pub fn attach(&mut self) -> bool {
        if self.attached {
            return false;
        }
        self.attached = true;
        true
    }

    /// Stop listening. Returns false if not attached.
    pub fn detach(&mut self) -> bool {
        if !self.attached {
            return false;
        }
        self.attached = false;
        true
    }

    /// Update the scrollable extent (content height minus viewport height).
    ///
    /// Returns the new offset when the shrink moved it.
    pub fn set_max_offset(&mut self, max_offset: u32) -> Option<u32> {
        self.max_offset = max_offset;
        if self.offset <= max_offset {
            return None;
        }
        self.offset = max_offset;
        Some(self.offset)
    }

    /// Move by `delta` rows, clamped to the extent.
    ///
    /// Returns the new offset, or `None` when detached.
    pub fn scroll_by(&mut self, delta: i32) -> Option<u32> {
        if !self.attached {
            return None;
        }
        let target = i64::from(self.offset) + i64::from(delta);
        let clamped = target.clamp(0, i64::from(self.max_offset));
        self.offset = u32::try_from(clamped).unwrap_or(self.max_offset);
        Some(self.offset)
    }

    /// Jump to `top`, clamped to the extent.
    pub fn scroll_to(&mut self, top: u32) -> Option<u32> {
        if !self.attached {
            return None;
        }
        self.offset = top.min(self.max_offset);
        Some(self.offset)
    }

    /// Back to the top, attached or not.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

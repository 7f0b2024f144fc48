//! View and chrome state.
//!
//! Everything in this module is independent of the terminal: controllers are
//! plain values driven by intent methods and an injected clock, so every
//! transition can be tested without a UI.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      ViewComposer                         │
//! ├──────────────────────────────────────────────────────────┤
//! │  AuthFlow ── gates everything below until Authenticated   │
//! │                                                           │
//! │  ScreenRouter ── an open screen replaces the shell        │
//! │                                                           │
//! │  ┌─ shell ───────────────────────────────────────────┐   │
//! │  │ TabSelector            ShellState                 │   │
//! │  │ ScrollChromeController ScrollRegion               │   │
//! │  │ SearchOverlay (modal over the shell)              │   │
//! │  └───────────────────────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! [`ViewComposer::compose`] yields exactly one [`View`] per render.

pub mod auth;
pub mod chrome;
pub mod composer;
pub mod router;
pub mod search;
pub mod shell;
pub mod tabs;
pub mod timer;

pub use auth::{AuthFlow, AuthState, AuthStep};
pub use chrome::{ChromeVisibility, ScrollChromeController, ScrollRegion};
pub use composer::{ComposerSettings, View, ViewComposer};
pub use router::{ScreenId, ScreenRouter, ScreenState};
pub use search::SearchOverlay;
pub use tabs::{PrimaryTab, SubTab, TabSelector};

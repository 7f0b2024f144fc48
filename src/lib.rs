//! Thyne - a terminal storefront for browsing, sharing and creating jewellery
//!
//! The interesting part of the crate is [`state`]: a set of terminal-free
//! controllers (auth flow, screen router, tabs, scroll-driven chrome, search
//! overlay) combined by [`ViewComposer`] into the single view drawn per frame.
//! Everything else renders that view with ratatui or wires it to a terminal.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

pub use catalog::{Catalog, DefaultCatalog};
pub use config::Config;
pub use state::{View, ViewComposer};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};

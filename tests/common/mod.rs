//! Shared helpers for the integration tests.
//!
//! Every controller takes the current time as an argument, so tests drive
//! the clock themselves: pick a base `Instant` and step it with [`ms`].

#![allow(dead_code)]

use std::time::{Duration, Instant};

use thyne_shell::catalog::default_catalog;
use thyne_shell::state::{AuthStep, ComposerSettings, ViewComposer};

/// Viewport height used for shell tests, in rows.
pub const VIEWPORT: u32 = 20;

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// A composer starting on the splash screen.
pub fn fresh(now: Instant) -> ViewComposer {
    let catalog = Box::new(default_catalog().expect("bundled catalog parses"));
    ViewComposer::new(ComposerSettings::default(), catalog, now)
}

/// A composer already past the auth gate, sized and rendered once.
pub fn signed_in(now: Instant) -> ViewComposer {
    let catalog = Box::new(default_catalog().expect("bundled catalog parses"));
    let mut composer =
        ViewComposer::new(ComposerSettings::default().skip_auth(true), catalog, now);
    composer.set_viewport(VIEWPORT);
    composer.compose();
    composer
}

/// A composer on the sign-up form.
pub fn at_sign_up(now: Instant) -> ViewComposer {
    let mut composer = fresh(now);
    assert_eq!(composer.complete_splash(), Some(AuthStep::SignUp));
    composer
}

pub fn type_contact(composer: &mut ViewComposer, text: &str, now: Instant) {
    for c in text.chars() {
        composer.auth_input_char(c, now);
    }
}

/// A composer on the code screen for a valid phone number.
pub fn at_otp(now: Instant) -> ViewComposer {
    let mut composer = at_sign_up(now);
    type_contact(&mut composer, "9876543210", now);
    assert_eq!(composer.submit_contact(now), Some(AuthStep::Otp));
    composer
}

//! Linear authentication flow gating the rest of the app.
//!
//! ```text
//! Splash ──complete──▶ SignUp ──valid contact──▶ Otp ──correct code──▶ Authenticated
//!   ▲                   │  │                      │
//!   └──────back─────────┘  └──────skip────────────┼──────────────────▶ Authenticated
//!                          ▲                      │
//!                          └──────back────────────┘
//! ```
//!
//! Authenticated is terminal. All delays (splash carousel, OTP debounce and
//! verification, resend cooldown) are [`Deadline`]s stored inside the state
//! they belong to, so leaving a state drops its pending work.

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info};

use crate::keymap::Action;
use crate::state::tabs::PrimaryTab;
use crate::state::timer::{take_due, Deadline};
use crate::utils::contact::{validate_contact, ContactError};
use crate::utils::text_input::TextInput;

/// Number of digits in a one-time code.
pub const OTP_LENGTH: usize = 6;

/// One slide per section of the app.
pub const SPLASH_SLIDES: [PrimaryTab; 3] = PrimaryTab::ALL;

/// Delays used by the flow, plus the accepted code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTimings {
    pub splash_slide: Duration,
    pub splash_outro: Duration,
    pub otp_debounce: Duration,
    pub otp_verify: Duration,
    pub otp_resend: Duration,
    pub otp_code: String,
}

impl Default for AuthTimings {
    fn default() -> Self {
        Self {
            splash_slide: Duration::from_millis(2000),
            splash_outro: Duration::from_millis(1000),
            otp_debounce: Duration::from_millis(300),
            otp_verify: Duration::from_millis(1000),
            otp_resend: Duration::from_secs(60),
            otp_code: "123456".to_string(),
        }
    }
}

/// Inline error shown under the OTP field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OtpError {
    #[error("Please enter the complete 6-digit OTP")]
    Incomplete,
    #[error("Invalid OTP. Please try again.")]
    Invalid,
}

/// Tag of the current stage, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStep {
    Splash,
    SignUp,
    Otp,
    Authenticated,
}

/// Splash carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashState {
    slide: usize,
    next_slide: Option<Deadline>,
    outro: Option<Deadline>,
}

impl SplashState {
    fn new(now: Instant, timings: &AuthTimings) -> Self {
        Self {
            slide: 0,
            next_slide: Some(Deadline::after(now, timings.splash_slide)),
            outro: None,
        }
    }

    pub fn slide(&self) -> usize {
        self.slide
    }

    pub fn section(&self) -> PrimaryTab {
        SPLASH_SLIDES[self.slide.min(SPLASH_SLIDES.len() - 1)]
    }

    /// Advance the carousel. Returns true once the outro has elapsed.
    fn tick(&mut self, now: Instant, timings: &AuthTimings) -> bool {
        while let Some(fired) = take_due(&mut self.next_slide, now) {
            if self.slide + 1 < SPLASH_SLIDES.len() {
                self.slide += 1;
                self.next_slide = Some(Deadline::after(fired, timings.splash_slide));
            } else {
                self.outro = Some(Deadline::after(fired, timings.splash_outro));
            }
        }
        take_due(&mut self.outro, now).is_some()
    }
}

/// Contact entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpState {
    pub input: TextInput,
    pub error: Option<ContactError>,
    pub notify_me: bool,
    pub subscribe_newsletter: bool,
}

impl SignUpState {
    fn new() -> Self {
        Self {
            notify_me: true,
            ..Self::default()
        }
    }
}

/// One-time code entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpState {
    pub code: TextInput,
    pub error: Option<OtpError>,
    debounce: Option<Deadline>,
    verifying: Option<Deadline>,
    resend_cooldown: Option<Deadline>,
}

impl OtpState {
    fn new(now: Instant, timings: &AuthTimings) -> Self {
        Self {
            code: TextInput::digits(OTP_LENGTH),
            error: None,
            debounce: None,
            verifying: None,
            resend_cooldown: Some(Deadline::after(now, timings.otp_resend)),
        }
    }

    pub fn is_verifying(&self) -> bool {
        self.verifying.is_some()
    }

    /// Time until resend is allowed, `None` once it is.
    pub fn resend_remaining(&self, now: Instant) -> Option<Duration> {
        self.resend_cooldown
            .filter(|d| !d.is_due(now))
            .map(|d| d.remaining(now))
    }

    fn after_edit(&mut self, changed: bool, now: Instant, timings: &AuthTimings) {
        if !changed {
            return;
        }
        self.error = None;
        self.debounce = if self.code.len() == OTP_LENGTH {
            Some(Deadline::after(now, timings.otp_debounce))
        } else {
            None
        };
    }

    fn start_verification(&mut self, now: Instant, timings: &AuthTimings) {
        if self.code.len() != OTP_LENGTH {
            self.error = Some(OtpError::Incomplete);
            return;
        }
        self.error = None;
        self.debounce = None;
        self.verifying = Some(Deadline::after(now, timings.otp_verify));
    }

    /// Returns true when a verification attempt accepted the code.
    fn tick(&mut self, now: Instant, timings: &AuthTimings) -> bool {
        take_due(&mut self.resend_cooldown, now);

        if let Some(fired) = take_due(&mut self.debounce, now) {
            if self.code.len() == OTP_LENGTH {
                self.start_verification(fired, timings);
            }
        }

        if take_due(&mut self.verifying, now).is_some() {
            if self.code.text() == timings.otp_code {
                return true;
            }
            debug!("otp rejected");
            self.code.clear();
            self.error = Some(OtpError::Invalid);
        }
        false
    }
}

/// Data-carrying stage of the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Splash(SplashState),
    SignUp(SignUpState),
    Otp(OtpState),
    Authenticated,
}

impl AuthState {
    pub fn step(&self) -> AuthStep {
        match self {
            AuthState::Splash(_) => AuthStep::Splash,
            AuthState::SignUp(_) => AuthStep::SignUp,
            AuthState::Otp(_) => AuthStep::Otp,
            AuthState::Authenticated => AuthStep::Authenticated,
        }
    }
}

/// Owns the auth state machine.
///
/// Every transition method returns the step entered, or `None` when the
/// event did not cause a transition.
#[derive(Debug, Clone)]
pub struct AuthFlow {
    state: AuthState,
    pending_contact: Option<String>,
    timings: AuthTimings,
}

impl AuthFlow {
    /// Start on the splash carousel.
    pub fn new(timings: AuthTimings, now: Instant) -> Self {
        Self {
            state: AuthState::Splash(SplashState::new(now, &timings)),
            pending_contact: None,
            timings,
        }
    }

    /// Start already authenticated.
    pub fn authenticated(timings: AuthTimings) -> Self {
        Self {
            state: AuthState::Authenticated,
            pending_contact: None,
            timings,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn step(&self) -> AuthStep {
        self.state.step()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated)
    }

    /// Contact captured when leaving SignUp.
    pub fn pending_contact(&self) -> Option<&str> {
        self.pending_contact.as_deref()
    }

    pub fn timings(&self) -> &AuthTimings {
        &self.timings
    }

    fn enter(&mut self, state: AuthState) -> Option<AuthStep> {
        let step = state.step();
        info!(from = ?self.state.step(), to = ?step, "auth transition");
        self.state = state;
        Some(step)
    }

    /// Splash carousel finished (or was dismissed).
    pub fn complete_splash(&mut self) -> Option<AuthStep> {
        match self.state {
            AuthState::Splash(_) => self.enter(AuthState::SignUp(SignUpState::new())),
            _ => None,
        }
    }

    /// Validate the entered contact and move on to the code screen.
    pub fn submit_contact(&mut self, now: Instant) -> Option<AuthStep> {
        let AuthState::SignUp(signup) = &mut self.state else {
            return None;
        };

        match validate_contact(signup.input.text()) {
            Ok(contact) => {
                debug!(kind = contact.kind(), "contact accepted");
                self.pending_contact = Some(signup.input.text().trim().to_string());
                let otp = OtpState::new(now, &self.timings);
                self.enter(AuthState::Otp(otp))
            }
            Err(err) => {
                debug!(%err, "contact rejected");
                signup.error = Some(err);
                None
            }
        }
    }

    /// Skip sign-up entirely.
    pub fn skip(&mut self) -> Option<AuthStep> {
        match self.state {
            AuthState::SignUp(_) => self.enter(AuthState::Authenticated),
            _ => None,
        }
    }

    /// Step back one stage. Splash and Authenticated have nowhere to go.
    pub fn back(&mut self, now: Instant) -> Option<AuthStep> {
        match self.state {
            AuthState::SignUp(_) => {
                let splash = SplashState::new(now, &self.timings);
                self.enter(AuthState::Splash(splash))
            }
            AuthState::Otp(_) => self.enter(AuthState::SignUp(SignUpState::new())),
            AuthState::Splash(_) | AuthState::Authenticated => None,
        }
    }

    /// Type a character into the focused field.
    pub fn input_char(&mut self, c: char, now: Instant) -> bool {
        match &mut self.state {
            AuthState::SignUp(signup) => {
                let changed = signup.input.insert_char(c);
                if changed {
                    signup.error = None;
                }
                changed
            }
            AuthState::Otp(otp) if !otp.is_verifying() => {
                let changed = otp.code.insert_char(c);
                otp.after_edit(changed, now, &self.timings);
                changed
            }
            _ => false,
        }
    }

    /// Apply a cursor or deletion action to the focused field.
    pub fn edit(&mut self, action: Action, now: Instant) -> bool {
        match &mut self.state {
            AuthState::SignUp(signup) => {
                let before = signup.input.text().to_string();
                let handled = signup.input.handle_action(action);
                if signup.input.text() != before {
                    signup.error = None;
                }
                handled
            }
            AuthState::Otp(otp) if !otp.is_verifying() => {
                let before = otp.code.len();
                let handled = otp.code.handle_action(action);
                otp.after_edit(otp.code.len() != before, now, &self.timings);
                handled
            }
            _ => false,
        }
    }

    pub fn backspace(&mut self, now: Instant) -> bool {
        self.edit(Action::Backspace, now)
    }

    pub fn toggle_newsletter(&mut self) -> bool {
        if let AuthState::SignUp(signup) = &mut self.state {
            signup.subscribe_newsletter = !signup.subscribe_newsletter;
            return true;
        }
        false
    }

    pub fn toggle_notify(&mut self) -> bool {
        if let AuthState::SignUp(signup) = &mut self.state {
            signup.notify_me = !signup.notify_me;
            return true;
        }
        false
    }

    /// Verify the entered code now instead of waiting for the debounce.
    pub fn verify(&mut self, now: Instant) {
        if let AuthState::Otp(otp) = &mut self.state {
            if !otp.is_verifying() {
                otp.start_verification(now, &self.timings);
            }
        }
    }

    /// Request a new code. Ignored during the cooldown.
    pub fn resend(&mut self, now: Instant) -> bool {
        let AuthState::Otp(otp) = &mut self.state else {
            return false;
        };
        if otp.resend_remaining(now).is_some() || otp.is_verifying() {
            return false;
        }
        info!("otp resent");
        otp.code.clear();
        otp.error = None;
        otp.debounce = None;
        otp.resend_cooldown = Some(Deadline::after(now, self.timings.otp_resend));
        true
    }

    /// Fire due deadlines of the current stage.
    pub fn tick(&mut self, now: Instant) -> Option<AuthStep> {
        match &mut self.state {
            AuthState::Splash(splash) => {
                if splash.tick(now, &self.timings) {
                    return self.complete_splash();
                }
                None
            }
            AuthState::Otp(otp) => {
                if otp.tick(now, &self.timings) {
                    return self.enter(AuthState::Authenticated);
                }
                None
            }
            AuthState::SignUp(_) | AuthState::Authenticated => None,
        }
    }
}

// Render-only building blocks for the terminal front-end. Each takes the
// composed view (or a piece of it) and draws it; none of them hold state.

pub mod auth;
pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod screens;
pub mod search_overlay;
pub mod shell;
pub mod viewer;

pub use auth::{OtpScreen, SignUpScreen, SplashScreen};
pub use help_overlay::HelpOverlay;
pub use screens::ScreenPage;
pub use shell::{ShellAreas, ShellScreen};

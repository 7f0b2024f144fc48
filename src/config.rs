use crate::keymap::Keymap;
use crate::state::auth::AuthTimings;
use crate::state::chrome::ChromeThresholds;
use crate::state::shell::LoadTimings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::warn;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI theme: "dark", "light" or "nocolor"
    pub theme: String,
    /// Keyboard bindings (preset plus overrides)
    pub keymap: Keymap,
    /// Scroll-driven chrome behaviour
    pub chrome: ChromeConfig,
    /// Simulated loading and debounce delays
    pub timings: TimingConfig,
    /// Sign-up and OTP settings
    pub auth: AuthConfig,
}

/// Thresholds for showing and hiding the header and toolbar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChromeConfig {
    /// Scroll deltas smaller than this (in rows) are treated as jitter
    pub jitter_threshold: u32,
    /// Scrolling up only collapses chrome past this offset (in rows)
    pub collapse_offset: u32,
    /// Rows scrolled per scroll key press
    pub scroll_step: u32,
    /// Rows scrolled per mouse wheel notch
    pub wheel_step: u32,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            jitter_threshold: 5,
            collapse_offset: 50,
            scroll_step: 6,
            wheel_step: 3,
        }
    }
}

impl ChromeConfig {
    /// Thresholds consumed by the scroll chrome controller
    pub fn thresholds(&self) -> ChromeThresholds {
        ChromeThresholds {
            jitter: self.jitter_threshold,
            collapse_offset: self.collapse_offset,
        }
    }
}

/// Delays used by the auth flow and the shell, in milliseconds unless noted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimingConfig {
    pub splash_slide_ms: u64,
    pub splash_outro_ms: u64,
    pub otp_debounce_ms: u64,
    pub otp_verify_ms: u64,
    pub otp_resend_secs: u64,
    pub initial_load_ms: u64,
    pub category_load_ms: u64,
    pub community_load_ms: u64,
    pub create_load_ms: u64,
    pub search_debounce_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            splash_slide_ms: 2000,
            splash_outro_ms: 1000,
            otp_debounce_ms: 300,
            otp_verify_ms: 1000,
            otp_resend_secs: 60,
            initial_load_ms: 1500,
            category_load_ms: 800,
            community_load_ms: 800,
            create_load_ms: 1200,
            search_debounce_ms: 600,
        }
    }
}

impl TimingConfig {
    /// Delays used by the shell's loading placeholders
    pub fn load_timings(&self) -> LoadTimings {
        LoadTimings {
            initial: Duration::from_millis(self.initial_load_ms),
            category: Duration::from_millis(self.category_load_ms),
            community: Duration::from_millis(self.community_load_ms),
            create: Duration::from_millis(self.create_load_ms),
        }
    }

    /// Debounce before search results are fetched
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuthConfig {
    /// The one code the OTP screen accepts
    pub otp_code: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            otp_code: "123456".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            keymap: Keymap::default(),
            chrome: ChromeConfig::default(),
            timings: TimingConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or create a default one at that path
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let mut config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            config.sanitize();
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = self.to_toml()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        // 600: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }

    /// Serialize the effective configuration as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).with_context(|| "Failed to serialize config")
    }

    /// Timing bundle for the auth flow
    pub fn auth_timings(&self) -> AuthTimings {
        AuthTimings {
            splash_slide: Duration::from_millis(self.timings.splash_slide_ms),
            splash_outro: Duration::from_millis(self.timings.splash_outro_ms),
            otp_debounce: Duration::from_millis(self.timings.otp_debounce_ms),
            otp_verify: Duration::from_millis(self.timings.otp_verify_ms),
            otp_resend: Duration::from_secs(self.timings.otp_resend_secs),
            otp_code: self.auth.otp_code.clone(),
        }
    }

    /// Clamp values that would make the controllers misbehave.
    fn sanitize(&mut self) {
        if self.chrome.jitter_threshold == 0 {
            warn!("chrome.jitter_threshold must be at least 1, using 1");
            self.chrome.jitter_threshold = 1;
        }
        if self.chrome.scroll_step == 0 {
            warn!("chrome.scroll_step must be at least 1, using default");
            self.chrome.scroll_step = ChromeConfig::default().scroll_step;
        }
        if self.chrome.wheel_step == 0 {
            warn!("chrome.wheel_step must be at least 1, using default");
            self.chrome.wheel_step = ChromeConfig::default().wheel_step;
        }
        let code = self.auth.otp_code.trim();
        if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
            warn!("auth.otp_code must be 6 digits, using default");
            self.auth.otp_code = AuthConfig::default().otp_code;
        }
    }
}

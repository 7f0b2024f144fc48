//! Command-line interface.
//!
//! Without a subcommand the TUI is launched. The subcommands are small
//! non-interactive helpers around the config file and the sign-up rules.

mod common;
pub mod completions;

pub use common::*;

use crate::app::App;
use crate::config::Config;
use crate::styles::{init_theme, ThemeType};
use crate::utils::{get_config_path, get_log_dir, validate_contact};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

/// Shop, share and create jewellery from the terminal
#[derive(Parser, Debug)]
#[command(name = "thyne", version, about, long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Start signed in, skipping the splash and sign-up screens
    #[arg(long)]
    pub skip_auth: bool,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Print the log file location
    Logs,
    /// Generate shell completions
    Completions {
        /// Target shell (detected from the environment when omitted)
        shell: Option<Shell>,
    },
    /// Check a phone number or email against the sign-up rules
    ValidateContact {
        /// The phone number or email to check
        input: String,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
}

impl Cli {
    /// Config file this invocation uses.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(get_config_path)
    }

    pub fn execute(self) -> Result<ExitCode> {
        let config_path = self.config_path();
        match self.command {
            None => Self::cmd_tui(config_path, self.skip_auth, self.no_colors),
            Some(Commands::Config { command }) => Self::cmd_config(command, &config_path),
            Some(Commands::Logs) => Self::cmd_logs(),
            Some(Commands::Completions { shell }) => {
                completions::generate(shell)?;
                Ok(ExitCode::SUCCESS)
            }
            Some(Commands::ValidateContact { input }) => Ok(Self::cmd_validate_contact(&input)),
        }
    }

    fn cmd_tui(config_path: PathBuf, skip_auth: bool, no_colors: bool) -> Result<ExitCode> {
        let config = Config::load_or_create(&config_path).context("Failed to load configuration")?;
        for (key, err) in config.keymap.invalid_overrides() {
            warn!(key = %key, %err, "ignoring keymap override");
        }

        let no_color = no_colors || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        init_theme(ThemeType::resolve(&config.theme, no_color));

        info!(path = %config_path.display(), skip_auth, "starting tui");
        let mut app = App::new(config, config_path, skip_auth)?;
        app.run()?;
        Ok(ExitCode::SUCCESS)
    }

    fn cmd_config(command: ConfigCommand, config_path: &std::path::Path) -> Result<ExitCode> {
        match command {
            ConfigCommand::Path => println!("{}", config_path.display()),
            ConfigCommand::Show => {
                let config = Config::load_or_create(config_path)
                    .context("Failed to load configuration")?;
                print!("{}", config.to_toml()?);
            }
        }
        Ok(ExitCode::SUCCESS)
    }

    fn cmd_logs() -> Result<ExitCode> {
        let log_file = get_log_dir().join(LOG_FILE_NAME);
        println!("{}", log_file.display());
        print_info(&format!("Follow it with: tail -f {}", log_file.display()));
        Ok(ExitCode::SUCCESS)
    }

    fn cmd_validate_contact(input: &str) -> ExitCode {
        match validate_contact(input) {
            Ok(contact) => {
                print_success(&format!("valid {}: {}", contact.kind(), contact));
                ExitCode::SUCCESS
            }
            Err(err) => {
                print_error(&err.to_string());
                ExitCode::FAILURE
            }
        }
    }
}

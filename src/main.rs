use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use thyne_shell::cli::{Cli, Commands, LOG_FILE_NAME};
use thyne_shell::utils::get_log_dir;
use tracing_appender::non_blocking::WorkerGuard;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

/// File logging. The TUI owns the terminal, so nothing goes to stderr.
fn init_logging(verbose: bool) -> Result<WorkerGuard> {
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Completions and contact checks print to stdout and need no log file.
    let _guard = match cli.command {
        Some(Commands::Completions { .. }) | Some(Commands::ValidateContact { .. }) => None,
        _ => Some(init_logging(cli.verbose)?),
    };

    if cli.command.is_none() {
        setup_panic_hook();
    }

    cli.execute()
}

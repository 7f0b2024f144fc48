//! Output helpers shared by the CLI commands.

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "thyne.log";

/// Print a success message with a checkmark prefix.
pub fn print_success(msg: &str) {
    println!("\u{2713} {}", msg);
}

/// Print an error message with an X prefix to stderr.
pub fn print_error(msg: &str) {
    eprintln!("\u{2717} {}", msg);
}

/// Print an informational line to stderr so stdout stays scriptable.
pub fn print_info(msg: &str) {
    eprintln!("  {}", msg);
}

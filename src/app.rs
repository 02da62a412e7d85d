//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use discord_webhook::dispatch::CommandError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    use discord_webhook::dispatch::CommandError;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Usage or configuration error (exit code 1) - missing message or URL, bad config file, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - network failure, API error, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }

    /// Maps a command failure to its exit code.
    pub fn for_error(error: &CommandError) -> ExitCode {
        if error.is_send_failure() {
            runtime_error()
        } else {
            CONFIG_ERROR
        }
    }
}

/// Prints helpful hints for common command errors.
pub fn print_error_hint(error: &CommandError) {
    match error {
        CommandError::MissingWebhookUrl => {
            eprintln!(
                "\nRun 'discord-webhook config set webhook_url <URL>' to save a default webhook."
            );
        }
        CommandError::MissingMessage => {
            eprintln!("\nExample: echo 'hello' | discord-webhook send");
        }
        CommandError::UnsupportedKey(_) => {
            eprintln!("\nSupported keys: webhook_url");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

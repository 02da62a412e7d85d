//! Error type for command execution.

use std::io;

use thiserror::Error;

use crate::config::{ConfigError, UnsupportedKey};
use crate::webhook::WebhookError;

/// Error type for a failed command.
///
/// Each variant names the stage that failed and keeps the underlying
/// cause as its [`source`](std::error::Error::source).
#[derive(Debug, Error)]
pub enum CommandError {
    /// No `--message` was given and standard input had no lines.
    #[error("No message specified. Use --message or pipe text to standard input")]
    MissingMessage,

    /// Standard input could not be read.
    #[error("Failed to read from stdin: {0}")]
    StdinRead(#[source] io::Error),

    /// No `--url` was given and the configuration has no webhook URL.
    #[error(
        "No webhook URL configured. Please specify with --url flag or save in configuration file"
    )]
    MissingWebhookUrl,

    /// The configuration key is not supported.
    #[error(transparent)]
    UnsupportedKey(#[from] UnsupportedKey),

    /// The configuration file could not be loaded.
    #[error("Failed to load configuration file: {0}")]
    ConfigLoad(#[source] ConfigError),

    /// The configuration file could not be saved.
    #[error("Failed to save configuration file: {0}")]
    ConfigSave(#[source] ConfigError),

    /// The webhook request failed.
    #[error("Failed to send message: {0}")]
    Send(#[source] WebhookError),

    /// Command output could not be written.
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl CommandError {
    /// Returns true if the failure happened while talking to the webhook.
    ///
    /// Everything else is a usage, input, or configuration problem.
    #[must_use]
    pub const fn is_send_failure(&self) -> bool {
        matches!(self, Self::Send(_))
    }
}

//! The `send` command: resolve the message and webhook URL, then send.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::{ConfigRecord, SendArgs, resolve_config_path};
use crate::webhook::MessageSender;

use super::CommandError;

/// Inputs of the `send` command.
///
/// Empty strings and paths are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// Configuration file to read the webhook URL from.
    pub config_path: Option<PathBuf>,
    /// Message text; read from the input stream when absent.
    pub message: Option<String>,
    /// Webhook URL; takes priority over the configuration file.
    pub url: Option<String>,
    /// Resolve everything but skip the request.
    pub dry_run: bool,
}

impl From<&SendArgs> for SendOptions {
    fn from(args: &SendArgs) -> Self {
        Self {
            config_path: args.config.clone(),
            message: args.message.clone(),
            url: args.url.clone(),
            dry_run: args.dry_run,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Returns the message to send.
///
/// An explicit non-empty message is used verbatim. Otherwise `input` is read
/// to the end and its lines are joined with `\n`. A trailing `\r` is dropped
/// from each line, and bytes that are not valid UTF-8 become U+FFFD.
///
/// # Errors
///
/// Returns [`CommandError::StdinRead`] if `input` fails, or
/// [`CommandError::MissingMessage`] if it yields no lines.
pub fn resolve_message<R: BufRead>(
    explicit: Option<&str>,
    input: R,
) -> Result<String, CommandError> {
    if let Some(message) = non_empty(explicit) {
        tracing::debug!("Using message from command line");
        return Ok(message.to_string());
    }

    let lines = input
        .split(b'\n')
        .map(|line| line.map(|bytes| decode_line(&bytes)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(CommandError::StdinRead)?;

    if lines.is_empty() {
        return Err(CommandError::MissingMessage);
    }

    tracing::debug!(lines = lines.len(), "Read message from standard input");
    Ok(lines.join("\n"))
}

fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

/// Returns the webhook URL to send to.
///
/// An explicit non-empty URL wins and the configuration file is not touched.
/// Otherwise the record at `config_path` (or the default path) is loaded.
///
/// # Errors
///
/// Returns [`CommandError::ConfigLoad`] if the configuration cannot be loaded,
/// or [`CommandError::MissingWebhookUrl`] if it holds no URL.
pub fn resolve_webhook_url(
    explicit: Option<&str>,
    config_path: Option<&Path>,
) -> Result<String, CommandError> {
    if let Some(url) = non_empty(explicit) {
        tracing::debug!("Using webhook URL from command line");
        return Ok(url.to_string());
    }

    let path = resolve_config_path(config_path);
    let record = ConfigRecord::load(&path).map_err(CommandError::ConfigLoad)?;
    if record.webhook_url.is_empty() {
        return Err(CommandError::MissingWebhookUrl);
    }

    tracing::debug!("Using webhook URL from {}", path.display());
    Ok(record.webhook_url)
}

/// Runs the `send` command.
///
/// The message is resolved first, so a missing message fails before any
/// configuration or network access. In dry-run mode the resolved values are
/// printed and `sender` is never called.
///
/// # Errors
///
/// Returns the resolution errors of [`resolve_message`] and
/// [`resolve_webhook_url`], [`CommandError::Send`] if sending fails, or
/// [`CommandError::Output`] if `out` cannot be written.
pub async fn run_send<S, R, W>(
    options: &SendOptions,
    sender: &S,
    input: R,
    out: &mut W,
) -> Result<(), CommandError>
where
    S: MessageSender,
    R: BufRead,
    W: Write,
{
    let message = resolve_message(options.message.as_deref(), input)?;
    let url = resolve_webhook_url(options.url.as_deref(), options.config_path.as_deref())?;

    if options.dry_run {
        tracing::info!("Dry-run mode enabled - webhook request will not be sent");
        writeln!(out, "Dry run: would send message '{message}' to URL '{url}'")
            .map_err(CommandError::Output)?;
        return Ok(());
    }

    sender
        .send_message(&url, &message)
        .await
        .map_err(CommandError::Send)?;

    writeln!(out, "Message sent successfully").map_err(CommandError::Output)
}

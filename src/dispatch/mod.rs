//! Command orchestration.
//!
//! Resolves the inputs of each subcommand and drives the configuration
//! store and the webhook client:
//! - [`run_send`] resolves the message and webhook URL, then sends or dry-runs
//! - [`run_config_set`] and [`run_config_get`] manage the configuration file
//!
//! Output goes to the writer passed in, so callers decide whether it
//! lands on stdout or in a buffer.

mod error;
mod send;
mod settings;

#[cfg(test)]
mod send_tests;

pub use error::CommandError;
pub use send::{SendOptions, resolve_message, resolve_webhook_url, run_send};
pub use settings::{run_config_get, run_config_set};

//! Configuration layer for discord-webhook.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`], [`SendArgs`], [`ConfigAction`])
//! - The persisted configuration record ([`ConfigRecord`])
//! - Supported configuration keys ([`ConfigKey`])
//! - Default file locations and timeouts ([`defaults`])
//!
//! # Persistence
//!
//! The configuration is a single JSON object stored at
//! `~/.discord-webhook/config.json` unless `--config` points elsewhere.
//! A missing file is the same as an empty record; it is created on the
//! first `config set`.
//!
//! There is no caching: every command loads the file, and `config set`
//! reloads it right before saving. Two concurrent `config set` invocations
//! race and the last write wins.

mod cli;
pub mod defaults;
mod error;
mod key;
mod store;


pub use cli::{Cli, Command, ConfigAction, SendArgs};
pub use error::ConfigError;
pub use key::{ConfigKey, UnsupportedKey};
pub use store::{ConfigRecord, default_config_path, resolve_config_path};

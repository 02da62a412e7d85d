//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// CLI tool for sending messages via Discord Webhook
///
/// Manage the webhook URL in a configuration file and send messages
/// from the command line.
#[derive(Debug, Parser)]
#[command(name = "discord-webhook")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for discord-webhook
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a message to the Discord webhook
    Send(SendArgs),

    /// Configuration management
    #[command(long_about = CONFIG_LONG_ABOUT)]
    Config {
        /// Configuration action to run
        #[command(subcommand)]
        action: ConfigAction,
    },
}

const CONFIG_LONG_ABOUT: &str = "\
Manage configurations such as webhook URLs.

Available configuration keys:
  webhook_url    Discord Webhook URL
                 Format: https://discord.com/api/webhooks/{id}/{token}
                 Usage: Discord Webhook URL for message destination

Configuration file:
  Default: ~/.discord-webhook/config.json
  Custom: Can be specified with --config flag

Usage examples:
  discord-webhook config set webhook_url https://discord.com/api/webhooks/...
  discord-webhook config get webhook_url
  discord-webhook config get";

/// Arguments for the `send` subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct SendArgs {
    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Message to send (reads from stdin if not specified)
    #[arg(long, short)]
    pub message: Option<String>,

    /// Webhook URL (takes priority over configuration file)
    #[arg(long, short)]
    pub url: Option<String>,

    /// Test execution without actually sending
    #[arg(long)]
    pub dry_run: bool,
}

/// Actions of the `config` subcommand.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Set configuration value (currently only webhook_url is supported)
    Set {
        /// Configuration key
        key: String,

        /// New value
        value: String,

        /// Path to configuration file
        #[arg(long, short)]
        config: Option<PathBuf>,
    },

    /// Display configuration values (all of them if no key is given)
    Get {
        /// Configuration key
        key: Option<String>,

        /// Path to configuration file
        #[arg(long, short)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, returning clap's error instead of exiting.
    ///
    /// # Errors
    ///
    /// Returns [`clap::Error`] for unknown flags, missing arguments, or `--help`.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }
}

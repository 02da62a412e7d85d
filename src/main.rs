//! discord-webhook: send messages to a Discord webhook.
//!
//! Entry point for the discord-webhook application.

use std::io;
use std::process::ExitCode;

use discord_webhook::config::{Cli, Command, ConfigAction, defaults};
use discord_webhook::dispatch::{
    CommandError, SendOptions, run_config_get, run_config_set, run_send,
};
use discord_webhook::webhook::{DiscordWebhook, ReqwestClient};

mod app;

use app::{exit_code, print_error_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    match cli.command {
        Command::Send(args) => handle_send(&SendOptions::from(&args)),
        Command::Config { action } => finish(handle_config(action)),
    }
}

/// Handles the `config` subcommand.
fn handle_config(action: ConfigAction) -> Result<(), CommandError> {
    let mut stdout = io::stdout().lock();
    match action {
        ConfigAction::Set { key, value, config } => {
            run_config_set(config.as_deref(), &key, &value, &mut stdout)
        }
        ConfigAction::Get { key, config } => {
            run_config_get(config.as_deref(), key.as_deref(), &mut stdout)
        }
    }
}

/// Handles the `send` subcommand on a single-threaded runtime.
fn handle_send(options: &SendOptions) -> ExitCode {
    let client = match ReqwestClient::with_timeout(defaults::request_timeout()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            return exit_code::runtime_error();
        }
    };
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: Failed to create async runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    let webhook = DiscordWebhook::new(client);
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    finish(runtime.block_on(run_send(options, &webhook, stdin, &mut stdout)))
}

/// Reports the outcome of a command and maps it to an exit code.
fn finish(result: Result<(), CommandError>) -> ExitCode {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {e:?}");
            eprintln!("Error: {e}");
            print_error_hint(&e);
            exit_code::for_error(&e)
        }
    }
}

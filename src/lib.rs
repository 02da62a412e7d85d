//! discord-webhook: post messages to a Discord webhook from the command line.
//!
//! The library holds everything the binary does apart from process setup:
//! configuration persistence, the webhook client, and command orchestration.

pub mod config;
pub mod dispatch;
pub mod webhook;

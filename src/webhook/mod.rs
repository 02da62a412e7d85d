//! Webhook layer for posting messages to Discord.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Sending a single message to a webhook ([`DiscordWebhook`], [`MessageSender`])

mod client;
mod error;
mod http;
mod sender;


pub use client::ReqwestClient;
pub use error::{HttpError, WebhookError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use sender::{DiscordMessage, DiscordWebhook, MessageSender};

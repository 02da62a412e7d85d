//! Error types for HTTP and webhook operations.

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong before a response status was available.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS failures, and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    Setup(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for sending a message to a webhook.
///
/// No variant is retried; each one ends the current send.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The message is empty or whitespace only. No request was made.
    #[error("Message is empty")]
    EmptyMessage,

    /// The payload could not be encoded as JSON.
    #[error("Failed to encode JSON: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The request could not be delivered or no response was received.
    #[error("Failed to send HTTP request: {0}")]
    Transport(#[from] HttpError),

    /// The webhook answered with a status outside 2xx.
    #[error("Discord API error: status code {}", status.as_u16())]
    Api {
        /// The HTTP status code returned
        status: http::StatusCode,
    },
}

impl WebhookError {
    /// Returns the HTTP status code for [`WebhookError::Api`].
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status } => Some(status.as_u16()),
            _ => None,
        }
    }
}

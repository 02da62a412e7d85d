//! Message sender trait and Discord webhook implementation.

use http::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;

use super::{HttpClient, HttpError, HttpRequest, WebhookError};

/// Trait for delivering a text message to a webhook URL.
///
/// This abstraction lets the send command be tested without a network.
pub trait MessageSender: Send + Sync {
    /// Sends `content` to `webhook_url`.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] if the message is rejected before sending,
    /// cannot be delivered, or the webhook answers with a non-2xx status.
    fn send_message(
        &self,
        webhook_url: &str,
        content: &str,
    ) -> impl std::future::Future<Output = Result<(), WebhookError>> + Send;
}

/// JSON payload posted to a Discord webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscordMessage<'a> {
    /// Message text, passed through unchanged.
    pub content: &'a str,
}

impl<'a> DiscordMessage<'a> {
    /// Wraps `content` in a payload.
    #[must_use]
    pub const fn new(content: &'a str) -> Self {
        Self { content }
    }

    /// Encodes the payload as a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Encoding`] if serialization fails.
    pub fn to_body(&self) -> Result<Vec<u8>, WebhookError> {
        serde_json::to_vec(self).map_err(WebhookError::Encoding)
    }
}

/// Discord webhook client.
///
/// Posts `{"content": "..."}` with `Content-Type: application/json` and
/// treats any 2xx status as success. Exactly one request is made per
/// message; failures are never retried.
///
/// # Example
///
/// ```no_run
/// use discord_webhook::webhook::{DiscordWebhook, MessageSender, ReqwestClient};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let webhook = DiscordWebhook::new(ReqwestClient::with_timeout(Duration::from_secs(10))?);
/// webhook
///     .send_message("https://discord.com/api/webhooks/1/token", "Deploy finished")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DiscordWebhook<H> {
    client: H,
}

impl<H> DiscordWebhook<H> {
    /// Creates a webhook client that sends through `client`.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self { client }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }
}

impl<H: HttpClient> MessageSender for DiscordWebhook<H> {
    async fn send_message(&self, webhook_url: &str, content: &str) -> Result<(), WebhookError> {
        let request = build_request(webhook_url, content)?;
        tracing::debug!(
            host = request.url.host_str().unwrap_or_default(),
            bytes = request.body.as_ref().map_or(0, Vec::len),
            "Posting message to webhook"
        );

        let response = self.client.request(request).await?;
        if !response.is_success() {
            tracing::debug!(status = response.status.as_u16(), "Webhook rejected message");
            return Err(WebhookError::Api {
                status: response.status,
            });
        }

        tracing::info!(status = response.status.as_u16(), "Message delivered");
        Ok(())
    }
}

/// Validates `content` and builds the POST request for it.
///
/// Content is checked first, so an empty message never reaches URL parsing
/// or the network.
fn build_request(webhook_url: &str, content: &str) -> Result<HttpRequest, WebhookError> {
    if content.trim().is_empty() {
        return Err(WebhookError::EmptyMessage);
    }

    let body = DiscordMessage::new(content).to_body()?;
    let url = url::Url::parse(webhook_url).map_err(|e| HttpError::InvalidUrl(e.to_string()))?;

    Ok(HttpRequest::post(url)
        .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .with_body(body))
}

//! Configuration keys accepted by `config set` and `config get`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A key that can be read or written through the `config` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// The Discord webhook URL messages are posted to.
    WebhookUrl,
}

impl ConfigKey {
    /// Every supported key, in display order.
    pub const ALL: [Self; 1] = [Self::WebhookUrl];

    /// Returns the name used on the command line and in the JSON file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WebhookUrl => "webhook_url",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The given key is not one of [`ConfigKey::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported configuration key: {0}")]
pub struct UnsupportedKey(pub String);

impl FromStr for ConfigKey {
    type Err = UnsupportedKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnsupportedKey(s.to_string()))
    }
}

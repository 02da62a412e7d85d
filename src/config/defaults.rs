//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Name of the per-user configuration directory.
pub const CONFIG_DIR_NAME: &str = ".discord-webhook";

/// Name of the configuration file inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Total timeout for a webhook request, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Total timeout for a webhook request as Duration.
#[must_use]
pub const fn request_timeout() -> Duration {
    Duration::from_secs(REQUEST_TIMEOUT_SECS)
}

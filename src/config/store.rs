//! File-based configuration persistence.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use super::{ConfigError, ConfigKey, defaults};

/// The persisted configuration.
///
/// Stored as a single JSON object:
///
/// ```json
/// {
///   "webhook_url": "https://discord.com/api/webhooks/{id}/{token}"
/// }
/// ```
///
/// Unknown fields are ignored on load, and a missing or `null`
/// `webhook_url` reads as the empty string. No URL validation happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    /// Webhook URL messages are posted to; empty when not configured.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub webhook_url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ConfigRecord {
    /// Creates a record with the given webhook URL.
    #[must_use]
    pub fn with_webhook_url(url: impl Into<String>) -> Self {
        Self {
            webhook_url: url.into(),
        }
    }

    /// Loads the record stored at `path`.
    ///
    /// A missing file yields the empty record.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileRead`] if the file exists but cannot be read,
    /// or [`ConfigError::Parse`] if it is not a JSON object of the expected shape.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No config file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::FileRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let record = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(record)
    }

    /// Saves the record to `path`, replacing any existing content.
    ///
    /// Missing parent directories are created. The content is written to
    /// `{path}.tmp` and renamed into place, so readers see either the old or
    /// the new record.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if encoding fails, or
    /// [`ConfigError::FileWrite`] if a directory or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let mut content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        content.push('\n');

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_config_dir(parent).map_err(|source| ConfigError::FileWrite {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        // config.json -> config.json.tmp, not config.tmp
        let temp_path = PathBuf::from(format!("{}.tmp", path.display()));
        let write_err = |source| ConfigError::FileWrite {
            path: path.to_path_buf(),
            source,
        };

        let written =
            std::fs::write(&temp_path, content).and_then(|()| std::fs::rename(&temp_path, path));
        if let Err(e) = written {
            let _ = std::fs::remove_file(&temp_path);
            return Err(write_err(e));
        }

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::WebhookUrl => &self.webhook_url,
        }
    }

    /// Replaces the value stored under `key`.
    pub fn set(&mut self, key: ConfigKey, value: impl Into<String>) {
        match key {
            ConfigKey::WebhookUrl => self.webhook_url = value.into(),
        }
    }
}

#[cfg(unix)]
fn create_config_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o755)
        .create(dir)
}

#[cfg(not(unix))]
fn create_config_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)
}

/// Returns the default configuration file location.
///
/// `<home>/.discord-webhook/config.json`, or the same layout under the system
/// temporary directory when no absolute home directory can be determined.
/// Evaluated on every call; nothing is cached.
#[must_use]
pub fn default_config_path() -> PathBuf {
    let base = dirs::home_dir()
        .filter(|home| home.is_absolute())
        .unwrap_or_else(std::env::temp_dir);

    base.join(defaults::CONFIG_DIR_NAME)
        .join(defaults::CONFIG_FILE_NAME)
}

/// Returns `explicit` unless it is absent or empty, otherwise the default path.
#[must_use]
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .filter(|path| !path.as_os_str().is_empty())
        .map_or_else(default_config_path, Path::to_path_buf)
}

//! The `config set` and `config get` commands.

use std::io::Write;
use std::path::Path;

use crate::config::{ConfigKey, ConfigRecord, resolve_config_path};

use super::CommandError;

/// Stores `value` under `key` in the configuration file.
///
/// The key is checked before the file is touched. Fields the record does
/// not know are dropped when the file is rewritten.
///
/// # Errors
///
/// Returns [`CommandError::UnsupportedKey`] for unknown keys,
/// [`CommandError::ConfigLoad`] / [`CommandError::ConfigSave`] for file
/// errors, or [`CommandError::Output`] if `out` cannot be written.
pub fn run_config_set<W: Write>(
    config_path: Option<&Path>,
    key: &str,
    value: &str,
    out: &mut W,
) -> Result<(), CommandError> {
    let key: ConfigKey = key.parse()?;
    let path = resolve_config_path(config_path);

    let mut record = ConfigRecord::load(&path).map_err(CommandError::ConfigLoad)?;
    record.set(key, value);
    record.save(&path).map_err(CommandError::ConfigSave)?;

    tracing::debug!("Updated {key} in {}", path.display());
    writeln!(out, "Configuration '{key}' set to '{value}'").map_err(CommandError::Output)
}

/// Prints configuration values.
///
/// Without a key, every supported key is listed as `key: value`. With a key,
/// only its value is printed.
///
/// # Errors
///
/// Returns [`CommandError::UnsupportedKey`] for unknown keys,
/// [`CommandError::ConfigLoad`] if the file cannot be loaded, or
/// [`CommandError::Output`] if `out` cannot be written.
pub fn run_config_get<W: Write>(
    config_path: Option<&Path>,
    key: Option<&str>,
    out: &mut W,
) -> Result<(), CommandError> {
    let key = key
        .filter(|k| !k.is_empty())
        .map(str::parse::<ConfigKey>)
        .transpose()?;
    let path = resolve_config_path(config_path);
    let record = ConfigRecord::load(&path).map_err(CommandError::ConfigLoad)?;

    let written = match key {
        Some(key) => writeln!(out, "{}", record.get(key)),
        None => ConfigKey::ALL
            .into_iter()
            .try_for_each(|key| writeln!(out, "{key}: {}", record.get(key))),
    };
    written.map_err(CommandError::Output)
}

//! Layered settings loading from files and the environment.
//!
//! # Design
//! - Base TOML file (default `veranda.toml`, optional) overlaid with
//!   `VERANDA__`-prefixed environment variables.
//! - Deserialization goes through the same `Settings` model used by the
//!   pair-based factory interface, so both paths validate identically.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use tracing::info;

use crate::error::{ConfigError, ConfigResult};
use crate::model::Settings;
use crate::validate::validate;

/// Environment variable prefix recognised by the loader.
pub const ENV_PREFIX: &str = "VERANDA";

/// Default settings file consulted when no explicit path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "veranda.toml";

/// Load settings from an optional TOML file overlaid with environment
/// variables.
///
/// An explicit `path` must exist; the default file is optional so a bare
/// checkout starts from the built-in defaults.
///
/// # Errors
///
/// Returns an error when the file cannot be read, a key is not
/// recognised, or a value fails deserialization or validation.
pub fn load_settings(path: Option<&Path>) -> ConfigResult<Settings> {
    let (file, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
        |explicit| (explicit.to_path_buf(), true),
    );

    info!(path = %file.display(), "Loading settings");

    let layered = Config::builder()
        .add_source(File::from(file.as_path()).required(required))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .map_err(|source| ConfigError::Load {
            operation: "settings.build",
            source,
        })?;

    let settings: Settings = layered
        .try_deserialize()
        .map_err(|source| ConfigError::Load {
            operation: "settings.deserialize",
            source,
        })?;

    validate(&settings)?;
    Ok(settings)
}

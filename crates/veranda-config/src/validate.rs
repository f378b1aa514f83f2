//! Validation helpers and parsing utilities for settings values.

use std::net::IpAddr;

use crate::error::{ConfigError, ConfigResult};
use crate::model::Settings;

pub(crate) fn parse_bind_addr(value: &str) -> ConfigResult<IpAddr> {
    value.parse().map_err(|_| ConfigError::InvalidBindAddr {
        value: value.to_string(),
    })
}

pub(crate) fn parse_port(value: &str) -> ConfigResult<u16> {
    let port: u16 = value.parse().map_err(|_| ConfigError::InvalidPort {
        value: value.to_string(),
    })?;
    if port == 0 {
        return Err(ConfigError::InvalidPort {
            value: value.to_string(),
        });
    }
    Ok(port)
}

pub(crate) fn parse_bool(key: &'static str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: Some(value.to_string()),
            reason: "not_a_boolean",
        }),
    }
}

/// Check cross-field constraints the serde layer cannot express.
///
/// # Errors
///
/// Returns an error when the port is zero, the static route is not a
/// single path segment, or the home view name is not an identifier.
pub fn validate(settings: &Settings) -> ConfigResult<()> {
    if settings.http_port == 0 {
        return Err(ConfigError::InvalidPort {
            value: settings.http_port.to_string(),
        });
    }
    if !is_path_segment(&settings.static_route) {
        return Err(ConfigError::InvalidValue {
            key: "static_route",
            value: Some(settings.static_route.clone()),
            reason: "not_a_path_segment",
        });
    }
    if !is_identifier(&settings.home_view) {
        return Err(ConfigError::InvalidValue {
            key: "home_view",
            value: Some(settings.home_view.clone()),
            reason: "not_an_identifier",
        });
    }
    Ok(())
}

fn is_path_segment(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

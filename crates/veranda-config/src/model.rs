//! Typed application settings.
//!
//! # Design
//! - Pure data carrier consumed by the site factory.
//! - Parsing from raw key/value pairs lives here; file and environment
//!   layering lives in `loader.rs`.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::validate::{parse_bind_addr, parse_bool, parse_port, validate};

/// Default HTTP port for the development server.
pub const DEFAULT_HTTP_PORT: u16 = 6543;

/// Typed application settings consumed by the site factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Friendly identifier displayed in diagnostics.
    pub instance_name: String,
    /// IP address the HTTP listener should bind to.
    pub bind_addr: IpAddr,
    /// HTTP port the listener should bind to.
    pub http_port: u16,
    /// Directory served under the static route.
    pub static_dir: PathBuf,
    /// Mount name for the static asset route.
    pub static_route: String,
    /// Name of the view callable bound to the home route.
    pub home_view: String,
    /// Whether the debug toolbar routes are mounted.
    pub debug_toolbar: bool,
    /// Fallback log level when `RUST_LOG` is absent.
    pub log_level: String,
    /// Log output format override (`json` or `pretty`).
    pub log_format: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            instance_name: "veranda".to_string(),
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            http_port: DEFAULT_HTTP_PORT,
            static_dir: PathBuf::from("static"),
            static_route: "static".to_string(),
            home_view: "hello_world".to_string(),
            debug_toolbar: true,
            log_level: "info".to_string(),
            log_format: None,
        }
    }
}

impl Settings {
    /// Build settings from a string-keyed mapping handed over by a
    /// hosting process.
    ///
    /// An empty mapping yields the defaults; unknown keys and malformed
    /// values are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error when a key is not recognised, a value fails to
    /// parse, or the assembled settings fail validation.
    pub fn from_pairs<I, K, V>(pairs: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut settings = Self::default();
        for (key, value) in pairs {
            settings.apply_pair(key.as_ref(), value.as_ref())?;
        }
        validate(&settings)?;
        Ok(settings)
    }

    fn apply_pair(&mut self, key: &str, value: &str) -> ConfigResult<()> {
        match key {
            "instance_name" => self.instance_name = value.to_string(),
            "bind_addr" => self.bind_addr = parse_bind_addr(value)?,
            "http_port" => self.http_port = parse_port(value)?,
            "static_dir" => self.static_dir = PathBuf::from(value),
            "static_route" => self.static_route = value.to_string(),
            "home_view" => self.home_view = value.to_string(),
            "debug_toolbar" => self.debug_toolbar = parse_bool("debug_toolbar", value)?,
            "log_level" => self.log_level = value.to_string(),
            "log_format" => self.log_format = Some(value.to_string()),
            other => {
                return Err(ConfigError::UnknownKey {
                    key: other.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mapping_yields_defaults() -> ConfigResult<()> {
        let settings = Settings::from_pairs(std::iter::empty::<(&str, &str)>())?;
        assert_eq!(settings, Settings::default());
        Ok(())
    }

    #[test]
    fn pairs_override_defaults() -> ConfigResult<()> {
        let settings = Settings::from_pairs([
            ("instance_name", "demo"),
            ("bind_addr", "0.0.0.0"),
            ("http_port", "8080"),
            ("static_dir", "assets"),
            ("debug_toolbar", "off"),
        ])?;
        assert_eq!(settings.instance_name, "demo");
        assert_eq!(settings.bind_addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(settings.http_port, 8080);
        assert_eq!(settings.static_dir, PathBuf::from("assets"));
        assert!(!settings.debug_toolbar);
        Ok(())
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = Settings::from_pairs([("colour", "blue")]).expect_err("expected unknown key");
        assert!(matches!(err, ConfigError::UnknownKey { key } if key == "colour"));
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(matches!(
            Settings::from_pairs([("bind_addr", "not-an-ip")]),
            Err(ConfigError::InvalidBindAddr { .. })
        ));
        assert!(matches!(
            Settings::from_pairs([("http_port", "0")]),
            Err(ConfigError::InvalidPort { .. })
        ));
        assert!(matches!(
            Settings::from_pairs([("http_port", "70000")]),
            Err(ConfigError::InvalidPort { .. })
        ));
        assert!(matches!(
            Settings::from_pairs([("debug_toolbar", "maybe")]),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn later_pairs_win() -> ConfigResult<()> {
        let settings = Settings::from_pairs([("http_port", "8080"), ("http_port", "9090")])?;
        assert_eq!(settings.http_port, 9090);
        Ok(())
    }
}

//! Error types for settings operations.

use thiserror::Error;

/// Primary error type for settings operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings key was not recognised.
    #[error("unknown settings key")]
    UnknownKey {
        /// Name of the unexpected key.
        key: String,
    },
    /// Settings value failed to parse or validate.
    #[error("invalid settings value")]
    InvalidValue {
        /// Key that failed.
        key: &'static str,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Bind address value was invalid.
    #[error("invalid bind address")]
    InvalidBindAddr {
        /// Bind address payload provided by the caller.
        value: String,
    },
    /// HTTP port value was invalid.
    #[error("invalid http port")]
    InvalidPort {
        /// Port payload provided by the caller.
        value: String,
    },
    /// Building or deserializing the layered settings failed.
    #[error("settings load failed")]
    Load {
        /// Operation identifier.
        operation: &'static str,
        /// Source loader error.
        source: config::ConfigError,
    },
}

/// Result alias for settings operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

//! # Design
//!
//! - Provide a single crate-level error type for site configuration, build,
//!   and serve failures.
//! - Keep error messages constant; capture registration context in
//!   structured fields.
//! - Preserve sources for diagnostics without double-logging.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::net::SocketAddr;

/// Result alias for site factory operations.
pub type WebResult<T> = std::result::Result<T, WebError>;

/// Errors raised while configuring, building, or serving a site.
#[derive(Debug)]
pub enum WebError {
    /// Settings handed to the factory failed to parse.
    Settings {
        /// Underlying settings error.
        source: veranda_config::ConfigError,
    },
    /// A route name was registered twice.
    DuplicateRoute {
        /// Name of the conflicting route.
        name: String,
    },
    /// A path pattern was registered twice.
    DuplicatePattern {
        /// Conflicting path pattern.
        pattern: String,
    },
    /// A path pattern was not usable by the router.
    InvalidPattern {
        /// Offending path pattern.
        pattern: String,
    },
    /// A view was bound to a route name that does not exist.
    UnknownRoute {
        /// Route name requested by the binding.
        route: String,
        /// View that requested the binding.
        view: String,
    },
    /// A route already has a view bound to it.
    RouteAlreadyBound {
        /// Route name that was already covered.
        route: String,
        /// View that attempted the second binding.
        view: String,
    },
    /// No declared view matches the requested name.
    ViewNotFound {
        /// View name that failed to resolve.
        view: String,
    },
    /// More than one declared view claims the requested name.
    DuplicateView {
        /// View name with conflicting declarations.
        view: String,
    },
    /// Binding the site listener failed.
    Bind {
        /// Address attempted.
        addr: SocketAddr,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Serving the site failed.
    Serve {
        /// Underlying IO error.
        source: std::io::Error,
    },
}

impl Display for WebError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Settings { .. } => formatter.write_str("settings were invalid"),
            Self::DuplicateRoute { .. } => formatter.write_str("route name already registered"),
            Self::DuplicatePattern { .. } => formatter.write_str("path pattern already registered"),
            Self::InvalidPattern { .. } => formatter.write_str("path pattern is not usable"),
            Self::UnknownRoute { .. } => formatter.write_str("route name is not registered"),
            Self::RouteAlreadyBound { .. } => formatter.write_str("route already has a view bound"),
            Self::ViewNotFound { .. } => formatter.write_str("view is not declared"),
            Self::DuplicateView { .. } => formatter.write_str("view name declared more than once"),
            Self::Bind { .. } => formatter.write_str("failed to bind site listener"),
            Self::Serve { .. } => formatter.write_str("site server terminated unexpectedly"),
        }
    }
}

impl Error for WebError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Settings { source } => Some(source),
            Self::Bind { source, .. } | Self::Serve { source } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn web_error_display_and_source() -> Result<(), Box<dyn Error>> {
        let settings = WebError::Settings {
            source: veranda_config::ConfigError::UnknownKey {
                key: "colour".to_string(),
            },
        };
        assert_eq!(settings.to_string(), "settings were invalid");
        assert!(settings.source().is_some());

        let duplicate = WebError::DuplicateRoute {
            name: "home".to_string(),
        };
        assert_eq!(duplicate.to_string(), "route name already registered");
        assert!(duplicate.source().is_none());

        let unknown = WebError::UnknownRoute {
            route: "missing".to_string(),
            view: "hello_world".to_string(),
        };
        assert_eq!(unknown.to_string(), "route name is not registered");

        let bind = WebError::Bind {
            addr: "127.0.0.1:6543".parse()?,
            source: io::Error::new(io::ErrorKind::AddrInUse, "busy"),
        };
        assert_eq!(bind.to_string(), "failed to bind site listener");
        assert!(bind.source().is_some());

        let serve = WebError::Serve {
            source: io::Error::new(io::ErrorKind::BrokenPipe, "lost"),
        };
        assert_eq!(serve.to_string(), "site server terminated unexpectedly");
        assert!(serve.source().is_some());
        Ok(())
    }
}

//! Declared view callables and the discovery registry.
//!
//! Views are declared statically in this module tree; the factory's scan
//! step walks `declared()` instead of importing modules at startup, so a
//! missing or renamed declaration surfaces as a resolution error rather
//! than an import failure.

pub mod home;

use std::sync::Arc;

use axum::routing::{MethodRouter, get};

use crate::error::{WebError, WebResult};
use crate::state::SiteState;

/// A single declared view callable.
#[derive(Clone)]
pub struct ViewEntry {
    name: &'static str,
    route: Option<&'static str>,
    handler: MethodRouter<Arc<SiteState>>,
}

impl ViewEntry {
    /// Declare a view callable, optionally hinting the route it serves.
    #[must_use]
    pub fn new(
        name: &'static str,
        route: Option<&'static str>,
        handler: MethodRouter<Arc<SiteState>>,
    ) -> Self {
        Self {
            name,
            route,
            handler,
        }
    }

    /// Name the view resolves under.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Route hint consumed by the discovery scan.
    #[must_use]
    pub fn route(&self) -> Option<&'static str> {
        self.route
    }

    pub(crate) fn handler(&self) -> MethodRouter<Arc<SiteState>> {
        self.handler.clone()
    }
}

/// Registry of view callables declared by a package.
#[derive(Clone, Default)]
pub struct ViewRegistry {
    entries: Vec<ViewEntry>,
}

impl ViewRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry over a fixed set of declarations.
    #[must_use]
    pub fn from_entries(entries: Vec<ViewEntry>) -> Self {
        Self { entries }
    }

    /// Declared entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[ViewEntry] {
        &self.entries
    }

    /// Resolve a view callable by name.
    ///
    /// # Errors
    ///
    /// Returns an error when no declaration matches or when the name is
    /// claimed by more than one declaration.
    pub fn resolve(&self, name: &str) -> WebResult<&ViewEntry> {
        let mut matches = self.entries.iter().filter(|entry| entry.name == name);
        let Some(first) = matches.next() else {
            return Err(WebError::ViewNotFound {
                view: name.to_string(),
            });
        };
        if matches.next().is_some() {
            return Err(WebError::DuplicateView {
                view: name.to_string(),
            });
        }
        Ok(first)
    }
}

/// Every view callable declared by this package.
#[must_use]
pub fn declared() -> ViewRegistry {
    ViewRegistry::from_entries(vec![ViewEntry::new(
        "hello_world",
        Some("home"),
        get(home::hello_world),
    )])
}

//! Shared application state exposed to views and toolbar handlers.

use serde::Serialize;
use veranda_config::Settings;

/// Immutable per-application state shared through the router.
///
/// Each built site owns its own state; nothing is shared between two
/// applications produced from the same settings.
pub struct SiteState {
    settings: Settings,
    routes: Vec<RouteInfo>,
}

impl SiteState {
    pub(crate) fn new(settings: Settings, routes: Vec<RouteInfo>) -> Self {
        Self { settings, routes }
    }

    /// Settings snapshot the application was built from.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Route table snapshot, including static mounts.
    pub fn routes(&self) -> &[RouteInfo] {
        &self.routes
    }
}

/// One row of the route-table snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct RouteInfo {
    /// Route name.
    pub name: String,
    /// URL path pattern.
    pub pattern: String,
    /// Bound view callable, when any.
    pub view: Option<String>,
}

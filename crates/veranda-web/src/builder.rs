//! Scoped site configuration and router construction.
//!
//! `SiteBuilder` plays the configurator role: named routes, static
//! mounts, extensions, and view bindings accumulate on the builder and
//! are materialized into an axum router exactly once, when `build`
//! consumes it. Registration conflicts surface here as typed errors
//! instead of router panics.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::routing::MethodRouter;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use veranda_config::Settings;

use crate::error::{WebError, WebResult};
use crate::state::{RouteInfo, SiteState};
use crate::toolbar;
use crate::views::{ViewEntry, ViewRegistry};

/// An includable extension that augments a site builder.
pub trait Extension {
    /// Apply this extension's configuration to the builder.
    fn apply(&self, builder: &mut SiteBuilder);
}

struct BoundView {
    name: String,
    handler: MethodRouter<Arc<SiteState>>,
}

struct RouteEntry {
    name: String,
    pattern: String,
    view: Option<BoundView>,
}

struct StaticMount {
    name: String,
    dir: PathBuf,
}

impl StaticMount {
    fn pattern(&self) -> String {
        format!("/{}", self.name)
    }
}

/// Scoped configuration context for assembling a site.
pub struct SiteBuilder {
    settings: Settings,
    routes: Vec<RouteEntry>,
    static_mounts: Vec<StaticMount>,
    toolbar: bool,
}

impl SiteBuilder {
    /// Open a configuration context over a settings snapshot.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            routes: Vec::new(),
            static_mounts: Vec::new(),
            toolbar: false,
        }
    }

    /// Apply an includable extension to this builder.
    pub fn include<E: Extension>(&mut self, extension: E) {
        extension.apply(self);
    }

    pub(crate) fn enable_toolbar(&mut self) {
        self.toolbar = true;
    }

    /// Register a static asset route serving files from `dir`.
    ///
    /// The route is mounted under `/<name>`.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is already taken or is not a
    /// single path segment.
    pub fn add_static_view(&mut self, name: &str, dir: &Path) -> WebResult<()> {
        if name.is_empty() || name.contains('/') {
            return Err(WebError::InvalidPattern {
                pattern: name.to_string(),
            });
        }
        self.ensure_name_free(name)?;
        let mount = StaticMount {
            name: name.to_string(),
            dir: dir.to_path_buf(),
        };
        self.ensure_pattern_free(&mount.pattern())?;
        debug!(route = name, dir = %dir.display(), "registered static view");
        self.static_mounts.push(mount);
        Ok(())
    }

    /// Register a named route for `pattern`.
    ///
    /// # Errors
    ///
    /// Returns an error when the name or pattern is already taken, or
    /// when the pattern is not rooted.
    pub fn add_route(&mut self, name: &str, pattern: &str) -> WebResult<()> {
        if !pattern.starts_with('/') {
            return Err(WebError::InvalidPattern {
                pattern: pattern.to_string(),
            });
        }
        self.ensure_name_free(name)?;
        self.ensure_pattern_free(pattern)?;
        debug!(route = name, pattern, "registered route");
        self.routes.push(RouteEntry {
            name: name.to_string(),
            pattern: pattern.to_string(),
            view: None,
        });
        Ok(())
    }

    /// Bind a declared view to a registered route.
    ///
    /// # Errors
    ///
    /// Returns an error when the route name is not registered or already
    /// has a view bound.
    pub fn add_view(&mut self, view: &ViewEntry, route_name: &str) -> WebResult<()> {
        let Some(entry) = self
            .routes
            .iter_mut()
            .find(|entry| entry.name == route_name)
        else {
            return Err(WebError::UnknownRoute {
                route: route_name.to_string(),
                view: view.name().to_string(),
            });
        };
        if entry.view.is_some() {
            return Err(WebError::RouteAlreadyBound {
                route: route_name.to_string(),
                view: view.name().to_string(),
            });
        }
        debug!(route = route_name, view = view.name(), "bound view");
        entry.view = Some(BoundView {
            name: view.name().to_string(),
            handler: view.handler(),
        });
        Ok(())
    }

    /// Bind every declared view whose route hint names a registered,
    /// still-uncovered route.
    ///
    /// Explicit bindings win: a hint for an already-covered route is
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error when a hint names a route that was never
    /// registered.
    pub fn scan(&mut self, registry: &ViewRegistry) -> WebResult<()> {
        for view in registry.entries() {
            let Some(route_name) = view.route() else {
                continue;
            };
            let already_bound = match self.routes.iter().find(|entry| entry.name == route_name) {
                Some(entry) => entry.view.is_some(),
                None => {
                    return Err(WebError::UnknownRoute {
                        route: route_name.to_string(),
                        view: view.name().to_string(),
                    });
                }
            };
            if already_bound {
                continue;
            }
            self.add_view(view, route_name)?;
        }
        Ok(())
    }

    /// Materialize the site; the configuration context is released here.
    #[must_use]
    pub fn build(self) -> Site {
        let mut table = Vec::with_capacity(self.routes.len() + self.static_mounts.len());
        for entry in &self.routes {
            table.push(RouteInfo {
                name: entry.name.clone(),
                pattern: entry.pattern.clone(),
                view: entry.view.as_ref().map(|bound| bound.name.clone()),
            });
        }
        for mount in &self.static_mounts {
            table.push(RouteInfo {
                name: mount.name.clone(),
                pattern: mount.pattern(),
                view: Some(format!("static:{}", mount.dir.display())),
            });
        }
        let state = Arc::new(SiteState::new(self.settings, table));

        let mut router: Router<Arc<SiteState>> = Router::new();
        for entry in self.routes {
            if let Some(bound) = entry.view {
                router = router.route(&entry.pattern, bound.handler);
            }
        }
        for mount in self.static_mounts {
            router = router.nest_service(&mount.pattern(), ServeDir::new(mount.dir));
        }
        if self.toolbar {
            router = router.merge(toolbar::routes());
        }
        let router = router
            .layer(TraceLayer::new_for_http())
            .with_state(state);
        Site { router }
    }

    fn ensure_name_free(&self, name: &str) -> WebResult<()> {
        let taken = self.routes.iter().any(|entry| entry.name == name)
            || self.static_mounts.iter().any(|mount| mount.name == name);
        if taken {
            return Err(WebError::DuplicateRoute {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn ensure_pattern_free(&self, pattern: &str) -> WebResult<()> {
        let taken = self.routes.iter().any(|entry| entry.pattern == pattern)
            || self
                .static_mounts
                .iter()
                .any(|mount| mount.pattern() == pattern);
        if taken {
            return Err(WebError::DuplicatePattern {
                pattern: pattern.to_string(),
            });
        }
        Ok(())
    }
}

/// A finished web application ready to serve.
pub struct Site {
    router: Router,
}

impl Site {
    /// Consume the site and return the underlying router.
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve the site on the supplied address.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server
    /// terminates unexpectedly.
    pub async fn serve(self, addr: SocketAddr) -> WebResult<()> {
        info!("Starting site on {}", addr);
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| WebError::Bind { addr, source })?;
        axum::serve(listener, self.router.into_make_service())
            .await
            .map_err(|source| WebError::Serve { source })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views;
    use axum::routing::get;

    fn builder() -> SiteBuilder {
        SiteBuilder::new(Settings::default())
    }

    #[test]
    fn duplicate_route_names_are_rejected() -> WebResult<()> {
        let mut builder = builder();
        builder.add_route("home", "/")?;
        let err = builder
            .add_route("home", "/elsewhere")
            .expect_err("expected duplicate name");
        assert!(matches!(err, WebError::DuplicateRoute { name } if name == "home"));
        Ok(())
    }

    #[test]
    fn duplicate_patterns_are_rejected() -> WebResult<()> {
        let mut builder = builder();
        builder.add_route("home", "/")?;
        let err = builder
            .add_route("landing", "/")
            .expect_err("expected duplicate pattern");
        assert!(matches!(err, WebError::DuplicatePattern { pattern } if pattern == "/"));
        Ok(())
    }

    #[test]
    fn unrooted_patterns_are_rejected() {
        let mut builder = builder();
        let err = builder
            .add_route("home", "index")
            .expect_err("expected invalid pattern");
        assert!(matches!(err, WebError::InvalidPattern { .. }));
    }

    #[test]
    fn static_view_conflicts_with_route_names() -> WebResult<()> {
        let mut builder = builder();
        builder.add_route("assets", "/assets-page")?;
        let err = builder
            .add_static_view("assets", Path::new("static"))
            .expect_err("expected duplicate name");
        assert!(matches!(err, WebError::DuplicateRoute { .. }));

        let err = builder
            .add_static_view("with/slash", Path::new("static"))
            .expect_err("expected invalid mount name");
        assert!(matches!(err, WebError::InvalidPattern { .. }));
        Ok(())
    }

    #[test]
    fn views_bind_only_to_known_unbound_routes() -> WebResult<()> {
        let registry = views::declared();
        let view = registry.resolve("hello_world")?;

        let mut builder = builder();
        let err = builder
            .add_view(view, "home")
            .expect_err("expected unknown route");
        assert!(matches!(err, WebError::UnknownRoute { .. }));

        builder.add_route("home", "/")?;
        builder.add_view(view, "home")?;
        let err = builder
            .add_view(view, "home")
            .expect_err("expected bound route");
        assert!(matches!(err, WebError::RouteAlreadyBound { .. }));
        Ok(())
    }

    #[test]
    fn scan_skips_bound_routes_and_rejects_unknown_hints() -> WebResult<()> {
        let registry = views::declared();

        let mut builder = builder();
        let err = builder
            .scan(&registry)
            .expect_err("expected unknown route hint");
        assert!(matches!(err, WebError::UnknownRoute { route, .. } if route == "home"));

        let mut builder = self::builder();
        builder.add_route("home", "/")?;
        builder.add_view(registry.resolve("hello_world")?, "home")?;
        builder.scan(&registry)?;
        Ok(())
    }

    #[test]
    fn scan_binds_views_by_route_hint() -> WebResult<()> {
        let mut builder = builder();
        builder.add_route("home", "/")?;
        builder.scan(&views::declared())?;
        let bound = builder
            .routes
            .iter()
            .find(|entry| entry.name == "home")
            .and_then(|entry| entry.view.as_ref())
            .map(|view| view.name.clone());
        assert_eq!(bound.as_deref(), Some("hello_world"));
        Ok(())
    }

    #[test]
    fn build_materializes_mixed_routes() -> WebResult<()> {
        let mut builder = builder();
        builder.add_static_view("static", Path::new("static"))?;
        builder.add_route("home", "/")?;
        builder.add_route("about", "/about")?;
        builder.add_view(
            &ViewEntry::new("about_page", None, get(views::home::hello_world)),
            "about",
        )?;
        let site = builder.build();
        let _ = site.into_router();
        Ok(())
    }
}

//! Debug toolbar extension: introspection routes for development.
//!
//! Mounted only when the extension is included on the builder; the
//! binary bootstrap additionally refuses to expose a toolbar-enabled
//! listener beyond loopback.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::builder::{Extension, SiteBuilder};
use crate::state::{RouteInfo, SiteState};

/// Path the toolbar summary is mounted under.
pub const TOOLBAR_PATH: &str = "/_toolbar";

/// Development toolbar extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugToolbar;

impl Extension for DebugToolbar {
    fn apply(&self, builder: &mut SiteBuilder) {
        builder.enable_toolbar();
    }
}

#[derive(Serialize)]
struct ToolbarSummary {
    instance_name: String,
    bind_addr: String,
    http_port: u16,
    routes: usize,
}

pub(crate) fn routes() -> Router<Arc<SiteState>> {
    Router::new()
        .route(TOOLBAR_PATH, get(summary))
        .route("/_toolbar/routes", get(route_table))
}

async fn summary(State(state): State<Arc<SiteState>>) -> Json<ToolbarSummary> {
    let settings = state.settings();
    Json(ToolbarSummary {
        instance_name: settings.instance_name.clone(),
        bind_addr: settings.bind_addr.to_string(),
        http_port: settings.http_port,
        routes: state.routes().len(),
    })
}

async fn route_table(State(state): State<Arc<SiteState>>) -> Json<Vec<RouteInfo>> {
    Json(state.routes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use veranda_config::Settings;

    fn sample_state() -> Arc<SiteState> {
        Arc::new(SiteState::new(
            Settings::default(),
            vec![
                RouteInfo {
                    name: "home".to_string(),
                    pattern: "/".to_string(),
                    view: Some("hello_world".to_string()),
                },
                RouteInfo {
                    name: "static".to_string(),
                    pattern: "/static".to_string(),
                    view: Some("static:static".to_string()),
                },
            ],
        ))
    }

    #[tokio::test]
    async fn summary_reports_settings_and_route_count() {
        let Json(body) = summary(State(sample_state())).await;
        assert_eq!(body.instance_name, "veranda");
        assert_eq!(body.bind_addr, "127.0.0.1");
        assert_eq!(body.http_port, veranda_config::DEFAULT_HTTP_PORT);
        assert_eq!(body.routes, 2);
    }

    #[tokio::test]
    async fn route_table_dumps_every_row() {
        let Json(rows) = route_table(State(sample_state())).await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "home");
        assert_eq!(rows[1].view.as_deref(), Some("static:static"));
    }
}

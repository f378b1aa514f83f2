//! Veranda site factory: a configurable web application builder.
//!
//! Layout: `builder.rs` (configuration context and router build),
//! `factory.rs` (the application factory sequence), `views/` (declared
//! view callables and the discovery registry), `toolbar.rs` (debug
//! toolbar extension), `state.rs` (shared application state).

pub mod builder;
pub mod error;
pub mod factory;
pub mod state;
pub mod toolbar;
pub mod views;

pub use builder::{Extension, Site, SiteBuilder};
pub use error::{WebError, WebResult};
pub use factory::{make_site, make_site_from_pairs};
pub use state::{RouteInfo, SiteState};
pub use toolbar::DebugToolbar;
pub use views::{ViewEntry, ViewRegistry};

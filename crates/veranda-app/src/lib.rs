#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Veranda application bootstrap wiring.
//!
//! Layout: `bootstrap.rs` (settings/logging/server wiring),
//! `telemetry.rs` (subscriber installation), `error.rs` (application
//! error type).

/// Application bootstrap and environment loading.
pub mod bootstrap;
/// Application-level error types.
pub mod error;
/// Logging installation.
pub mod telemetry;

pub use bootstrap::run_app;
pub use error::{AppError, AppResult};

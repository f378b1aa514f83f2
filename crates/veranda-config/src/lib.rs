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

//! Typed settings for the Veranda site factory.
//!
//! Layout: `model.rs` (settings carrier and pair-based parsing),
//! `loader.rs` (file + environment layering), `validate.rs`
//! (parse/validation helpers).

pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::{DEFAULT_SETTINGS_FILE, ENV_PREFIX, load_settings};
pub use model::{DEFAULT_HTTP_PORT, Settings};

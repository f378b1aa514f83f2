//! Application bootstrap: settings, logging, factory, serving.

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{error, info};
use veranda_config::{Settings, load_settings};
use veranda_web::make_site;

use crate::error::{AppError, AppResult};
use crate::telemetry::{self, LogFormat, LoggingConfig};

/// Environment variable naming an explicit settings file.
pub const SETTINGS_PATH_ENV: &str = "VERANDA_CONFIG";

/// Entry point for the application boot sequence.
///
/// # Errors
///
/// Returns an error if settings loading, logging installation, site
/// construction, or server startup fails.
pub async fn run_app() -> AppResult<()> {
    let settings = load_settings(settings_path_from_env().as_deref())
        .map_err(|err| AppError::config("settings.load", err))?;

    let logging = LoggingConfig {
        level: &settings.log_level,
        format: LogFormat::from_setting(settings.log_format.as_deref()),
    };
    telemetry::init_logging(&logging).map_err(|err| AppError::telemetry("telemetry.init", err))?;

    info!(instance = %settings.instance_name, "Veranda application bootstrap starting");

    let site = make_site(&settings).map_err(|err| AppError::site("site.make", err))?;

    enforce_toolbar_loopback_guard(&settings)?;

    let addr = SocketAddr::new(settings.bind_addr, settings.http_port);
    info!(addr = %addr, "Launching site listener");

    site.serve(addr)
        .await
        .map_err(|err| AppError::site("site.serve", err))?;
    info!("Site server shutdown complete");
    Ok(())
}

fn settings_path_from_env() -> Option<PathBuf> {
    std::env::var_os(SETTINGS_PATH_ENV).map(PathBuf::from)
}

/// The toolbar exposes configuration internals; refuse to serve it on a
/// non-loopback interface.
fn enforce_toolbar_loopback_guard(settings: &Settings) -> AppResult<()> {
    if settings.debug_toolbar && !settings.bind_addr.is_loopback() {
        error!(
            bind_addr = %settings.bind_addr,
            "refusing to bind toolbar-enabled listener to non-loopback address"
        );
        return Err(AppError::InvalidConfig {
            field: "bind_addr",
            reason: "non_loopback_with_toolbar",
            value: Some(settings.bind_addr.to_string()),
        });
    }
    Ok(())
}

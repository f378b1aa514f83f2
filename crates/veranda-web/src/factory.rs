//! The application factory: settings in, a ready-to-serve site out.

use tracing::warn;
use veranda_config::Settings;

use crate::builder::{Site, SiteBuilder};
use crate::error::{WebError, WebResult};
use crate::toolbar::DebugToolbar;
use crate::views;

/// Build a site from a settings snapshot.
///
/// Home view resolution is deliberately best-effort: a missing or
/// conflicting declaration is logged and skipped so a restructured views
/// module cannot abort startup. The discovery scan may still cover the
/// home route through a declared route hint.
///
/// # Errors
///
/// Returns an error when route registration conflicts or a discovered
/// view hints at an unknown route.
pub fn make_site(settings: &Settings) -> WebResult<Site> {
    let mut builder = SiteBuilder::new(settings.clone());
    if settings.debug_toolbar {
        builder.include(DebugToolbar);
    }
    builder.add_static_view(&settings.static_route, &settings.static_dir)?;
    builder.add_route("home", "/")?;

    let registry = views::declared();
    match registry.resolve(&settings.home_view) {
        Ok(view) => builder.add_view(view, "home")?,
        Err(err) => {
            warn!(
                view = %settings.home_view,
                error = %err,
                "home view unavailable; continuing without explicit binding"
            );
        }
    }
    builder.scan(&registry)?;

    Ok(builder.build())
}

/// Build a site straight from a string-keyed settings mapping.
///
/// # Errors
///
/// Returns settings parse failures alongside the factory's own
/// registration errors.
pub fn make_site_from_pairs<I, K, V>(pairs: I) -> WebResult<Site>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let settings = Settings::from_pairs(pairs).map_err(|source| WebError::Settings { source })?;
    make_site(&settings)
}

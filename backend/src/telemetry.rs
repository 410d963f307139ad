//! Tracing subscriber installation.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::CatalogSettings;

/// Install the global fmt subscriber filtered by `RUST_LOG`.
///
/// JSON output is selected by [`CatalogSettings::json_logs`]. A second
/// call leaves the existing subscriber in place and logs a warning.
pub fn init_tracing(settings: &CatalogSettings) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let installed = if settings.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = installed {
        warn!(error = %e, "tracing init failed");
    }
}

//! Tracing setup for processes hosting the catalog.

use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber filtered by `RUST_LOG`, or `default_filter`
/// when `RUST_LOG` is unset or invalid.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - every repository and service call
/// - `RUST_LOG=catalog_db=trace` - only the database crate
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

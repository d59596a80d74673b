//! Logging setup for binaries built on this crate.

use tracing_subscriber::EnvFilter;

/// Installs a `tracing` fmt subscriber filtered by `RUST_LOG`.
///
/// Falls back to `info` when `RUST_LOG` is unset or unparsable. Calling it
/// more than once is harmless; later calls leave the first subscriber in place.
///
/// ```ignore
/// shopping_cart::logging::setup_tracing();
/// tracing::info!("ready");
/// ```
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

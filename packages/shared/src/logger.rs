//! Logging setup utilities for the zashiki server.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// This function sets up logging for both the application crate and this
/// shared crate. The log level can be overridden using the `RUST_LOG`
/// environment variable.
///
/// # Arguments
///
/// * `app_name` - The name of the application crate or binary (e.g., "zashiki-server")
/// * `default_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use zashiki_shared::logger::setup_logger;
///
/// setup_logger("zashiki-server", "debug");
/// ```
pub fn setup_logger(app_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}={},{}={}",
                    app_name.replace('-', "_"),
                    default_log_level,
                    env!("CARGO_PKG_NAME").replace('-', "_"),
                    default_log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the configured level. Call once at
/// startup; later calls are no-ops.
pub fn init_subscriber(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    if let Err(error) = result {
        tracing::debug!(%error, "tracing subscriber already installed");
    }
}

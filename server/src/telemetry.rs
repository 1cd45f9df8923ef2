//! Log subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins over the configured level when set. Calling this twice
/// leaves the first subscriber in place.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok() {
        tracing::debug!(filter = config.log_filter(), "tracing initialised");
    }
}

//! Tracing setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Calling this more than once is
/// a no-op so embedding applications and tests can both call it freely.
pub fn init(config: &LoggingConfig) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

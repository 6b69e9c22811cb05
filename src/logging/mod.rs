//! Structured logging with tracing

use crate::config::LoggingConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber from the logging configuration.
///
/// `RUST_LOG` takes precedence over the configured level when set. The
/// `format` field selects between machine-readable JSON output and a
/// human-friendly format for local development.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), InitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| InitError::Filter(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(filter);

    match config.format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_target(true))
            .try_init()
            .map_err(|e| InitError::Subscriber(e.to_string()))?,
        _ => registry
            .with(fmt::layer().with_target(true))
            .try_init()
            .map_err(|e| InitError::Subscriber(e.to_string()))?,
    }

    Ok(())
}

/// Error initializing the tracing subscriber
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install subscriber: {0}")]
    Subscriber(String),
}

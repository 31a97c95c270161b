//! Logging initialization built on tracing-subscriber.
//!
//! Supports a level filter directive from configuration and either
//! human-readable or JSON console output.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggerConfig;

/// Initializes the global tracing subscriber from the logger settings.
///
/// Returns an error if a subscriber was already installed.
pub fn init_logging(config: &LoggerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_ansi(false).with_target(true))
            .try_init()?;
    } else {
        let use_ansi = std::io::stdout().is_terminal();
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(use_ansi).with_target(true))
            .try_init()?;
    }

    Ok(())
}

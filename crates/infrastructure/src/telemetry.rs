//! Tracing subscriber setup
//!
//! Console logging only: an `EnvFilter` (where `RUST_LOG` wins over the
//! configured directive) and a `fmt` layer in text or JSON form.

use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, TelemetryAppConfig};

/// Errors from tracing initialization
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber was already installed
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Build the filter from `RUST_LOG`, falling back to the configured directive
///
/// # Errors
///
/// Returns an error if the configured directive is invalid and `RUST_LOG`
/// is unset.
pub fn build_filter(config: &TelemetryAppConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.log_filter)
            .map_err(|e| TelemetryError::InvalidFilter(e.to_string()))
    })
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_tracing(config: &TelemetryAppConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    match config.log_format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init(),
    }
    .map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(format = %config.log_format, "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_is_rejected() {
        let config = TelemetryAppConfig {
            log_filter: "geotransit=verbose".to_string(),
            ..Default::default()
        };
        // Only meaningful when RUST_LOG is not set for the test run.
        if std::env::var("RUST_LOG").is_err() {
            assert!(matches!(
                build_filter(&config),
                Err(TelemetryError::InvalidFilter(_))
            ));
        }
    }

    #[test]
    fn default_filter_builds() {
        assert!(build_filter(&TelemetryAppConfig::default()).is_ok());
    }
}

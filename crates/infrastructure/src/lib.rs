//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer: the Google and
//! SPTrans provider adapters and the secret store backends. Also owns
//! configuration loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    ApiInfoConfig, AppConfig, GeocodingAppConfig, LogFormat, SecretBackend, SecretsConfig,
    ServerConfig, SpTransAppConfig, TelemetryAppConfig, VaultAppConfig,
};
pub use telemetry::{TelemetryError, init_tracing};

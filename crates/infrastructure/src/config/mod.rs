//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings and API metadata
//! - `telemetry`: log filter and format
//! - `providers`: Google Geocoding and SPTrans Olho Vivo
//! - `secrets`: secret store backend selection, Vault connection
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file (`config.toml` in the working directory, or the path in
//! `GEOTRANSIT_CONFIG`), then `GEOTRANSIT_*` environment variables with `__`
//! separating nested keys (e.g. `GEOTRANSIT_SPTRANS__API_KEY`).

mod providers;
mod secrets;
mod server;
mod telemetry;

use serde::{Deserialize, Serialize};

pub use providers::{GeocodingAppConfig, SpTransAppConfig};
pub use secrets::{SecretBackend, SecretsConfig, VaultAppConfig};
pub use server::{ApiInfoConfig, ServerConfig};
pub use telemetry::{LogFormat, TelemetryAppConfig};

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "GEOTRANSIT";

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "GEOTRANSIT_CONFIG";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// API metadata
    #[serde(default)]
    pub api: ApiInfoConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,

    /// Google Geocoding configuration
    #[serde(default)]
    pub geocoding: GeocodingAppConfig,

    /// SPTrans Olho Vivo configuration
    #[serde(default)]
    pub sptrans: SpTransAppConfig,

    /// Secret store configuration
    #[serde(default)]
    pub secrets: SecretsConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).ok();
        Self::load_from(path.as_deref())
    }

    /// Load configuration using an explicit file path
    ///
    /// An explicit path must exist; without one, `config.toml` in the
    /// working directory is used when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load_from(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::with_name(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // e.g. GEOTRANSIT_SERVER__PORT, GEOTRANSIT_GEOCODING__API_KEY
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins"),
            );

        builder.build()?.try_deserialize()
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.geocoding.validate()?;
        self.sptrans.validate()?;
        self.secrets.validate()?;
        Ok(())
    }
}

//! HTTP server and API metadata configuration.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = allow all)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout_secs")]
    pub shutdown_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8000
}

const fn default_shutdown_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
            shutdown_timeout_secs: default_shutdown_timeout_secs(),
        }
    }
}

impl ServerConfig {
    /// Address to bind the listener to
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("server.host must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("server.port must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Metadata reported by `/` and `/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfoConfig {
    /// Human-readable API title
    #[serde(default = "default_title")]
    pub title: String,

    /// Version string reported by `/health`
    #[serde(default = "default_version")]
    pub version: String,

    /// Message returned by `/`
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
}

fn default_title() -> String {
    "GeoTransit Gateway".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_welcome_message() -> String {
    "Welcome to the GeoTransit geolocation and public transport API".to_string()
}

impl Default for ApiInfoConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            version: default_version(),
            welcome_message: default_welcome_message(),
        }
    }
}

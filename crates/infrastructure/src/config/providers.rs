//! Upstream provider configuration (Google Geocoding, SPTrans Olho Vivo).

use domain::{DomainError, SecretName};
use integration_googlemaps::GoogleMapsConfig;
use integration_sptrans::SpTransConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Google Geocoding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingAppConfig {
    /// Base URL of the Maps web services
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Preferred result language
    #[serde(default)]
    pub language: Option<String>,

    /// Region bias
    #[serde(default)]
    pub region: Option<String>,

    /// API key (prefer GEOTRANSIT_GEOCODING__API_KEY or the secret store)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Secret name to read the API key from when `api_key` is unset
    #[serde(default = "default_geocoding_secret")]
    pub api_key_secret: String,
}

fn default_geocoding_base_url() -> String {
    GoogleMapsConfig::default().base_url
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_geocoding_secret() -> String {
    "google-maps-api-key".to_string()
}

impl Default for GeocodingAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_secs: default_timeout_secs(),
            language: None,
            region: None,
            api_key: None,
            api_key_secret: default_geocoding_secret(),
        }
    }
}

impl GeocodingAppConfig {
    /// Convert to the client-level configuration
    #[must_use]
    pub fn to_client_config(&self) -> GoogleMapsConfig {
        GoogleMapsConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            language: self.language.clone(),
            region: self.region.clone(),
        }
    }

    /// Configured key, if any
    #[must_use]
    pub fn configured_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|key| key.expose_secret())
    }

    /// Secret name holding the key
    ///
    /// # Errors
    ///
    /// Returns an error if `api_key_secret` is not a valid secret name.
    pub fn secret_name(&self) -> Result<SecretName, DomainError> {
        SecretName::parse(&self.api_key_secret)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.to_client_config()
            .validate()
            .map_err(|e| format!("geocoding: {e}"))?;
        self.secret_name()
            .map_err(|e| format!("geocoding.api_key_secret: {e}"))?;
        Ok(())
    }
}

/// SPTrans Olho Vivo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpTransAppConfig {
    /// Base URL including the API version
    #[serde(default = "default_sptrans_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// API key (prefer GEOTRANSIT_SPTRANS__API_KEY or the secret store)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Secret name to read the API key from when `api_key` is unset
    #[serde(default = "default_sptrans_secret")]
    pub api_key_secret: String,
}

fn default_sptrans_base_url() -> String {
    SpTransConfig::default().base_url
}

fn default_sptrans_secret() -> String {
    "sptrans-olho-vivo-api-key".to_string()
}

impl Default for SpTransAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_sptrans_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
            api_key_secret: default_sptrans_secret(),
        }
    }
}

impl SpTransAppConfig {
    /// Convert to the client-level configuration
    #[must_use]
    pub fn to_client_config(&self) -> SpTransConfig {
        SpTransConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Configured key, if any
    #[must_use]
    pub fn configured_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|key| key.expose_secret())
    }

    /// Secret name holding the key
    ///
    /// # Errors
    ///
    /// Returns an error if `api_key_secret` is not a valid secret name.
    pub fn secret_name(&self) -> Result<SecretName, DomainError> {
        SecretName::parse(&self.api_key_secret)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.to_client_config()
            .validate()
            .map_err(|e| format!("sptrans: {e}"))?;
        self.secret_name()
            .map_err(|e| format!("sptrans.api_key_secret: {e}"))?;
        Ok(())
    }
}

//! Google Geocoding client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Google Geocoding API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleMapsConfig {
    /// Base URL of the Maps web services
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Preferred result language (e.g. "pt-BR")
    #[serde(default)]
    pub language: Option<String>,

    /// Region bias as a ccTLD (e.g. "br")
    #[serde(default)]
    pub region: Option<String>,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for GoogleMapsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            language: None,
            region: None,
        }
    }
}

impl GoogleMapsConfig {
    /// Create a configuration pointing at a test server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err("base_url must be an http(s) URL".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }

    pub(crate) fn geocode_url(&self) -> String {
        format!("{}/geocode/json", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GoogleMapsConfig::default();
        assert_eq!(config.base_url, "https://maps.googleapis.com/maps/api");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.language.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_geocode_url() {
        let config = GoogleMapsConfig::for_testing("http://localhost:8080/");
        assert_eq!(config.geocode_url(), "http://localhost:8080/geocode/json");
    }

    #[test]
    fn test_validation() {
        let config = GoogleMapsConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GoogleMapsConfig::for_testing("maps.example");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: GoogleMapsConfig = serde_json::from_str(r#"{"region": "br"}"#).unwrap();
        assert_eq!(config.region.as_deref(), Some("br"));
        assert_eq!(config.timeout_secs, 10);
    }
}

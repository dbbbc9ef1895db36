//! Olho Vivo client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the SPTrans Olho Vivo API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpTransConfig {
    /// Base URL including the API version segment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://api.olhovivo.sptrans.com.br/v2.1".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for SpTransConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SpTransConfig {
    /// Create a configuration pointing at a test server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
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

    /// Base URL without a trailing slash
    pub(crate) fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SpTransConfig::default();
        assert_eq!(config.base_url, "http://api.olhovivo.sptrans.com.br/v2.1");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_testing_config() {
        let config = SpTransConfig::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = SpTransConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_non_http_url() {
        let config = SpTransConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = SpTransConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_base_strips_trailing_slash() {
        let config = SpTransConfig::for_testing("http://localhost/v2.1/");
        assert_eq!(config.base(), "http://localhost/v2.1");
    }
}

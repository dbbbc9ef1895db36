//! Google Geocoding client

use std::{fmt, time::Duration};

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::GoogleMapsConfig;
use crate::error::GoogleMapsError;
use crate::models::{GeocodeResponse, PlaceResult};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a free-form address to candidates
    ///
    /// `ZERO_RESULTS` yields an empty list.
    async fn geocode(&self, address: &str) -> Result<Vec<PlaceResult>, GoogleMapsError>;

    /// Resolve a coordinate pair to address candidates
    async fn reverse_geocode(
        &self,
        location: GeoLocation,
    ) -> Result<Vec<PlaceResult>, GoogleMapsError>;
}

/// Google Geocoding API client
pub struct GoogleMapsClient {
    client: Client,
    config: GoogleMapsConfig,
    api_key: String,
}

impl fmt::Debug for GoogleMapsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleMapsClient")
            .field("config", &self.config)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl GoogleMapsClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the key is empty, or
    /// the HTTP client cannot be initialized.
    pub fn new(config: &GoogleMapsConfig, api_key: impl Into<String>) -> Result<Self, GoogleMapsError> {
        config
            .validate()
            .map_err(GoogleMapsError::ConfigurationError)?;

        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GoogleMapsError::ConfigurationError(
                "API key must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("GeoTransit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GoogleMapsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    async fn query(&self, lookup: (&str, String)) -> Result<Vec<PlaceResult>, GoogleMapsError> {
        let url = self.config.geocode_url();

        let mut params = vec![lookup, ("key", self.api_key.clone())];
        if let Some(language) = &self.config.language {
            params.push(("language", language.clone()));
        }
        if let Some(region) = &self.config.region {
            params.push(("region", region.clone()));
        }

        debug!(?url, "Querying Google Geocoding");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GoogleMapsError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    GoogleMapsError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(GoogleMapsError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GoogleMapsError::ParseError(e.to_string()))?;

        Self::parse_response(&body)
    }

    fn parse_response(body: &str) -> Result<Vec<PlaceResult>, GoogleMapsError> {
        let response: GeocodeResponse =
            serde_json::from_str(body).map_err(|e| GoogleMapsError::ParseError(e.to_string()))?;

        match response.status.as_str() {
            "OK" => Ok(response.results),
            "ZERO_RESULTS" => Ok(Vec::new()),
            _ => {
                warn!(status = %response.status, "Geocoding API reported an error");
                Err(GoogleMapsError::ApiStatus {
                    status: response.status,
                    message: response.error_message.unwrap_or_default(),
                })
            },
        }
    }
}

#[async_trait]
impl GeocodingClient for GoogleMapsClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Vec<PlaceResult>, GoogleMapsError> {
        let results = self.query(("address", address.to_string())).await?;
        debug!(count = results.len(), "Address candidates found");
        Ok(results)
    }

    #[instrument(skip(self), fields(location = %location))]
    async fn reverse_geocode(
        &self,
        location: GeoLocation,
    ) -> Result<Vec<PlaceResult>, GoogleMapsError> {
        let results = self.query(("latlng", location.to_query_pair())).await?;
        debug!(count = results.len(), "Reverse candidates found");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ok_response() {
        let body = r#"{"status":"OK","results":[{"formatted_address":"A","geometry":{"location":{"lat":1.0,"lng":2.0}},"place_id":"p","types":[]}]}"#;
        let results = GoogleMapsClient::parse_response(body).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].place_id, "p");
    }

    #[test]
    fn parse_zero_results() {
        let results =
            GoogleMapsClient::parse_response(r#"{"status":"ZERO_RESULTS","results":[]}"#).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn parse_denied_carries_message() {
        let body = r#"{"status":"REQUEST_DENIED","results":[],"error_message":"bad key"}"#;
        let err = GoogleMapsClient::parse_response(body).unwrap_err();
        match err {
            GoogleMapsError::ApiStatus { status, message } => {
                assert_eq!(status, "REQUEST_DENIED");
                assert_eq!(message, "bad key");
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_garbage() {
        assert!(matches!(
            GoogleMapsClient::parse_response("<html>"),
            Err(GoogleMapsError::ParseError(_))
        ));
    }

    #[test]
    fn rejects_blank_key() {
        let config = GoogleMapsConfig::for_testing("http://localhost:1");
        assert!(GoogleMapsClient::new(&config, "").is_err());
    }

    #[test]
    fn debug_redacts_key() {
        let config = GoogleMapsConfig::for_testing("http://localhost:1");
        let client = GoogleMapsClient::new(&config, "AIza-secret").unwrap();
        assert!(!format!("{client:?}").contains("AIza-secret"));
    }
}

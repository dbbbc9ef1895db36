//! Google Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GoogleMapsError {
    /// Connection to the API failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// API answered with a non-success HTTP status
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the API response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// API answered with a status other than `OK`/`ZERO_RESULTS`
    #[error("Geocoding API returned {status}: {message}")]
    ApiStatus {
        /// Status string reported by the API (e.g. `REQUEST_DENIED`)
        status: String,
        /// `error_message` from the response, if any
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Geocoding request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_status_display_includes_message() {
        let err = GoogleMapsError::ApiStatus {
            status: "REQUEST_DENIED".to_string(),
            message: "The provided API key is invalid.".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("REQUEST_DENIED"));
        assert!(text.contains("API key is invalid"));
    }

    #[test]
    fn timeout_display() {
        let err = GoogleMapsError::Timeout { timeout_secs: 7 };
        assert_eq!(err.to_string(), "Geocoding request timed out after 7 seconds");
    }
}

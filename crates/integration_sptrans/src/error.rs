//! Olho Vivo error types

use thiserror::Error;

/// Errors that can occur while talking to the Olho Vivo API
#[derive(Debug, Error)]
pub enum SpTransError {
    /// Connection to the API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// API answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the API response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Login did not return a literal `true`
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// A data endpoint rejected the held session
    #[error("Session rejected with HTTP {status}")]
    SessionRejected {
        /// HTTP status returned by the API
        status: u16,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl SpTransError {
    /// Returns true if the error came from the login step
    #[must_use]
    pub const fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_failure_detection() {
        assert!(SpTransError::AuthenticationFailed("false".to_string()).is_authentication_failure());
        assert!(!SpTransError::SessionRejected { status: 401 }.is_authentication_failure());
        assert!(!SpTransError::RequestFailed("HTTP 500".to_string()).is_authentication_failure());
    }

    #[test]
    fn test_error_display() {
        let err = SpTransError::SessionRejected { status: 401 };
        assert_eq!(err.to_string(), "Session rejected with HTTP 401");

        let err = SpTransError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));

        let err = SpTransError::AuthenticationFailed("login returned false".to_string());
        assert!(err.to_string().contains("login returned false"));
    }
}

//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Adapters translate their provider-specific failures into one of these
/// variants. The HTTP layer is the only place that turns them into status
/// codes.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (invalid input)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Upstream returned nothing for the request
    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream call failed (network error, non-2xx, provider error status)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Service cannot handle requests (not configured, authentication failed,
    /// operation not supported by the backend)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Access to the upstream resource was denied
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error means the requested resource does not exist
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Domain(DomainError::NotFound { .. })
        )
    }
}

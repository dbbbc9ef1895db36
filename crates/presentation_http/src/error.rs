//! API error handling
//!
//! [`ApiError`] is the only place where failures become HTTP status codes.
//! Upstream failures carry the upstream message in the body; internal
//! errors are logged and answered with a generic message.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{DomainError, InvalidCoordinates};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
            Self::ServiceUnavailable(_) => "service_unavailable",
            Self::Upstream(_) => "upstream_error",
            Self::Internal(_) => "internal_error",
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let message = match self {
            Self::Validation(msg) | Self::NotFound(msg) => msg,
            Self::ServiceUnavailable(msg) => {
                warn!(error = %msg, "Service unavailable");
                msg
            },
            Self::Upstream(msg) => {
                error!(error = %msg, "Upstream request failed");
                msg
            },
            Self::Internal(msg) => {
                error!(error = %msg, "Internal error");
                "An internal error occurred".to_string()
            },
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::Validation(e.to_string()),
            ApplicationError::NotFound(msg) => Self::NotFound(msg),
            ApplicationError::ServiceUnavailable(msg) => Self::ServiceUnavailable(msg),
            ApplicationError::ExternalService(msg) | ApplicationError::NotAuthorized(msg) => {
                Self::Upstream(msg)
            },
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                Self::Internal(msg)
            },
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<InvalidCoordinates> for ApiError {
    fn from(err: InvalidCoordinates) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn api_error_messages() {
        assert_eq!(
            ApiError::Validation("address: length".to_string()).to_string(),
            "Validation failed: address: length"
        );
        assert_eq!(
            ApiError::NotFound("resource".to_string()).to_string(),
            "Not found: resource"
        );
        assert_eq!(
            ApiError::Upstream("HTTP 502".to_string()).to_string(),
            "Upstream error: HTTP 502"
        );
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::Validation(String::new()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::NotFound(String::new()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::ServiceUnavailable(String::new()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::Upstream(String::new()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal(String::new()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn upstream_message_is_in_body() {
        let (status, body) = body_of(ApiError::Upstream(
            "Google Maps API returned REQUEST_DENIED".to_string(),
        ))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "upstream_error");
        assert_eq!(body["error"], "Google Maps API returned REQUEST_DENIED");
    }

    #[tokio::test]
    async fn internal_message_is_generic() {
        let (status, body) = body_of(ApiError::Internal("pool poisoned".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "internal_error");
        assert_eq!(body["error"], "An internal error occurred");
    }

    #[tokio::test]
    async fn body_has_only_error_and_code() {
        let (_, body) = body_of(ApiError::NotFound("Secret not found: x".to_string())).await;
        assert_eq!(body.as_object().unwrap().len(), 2);
    }

    #[test]
    fn domain_error_converts_to_validation() {
        let source = ApplicationError::Domain(DomainError::InvalidSecretName("a/b".to_string()));
        assert!(matches!(ApiError::from(source), ApiError::Validation(_)));
    }

    #[test]
    fn not_found_converts() {
        let result: ApiError = ApplicationError::NotFound("x".to_string()).into();
        assert!(matches!(result, ApiError::NotFound(_)));
    }

    #[test]
    fn external_service_converts_to_upstream() {
        let result: ApiError = ApplicationError::ExternalService("HTTP 500".to_string()).into();
        let ApiError::Upstream(msg) = result else {
            unreachable!("Expected Upstream");
        };
        assert_eq!(msg, "HTTP 500");
    }

    #[test]
    fn service_unavailable_converts() {
        let result: ApiError =
            ApplicationError::ServiceUnavailable("auth failed".to_string()).into();
        assert!(matches!(result, ApiError::ServiceUnavailable(_)));
    }

    #[test]
    fn configuration_converts_to_internal() {
        let result: ApiError = ApplicationError::Configuration("bad".to_string()).into();
        assert!(matches!(result, ApiError::Internal(_)));
    }

    #[test]
    fn invalid_coordinates_convert_to_validation() {
        assert!(matches!(
            ApiError::from(InvalidCoordinates),
            ApiError::Validation(_)
        ));
    }
}

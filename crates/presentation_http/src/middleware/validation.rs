//! Request validation
//!
//! Extractors that deserialize a request part and then run its `validator`
//! rules. Every failure, whether the input could not be parsed or a rule
//! did not hold, is answered with 422 before the handler runs.

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Query, Request,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::error::ErrorResponse;

/// Validation error type
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] JsonRejection),
    #[error("Invalid query: {0}")]
    QueryError(#[from] QueryRejection),
    #[error("Invalid path: {0}")]
    PathError(#[from] PathRejection),
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::JsonError(e) => e.body_text(),
            Self::QueryError(e) => e.body_text(),
            Self::PathError(e) => e.body_text(),
            Self::ValidationFailed(msg) => msg.clone(),
        };

        let body = ErrorResponse {
            error: message,
            code: "validation_error".to_string(),
        };

        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// Flatten field errors into `field: message` pairs
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                format!(
                    "{}: {}",
                    field,
                    error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string)
                )
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

fn run_rules<T: Validate>(value: &T) -> Result<(), ValidationError> {
    value
        .validate()
        .map_err(|e| ValidationError::ValidationFailed(describe(&e)))
}

/// A JSON body extractor that also validates the request body
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct PutSecret {
///     #[validate(length(min = 1))]
///     value: String,
/// }
///
/// async fn handler(ValidatedJson(req): ValidatedJson<PutSecret>) {
///     // req is validated
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        run_rules(&value)?;
        Ok(Self(value))
    }
}

/// A query string extractor that also validates the parameters
///
/// A missing or unparsable parameter is rejected the same way as a rule
/// violation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        run_rules(&value)?;
        Ok(Self(value))
    }
}

/// A path parameter extractor that also validates the parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        run_rules(&value)?;
        Ok(Self(value))
    }
}

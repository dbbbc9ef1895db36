//! Secret administration handlers
//!
//! Always hit the configured secret store directly; nothing is cached.

use axum::{Json, extract::State};
use domain::SecretName;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    error::ApiError,
    middleware::{ValidatedJson, ValidatedPath},
    state::AppState,
};

/// Path for `/secrets/{secret_id}`
#[derive(Debug, Deserialize, Validate)]
pub struct SecretPath {
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub secret_id: String,
}

impl SecretPath {
    fn name(&self) -> Result<SecretName, ApiError> {
        Ok(SecretName::parse(self.secret_id.as_str())?)
    }
}

/// Body for `POST /secrets/{secret_id}`
#[derive(Deserialize, Validate)]
pub struct PutSecretRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub value: String,
}

impl std::fmt::Debug for PutSecretRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PutSecretRequest")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Result of writing a secret
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretWrittenResponse {
    pub secret_id: String,
    /// Version created, when the backend keeps versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
}

/// Latest value of a secret
#[derive(Clone, Serialize, Deserialize)]
pub struct SecretResponse {
    pub secret_id: String,
    pub value: String,
}

impl std::fmt::Debug for SecretResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretResponse")
            .field("secret_id", &self.secret_id)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Result of deleting a secret
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretDeletedResponse {
    pub secret_id: String,
    pub deleted: bool,
}

/// Create a secret or add a new version to it
#[instrument(skip(state, body))]
pub async fn put_secret(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<SecretPath>,
    ValidatedJson(body): ValidatedJson<PutSecretRequest>,
) -> Result<Json<SecretWrittenResponse>, ApiError> {
    let name = path.name()?;
    let store = state.secrets()?;

    let written = store.put_secret(&name, &body.value).await?;
    info!(backend = store.backend(), version = ?written.version, "Secret written");

    Ok(Json(SecretWrittenResponse {
        secret_id: written.name.to_string(),
        version: written.version,
    }))
}

/// Read the latest value of a secret
#[instrument(skip(state))]
pub async fn get_secret(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<SecretPath>,
) -> Result<Json<SecretResponse>, ApiError> {
    let name = path.name()?;
    let secret = state.secrets()?.get_secret(&name).await?;

    Ok(Json(SecretResponse {
        secret_id: secret.name.to_string(),
        value: secret.value,
    }))
}

/// Delete a secret and every version of it
#[instrument(skip(state))]
pub async fn delete_secret(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<SecretPath>,
) -> Result<Json<SecretDeletedResponse>, ApiError> {
    let name = path.name()?;
    let store = state.secrets()?;

    store.delete_secret(&name).await?;
    info!(backend = store.backend(), "Secret deleted");

    Ok(Json(SecretDeletedResponse {
        secret_id: name.to_string(),
        deleted: true,
    }))
}

//! Welcome, health and readiness handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Welcome response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Welcome payload for `/`
pub async fn welcome(State(state): State<AppState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: state.api.welcome_message.clone(),
    })
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub api_version: String,
}

/// Liveness check - is the server running?
///
/// Never touches an upstream.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        api_version: state.api.version.clone(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub geocoding: bool,
    pub sptrans: bool,
    pub secrets: bool,
}

/// Readiness check - were all adapters configured at startup?
///
/// Reports configuration only; no upstream is contacted.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let geocoding = state.geocoding.is_some();
    let sptrans = state.transit.is_some();
    let secrets = state.secrets.is_some();
    let ready = geocoding && sptrans && secrets;

    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            geocoding,
            sptrans,
            secrets,
        }),
    )
}

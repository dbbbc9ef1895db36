//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Welcome, health and readiness
        .route("/", get(handlers::health::welcome))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Geocoding
        .route("/geocode/address", get(handlers::geocode::geocode_address))
        .route("/geocode/latlng", get(handlers::geocode::reverse_geocode))
        // SPTrans Olho Vivo
        .route("/sptrans/linhas", get(handlers::sptrans::search_lines))
        .route(
            "/sptrans/posicoes/{codigo_linha}",
            get(handlers::sptrans::line_positions),
        )
        .route(
            "/sptrans/posicao/{codigo_linha}",
            get(handlers::sptrans::line_positions),
        )
        // Secret administration
        .route(
            "/secrets/{secret_id}",
            get(handlers::secrets::get_secret)
                .post(handlers::secrets::put_secret)
                .delete(handlers::secrets::delete_secret),
        )
        // Attach state
        .with_state(state)
}

//! GeoTransit gateway server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{
    CredentialResolver,
    ports::{GeocodingPort, TransitPort},
};
use infrastructure::{
    AppConfig, GoogleGeocodingAdapter, SpTransTransitAdapter, TelemetryAppConfig,
    build_secret_store, init_tracing,
};
use presentation_http::{RequestIdLayer, routes, state::AppState};
use tokio::{net::TcpListener, signal, sync::Notify};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = AppConfig::load();

    let telemetry = loaded
        .as_ref()
        .map_or_else(|_| TelemetryAppConfig::default(), |c| c.telemetry.clone());
    init_tracing(&telemetry)?;

    let config = loaded.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });
    config.validate().map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        version = %config.api.version,
        host = %config.server.host,
        port = config.server.port,
        secrets = %config.secrets.backend,
        "{} starting",
        config.api.title
    );

    let secrets = match build_secret_store(&config.secrets).await {
        Ok(store) => Some(store),
        Err(e) => {
            warn!(error = %e, "Secret store unavailable, /secrets will answer 503");
            None
        },
    };

    let resolver = secrets.as_ref().map_or_else(CredentialResolver::config_only, |store| {
        CredentialResolver::new(Arc::clone(store))
    });

    let geocoding = build_geocoding(&config, &resolver).await?;
    let transit = build_transit(&config, &resolver).await?;

    let state = AppState {
        geocoding,
        transit,
        secrets,
        api: Arc::new(config.api.clone()),
    };

    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server.allowed_origins))
        .layer(RequestIdLayer::new());

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    let shutdown = Arc::new(Notify::new());
    let server = axum::serve(listener, app).with_graceful_shutdown({
        let shutdown = Arc::clone(&shutdown);
        async move {
            shutdown_signal().await;
            shutdown.notify_one();
        }
    });

    let drain_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    tokio::select! {
        result = server.into_future() => result?,
        () = async {
            shutdown.notified().await;
            tokio::time::sleep(drain_timeout).await;
        } => {
            warn!(timeout = ?drain_timeout, "Connections still open after shutdown timeout");
        }
    }

    info!("Server shutdown complete");

    Ok(())
}

/// Geocoding adapter, or `None` when no API key is available
async fn build_geocoding(
    config: &AppConfig,
    resolver: &CredentialResolver,
) -> anyhow::Result<Option<Arc<dyn GeocodingPort>>> {
    let secret = config.geocoding.secret_name()?;
    let Some(key) = resolver
        .resolve("google-maps", config.geocoding.configured_key(), &secret)
        .await
    else {
        warn!("No Google Maps API key, geocoding endpoints will answer 503");
        return Ok(None);
    };

    match GoogleGeocodingAdapter::from_config(&config.geocoding.to_client_config(), key.value()) {
        Ok(adapter) => {
            let adapter: Arc<dyn GeocodingPort> = Arc::new(adapter);
            Ok(Some(adapter))
        },
        Err(e) => {
            warn!(error = %e, "Geocoding adapter could not be created");
            Ok(None)
        },
    }
}

/// Transit adapter, or `None` when no API key is available
async fn build_transit(
    config: &AppConfig,
    resolver: &CredentialResolver,
) -> anyhow::Result<Option<Arc<dyn TransitPort>>> {
    let secret = config.sptrans.secret_name()?;
    let Some(key) = resolver
        .resolve("sptrans", config.sptrans.configured_key(), &secret)
        .await
    else {
        warn!("No SPTrans API key, /sptrans endpoints will answer 503");
        return Ok(None);
    };

    match SpTransTransitAdapter::from_config(&config.sptrans.to_client_config(), key.value()) {
        Ok(adapter) => {
            let adapter: Arc<dyn TransitPort> = Arc::new(adapter);
            Ok(Some(adapter))
        },
        Err(e) => {
            warn!(error = %e, "Transit adapter could not be created");
            Ok(None)
        },
    }
}

/// Allow every origin when none are configured
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    use axum::http::{HeaderValue, Method};
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any)
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

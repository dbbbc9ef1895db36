//! Application state shared across handlers

use std::sync::Arc;

use application::ports::{GeocodingPort, SecretStorePort, TransitPort};
use infrastructure::ApiInfoConfig;

use crate::error::ApiError;

/// Shared application state
///
/// Each adapter is `None` when it could not be configured at startup; its
/// endpoints then answer 503 while the rest of the API keeps serving.
#[derive(Clone)]
pub struct AppState {
    /// Forward and reverse geocoding
    pub geocoding: Option<Arc<dyn GeocodingPort>>,
    /// Bus lines and vehicle positions
    pub transit: Option<Arc<dyn TransitPort>>,
    /// Secret store behind the `/secrets` endpoints
    pub secrets: Option<Arc<dyn SecretStorePort>>,
    /// API metadata for `/` and `/health`
    pub api: Arc<ApiInfoConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("geocoding", &self.geocoding.is_some())
            .field("transit", &self.transit.is_some())
            .field("secrets", &self.secrets.as_ref().map(|s| s.backend()))
            .field("api", &self.api)
            .finish()
    }
}

impl AppState {
    /// State with no adapters configured
    pub fn new(api: ApiInfoConfig) -> Self {
        Self {
            geocoding: None,
            transit: None,
            secrets: None,
            api: Arc::new(api),
        }
    }

    /// Set the geocoding adapter
    #[must_use]
    pub fn with_geocoding(mut self, geocoding: Arc<dyn GeocodingPort>) -> Self {
        self.geocoding = Some(geocoding);
        self
    }

    /// Set the transit adapter
    #[must_use]
    pub fn with_transit(mut self, transit: Arc<dyn TransitPort>) -> Self {
        self.transit = Some(transit);
        self
    }

    /// Set the secret store
    #[must_use]
    pub fn with_secrets(mut self, secrets: Arc<dyn SecretStorePort>) -> Self {
        self.secrets = Some(secrets);
        self
    }

    /// The geocoding adapter, or 503 when it is not configured
    pub fn geocoding(&self) -> Result<&Arc<dyn GeocodingPort>, ApiError> {
        self.geocoding
            .as_ref()
            .ok_or_else(|| ApiError::ServiceUnavailable("Geocoding is not configured".to_string()))
    }

    /// The transit adapter, or 503 when it is not configured
    pub fn transit(&self) -> Result<&Arc<dyn TransitPort>, ApiError> {
        self.transit.as_ref().ok_or_else(|| {
            ApiError::ServiceUnavailable("SPTrans service is not configured".to_string())
        })
    }

    /// The secret store, or 503 when it is not configured
    pub fn secrets(&self) -> Result<&Arc<dyn SecretStorePort>, ApiError> {
        self.secrets.as_ref().ok_or_else(|| {
            ApiError::ServiceUnavailable("Secret store is not configured".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use infrastructure::MemorySecretStore;

    use super::*;

    #[test]
    fn unconfigured_adapters_are_unavailable() {
        let state = AppState::new(ApiInfoConfig::default());
        assert!(matches!(
            state.geocoding(),
            Err(ApiError::ServiceUnavailable(_))
        ));
        assert!(matches!(state.transit(), Err(ApiError::ServiceUnavailable(_))));
        assert!(matches!(state.secrets(), Err(ApiError::ServiceUnavailable(_))));
    }

    #[test]
    fn configured_adapter_is_returned() {
        let state = AppState::new(ApiInfoConfig::default())
            .with_secrets(Arc::new(MemorySecretStore::new()));
        assert_eq!(state.secrets().unwrap().backend(), "memory");
        assert!(state.geocoding().is_err());
    }

    #[test]
    fn debug_lists_configured_adapters() {
        let state = AppState::new(ApiInfoConfig::default());
        let debug = format!("{state:?}");
        assert!(debug.contains("geocoding: false"));
    }
}

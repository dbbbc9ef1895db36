//! Builds the configured secret store backend

use std::sync::Arc;

use application::{error::ApplicationError, ports::SecretStorePort};
use tracing::{info, warn};

use super::{EnvSecretStore, FileSecretStore, MemorySecretStore, VaultSecretStore};
use crate::config::{SecretBackend, SecretsConfig};

/// Create the secret store selected by `config.backend`
///
/// The store is probed once. An unhealthy store is still returned so that
/// requests surface the backend error instead of a blanket 503.
///
/// # Errors
///
/// Returns an error if the section is invalid or the Vault client cannot be
/// created.
pub async fn build_secret_store(
    config: &SecretsConfig,
) -> Result<Arc<dyn SecretStorePort>, ApplicationError> {
    config.validate().map_err(ApplicationError::Configuration)?;

    let store: Arc<dyn SecretStorePort> = match config.backend {
        SecretBackend::Env => Arc::new(EnvSecretStore::with_prefix(&config.env_prefix)),
        SecretBackend::File => Arc::new(FileSecretStore::new(&config.directory)),
        SecretBackend::Memory => Arc::new(MemorySecretStore::new()),
        SecretBackend::Vault => {
            Arc::new(VaultSecretStore::new(config.vault.to_vault_config()).await?)
        },
    };

    if store.is_healthy().await {
        info!(backend = store.backend(), "Secret store ready");
    } else {
        warn!(
            backend = store.backend(),
            "Secret store failed its health check, requests may fail until it recovers"
        );
    }
    Ok(store)
}

//! HashiCorp Vault secret store adapter
//!
//! Stores secrets in the KV v2 secrets engine, one path per secret with the
//! value under the `value` key. KV v2 keeps version history: each write adds
//! a version, and deleting removes the metadata together with every version.
//! Supports AppRole and token-based authentication.

use std::collections::HashMap;

use application::{error::ApplicationError, ports::SecretStorePort};
use async_trait::async_trait;
use domain::{Secret, SecretName, SecretWrite};
use tracing::{debug, error, info, instrument, warn};
use vaultrs::{
    client::{Client, VaultClient, VaultClientSettingsBuilder},
    error::ClientError,
    kv2,
};

/// Key under which the secret value is stored
const VALUE_KEY: &str = "value";

/// Configuration for Vault connection
#[derive(Clone)]
pub struct VaultConfig {
    /// Vault server address (e.g., "https://vault.example.com:8200")
    pub address: String,
    /// Authentication token (for token-based auth)
    pub token: Option<String>,
    /// AppRole role ID (for AppRole auth)
    pub role_id: Option<String>,
    /// AppRole secret ID (typically from environment)
    pub secret_id: Option<String>,
    /// KV v2 mount path (default: "secret")
    pub mount_path: String,
    /// Namespace (for Vault Enterprise)
    pub namespace: Option<String>,
}

impl std::fmt::Debug for VaultConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultConfig")
            .field("address", &self.address)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("role_id", &self.role_id)
            .field("secret_id", &self.secret_id.as_ref().map(|_| "[REDACTED]"))
            .field("mount_path", &self.mount_path)
            .field("namespace", &self.namespace)
            .finish()
    }
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            address: "http://127.0.0.1:8200".to_string(),
            token: None,
            role_id: None,
            secret_id: None,
            mount_path: "secret".to_string(),
            namespace: None,
        }
    }
}

impl VaultConfig {
    /// Create a new Vault configuration with the given address
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    /// Set the authentication token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set AppRole credentials
    #[must_use]
    pub fn with_approle(
        mut self,
        role_id: impl Into<String>,
        secret_id: impl Into<String>,
    ) -> Self {
        self.role_id = Some(role_id.into());
        self.secret_id = Some(secret_id.into());
        self
    }

    /// Set the KV mount path
    #[must_use]
    pub fn with_mount_path(mut self, path: impl Into<String>) -> Self {
        self.mount_path = path.into();
        self
    }

    /// Set the namespace (Vault Enterprise)
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

/// Secret store backed by HashiCorp Vault KV v2
pub struct VaultSecretStore {
    client: VaultClient,
    config: VaultConfig,
}

impl std::fmt::Debug for VaultSecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultSecretStore")
            .field("config", &self.config)
            .field("client", &"VaultClient { ... }")
            .finish()
    }
}

impl VaultSecretStore {
    /// Create a new Vault secret store with the given configuration
    ///
    /// # Errors
    /// Returns an error if the Vault client cannot be created or AppRole
    /// login fails
    pub async fn new(config: VaultConfig) -> Result<Self, ApplicationError> {
        let mut client = Self::create_client(&config)?;

        if config.role_id.is_some() && config.secret_id.is_some() {
            Self::authenticate_approle(&mut client, &config).await?;
        }

        info!(address = %config.address, mount = %config.mount_path, "Connected to Vault");

        Ok(Self { client, config })
    }

    /// Create the Vault client
    fn create_client(config: &VaultConfig) -> Result<VaultClient, ApplicationError> {
        let mut settings_builder = VaultClientSettingsBuilder::default();
        settings_builder.address(&config.address);

        if let Some(token) = &config.token {
            settings_builder.token(token);
        }

        if let Some(namespace) = &config.namespace {
            settings_builder.namespace(Some(namespace.clone()));
        }

        let settings = settings_builder
            .build()
            .map_err(|e| ApplicationError::Configuration(format!("Invalid Vault config: {e}")))?;

        VaultClient::new(settings).map_err(|e| {
            ApplicationError::ExternalService(format!("Failed to create Vault client: {e}"))
        })
    }

    /// Authenticate using AppRole and adopt the issued token
    async fn authenticate_approle(
        client: &mut VaultClient,
        config: &VaultConfig,
    ) -> Result<(), ApplicationError> {
        let role_id = config.role_id.as_ref().ok_or_else(|| {
            ApplicationError::Configuration("AppRole role_id not configured".to_string())
        })?;
        let secret_id = config.secret_id.as_ref().ok_or_else(|| {
            ApplicationError::Configuration("AppRole secret_id not configured".to_string())
        })?;

        let auth = vaultrs::auth::approle::login(&*client, "approle", role_id, secret_id)
            .await
            .map_err(|e| {
                error!(error = %e, "AppRole authentication failed");
                ApplicationError::NotAuthorized(format!("Vault AppRole login failed: {e}"))
            })?;

        client.set_token(&auth.client_token);

        info!("Successfully authenticated with Vault using AppRole");
        Ok(())
    }

    fn mount(&self) -> &str {
        &self.config.mount_path
    }
}

/// Translate a Vault client error for the secret `name`
fn map_vault_error(name: &SecretName, e: ClientError) -> ApplicationError {
    match e {
        ClientError::APIError { code: 404, .. } => {
            ApplicationError::NotFound(format!("Secret not found: {name}"))
        },
        ClientError::APIError { code: 403, .. } => {
            ApplicationError::NotAuthorized(format!("Vault denied access to secret: {name}"))
        },
        other => {
            error!(error = %other, "Vault request failed");
            ApplicationError::ExternalService(format!("Vault request failed: {other}"))
        },
    }
}

#[async_trait]
impl SecretStorePort for VaultSecretStore {
    #[instrument(skip(self))]
    async fn get_secret(&self, name: &SecretName) -> Result<Secret, ApplicationError> {
        debug!(mount = %self.mount(), "Fetching secret from Vault");

        let data: HashMap<String, String> = kv2::read(&self.client, self.mount(), name.as_str())
            .await
            .map_err(|e| map_vault_error(name, e))?;

        data.get(VALUE_KEY)
            .map(|value| Secret::new(name.clone(), value.clone()))
            .ok_or_else(|| {
                ApplicationError::NotFound(format!("Secret has no '{VALUE_KEY}' field: {name}"))
            })
    }

    #[instrument(skip(self, value))]
    async fn put_secret(
        &self,
        name: &SecretName,
        value: &str,
    ) -> Result<SecretWrite, ApplicationError> {
        let data = HashMap::from([(VALUE_KEY, value)]);

        let metadata = kv2::set(&self.client, self.mount(), name.as_str(), &data)
            .await
            .map_err(|e| map_vault_error(name, e))?;

        debug!(version = metadata.version, "Wrote secret version to Vault");
        Ok(SecretWrite {
            name: name.clone(),
            version: Some(metadata.version),
        })
    }

    #[instrument(skip(self))]
    async fn delete_secret(&self, name: &SecretName) -> Result<(), ApplicationError> {
        // Vault answers 204 for unknown paths, so check first to report NotFound.
        if !self.exists(name).await? {
            return Err(ApplicationError::NotFound(format!("Secret not found: {name}")));
        }

        kv2::delete_metadata(&self.client, self.mount(), name.as_str())
            .await
            .map_err(|e| map_vault_error(name, e))?;

        info!("Deleted secret and all versions from Vault");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn exists(&self, name: &SecretName) -> Result<bool, ApplicationError> {
        match kv2::read_metadata(&self.client, self.mount(), name.as_str()).await {
            Ok(_) => Ok(true),
            Err(ClientError::APIError { code: 404, .. }) => Ok(false),
            Err(e) => Err(map_vault_error(name, e)),
        }
    }

    fn backend(&self) -> &'static str {
        "vault"
    }

    async fn is_healthy(&self) -> bool {
        match vaultrs::sys::health(&self.client).await {
            Ok(health) => {
                if health.sealed {
                    warn!("Vault is sealed");
                    false
                } else {
                    true
                }
            },
            Err(e) => {
                error!(error = %e, "Vault health check failed");
                false
            },
        }
    }
}

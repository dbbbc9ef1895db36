//! Environment-based secret store adapter
//!
//! Reads secrets from environment variables. Useful for local development
//! and containerized deployments where secrets are injected via environment.
//! The process environment is treated as read-only.

use std::env;

use application::{error::ApplicationError, ports::SecretStorePort};
use async_trait::async_trait;
use domain::{Secret, SecretName, SecretWrite};
use tracing::{debug, instrument, warn};

/// Secret store that reads from environment variables
///
/// Names are uppercased with hyphens replaced by underscores.
/// For example: "google-maps-api-key" becomes "GOOGLE_MAPS_API_KEY"
#[derive(Debug, Clone, Default)]
pub struct EnvSecretStore {
    /// Optional prefix for all environment variable lookups
    prefix: Option<String>,
}

impl EnvSecretStore {
    /// Create a new environment secret store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a prefix for all environment variable lookups
    ///
    /// # Example
    /// ```
    /// use infrastructure::adapters::EnvSecretStore;
    ///
    /// let store = EnvSecretStore::with_prefix("GEOTRANSIT_SECRET");
    /// // Looking up "sptrans-olho-vivo-api-key" will check
    /// // "GEOTRANSIT_SECRET_SPTRANS_OLHO_VIVO_API_KEY"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Transform a secret name to an environment variable name
    fn key_to_env_var(&self, name: &SecretName) -> String {
        let normalized = name.as_str().replace('-', "_").to_uppercase();

        match &self.prefix {
            Some(prefix) => format!("{prefix}_{normalized}"),
            None => normalized,
        }
    }

    fn read_only(operation: &str) -> ApplicationError {
        ApplicationError::ServiceUnavailable(format!(
            "The env secret backend is read-only; {operation} is not supported"
        ))
    }
}

#[async_trait]
impl SecretStorePort for EnvSecretStore {
    #[instrument(skip(self), fields(env_var))]
    async fn get_secret(&self, name: &SecretName) -> Result<Secret, ApplicationError> {
        let env_var = self.key_to_env_var(name);
        tracing::Span::current().record("env_var", &env_var);

        match env::var(&env_var) {
            Ok(value) => {
                debug!("Retrieved secret from environment variable");
                Ok(Secret::new(name.clone(), value))
            },
            Err(env::VarError::NotPresent) => {
                warn!(env_var = %env_var, "Secret not found in environment");
                Err(ApplicationError::NotFound(format!(
                    "Secret not found: {name} (env: {env_var})"
                )))
            },
            Err(env::VarError::NotUnicode(_)) => Err(ApplicationError::Configuration(format!(
                "Secret contains invalid UTF-8: {env_var}"
            ))),
        }
    }

    async fn put_secret(
        &self,
        _name: &SecretName,
        _value: &str,
    ) -> Result<SecretWrite, ApplicationError> {
        Err(Self::read_only("writing"))
    }

    async fn delete_secret(&self, _name: &SecretName) -> Result<(), ApplicationError> {
        Err(Self::read_only("deleting"))
    }

    async fn exists(&self, name: &SecretName) -> Result<bool, ApplicationError> {
        Ok(env::var(self.key_to_env_var(name)).is_ok())
    }

    fn backend(&self) -> &'static str {
        "env"
    }

    async fn is_healthy(&self) -> bool {
        // Environment variables are always accessible
        true
    }
}

//! Provider credential resolution
//!
//! Runs once at startup. A key set directly in configuration wins; otherwise
//! the key is read from the secret store under its logical name. The
//! resolved value is handed to the provider adapter and kept for the life of
//! the process: rotating a key in the store takes effect on the next restart.

use std::{fmt, sync::Arc};

use domain::SecretName;
use tracing::{info, instrument, warn};

use crate::ports::SecretStorePort;

/// Where a credential came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Set directly in configuration or environment
    Config,
    /// Read from the secret store backend with the given identifier
    SecretStore(&'static str),
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => write!(f, "config"),
            Self::SecretStore(backend) => write!(f, "secret store ({backend})"),
        }
    }
}

/// A credential ready to be handed to a provider client
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedCredential {
    value: String,
    source: CredentialSource,
}

impl ResolvedCredential {
    /// The credential value
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Where the value came from
    #[must_use]
    pub const fn source(&self) -> CredentialSource {
        self.source
    }
}

impl fmt::Debug for ResolvedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCredential")
            .field("value", &"[REDACTED]")
            .field("source", &self.source)
            .finish()
    }
}

/// Resolves provider API keys from configuration or the secret store
pub struct CredentialResolver {
    store: Option<Arc<dyn SecretStorePort>>,
}

impl fmt::Debug for CredentialResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialResolver")
            .field("store", &self.store.as_ref().map(|s| s.backend()))
            .finish()
    }
}

impl CredentialResolver {
    /// Create a resolver backed by a secret store
    pub fn new(store: Arc<dyn SecretStorePort>) -> Self {
        Self { store: Some(store) }
    }

    /// Create a resolver that only honours configured values
    pub fn config_only() -> Self {
        Self { store: None }
    }

    /// Resolve the credential for `provider`
    ///
    /// Returns `None` when neither source has a non-empty value; the caller
    /// is expected to leave that provider unconfigured and keep serving.
    #[instrument(skip(self, configured, secret), fields(secret = %secret))]
    pub async fn resolve(
        &self,
        provider: &str,
        configured: Option<&str>,
        secret: &SecretName,
    ) -> Option<ResolvedCredential> {
        if let Some(value) = configured.filter(|v| !v.trim().is_empty()) {
            info!(provider, "Using credential from configuration");
            return Some(ResolvedCredential {
                value: value.to_string(),
                source: CredentialSource::Config,
            });
        }

        let Some(store) = &self.store else {
            warn!(provider, "No credential configured and no secret store available");
            return None;
        };

        match store.get_secret(secret).await {
            Ok(found) if !found.value.trim().is_empty() => {
                info!(provider, backend = store.backend(), "Loaded credential from secret store");
                Some(ResolvedCredential {
                    value: found.value,
                    source: CredentialSource::SecretStore(store.backend()),
                })
            },
            Ok(_) => {
                warn!(provider, "Secret exists but is empty");
                None
            },
            Err(e) => {
                warn!(provider, error = %e, "Failed to load credential from secret store");
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::Secret;

    use super::*;
    use crate::{error::ApplicationError, ports::MockSecretStorePort};

    fn name() -> SecretName {
        SecretName::parse("google-maps-api-key").unwrap()
    }

    #[tokio::test]
    async fn configured_value_wins_without_store_lookup() {
        let mut store = MockSecretStorePort::new();
        store.expect_get_secret().times(0);
        store.expect_backend().return_const("memory");

        let resolver = CredentialResolver::new(Arc::new(store));
        let resolved = resolver
            .resolve("geocoding", Some("cfg-key"), &name())
            .await
            .unwrap();

        assert_eq!(resolved.value(), "cfg-key");
        assert_eq!(resolved.source(), CredentialSource::Config);
    }

    #[tokio::test]
    async fn blank_configured_value_falls_back_to_store() {
        let mut store = MockSecretStorePort::new();
        store
            .expect_get_secret()
            .times(1)
            .returning(|n| Ok(Secret::new(n.clone(), "store-key")));
        store.expect_backend().return_const("vault");

        let resolver = CredentialResolver::new(Arc::new(store));
        let resolved = resolver
            .resolve("geocoding", Some("  "), &name())
            .await
            .unwrap();

        assert_eq!(resolved.value(), "store-key");
        assert_eq!(resolved.source(), CredentialSource::SecretStore("vault"));
    }

    #[tokio::test]
    async fn missing_secret_yields_none() {
        let mut store = MockSecretStorePort::new();
        store
            .expect_get_secret()
            .returning(|n| Err(ApplicationError::NotFound(n.to_string())));
        store.expect_backend().return_const("env");

        let resolver = CredentialResolver::new(Arc::new(store));
        assert!(resolver.resolve("sptrans", None, &name()).await.is_none());
    }

    #[tokio::test]
    async fn empty_secret_yields_none() {
        let mut store = MockSecretStorePort::new();
        store
            .expect_get_secret()
            .returning(|n| Ok(Secret::new(n.clone(), "")));
        store.expect_backend().return_const("file");

        let resolver = CredentialResolver::new(Arc::new(store));
        assert!(resolver.resolve("sptrans", None, &name()).await.is_none());
    }

    #[tokio::test]
    async fn config_only_resolver() {
        let resolver = CredentialResolver::config_only();
        assert!(resolver.resolve("sptrans", None, &name()).await.is_none());
        assert!(
            resolver
                .resolve("sptrans", Some("k"), &name())
                .await
                .is_some()
        );
    }

    #[test]
    fn debug_redacts_value() {
        let cred = ResolvedCredential {
            value: "very-secret".to_string(),
            source: CredentialSource::Config,
        };
        let debug = format!("{cred:?}");
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn source_display() {
        assert_eq!(CredentialSource::Config.to_string(), "config");
        assert_eq!(
            CredentialSource::SecretStore("vault").to_string(),
            "secret store (vault)"
        );
    }
}

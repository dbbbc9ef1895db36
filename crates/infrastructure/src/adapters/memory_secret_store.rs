//! In-memory secret store adapter
//!
//! Keeps every version of every secret in a process-local map. Nothing
//! survives a restart; intended for local development and tests.

use std::collections::HashMap;

use application::{error::ApplicationError, ports::SecretStorePort};
use async_trait::async_trait;
use domain::{Secret, SecretName, SecretWrite};
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Versioned secret store held in memory
#[derive(Default)]
pub struct MemorySecretStore {
    secrets: RwLock<HashMap<String, Vec<String>>>,
}

impl std::fmt::Debug for MemorySecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySecretStore").finish_non_exhaustive()
    }
}

impl MemorySecretStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one version per entry
    pub fn with_secrets<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let secrets = entries
            .into_iter()
            .map(|(k, v)| (k.into(), vec![v.into()]))
            .collect();
        Self {
            secrets: RwLock::new(secrets),
        }
    }

    /// Number of versions stored for a secret
    pub async fn version_count(&self, name: &SecretName) -> usize {
        self.secrets
            .read()
            .await
            .get(name.as_str())
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl SecretStorePort for MemorySecretStore {
    #[instrument(skip(self))]
    async fn get_secret(&self, name: &SecretName) -> Result<Secret, ApplicationError> {
        self.secrets
            .read()
            .await
            .get(name.as_str())
            .and_then(|versions| versions.last())
            .map(|value| Secret::new(name.clone(), value.clone()))
            .ok_or_else(|| ApplicationError::NotFound(format!("Secret not found: {name}")))
    }

    #[instrument(skip(self, value))]
    async fn put_secret(
        &self,
        name: &SecretName,
        value: &str,
    ) -> Result<SecretWrite, ApplicationError> {
        let mut secrets = self.secrets.write().await;
        let versions = secrets.entry(name.as_str().to_string()).or_default();
        versions.push(value.to_string());

        let version = versions.len() as u64;
        debug!(version, "Stored secret version");

        Ok(SecretWrite {
            name: name.clone(),
            version: Some(version),
        })
    }

    #[instrument(skip(self))]
    async fn delete_secret(&self, name: &SecretName) -> Result<(), ApplicationError> {
        self.secrets
            .write()
            .await
            .remove(name.as_str())
            .map(|_| ())
            .ok_or_else(|| ApplicationError::NotFound(format!("Secret not found: {name}")))
    }

    async fn exists(&self, name: &SecretName) -> Result<bool, ApplicationError> {
        Ok(self.secrets.read().await.contains_key(name.as_str()))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn is_healthy(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> SecretName {
        SecretName::parse(s).unwrap()
    }

    #[tokio::test]
    async fn create_read_delete() {
        let store = MemorySecretStore::new();
        let key = name("sptrans-olho-vivo-api-key");

        let write = store.put_secret(&key, "abc123").await.unwrap();
        assert_eq!(write.version, Some(1));

        let secret = store.get_secret(&key).await.unwrap();
        assert_eq!(secret.value, "abc123");

        store.delete_secret(&key).await.unwrap();
        assert!(store.get_secret(&key).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn writing_again_adds_a_version() {
        let store = MemorySecretStore::new();
        let key = name("rotating");

        store.put_secret(&key, "v1").await.unwrap();
        let write = store.put_secret(&key, "v2").await.unwrap();

        assert_eq!(write.version, Some(2));
        assert_eq!(store.version_count(&key).await, 2);
        assert_eq!(store.get_secret(&key).await.unwrap().value, "v2");
    }

    #[tokio::test]
    async fn delete_removes_every_version() {
        let store = MemorySecretStore::new();
        let key = name("multi");
        store.put_secret(&key, "a").await.unwrap();
        store.put_secret(&key, "b").await.unwrap();

        store.delete_secret(&key).await.unwrap();

        assert_eq!(store.version_count(&key).await, 0);
        assert!(!store.exists(&key).await.unwrap());
    }

    #[tokio::test]
    async fn deleting_missing_secret_is_not_found() {
        let store = MemorySecretStore::new();
        let err = store.delete_secret(&name("ghost")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn prepopulated_store() {
        let store = MemorySecretStore::with_secrets([("google-maps-api-key", "AIza")]);
        let secret = store.get_secret(&name("google-maps-api-key")).await.unwrap();
        assert_eq!(secret.value, "AIza");
        assert_eq!(store.backend(), "memory");
    }
}

//! Port for secret storage and retrieval
//!
//! This port defines the interface for reading and administering secrets in
//! various backends (environment variables, mounted files, HashiCorp Vault).

use async_trait::async_trait;
use domain::{Secret, SecretName, SecretWrite};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for secret storage operations
///
/// Implementations can retrieve secrets from various backends:
/// - Environment variables (read-only)
/// - Mounted secret volumes (one file per secret)
/// - HashiCorp Vault KV v2 (versioned)
/// - An in-process map (development and tests)
///
/// Read-only backends answer the administrative operations with
/// [`ApplicationError::ServiceUnavailable`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SecretStorePort: Send + Sync {
    /// Retrieve the latest value of a secret
    ///
    /// # Errors
    /// * [`ApplicationError::NotFound`] if the secret does not exist
    /// * [`ApplicationError::NotAuthorized`] if the store denies access
    /// * [`ApplicationError::ExternalService`] if the store is unreachable
    async fn get_secret(&self, name: &SecretName) -> Result<Secret, ApplicationError>;

    /// Create a secret, or add a new version if it already exists
    ///
    /// Creating an existing secret is not an error.
    async fn put_secret(
        &self,
        name: &SecretName,
        value: &str,
    ) -> Result<SecretWrite, ApplicationError>;

    /// Delete a secret and all of its versions
    ///
    /// # Errors
    /// * [`ApplicationError::NotFound`] if the secret does not exist
    async fn delete_secret(&self, name: &SecretName) -> Result<(), ApplicationError>;

    /// Check if a secret exists
    async fn exists(&self, name: &SecretName) -> Result<bool, ApplicationError>;

    /// Short backend identifier used in logs (e.g. "vault", "env")
    fn backend(&self) -> &'static str;

    /// Check if the secret store is healthy and accessible
    async fn is_healthy(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn SecretStorePort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SecretStorePort>();
    }

    #[tokio::test]
    async fn mock_store_get_secret() {
        let mut store = MockSecretStorePort::new();
        store
            .expect_get_secret()
            .returning(|name| Ok(Secret::new(name.clone(), "secret_value")));

        let name = SecretName::parse("test-key").unwrap();
        let secret = store.get_secret(&name).await.unwrap();
        assert_eq!(secret.value, "secret_value");
        assert_eq!(secret.name, name);
    }

    #[tokio::test]
    async fn mock_store_secret_not_found() {
        let mut store = MockSecretStorePort::new();
        store
            .expect_get_secret()
            .returning(|name| Err(ApplicationError::NotFound(format!("Secret not found: {name}"))));

        let name = SecretName::parse("nonexistent").unwrap();
        let result = store.get_secret(&name).await;
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }
}

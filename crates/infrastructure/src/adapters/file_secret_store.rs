//! File-based secret store adapter
//!
//! One file per secret inside a directory, the layout used by mounted
//! secret volumes (Docker secrets, Kubernetes secret mounts). The file
//! name is the secret name. Writes append a single newline terminator and
//! reads strip exactly one, so mounted files ending in a newline and values
//! written through the store both read back as intended.
//! Files hold a single value, so there is no version history.

use std::{io, path::PathBuf};

use application::{error::ApplicationError, ports::SecretStorePort};
use async_trait::async_trait;
use domain::{Secret, SecretName, SecretWrite};
use tracing::{debug, instrument, warn};

/// Secret store backed by a directory of files
#[derive(Debug, Clone)]
pub struct FileSecretStore {
    directory: PathBuf,
}

impl FileSecretStore {
    /// Create a store rooted at `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    // SecretName admits no path separators, so the join stays inside `directory`.
    fn path_for(&self, name: &SecretName) -> PathBuf {
        self.directory.join(name.as_str())
    }

    fn io_error(name: &SecretName, e: &io::Error) -> ApplicationError {
        match e.kind() {
            io::ErrorKind::NotFound => {
                ApplicationError::NotFound(format!("Secret not found: {name}"))
            },
            io::ErrorKind::PermissionDenied => {
                ApplicationError::NotAuthorized(format!("Access denied to secret: {name}"))
            },
            _ => ApplicationError::ExternalService(format!("Secret file error for {name}: {e}")),
        }
    }
}

#[async_trait]
impl SecretStorePort for FileSecretStore {
    #[instrument(skip(self))]
    async fn get_secret(&self, name: &SecretName) -> Result<Secret, ApplicationError> {
        let path = self.path_for(name);
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Self::io_error(name, &e))?;

        debug!(path = %path.display(), "Read secret file");
        let value = contents.strip_suffix('\n').unwrap_or(&contents);
        Ok(Secret::new(name.clone(), value))
    }

    #[instrument(skip(self, value))]
    async fn put_secret(
        &self,
        name: &SecretName,
        value: &str,
    ) -> Result<SecretWrite, ApplicationError> {
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| Self::io_error(name, &e))?;

        tokio::fs::write(self.path_for(name), format!("{value}\n"))
            .await
            .map_err(|e| Self::io_error(name, &e))?;

        debug!("Wrote secret file");
        Ok(SecretWrite {
            name: name.clone(),
            version: None,
        })
    }

    #[instrument(skip(self))]
    async fn delete_secret(&self, name: &SecretName) -> Result<(), ApplicationError> {
        tokio::fs::remove_file(self.path_for(name))
            .await
            .map_err(|e| Self::io_error(name, &e))
    }

    async fn exists(&self, name: &SecretName) -> Result<bool, ApplicationError> {
        tokio::fs::try_exists(self.path_for(name))
            .await
            .map_err(|e| Self::io_error(name, &e))
    }

    fn backend(&self) -> &'static str {
        "file"
    }

    async fn is_healthy(&self) -> bool {
        match tokio::fs::metadata(&self.directory).await {
            Ok(meta) => meta.is_dir(),
            Err(e) => {
                warn!(directory = %self.directory.display(), error = %e, "Secret directory unavailable");
                false
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> SecretName {
        SecretName::parse(s).unwrap()
    }

    #[tokio::test]
    async fn reads_mounted_secret_without_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("google-maps-api-key"), "AIza-test\n").unwrap();

        let store = FileSecretStore::new(dir.path());
        let secret = store.get_secret(&name("google-maps-api-key")).await.unwrap();

        assert_eq!(secret.value, "AIza-test");
    }

    #[tokio::test]
    async fn create_read_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSecretStore::new(dir.path().join("nested"));
        let key = name("sptrans-olho-vivo-api-key");

        let write = store.put_secret(&key, "olho-vivo").await.unwrap();
        assert!(write.version.is_none());
        assert!(store.exists(&key).await.unwrap());
        assert_eq!(store.get_secret(&key).await.unwrap().value, "olho-vivo");

        store.delete_secret(&key).await.unwrap();
        assert!(store.get_secret(&key).await.unwrap_err().is_not_found());
        assert!(!store.exists(&key).await.unwrap());
    }

    #[tokio::test]
    async fn value_with_trailing_newlines_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSecretStore::new(dir.path());
        let key = name("signing-key");
        let pem = "-----BEGIN KEY-----\nabc\n-----END KEY-----\n";

        store.put_secret(&key, pem).await.unwrap();
        assert_eq!(store.get_secret(&key).await.unwrap().value, pem);

        store.put_secret(&key, "crlf\r\n\n").await.unwrap();
        assert_eq!(store.get_secret(&key).await.unwrap().value, "crlf\r\n\n");
    }

    #[tokio::test]
    async fn overwrite_replaces_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSecretStore::new(dir.path());
        let key = name("rotating");

        store.put_secret(&key, "old").await.unwrap();
        store.put_secret(&key, "new").await.unwrap();

        assert_eq!(store.get_secret(&key).await.unwrap().value, "new");
    }

    #[tokio::test]
    async fn deleting_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSecretStore::new(dir.path());
        assert!(store.delete_secret(&name("ghost")).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn health_follows_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileSecretStore::new(dir.path()).is_healthy().await);
        assert!(!FileSecretStore::new(dir.path().join("missing")).is_healthy().await);
    }
}

//! Secret store configuration
//!
//! Selects the backend used both for provider credentials at startup and for
//! the `/secrets` administration endpoints.

use std::{fmt, path::PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::adapters::VaultConfig;

/// Secret store backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretBackend {
    /// Environment variables (read-only)
    #[default]
    Env,
    /// One file per secret in a directory
    File,
    /// Process-local map
    Memory,
    /// HashiCorp Vault KV v2
    Vault,
}

impl fmt::Display for SecretBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env => write!(f, "env"),
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
            Self::Vault => write!(f, "vault"),
        }
    }
}

/// Secret store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretsConfig {
    /// Active backend
    #[serde(default)]
    pub backend: SecretBackend,

    /// Prefix for environment variable lookups (`env` backend)
    ///
    /// Always applied, so `/secrets` only reaches variables under this prefix.
    #[serde(default = "default_env_prefix")]
    pub env_prefix: String,

    /// Directory holding one file per secret (`file` backend)
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Vault connection (`vault` backend)
    #[serde(default)]
    pub vault: VaultAppConfig,
}

fn default_env_prefix() -> String {
    "GEOTRANSIT_SECRET".to_string()
}

fn default_directory() -> PathBuf {
    PathBuf::from("/run/secrets")
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            backend: SecretBackend::default(),
            env_prefix: default_env_prefix(),
            directory: default_directory(),
            vault: VaultAppConfig::default(),
        }
    }
}

impl SecretsConfig {
    /// Validate the section for the selected backend
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        match self.backend {
            SecretBackend::Env if self.env_prefix.trim().is_empty() => {
                Err("secrets.env_prefix must not be empty for the env backend".to_string())
            },
            SecretBackend::File if self.directory.as_os_str().is_empty() => {
                Err("secrets.directory must be set for the file backend".to_string())
            },
            SecretBackend::Vault => self.vault.validate(),
            _ => Ok(()),
        }
    }
}

/// Vault connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultAppConfig {
    /// Vault server address
    #[serde(default = "default_vault_address")]
    pub address: String,

    /// Authentication token (prefer GEOTRANSIT_SECRETS__VAULT__TOKEN)
    #[serde(default, skip_serializing)]
    pub token: Option<SecretString>,

    /// AppRole role ID (alternative to token auth)
    #[serde(default)]
    pub role_id: Option<String>,

    /// AppRole secret ID (alternative to token auth)
    #[serde(default, skip_serializing)]
    pub secret_id: Option<SecretString>,

    /// KV v2 mount path
    #[serde(default = "default_mount_path")]
    pub mount_path: String,

    /// Vault Enterprise namespace
    #[serde(default)]
    pub namespace: Option<String>,
}

fn default_vault_address() -> String {
    "http://127.0.0.1:8200".to_string()
}

fn default_mount_path() -> String {
    "secret".to_string()
}

impl Default for VaultAppConfig {
    fn default() -> Self {
        Self {
            address: default_vault_address(),
            token: None,
            role_id: None,
            secret_id: None,
            mount_path: default_mount_path(),
            namespace: None,
        }
    }
}

impl VaultAppConfig {
    /// Convert to the adapter-level `VaultConfig`
    #[must_use]
    pub fn to_vault_config(&self) -> VaultConfig {
        let mut config = VaultConfig::new(&self.address).with_mount_path(&self.mount_path);

        if let Some(ref token) = self.token {
            config = config.with_token(token.expose_secret());
        }

        if let (Some(role_id), Some(secret_id)) = (&self.role_id, &self.secret_id) {
            config = config.with_approle(role_id, secret_id.expose_secret());
        }

        if let Some(ref ns) = self.namespace {
            config = config.with_namespace(ns);
        }

        config
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.address.trim().is_empty() {
            return Err("secrets.vault.address must not be empty".to_string());
        }
        if self.mount_path.trim().is_empty() {
            return Err("secrets.vault.mount_path must not be empty".to_string());
        }

        let has_token = self.token.is_some();
        let has_approle = self.role_id.is_some() && self.secret_id.is_some();
        if !has_token && !has_approle {
            return Err(
                "secrets.vault needs either a token or role_id and secret_id".to_string(),
            );
        }

        Ok(())
    }
}

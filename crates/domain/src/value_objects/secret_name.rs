//! Secret name value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Logical name of a secret in the secret store
///
/// Names are 1-255 characters of ASCII letters, digits, `-` and `_`. This
/// keeps them valid as Vault paths, file names and environment variable
/// suffixes alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecretName(String);

impl SecretName {
    /// Maximum accepted name length
    pub const MAX_LEN: usize = 255;

    /// Parse and validate a secret name
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if name.is_empty() {
            return Err(DomainError::InvalidSecretName(
                "name must not be empty".to_string(),
            ));
        }

        if name.len() > Self::MAX_LEN {
            return Err(DomainError::InvalidSecretName(format!(
                "name must be at most {} characters",
                Self::MAX_LEN
            )));
        }

        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(DomainError::InvalidSecretName(format!(
                "'{name}' contains invalid character '{c}'"
            )));
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecretName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SecretName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SecretName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<SecretName> for String {
    fn from(name: SecretName) -> Self {
        name.0
    }
}

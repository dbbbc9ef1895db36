//! Secrets held in the external secret store

use serde::{Deserialize, Serialize};

use crate::value_objects::SecretName;

/// The latest value of a named secret
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    /// Logical secret name
    pub name: SecretName,
    /// Latest value
    pub value: String,
}

impl Secret {
    /// Create a new secret
    pub fn new(name: SecretName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

// Keeps secret values out of logs
impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Outcome of writing a secret value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretWrite {
    /// Secret that was written
    pub name: SecretName,
    /// Version created by the write, when the backend tracks versions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_value() {
        let secret = Secret::new(SecretName::parse("api-key").unwrap(), "hunter2");
        let debug = format!("{secret:?}");
        assert!(debug.contains("api-key"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn write_without_version_omits_field() {
        let write = SecretWrite {
            name: SecretName::parse("k").unwrap(),
            version: None,
        };
        let json = serde_json::to_value(&write).unwrap();
        assert!(json.get("version").is_none());
    }
}

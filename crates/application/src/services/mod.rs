//! Application services - Use case implementations

mod credential_resolver;

pub use credential_resolver::{CredentialResolver, CredentialSource, ResolvedCredential};

//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod env_secret_store;
mod file_secret_store;
mod google_geocoding_adapter;
mod memory_secret_store;
mod secret_store_factory;
mod sptrans_transit_adapter;
mod vault_secret_store;

pub use env_secret_store::EnvSecretStore;
pub use file_secret_store::FileSecretStore;
pub use google_geocoding_adapter::GoogleGeocodingAdapter;
pub use memory_secret_store::MemorySecretStore;
pub use secret_store_factory::build_secret_store;
pub use sptrans_transit_adapter::SpTransTransitAdapter;
pub use vault_secret_store::{VaultConfig, VaultSecretStore};

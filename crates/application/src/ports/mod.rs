//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod secret_store;
mod transit_port;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use secret_store::MockSecretStorePort;
pub use secret_store::SecretStorePort;
#[cfg(test)]
pub use transit_port::MockTransitPort;
pub use transit_port::TransitPort;

//! Domain entities - Response shapes served by the gateway

mod geocode;
mod secret;
mod transit;

pub use geocode::{GeocodeResult, ReverseGeocodeResult};
pub use secret::{Secret, SecretWrite};
pub use transit::{LinePositions, TransitLine, VehiclePosition};

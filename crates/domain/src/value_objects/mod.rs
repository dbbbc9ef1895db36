//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod secret_name;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use secret_name::SecretName;

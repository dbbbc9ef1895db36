//! Domain layer for the GeoTransit gateway
//!
//! Contains the response entities served by the gateway, the value objects
//! that guard its inputs, and domain errors. This layer has no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

//! Application layer - Use cases and orchestration
//!
//! Defines the ports the gateway talks to (geocoding, transit, secret
//! storage), the error taxonomy shared by every adapter, and the services
//! that run at startup.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

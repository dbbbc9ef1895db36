//! GeoTransit HTTP presentation layer
//!
//! This crate provides the HTTP API of the gateway: routing, request
//! validation, error translation and the server binary.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{
    RequestIdLayer, ValidatedJson, ValidatedPath, ValidatedQuery, ValidationError,
};
pub use routes::create_router;
pub use state::AppState;

//! Google Maps geocoding integration
//!
//! Thin client for the [Google Geocoding API](https://developers.google.com/maps/documentation/geocoding).
//! Exactly one HTTP call is made per operation. Results are returned in
//! provider order with wire field names; mapping into domain types happens
//! in the adapter layer.

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, GoogleMapsClient};
pub use config::GoogleMapsConfig;
pub use error::GoogleMapsError;
pub use models::{Geometry, LatLng, PlaceResult};

//! Geocoding results
//!
//! Every field is copied from the mapping provider's candidate, plus the
//! caller's original input echoed back unchanged.

use serde::{Deserialize, Serialize};

/// A forward geocoding candidate for a textual address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    /// The address exactly as the caller sent it
    pub original_address: String,
    /// Address as formatted by the provider
    pub formatted_address: String,
    /// Latitude of the candidate
    pub latitude: f64,
    /// Longitude of the candidate
    pub longitude: f64,
    /// Provider place identifier
    pub place_id: String,
    /// Provider category tags (e.g. `street_address`, `locality`)
    pub types: Vec<String>,
    /// Whether the provider matched only part of the address
    #[serde(default)]
    pub partial_match: bool,
}

/// A reverse geocoding candidate for a coordinate pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseGeocodeResult {
    /// The latitude exactly as the caller sent it
    pub original_latitude: f64,
    /// The longitude exactly as the caller sent it
    pub original_longitude: f64,
    /// Address as formatted by the provider
    pub formatted_address: String,
    /// Provider place identifier
    pub place_id: String,
    /// Provider category tags
    pub types: Vec<String>,
}

//! Google Geocoding wire models

use serde::{Deserialize, Serialize};

/// Response envelope shared by forward and reverse geocoding
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One geocoding candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    /// Human-readable address
    pub formatted_address: String,
    /// Location of the candidate
    pub geometry: Geometry,
    /// Stable place identifier
    pub place_id: String,
    /// Feature types (e.g. `street_address`, `route`)
    #[serde(default)]
    pub types: Vec<String>,
    /// Set when the match is not exact
    #[serde(default)]
    pub partial_match: bool,
}

/// Geometry block of a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Geocoded point
    pub location: LatLng,
}

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

//! Bus lines and vehicle positions
//!
//! Canonical shapes for the transit telemetry data. The provider's
//! abbreviated field names are mapped onto these by the transit adapter,
//! one field at a time.

use serde::{Deserialize, Serialize};

/// A bus line as returned by the line search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitLine {
    /// Provider line code, used to query positions
    pub code: i64,
    /// Whether the line runs a circular route
    pub circular: bool,
    /// Numeric sign shown on the vehicle (e.g. "8000")
    pub sign: String,
    /// Direction of travel (1 = main terminal to secondary, 2 = back)
    pub direction: i64,
    /// Line kind modifier (e.g. 10 = regular, 21+ = special services)
    pub kind: i64,
    /// Headsign text for the main terminal
    pub main_terminal: String,
    /// Headsign text for the secondary terminal
    pub secondary_terminal: String,
}

/// A single vehicle on a line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehiclePosition {
    /// Vehicle prefix (fleet number)
    pub prefix: String,
    /// Whether the vehicle is wheelchair accessible
    pub accessible: bool,
    /// When the position was captured, as reported by the provider
    pub updated_at: String,
    /// Latitude of the vehicle
    pub latitude: f64,
    /// Longitude of the vehicle
    pub longitude: f64,
    /// Whether the reported position is a stop point, when the provider says so
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_point: Option<bool>,
}

/// Snapshot of all vehicles on a line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePositions {
    /// Time the provider generated the snapshot
    pub timestamp: String,
    /// Vehicles in provider order
    pub vehicles: Vec<VehiclePosition>,
}

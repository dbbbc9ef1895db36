//! Geocoding service port
//!
//! Defines the interface for forward and reverse geocoding.

use async_trait::async_trait;
use domain::{GeocodeResult, ReverseGeocodeResult, value_objects::GeoLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding operations
///
/// Implementations make exactly one upstream call per invocation and never
/// retry. An address can resolve to several candidates; all of them are
/// returned in provider order.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a textual address to coordinate candidates
    ///
    /// Every returned result echoes `address` unchanged.
    ///
    /// # Errors
    /// * [`ApplicationError::NotFound`] when the provider returns no candidates
    /// * [`ApplicationError::ExternalService`] on any provider or network failure
    async fn geocode_address(&self, address: &str)
    -> Result<Vec<GeocodeResult>, ApplicationError>;

    /// Resolve a coordinate pair to address candidates
    ///
    /// Every returned result echoes the input coordinates unchanged.
    async fn reverse_geocode(
        &self,
        location: GeoLocation,
    ) -> Result<Vec<ReverseGeocodeResult>, ApplicationError>;
}

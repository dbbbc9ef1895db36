//! Geocoding adapter - Implements GeocodingPort using integration_googlemaps

use std::sync::Arc;

use application::{error::ApplicationError, ports::GeocodingPort};
use async_trait::async_trait;
use domain::{GeocodeResult, ReverseGeocodeResult, value_objects::GeoLocation};
use integration_googlemaps::{
    GeocodingClient, GoogleMapsClient, GoogleMapsConfig, GoogleMapsError, PlaceResult,
};
use tracing::{debug, instrument};

/// Adapter for forward and reverse geocoding via the Google Geocoding API
pub struct GoogleGeocodingAdapter {
    client: Arc<dyn GeocodingClient>,
}

impl std::fmt::Debug for GoogleGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleGeocodingAdapter").finish_non_exhaustive()
    }
}

impl GoogleGeocodingAdapter {
    /// Wrap an existing client
    pub fn new(client: Arc<dyn GeocodingClient>) -> Self {
        Self { client }
    }

    /// Build the adapter with a Google client
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn from_config(config: &GoogleMapsConfig, api_key: &str) -> Result<Self, ApplicationError> {
        let client = GoogleMapsClient::new(config, api_key).map_err(map_error)?;
        Ok(Self::new(Arc::new(client)))
    }

    fn to_geocode_result(address: &str, place: PlaceResult) -> GeocodeResult {
        GeocodeResult {
            original_address: address.to_string(),
            formatted_address: place.formatted_address,
            latitude: place.geometry.location.lat,
            longitude: place.geometry.location.lng,
            place_id: place.place_id,
            types: place.types,
            partial_match: place.partial_match,
        }
    }

    fn to_reverse_result(location: GeoLocation, place: PlaceResult) -> ReverseGeocodeResult {
        ReverseGeocodeResult {
            original_latitude: location.latitude(),
            original_longitude: location.longitude(),
            formatted_address: place.formatted_address,
            place_id: place.place_id,
            types: place.types,
        }
    }
}

fn map_error(e: GoogleMapsError) -> ApplicationError {
    match e {
        GoogleMapsError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

#[async_trait]
impl GeocodingPort for GoogleGeocodingAdapter {
    #[instrument(skip(self))]
    async fn geocode_address(
        &self,
        address: &str,
    ) -> Result<Vec<GeocodeResult>, ApplicationError> {
        let places = self.client.geocode(address).await.map_err(map_error)?;

        if places.is_empty() {
            return Err(ApplicationError::NotFound(format!(
                "No geocoding results for address: {address}"
            )));
        }

        debug!(count = places.len(), "Geocoded address");
        Ok(places
            .into_iter()
            .map(|place| Self::to_geocode_result(address, place))
            .collect())
    }

    #[instrument(skip(self), fields(location = %location))]
    async fn reverse_geocode(
        &self,
        location: GeoLocation,
    ) -> Result<Vec<ReverseGeocodeResult>, ApplicationError> {
        let places = self
            .client
            .reverse_geocode(location)
            .await
            .map_err(map_error)?;

        if places.is_empty() {
            return Err(ApplicationError::NotFound(format!(
                "No geocoding results for coordinates: {location}"
            )));
        }

        debug!(count = places.len(), "Reverse geocoded coordinates");
        Ok(places
            .into_iter()
            .map(|place| Self::to_reverse_result(location, place))
            .collect())
    }
}

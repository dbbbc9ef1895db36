//! Forward and reverse geocoding handlers

use axum::{Json, extract::State};
use domain::{GeocodeResult, ReverseGeocodeResult, value_objects::GeoLocation};
use serde::Deserialize;
use tracing::instrument;
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedQuery, state::AppState};

/// Query for `/geocode/address`
#[derive(Debug, Deserialize, Validate)]
pub struct AddressQuery {
    /// Free-text address
    #[validate(length(min = 1, max = 1024, message = "must be between 1 and 1024 characters"))]
    pub address: String,
}

/// Query for `/geocode/latlng`
#[derive(Debug, Deserialize, Validate)]
pub struct LatLngQuery {
    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub longitude: f64,
}

/// Resolve an address to coordinate candidates
#[instrument(skip(state))]
pub async fn geocode_address(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<AddressQuery>,
) -> Result<Json<Vec<GeocodeResult>>, ApiError> {
    let results = state.geocoding()?.geocode_address(&query.address).await?;
    Ok(Json(results))
}

/// Resolve coordinates to address candidates
#[instrument(skip(state))]
pub async fn reverse_geocode(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<LatLngQuery>,
) -> Result<Json<Vec<ReverseGeocodeResult>>, ApiError> {
    let location = GeoLocation::new(query.latitude, query.longitude)?;
    let results = state.geocoding()?.reverse_geocode(location).await?;
    Ok(Json(results))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_address_fails_rules() {
        let query = AddressQuery {
            address: String::new(),
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn coordinates_outside_range_fail_rules() {
        let query = LatLngQuery {
            latitude: -23.5,
            longitude: 200.0,
        };
        let errors = query.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("longitude"));
        assert!(!errors.field_errors().contains_key("latitude"));
    }

    #[test]
    fn boundary_coordinates_pass_rules() {
        let query = LatLngQuery {
            latitude: 90.0,
            longitude: -180.0,
        };
        assert!(query.validate().is_ok());
    }
}

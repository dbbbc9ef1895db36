//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{GeoLocation, SecretName};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn query_pair_round_trips(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::new(lat, lon).unwrap();
            let pair = loc.to_query_pair();
            let (lat_str, lon_str) = pair.split_once(',').unwrap();
            prop_assert_eq!(lat_str.parse::<f64>().unwrap(), lat);
            prop_assert_eq!(lon_str.parse::<f64>().unwrap(), lon);
        }
    }
}

// ============================================================================
// SecretName Property Tests
// ============================================================================

mod secret_name_tests {
    use super::*;

    proptest! {
        #[test]
        fn allowed_alphabet_accepted(name in "[A-Za-z0-9_-]{1,255}") {
            let parsed = SecretName::parse(name.clone());
            prop_assert!(parsed.is_ok());
            let parsed = parsed.unwrap();
            prop_assert_eq!(parsed.as_str(), name.as_str());
        }

        #[test]
        fn names_with_separators_rejected(
            head in "[a-z]{0,10}",
            sep in prop_oneof![Just('/'), Just('.'), Just(' '), Just('\\')],
            tail in "[a-z]{0,10}"
        ) {
            let name = format!("{head}{sep}{tail}");
            prop_assert!(SecretName::parse(name).is_err());
        }
    }
}

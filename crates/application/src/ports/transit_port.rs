//! Public transit service port
//!
//! Defines the interface for bus-line lookup and vehicle-position polling.
//! Adapters in the infrastructure layer implement this port using the
//! transit provider's session-authenticated API.

use async_trait::async_trait;
use domain::{LinePositions, TransitLine};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for transit telemetry operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TransitPort: Send + Sync {
    /// Search bus lines by name or number
    ///
    /// An empty list is a valid result.
    ///
    /// # Errors
    /// * [`ApplicationError::ServiceUnavailable`] when authentication fails
    /// * [`ApplicationError::ExternalService`] on any provider or network failure
    async fn search_lines(&self, term: &str) -> Result<Vec<TransitLine>, ApplicationError>;

    /// Get the current vehicle positions for a line code
    async fn line_positions(&self, line_code: i64) -> Result<LinePositions, ApplicationError>;

    /// Whether a provider session is currently held
    async fn is_authenticated(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn TransitPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn TransitPort>();
    }

    #[tokio::test]
    async fn mock_search_lines_can_be_empty() {
        let mut mock = MockTransitPort::new();
        mock.expect_search_lines().returning(|_| Ok(Vec::new()));

        let lines = mock.search_lines("8000").await.unwrap();
        assert!(lines.is_empty());
    }

    #[tokio::test]
    async fn mock_propagates_unavailable() {
        let mut mock = MockTransitPort::new();
        mock.expect_line_positions().returning(|_| {
            Err(ApplicationError::ServiceUnavailable(
                "authentication failed".to_string(),
            ))
        });

        let result = mock.line_positions(1273).await;
        assert!(matches!(
            result,
            Err(ApplicationError::ServiceUnavailable(_))
        ));
    }
}

//! Transit adapter - Implements TransitPort using integration_sptrans

use std::sync::Arc;

use application::{error::ApplicationError, ports::TransitPort};
use async_trait::async_trait;
use domain::{LinePositions, TransitLine, VehiclePosition};
use integration_sptrans::{
    Line, OlhoVivoClient, Positions, SpTransClient, SpTransConfig, SpTransError, Vehicle,
};
use tracing::{instrument, warn};

/// Adapter for SPTrans Olho Vivo bus telemetry
pub struct SpTransTransitAdapter {
    client: Arc<dyn SpTransClient>,
}

impl std::fmt::Debug for SpTransTransitAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpTransTransitAdapter").finish_non_exhaustive()
    }
}

impl SpTransTransitAdapter {
    /// Wrap an existing client
    pub fn new(client: Arc<dyn SpTransClient>) -> Self {
        Self { client }
    }

    /// Build the adapter with an Olho Vivo client
    ///
    /// The client authenticates lazily on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn from_config(config: &SpTransConfig, api_key: &str) -> Result<Self, ApplicationError> {
        let client = OlhoVivoClient::new(config, api_key).map_err(map_error)?;
        Ok(Self::new(Arc::new(client)))
    }

    fn to_line(raw: Line) -> TransitLine {
        TransitLine {
            code: raw.cl,
            circular: raw.lc,
            sign: raw.lt,
            direction: raw.sl,
            kind: raw.tl,
            main_terminal: raw.tp,
            secondary_terminal: raw.ts,
        }
    }

    fn to_vehicle(raw: Vehicle) -> VehiclePosition {
        VehiclePosition {
            prefix: raw.p,
            accessible: raw.a,
            updated_at: raw.ta,
            latitude: raw.py,
            longitude: raw.px,
            stop_point: raw.l,
        }
    }

    fn to_positions(raw: Positions) -> LinePositions {
        LinePositions {
            timestamp: raw.hr,
            vehicles: raw.vs.into_iter().map(Self::to_vehicle).collect(),
        }
    }
}

fn map_error(e: SpTransError) -> ApplicationError {
    match e {
        SpTransError::AuthenticationFailed(msg) => {
            warn!(reason = %msg, "SPTrans authentication failed");
            ApplicationError::ServiceUnavailable(format!(
                "SPTrans authentication failed: {msg}"
            ))
        },
        SpTransError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
        other => ApplicationError::ExternalService(format!("SPTrans request failed: {other}")),
    }
}

#[async_trait]
impl TransitPort for SpTransTransitAdapter {
    #[instrument(skip(self))]
    async fn search_lines(&self, term: &str) -> Result<Vec<TransitLine>, ApplicationError> {
        let lines = self.client.search_lines(term).await.map_err(map_error)?;
        Ok(lines.into_iter().map(Self::to_line).collect())
    }

    #[instrument(skip(self))]
    async fn line_positions(&self, line_code: i64) -> Result<LinePositions, ApplicationError> {
        let positions = self
            .client
            .line_positions(line_code)
            .await
            .map_err(map_error)?;
        Ok(Self::to_positions(positions))
    }

    async fn is_authenticated(&self) -> bool {
        self.client.is_authenticated().await
    }
}

//! Olho Vivo client with an explicitly held session cookie

use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::config::SpTransConfig;
use crate::error::SpTransError;
use crate::models::{Line, Positions};

/// Trait for Olho Vivo clients
#[async_trait]
pub trait SpTransClient: Send + Sync {
    /// Exchange the API key for a session
    ///
    /// Returns `Ok(false)` when the API refuses the key. The held session is
    /// replaced on success and cleared otherwise.
    async fn authenticate(&self) -> Result<bool, SpTransError>;

    /// Search lines by number or name fragment
    async fn search_lines(&self, term: &str) -> Result<Vec<Line>, SpTransError>;

    /// Current vehicle positions for a line code
    async fn line_positions(&self, line_code: i64) -> Result<Positions, SpTransError>;

    /// Whether a session is currently held
    async fn is_authenticated(&self) -> bool;
}

#[derive(Clone)]
struct Session {
    cookie: String,
}

/// Client for the SPTrans Olho Vivo API v2.1
pub struct OlhoVivoClient {
    client: Client,
    config: SpTransConfig,
    api_key: String,
    session: RwLock<Option<Session>>,
}

impl fmt::Debug for OlhoVivoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OlhoVivoClient")
            .field("base_url", &self.config.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl OlhoVivoClient {
    /// Create a new client
    ///
    /// No request is made until the first call.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &SpTransConfig, api_key: impl Into<String>) -> Result<Self, SpTransError> {
        config.validate().map_err(SpTransError::ConfigurationError)?;

        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SpTransError::ConfigurationError(
                "API key must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("GeoTransit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SpTransError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
            session: RwLock::new(None),
        })
    }

    fn map_send_error(&self, e: &reqwest::Error) -> SpTransError {
        if e.is_timeout() {
            SpTransError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            SpTransError::ConnectionFailed(e.to_string())
        }
    }

    async fn clear_session(&self) {
        *self.session.write().await = None;
    }

    /// Log in and return the new session cookie, or `None` when refused
    ///
    /// Any outcome other than an accepted login drops the held session.
    async fn login(&self) -> Result<Option<String>, SpTransError> {
        let outcome = self.request_session().await;
        match &outcome {
            Ok(Some(cookie)) => {
                info!("Olho Vivo session established");
                *self.session.write().await = Some(Session {
                    cookie: cookie.clone(),
                });
            },
            Ok(None) | Err(_) => self.clear_session().await,
        }
        outcome
    }

    async fn request_session(&self) -> Result<Option<String>, SpTransError> {
        let url = format!("{}/Login/Autenticar", self.config.base());

        debug!(?url, "Authenticating with Olho Vivo");

        let response = self
            .client
            .post(&url)
            .query(&[("token", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Olho Vivo login answered with an error status");
            return Ok(None);
        }

        let cookie = session_cookie(&response);
        let body = response
            .text()
            .await
            .map_err(|e| SpTransError::ParseError(e.to_string()))?;

        let accepted = matches!(
            serde_json::from_str::<serde_json::Value>(body.trim()),
            Ok(serde_json::Value::Bool(true))
        );

        if accepted {
            Ok(Some(cookie))
        } else {
            warn!("Olho Vivo refused the API key");
            Ok(None)
        }
    }

    /// Return the held cookie, authenticating once if none is held
    async fn ensure_session(&self) -> Result<String, SpTransError> {
        if let Some(session) = self.session.read().await.as_ref() {
            return Ok(session.cookie.clone());
        }

        match self.login().await {
            Ok(Some(cookie)) => Ok(cookie),
            Ok(None) => Err(SpTransError::AuthenticationFailed(
                "login did not return true".to_string(),
            )),
            Err(e) => Err(SpTransError::AuthenticationFailed(e.to_string())),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, SpTransError> {
        let cookie = self.ensure_session().await?;
        let url = format!("{}{path}", self.config.base());

        debug!(?url, "Querying Olho Vivo");

        let mut request = self.client.get(&url).query(params);
        if !cookie.is_empty() {
            request = request.header(header::COOKIE, cookie);
        }

        let response = request.send().await.map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(%status, "Olho Vivo rejected the session");
            self.clear_session().await;
            return Err(SpTransError::SessionRejected {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            return Err(SpTransError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SpTransError::ParseError(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| SpTransError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl SpTransClient for OlhoVivoClient {
    #[instrument(skip(self))]
    async fn authenticate(&self) -> Result<bool, SpTransError> {
        self.login().await.map(|cookie| cookie.is_some())
    }

    #[instrument(skip(self))]
    async fn search_lines(&self, term: &str) -> Result<Vec<Line>, SpTransError> {
        let lines: Vec<Line> = self
            .get_json("/Linha/Buscar", &[("termosBusca", term.to_string())])
            .await?;

        debug!(count = lines.len(), "Lines found");
        Ok(lines)
    }

    #[instrument(skip(self))]
    async fn line_positions(&self, line_code: i64) -> Result<Positions, SpTransError> {
        let positions: Positions = self
            .get_json("/Posicao/Linha", &[("codigoLinha", line_code.to_string())])
            .await?;

        debug!(vehicles = positions.vs.len(), "Positions fetched");
        Ok(positions)
    }

    async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }
}

/// Join the `name=value` part of every `Set-Cookie` header
fn session_cookie(response: &Response) -> String {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

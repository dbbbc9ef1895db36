//! SPTrans Olho Vivo integration
//!
//! Provides bus-line search and live vehicle positions for São Paulo via the
//! [Olho Vivo](https://www.sptrans.com.br/desenvolvedores/) API v2.1.
//!
//! # Sessions
//!
//! The API authenticates with an API key exchanged for a session cookie.
//! [`OlhoVivoClient`] holds that cookie as explicit state:
//!
//! - no session held → the next call authenticates once, then proceeds
//! - authentication answered with anything but a literal `true` → the
//!   session is cleared and the call fails with
//!   [`SpTransError::AuthenticationFailed`] without touching the data endpoint
//! - a data endpoint answers `401`/`403` → the session is cleared so the next
//!   call authenticates again; the current call fails
//!
//! Nothing is retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_sptrans::{OlhoVivoClient, SpTransClient, SpTransConfig};
//!
//! let client = OlhoVivoClient::new(&SpTransConfig::default(), api_key)?;
//! let lines = client.search_lines("8000").await?;
//! let positions = client.line_positions(lines[0].cl).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{OlhoVivoClient, SpTransClient};
pub use config::SpTransConfig;
pub use error::SpTransError;
pub use models::{Line, Positions, Vehicle};

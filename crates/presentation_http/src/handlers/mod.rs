//! HTTP request handlers

pub mod geocode;
pub mod health;
pub mod secrets;
pub mod sptrans;

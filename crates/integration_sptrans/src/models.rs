//! Olho Vivo wire models
//!
//! Field names mirror the API's abbreviations. The only normalisation done
//! here is type-level: vehicle prefixes become strings and the stop-point
//! flag becomes a real boolean even when the API sends `"true"`/`"false"`.

use serde::{Deserialize, Deserializer, Serialize};

/// A bus line returned by `/Linha/Buscar`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Line code
    pub cl: i64,
    /// Circular route flag
    pub lc: bool,
    /// Numeric part of the sign
    pub lt: String,
    /// Direction (1 or 2)
    pub sl: i64,
    /// Sign modifier
    pub tl: i64,
    /// Main terminal headsign
    pub tp: String,
    /// Secondary terminal headsign
    pub ts: String,
}

/// Snapshot returned by `/Posicao/Linha`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Positions {
    /// Time the snapshot was generated
    pub hr: String,
    /// Vehicles on the line
    #[serde(default)]
    pub vs: Vec<Vehicle>,
}

/// One vehicle in a positions snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Vehicle prefix
    #[serde(deserialize_with = "prefix_as_string")]
    pub p: String,
    /// Accessible vehicle
    pub a: bool,
    /// Time of capture
    pub ta: String,
    /// Latitude
    pub py: f64,
    /// Longitude
    pub px: f64,
    /// Stop-point flag
    #[serde(default, deserialize_with = "lenient_bool")]
    pub l: Option<bool>,
}

fn prefix_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Prefix {
        Number(i64),
        Text(String),
    }

    Ok(match Prefix::deserialize(deserializer)? {
        Prefix::Number(n) => n.to_string(),
        Prefix::Text(s) => s,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(Option::<Flag>::deserialize(deserializer)?.map(|flag| match flag {
        Flag::Bool(b) => b,
        Flag::Text(s) => s.trim().eq_ignore_ascii_case("true"),
    }))
}

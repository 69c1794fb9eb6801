//! Typed models for FiveM status endpoint responses
//!
//! The endpoints return loosely structured JSON; these types decode the
//! fields the crate actually exposes and default everything a server may
//! omit. Unknown fields are ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A connected player, as reported by the `players` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Server-assigned player id
    pub id: u32,
    /// Display name
    pub name: String,
    /// Round-trip latency in milliseconds
    #[serde(default)]
    pub ping: u32,
    /// License/steam/discord identifiers attached to the player
    #[serde(default)]
    pub identifiers: Vec<String>,
    /// Remote address, when the server exposes it
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Server metadata, as reported by the `info` endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Names of resources currently running on the server
    #[serde(default)]
    pub resources: Vec<String>,
    /// Convar key/value pairs published by the server
    #[serde(default)]
    pub vars: HashMap<String, Value>,
    /// Server build string
    #[serde(default)]
    pub server: Option<String>,
    /// Info format version
    #[serde(default)]
    pub version: Option<u64>,
}

impl ServerInfo {
    /// Returns true if `name` appears in the running resource list
    pub fn has_resource(&self, name: &str) -> bool {
        self.resources.iter().any(|r| r == name)
    }
}

/// Argument type for player lookups
///
/// Player ids arrive from callers as numbers or as strings (CLI arguments,
/// chat input); both convert into this type and are coerced to the numeric
/// server id before the roster is scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerId {
    /// Already-numeric server id
    Numeric(u32),
    /// Textual id, parsed on demand
    Text(String),
}

impl PlayerId {
    /// Coerces the id to its numeric form
    ///
    /// Returns `None` when the textual form does not parse as an integer.
    pub fn as_numeric(&self) -> Option<u32> {
        match self {
            PlayerId::Numeric(id) => Some(*id),
            PlayerId::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        PlayerId::Numeric(id)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        PlayerId::Text(id.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        PlayerId::Text(id)
    }
}

//! FiveM server status client
//!
//! Provides `StatusClient`, a client for a single server's public status
//! endpoints (`players.json`, `info.json`, `dynamic.json`). All accessors run
//! through one cached, time-bound, fail-soft fetch primitive: responses are
//! cached per endpoint for a configurable TTL, each request is bounded by a
//! timeout, and every failure collapses to `None` rather than an error.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::cache::EndpointCache;
use crate::data::{Player, PlayerId, ServerInfo};

/// Default port FiveM servers listen on for status queries
pub const DEFAULT_PORT: u16 = 30120;

/// Default per-request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Default cache time-to-live in milliseconds
pub const DEFAULT_CACHE_TTL_MS: u64 = 60_000;

/// Endpoint serving the player roster
pub const ENDPOINT_PLAYERS: &str = "players";

/// Endpoint serving static server metadata (resources, convars, version)
pub const ENDPOINT_INFO: &str = "info";

/// Endpoint serving live state (client count, capacity, map)
pub const ENDPOINT_DYNAMIC: &str = "dynamic";

/// Errors on the internal request path
///
/// These never cross the public boundary: `fetch_endpoint` collapses all of
/// them to `None`. They exist so the request path can use `?` and so failures
/// can be logged with their cause.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed (includes connect errors and timeouts)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned status {0}")]
    Status(StatusCode),

    /// Body was not valid JSON
    #[error("failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for querying a FiveM server's status endpoints
///
/// Holds the server's base URL, a per-request timeout, and a TTL cache of
/// prior responses. A fresh cached response is served without touching the
/// network; on any failure (timeout, transport error, bad status, bad JSON)
/// accessors return their neutral default and the cache is left untouched.
#[derive(Debug)]
pub struct StatusClient {
    /// HTTP client for making requests
    http: Client,
    /// Base address of the server, e.g. `http://203.0.113.7:30120`
    base_url: String,
    /// Upper bound on each individual request
    timeout: Duration,
    /// Per-endpoint response cache
    cache: EndpointCache,
}

impl StatusClient {
    /// Creates a client for `host` on the default port (30120)
    pub fn new(host: impl AsRef<str>) -> Self {
        Self::with_address(host, DEFAULT_PORT)
    }

    /// Creates a client for an explicit `host:port` pair
    pub fn with_address(host: impl AsRef<str>, port: u16) -> Self {
        Self::with_base_url(format!("http://{}:{}", host.as_ref(), port))
    }

    /// Creates a client for a full base URL
    ///
    /// Useful when the server sits behind a proxy, or for pointing the
    /// client at a mock server in tests. A trailing slash is trimmed.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            cache: EndpointCache::new(Duration::from_millis(DEFAULT_CACHE_TTL_MS)),
        }
    }

    /// Sets the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the cache TTL, resetting the (empty) cache
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = EndpointCache::new(ttl);
        self
    }

    /// Returns the response cache for inspection
    ///
    /// Values are always cloned out of the store; this handle never yields
    /// references into cache entries.
    pub fn cache(&self) -> &EndpointCache {
        &self.cache
    }

    /// Returns the base URL this client queries
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches a status endpoint, serving from the cache when fresh
    ///
    /// This is the single code path through which every accessor touches the
    /// network and the cache:
    ///
    /// 1. A fresh cache entry for `endpoint` is returned immediately.
    /// 2. Otherwise `GET <base>/<endpoint>.json` is issued, bounded by the
    ///    configured timeout. On success the decoded body is cached and
    ///    returned; on any failure `None` is returned and the cache keeps
    ///    whatever it previously held for this endpoint.
    ///
    /// Failures are indistinguishable to the caller: treat `None` as
    /// "unknown", not "confirmed absent".
    pub async fn fetch_endpoint(&self, endpoint: &str) -> Option<Value> {
        if let Some(data) = self.cache.get_fresh(endpoint) {
            tracing::debug!(endpoint, "serving cached response");
            return Some(data);
        }

        match self.request_endpoint(endpoint).await {
            Ok(data) => {
                self.cache.insert(endpoint, data.clone());
                Some(data)
            }
            Err(err) => {
                tracing::warn!(endpoint, error = %err, "endpoint fetch failed");
                None
            }
        }
    }

    /// Issues the actual HTTP request for an endpoint
    async fn request_endpoint(&self, endpoint: &str) -> Result<Value, FetchError> {
        let url = format!("{}/{}.json", self.base_url, endpoint);

        let response = self.http.get(&url).timeout(self.timeout).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Checks whether the server is currently reachable
    pub async fn is_online(&self) -> bool {
        self.fetch_endpoint(ENDPOINT_DYNAMIC).await.is_some()
    }

    /// Returns the roster of connected players
    ///
    /// Empty when the fetch fails or the body does not decode as a roster.
    pub async fn players(&self) -> Vec<Player> {
        let Some(data) = self.fetch_endpoint(ENDPOINT_PLAYERS).await else {
            return Vec::new();
        };

        match serde_json::from_value(data) {
            Ok(players) => players,
            Err(err) => {
                tracing::warn!(error = %err, "player roster did not decode");
                Vec::new()
            }
        }
    }

    /// Returns the number of connected players
    pub async fn player_count(&self) -> usize {
        self.players().await.len()
    }

    /// Finds a player by server id
    ///
    /// Accepts the id as a number or a string; strings are coerced to the
    /// numeric id before the roster is scanned. Returns `None` when no player
    /// matches or the argument does not parse.
    pub async fn player_by_id(&self, id: impl Into<PlayerId>) -> Option<Player> {
        let id = id.into().as_numeric()?;
        self.players().await.into_iter().find(|p| p.id == id)
    }

    /// Returns decoded server metadata (resources, convars, version)
    pub async fn server_info(&self) -> Option<ServerInfo> {
        let data = self.fetch_endpoint(ENDPOINT_INFO).await?;
        match serde_json::from_value(data) {
            Ok(info) => Some(info),
            Err(err) => {
                tracing::warn!(error = %err, "server info did not decode");
                None
            }
        }
    }

    /// Returns the server's maximum player capacity
    ///
    /// Servers report `sv_maxclients` as either a JSON number or a numeric
    /// string; both are accepted. `None` when the fetch fails or the field is
    /// absent or malformed — never `Some(0)` as a failure stand-in.
    pub async fn max_players(&self) -> Option<u32> {
        let data = self.fetch_endpoint(ENDPOINT_DYNAMIC).await?;
        match data.get("sv_maxclients")? {
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Checks whether a resource is running on the server
    ///
    /// `false` when the metadata fetch fails, so absence and failure look the
    /// same here.
    pub async fn has_resource(&self, name: &str) -> bool {
        match self.server_info().await {
            Some(info) => info.has_resource(name),
            None => false,
        }
    }
}

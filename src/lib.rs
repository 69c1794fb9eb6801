//! FiveM Server Status Library
//!
//! A client for querying a FiveM server's public status endpoints over HTTP,
//! with a short-TTL response cache and a fail-soft error policy: transient
//! network trouble degrades to `None`/empty results instead of errors.

pub mod cache;
pub mod cli;
pub mod client;
pub mod data;

pub use cache::{CachedValue, EndpointCache};
pub use client::{FetchError, StatusClient};
pub use data::{Player, PlayerId, ServerInfo};

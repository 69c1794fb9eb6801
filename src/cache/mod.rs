//! Cache module for storing endpoint responses in memory
//!
//! This module provides an in-memory store that keeps decoded endpoint
//! responses together with a fetch timestamp. Freshness is evaluated at read
//! time against a configurable TTL; stale entries stay in the store until the
//! next successful fetch for the same key overwrites them.

mod store;

pub use store::{CachedValue, EndpointCache};

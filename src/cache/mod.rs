//! In-memory caching of API responses
//!
//! This module provides a bounded cache for decoded WordPress API responses
//! with per-entry TTL (time-to-live) values, plus deterministic cache key
//! derivation from an endpoint name and its query parameters. Expired entries
//! are removed lazily on lookup; there is no background sweep.

mod key;
mod store;

pub use key::cache_key;
pub use store::{ResponseCache, DEFAULT_TTL};

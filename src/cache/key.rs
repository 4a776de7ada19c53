//! Cache key derivation
//!
//! Keys are built from the endpoint name and a canonicalized serialization of
//! the query parameters, so logically identical requests map to the same key
//! regardless of the order the parameters were assembled in.

use serde_json::{Map, Value};

/// Derives the cache key for a request
///
/// The parameter list is serialized as a JSON object sorted by key
/// (`serde_json::Map` keeps keys ordered), giving an order-independent,
/// deterministic key. Keys carry a `wp_` prefix so whole resource families
/// can be invalidated with `ResponseCache::remove_matching`.
pub fn cache_key(endpoint: &str, params: &[(&str, String)]) -> String {
    let mut sorted = Map::new();
    for (name, value) in params {
        sorted.insert((*name).to_string(), Value::String(value.clone()));
    }
    format!("wp_{}_{}", endpoint, Value::Object(sorted))
}

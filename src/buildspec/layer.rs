//! Layering of build.spec.local over build.spec.
//!
//! - Objects: merged key by key (recursive)
//! - Everything else, arrays included: the local value replaces the base

use serde_json::Value;

/// Deep merge `local` over `base`.
pub fn deep_merge(base: Value, local: Value) -> Value {
    match (base, local) {
        (Value::Object(mut base_map), Value::Object(local_map)) => {
            for (key, local_value) in local_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, local_value),
                    None => local_value,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, local) => local,
    }
}

//! # Remold: Structural Transforms for Nested Key-Value Data
//!
//! Remold reshapes generic nested maps and sequences: it converts string
//! keys to symbolic keys (and back), strips null and empty-map entries,
//! flattens nesting away, builds lookup maps from sequences, and splits
//! sequences into a fixed number of near-equal buckets.
//!
//! ## Quick Start
//!
//! ```rust
//! use remold::{compact_deep, partition, symbolize_deep, Key, KeyMode, Value};
//!
//! // Ingest a JSON config and clean it up
//! let raw = Value::from(serde_json::json!({
//!     "service": {"name": "billing", "owner": null},
//!     "retries": null
//! }));
//!
//! let clean = compact_deep(&raw);
//! let keyed = symbolize_deep(&clean, KeyMode::All);
//!
//! let service = keyed.as_map().unwrap().get(&Key::sym("service")).unwrap();
//! assert!(service.as_map().unwrap().get(&Key::sym("name")).is_some());
//! assert!(keyed.as_map().unwrap().get(&Key::sym("retries")).is_none());
//!
//! // Shard a batch of jobs across three workers
//! let shards = partition((1..=10).collect::<Vec<i64>>(), 3);
//! assert_eq!(shards.len(), 3);
//! ```
//!
//! ## Core Concepts
//!
//! - **Values**: a closed enum of scalars, lists, maps, and opaque records
//! - **Key conversion**: string keys become symbolic keys under a policy
//!   ([`KeyMode::All`], [`KeyMode::Known`], [`KeyMode::Allowed`])
//! - **Compaction**: null and empty-map entries are dropped, shallow or deep
//! - **Flatten**: nested map leaves merge into a single level
//! - **Partition**: exactly `k` buckets, sizes within one of each other
//!
//! Every operation comes in two forms: a panicking one for callers who
//! treat bad input as a bug, and a `try_` twin returning [`Result`] for
//! callers who handle it. Transforms never mutate their input.

pub mod compact;
pub mod error;
pub mod flatten;
pub mod index;
pub mod keys;
pub mod map;
pub mod partition;
pub mod registry;
pub mod value;

// Re-exports for convenience
pub use compact::{compact, compact_deep, try_compact, try_compact_deep};
pub use error::{RemoldError, Result};
pub use flatten::{flatten, try_flatten};
pub use index::{index_by, try_index_by};
pub use keys::{
    stringify, stringify_deep, symbolize, symbolize_deep, try_stringify, try_stringify_deep,
    try_symbolize, try_symbolize_deep, KeyMode,
};
pub use map::Map;
pub use partition::{partition, try_partition};
pub use registry::{LookupFn, SymbolLookup, SymbolRegistry};
pub use value::{Key, Kind, Record, Scalar, Value};

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> Value {
        Value::from(serde_json::json!({
            "service": "billing",
            "owner": null,
            "limits": {"rps": 100, "burst": null, "unset": {}},
            "endpoints": [{"path": "/charge", "auth": null}]
        }))
    }

    #[test]
    fn test_clean_then_symbolize_pipeline() {
        let clean = compact_deep(&payload());
        let keyed = symbolize_deep(&clean, KeyMode::All);
        let map = keyed.as_map().unwrap();

        assert!(map.get(&Key::sym("owner")).is_none());
        let limits = map.get(&Key::sym("limits")).unwrap().as_map().unwrap();
        assert_eq!(limits.len(), 1);
        assert!(limits.get(&Key::sym("rps")).is_some());

        // Compaction stays out of lists; conversion goes in
        let endpoints = map.get(&Key::sym("endpoints")).unwrap().as_list().unwrap();
        let ep = endpoints[0].as_map().unwrap();
        assert!(ep.get(&Key::sym("auth")).unwrap().is_null());
    }

    #[test]
    fn test_symbolize_roundtrip_through_stringify() {
        let keyed = symbolize_deep(&payload(), KeyMode::All);
        assert_eq!(stringify_deep(&keyed), payload());
    }

    #[test]
    fn test_flatten_then_index() {
        let records = vec![
            flatten(&Value::from(serde_json::json!({"meta": {"id": "a"}, "n": 1}))),
            flatten(&Value::from(serde_json::json!({"meta": {"id": "b"}, "n": 2}))),
        ];

        let by_id = index_by(&records, |r| {
            let id = r.as_map()?.get(&Key::str("id"))?.as_scalar()?;
            Some(Key::str(id.to_string()))
        });

        assert_eq!(by_id.len(), 2);
        let b = by_id.get(&Key::str("b")).unwrap().as_map().unwrap();
        assert_eq!(b.get(&Key::str("n")), Some(&Value::from(2_i64)));
    }

    #[test]
    fn test_partition_shards_values() {
        let jobs: Vec<Value> = (0..7_i64).map(Value::from).collect();
        let shards = try_partition(jobs, 3).unwrap();

        assert_eq!(shards.len(), 3);
        let total: usize = shards.iter().map(Vec::len).sum();
        assert_eq!(total, 7);
    }
}

//! Flattening nested maps into a single level.
//!
//! Every entry whose value is a map is replaced by that map's own leaf
//! entries, at any depth; the keys that pointed at nested maps are
//! discarded. Lists and records are leaves and stay under their keys.
//!
//! The walk is depth-first in enumeration order, and the merge never
//! overwrites: when two leaves compete for a key, whichever the walk reached
//! first survives.
//!
//! # Example
//!
//! ```rust
//! use remold::{flatten, Key, Value};
//!
//! let v = Value::from(serde_json::json!({
//!     "this": {"nested": "map", "inner": {"is": "now flat"}}
//! }));
//!
//! let out = flatten(&v);
//! let map = out.as_map().unwrap();
//! assert_eq!(map.len(), 2);
//! assert!(map.get(&Key::str("is")).is_some());
//! assert!(map.get(&Key::str("this")).is_none());
//! ```

use crate::error::Result;
use crate::map::Map;
use crate::value::{expect_map, Value};

/// Collapse all nested maps into one level.
///
/// Panics when the input is not a map; [`try_flatten`] reports the same
/// condition as an error instead.
pub fn flatten(value: &Value) -> Value {
    match try_flatten(value) {
        Ok(v) => v,
        Err(err) => panic!("{}", err),
    }
}

/// Collapse all nested maps into one level.
///
/// Fails with `TypeMismatch` when the input is not a map.
pub fn try_flatten(value: &Value) -> Result<Value> {
    let map = expect_map(value)?;
    let mut out = Map::new();
    absorb(map, &mut out);
    Ok(Value::Map(out))
}

fn absorb(map: &Map, out: &mut Map) {
    for (key, value) in map.iter() {
        match value {
            Value::Map(nested) => absorb(nested, out),
            leaf => {
                out.insert_if_absent(key.clone(), leaf.clone());
            }
        }
    }
}

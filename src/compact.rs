//! Compaction: dropping null and empty-map entries.
//!
//! An entry is dropped when its value is scalar null or a map with no
//! entries. Records are atomic values and are never dropped, even with zero
//! fields. Lists are ordinary leaf values here; compaction does not look
//! inside them.
//!
//! The deep variant cleans bottom-up: each map's values are compacted first,
//! then the map itself is swept once more, so a map left empty by its own
//! cleanup disappears from its parent.
//!
//! # Example
//!
//! ```rust
//! use remold::{compact, Value};
//!
//! let v = Value::from(serde_json::json!({
//!     "a": 1,
//!     "b": null,
//!     "c": {}
//! }));
//!
//! let out = compact(&v);
//! assert_eq!(out.as_map().unwrap().len(), 1);
//! ```

use crate::error::Result;
use crate::map::Map;
use crate::value::{expect_map, Value};

/// Drop top-level null and empty-map entries.
///
/// Nested maps are kept as they are, nulls and all. Panics when the input is
/// not a map; [`try_compact`] reports the same condition as an error.
pub fn compact(value: &Value) -> Value {
    match try_compact(value) {
        Ok(v) => v,
        Err(err) => panic!("{}", err),
    }
}

/// Drop top-level null and empty-map entries.
///
/// Fails with `TypeMismatch` when the input is not a map.
pub fn try_compact(value: &Value) -> Result<Value> {
    let map = expect_map(value)?;
    Ok(Value::Map(sweep(map)))
}

/// Drop null and empty-map entries at every nesting depth.
///
/// A map whose entries all compact away is itself dropped from its parent.
/// Panics when the input is not a map.
///
/// # Example
///
/// ```rust
/// use remold::{compact_deep, Value};
///
/// let v = Value::from(serde_json::json!({
///     "keep": {"x": 1, "gone": null},
///     "hollow": {"inner": {"deep": null}}
/// }));
///
/// let out = compact_deep(&v);
/// let map = out.as_map().unwrap();
/// // "hollow" emptied out entirely and was removed with it
/// assert_eq!(map.len(), 1);
/// ```
pub fn compact_deep(value: &Value) -> Value {
    match try_compact_deep(value) {
        Ok(v) => v,
        Err(err) => panic!("{}", err),
    }
}

/// Drop null and empty-map entries at every nesting depth.
///
/// Fails with `TypeMismatch` when the input is not a map.
pub fn try_compact_deep(value: &Value) -> Result<Value> {
    let map = expect_map(value)?;
    Ok(Value::Map(sweep_deep(map)))
}

/// One shallow pass: copy every entry that is not null or an empty map.
fn sweep(map: &Map) -> Map {
    let mut out = Map::new();
    for (key, value) in map.iter() {
        if !removable(value) {
            out.insert(key.clone(), value.clone());
        }
    }
    out
}

/// Compact each map value recursively, then sweep this level once more so
/// maps emptied by the recursion are dropped too.
fn sweep_deep(map: &Map) -> Map {
    let mut out = Map::new();
    for (key, value) in map.iter() {
        let value = match value {
            Value::Map(m) => Value::Map(sweep_deep(m)),
            other => other.clone(),
        };
        out.insert(key.clone(), value);
    }
    sweep(&out)
}

fn removable(value: &Value) -> bool {
    match value {
        Value::Map(m) => m.is_empty(),
        other => other.is_null(),
    }
}

//! Key conversion over nested structures.
//!
//! Converts string keys to symbolic keys (and back) under a caller-chosen
//! [`KeyMode`] policy. Shallow variants touch only the top level; deep
//! variants apply the policy at every nesting depth, following maps and the
//! maps inside lists, while records stay opaque.
//!
//! When a conversion makes two keys collide, the first-inserted entry wins
//! and the later one is dropped. That rule applies independently at each
//! nesting level.
//!
//! # Example
//!
//! ```rust
//! use remold::{symbolize, Key, KeyMode, Map, Value};
//!
//! let mut m = Map::new();
//! m.insert(Key::str("status"), Value::from("ok"));
//! m.insert(Key::Int(7), Value::from("lucky"));
//!
//! let out = symbolize(&Value::Map(m), KeyMode::All);
//! let out = out.as_map().unwrap();
//! assert!(out.get(&Key::sym("status")).is_some());
//! // Non-string keys pass through unchanged
//! assert!(out.get(&Key::Int(7)).is_some());
//! ```

use crate::error::Result;
use crate::map::Map;
use crate::registry::SymbolLookup;
use crate::value::{expect_map, Key, Value};
use std::fmt;

/// Policy deciding which string keys become symbolic.
#[derive(Clone, Copy)]
pub enum KeyMode<'a> {
    /// Convert every string key
    All,
    /// Convert only keys the injected lookup already knows
    Known(&'a dyn SymbolLookup),
    /// Convert only keys named in the list
    Allowed(&'a [&'a str]),
}

impl KeyMode<'_> {
    fn applies_to(&self, name: &str) -> bool {
        match self {
            KeyMode::All => true,
            KeyMode::Known(lookup) => lookup.is_known(name),
            KeyMode::Allowed(names) => names.contains(&name),
        }
    }

    /// An empty allow list converts nothing, whatever the input holds.
    fn is_identity(&self) -> bool {
        matches!(self, KeyMode::Allowed(names) if names.is_empty())
    }
}

impl fmt::Debug for KeyMode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyMode::All => write!(f, "All"),
            KeyMode::Known(_) => write!(f, "Known(..)"),
            KeyMode::Allowed(names) => f.debug_tuple("Allowed").field(names).finish(),
        }
    }
}

/// Convert top-level string keys to symbolic keys.
///
/// Values are copied unchanged; nested maps keep their keys as they are.
/// Panics when the input is not a map; [`try_symbolize`] reports the same
/// condition as an error instead.
pub fn symbolize(value: &Value, mode: KeyMode) -> Value {
    match try_symbolize(value, mode) {
        Ok(v) => v,
        Err(err) => panic!("{}", err),
    }
}

/// Convert top-level string keys to symbolic keys.
///
/// Fails with `TypeMismatch` when the input is not a map.
pub fn try_symbolize(value: &Value, mode: KeyMode) -> Result<Value> {
    let map = expect_map(value)?;
    if mode.is_identity() {
        return Ok(value.clone());
    }
    Ok(Value::Map(rekey(map, &|k| to_sym(k, mode), false)))
}

/// Convert string keys to symbolic keys at every nesting depth.
///
/// Maps nested in maps and maps nested in lists are converted; records are
/// copied without being entered. Panics when the input is not a map.
///
/// # Example
///
/// ```rust
/// use remold::{symbolize_deep, Key, KeyMode, Map, Value};
///
/// let mut inner = Map::new();
/// inner.insert(Key::str("port"), Value::from(8080_i64));
/// let mut outer = Map::new();
/// outer.insert(Key::str("server"), Value::Map(inner));
///
/// let out = symbolize_deep(&Value::Map(outer), KeyMode::All);
/// let server = out.as_map().unwrap().get(&Key::sym("server")).unwrap();
/// assert!(server.as_map().unwrap().get(&Key::sym("port")).is_some());
/// ```
pub fn symbolize_deep(value: &Value, mode: KeyMode) -> Value {
    match try_symbolize_deep(value, mode) {
        Ok(v) => v,
        Err(err) => panic!("{}", err),
    }
}

/// Convert string keys to symbolic keys at every nesting depth.
///
/// Fails with `TypeMismatch` when the input is not a map.
pub fn try_symbolize_deep(value: &Value, mode: KeyMode) -> Result<Value> {
    let map = expect_map(value)?;
    if mode.is_identity() {
        return Ok(value.clone());
    }
    Ok(Value::Map(rekey(map, &|k| to_sym(k, mode), true)))
}

/// Convert top-level symbolic keys back to string keys.
///
/// The inverse of [`symbolize`]. There is no mode: every symbolic key has a
/// string form. Panics when the input is not a map.
pub fn stringify(value: &Value) -> Value {
    match try_stringify(value) {
        Ok(v) => v,
        Err(err) => panic!("{}", err),
    }
}

/// Convert top-level symbolic keys back to string keys.
///
/// Fails with `TypeMismatch` when the input is not a map.
pub fn try_stringify(value: &Value) -> Result<Value> {
    let map = expect_map(value)?;
    Ok(Value::Map(rekey(map, &to_str, false)))
}

/// Convert symbolic keys back to string keys at every nesting depth.
///
/// The inverse of [`symbolize_deep`]. Panics when the input is not a map.
pub fn stringify_deep(value: &Value) -> Value {
    match try_stringify_deep(value) {
        Ok(v) => v,
        Err(err) => panic!("{}", err),
    }
}

/// Convert symbolic keys back to string keys at every nesting depth.
///
/// Fails with `TypeMismatch` when the input is not a map.
pub fn try_stringify_deep(value: &Value) -> Result<Value> {
    let map = expect_map(value)?;
    Ok(Value::Map(rekey(map, &to_str, true)))
}

// =============================================================================
// Shared rekeying engine
// =============================================================================

fn to_sym(key: &Key, mode: KeyMode) -> Key {
    match key {
        Key::Str(name) if mode.applies_to(name) => Key::Sym(name.clone()),
        other => other.clone(),
    }
}

fn to_str(key: &Key) -> Key {
    match key {
        Key::Sym(name) => Key::Str(name.clone()),
        other => other.clone(),
    }
}

fn rekey(map: &Map, convert: &dyn Fn(&Key) -> Key, deep: bool) -> Map {
    let mut out = Map::new();
    for (key, value) in map.iter() {
        let value = if deep {
            rekey_value(value, convert)
        } else {
            value.clone()
        };
        // First entry under a converted key wins
        out.insert_if_absent(convert(key), value);
    }
    out
}

fn rekey_value(value: &Value, convert: &dyn Fn(&Key) -> Key) -> Value {
    match value {
        Value::Map(m) => Value::Map(rekey(m, convert, true)),
        Value::List(items) => Value::List(items.iter().map(|v| rekey_value(v, convert)).collect()),
        Value::Scalar(_) | Value::Record(_) => value.clone(),
    }
}

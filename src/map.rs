//! Insertion-ordered map of unique keys.
//!
//! Maps are stored as a vector of `(Key, Value)` pairs. Enumeration follows
//! insertion order, which makes every transform in this crate deterministic,
//! but equality is order-insensitive: two maps are equal when they hold the
//! same entries, however they were built. The pair-vector layout keeps small
//! maps cheap; lookups are linear scans.
//!
//! # Example
//!
//! ```rust
//! use remold::{Key, Map, Value};
//!
//! let mut m = Map::new();
//! m.insert(Key::str("a"), Value::from(1_i64));
//! assert!(!m.insert_if_absent(Key::str("a"), Value::from(2_i64)));
//! assert_eq!(m.get(&Key::str("a")), Some(&Value::from(1_i64)));
//! ```

use crate::value::{Key, Value};
use std::fmt;

/// An insertion-ordered mapping from [`Key`] to [`Value`].
#[derive(Clone, Default)]
pub struct Map {
    entries: Vec<(Key, Value)>,
}

impl Map {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &Key) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Insert an entry, replacing any existing value under the key.
    ///
    /// Returns the replaced value, if any. Replacement keeps the key's
    /// original position.
    pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Insert an entry only when the key is not yet present.
    ///
    /// Returns whether the entry was inserted. This is the non-overwriting
    /// merge primitive: when transforms collapse two keys into one, the
    /// first-inserted value survives.
    pub fn insert_if_absent(&mut self, key: Key, value: Value) -> bool {
        if self.position(&key).is_some() {
            return false;
        }
        self.entries.push((key, value));
        true
    }

    /// Get the value under a key.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    /// True when the key is present.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.position(key).is_some()
    }

    /// Remove the entry under a key, returning its value.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.position(key).map(|i| self.entries.remove(i).1)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterate values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

// Unordered-mapping equality: entry sets match, order ignored.
impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.get(k) == Some(v))
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl FromIterator<(Key, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Extend<(Key, Value)> for Map {
    fn extend<I: IntoIterator<Item = (Key, Value)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for Map {
    type Item = (Key, Value);
    type IntoIter = std::vec::IntoIter<(Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = &'a (Key, Value);
    type IntoIter = std::slice::Iter<'a, (Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

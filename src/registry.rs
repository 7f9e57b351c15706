//! Symbol registry: the shared set of names known to be symbols.
//!
//! Safe key conversion only turns a string key symbolic when the name is
//! already known. That knowledge is always injected at the call site as a
//! [`SymbolLookup`]; there is no process-global registry, so the result of a
//! conversion never depends on hidden state.

use std::collections::{BTreeSet, HashSet};
use std::sync::{Arc, RwLock};

/// Lookup capability for safe key conversion.
///
/// Implemented by [`SymbolRegistry`], by the std set types, and by any
/// predicate wrapped in [`LookupFn`].
pub trait SymbolLookup {
    /// Whether `name` is a known symbol.
    fn is_known(&self, name: &str) -> bool;
}

/// Adapter turning a plain predicate into a [`SymbolLookup`].
///
/// # Example
///
/// ```rust
/// use remold::{LookupFn, SymbolLookup};
///
/// let lookup = LookupFn(|name: &str| name.starts_with("cfg_"));
/// assert!(lookup.is_known("cfg_port"));
/// assert!(!lookup.is_known("port"));
/// ```
pub struct LookupFn<F>(pub F);

impl<F: Fn(&str) -> bool> SymbolLookup for LookupFn<F> {
    fn is_known(&self, name: &str) -> bool {
        (self.0)(name)
    }
}

impl SymbolLookup for HashSet<String> {
    fn is_known(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl SymbolLookup for HashSet<&str> {
    fn is_known(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl SymbolLookup for BTreeSet<String> {
    fn is_known(&self, name: &str) -> bool {
        self.contains(name)
    }
}

/// A shared, append-only set of known symbol names.
///
/// Cloning yields another handle to the same underlying set, so a registry
/// can be populated in one place and consulted from anywhere. The transforms
/// in this crate only ever read it.
#[derive(Clone, Default)]
pub struct SymbolRegistry {
    known: Arc<RwLock<HashSet<String>>>,
}

impl SymbolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            known: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Register a symbol name.
    ///
    /// Returns whether the name was newly added. Registration is append
    /// only; names cannot be retracted once other code may rely on them.
    pub fn register(&self, name: impl Into<String>) -> bool {
        let mut known = self.known.write().unwrap();
        known.insert(name.into())
    }

    /// Register every name in the iterator.
    pub fn register_all<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut known = self.known.write().unwrap();
        for name in names {
            known.insert(name.into());
        }
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        let known = self.known.read().unwrap();
        known.len()
    }

    /// True when no names are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SymbolLookup for SymbolRegistry {
    fn is_known(&self, name: &str) -> bool {
        let known = self.known.read().unwrap();
        known.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let registry = SymbolRegistry::new();
        assert!(!registry.is_known("status"));

        assert!(registry.register("status"));
        assert!(registry.is_known("status"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_twice() {
        let registry = SymbolRegistry::new();
        assert!(registry.register("status"));
        assert!(!registry.register("status"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let registry = SymbolRegistry::new();
        let handle = registry.clone();

        handle.register("status");
        assert!(registry.is_known("status"));
    }

    #[test]
    fn test_register_all() {
        let registry = SymbolRegistry::new();
        registry.register_all(["a", "b", "c"]);
        assert_eq!(registry.len(), 3);
        assert!(registry.is_known("b"));
    }

    #[test]
    fn test_lookup_fn() {
        let lookup = LookupFn(|name: &str| name.len() == 1);
        assert!(lookup.is_known("a"));
        assert!(!lookup.is_known("ab"));
    }

    #[test]
    fn test_hashset_lookup() {
        let known: HashSet<&str> = ["id", "name"].into_iter().collect();
        assert!(known.is_known("id"));
        assert!(!known.is_known("email"));
    }
}

//! Slab-backed identifier interning.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - O(1) insert and lookup
//!
//! Entries are never removed during a run, so keys stay dense (`0..len`)
//! and double as indices into per-participant vectors.

use std::collections::HashMap;

use slab::Slab;

/// Dense key of an interned participant within one side
pub type Key = usize;

/// Maps participant identifiers to dense keys and back.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    /// Identifier storage, key = slab index
    names: Slab<String>,

    /// Identifier to key lookup
    index: HashMap<String, Key>,
}

impl Interner {
    /// Create an interner with room for `capacity` identifiers
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Slab::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Intern `name`, returning its key
    ///
    /// Interning an identifier twice returns the first key.
    pub fn intern(&mut self, name: &str) -> Key {
        if let Some(&key) = self.index.get(name) {
            return key;
        }
        let key = self.names.insert(name.to_owned());
        self.index.insert(name.to_owned(), key);
        key
    }

    /// Key of an interned identifier
    #[inline]
    pub fn key(&self, name: &str) -> Option<Key> {
        self.index.get(name).copied()
    }

    /// Identifier behind `key`
    #[inline]
    pub fn name(&self, key: Key) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    /// Number of interned identifiers
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Is the interner empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.names.iter().map(|(key, _)| key)
    }
}

//! map
//!
//! [`PathMap`]: a string-keyed map with dot-path traversal.
//!
//! # Overview
//!
//! A `PathMap<V>` stores [`Node`]s: either a leaf `V` or a nested
//! `PathMap<V>`. Keys are opaque strings; a key containing `.` is only
//! interpreted as a path during [`PathMap::get_path`] /
//! [`PathMap::set_path`] traversal - direct operations such as
//! [`PathMap::get`] and [`PathMap::has`] never parse paths.
//!
//! # Silent fallback
//!
//! Path lookups have no error channel. A missing key, a zero value, and a
//! non-map value where a map was expected all resolve to the caller's
//! default. Callers that need to distinguish those cases use [`PathMap::has`]
//! and [`PathMap::get_map`] directly.
//!
//! # Destructive coercion
//!
//! During [`PathMap::set_path`], an intermediate segment holding anything
//! other than a nested map is discarded and replaced with a fresh empty
//! map. `set_path("a.b", v)` on `{"a": 1}` drops the `1`. This matches the
//! historical contract and is intentional; see the `set_path` docs.
//!
//! # Concurrency
//!
//! `PathMap` is plain unsynchronized state. Concurrent mutation must be
//! guarded by the caller.
//!
//! # Example
//!
//! ```
//! use dotmap::PathMap;
//!
//! let mut map: PathMap<i64> = [("gun".to_string(), 7)].into_iter().collect();
//! map.set_path("weapon.bullet", 100);
//!
//! assert_eq!(map.get_path("weapon.bullet", 0), 100);
//! assert_eq!(map.get_path("weapon.jammed", -1), -1);
//! assert_eq!(map.len(), 2); // "gun" and "weapon"
//! ```

pub mod combine;

use std::collections::hash_map;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::zero::Zero;

/// A `PathMap` over dynamic JSON values.
pub type ValueMap = PathMap<Value>;

/// A `PathMap` over plain strings.
pub type StringMap = PathMap<String>;

/// One stored cell: a leaf value or a nested map.
///
/// Serialization is untagged; a nested map renders as a JSON object and a
/// leaf as its value's own representation. On deserialization the map
/// shape is tried first, so JSON objects become nested maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node<V> {
    /// A nested map.
    Map(PathMap<V>),
    /// A leaf value.
    Leaf(V),
}

impl<V> Node<V> {
    /// A fresh empty nested map.
    pub fn empty_map() -> Self {
        Node::Map(PathMap::new())
    }

    /// Whether this node is a nested map.
    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    /// The leaf value, if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&V> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Map(_) => None,
        }
    }

    /// The nested map, if this node is a map.
    pub fn as_map(&self) -> Option<&PathMap<V>> {
        match self {
            Node::Map(map) => Some(map),
            Node::Leaf(_) => None,
        }
    }

    /// Mutable access to the nested map, if this node is a map.
    pub fn as_map_mut(&mut self) -> Option<&mut PathMap<V>> {
        match self {
            Node::Map(map) => Some(map),
            Node::Leaf(_) => None,
        }
    }
}

impl<V: Zero> Zero for Node<V> {
    fn is_zero(&self) -> bool {
        match self {
            Node::Map(map) => map.is_empty(),
            Node::Leaf(value) => value.is_zero(),
        }
    }
}

/// String-keyed map with dot-path access.
///
/// Iteration order is unspecified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathMap<V> {
    entries: HashMap<String, Node<V>>,
}

impl<V> Default for PathMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PathMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no top-level keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level keys, in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Top-level entries, in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, Node<V>> {
        self.entries.iter()
    }

    /// Whether `key` is present at the top level, regardless of zero-ness.
    ///
    /// No path parsing: `has("a.b")` checks for a literal `"a.b"` key.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Direct single-segment leaf lookup.
    ///
    /// Returns `None` for absent keys and for keys holding a nested map.
    /// No path parsing.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key).and_then(Node::as_leaf)
    }

    /// The stored node under a top-level key, leaf or map.
    pub fn get_node(&self, key: &str) -> Option<&Node<V>> {
        self.entries.get(key)
    }

    /// Insert a leaf value at the top level, returning the displaced node.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<Node<V>> {
        self.entries.insert(key.into(), Node::Leaf(value))
    }

    /// Remove a top-level entry, returning the displaced node.
    pub fn remove(&mut self, key: &str) -> Option<Node<V>> {
        self.entries.remove(key)
    }

    /// Borrow the nested map at a dot path.
    ///
    /// Returns `None` if any segment is absent or holds a leaf. An empty
    /// path returns `None`.
    pub fn get_map(&self, path: &str) -> Option<&PathMap<V>> {
        if path.is_empty() {
            return None;
        }
        let mut current = self;
        for segment in path.split('.') {
            match current.entries.get(segment) {
                Some(Node::Map(next)) => current = next,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Store a leaf value at a dot path, creating intermediate maps.
    ///
    /// Every intermediate segment that is absent, zero, or holds a leaf is
    /// replaced with a fresh empty map before descending - a non-map value
    /// in the way is **discarded**. This destructive coercion is the
    /// documented contract, not an accident; callers that must preserve an
    /// existing leaf check [`PathMap::get`] first. The final segment is
    /// overwritten unconditionally. An empty path is a no-op.
    pub fn set_path(&mut self, path: &str, value: V) {
        self.set_node(path, Node::Leaf(value));
    }

    /// Store a nested map at a dot path, with `set_path`'s coercion rules.
    pub fn set_map(&mut self, path: &str, map: PathMap<V>) {
        self.set_node(path, Node::Map(map));
    }

    fn set_node(&mut self, path: &str, node: Node<V>) {
        if path.is_empty() {
            return;
        }
        let mut current = self;
        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                current.entries.insert(segment.to_string(), node);
                return;
            }
            let slot = current
                .entries
                .entry(segment.to_string())
                .or_insert_with(Node::empty_map);
            if let Node::Leaf(_) = slot {
                *slot = Node::empty_map();
            }
            let Node::Map(next) = slot else {
                // coerced to a map just above
                return;
            };
            current = next;
        }
    }
}

impl<V: Zero + Clone> PathMap<V> {
    /// Dot-path lookup with zero-value substitution.
    ///
    /// Splits `path` on `.` and descends. The default is returned when:
    ///
    /// - the path is empty,
    /// - an intermediate segment is absent, zero, or holds a leaf,
    /// - the final segment is absent, holds a nested map, or holds a leaf
    ///   classified as zero.
    ///
    /// A present-but-zero value yields the default just like an absent one;
    /// there is no signal distinguishing the two.
    pub fn get_path(&self, path: &str, default: V) -> V {
        if path.is_empty() {
            return default;
        }
        let mut current = self;
        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                return match current.entries.get(segment) {
                    Some(Node::Leaf(value)) if !value.is_zero() => value.clone(),
                    _ => default,
                };
            }
            match current.entries.get(segment) {
                Some(Node::Map(next)) if !next.is_empty() => current = next,
                _ => return default,
            }
        }
        default
    }
}

impl<V> Zero for PathMap<V> {
    fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for PathMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), Node::Leaf(value)))
                .collect(),
        }
    }
}

impl<'a, V> IntoIterator for &'a PathMap<V> {
    type Item = (&'a String, &'a Node<V>);
    type IntoIter = hash_map::Iter<'a, String, Node<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! collection
//!
//! [`Collection`]: a [`PathMap`] façade with JSON output.
//!
//! # Overview
//!
//! A `Collection<V>` owns one [`PathMap`] and re-exposes its dot-path
//! API under the historical names (`get`/`set`/`has`/`count`), adding
//! JSON stringification and a defaulted-lookup convenience. It carries no
//! state of its own; anything possible through a `Collection` is possible
//! through the underlying map.
//!
//! # Example
//!
//! ```
//! use dotmap::Collection;
//!
//! let mut c: Collection<i64> = Collection::new();
//! c.set("weapon.bullet", 100);
//!
//! assert_eq!(c.get("weapon.bullet"), 100);
//! assert_eq!(c.get_or("weapon.jammed", -1), -1);
//! assert_eq!(c.count(), 1);
//! ```

use std::fmt;

use serde::Serialize;

use crate::json::{self, JsonError};
use crate::map::PathMap;
use crate::zero::Zero;

/// A map façade with dot-path access and JSON stringification.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<V> {
    items: PathMap<V>,
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Collection<V> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            items: PathMap::new(),
        }
    }

    /// Wrap an existing map.
    pub fn from_map(items: PathMap<V>) -> Self {
        Self { items }
    }

    /// Borrow all items.
    pub fn all(&self) -> &PathMap<V> {
        &self.items
    }

    /// Mutable access to all items.
    pub fn all_mut(&mut self) -> &mut PathMap<V> {
        &mut self.items
    }

    /// Unwrap into the underlying map.
    pub fn into_map(self) -> PathMap<V> {
        self.items
    }

    /// Whether `key` is present at the top level (no path parsing).
    pub fn has(&self, key: &str) -> bool {
        self.items.has(key)
    }

    /// Number of top-level items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Store a value under a dot path.
    ///
    /// Inherits [`PathMap::set_path`]'s contract, including the
    /// destructive coercion of non-map intermediate segments.
    pub fn set(&mut self, key: &str, value: V) {
        self.items.set_path(key, value);
    }
}

impl<V: Zero + Clone> Collection<V> {
    /// Dot-path lookup, substituting `V::default()` for zero values.
    pub fn get(&self, key: &str) -> V
    where
        V: Default,
    {
        self.get_or(key, V::default())
    }

    /// Dot-path lookup with an explicit default.
    ///
    /// The default is returned for absent keys, zero values, and shape
    /// mismatches alike; see [`PathMap::get_path`].
    pub fn get_or(&self, key: &str, default: V) -> V {
        self.items.get_path(key, default)
    }

    /// Fill-merge `sources` into this collection's items.
    pub fn merge<'a, I>(&mut self, sources: I) -> &mut Self
    where
        V: 'a,
        I: IntoIterator<Item = &'a PathMap<V>>,
    {
        self.items.merge(sources);
        self
    }

    /// Overwrite entries from `sources`, last writer wins.
    pub fn replace<'a, I>(&mut self, sources: I) -> &mut Self
    where
        V: 'a,
        I: IntoIterator<Item = &'a PathMap<V>>,
    {
        self.items.replace(sources);
        self
    }
}

impl<V: Serialize> Collection<V> {
    /// Serialize the whole collection to a JSON string.
    pub fn to_json(&self) -> Result<String, JsonError> {
        json::encode(&self.items)
    }
}

/// Renders the collection as JSON, swallowing serialization errors into
/// an empty string.
impl<V: Serialize> fmt::Display for Collection<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn get_with_implicit_default() {
        let mut c: Collection<i32> = Collection::new();
        c.set("a.b", 7);

        assert_eq!(c.get("a.b"), 7);
        assert_eq!(c.get("a.missing"), 0);
    }

    #[test]
    fn get_or_with_explicit_default() {
        let c: Collection<String> = Collection::new();
        assert_eq!(c.get_or("anything", "fallback".to_string()), "fallback");
    }

    #[test]
    fn set_and_count() {
        let mut c: Collection<Value> = Collection::new();
        c.set("gun", json!("model"));
        c.set("weapon.bullet", json!(100));
        c.set("weapon.shield.strength", json!("strong"));

        assert_eq!(c.count(), 2);
        assert_eq!(c.get_or("weapon.bullet", json!(0)), json!(100));
        assert_eq!(
            c.get_or("weapon.shield.strength", json!("")),
            json!("strong")
        );
        assert!(c.has("gun"));
        assert!(!c.has("weapon.bullet"));
    }

    #[test]
    fn to_json_and_display_agree() {
        let mut c: Collection<i32> = Collection::new();
        c.set("n", 1);

        let encoded = c.to_json().expect("serialize");
        assert_eq!(encoded, r#"{"n":1}"#);
        assert_eq!(c.to_string(), encoded);
    }

    #[test]
    fn display_of_empty_collection() {
        let c: Collection<i32> = Collection::new();
        assert_eq!(c.to_string(), "{}");
    }

    #[test]
    fn merge_and_replace_passthrough() {
        let mut c: Collection<String> = Collection::new();
        c.set("a", "1".to_string());

        let source: PathMap<String> = [("a", "x".to_string()), ("b", "2".to_string())]
            .into_iter()
            .collect();

        c.merge([&source]);
        assert_eq!(c.get("a"), "1");
        assert_eq!(c.get("b"), "2");

        c.replace([&source]);
        assert_eq!(c.get("a"), "x");
    }

    #[test]
    fn from_map_roundtrip() {
        let map: PathMap<i32> = [("k", 5)].into_iter().collect();
        let c = Collection::from_map(map.clone());
        assert_eq!(c.into_map(), map);
    }
}

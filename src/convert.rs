//! convert
//!
//! Bridging between structs, value maps, and string maps.
//!
//! # Overview
//!
//! Serde stands in for runtime reflection: a struct round-trips through
//! `serde_json::Value` to become a [`PathMap<Value>`] and back. The
//! string-map helpers cover the flat `k=v&` joining used for signing and
//! query strings.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::json::{self, JsonError};
use crate::map::{Node, PathMap};
use crate::zero::Zero;

/// Convert any serializable struct into a value map.
///
/// Nested structs become nested maps. Fails when the value does not
/// serialize to a JSON object (e.g. a bare scalar or sequence).
pub fn struct_to_map<T: Serialize>(value: &T) -> Result<PathMap<Value>, JsonError> {
    let encoded = serde_json::to_value(value).map_err(|e| JsonError::Serialize(e.to_string()))?;
    serde_json::from_value(encoded).map_err(|e| JsonError::Parse(e.to_string()))
}

/// Build a struct back out of a value map.
pub fn map_to_struct<T: DeserializeOwned>(map: &PathMap<Value>) -> Result<T, JsonError> {
    let encoded = serde_json::to_value(map).map_err(|e| JsonError::Serialize(e.to_string()))?;
    serde_json::from_value(encoded).map_err(|e| JsonError::Parse(e.to_string()))
}

/// Render every entry of a value map as a string.
///
/// String leaves keep their content verbatim; other leaves and nested
/// maps render as compact JSON.
pub fn to_string_map(map: &PathMap<Value>) -> PathMap<String> {
    map.iter()
        .map(|(key, node)| {
            let rendered = match node {
                Node::Leaf(Value::String(text)) => text.clone(),
                Node::Leaf(value) => value.to_string(),
                Node::Map(nested) => json::encode(nested).unwrap_or_default(),
            };
            (key.clone(), rendered)
        })
        .collect()
}

/// Join top-level leaf entries as `k=v&k=v`, keys sorted.
///
/// Zero-valued entries are filtered out unless `keep_empty` is set.
/// Nested-map entries are skipped; joining is defined for flat maps.
pub fn joined_ksort<V>(map: &PathMap<V>, keep_empty: bool) -> String
where
    V: Zero + Display,
{
    let mut pairs: Vec<(&str, &V)> = map
        .iter()
        .filter_map(|(key, node)| node.as_leaf().map(|value| (key.as_str(), value)))
        .filter(|(_, value)| keep_empty || !value.is_zero())
        .collect();
    pairs.sort_by_key(|(key, _)| *key);

    pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Find the first top-level key whose leaf equals `needle`.
///
/// With several matching keys the choice is unspecified (map iteration
/// order).
pub fn find_value<'a, V: PartialEq>(map: &'a PathMap<V>, needle: &V) -> Option<&'a str> {
    map.iter()
        .find_map(|(key, node)| match node.as_leaf() {
            Some(value) if value == needle => Some(key.as_str()),
            _ => None,
        })
}

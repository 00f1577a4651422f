//! attribute
//!
//! [`Attributes`]: a dynamic-value store with a required-field contract.
//!
//! # Overview
//!
//! `Attributes` is a [`Collection`] over `serde_json::Value` with one
//! convention on top: the distinguished key `"required"` holds an array
//! of attribute names that must be non-zero for the store to validate.
//! Nothing ties the listed names to actually-present keys continuously;
//! [`Attributes::check_required`] inspects them on demand.
//!
//! # Example
//!
//! ```
//! use dotmap::Attributes;
//! use serde_json::json;
//!
//! let mut attrs = Attributes::new();
//! attrs.set("required", json!(["name"]));
//!
//! assert!(attrs.check_required().is_err());
//!
//! attrs.set("name", json!("dotmap"));
//! assert!(attrs.check_required().is_ok());
//! ```

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::collection::Collection;
use crate::json::JsonError;
use crate::map::PathMap;
use crate::zero::Zero;

/// The key whose array value lists required attribute names.
pub const REQUIRED_KEY: &str = "required";

/// Errors from attribute validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttributeError {
    /// A required attribute is absent or zero.
    #[error("\"{0}\" cannot be empty")]
    MissingRequired(String),
}

impl AttributeError {
    /// The name of the offending attribute.
    pub fn attribute(&self) -> &str {
        match self {
            AttributeError::MissingRequired(name) => name,
        }
    }
}

/// Dynamic-value attribute store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    inner: Collection<Value>,
}

impl Attributes {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Collection::new(),
        }
    }

    /// Wrap an existing value map.
    pub fn from_map(attributes: PathMap<Value>) -> Self {
        Self {
            inner: Collection::from_map(attributes),
        }
    }

    /// Borrow the underlying map.
    pub fn all(&self) -> &PathMap<Value> {
        self.inner.all()
    }

    /// Dot-path lookup; `Value::Null` stands in for absent/zero entries.
    pub fn get(&self, name: &str) -> Value {
        self.get_or(name, Value::Null)
    }

    /// Dot-path lookup with an explicit default.
    pub fn get_or(&self, name: &str, default: Value) -> Value {
        self.inner.get_or(name, default)
    }

    /// String lookup convenience.
    ///
    /// Returns the stored string when the attribute holds a non-empty
    /// string; anything else (absent, zero, or a non-string value) yields
    /// `default`.
    pub fn get_string(&self, name: &str, default: &str) -> String {
        match self.get(name) {
            Value::String(text) if !text.is_empty() => text,
            _ => default.to_string(),
        }
    }

    /// Store a value under a dot path.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        self.inner.set(name, value.into());
        self
    }

    /// Whether `name` is present at the top level.
    pub fn has(&self, name: &str) -> bool {
        self.inner.has(name)
    }

    /// Number of top-level attributes.
    pub fn count(&self) -> usize {
        self.inner.count()
    }

    /// Fill-merge `sources` into the store.
    pub fn merge<'a, I>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a PathMap<Value>>,
    {
        self.inner.merge(sources);
        self
    }

    /// The names listed under [`REQUIRED_KEY`].
    ///
    /// Non-array values and non-string array members are ignored.
    pub fn required(&self) -> Vec<String> {
        match self.all().get(REQUIRED_KEY) {
            Some(Value::Array(names)) => names
                .iter()
                .filter_map(|name| name.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Whether `name` appears in the required list.
    pub fn is_required(&self, name: &str) -> bool {
        self.required().iter().any(|required| required == name)
    }

    /// Validate the required-attribute contract.
    ///
    /// Fails with the first listed name whose lookup result is zero; the
    /// listed order decides which name is reported.
    pub fn check_required(&self) -> Result<(), AttributeError> {
        for name in self.required() {
            if self.get(&name).is_zero() {
                return Err(AttributeError::MissingRequired(name));
            }
        }
        Ok(())
    }

    /// Serialize the whole store to a JSON string.
    pub fn to_json(&self) -> Result<String, JsonError> {
        self.inner.to_json()
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

//! Dotmap - nested string-keyed maps with dot-path access and merge semantics
//!
//! Dotmap is a small data-manipulation library: a generic map keyed by
//! strings, traversable with dotted paths (`"a.b.c"`), combined with
//! fill-merge or last-writer-wins replace, and governed throughout by a
//! single definition of "empty value".
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture, consumed leaf-first:
//!
//! - [`zero`] - The [`Zero`] classifier: one authority for "is this empty"
//! - [`map`] - [`PathMap`]: dot-path get/set plus merge/replace/filter
//! - [`collection`] - [`Collection`]: a [`PathMap`] façade with JSON output
//! - [`attribute`] - [`Attributes`]: dynamic-value store with a required-field contract
//! - [`json`] - JSON encode/decode/escape and file load/save helpers
//! - [`convert`] - struct/map bridging and string-map utilities
//! - [`logger`] - injectable leveled logging capability (never called by the core)
//!
//! # Correctness Invariants
//!
//! 1. Zero-ness, not mere absence, decides default substitution and merge fill
//! 2. Lookups never fail: absence, emptiness, and shape mismatch all fold
//!    into the caller-supplied default
//! 3. `set_path` coerces non-map intermediate segments into fresh maps
//!    (destructive, and deliberate - see [`map`])
//! 4. Containers are plain unsynchronized state; callers own any locking
//!
//! # Example
//!
//! ```
//! use dotmap::PathMap;
//!
//! let mut map: PathMap<String> = PathMap::new();
//! map.set_path("weapon.shield.strength", "strong".to_string());
//!
//! assert_eq!(
//!     map.get_path("weapon.shield.strength", String::new()),
//!     "strong"
//! );
//! assert_eq!(map.get_path("weapon.missing", "none".to_string()), "none");
//! ```

pub mod attribute;
pub mod collection;
pub mod convert;
pub mod json;
pub mod logger;
pub mod map;
pub mod zero;

pub use attribute::{AttributeError, Attributes};
pub use collection::Collection;
pub use json::JsonError;
pub use map::{Node, PathMap, StringMap, ValueMap};
pub use zero::Zero;

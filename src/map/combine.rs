//! map::combine
//!
//! Combination policies across maps.
//!
//! # Policies
//!
//! Two deliberately different precedence rules coexist:
//!
//! - [`PathMap::merge`] is a **fill-merge**: it writes a source entry only
//!   into a slot whose current value is zero, and only when the source's
//!   value is not. Earlier sources win; a later source can never displace
//!   a value an earlier one filled. Merging the same source twice is a
//!   no-op.
//! - [`PathMap::replace`] is **last-writer-wins**: every source entry
//!   overwrites unconditionally, zero or not, and the last source wins on
//!   key collisions.
//!
//! Both mutate the target in place and return it for chaining; callers
//! needing the original must copy first. [`PathMap::filter_empty`] is the
//! non-mutating companion that projects out the non-zero entries.
//!
//! Combination is shallow: entries are compared and copied at the top
//! level only, with nested maps moving as whole nodes (a non-empty nested
//! map is a non-zero entry).
//!
//! # Example
//!
//! ```
//! use dotmap::PathMap;
//!
//! let mut target: PathMap<String> = [
//!     ("a", "1".to_string()),
//!     ("b", "2".to_string()),
//! ]
//! .into_iter()
//! .collect();
//! let source: PathMap<String> = [
//!     ("b", "3".to_string()),
//!     ("c", "4".to_string()),
//! ]
//! .into_iter()
//! .collect();
//!
//! target.merge([&source]);
//! assert_eq!(target.get_path("b", String::new()), "2"); // kept
//! assert_eq!(target.get_path("c", String::new()), "4"); // filled
//! ```

use super::PathMap;
use crate::zero::Zero;

impl<V: Zero + Clone> PathMap<V> {
    /// Fill-merge entries from `sources` into `self`.
    ///
    /// For each source entry, the value is written only if the target's
    /// current entry is zero (or absent) **and** the source's value is not
    /// zero. Sources are visited in order, so earlier sources win. There
    /// is no "absent source" case to skip; an empty iterator or empty maps
    /// simply contribute nothing.
    pub fn merge<'a, I>(&mut self, sources: I) -> &mut Self
    where
        V: 'a,
        I: IntoIterator<Item = &'a PathMap<V>>,
    {
        for source in sources {
            for (key, node) in source {
                if node.is_zero() {
                    continue;
                }
                let slot_is_zero = self.entries.get(key).map_or(true, Zero::is_zero);
                if slot_is_zero {
                    self.entries.insert(key.clone(), node.clone());
                }
            }
        }
        self
    }

    /// Overwrite entries from `sources` into `self`, last writer wins.
    ///
    /// Zero-ness plays no part: a zero source value overwrites a non-zero
    /// target value.
    pub fn replace<'a, I>(&mut self, sources: I) -> &mut Self
    where
        V: 'a,
        I: IntoIterator<Item = &'a PathMap<V>>,
    {
        for source in sources {
            for (key, node) in source {
                self.entries.insert(key.clone(), node.clone());
            }
        }
        self
    }

    /// A new map holding only the non-zero entries of `self`.
    ///
    /// `self` is untouched; the result's keys are a subset of `self`'s.
    pub fn filter_empty(&self) -> PathMap<V> {
        PathMap {
            entries: self
                .entries
                .iter()
                .filter(|(_, node)| !node.is_zero())
                .map(|(key, node)| (key.clone(), node.clone()))
                .collect(),
        }
    }
}

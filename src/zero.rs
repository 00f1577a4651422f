//! zero
//!
//! Canonical "empty value" classification.
//!
//! # Overview
//!
//! [`Zero`] is the single authority for "does this value mean anything"
//! across the crate. [`crate::map::PathMap::get_path`] substitutes the
//! caller default for zero values, and the merge combinator fills only
//! zero slots. The classification is total and pure: it never fails and
//! has no side effects.
//!
//! # Classification
//!
//! - Absence (`Option::None`) is zero; `Some(v)` defers to `v`
//! - Strings are zero iff empty
//! - `false` is zero
//! - Every integer and float type is zero iff numerically 0
//! - Sequences and maps are zero iff they have no elements
//! - `serde_json::Value` follows the rule matching its variant
//!   (`Null` is always zero)
//!
//! # User-defined types
//!
//! Rather than open-ended runtime type inspection, the supported shapes
//! form a closed set of trait impls. Types outside that set opt in with
//! [`zero_via_default!`], which classifies a value as zero iff it equals
//! its `Default` instance. Concurrency handles (channels, queue handles)
//! are deliberately outside the classifier's domain: there is no `Zero`
//! impl for them, so misuse fails at compile time instead of picking one
//! of two historically inconsistent runtime rules.
//!
//! # Example
//!
//! ```
//! use dotmap::Zero;
//!
//! assert!("".is_zero());
//! assert!(0u32.is_zero());
//! assert!(Vec::<i32>::new().is_zero());
//! assert!(!"loaded".is_zero());
//! ```

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// Classification of empty/absent values.
///
/// Implementations must be total (never panic) and pure.
pub trait Zero {
    /// Returns true iff the value is empty/absent per the crate-wide rule.
    fn is_zero(&self) -> bool;
}

/// Whether a value equals its type's `Default` instance.
///
/// The fallback branch for user-defined types; [`zero_via_default!`]
/// wires it into a `Zero` impl.
pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Implement [`Zero`] for named types by comparison with `Default`.
///
/// # Example
///
/// ```
/// use dotmap::{zero_via_default, Zero};
///
/// #[derive(Default, PartialEq)]
/// struct Cursor {
///     line: u32,
///     column: u32,
/// }
///
/// zero_via_default!(Cursor);
///
/// assert!(Cursor::default().is_zero());
/// assert!(!Cursor { line: 3, column: 0 }.is_zero());
/// ```
#[macro_export]
macro_rules! zero_via_default {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::zero::Zero for $ty {
                fn is_zero(&self) -> bool {
                    $crate::zero::is_default(self)
                }
            }
        )+
    };
}

macro_rules! zero_for_integers {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Zero for $ty {
                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )+
    };
}

zero_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Zero for f32 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl Zero for f64 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl Zero for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl Zero for char {
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl Zero for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zero for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zero for () {
    fn is_zero(&self) -> bool {
        true
    }
}

impl<T: Zero> Zero for Option<T> {
    fn is_zero(&self) -> bool {
        match self {
            None => true,
            Some(value) => value.is_zero(),
        }
    }
}

impl<T> Zero for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Zero for [T] {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> Zero for [T; N] {
    fn is_zero(&self) -> bool {
        N == 0
    }
}

impl<K, V, S> Zero for HashMap<K, V, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Zero for BTreeMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Zero + ?Sized> Zero for &T {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: Zero + ?Sized> Zero for &mut T {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: Zero + ?Sized> Zero for Box<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl Zero for Value {
    fn is_zero(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(fields) => fields.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absence_is_zero() {
        assert!(Option::<String>::None.is_zero());
        assert!(Some(String::new()).is_zero());
        assert!(!Some("x".to_string()).is_zero());
    }

    #[test]
    fn strings() {
        assert!("".is_zero());
        assert!(String::new().is_zero());
        assert!(!"0".is_zero());
        assert!(!" ".is_zero());
    }

    #[test]
    fn booleans() {
        assert!(false.is_zero());
        assert!(!true.is_zero());
    }

    #[test]
    fn integers_and_floats() {
        assert!(0i8.is_zero());
        assert!(0u64.is_zero());
        assert!(0usize.is_zero());
        assert!(0.0f32.is_zero());
        assert!(0.0f64.is_zero());
        assert!((-0.0f64).is_zero());
        assert!(!(-1i32).is_zero());
        assert!(!0.5f64.is_zero());
    }

    #[test]
    fn sequences_and_maps() {
        assert!(Vec::<u8>::new().is_zero());
        assert!(!vec![1].is_zero());
        assert!([0u8; 0].is_zero());
        assert!(![0u8; 3].is_zero());
        assert!(HashMap::<String, i32>::new().is_zero());
        assert!(BTreeMap::<String, i32>::new().is_zero());

        let mut populated = HashMap::new();
        populated.insert("k", 0);
        assert!(!populated.is_zero());
    }

    #[test]
    fn totality_row() {
        // null, "", 0, false, empty sequence, non-empty sequence
        assert!(Value::Null.is_zero());
        assert!("".is_zero());
        assert!(0.is_zero());
        assert!(false.is_zero());
        assert!(Vec::<i32>::new().is_zero());
        assert!(!vec![1, 2, 3].is_zero());
    }

    #[test]
    fn json_values() {
        assert!(json!(null).is_zero());
        assert!(json!("").is_zero());
        assert!(json!(0).is_zero());
        assert!(json!(0.0).is_zero());
        assert!(json!(false).is_zero());
        assert!(json!([]).is_zero());
        assert!(json!({}).is_zero());
        assert!(!json!("x").is_zero());
        assert!(!json!(1).is_zero());
        assert!(!json!(true).is_zero());
        assert!(!json!([0]).is_zero());
        assert!(!json!({ "k": null }).is_zero());
    }

    #[test]
    fn references_defer_to_pointee() {
        let s = String::from("x");
        assert!(!(&s).is_zero());
        assert!(Box::new(0u32).is_zero());
    }

    #[test]
    fn default_fallback() {
        #[derive(Default, PartialEq)]
        struct Endpoint {
            host: String,
            port: u16,
        }

        zero_via_default!(Endpoint);

        assert!(Endpoint::default().is_zero());
        assert!(!Endpoint {
            host: "localhost".into(),
            port: 8080,
        }
        .is_zero());
        assert!(is_default(&Endpoint::default()));
    }
}

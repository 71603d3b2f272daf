//! Core value types
//!
//! `Value` is what the engine walks. Objects keep insertion order because
//! wildcard and recursive traversal report children in that order.

use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexMap;

use super::dynamic::{DynamicAccessor, DynamicHandle};

/// JSON-shaped node
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Ordered key to value mapping
    Object(IndexMap<String, Value>),
    /// Ordered sequence
    Array(Vec<Value>),
    /// String, number, boolean or null
    Scalar(Scalar),
    /// Host object resolving keys through a [`DynamicAccessor`]
    Dynamic(DynamicHandle),
}

/// Leaf value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// JSON null
    Null,
    /// JSON boolean
    Bool(bool),
    /// JSON number
    Number(Number),
    /// JSON string
    String(String),
}

/// JSON number, integers kept exact
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
}

impl Number {
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // callers asking for f64 accept rounding above 2^53
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(i),
            Number::Float(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0 || f.is_nan(),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

/// Exact ordering of an integer against a float
///
/// The float is split into its integral and fractional parts so large
/// integers are never rounded through `f64`.
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    // 2^63, exactly representable
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return None;
    }
    if float >= LIMIT {
        return Some(Ordering::Less);
    }
    if float < -LIMIT {
        return Some(Ordering::Greater);
    }

    let whole = float.trunc();
    // In range after the checks above
    #[allow(clippy::cast_possible_truncation)]
    let whole_int = whole as i64;
    match int.cmp(&whole_int) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)),
        unequal => Some(unequal),
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

impl Scalar {
    /// Truthiness used by existence filters: null, false, zero and "" are falsy
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Null => false,
            Scalar::Bool(b) => *b,
            Scalar::Number(n) => !n.is_zero(),
            Scalar::String(s) => !s.is_empty(),
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "boolean",
            Scalar::Number(_) => "number",
            Scalar::String(_) => "string",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl Value {
    /// JSON null
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Value::Scalar(Scalar::Null)
    }

    /// Wrap a host object so keys resolve through its accessor
    #[must_use]
    pub fn dynamic(accessor: impl DynamicAccessor + 'static) -> Self {
        Value::Dynamic(DynamicHandle::new(accessor))
    }

    /// Build an object from key/value pairs, keeping their order
    #[must_use]
    pub fn object_from<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Scalar(Scalar::Number(n)) => Some(n.as_f64()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    /// Existence-filter truthiness; empty containers are falsy, host objects truthy
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Object(map) => !map.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Scalar(s) => s.is_truthy(),
            Value::Dynamic(_) => true,
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Object(_) => "object",
            Value::Array(_) => "array",
            Value::Scalar(s) => s.type_name(),
            Value::Dynamic(_) => "dynamic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_and_float_compare_numerically() {
        assert_eq!(Number::Int(10), Number::Float(10.0));
        assert!(Number::Float(8.95) < Number::Int(10));
        assert_ne!(Number::Int(1), Number::Int(2));
    }

    #[test]
    fn large_integers_are_not_rounded_through_floats() {
        assert_ne!(Number::Int(9_007_199_254_740_993), Number::Float(9_007_199_254_740_992.0));
        assert!(Number::Int(9_007_199_254_740_993) > Number::Float(9_007_199_254_740_992.0));
        assert_eq!(Number::Int(9_007_199_254_740_992), Number::Float(9_007_199_254_740_992.0));
        assert!(Number::Int(i64::MAX) < Number::Float(1e19));
        assert!(Number::Int(i64::MIN) > Number::Float(-1e19));
    }

    #[test]
    fn fractional_floats_order_against_integers() {
        assert!(Number::Int(2) < Number::Float(2.5));
        assert!(Number::Int(-2) > Number::Float(-2.5));
        assert!(Number::Float(2.5) > Number::Int(2));
        assert_eq!(Number::Int(0).partial_cmp(&Number::Float(f64::NAN)), None);
    }

    #[test]
    fn truthiness_follows_emptiness() {
        assert!(!Value::null().is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::Array(vec![]).is_truthy());
        assert!(Value::from("0-553-21311-3").is_truthy());
        assert!(Value::from(vec![Value::null()]).is_truthy());
    }

    #[test]
    fn object_from_keeps_insertion_order() {
        let value = Value::object_from([("z", 1), ("a", 2), ("m", 3)]);
        let keys: Vec<&str> = value
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}

//! Child access for path evaluation
//!
//! Every filter reads children through this module so plain data and
//! dynamic host objects are traversed the same way. Children of borrowed
//! nodes stay borrowed; only values produced by a dynamic accessor are owned.

use std::borrow::Cow;

use crate::config::JsonPathConfig;
use crate::tokens::PathKey;
use crate::value::Value;

/// Resolve `key` on `node`
///
/// Resolution order: array position, object member, dynamic accessor (only
/// when [`JsonPathConfig::allow_dynamic`] is set). Anything else is "not found".
/// Negative positions count from the end of the array.
#[must_use]
pub fn get<'a>(node: &'a Value, key: &PathKey, config: &JsonPathConfig) -> Option<Cow<'a, Value>> {
    match (node, key) {
        (Value::Array(items), PathKey::Index(index)) => {
            resolve_index(items.len(), *index).map(|i| Cow::Borrowed(&items[i]))
        }
        (Value::Object(map), PathKey::Name(name)) => map.get(name).map(Cow::Borrowed),
        (Value::Dynamic(handle), PathKey::Name(name)) if config.allow_dynamic => {
            let resolved = handle.get(name);
            tracing::trace!(
                target: "flowpath::access",
                key = %name,
                found = resolved.is_some(),
                "dynamic key lookup"
            );
            resolved.map(Cow::Owned)
        }
        (Value::Dynamic(_), PathKey::Name(name)) => {
            tracing::trace!(
                target: "flowpath::access",
                key = %name,
                "dynamic access disabled, skipping lookup"
            );
            None
        }
        _ => None,
    }
}

/// [`get`] for a working-collection entry, keeping the `'a` lifetime
#[must_use]
pub fn child<'a>(
    node: &Cow<'a, Value>,
    key: &PathKey,
    config: &JsonPathConfig,
) -> Option<Cow<'a, Value>> {
    match node {
        Cow::Borrowed(value) => get(*value, key, config),
        Cow::Owned(value) => get(value, key, config).map(|found| Cow::Owned(found.into_owned())),
    }
}

/// Direct children in natural order: object values by key order, array elements by position
#[must_use]
pub fn children<'a>(node: &Cow<'a, Value>) -> Vec<Cow<'a, Value>> {
    match node {
        Cow::Borrowed(value) => match *value {
            Value::Object(map) => map.values().map(Cow::Borrowed).collect(),
            Value::Array(items) => items.iter().map(Cow::Borrowed).collect(),
            Value::Scalar(_) | Value::Dynamic(_) => Vec::new(),
        },
        Cow::Owned(value) => match value {
            Value::Object(map) => map.values().cloned().map(Cow::Owned).collect(),
            Value::Array(items) => items.iter().cloned().map(Cow::Owned).collect(),
            Value::Scalar(_) | Value::Dynamic(_) => Vec::new(),
        },
    }
}

/// Walk a multi-segment path such as `@.a.b`; an empty path yields `node` itself
#[must_use]
pub fn resolve_path<'a>(
    node: &Cow<'a, Value>,
    segments: &[PathKey],
    config: &JsonPathConfig,
) -> Option<Cow<'a, Value>> {
    let mut current = node.clone();
    for segment in segments {
        current = child(&current, segment, config)?;
    }
    Some(current)
}

/// Turn a possibly negative index into a position, `None` when out of range
#[inline]
#[must_use]
pub fn resolve_index(len: usize, index: i64) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let resolved = if index < 0 { len + index } else { index };
    if (0..len).contains(&resolved) {
        usize::try_from(resolved).ok()
    } else {
        None
    }
}

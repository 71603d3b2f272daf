//! Dynamic key resolution for host objects
//!
//! Host objects that compute properties on demand implement
//! [`DynamicAccessor`]. The engine only ever calls `get`; it never inspects
//! the concrete host type.

use std::fmt;
use std::sync::Arc;

use super::core::Value;

/// Capability to resolve a key on an opaque host object
pub trait DynamicAccessor: Send + Sync {
    /// Resolve `key`, returning `None` when the host has no such property
    fn get(&self, key: &str) -> Option<Value>;
}

impl<F> DynamicAccessor for F
where
    F: Fn(&str) -> Option<Value> + Send + Sync,
{
    fn get(&self, key: &str) -> Option<Value> {
        self(key)
    }
}

/// Shared handle to a [`DynamicAccessor`]
///
/// Two handles are equal only when they point at the same host object.
#[derive(Clone)]
pub struct DynamicHandle(Arc<dyn DynamicAccessor>);

impl DynamicHandle {
    pub fn new(accessor: impl DynamicAccessor + 'static) -> Self {
        Self(Arc::new(accessor))
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.get(key)
    }
}

impl From<Arc<dyn DynamicAccessor>> for DynamicHandle {
    fn from(accessor: Arc<dyn DynamicAccessor>) -> Self {
        Self(accessor)
    }
}

impl PartialEq for DynamicHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for DynamicHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DynamicHandle(..)")
    }
}

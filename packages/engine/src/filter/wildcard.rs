//! Wildcard filter: `.*` and `[*]`

use std::borrow::Cow;

use super::{FilterEvaluator, WorkingCollection};
use crate::access;
use crate::value::Value;

impl<'a> FilterEvaluator<'a> {
    /// Every direct child of every node, in natural order
    pub(crate) fn apply_wildcard(&self, collection: &[Cow<'a, Value>]) -> WorkingCollection<'a> {
        collection.iter().flat_map(access::children).collect()
    }
}

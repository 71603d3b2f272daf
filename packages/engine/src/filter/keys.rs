//! Key filters: `.name`, `['name']`, `['a','b']`

use std::borrow::Cow;

use super::{FilterEvaluator, WorkingCollection};
use crate::access;
use crate::tokens::PathKey;
use crate::value::Value;

impl<'a> FilterEvaluator<'a> {
    /// Look up every key on every node, in key order per node
    ///
    /// Nodes without the key (including scalars) contribute nothing.
    pub(crate) fn apply_keys(
        &self,
        collection: &[Cow<'a, Value>],
        keys: &[PathKey],
    ) -> WorkingCollection<'a> {
        collection
            .iter()
            .flat_map(|node| {
                keys.iter()
                    .filter_map(move |key| access::child(node, key, self.config()))
            })
            .collect()
    }
}

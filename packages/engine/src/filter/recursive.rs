//! Recursive descent: `..` and `..key`
//!
//! Walks each node pre-order, depth-first, with an explicit stack so deep
//! documents do not depend on the call stack. The input tree is assumed to
//! be acyclic.

use std::borrow::Cow;

use super::{FilterEvaluator, WorkingCollection};
use crate::access;
use crate::tokens::PathKey;
use crate::value::Value;

impl<'a> FilterEvaluator<'a> {
    /// Contribute every visited node, or `visited.<key>` when a key is given
    pub(crate) fn apply_recursive(
        &self,
        collection: WorkingCollection<'a>,
        key: Option<&str>,
    ) -> WorkingCollection<'a> {
        let key = key.map(|name| PathKey::Name(name.to_string()));
        let mut results = Vec::new();

        for node in collection {
            for visited in descendants(node) {
                match &key {
                    Some(key) => results.extend(access::child(&visited, key, self.config())),
                    None => results.push(visited),
                }
            }
        }
        results
    }
}

/// `node` followed by all of its descendants in document order
#[must_use]
pub(crate) fn descendants(node: Cow<'_, Value>) -> Vec<Cow<'_, Value>> {
    let mut visited = Vec::new();
    let mut stack = vec![node];

    while let Some(current) = stack.pop() {
        let children = access::children(&current);
        visited.push(current);
        stack.extend(children.into_iter().rev());
    }
    visited
}

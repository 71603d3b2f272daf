//! Result collection
//!
//! The ordered matches of one evaluation. Order is exactly the order in
//! which filters produced the values; nothing is re-sorted.

use std::borrow::Cow;
use std::ops::Index;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::compiler::CompiledPath;
use crate::config::JsonPathConfig;
use crate::error::JsonPathResult;
use crate::value::Value;

/// Immutable, ordered set of matched values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultCollection<'a> {
    items: Vec<Cow<'a, Value>>,
    config: JsonPathConfig,
}

impl<'a> ResultCollection<'a> {
    #[must_use]
    pub fn new(items: Vec<Cow<'a, Value>>, config: JsonPathConfig) -> Self {
        Self { items, config }
    }

    /// Matched values in evaluation order
    #[must_use]
    pub fn data(&self) -> Vec<&Value> {
        self.iter().collect()
    }

    /// Collection holding only the first match; empty when there are none
    #[must_use]
    pub fn first(&self) -> ResultCollection<'a> {
        self.single(self.items.first())
    }

    /// Collection holding only the last match; empty when there are none
    #[must_use]
    pub fn last(&self) -> ResultCollection<'a> {
        self.single(self.items.last())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index).map(|item| &**item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter().map(|item| &**item)
    }

    /// Detach the results from the source tree
    #[must_use]
    pub fn into_owned(self) -> ResultCollection<'static> {
        ResultCollection {
            items: self
                .items
                .into_iter()
                .map(|item| Cow::Owned(item.into_owned()))
                .collect(),
            config: self.config,
        }
    }

    /// Owned copies of the matched values
    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.items.into_iter().map(Cow::into_owned).collect()
    }

    /// Matches as a JSON array
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.iter().map(serde_json::Value::from).collect())
    }

    /// Evaluate a further expression with the array of current matches as root
    ///
    /// # Errors
    ///
    /// Same as [`CompiledPath::compile`] and [`CompiledPath::evaluate`].
    pub fn find(&self, expression: &str) -> JsonPathResult<ResultCollection<'static>> {
        let root = Value::Array(self.iter().cloned().collect());
        let compiled = CompiledPath::compile(expression)?;
        let found = compiled.evaluate(&root, self.config)?;
        Ok(found.into_owned())
    }

    fn single(&self, item: Option<&Cow<'a, Value>>) -> ResultCollection<'a> {
        ResultCollection {
            items: item.cloned().into_iter().collect(),
            config: self.config,
        }
    }
}

impl Index<usize> for ResultCollection<'_> {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &*self.items[index]
    }
}

impl<'r, 'a> IntoIterator for &'r ResultCollection<'a> {
    type Item = &'r Value;
    type IntoIter = Box<dyn Iterator<Item = &'r Value> + 'r>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for ResultCollection<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

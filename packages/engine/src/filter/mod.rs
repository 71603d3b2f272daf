//! Filter evaluation engine
//!
//! Each token transforms the whole working collection. Evaluating an
//! expression is a fold over its tokens starting from `[root]`; no state
//! survives between `apply` calls other than the collection itself.

mod arrays;
mod keys;
mod query;
mod recursive;
mod script;
mod wildcard;

use std::borrow::Cow;

pub use self::arrays::slice_positions;
pub use self::query::compare_scalar;
pub use self::script::script_offset;

use crate::config::JsonPathConfig;
use crate::error::JsonPathResult;
use crate::tokens::{PathKey, Token};
use crate::value::Value;

/// Ordered matches between filter steps
///
/// Entries borrow from the caller's tree; only values produced by a dynamic
/// accessor are owned.
pub type WorkingCollection<'a> = Vec<Cow<'a, Value>>;

/// Applies tokens to working collections rooted at one value
#[derive(Debug, Clone, Copy)]
pub struct FilterEvaluator<'a> {
    root: &'a Value,
    config: JsonPathConfig,
}

impl<'a> FilterEvaluator<'a> {
    #[inline]
    #[must_use]
    pub fn new(root: &'a Value, config: JsonPathConfig) -> Self {
        Self { root, config }
    }

    /// The collection every evaluation starts from
    #[inline]
    #[must_use]
    pub fn initial(&self) -> WorkingCollection<'a> {
        vec![Cow::Borrowed(self.root)]
    }

    /// Fold `tokens` over `[root]`
    ///
    /// # Errors
    ///
    /// Propagates the first filter error, currently only unsupported scripts.
    pub fn evaluate(&self, tokens: &[Token]) -> JsonPathResult<WorkingCollection<'a>> {
        tokens
            .iter()
            .try_fold(self.initial(), |collection, token| self.apply(collection, token))
    }

    /// Apply a single token to `collection`
    ///
    /// # Errors
    ///
    /// Returns an unsupported-script error for `[(...)]` filters outside the
    /// `@.length` arithmetic subset.
    pub fn apply(
        &self,
        collection: WorkingCollection<'a>,
        token: &Token,
    ) -> JsonPathResult<WorkingCollection<'a>> {
        let input_len = collection.len();
        let output = match token {
            Token::Root => self.initial(),
            Token::DotKey(name) => {
                self.apply_keys(&collection, std::slice::from_ref(&PathKey::Name(name.clone())))
            }
            Token::BracketKeys(keys) => self.apply_keys(&collection, keys),
            Token::Index(indices) => self.apply_index(&collection, indices),
            Token::Slice { start, end, step } => {
                self.apply_slice(&collection, *start, *end, *step)
            }
            Token::Wildcard => self.apply_wildcard(&collection),
            Token::RecursiveDescent(key) => self.apply_recursive(collection, key.as_deref()),
            Token::QueryMatch(expression) => self.apply_query(&collection, expression),
            Token::QueryScript(script) => self.apply_script(&collection, script)?,
        };

        tracing::trace!(
            target: "flowpath::filter",
            token = %token,
            input = input_len,
            output = output.len(),
            "applied filter"
        );
        Ok(output)
    }

    #[inline]
    pub(crate) fn config(&self) -> &JsonPathConfig {
        &self.config
    }
}

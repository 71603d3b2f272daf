//! Compiled path expressions
//!
//! Lexing happens once; the resulting token sequence can be evaluated
//! against any number of documents.

use std::fmt;

use crate::config::JsonPathConfig;
use crate::error::JsonPathResult;
use crate::filter::FilterEvaluator;
use crate::lexer;
use crate::result::ResultCollection;
use crate::tokens::Token;
use crate::value::Value;

/// A lexed path expression ready for evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPath {
    expression: String,
    tokens: Vec<Token>,
}

impl CompiledPath {
    /// Lex `expression` into filter tokens
    ///
    /// # Errors
    ///
    /// Returns a syntax error for unbalanced brackets or parentheses,
    /// unterminated quotes, empty brackets, malformed numbers, slices or
    /// query expressions, and unexpected characters.
    pub fn compile(expression: &str) -> JsonPathResult<Self> {
        let tokens = lexer::tokenize(expression)?;
        Ok(Self {
            expression: expression.to_string(),
            tokens,
        })
    }

    /// Fold the tokens over `[root]`
    ///
    /// # Errors
    ///
    /// Returns an unsupported-script error when a `[(...)]` filter is outside
    /// the `@.length` arithmetic subset. Paths that match nothing are not
    /// errors; they produce an empty collection.
    pub fn evaluate<'a>(
        &self,
        root: &'a Value,
        config: JsonPathConfig,
    ) -> JsonPathResult<ResultCollection<'a>> {
        let matches = FilterEvaluator::new(root, config).evaluate(&self.tokens)?;
        tracing::debug!(
            target: "flowpath::filter",
            expression = %self.expression,
            matches = matches.len(),
            "evaluated path expression"
        );
        Ok(ResultCollection::new(matches, config))
    }

    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl fmt::Display for CompiledPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JSONPath('{}')", self.expression)
    }
}

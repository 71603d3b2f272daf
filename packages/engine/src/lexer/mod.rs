//! Path expression lexer
//!
//! Turns the raw expression text into an ordered sequence of filter tokens.
//! Structural problems (unbalanced brackets, unterminated quotes, unknown
//! characters) are reported here, before any evaluation starts.

mod brackets;
mod core;
mod query;
mod strings;

pub use self::core::Lexer;

use crate::error::JsonPathResult;
use crate::tokens::Token;

/// Tokenize `expression` into filter descriptors
///
/// # Errors
///
/// Returns a syntax error for structurally invalid expressions.
pub fn tokenize(expression: &str) -> JsonPathResult<Vec<Token>> {
    Lexer::new(expression).tokenize()
}

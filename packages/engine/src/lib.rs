//! # Flowpath engine
//!
//! Lexer and filter evaluation engine for JSONPath-style queries over
//! JSON-shaped values.
//!
//! An expression such as `$.store.books[?(@.price < 10)].title` is lexed into
//! a sequence of filter tokens. Evaluation folds those tokens over a working
//! collection that starts as `[root]`; each token maps every node to zero or
//! more matches. The final collection is returned as a [`ResultCollection`].
//!
//! ```
//! use flowpath_engine::{CompiledPath, JsonPathConfig, Value};
//! use serde_json::json;
//!
//! let root = Value::from(json!({"store": {"books": [
//!     {"title": "A", "price": 5},
//!     {"title": "B", "price": 15}
//! ]}}));
//!
//! let path = CompiledPath::compile("$.store.books[?(@.price < 10)].title")?;
//! let titles = path.evaluate(&root, JsonPathConfig::default())?;
//! assert_eq!(titles.to_json(), json!(["A"]));
//! # Ok::<(), flowpath_engine::JsonPathError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod access;
pub mod compiler;
pub mod config;
pub mod error;
pub mod filter;
pub mod lexer;
pub mod result;
pub mod tokens;
pub mod value;

pub use self::{
    compiler::CompiledPath,
    config::{ALLOW_DYNAMIC, JsonPathConfig},
    error::{ErrorKind, JsonPathError, JsonPathResult},
    filter::{FilterEvaluator, WorkingCollection},
    lexer::{Lexer, tokenize},
    result::ResultCollection,
    tokens::{ComparisonOp, PathKey, QueryExpression, QueryPath, Token},
    value::{DynamicAccessor, DynamicHandle, Number, Scalar, Value},
};

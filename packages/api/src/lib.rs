//! Flowpath public API
//!
//! JSONPath-style queries over JSON documents and host objects.
//!
//! ```
//! use flowpath::JsonPath;
//! use serde_json::json;
//!
//! let doc = JsonPath::new(json!([10, 20, 30, 40]));
//! let every_other = doc.find("$[1::2]")?;
//! assert_eq!(every_other.to_json(), json!([20, 40]));
//! # Ok::<(), flowpath::JsonPathError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod document;

pub use document::JsonPath;

// Re-export the engine surface
pub use flowpath_engine::{
    ALLOW_DYNAMIC, CompiledPath, ComparisonOp, DynamicAccessor, DynamicHandle, ErrorKind,
    JsonPathConfig, JsonPathError, JsonPathResult, Number, PathKey, QueryExpression, QueryPath,
    ResultCollection, Scalar, Token, Value, tokenize,
};

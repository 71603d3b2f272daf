//! JSONPath error handling module
//!
//! Error types, constructors and conversions for lexing and evaluating
//! path expressions.

pub mod constructors;
mod types;

pub use constructors::{invalid_json_error, syntax_error, unsupported_script_error};
pub use types::{ErrorKind, JsonPathError, JsonPathResult};

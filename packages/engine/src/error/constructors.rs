//! Error constructor functions
//!
//! Factory helpers that attach the offending expression and position to
//! every error so callers can point at the broken part of a path.

use super::types::{ErrorKind, JsonPathError};

/// Creates a syntax error for a malformed path expression
///
/// # Examples
/// ```
/// use flowpath_engine::error::syntax_error;
///
/// let error = syntax_error("$.store[", "unbalanced '[' without matching ']'", Some(7));
/// assert!(error.is_syntax());
/// assert_eq!(error.position, Some(7));
/// ```
pub fn syntax_error(
    expression: &str,
    reason: impl AsRef<str>,
    position: Option<usize>,
) -> JsonPathError {
    let message = match position {
        Some(pos) => format!(
            "invalid expression '{expression}': {} at position {pos}",
            reason.as_ref()
        ),
        None => format!("invalid expression '{expression}': {}", reason.as_ref()),
    };
    JsonPathError::new(ErrorKind::Syntax, message).with_position(position)
}

/// Creates an error for a script filter outside the supported subset
pub fn unsupported_script_error(script: &str) -> JsonPathError {
    JsonPathError::new(
        ErrorKind::UnsupportedScript,
        format!(
            "script expression '({script})' is not supported; only '@.length', '@.length-N' and '@.length+N' are evaluated"
        ),
    )
}

/// Creates an error for JSON text that could not be parsed
pub fn invalid_json_error(reason: impl Into<String>) -> JsonPathError {
    JsonPathError::new(ErrorKind::InvalidJson, reason)
}

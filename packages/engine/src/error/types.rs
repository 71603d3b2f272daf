//! JSON Path Error Types
//!
//! Core error types for path lexing and filter evaluation.

use std::fmt;

/// JSON Path processing error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed path expression (unbalanced brackets, unterminated quotes, unknown tokens)
    Syntax,
    /// Script filter `[(...)]` outside the supported `@.length` arithmetic
    UnsupportedScript,
    /// Input text handed to a convenience constructor was not valid JSON
    InvalidJson,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::Syntax => "syntax",
            ErrorKind::UnsupportedScript => "unsupported script",
            ErrorKind::InvalidJson => "invalid json",
        };
        f.write_str(label)
    }
}

/// Main JSON Path error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("JSONPath {kind} error: {message}")]
pub struct JsonPathError {
    /// What went wrong
    pub kind: ErrorKind,
    /// Human readable description including the offending expression
    pub message: String,
    /// Character offset into the expression, when known
    pub position: Option<usize>,
}

/// Result type for JSON Path operations
pub type JsonPathResult<T> = Result<T, JsonPathError>;

impl JsonPathError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            position: None,
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: Option<usize>) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn is_syntax(&self) -> bool {
        self.kind == ErrorKind::Syntax
    }

    #[must_use]
    pub fn is_unsupported_script(&self) -> bool {
        self.kind == ErrorKind::UnsupportedScript
    }
}

impl From<serde_json::Error> for JsonPathError {
    fn from(err: serde_json::Error) -> Self {
        super::constructors::invalid_json_error(err.to_string())
    }
}

//! Token definitions for path expressions
//!
//! Each token is a complete filter descriptor: the lexer resolves bracket
//! contents, slices and query expressions up front so evaluation never has to
//! look at the raw expression text again.

use std::fmt;

use crate::value::Scalar;

/// One filter step of a path expression
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `$`, resets the working collection to the root
    Root,
    /// `.name`
    DotKey(String),
    /// `['a']`, `["a"]`, `['a','b']`
    BracketKeys(Vec<PathKey>),
    /// `[0]`, `[-1]`, `[0,2]`
    Index(Vec<i64>),
    /// `[start:end:step]`, every part optional
    Slice {
        /// First index, negative counts from the end
        start: Option<i64>,
        /// Exclusive end, negative counts from the end
        end: Option<i64>,
        /// Positive stride
        step: Option<i64>,
    },
    /// `.*` or `[*]`
    Wildcard,
    /// `..` optionally followed by a key (`..author`)
    RecursiveDescent(Option<String>),
    /// `[?(...)]`
    QueryMatch(QueryExpression),
    /// `[(...)]`, raw script text without the parentheses
    QueryScript(String),
}

/// A literal key inside brackets or a query path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathKey {
    /// Object member name
    Name(String),
    /// Array position, negative counts from the end
    Index(i64),
}

/// Relative path inside a query filter, e.g. `@.author` or `@['@language']`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPath {
    pub segments: Vec<PathKey>,
}

/// Boolean expression evaluated against each candidate child
#[derive(Debug, Clone, PartialEq)]
pub enum QueryExpression {
    /// `@.path`: the path resolves to a truthy value
    Exists(QueryPath),
    /// `@.path <op> literal`
    Compare {
        path: QueryPath,
        op: ComparisonOp,
        literal: Scalar,
    },
}

/// Comparison operators for query filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// `==` (a lone `=` is accepted as well)
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
}

impl ComparisonOp {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonOp::Equal => "==",
            ComparisonOp::NotEqual => "!=",
            ComparisonOp::Less => "<",
            ComparisonOp::LessEq => "<=",
            ComparisonOp::Greater => ">",
            ComparisonOp::GreaterEq => ">=",
        }
    }
}

impl QueryPath {
    #[must_use]
    pub fn new(segments: Vec<PathKey>) -> Self {
        Self { segments }
    }

    #[inline]
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKey::Name(name) => write!(f, "'{}'", name.replace('\'', "\\'")),
            PathKey::Index(i) => write!(f, "{i}"),
        }
    }
}

impl fmt::Display for QueryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("@")?;
        for segment in &self.segments {
            write!(f, "[{segment}]")?;
        }
        Ok(())
    }
}

impl fmt::Display for QueryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryExpression::Exists(path) => write!(f, "{path}"),
            QueryExpression::Compare { path, op, literal } => {
                write!(f, "{path} {} {literal}", op.as_str())
            }
        }
    }
}

/// Renders the canonical bracket form of each token
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T: fmt::Display>(items: &[T]) -> String {
            items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        }
        fn part(bound: Option<i64>) -> String {
            bound.map(|b| b.to_string()).unwrap_or_default()
        }

        match self {
            Token::Root => f.write_str("$"),
            Token::DotKey(name) => write!(f, "[{}]", PathKey::Name(name.clone())),
            Token::BracketKeys(keys) => write!(f, "[{}]", join(keys)),
            Token::Index(indices) => write!(f, "[{}]", join(indices)),
            Token::Slice { start, end, step } => match step {
                Some(step) => write!(f, "[{}:{}:{step}]", part(*start), part(*end)),
                None => write!(f, "[{}:{}]", part(*start), part(*end)),
            },
            Token::Wildcard => f.write_str("[*]"),
            Token::RecursiveDescent(Some(key)) => write!(f, "..[{}]", PathKey::Name(key.clone())),
            Token::RecursiveDescent(None) => f.write_str(".."),
            Token::QueryMatch(expression) => write!(f, "[?({expression})]"),
            Token::QueryScript(script) => write!(f, "[({script})]"),
        }
    }
}

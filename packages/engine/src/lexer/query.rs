//! Query filter expressions
//!
//! Parses the body of `[?(...)]`: a relative path starting at `@`,
//! optionally followed by a comparison operator and a literal.

use super::strings;
use crate::error::{JsonPathError, JsonPathResult, syntax_error};
use crate::tokens::{ComparisonOp, PathKey, QueryExpression, QueryPath};
use crate::value::{Number, Scalar};

/// Parse `@.path`, `@['key']` or `@.path <op> <literal>`
pub(crate) fn parse_query(input: &str, text: &str, offset: usize) -> JsonPathResult<QueryExpression> {
    QueryScanner {
        input,
        chars: text.chars().collect(),
        pos: 0,
        offset,
    }
    .parse()
}

struct QueryScanner<'a> {
    input: &'a str,
    chars: Vec<char>,
    pos: usize,
    offset: usize,
}

impl QueryScanner<'_> {
    fn parse(mut self) -> JsonPathResult<QueryExpression> {
        self.skip_whitespace();
        if self.peek() != Some('@') {
            return Err(self.error("filter expression must start with '@'"));
        }
        self.pos += 1;

        let path = self.parse_path()?;
        self.skip_whitespace();
        if self.peek().is_none() {
            return Ok(QueryExpression::Exists(path));
        }

        let op = self.parse_operator()?;
        self.skip_whitespace();
        let literal = self.parse_literal()?;
        self.skip_whitespace();

        if let Some(c) = self.peek() {
            return Err(self.error(format!("unexpected character '{c}' after literal")));
        }
        Ok(QueryExpression::Compare { path, op, literal })
    }

    fn parse_path(&mut self) -> JsonPathResult<QueryPath> {
        let mut segments = Vec::new();
        loop {
            match self.peek() {
                Some('.') => {
                    self.pos += 1;
                    let start = self.pos;
                    while self.peek().is_some_and(is_path_char) {
                        self.pos += 1;
                    }
                    if start == self.pos {
                        return Err(self.error("expected key after '.'"));
                    }
                    segments.push(PathKey::Name(self.chars[start..self.pos].iter().collect()));
                }
                Some('[') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    let key = match self.peek() {
                        Some('\'' | '"') => PathKey::Name(self.parse_string()?),
                        Some(c) if c == '-' || c.is_ascii_digit() => {
                            PathKey::Index(self.parse_integer()?)
                        }
                        _ => return Err(self.error("expected quoted key or integer inside '[]'")),
                    };
                    self.skip_whitespace();
                    if self.peek() != Some(']') {
                        return Err(self.error("expected ']'"));
                    }
                    self.pos += 1;
                    segments.push(key);
                }
                _ => break,
            }
        }
        Ok(QueryPath::new(segments))
    }

    fn parse_operator(&mut self) -> JsonPathResult<ComparisonOp> {
        let next = self.chars.get(self.pos + 1).copied();
        let (op, width) = match (self.peek(), next) {
            // `===` is treated like `==`
            (Some('='), Some('=')) if self.chars.get(self.pos + 2) == Some(&'=') => {
                (ComparisonOp::Equal, 3)
            }
            (Some('='), Some('=')) => (ComparisonOp::Equal, 2),
            (Some('!'), Some('=')) => (ComparisonOp::NotEqual, 2),
            (Some('<'), Some('=')) => (ComparisonOp::LessEq, 2),
            (Some('>'), Some('=')) => (ComparisonOp::GreaterEq, 2),
            (Some('<'), _) => (ComparisonOp::Less, 1),
            (Some('>'), _) => (ComparisonOp::Greater, 1),
            (Some('='), _) => (ComparisonOp::Equal, 1),
            _ => return Err(self.error("expected comparison operator")),
        };
        self.pos += width;
        Ok(op)
    }

    fn parse_literal(&mut self) -> JsonPathResult<Scalar> {
        match self.peek() {
            Some('\'' | '"') => Ok(Scalar::String(self.parse_string()?)),
            Some(c) if c == '-' || c.is_ascii_digit() => self.parse_number(),
            Some(c) if c.is_alphabetic() => {
                let start = self.pos;
                while self.peek().is_some_and(char::is_alphanumeric) {
                    self.pos += 1;
                }
                let word: String = self.chars[start..self.pos].iter().collect();
                match word.as_str() {
                    "true" => Ok(Scalar::Bool(true)),
                    "false" => Ok(Scalar::Bool(false)),
                    "null" => Ok(Scalar::Null),
                    _ => Err(self.error(format!("unknown literal '{word}'"))),
                }
            }
            Some(_) => Err(self.error("expected literal after operator")),
            None => Err(self.error("missing literal after operator")),
        }
    }

    fn parse_string(&mut self) -> JsonPathResult<String> {
        let (value, next) = strings::read_quoted(&self.chars, self.pos)
            .map_err(|e| self.error(e.reason()))?;
        self.pos = next;
        Ok(value)
    }

    fn parse_number(&mut self) -> JsonPathResult<Scalar> {
        let text = self.take_while(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'));
        if let Ok(i) = text.parse::<i64>() {
            return Ok(Scalar::Number(Number::Int(i)));
        }
        text.parse::<f64>()
            .map(|f| Scalar::Number(Number::Float(f)))
            .map_err(|_| self.error(format!("invalid number '{text}'")))
    }

    fn parse_integer(&mut self) -> JsonPathResult<i64> {
        let text = self.take_while(|c| c.is_ascii_digit() || c == '-');
        text.parse::<i64>()
            .map_err(|_| self.error(format!("expected integer, found '{text}'")))
    }

    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while self.peek().is_some_and(&accept) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn error(&self, reason: impl AsRef<str>) -> JsonPathError {
        syntax_error(self.input, reason, Some(self.offset + self.pos))
    }
}

/// Characters allowed in an unquoted query key
#[inline]
fn is_path_char(c: char) -> bool {
    !c.is_whitespace()
        && !matches!(
            c,
            '.' | '[' | ']' | '(' | ')' | '\'' | '"' | '=' | '!' | '<' | '>' | '&' | '|' | '@' | ','
        )
}

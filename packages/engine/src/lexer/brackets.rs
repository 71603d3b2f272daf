//! Bracket group classification
//!
//! Decides what a `[...]` group means: query filter, script filter,
//! wildcard, slice, index list or key list.

use super::{query, strings};
use crate::error::{JsonPathResult, syntax_error};
use crate::tokens::{PathKey, Token};

/// Lex the text between `[` and `]`
///
/// `offset` is the char position of the first content character inside the
/// full expression and is only used for error positions.
pub(crate) fn lex_bracket_content(
    input: &str,
    content: &str,
    offset: usize,
) -> JsonPathResult<Token> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(syntax_error(input, "empty brackets '[]'", Some(offset)));
    }

    if let Some(rest) = trimmed.strip_prefix('?') {
        let rest = rest.trim();
        let inner = strip_parens(rest).unwrap_or(rest);
        return query::parse_query(input, inner, offset).map(Token::QueryMatch);
    }

    if trimmed.starts_with('(') {
        return match strip_parens(trimmed) {
            Some(script) if !script.trim().is_empty() => {
                Ok(Token::QueryScript(script.trim().to_string()))
            }
            Some(_) => Err(syntax_error(input, "empty script expression '()'", Some(offset))),
            None => Err(syntax_error(
                input,
                "script expression must be wrapped in '(' and ')'",
                Some(offset),
            )),
        };
    }

    if trimmed == "*" {
        return Ok(Token::Wildcard);
    }

    let slice_parts = strings::split_unquoted(trimmed, ':');
    if slice_parts.len() > 1 {
        return lex_slice(input, &slice_parts, offset);
    }

    lex_keys(input, trimmed, offset)
}

/// `[start:end:step]`
fn lex_slice(input: &str, parts: &[(usize, String)], offset: usize) -> JsonPathResult<Token> {
    if parts.len() > 3 {
        return Err(syntax_error(
            input,
            "slice accepts at most three parts 'start:end:step'",
            Some(offset),
        ));
    }

    let mut bounds = [None; 3];
    for (slot, (at, part)) in bounds.iter_mut().zip(parts) {
        let part = part.trim();
        if !part.is_empty() {
            *slot = Some(parse_integer(input, part, offset + at)?);
        }
    }
    let [start, end, step] = bounds;

    if let Some(step) = step {
        if step <= 0 {
            return Err(syntax_error(
                input,
                format!("slice step must be a positive integer, found {step}"),
                Some(offset),
            ));
        }
    }

    Ok(Token::Slice { start, end, step })
}

/// `[0]`, `[0,-1]`, `['a']`, `['a','b']`, `[name]`
fn lex_keys(input: &str, content: &str, offset: usize) -> JsonPathResult<Token> {
    let mut keys = Vec::new();

    for (at, item) in strings::split_unquoted(content, ',') {
        let item = item.trim();
        let position = offset + at;
        let key = match item.chars().next() {
            None => {
                return Err(syntax_error(input, "empty key in bracket list", Some(position)));
            }
            Some('\'' | '"') => PathKey::Name(parse_quoted_key(input, item, position)?),
            Some(c) if c == '-' || c.is_ascii_digit() => {
                PathKey::Index(parse_integer(input, item, position)?)
            }
            Some('*') => {
                return Err(syntax_error(
                    input,
                    "wildcard '*' cannot be combined with other keys",
                    Some(position),
                ));
            }
            Some(_) => PathKey::Name(item.to_string()),
        };
        keys.push(key);
    }

    let indices: Option<Vec<i64>> = keys
        .iter()
        .map(|key| match key {
            PathKey::Index(i) => Some(*i),
            PathKey::Name(_) => None,
        })
        .collect();

    Ok(match indices {
        Some(indices) => Token::Index(indices),
        None => Token::BracketKeys(keys),
    })
}

/// A quoted key must be the whole item: `'a'`, not `'a'b`
fn parse_quoted_key(input: &str, item: &str, position: usize) -> JsonPathResult<String> {
    let chars: Vec<char> = item.chars().collect();
    let (value, next) = strings::read_quoted(&chars, 0)
        .map_err(|e| syntax_error(input, e.reason(), Some(position)))?;
    if next != chars.len() {
        return Err(syntax_error(
            input,
            "unexpected characters after closing quote",
            Some(position + next),
        ));
    }
    Ok(value)
}

fn parse_integer(input: &str, text: &str, position: usize) -> JsonPathResult<i64> {
    text.parse::<i64>().map_err(|_| {
        syntax_error(
            input,
            format!("expected integer, found '{text}'"),
            Some(position),
        )
    })
}

fn strip_parens(text: &str) -> Option<&str> {
    text.strip_prefix('(')?.strip_suffix(')')
}

//! Core lexer
//!
//! Scans segment by segment: `$`, `.key`, `..`, `*` and bracket groups. The
//! contents of a bracket group are handed to [`super::brackets`] once the
//! matching `]` has been located.

use super::{brackets, strings};
use crate::error::{JsonPathResult, syntax_error};
use crate::tokens::Token;

/// Expression scanner producing [`Token`]s
pub struct Lexer {
    pub(crate) input: String,
    pub(crate) chars: Vec<char>,
    pub(crate) position: usize,
    pub(crate) tokens: Vec<Token>,
}

impl Lexer {
    #[inline]
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            chars: input.chars().collect(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// Scan the whole expression
    ///
    /// # Errors
    ///
    /// Returns a syntax error describing the first structural problem found.
    pub fn tokenize(mut self) -> JsonPathResult<Vec<Token>> {
        self.skip_whitespace();

        match self.peek() {
            Some('$') => {
                self.position += 1;
                self.tokens.push(Token::Root);
            }
            Some('@') => {
                return Err(syntax_error(
                    &self.input,
                    "'@' is only valid inside a filter expression",
                    Some(self.position),
                ));
            }
            // A bare key is shorthand for `$.key`
            Some(c) if is_key_char(c) => {
                let name = self.read_key();
                self.tokens.push(Token::DotKey(name));
            }
            _ => {}
        }

        while let Some(c) = self.peek() {
            match c {
                c if c.is_whitespace() => self.position += 1,
                '.' => self.lex_dot()?,
                '[' => self.lex_bracket()?,
                '*' => {
                    self.position += 1;
                    self.tokens.push(Token::Wildcard);
                }
                ']' => {
                    return Err(syntax_error(
                        &self.input,
                        "unbalanced ']' without matching '['",
                        Some(self.position),
                    ));
                }
                other => {
                    return Err(syntax_error(
                        &self.input,
                        format!("unexpected character '{other}', expected '.', '..' or '['"),
                        Some(self.position),
                    ));
                }
            }
        }

        tracing::debug!(
            target: "flowpath::lexer",
            expression = %self.input,
            token_count = self.tokens.len(),
            "tokenized path expression"
        );
        Ok(self.tokens)
    }

    /// `.key`, `.*`, `..` and `..key`
    fn lex_dot(&mut self) -> JsonPathResult<()> {
        let start = self.position;
        self.position += 1;

        if self.peek() == Some('.') {
            self.position += 1;
            if self.peek() == Some('.') {
                return Err(syntax_error(
                    &self.input,
                    "triple dot '...' is invalid, use '..' for recursive descent",
                    Some(start),
                ));
            }
            let key = match self.peek() {
                Some(c) if is_key_char(c) => Some(self.read_key()),
                _ => None,
            };
            self.tokens.push(Token::RecursiveDescent(key));
            return Ok(());
        }

        match self.peek() {
            Some('*') => {
                self.position += 1;
                self.tokens.push(Token::Wildcard);
                Ok(())
            }
            Some(c) if is_key_char(c) => {
                let name = self.read_key();
                self.tokens.push(Token::DotKey(name));
                Ok(())
            }
            _ => Err(syntax_error(
                &self.input,
                "expected key or '*' after '.'",
                Some(start),
            )),
        }
    }

    /// `[ ... ]`
    fn lex_bracket(&mut self) -> JsonPathResult<()> {
        let open = self.position;
        let close = self.find_closing_bracket(open)?;
        let content: String = self.chars[open + 1..close].iter().collect();

        let token = brackets::lex_bracket_content(&self.input, &content, open + 1)?;
        tracing::trace!(
            target: "flowpath::lexer",
            content = %content,
            token = %token,
            "lexed bracket group"
        );
        self.tokens.push(token);
        self.position = close + 1;
        Ok(())
    }

    /// Locate the `]` closing the bracket opened at `open`
    ///
    /// Quotes are skipped as a unit; nested `[`/`(` inside query expressions
    /// must balance before the group can close.
    fn find_closing_bracket(&self, open: usize) -> JsonPathResult<usize> {
        let mut depth = 0usize;
        let mut i = open + 1;

        while i < self.chars.len() {
            match self.chars[i] {
                '\'' | '"' => {
                    let (_, next) = strings::read_quoted(&self.chars, i)
                        .map_err(|e| syntax_error(&self.input, e.reason(), Some(i)))?;
                    i = next;
                    continue;
                }
                '[' | '(' => depth += 1,
                ')' => {
                    if depth == 0 {
                        return Err(syntax_error(
                            &self.input,
                            "unbalanced ')' without matching '('",
                            Some(i),
                        ));
                    }
                    depth -= 1;
                }
                ']' if depth == 0 => return Ok(i),
                ']' => depth -= 1,
                _ => {}
            }
            i += 1;
        }

        let reason = if depth == 0 {
            "unbalanced '[' without matching ']'"
        } else {
            "unbalanced '(' without matching ')'"
        };
        Err(syntax_error(&self.input, reason, Some(open)))
    }

    fn read_key(&mut self) -> String {
        let start = self.position;
        while self.peek().is_some_and(is_key_char) {
            self.position += 1;
        }
        self.chars[start..self.position].iter().collect()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.position += 1;
        }
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }
}

/// Characters allowed in an unquoted key
#[inline]
fn is_key_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '.' | '[' | ']' | '(' | ')' | '\'' | '"' | '*' | ',')
}

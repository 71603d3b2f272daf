//! Quoted string handling
//!
//! Reads single- or double-quoted literals with escape sequences and splits
//! bracket contents on separators that sit outside quotes.

/// Why a quoted literal could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuoteError {
    /// Reached the end of input before the closing quote
    Unterminated,
    /// Unknown escape sequence at the given index
    InvalidEscape(usize),
}

impl QuoteError {
    pub(crate) fn reason(self) -> &'static str {
        match self {
            QuoteError::Unterminated => "unterminated string literal",
            QuoteError::InvalidEscape(_) => "invalid escape sequence",
        }
    }
}

/// Read the quoted literal starting at `chars[start]` (the opening quote)
///
/// Returns the unescaped contents and the index just past the closing quote.
pub(crate) fn read_quoted(chars: &[char], start: usize) -> Result<(String, usize), QuoteError> {
    let quote = chars[start];
    let mut value = String::new();
    let mut i = start + 1;

    while i < chars.len() {
        match chars[i] {
            c if c == quote => return Ok((value, i + 1)),
            '\\' if i + 1 < chars.len() => {
                i += 1;
                match chars[i] {
                    '"' => value.push('"'),
                    '\'' => value.push('\''),
                    '\\' => value.push('\\'),
                    '/' => value.push('/'),
                    'b' => value.push('\u{0008}'),
                    'f' => value.push('\u{000C}'),
                    'n' => value.push('\n'),
                    'r' => value.push('\r'),
                    't' => value.push('\t'),
                    'u' => {
                        let decoded = chars
                            .get(i + 1..i + 5)
                            .map(|hex| hex.iter().collect::<String>())
                            .and_then(|hex| u32::from_str_radix(&hex, 16).ok())
                            .and_then(char::from_u32)
                            .ok_or(QuoteError::InvalidEscape(i))?;
                        value.push(decoded);
                        i += 4;
                    }
                    _ => return Err(QuoteError::InvalidEscape(i)),
                }
            }
            c => value.push(c),
        }
        i += 1;
    }

    Err(QuoteError::Unterminated)
}

/// Split `text` on `separator`, ignoring separators inside quotes
///
/// Each part is returned with its char offset inside `text`.
pub(crate) fn split_unquoted(text: &str, separator: char) -> Vec<(usize, String)> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut part_start = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in text.chars().enumerate() {
        match quote {
            Some(q) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q {
                    quote = None;
                }
                current.push(c);
            }
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                current.push(c);
            }
            None if c == separator => {
                parts.push((part_start, std::mem::take(&mut current)));
                part_start = i + 1;
            }
            None => current.push(c),
        }
    }
    parts.push((part_start, current));
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn reads_escaped_quotes() {
        let input = chars(r#"'it\'s' rest"#);
        let (value, next) = read_quoted(&input, 0).expect("terminated literal");
        assert_eq!(value, "it's");
        assert_eq!(next, 7);
    }

    #[test]
    fn double_quotes_may_contain_single_quotes() {
        let input = chars(r#""J. R. R. 'Tolkien'""#);
        let (value, _) = read_quoted(&input, 0).expect("terminated literal");
        assert_eq!(value, "J. R. R. 'Tolkien'");
    }

    #[test]
    fn reports_unterminated_literal() {
        assert_eq!(read_quoted(&chars("'abc"), 0), Err(QuoteError::Unterminated));
    }

    #[test]
    fn reports_bad_escape() {
        assert_eq!(
            read_quoted(&chars(r"'a\qb'"), 0),
            Err(QuoteError::InvalidEscape(3))
        );
    }

    #[test]
    fn split_ignores_separators_in_quotes() {
        let parts = split_unquoted("'a:b':2", ':');
        assert_eq!(parts, vec![(0, "'a:b'".to_string()), (6, "2".to_string())]);

        let parts = split_unquoted("'x,y', 'z'", ',');
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1].1, " 'z'");
    }
}

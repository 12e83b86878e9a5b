//! C string literal escaping for message text.

/// Escapes text for use between the quotes of a C string literal.
///
/// Only `"`, `\`, newline, carriage return and tab are rewritten; every other
/// character, non-ASCII included, is copied as is.
pub fn escape_c_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Inverse of [`escape_c_string`].
///
/// Accepts exactly the five escapes the escaper produces.
pub fn unescape_c_string(literal: &str) -> Result<String, UnescapeError> {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.char_indices();

    while let Some((pos, c)) = chars.next() {
        match c {
            '\\' => {
                let Some((_, marker)) = chars.next() else {
                    return Err(UnescapeError::DanglingBackslash);
                };
                out.push(match marker {
                    '"' => '"',
                    '\\' => '\\',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    other => return Err(UnescapeError::UnknownEscape(other, pos)),
                });
            }
            '"' => return Err(UnescapeError::UnescapedQuote(pos)),
            _ => out.push(c),
        }
    }

    Ok(out)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnescapeError {
    #[error("unknown escape sequence `\\{0}` at byte {1}")]
    UnknownEscape(char, usize),
    #[error("unescaped `\"` at byte {0}")]
    UnescapedQuote(usize),
    #[error("literal ends with a lone backslash")]
    DanglingBackslash,
}

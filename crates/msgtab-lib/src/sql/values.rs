//! Field values of one record body.
//!
//! The walk over the lexer tokens is flat: value tokens fill the next field
//! slot, separators and `+++` markers are skipped, and `)` ends the record.

use std::borrow::Cow;

use super::lexer::{TokenKind, lex, token_text};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// One positional value of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'s> {
    /// `NULL` marker.
    Null,
    /// Quoted string with `''` pairs collapsed.
    Text(Cow<'s, str>),
    /// Integer literal, sign included.
    Integer(&'s str),
}

impl FieldValue<'_> {
    /// Textual content; integers yield their literal digits.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Null => None,
            Self::Text(text) => Some(text.as_ref()),
            Self::Integer(digits) => Some(*digits),
        }
    }

    /// Integer interpretation: integer literals, or strings whose trimmed content is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Null => None,
            Self::Integer(digits) => digits.parse().ok(),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl std::fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Text(text) => write!(f, "'{}'", text.replace('\'', "''")),
            Self::Integer(digits) => write!(f, "{digits}"),
        }
    }
}

/// Splits a record body (the text after its opening `(`) into field values.
///
/// `offset` is the byte position of `body` in the whole catalog; diagnostics
/// are reported against catalog positions.
pub fn parse_values<'s>(
    body: &'s str,
    offset: usize,
    diagnostics: &mut Diagnostics,
) -> Vec<FieldValue<'s>> {
    let mut fields = Vec::new();

    for token in lex(body) {
        let text = token_text(body, &token);
        let span = offset + token.span.start..offset + token.span.end;

        match token.kind {
            TokenKind::Null => fields.push(FieldValue::Null),
            TokenKind::Str => {
                let (value, terminated) = unquote(text);
                if !terminated {
                    diagnostics
                        .report(DiagnosticKind::UnterminatedString, span)
                        .emit();
                }
                fields.push(FieldValue::Text(value));
            }
            TokenKind::Integer => fields.push(FieldValue::Integer(text)),
            TokenKind::ParenClose => break,
            TokenKind::Comma | TokenKind::Whitespace | TokenKind::Continuation => {}
            TokenKind::Garbage => {
                diagnostics
                    .report(DiagnosticKind::UnexpectedCharacters, span)
                    .message(format!("`{}`", text.trim_end()))
                    .emit();
            }
        }
    }

    fields
}

/// Strips the quotes of a string token and collapses `''` pairs.
///
/// Returns the content and whether a closing quote was found.
fn unquote(token: &str) -> (Cow<'_, str>, bool) {
    let inner = &token[1..];
    let bytes = inner.as_bytes();
    let mut owned: Option<String> = None;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\'' {
            i += 1;
            continue;
        }
        if bytes.get(i + 1) == Some(&b'\'') {
            // keep one quote of the pair
            owned
                .get_or_insert_with(String::new)
                .push_str(&inner[start..=i]);
            i += 2;
            start = i;
            continue;
        }
        return (finish(owned, &inner[start..i]), true);
    }

    (finish(owned, &inner[start..]), false)
}

fn finish<'s>(owned: Option<String>, tail: &'s str) -> Cow<'s, str> {
    match owned {
        Some(mut text) => {
            text.push_str(tail);
            Cow::Owned(text)
        }
        None => Cow::Borrowed(tail),
    }
}

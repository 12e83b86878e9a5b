//! Lexer for SQL value lists.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive unrecognized characters into single `Garbage` tokens
//! rather than producing one error per character, so a bare word costs one diagnostic.

use logos::Logos;
use std::ops::Range;

/// Token kinds of a value list. `Garbage` has no pattern; it is produced by [`lex`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `NULL` in any letter case.
    #[regex("[Nn][Uu][Ll][Ll]")]
    Null,

    /// Single-quoted string. `''` is an escaped quote. The closing quote is
    /// optional so an unterminated string runs to the end of input.
    #[regex(r"'(?:[^']|'')*'?")]
    Str,

    #[regex(r"-?[0-9]+")]
    Integer,

    /// `+++` line-wrapping artifact left in the catalog.
    #[token("+++")]
    Continuation,

    #[token(",")]
    Comma,

    #[token(")")]
    ParenClose,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// Coalesced unrecognized characters.
    Garbage,
}

impl TokenKind {
    /// Tokens skipped between fields without taking a field slot.
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Continuation)
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes a value list into span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut garbage_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = garbage_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(TokenKind::Garbage, start..end));
                }
                tokens.push(Token::new(kind, lexer.span()));
            }
            Some(Err(())) => {
                if garbage_start.is_none() {
                    garbage_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = garbage_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, start..source.len()));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span.clone()]
}

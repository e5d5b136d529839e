//! Lexer for phone number input using logos.
//!
//! Converts the raw field value into one [`Token`] per character, in input
//! order. The accepted alphabet is exactly `0-9`, `(`, `)`, space, and `-`;
//! the first character outside it fails the whole call with [`LexError`]
//! and no partial token sequence.

mod token;

pub use token::{Token, TokenKind};

use logos::Logos;
use thiserror::Error;

/// Raw token from logos. Whitespace is significant here, so nothing is
/// skipped: a space is a token like any other.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex("[0-9]")]
    Digit,

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    #[token(" ")]
    Space,

    #[token("-")]
    Dash,
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Digit => TokenKind::Digit,
            RawToken::LeftParen => TokenKind::LeftParen,
            RawToken::RightParen => TokenKind::RightParen,
            RawToken::Space => TokenKind::Space,
            RawToken::Dash => TokenKind::Dash,
        }
    }
}

/// A character outside the phone number alphabet.
///
/// Advisory, not fatal: the caller keeps the field value as typed and
/// renders it as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid phone character `{found}` at offset {offset}")]
pub struct LexError {
    /// The offending character, in full (multi-byte input is reported as
    /// one `char`, not byte by byte).
    pub found: char,
    /// Byte offset of `found` in the input.
    pub offset: u32,
}

/// Tokenize a field value, left to right, order preserved.
///
/// Pure: no side effects, no retry. A single malformed character rejects
/// the entire input, even if a valid prefix preceded it.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::with_capacity(input.len());
    let mut lexer = RawToken::lexer(input);

    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        let offset = u32::try_from(span.start).unwrap_or(u32::MAX);
        match raw {
            Ok(kind) => {
                // Every accepted lexeme is exactly one ASCII character.
                let literal = input.as_bytes()[span.start] as char;
                tokens.push(Token::new(kind.into(), literal, offset));
            }
            Err(()) => {
                let found = input[span.start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError { found, offset });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests;

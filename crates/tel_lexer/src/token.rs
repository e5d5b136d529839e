//! Token types for phone number input.

use std::fmt;

/// The five character classes a phone number field may contain.
///
/// Closed set: anything outside it is rejected during lexing, so the
/// parser can match exhaustively without a catch-all error kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// ASCII `0`-`9`.
    Digit,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// A single space. Significant, never skipped.
    Space,
    /// `-`
    Dash,
}

impl TokenKind {
    /// Human-readable name for error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Digit => "digit",
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::Space => "space",
            TokenKind::Dash => "`-`",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single classified input character.
///
/// One token per character, in input order. `literal` is the character
/// exactly as typed; the formatter re-emits it verbatim when it matches
/// the grammar.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: char,
    /// Byte offset in the original input, for diagnostics.
    pub offset: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: char, offset: u32) -> Self {
        Token {
            kind,
            literal,
            offset,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.literal, self.offset)
    }
}

#[cfg(test)]
mod tests;

//! Token cursor for navigating the token stream.
//!
//! An explicit index into an immutable slice, consumed strictly front to
//! back. There is no backtracking and no way to rewind.

use tel_lexer::{Token, TokenKind};
use tracing::trace;

/// Cursor over a token slice.
#[derive(Debug)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current position in the token stream, as a token index.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// `true` once every token has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The front token, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// `true` if the front token exists and has the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|token| token.kind == kind)
    }

    /// Consume the front token. Returns `None` at end of input.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current()?;
        trace!(
            pos = self.pos,
            kind = %token.kind,
            literal = %token.literal,
            "advance"
        );
        self.pos += 1;
        Some(token)
    }
}

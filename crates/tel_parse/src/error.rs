//! Error and control types for the grammar.

use tel_lexer::TokenKind;
use thiserror::Error;

/// A lexically clean token in a structurally wrong place.
///
/// Advisory, not fatal: the caller keeps the field value as typed and
/// renders it as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found} at token {position}")]
pub struct SyntaxError {
    /// What the grammar would have accepted here.
    pub expected: &'static str,
    /// The kind actually at the front of the stream.
    pub found: TokenKind,
    /// Token index of the violation.
    pub position: usize,
}

/// Why the grammar stopped before completing.
///
/// Threaded through every rule as an ordinary `Result` so that running out
/// of input cannot be confused with a structural violation. Nothing here is
/// ever panicked or otherwise thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Halt {
    /// The stream ran dry on an otherwise valid path. Not an error: the
    /// accumulated rewrite becomes the partial result.
    EndOfInput,
    /// A token was present but violates the grammar's order.
    Syntax(SyntaxError),
}

//! Recursive descent formatter for phone number input.
//!
//! Consumes the token stream from [`tel_lexer`] against a three-rule
//! grammar and produces a [`FormatOutcome`]: the canonically punctuated
//! rewrite, a valid-so-far partial, or one of two rejections. Stateless
//! across calls; every keystroke re-lexes and re-parses the whole value.

mod cursor;
mod error;
mod grammar;
mod outcome;

pub use cursor::Cursor;
pub use error::SyntaxError;
pub use outcome::FormatOutcome;

use grammar::Formatter;
use tel_lexer::Token;

/// Length of the canonical rendering `(123) 456-7890`.
///
/// Callers truncate the field value to this many characters before
/// invoking the pipeline; the grammar itself terminates after ten digits
/// regardless.
pub const CANONICAL_LEN: usize = 14;

/// Format a token stream.
///
/// Never produces [`FormatOutcome::InvalidCharacter`]; that variant comes
/// from the lexing stage of [`format_value`]. An empty stream is an empty
/// partial, though callers normally short-circuit empty input themselves.
pub fn format(tokens: &[Token]) -> FormatOutcome {
    Formatter::new(tokens).run()
}

/// The whole pipeline for one keystroke: lex, then format.
///
/// Expects the caller to have truncated `value` to [`CANONICAL_LEN`]
/// characters; longer input degrades gracefully (excess tokens are
/// dropped once the grammar completes) and never panics.
pub fn format_value(value: &str) -> FormatOutcome {
    match tel_lexer::tokenize(value) {
        Ok(tokens) => format(&tokens),
        Err(error) => FormatOutcome::InvalidCharacter(error),
    }
}

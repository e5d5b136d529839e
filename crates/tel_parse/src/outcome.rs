//! Four-way outcome of one formatting pass.

use crate::SyntaxError;
use tel_lexer::LexError;

/// The single terminal output of the lex-then-format pipeline.
///
/// Exactly one variant per call. The first two carry the string to write
/// back into the field; the last two mean the field is left untouched and
/// rendered as invalid.
///
/// `PartialOk` is deliberately not an error: it is the steady state while
/// a valid prefix is still being typed. Collapsing it into the error
/// variants would flash an error on every keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// Full match; the canonical rendering `(ddd) ddd-dddd`.
    Rewritten(String),
    /// Ran out of input mid-grammar on a valid path; the rewrite so far.
    PartialOk(String),
    /// A character outside the phone number alphabet.
    InvalidCharacter(LexError),
    /// Tokens present but in a structurally wrong order.
    InvalidSyntax(SyntaxError),
}

impl FormatOutcome {
    /// `true` for the two variants that carry a string to display.
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            FormatOutcome::Rewritten(_) | FormatOutcome::PartialOk(_)
        )
    }

    /// The string to write back, if this outcome is accepted.
    pub fn value(&self) -> Option<&str> {
        match self {
            FormatOutcome::Rewritten(value) | FormatOutcome::PartialOk(value) => Some(value),
            FormatOutcome::InvalidCharacter(_) | FormatOutcome::InvalidSyntax(_) => None,
        }
    }

    /// Consume the outcome, taking the string to write back if accepted.
    pub fn into_value(self) -> Option<String> {
        match self {
            FormatOutcome::Rewritten(value) | FormatOutcome::PartialOk(value) => Some(value),
            FormatOutcome::InvalidCharacter(_) | FormatOutcome::InvalidSyntax(_) => None,
        }
    }
}

#[cfg(test)]
mod tests;

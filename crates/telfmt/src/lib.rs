//! The caller side of the formatting pipeline.
//!
//! Owns everything the core leaves to its consumer: truncating the raw
//! value to the canonical length, short-circuiting empty input, and
//! translating a [`FormatOutcome`] into what to do with the field. The
//! core never touches the field; this is the system's single I/O seam.

use tel_lexer::LexError;
use tel_parse::{format_value, FormatOutcome, SyntaxError};
use thiserror::Error;

/// What the field owner should do after one edit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAction {
    /// Write `value` back into the field and render it as valid. Covers
    /// both the complete rewrite and the valid-so-far partial; neither is
    /// an error state.
    Accept { value: String },
    /// Leave the field exactly as typed and render it as invalid.
    Reject { reason: RejectReason },
}

/// Why an input was rejected. Purely advisory to styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error(transparent)]
    InvalidCharacter(#[from] LexError),
    #[error(transparent)]
    InvalidSyntax(#[from] SyntaxError),
}

/// Decide what to do with the field after one edit event.
///
/// Truncates to [`tel_parse::CANONICAL_LEN`] characters first, then
/// short-circuits empty input before lexing: an empty field is neutral,
/// not an error.
pub fn check_field(value: &str) -> FieldAction {
    let value = clip_to_canonical_len(value);
    if value.is_empty() {
        return FieldAction::Accept {
            value: String::new(),
        };
    }

    match format_value(value) {
        FormatOutcome::Rewritten(value) | FormatOutcome::PartialOk(value) => {
            FieldAction::Accept { value }
        }
        FormatOutcome::InvalidCharacter(error) => FieldAction::Reject {
            reason: error.into(),
        },
        FormatOutcome::InvalidSyntax(error) => FieldAction::Reject {
            reason: error.into(),
        },
    }
}

/// First `CANONICAL_LEN` characters of `value`, on a char boundary.
fn clip_to_canonical_len(value: &str) -> &str {
    match value.char_indices().nth(tel_parse::CANONICAL_LEN) {
        Some((index, _)) => &value[..index],
        None => value,
    }
}

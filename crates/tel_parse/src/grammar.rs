//! The phone number grammar and its rewriter.
//!
//! ```text
//! Input  -> Front Middle Ending
//! Front  -> LeftParen Digit Digit Digit (RightParen)?
//!         | Digit Digit Digit
//! Middle -> Space Digit Digit Digit
//!         | Digit Digit Digit
//! Ending -> Dash Digit Digit Digit Digit
//!         | Digit Digit Digit Digit
//! ```
//!
//! Each rule decides once, by inspecting the front token's kind, whether
//! the user typed the optional delimiter. A typed delimiter is consumed and
//! re-emitted verbatim; a digit in its place synthesizes the canonical
//! delimiter into the output without consuming anything. This is how
//! `1234567890` becomes `(123) 456-7890` without the user typing
//! punctuation.

use crate::cursor::Cursor;
use crate::error::{Halt, SyntaxError};
use crate::outcome::FormatOutcome;
use crate::CANONICAL_LEN;
use tel_lexer::{Token, TokenKind};
use tracing::trace;

/// One formatting pass over a token stream.
///
/// Owns the output accumulator; the cursor is the only parse state.
pub(crate) struct Formatter<'a> {
    cursor: Cursor<'a>,
    output: String,
}

impl<'a> Formatter<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Formatter {
            cursor: Cursor::new(tokens),
            output: String::with_capacity(CANONICAL_LEN),
        }
    }

    /// Run the grammar to one of the three terminal outcomes.
    pub(crate) fn run(mut self) -> FormatOutcome {
        match self.input() {
            Ok(()) => {
                if !self.cursor.is_at_end() {
                    // Only reachable when the caller skipped the 14-char
                    // truncation; matches the original behavior of
                    // returning the completed number.
                    trace!(
                        position = self.cursor.position(),
                        "dropping tokens past a complete phone number"
                    );
                }
                FormatOutcome::Rewritten(self.output)
            }
            Err(Halt::EndOfInput) => FormatOutcome::PartialOk(self.output),
            Err(Halt::Syntax(error)) => FormatOutcome::InvalidSyntax(error),
        }
    }

    /// `Input -> Front Middle Ending`, strictly in sequence. A halt in an
    /// earlier rule short-circuits the later ones.
    fn input(&mut self) -> Result<(), Halt> {
        self.front()?;
        self.middle()?;
        self.ending()
    }

    /// `Front -> LeftParen Digit{3} (RightParen)? | Digit{3}`
    fn front(&mut self) -> Result<(), Halt> {
        trace!(position = self.cursor.position(), "front");
        match self.peek()? {
            TokenKind::LeftParen => {
                self.expect(TokenKind::LeftParen)?;
                self.digits(3)?;
                // RightParen stays optional even mid-stream: whatever
                // follows instead must satisfy Middle on its own.
                if self.cursor.check(TokenKind::RightParen) {
                    self.expect(TokenKind::RightParen)?;
                } else {
                    self.synthesize(')');
                }
            }
            TokenKind::Digit => {
                self.synthesize('(');
                self.digits(3)?;
                self.synthesize(')');
            }
            found => return Err(self.mismatch("`(` or digit", found)),
        }
        Ok(())
    }

    /// `Middle -> Space Digit{3} | Digit{3}`
    ///
    /// A Dash here is a structural error, not an alternate delimiter:
    /// `123-456-7890` is rejected, not repaired.
    fn middle(&mut self) -> Result<(), Halt> {
        trace!(position = self.cursor.position(), "middle");
        match self.peek()? {
            TokenKind::Space => {
                self.expect(TokenKind::Space)?;
                self.digits(3)?;
            }
            TokenKind::Digit => {
                self.synthesize(' ');
                self.digits(3)?;
            }
            found => return Err(self.mismatch("space or digit", found)),
        }
        Ok(())
    }

    /// `Ending -> Dash Digit{4} | Digit{4}`
    fn ending(&mut self) -> Result<(), Halt> {
        trace!(position = self.cursor.position(), "ending");
        match self.peek()? {
            TokenKind::Dash => {
                self.expect(TokenKind::Dash)?;
                self.digits(4)?;
            }
            TokenKind::Digit => {
                self.synthesize('-');
                self.digits(4)?;
            }
            found => return Err(self.mismatch("`-` or digit", found)),
        }
        Ok(())
    }

    /// Consume one token of the expected kind and append its literal.
    ///
    /// The end-of-input check fires immediately after the consuming step:
    /// the accumulated rewrite becomes the partial result the moment the
    /// stream runs dry, unless the output just reached the full canonical
    /// length. This ordering is what keeps `(123` from having `)`
    /// synthesized behind the caret.
    fn expect(&mut self, kind: TokenKind) -> Result<(), Halt> {
        let Some(token) = self.cursor.current() else {
            return Err(Halt::EndOfInput);
        };
        if token.kind != kind {
            return Err(self.mismatch(kind.display_name(), token.kind));
        }
        self.output.push(token.literal);
        self.cursor.advance();
        if self.cursor.is_at_end() && self.output.len() < CANONICAL_LEN {
            return Err(Halt::EndOfInput);
        }
        Ok(())
    }

    /// Consume `count` Digit tokens.
    fn digits(&mut self, count: usize) -> Result<(), Halt> {
        for _ in 0..count {
            self.expect(TokenKind::Digit)?;
        }
        Ok(())
    }

    /// Append a canonical delimiter the user did not type. Consumes nothing.
    fn synthesize(&mut self, delimiter: char) {
        self.output.push(delimiter);
    }

    /// Kind of the front token, or the end-of-input halt when a rule finds
    /// the stream already empty.
    fn peek(&self) -> Result<TokenKind, Halt> {
        self.cursor
            .current()
            .map(|token| token.kind)
            .ok_or(Halt::EndOfInput)
    }

    fn mismatch(&self, expected: &'static str, found: TokenKind) -> Halt {
        Halt::Syntax(SyntaxError {
            expected,
            found,
            position: self.cursor.position(),
        })
    }
}

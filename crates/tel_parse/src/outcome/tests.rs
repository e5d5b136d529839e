use super::FormatOutcome;
use crate::SyntaxError;
use pretty_assertions::assert_eq;
use tel_lexer::{LexError, TokenKind};

#[test]
fn accepted_variants_expose_their_value() {
    let full = FormatOutcome::Rewritten("(123) 456-7890".to_string());
    let partial = FormatOutcome::PartialOk("(123".to_string());

    assert!(full.is_accepted());
    assert!(partial.is_accepted());
    assert_eq!(full.value(), Some("(123) 456-7890"));
    assert_eq!(partial.into_value(), Some("(123".to_string()));
}

#[test]
fn rejected_variants_carry_no_value() {
    let character = FormatOutcome::InvalidCharacter(LexError {
        found: '*',
        offset: 3,
    });
    let syntax = FormatOutcome::InvalidSyntax(SyntaxError {
        expected: "digit",
        found: TokenKind::RightParen,
        position: 1,
    });

    assert!(!character.is_accepted());
    assert!(!syntax.is_accepted());
    assert_eq!(character.value(), None);
    assert_eq!(syntax.into_value(), None);
}

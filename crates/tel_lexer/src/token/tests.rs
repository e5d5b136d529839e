use super::{Token, TokenKind};
use pretty_assertions::assert_eq;

#[test]
fn display_names_are_stable() {
    assert_eq!(TokenKind::Digit.to_string(), "digit");
    assert_eq!(TokenKind::LeftParen.to_string(), "`(`");
    assert_eq!(TokenKind::RightParen.to_string(), "`)`");
    assert_eq!(TokenKind::Space.to_string(), "space");
    assert_eq!(TokenKind::Dash.to_string(), "`-`");
}

#[test]
fn debug_shows_kind_literal_and_offset() {
    let token = Token::new(TokenKind::Digit, '7', 3);
    assert_eq!(format!("{token:?}"), "Digit('7') @ 3");
}

#[test]
fn tokens_compare_by_all_fields() {
    let a = Token::new(TokenKind::Dash, '-', 4);
    let b = Token::new(TokenKind::Dash, '-', 4);
    let c = Token::new(TokenKind::Dash, '-', 5);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

use super::{tokenize, LexError, Token, TokenKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(input: &str) -> Vec<TokenKind> {
    match tokenize(input) {
        Ok(tokens) => tokens.into_iter().map(|t| t.kind).collect(),
        Err(error) => panic!("expected tokens for {input:?}, got {error}"),
    }
}

#[test]
fn classifies_every_accepted_character() {
    use TokenKind::{Dash, Digit, LeftParen, RightParen, Space};
    assert_eq!(
        kinds("(123) 456-7890"),
        vec![
            LeftParen, Digit, Digit, Digit, RightParen, Space, Digit, Digit, Digit, Dash, Digit,
            Digit, Digit, Digit,
        ]
    );
}

#[test]
fn preserves_literals_and_offsets_in_order() {
    let tokens = match tokenize("9-0") {
        Ok(tokens) => tokens,
        Err(error) => panic!("unexpected lex error: {error}"),
    };
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Digit, '9', 0),
            Token::new(TokenKind::Dash, '-', 1),
            Token::new(TokenKind::Digit, '0', 2),
        ]
    );
}

#[test]
fn empty_input_yields_no_tokens() {
    assert_eq!(tokenize(""), Ok(vec![]));
}

#[test]
fn rejects_the_first_foreign_character() {
    assert_eq!(
        tokenize("(12a"),
        Err(LexError {
            found: 'a',
            offset: 3
        })
    );
}

#[test]
fn rejects_even_with_a_valid_prefix_present() {
    // "123*456" has a perfectly good prefix; it is still rejected whole.
    assert_eq!(
        tokenize("123*456"),
        Err(LexError {
            found: '*',
            offset: 3
        })
    );
}

#[test]
fn reports_a_multibyte_character_as_one_char() {
    assert_eq!(
        tokenize("12é"),
        Err(LexError {
            found: 'é',
            offset: 2
        })
    );
}

#[test]
fn tab_is_not_a_space() {
    assert_eq!(
        tokenize("\t"),
        Err(LexError {
            found: '\t',
            offset: 0
        })
    );
}

proptest! {
    #[test]
    fn valid_alphabet_always_tokenizes(input in "[0-9() -]{0,20}") {
        let tokens = tokenize(&input);
        prop_assert!(tokens.is_ok());
        prop_assert_eq!(tokens.map(|t| t.len()), Ok(input.len()));
    }

    #[test]
    fn one_foreign_character_rejects_anywhere(
        prefix in "[0-9() -]{0,6}",
        bad in "[a-zA-Z*#+.@!]",
        suffix in "[0-9() -]{0,6}",
    ) {
        let input = format!("{prefix}{bad}{suffix}");
        let expected_char = bad.chars().next();
        let result = tokenize(&input);
        prop_assert_eq!(
            result.map_err(|e| (Some(e.found), e.offset as usize)),
            Err((expected_char, prefix.len()))
        );
    }
}

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

// === Punctuation and keywords ===

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("   \n\t"), vec![TokenKind::Eof]);
}

#[test]
fn array_with_splat() {
    assert_eq!(
        kinds("[1, *rest]"),
        vec![
            TokenKind::LBracket,
            TokenKind::Int(1),
            TokenKind::Comma,
            TokenKind::Star,
            TokenKind::Ident(Name::new("rest")),
            TokenKind::RBracket,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_win_over_identifiers() {
    assert_eq!(
        kinds("true false nil _"),
        vec![
            TokenKind::True,
            TokenKind::False,
            TokenKind::Nil,
            TokenKind::Underscore,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keyword_prefixes_are_identifiers() {
    assert_eq!(
        kinds("truthy nils _x"),
        vec![
            TokenKind::Ident(Name::new("truthy")),
            TokenKind::Ident(Name::new("nils")),
            TokenKind::Ident(Name::new("_x")),
            TokenKind::Eof,
        ]
    );
}

// === Names ===

#[test]
fn type_names_include_namespaces() {
    assert_eq!(
        kinds("Geo::Point(x)"),
        vec![
            TokenKind::TypeName(Name::new("Geo::Point")),
            TokenKind::LParen,
            TokenKind::Ident(Name::new("x")),
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn typed_identifier_tokens() {
    assert_eq!(
        kinds("n : Integer"),
        vec![
            TokenKind::Ident(Name::new("n")),
            TokenKind::Colon,
            TokenKind::TypeName(Name::new("Integer")),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn symbol_colon_is_adjacent_to_name() {
    let tokens = lex(":ok").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Colon);
    assert_eq!(tokens[1].kind, TokenKind::Ident(Name::new("ok")));
    assert!(tokens[0].span.is_adjacent_to(tokens[1].span));
}

// === Numbers ===

#[test]
fn numbers() {
    assert_eq!(
        kinds("42 1_000 3.25 1.5e3"),
        vec![
            TokenKind::Int(42),
            TokenKind::Int(1000),
            TokenKind::Float(3.25),
            TokenKind::Float(1500.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn negative_numbers_lex_as_minus_then_number() {
    assert_eq!(
        kinds("-7"),
        vec![TokenKind::Minus, TokenKind::Int(7), TokenKind::Eof]
    );
}

#[test]
fn ranges_do_not_lex_as_floats() {
    assert_eq!(
        kinds("1..5 1...5"),
        vec![
            TokenKind::Int(1),
            TokenKind::DotDot,
            TokenKind::Int(5),
            TokenKind::Int(1),
            TokenKind::DotDotDot,
            TokenKind::Int(5),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn integer_overflow_is_an_error() {
    let err = lex("99999999999999999999").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::NumberTooLarge);
}

// === Strings ===

#[test]
fn strings_keep_raw_escapes() {
    assert_eq!(
        kinds(r#""a\nb" 'it\'s'"#),
        vec![
            TokenKind::Str(r"a\nb".to_string(), Quote::Double),
            TokenKind::Str(r"it\'s".to_string(), Quote::Single),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unterminated_string() {
    let err = lex(r#"["abc]"#).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span.start, 1);
}

#[test]
fn unexpected_character() {
    let err = lex("[1 # 2]").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('#'));
    assert_eq!(err.span, Span::new(3, 4));
    assert_eq!(err.to_string(), "unexpected character `#`");
}

// === Spans ===

#[test]
fn eof_span_sits_at_end_of_source() {
    let tokens = lex("[ ]  ").unwrap();
    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.span, Span::point(5));
}

mod proptest_lexer {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn identifiers_roundtrip(ident in "[a-z][a-z0-9_]{0,12}") {
            prop_assume!(!matches!(ident.as_str(), "true" | "false" | "nil"));
            let tokens = lex(&ident).unwrap();
            prop_assert_eq!(&tokens[0].kind, &TokenKind::Ident(Name::new(&ident)));
            prop_assert_eq!(tokens.len(), 2);
        }

        #[test]
        fn integers_roundtrip(n in 0u64..=u64::MAX) {
            let tokens = lex(&n.to_string()).unwrap();
            prop_assert_eq!(&tokens[0].kind, &TokenKind::Int(n));
        }
    }
}

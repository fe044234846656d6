//! Lexer for pattern source text, built on logos.
//!
//! Produces a flat token list terminated by [`TokenKind::Eof`]. Whitespace is
//! skipped; the parser recovers adjacency (needed for `:symbol`) from spans.
//!
//! Signs are not part of numeric tokens: `-1` lexes as `Minus`, `Int(1)` and
//! the parser folds the sign, so `-9223372036854775808` stays representable.

use logos::Logos;
use shape_ir::{Name, Quote, Span};
use std::fmt;

/// Raw token from logos (before conversion).
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    // === Keywords ===
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("nil")]
    Nil,
    #[token("_", priority = 3)]
    Underscore,

    // === Symbols ===
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token("*")]
    Star,
    #[token("@")]
    At,
    #[token(":")]
    Colon,
    #[token("...")]
    DotDotDot,
    #[token("..")]
    DotDot,
    #[token("-")]
    Minus,

    // === Literals ===

    // Integer with underscores
    #[regex(r"[0-9][0-9_]*", |lex| lex.slice().replace('_', "").parse::<u64>().ok())]
    Int(u64),

    // Float with optional exponent
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?", |lex| {
        lex.slice().replace('_', "").parse::<f64>().ok()
    })]
    Float(f64),

    #[regex(r#""([^"\\]|\\.)*""#)]
    DoubleQuoted,

    #[regex(r"'([^'\\]|\\.)*'")]
    SingleQuoted,

    // === Names ===
    #[regex(r"[a-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[A-Z][A-Za-z0-9_]*(::[A-Z][A-Za-z0-9_]*)*")]
    TypeName,
}

/// Token kinds seen by the parser.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    True,
    False,
    Nil,
    Underscore,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Comma,
    Star,
    At,
    Colon,
    DotDot,
    DotDotDot,
    Minus,
    Int(u64),
    Float(f64),
    /// String contents between the quotes, escapes not yet decoded.
    Str(String, Quote),
    Ident(Name),
    TypeName(Name),
    Eof,
}

impl TokenKind {
    /// Human-readable description for "expected X, found Y" messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::True => "`true`".to_string(),
            TokenKind::False => "`false`".to_string(),
            TokenKind::Nil => "`nil`".to_string(),
            TokenKind::Underscore => "`_`".to_string(),
            TokenKind::LBracket => "`[`".to_string(),
            TokenKind::RBracket => "`]`".to_string(),
            TokenKind::LParen => "`(`".to_string(),
            TokenKind::RParen => "`)`".to_string(),
            TokenKind::Comma => "`,`".to_string(),
            TokenKind::Star => "`*`".to_string(),
            TokenKind::At => "`@`".to_string(),
            TokenKind::Colon => "`:`".to_string(),
            TokenKind::DotDot => "`..`".to_string(),
            TokenKind::DotDotDot => "`...`".to_string(),
            TokenKind::Minus => "`-`".to_string(),
            TokenKind::Int(n) => format!("integer `{n}`"),
            TokenKind::Float(f) => format!("float `{f}`"),
            TokenKind::Str(..) => "string literal".to_string(),
            TokenKind::Ident(name) => format!("identifier `{name}`"),
            TokenKind::TypeName(name) => format!("type name `{name}`"),
            TokenKind::Eof => "end of pattern".to_string(),
        }
    }
}

/// A token with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// What went wrong while tokenizing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that starts no token.
    UnexpectedCharacter(char),
    /// A string literal without its closing quote.
    UnterminatedString,
    /// An integer that does not fit in 64 bits.
    NumberTooLarge,
}

/// Tokenization failure with its location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LexErrorKind::UnexpectedCharacter(c) => write!(f, "unexpected character `{c}`"),
            LexErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            LexErrorKind::NumberTooLarge => write!(f, "integer literal too large"),
        }
    }
}

/// Tokenize pattern source text.
///
/// On success the returned list is never empty: its last token is `Eof`,
/// spanning the end of the source.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut raw = RawToken::lexer(source);

    while let Some(result) = raw.next() {
        let span = Span::from_range(raw.span());
        let slice = raw.slice();
        let Ok(token) = result else {
            return Err(LexError {
                kind: classify_error(slice),
                span,
            });
        };
        tokens.push(Token {
            kind: convert(token, slice),
            span,
        });
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::from_range(source.len()..source.len()),
    });
    Ok(tokens)
}

fn convert(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Nil => TokenKind::Nil,
        RawToken::Underscore => TokenKind::Underscore,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Star => TokenKind::Star,
        RawToken::At => TokenKind::At,
        RawToken::Colon => TokenKind::Colon,
        RawToken::DotDot => TokenKind::DotDot,
        RawToken::DotDotDot => TokenKind::DotDotDot,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Float(f) => TokenKind::Float(f),
        RawToken::DoubleQuoted => TokenKind::Str(strip_quotes(slice), Quote::Double),
        RawToken::SingleQuoted => TokenKind::Str(strip_quotes(slice), Quote::Single),
        RawToken::Ident => TokenKind::Ident(Name::new(slice)),
        RawToken::TypeName => TokenKind::TypeName(Name::new(slice)),
    }
}

/// Both quote characters are one byte, so slicing by byte is safe.
fn strip_quotes(slice: &str) -> String {
    slice[1..slice.len() - 1].to_string()
}

fn classify_error(slice: &str) -> LexErrorKind {
    match slice.chars().next() {
        Some('"' | '\'') => LexErrorKind::UnterminatedString,
        Some(c) if c.is_ascii_digit() => LexErrorKind::NumberTooLarge,
        Some(c) => LexErrorKind::UnexpectedCharacter(c),
        None => LexErrorKind::UnexpectedCharacter('\0'),
    }
}

#[cfg(test)]
mod tests;

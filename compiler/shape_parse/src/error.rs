//! Parse error type.

use shape_ir::Span;
use shape_lexer::{LexError, TokenKind};
use thiserror::Error;

/// A pattern the grammar rejects.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    /// Where the parser gave up.
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
        }
    }

    /// `expected <what>, found <token>`.
    #[cold]
    pub(crate) fn expected(what: &str, found: &TokenKind, span: Span) -> Self {
        ParseError::new(format!("expected {what}, found {}", found.describe()), span)
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::new(err.to_string(), err.span)
    }
}

//! Parser for pattern source text.
//!
//! Recursive descent over the token list from `shape_lexer`, producing a
//! [`PatternNode`] tree. Parsing is all-or-nothing: the first problem is
//! reported as a [`ParseError`] carrying the byte span where it occurred.
//! There is no recovery; a pattern is a single short expression.
//!
//! Splat placement is a grammar rule, not a compiler check: `*` and `*name`
//! may only close an array or argument list.

mod cursor;
mod error;
mod grammar;

use cursor::Cursor;
use shape_ir::PatternNode;
use shape_lexer::Token;
use tracing::debug;

pub use error::ParseError;

/// Parse pattern source text into a syntax tree.
pub fn parse(source: &str) -> Result<PatternNode, ParseError> {
    let tokens = shape_lexer::lex(source)?;
    debug!(source, tokens = tokens.len(), "parsing pattern");
    let mut parser = Parser::new(&tokens);
    let node = parser.parse_pattern()?;
    parser.cursor.expect_eof()?;
    Ok(node)
}

/// Parser state: a cursor over the token list.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }
}

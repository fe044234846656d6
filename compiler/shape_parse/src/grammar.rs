//! Pattern productions.
//!
//! ```text
//! pattern    := array | literal | range | "_" binder_tail | ident binder_tail
//!             | TypeName [ "(" seq ")" ]
//! binder_tail:= [ ":" TypeName | "@" pattern ]
//! array      := "[" seq "]"
//! seq        := ε | splat | pattern ("," pattern)* ["," splat]
//! splat      := "*" [ident | "_"]
//! literal    := ["-"] int | ["-"] float | string | ":" name | true | false | nil
//! range      := ["-"] int (".." | "...") ["-"] int
//! ```

use crate::{ParseError, Parser};
use shape_ir::{Name, PatternKind, PatternNode, Span, Splat};
use shape_lexer::TokenKind;
use shape_stack::ensure_sufficient_stack;

impl Parser<'_> {
    /// Parse one pattern.
    pub(crate) fn parse_pattern(&mut self) -> Result<PatternNode, ParseError> {
        ensure_sufficient_stack(|| self.parse_pattern_inner())
    }

    fn parse_pattern_inner(&mut self) -> Result<PatternNode, ParseError> {
        let start = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::LBracket => self.parse_array(),
            TokenKind::Int(_) | TokenKind::Float(_) | TokenKind::Minus => self.parse_number(),
            TokenKind::Str(raw, quote) => {
                self.cursor.advance();
                Ok(PatternNode::new(
                    PatternKind::Str {
                        raw: raw.clone(),
                        quote: *quote,
                    },
                    start,
                ))
            }
            TokenKind::Colon => self.parse_symbol(),
            TokenKind::True => Ok(self.keyword(PatternKind::Bool(true))),
            TokenKind::False => Ok(self.keyword(PatternKind::Bool(false))),
            TokenKind::Nil => Ok(self.keyword(PatternKind::Nil)),
            TokenKind::Underscore => {
                self.cursor.advance();
                self.parse_binder_tail(None, start)
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                self.parse_binder_tail(Some(name.clone()), start)
            }
            TokenKind::TypeName(name) => {
                self.cursor.advance();
                if self.cursor.check(&TokenKind::LParen) {
                    self.parse_extractor(name.clone(), start)
                } else {
                    Ok(PatternNode::new(PatternKind::Type(name.clone()), start))
                }
            }
            TokenKind::Star => Err(ParseError::new(
                "a splat is only allowed as the last element of an array or argument list",
                start,
            )),
            other => Err(ParseError::expected("a pattern", other, start)),
        }
    }

    fn keyword(&mut self, kind: PatternKind) -> PatternNode {
        let span = self.cursor.advance().span;
        PatternNode::new(kind, span)
    }

    /// After `name` or `_`: optional `: Type` or `@ pattern`.
    fn parse_binder_tail(
        &mut self,
        binder: Option<Name>,
        start: Span,
    ) -> Result<PatternNode, ParseError> {
        if self.cursor.check(&TokenKind::Colon) {
            self.cursor.advance();
            let ty_token = self
                .cursor
                .expect(&TokenKind::TypeName(Name::new("")), "a type name after `:`")?;
            let TokenKind::TypeName(ty) = &ty_token.kind else {
                return Err(ParseError::new("expected a type name", ty_token.span));
            };
            return Ok(PatternNode::new(
                PatternKind::Typed {
                    binder,
                    ty: ty.clone(),
                    ty_span: ty_token.span,
                },
                start.merge(ty_token.span),
            ));
        }

        if self.cursor.check(&TokenKind::At) {
            self.cursor.advance();
            let pattern = self.parse_pattern()?;
            let span = start.merge(pattern.span);
            return Ok(PatternNode::new(
                PatternKind::Identified {
                    binder,
                    pattern: Box::new(pattern),
                },
                span,
            ));
        }

        let kind = match binder {
            Some(name) => PatternKind::Identifier(name),
            None => PatternKind::Wildcard,
        };
        Ok(PatternNode::new(kind, start))
    }

    fn parse_array(&mut self) -> Result<PatternNode, ParseError> {
        let start = self.cursor.advance().span;
        let (elements, splat) = self.parse_sequence(&TokenKind::RBracket, "`]`")?;
        let span = start.merge(self.cursor.previous_span());
        Ok(PatternNode::new(PatternKind::Array { elements, splat }, span))
    }

    fn parse_extractor(&mut self, name: Name, name_span: Span) -> Result<PatternNode, ParseError> {
        self.cursor.advance();
        let (args, splat) = self.parse_sequence(&TokenKind::RParen, "`)`")?;
        let span = name_span.merge(self.cursor.previous_span());
        Ok(PatternNode::new(
            PatternKind::Extractor {
                name,
                name_span,
                args,
                splat,
            },
            span,
        ))
    }

    /// Comma-separated elements up to and including `close`.
    ///
    /// The opening delimiter has already been consumed. A splat must be
    /// followed directly by `close`; a trailing comma is rejected.
    fn parse_sequence(
        &mut self,
        close: &TokenKind,
        close_desc: &str,
    ) -> Result<(Vec<PatternNode>, Option<Splat>), ParseError> {
        let mut elements = Vec::new();

        if self.cursor.check(close) {
            self.cursor.advance();
            return Ok((elements, None));
        }

        loop {
            if self.cursor.check(&TokenKind::Star) {
                let splat = self.parse_splat();
                if self.cursor.check(&TokenKind::Comma) {
                    return Err(ParseError::new(
                        "a splat must be the last element",
                        self.cursor.current_span(),
                    ));
                }
                self.cursor.expect(close, close_desc)?;
                return Ok((elements, Some(splat)));
            }

            elements.push(self.parse_pattern()?);

            if self.cursor.check(&TokenKind::Comma) {
                self.cursor.advance();
                if self.cursor.check(close) {
                    return Err(ParseError::expected(
                        "a pattern after `,`",
                        self.cursor.current_kind(),
                        self.cursor.current_span(),
                    ));
                }
                continue;
            }

            let what = format!("`,` or {close_desc}");
            self.cursor.expect(close, &what)?;
            return Ok((elements, None));
        }
    }

    /// `*`, `*_` or `*name`. The current token is `*`.
    fn parse_splat(&mut self) -> Splat {
        let star = self.cursor.advance().span;
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                let span = star.merge(self.cursor.advance().span);
                Splat {
                    name: Some(name.clone()),
                    span,
                }
            }
            TokenKind::Underscore => {
                let span = star.merge(self.cursor.advance().span);
                Splat { name: None, span }
            }
            _ => Splat {
                name: None,
                span: star,
            },
        }
    }

    /// `:name`; the name must follow the colon without whitespace.
    fn parse_symbol(&mut self) -> Result<PatternNode, ParseError> {
        let colon = self.cursor.current_span();
        let text = match self.cursor.peek_kind() {
            TokenKind::Ident(name) | TokenKind::TypeName(name) => name.clone(),
            TokenKind::True => Name::new("true"),
            TokenKind::False => Name::new("false"),
            TokenKind::Nil => Name::new("nil"),
            TokenKind::Underscore => Name::new("_"),
            other => return Err(ParseError::expected("a symbol name after `:`", other, colon)),
        };
        self.cursor.advance();
        let name_span = self.cursor.advance().span;
        if !colon.is_adjacent_to(name_span) {
            return Err(ParseError::new(
                "unexpected whitespace between `:` and symbol name",
                Span::new(colon.end, name_span.start),
            ));
        }
        Ok(PatternNode::new(
            PatternKind::Symbol(text),
            colon.merge(name_span),
        ))
    }

    /// Signed integer, signed float, or integer range.
    fn parse_number(&mut self) -> Result<PatternNode, ParseError> {
        let start = self.cursor.current_span();
        let number = self.parse_signed()?;
        let span = start.merge(self.cursor.previous_span());

        let exclusive = match self.cursor.current_kind() {
            TokenKind::DotDot => false,
            TokenKind::DotDotDot => true,
            _ => {
                let kind = match number {
                    Number::Int(n) => PatternKind::Int(n),
                    Number::Float(f) => PatternKind::Float(f),
                };
                return Ok(PatternNode::new(kind, span));
            }
        };

        let Number::Int(range_start) = number else {
            return Err(ParseError::new("range bounds must be integers", span));
        };
        self.cursor.advance();
        let end_span = self.cursor.current_span();
        let Number::Int(range_end) = self.parse_signed()? else {
            return Err(ParseError::new(
                "range bounds must be integers",
                end_span.merge(self.cursor.previous_span()),
            ));
        };
        Ok(PatternNode::new(
            PatternKind::Range {
                start: range_start,
                end: range_end,
                exclusive,
            },
            start.merge(self.cursor.previous_span()),
        ))
    }

    fn parse_signed(&mut self) -> Result<Number, ParseError> {
        let start = self.cursor.current_span();
        let negative = if self.cursor.check(&TokenKind::Minus) {
            self.cursor.advance();
            true
        } else {
            false
        };

        match *self.cursor.current_kind() {
            TokenKind::Int(n) => {
                let span = start.merge(self.cursor.advance().span);
                let value = if negative {
                    -i128::from(n)
                } else {
                    i128::from(n)
                };
                i64::try_from(value)
                    .map(Number::Int)
                    .map_err(|_| ParseError::new("integer literal too large", span))
            }
            TokenKind::Float(f) => {
                self.cursor.advance();
                Ok(Number::Float(if negative { -f } else { f }))
            }
            ref other => Err(ParseError::expected(
                "a number",
                other,
                self.cursor.current_span(),
            )),
        }
    }
}

enum Number {
    Int(i64),
    Float(f64),
}

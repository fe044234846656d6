//! Pattern syntax tree to matcher tree.
//!
//! One exhaustive `match` over [`PatternKind`]. Sub-patterns compile left
//! to right, so the first unresolvable name in the text is the one
//! reported. Type and extractor names are resolved here, once; the
//! resulting matcher never consults the registry again.

mod escape;

use crate::errors::{Capability, NameResolutionError};
use crate::extractor::ResolvedExtractor;
use crate::literal::{Literal, RangeLiteral, TypeTest};
use crate::matcher::Matcher;
use crate::registry::Registry;
use escape::{unescape_double, unescape_single};
use shape_ir::{Name, PatternKind, PatternNode, Quote, Span, Splat};
use shape_stack::ensure_sufficient_stack;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, trace};

/// Compile `node` against `registry`.
///
/// # Errors
///
/// Returns [`NameResolutionError`] for a type or extractor name the
/// registry does not provide in the role the pattern uses it in.
pub fn compile(node: &PatternNode, registry: &Registry) -> Result<Matcher, NameResolutionError> {
    debug!(kind = node.kind.describe(), "compiling pattern");
    Compiler { registry }.compile(node)
}

/// Decode the body of a quoted string literal, escapes and all.
pub fn decode_string(raw: &str, quote: Quote) -> Cow<'_, str> {
    match quote {
        Quote::Double => unescape_double(raw),
        Quote::Single => unescape_single(raw),
    }
}

struct Compiler<'r> {
    registry: &'r Registry,
}

impl Compiler<'_> {
    fn compile(&self, node: &PatternNode) -> Result<Matcher, NameResolutionError> {
        ensure_sufficient_stack(|| self.compile_node(node))
    }

    fn compile_node(&self, node: &PatternNode) -> Result<Matcher, NameResolutionError> {
        trace!(
            kind = node.kind.describe(),
            span_start = node.span.start,
            span_end = node.span.end,
            "compile node"
        );
        let matcher = match &node.kind {
            PatternKind::Array { elements, splat } => {
                self.compile_sequence(elements, splat.as_ref())?
            }

            PatternKind::Int(n) => Matcher::Value(Literal::Int(*n)),
            PatternKind::Float(n) => Matcher::Value(Literal::Float(*n)),
            PatternKind::Str { raw, quote } => {
                Matcher::String(Arc::from(decode_string(raw, *quote).as_ref()))
            }
            PatternKind::Symbol(name) => Matcher::Value(Literal::Symbol(name.clone())),
            PatternKind::Bool(b) => Matcher::Value(Literal::Bool(*b)),
            PatternKind::Nil => Matcher::Value(Literal::Nil),
            PatternKind::Range {
                start,
                end,
                exclusive,
            } => Matcher::Value(Literal::Range(RangeLiteral {
                start: *start,
                end: *end,
                exclusive: *exclusive,
            })),
            PatternKind::Type(name) => {
                Matcher::Value(Literal::Type(self.resolve_type(name, node.span)?))
            }

            PatternKind::Wildcard => Matcher::Any,
            PatternKind::Identifier(name) => Matcher::Identifier(name.clone()),
            PatternKind::Typed {
                binder,
                ty,
                ty_span,
            } => {
                let test = Matcher::Value(Literal::Type(self.resolve_type(ty, *ty_span)?));
                match binder {
                    Some(name) => test.and(Matcher::Identifier(name.clone())),
                    None => test,
                }
            }
            PatternKind::Identified { binder, pattern } => {
                let inner = self.compile(pattern)?;
                match binder {
                    // Capture on the left keeps bindings in textual order.
                    Some(name) => Matcher::Identifier(name.clone()).and(inner),
                    None => inner,
                }
            }

            PatternKind::Extractor {
                name,
                name_span,
                args,
                splat,
            } => {
                let extractor = self.resolve_extractor(name, *name_span)?;
                let args = self.compile_sequence(args, splat.as_ref())?;
                Matcher::Extractor {
                    name: name.clone(),
                    extractor,
                    args: Box::new(args),
                }
            }
        };
        Ok(matcher)
    }

    /// Right fold of `elements` onto the splat, or onto `EmptyList`.
    fn compile_sequence(
        &self,
        elements: &[PatternNode],
        splat: Option<&Splat>,
    ) -> Result<Matcher, NameResolutionError> {
        let end = match splat {
            None => Matcher::EmptyList,
            Some(Splat { name: None, .. }) => Matcher::AnonymousSplat,
            Some(Splat {
                name: Some(name), ..
            }) => Matcher::NamedSplat(name.clone()),
        };
        let heads = elements
            .iter()
            .map(|element| self.compile(element))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(heads.into_iter().rev().fold(end, |tail, head| Matcher::Array {
            head: Box::new(head),
            tail: Box::new(tail),
        }))
    }

    fn resolve_type(&self, name: &Name, span: Span) -> Result<TypeTest, NameResolutionError> {
        match self.registry.resolve_type(name.as_str()) {
            Some(test) => {
                debug!(name = %name, test = %test, "resolved type");
                Ok(test.clone())
            }
            None => Err(unresolved(name, Capability::Type, span)),
        }
    }

    fn resolve_extractor(
        &self,
        name: &Name,
        span: Span,
    ) -> Result<ResolvedExtractor, NameResolutionError> {
        match self.registry.resolve_extractor(name.as_str()) {
            Some(extractor) => {
                debug!(name = %name, "resolved extractor");
                Ok(extractor.clone())
            }
            None => Err(unresolved(name, Capability::Extractor, span)),
        }
    }
}

fn unresolved(name: &Name, expected: Capability, span: Span) -> NameResolutionError {
    debug!(name = %name, expected = %expected, "unresolved name");
    NameResolutionError {
        name: name.clone(),
        expected,
        span,
    }
}

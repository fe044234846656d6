//! Pattern syntax tree.
//!
//! One tagged union covers every construct of the pattern grammar. The
//! compiler in `shape_match` is a single exhaustive `match` over
//! [`PatternKind`], so adding a construct here is a compile error there
//! until it is handled.
//!
//! Literal text is kept as written where decoding is the compiler's job:
//! string contents still carry their escape sequences.

use crate::{Name, Span};
use shape_stack::ensure_sufficient_stack;
use std::mem;

/// A pattern node with its location in the source text.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternNode {
    pub kind: PatternKind,
    pub span: Span,
}

impl PatternNode {
    #[inline]
    pub fn new(kind: PatternKind, span: Span) -> Self {
        PatternNode { kind, span }
    }
}

/// Quote style of a string literal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Quote {
    /// `'...'`: only `\\` and `\'` are escapes.
    Single,
    /// `"..."`: the full escape set.
    Double,
}

/// Trailing `*` or `*name` of an array or argument list.
#[derive(Clone, Debug, PartialEq)]
pub struct Splat {
    /// `None` for an anonymous `*`.
    pub name: Option<Name>,
    pub span: Span,
}

/// Pattern node kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum PatternKind {
    /// `[]`, `[a, b]`, `[a, *rest]`, `[*]`.
    ///
    /// The grammar guarantees the splat, if any, is the last element.
    Array {
        elements: Vec<PatternNode>,
        splat: Option<Splat>,
    },

    /// Integer literal: `42`, `-7`, `1_000`.
    Int(i64),
    /// Float literal: `3.14`, `-0.5`, `1.0e3`.
    Float(f64),
    /// String literal, contents as written between the quotes.
    Str { raw: String, quote: Quote },
    /// Symbol literal: `:ok`.
    Symbol(Name),
    /// `true` / `false`.
    Bool(bool),
    /// `nil`.
    Nil,
    /// Integer range: `1..5` (inclusive) or `1...5` (exclusive end).
    Range { start: i64, end: i64, exclusive: bool },
    /// Bare type name used as a value test: `Integer`.
    Type(Name),

    /// `_`
    Wildcard,
    /// `name`
    Identifier(Name),
    /// `name : Type` or `_ : Type`.
    Typed {
        /// `None` for `_`.
        binder: Option<Name>,
        ty: Name,
        ty_span: Span,
    },
    /// `name @ pattern` or `_ @ pattern`.
    Identified {
        /// `None` for `_`.
        binder: Option<Name>,
        pattern: Box<PatternNode>,
    },
    /// `Name(args...)`; arguments follow array rules, splat included.
    Extractor {
        name: Name,
        name_span: Span,
        args: Vec<PatternNode>,
        splat: Option<Splat>,
    },
}

/// Children are moved out and dropped behind the stack guard, so tearing
/// down a deeply nested tree cannot overflow the caller's stack.
impl Drop for PatternKind {
    fn drop(&mut self) {
        match self {
            PatternKind::Array {
                elements: children, ..
            }
            | PatternKind::Extractor { args: children, .. } => {
                if !children.is_empty() {
                    let children = mem::take(children);
                    ensure_sufficient_stack(move || drop(children));
                }
            }
            PatternKind::Identified { pattern, .. } => {
                let inner = mem::replace(&mut pattern.kind, PatternKind::Wildcard);
                ensure_sufficient_stack(move || drop(inner));
            }
            _ => {}
        }
    }
}

impl PatternKind {
    /// Short description of the construct, for logs and error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            PatternKind::Array { .. } => "array",
            PatternKind::Int(_) => "integer",
            PatternKind::Float(_) => "float",
            PatternKind::Str { .. } => "string",
            PatternKind::Symbol(_) => "symbol",
            PatternKind::Bool(_) => "boolean",
            PatternKind::Nil => "nil",
            PatternKind::Range { .. } => "range",
            PatternKind::Type(_) => "type",
            PatternKind::Wildcard => "wildcard",
            PatternKind::Identifier(_) => "identifier",
            PatternKind::Typed { .. } => "typed identifier",
            PatternKind::Identified { .. } => "identified pattern",
            PatternKind::Extractor { .. } => "extractor",
        }
    }
}

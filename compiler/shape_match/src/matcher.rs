//! The compiled matcher tree.
//!
//! Array patterns are a right fold: `[a, b, *rest]` is
//! `Array(a, Array(b, NamedSplat(rest)))` and `[a]` is
//! `Array(a, EmptyList)`. Each element is tested exactly once, left to
//! right, with no backtracking.
//!
//! The remainder of a sequence travels down the fold as a borrowed slice
//! ([`Subject::Seq`]); it only becomes a new list value when a capture (or
//! another non-sequence matcher) needs to own it.

use crate::bindings::Bindings;
use crate::extractor::ResolvedExtractor;
use crate::literal::Literal;
use crate::value::Value;
use shape_ir::Name;
use shape_stack::ensure_sufficient_stack;
use std::borrow::Cow;
use std::fmt;
use std::mem;
use std::sync::Arc;

/// A node of a compiled pattern.
#[derive(Clone, Debug)]
pub enum Matcher {
    /// `_`: matches anything, binds nothing.
    Any,
    /// Literal, range or type test.
    Value(Literal),
    /// Quoted string literal, compared by content.
    String(Arc<str>),
    /// `name`: matches anything and binds it.
    Identifier(Name),
    /// End of an array pattern without a splat.
    EmptyList,
    /// A non-empty sequence whose first element matches `head` and whose
    /// remainder matches `tail`.
    Array {
        head: Box<Matcher>,
        tail: Box<Matcher>,
    },
    /// Trailing `*`.
    AnonymousSplat,
    /// Trailing `*name`: binds the remaining elements as a list.
    NamedSplat(Name),
    /// `Name(args...)`: `args` runs against the extracted sub-values.
    Extractor {
        name: Name,
        extractor: ResolvedExtractor,
        args: Box<Matcher>,
    },
    /// Both sides match; left bindings come first.
    And(Box<Matcher>, Box<Matcher>),
}

/// Boxed children are swapped for `Any` and dropped behind the stack guard.
impl Drop for Matcher {
    fn drop(&mut self) {
        match self {
            Matcher::Array { head, tail } | Matcher::And(head, tail) => {
                let head = mem::replace(&mut **head, Matcher::Any);
                let tail = mem::replace(&mut **tail, Matcher::Any);
                ensure_sufficient_stack(move || drop((head, tail)));
            }
            Matcher::Extractor { args, .. } => {
                let args = mem::replace(&mut **args, Matcher::Any);
                ensure_sufficient_stack(move || drop(args));
            }
            _ => {}
        }
    }
}

/// What a matcher is looking at: a whole value, or the rest of a sequence.
#[derive(Copy, Clone)]
enum Subject<'a> {
    Value(&'a Value),
    Seq(&'a [Value]),
}

impl<'a> Subject<'a> {
    fn as_seq(self) -> Option<&'a [Value]> {
        match self {
            Subject::Value(value) => value.as_list(),
            Subject::Seq(items) => Some(items),
        }
    }

    fn to_value(self) -> Cow<'a, Value> {
        match self {
            Subject::Value(value) => Cow::Borrowed(value),
            Subject::Seq(items) => Cow::Owned(Value::list(items.to_vec())),
        }
    }
}

impl Matcher {
    /// Conjunction: `self` and `other` must both match.
    #[must_use]
    pub fn and(self, other: Matcher) -> Matcher {
        Matcher::And(Box::new(self), Box::new(other))
    }

    pub fn matches(&self, value: &Value) -> bool {
        self.test(Subject::Value(value))
    }

    /// Captures of matching `value`. Only meaningful when
    /// [`matches`](Self::matches) holds; use [`extract`](Self::extract)
    /// to do both at once.
    pub fn bindings(&self, value: &Value) -> Bindings {
        let mut out = Bindings::new();
        self.bind(Subject::Value(value), &mut out);
        out
    }

    /// Match and capture in one pass.
    pub fn extract(&self, value: &Value) -> Option<Bindings> {
        let mut out = Bindings::new();
        self.bind(Subject::Value(value), &mut out).then_some(out)
    }

    /// Capture names in textual order, repeats removed.
    pub fn capture_names(&self) -> Vec<Name> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    /// Match without capturing; never allocates for sequence remainders.
    fn test(&self, subject: Subject<'_>) -> bool {
        ensure_sufficient_stack(|| match self {
            Matcher::Any
            | Matcher::Identifier(_)
            | Matcher::AnonymousSplat
            | Matcher::NamedSplat(_) => true,
            Matcher::Value(literal) => literal.test(&subject.to_value()),
            Matcher::String(text) => subject_str(subject) == Some(&**text),
            Matcher::EmptyList => subject.as_seq().is_some_and(<[Value]>::is_empty),
            Matcher::Array { head, tail } => match subject.as_seq() {
                Some([first, rest @ ..]) => {
                    head.test(Subject::Value(first)) && tail.test(Subject::Seq(rest))
                }
                _ => false,
            },
            Matcher::Extractor {
                extractor, args, ..
            } => extractor
                .extract(&subject.to_value())
                .is_some_and(|parts| args.test(Subject::Seq(&parts))),
            Matcher::And(left, right) => left.test(subject) && right.test(subject),
        })
    }

    /// Match and capture into `out`. On `false`, `out` holds whatever was
    /// captured before the failure and should be discarded.
    fn bind(&self, subject: Subject<'_>, out: &mut Bindings) -> bool {
        ensure_sufficient_stack(|| match self {
            Matcher::Identifier(name) | Matcher::NamedSplat(name) => {
                out.insert(name.clone(), subject.to_value().into_owned());
                true
            }
            Matcher::Array { head, tail } => match subject.as_seq() {
                Some([first, rest @ ..]) => {
                    head.bind(Subject::Value(first), out) && tail.bind(Subject::Seq(rest), out)
                }
                _ => false,
            },
            Matcher::Extractor {
                extractor, args, ..
            } => extractor
                .extract(&subject.to_value())
                .is_some_and(|parts| args.bind(Subject::Seq(&parts), out)),
            Matcher::And(left, right) => left.bind(subject, out) && right.bind(subject, out),
            Matcher::Any
            | Matcher::Value(_)
            | Matcher::String(_)
            | Matcher::EmptyList
            | Matcher::AnonymousSplat => self.test(subject),
        })
    }

    fn collect_names(&self, names: &mut Vec<Name>) {
        ensure_sufficient_stack(|| match self {
            Matcher::Identifier(name) | Matcher::NamedSplat(name) => {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
            Matcher::Array { head: a, tail: b } | Matcher::And(a, b) => {
                a.collect_names(names);
                b.collect_names(names);
            }
            Matcher::Extractor { args, .. } => args.collect_names(names),
            Matcher::Any
            | Matcher::Value(_)
            | Matcher::String(_)
            | Matcher::EmptyList
            | Matcher::AnonymousSplat => {}
        });
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        ensure_sufficient_stack(|| {
            let indent = depth * 2;
            match self {
                Matcher::Any => writeln!(f, "{:indent$}Any", ""),
                Matcher::Value(literal) => writeln!(f, "{:indent$}Value {literal}", ""),
                Matcher::String(text) => writeln!(f, "{:indent$}String {:?}", "", &**text),
                Matcher::Identifier(name) => writeln!(f, "{:indent$}Identifier {name}", ""),
                Matcher::EmptyList => writeln!(f, "{:indent$}EmptyList", ""),
                Matcher::Array { head, tail } => {
                    writeln!(f, "{:indent$}Array", "")?;
                    head.write_tree(f, depth + 1)?;
                    tail.write_tree(f, depth + 1)
                }
                Matcher::AnonymousSplat => writeln!(f, "{:indent$}AnonymousSplat", ""),
                Matcher::NamedSplat(name) => writeln!(f, "{:indent$}NamedSplat {name}", ""),
                Matcher::Extractor { name, args, .. } => {
                    writeln!(f, "{:indent$}Extractor {name}", "")?;
                    args.write_tree(f, depth + 1)
                }
                Matcher::And(left, right) => {
                    writeln!(f, "{:indent$}And", "")?;
                    left.write_tree(f, depth + 1)?;
                    right.write_tree(f, depth + 1)
                }
            }
        })
    }
}

fn subject_str(subject: Subject<'_>) -> Option<&str> {
    match subject {
        Subject::Value(value) => value.as_str(),
        Subject::Seq(_) => None,
    }
}

/// One node per line, children indented by two spaces.
impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

//! Literal payloads of value matchers and their comparison rules.
//!
//! Each literal kind decides equality its own way instead of going
//! through one overloaded `==`:
//!
//! - `Int` / `Float`: numeric, across both kinds (`1` matches `1.0`)
//! - `Symbol`, `Bool`, `Nil`: exact kind and payload
//! - `Range`: membership of an integer or float
//! - `Type`: a [`TypeTest`] on the value's kind or record type

use crate::value::{Value, ValueKind};
use shape_ir::Name;
use std::fmt;

/// Integer range bounds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RangeLiteral {
    pub start: i64,
    pub end: i64,
    /// `...` excludes `end`; `..` includes it.
    pub exclusive: bool,
}

impl RangeLiteral {
    pub fn contains_int(&self, n: i64) -> bool {
        n >= self.start && if self.exclusive { n < self.end } else { n <= self.end }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "bounds beyond 2^53 lose precision when compared against floats"
    )]
    pub fn contains_float(&self, n: f64) -> bool {
        let (start, end) = (self.start as f64, self.end as f64);
        n >= start && if self.exclusive { n < end } else { n <= end }
    }
}

/// What a type name tests.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeTest {
    /// Every value.
    Object,
    /// Values of one builtin kind.
    Kind(ValueKind),
    /// Integers and floats.
    Numeric,
    /// Records whose type name is this name.
    Record(Name),
}

impl TypeTest {
    pub fn test(&self, value: &Value) -> bool {
        match self {
            TypeTest::Object => true,
            TypeTest::Kind(kind) => value.kind() == *kind,
            TypeTest::Numeric => matches!(value, Value::Int(_) | Value::Float(_)),
            TypeTest::Record(name) => value
                .as_record()
                .is_some_and(|record| record.type_name == *name),
        }
    }
}

impl fmt::Display for TypeTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTest::Object => write!(f, "Object"),
            TypeTest::Kind(kind) => write!(f, "{}", kind.type_name()),
            TypeTest::Numeric => write!(f, "Numeric"),
            TypeTest::Record(name) => write!(f, "{name}"),
        }
    }
}

/// Decoded literal of a value matcher.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Symbol(Name),
    Bool(bool),
    Nil,
    Range(RangeLiteral),
    Type(TypeTest),
}

impl Literal {
    /// Does `value` satisfy this literal?
    #[allow(clippy::float_cmp, reason = "float literals compare exactly")]
    pub fn test(&self, value: &Value) -> bool {
        match (self, value) {
            (Literal::Int(a), Value::Int(b)) => a == b,
            (Literal::Int(n), Value::Float(x)) | (Literal::Float(x), Value::Int(n)) => {
                int_equals_float(*n, *x)
            }
            (Literal::Float(a), Value::Float(b)) => a == b,
            (Literal::Symbol(a), Value::Symbol(b)) => a == b,
            (Literal::Bool(a), Value::Bool(b)) => a == b,
            (Literal::Nil, Value::Nil) => true,
            (Literal::Range(range), Value::Int(n)) => range.contains_int(*n),
            (Literal::Range(range), Value::Float(n)) => range.contains_float(*n),
            (Literal::Type(test), value) => test.test(value),
            _ => false,
        }
    }
}

/// Exact numeric equality: `x` must be integral, within `i64` range, and
/// equal to `n` without rounding either side.
#[allow(
    clippy::cast_possible_truncation,
    reason = "`x` is integral and in range when cast"
)]
fn int_equals_float(n: i64, x: f64) -> bool {
    // 2^63; i64::MAX itself is not representable as f64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    x.fract() == 0.0 && (-LIMIT..LIMIT).contains(&x) && x as i64 == n
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Float(n) => write!(f, "{n:?}"),
            Literal::Symbol(name) => write!(f, ":{name}"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Nil => write!(f, "nil"),
            Literal::Range(range) => {
                let dots = if range.exclusive { "..." } else { ".." };
                write!(f, "{}{dots}{}", range.start, range.end)
            }
            Literal::Type(test) => write!(f, "{test}"),
        }
    }
}

#[cfg(test)]
mod tests;

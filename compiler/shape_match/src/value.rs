//! Host values the matchers run against.
//!
//! # Sharing
//!
//! Lists and records keep their payload behind an `Arc`, so the clone made
//! when a value is captured into a binding is a reference-count bump, and a
//! compiled pattern can be matched against the same value from many threads.
//!
//! ```text
//! let point = Value::record("Point", vec![Value::Int(1), Value::Int(2)]);
//! let list = Value::list(vec![Value::Int(1), Value::string("a")]);
//! ```

use shape_ir::Name;
use shape_stack::ensure_sufficient_stack;
use std::fmt;
use std::mem;
use std::sync::{Arc, OnceLock};

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    Symbol(Name),
    /// Ordered sequence; the only kind array patterns decompose.
    List(Arc<[Value]>),
    /// Instance of a user-defined type with positional fields.
    Record(Arc<Record>),
}

/// Payload of [`Value::Record`].
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub type_name: Name,
    pub fields: Vec<Value>,
}

/// Discriminant of a [`Value`], used by type tests.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Nil,
    Bool,
    Int,
    Float,
    Str,
    Symbol,
    List,
    Record,
}

impl ValueKind {
    /// The builtin type name that tests for this kind.
    pub fn type_name(self) -> &'static str {
        match self {
            ValueKind::Nil => "Nil",
            ValueKind::Bool => "Boolean",
            ValueKind::Int => "Integer",
            ValueKind::Float => "Float",
            ValueKind::Str => "String",
            ValueKind::Symbol => "Symbol",
            ValueKind::List => "Array",
            ValueKind::Record => "Record",
        }
    }
}

// Factory Methods

impl Value {
    #[inline]
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Arc::from(s.as_ref()))
    }

    #[inline]
    pub fn symbol(name: impl AsRef<str>) -> Self {
        Value::Symbol(Name::new(name))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Arc::from(items))
    }

    #[inline]
    pub fn record(type_name: impl AsRef<str>, fields: Vec<Value>) -> Self {
        Value::Record(Arc::new(Record {
            type_name: Name::new(type_name),
            fields,
        }))
    }
}

// Value Methods

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Nil => ValueKind::Nil,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::List(_) => ValueKind::List,
            Value::Record(_) => ValueKind::Record,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Name of the value's type: the record's type name, or the builtin name.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Record(record) => record.type_name.as_str(),
            other => other.kind().type_name(),
        }
    }
}

// Trait Implementations

/// Uniquely owned children are moved out and dropped behind the stack guard.
/// A list still shared elsewhere only loses a reference here.
impl Drop for Value {
    fn drop(&mut self) {
        match self {
            Value::List(items) if !items.is_empty() && Arc::strong_count(items) == 1 => {
                let items = mem::replace(items, empty_list());
                ensure_sufficient_stack(move || drop(items));
            }
            Value::Record(record) => {
                if let Some(record) = Arc::get_mut(record).filter(|r| !r.fields.is_empty()) {
                    let fields = mem::take(&mut record.fields);
                    ensure_sufficient_stack(move || drop(fields));
                }
            }
            _ => {}
        }
    }
}

fn empty_list() -> Arc<[Value]> {
    static EMPTY: OnceLock<Arc<[Value]>> = OnceLock::new();
    Arc::clone(EMPTY.get_or_init(|| Arc::from(Vec::new())))
}

/// Structural equality. Numbers of different kinds are unequal here;
/// literal matching applies its own numeric rules.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            _ => false,
        })
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Nil => write!(f, "Nil"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Symbol(s) => write!(f, "Symbol({s})"),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Record(r) => write!(f, "Record({}, {:?})", r.type_name, r.fields),
        })
    }
}

/// Renders in pattern literal syntax, so a displayed value reads back as
/// a pattern that matches it.
///
/// Values with no literal form render as text the parser rejects, never as
/// a different pattern: non-finite floats are `<inf>`, `<-inf>` and
/// `<nan>`; a symbol that is not a plain name is quoted, as in `:"a b"`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) if n.is_nan() => write!(f, "<nan>"),
            Value::Float(n) if n.is_infinite() => {
                write!(f, "<{}inf>", if n.is_sign_negative() { "-" } else { "" })
            }
            Value::Float(n) if n.fract() == 0.0 => write!(f, "{n:.1}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{:?}", &**s),
            Value::Symbol(s) if is_plain_name(s.as_str()) => write!(f, ":{s}"),
            Value::Symbol(s) => write!(f, ":{:?}", s.as_str()),
            Value::List(items) => {
                write!(f, "[")?;
                write_comma_separated(f, items)?;
                write!(f, "]")
            }
            Value::Record(r) => {
                write!(f, "{}(", r.type_name)?;
                write_comma_separated(f, &r.fields)?;
                write!(f, ")")
            }
        })
    }
}

/// Does `text` lex as a single identifier or type name?
fn is_plain_name(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn write_comma_separated(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

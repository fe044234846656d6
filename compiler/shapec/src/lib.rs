//! Shapec - structural pattern matching for runtime values.
//!
//! Patterns are written as text, compiled once, and matched many times:
//!
//! ```text
//! let pattern = shapec::compile("[head, *tail]")?;
//! let bindings = pattern.extract(&Value::from(vec![1, 2, 3])).unwrap();
//! assert_eq!(bindings.get("tail"), Some(&Value::from(vec![2, 3])));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! source text
//!     │  shape_lexer + shape_parse
//!     ▼
//! PatternNode ──► PatternSyntaxError
//!     │  shape_match::compile (names resolved against a Registry)
//!     ▼
//! Matcher ──► NameResolutionError
//!     │
//!     ▼
//! Pattern::test / Pattern::extract
//! ```
//!
//! A compiled [`Pattern`] is immutable and `Send + Sync`. [`PatternCache`]
//! memoizes compilation by source text; [`Cases`] dispatches a value to
//! the first of several patterns that matches it.

mod cache;
mod cases;
pub mod commands;
mod error;
mod pattern;
mod value_syntax;

pub use cache::PatternCache;
pub use cases::Cases;
pub use error::{CompileError, PatternSyntaxError};
pub use pattern::{compile, compile_with, Pattern};
pub use value_syntax::value_from_source;

pub use shape_match::{
    builtin_registry, Bindings, Capability, Extractor, Matcher, Name, NameResolutionError,
    Record, Registry, TypeTest, Value, ValueKind,
};

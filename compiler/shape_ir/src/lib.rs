//! Shape IR - the syntax tree handed from the grammar to the matcher compiler.
//!
//! This crate contains the plain data shared by the front end and the core:
//! - Spans for source locations
//! - Names for identifiers, type names and symbols
//! - The pattern AST (`PatternNode`, `PatternKind`)
//!
//! Nothing here evaluates anything; dropping a deep tree is the only
//! recursion, and it runs behind `shape_stack`'s guard. AST nodes are produced by `shape_parse`
//! and consumed, once, by the compiler in `shape_match`.

pub mod ast;
mod name;
mod span;

pub use ast::{PatternKind, PatternNode, Quote, Splat};
pub use name::Name;
pub use span::Span;

//! Structural matching: matcher trees and the compiler that builds them.
//!
//! A pattern's syntax tree is compiled once ([`compile`]) into an immutable
//! [`Matcher`] tree. The tree answers two questions about a [`Value`]:
//! does it match, and if so, what do the named captures bind to.
//!
//! # Architecture
//!
//! - `value`: the host value model the matchers inspect
//! - `literal`: per-kind comparison rules for literal and type tests
//! - `extractor`: the protocol user types implement to be deconstructed
//! - `registry`: the embedder-supplied map from names to types and extractors
//! - `matcher`: the matcher tree and its evaluation
//! - `bindings`: ordered capture maps
//! - `compile`: syntax tree to matcher tree
//!
//! # Thread Safety
//!
//! Every type here is immutable after construction and `Send + Sync`; a
//! compiled matcher can be shared across threads without locking.

mod bindings;
mod compile;
mod errors;
mod extractor;
mod literal;
mod matcher;
mod registry;
mod value;

pub use bindings::Bindings;
pub use compile::{compile, decode_string};
pub use errors::{Capability, NameResolutionError};
pub use extractor::{Extractor, RecordExtractor, ResolvedExtractor, SequenceExtractor};
pub use literal::{Literal, RangeLiteral, TypeTest};
pub use matcher::Matcher;
pub use registry::{builtin_registry, Registry};
pub use value::{Record, Value, ValueKind};

// Re-export so embedders don't need a direct shape_ir dependency.
pub use shape_ir::{Name, Quote, Span};

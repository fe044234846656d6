//! Name resolution failures.

use shape_ir::{Name, Span};
use std::fmt;
use thiserror::Error;

/// What a pattern asked a name to be.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Capability {
    /// A type test: `Integer`, `x : Point`.
    Type,
    /// A deconstructor: `Point(x, y)`.
    Extractor,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Type => write!(f, "type"),
            Capability::Extractor => write!(f, "extractor"),
        }
    }
}

/// A type or extractor name the registry cannot resolve.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown {expected} `{name}`")]
pub struct NameResolutionError {
    pub name: Name,
    pub expected: Capability,
    /// Location of the name in the pattern source.
    pub span: Span,
}

//! Compiled patterns.

use crate::error::{CompileError, PatternSyntaxError};
use shape_match::{builtin_registry, Bindings, Matcher, Name, Registry, Value};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// A pattern compiled from source text. Immutable; share freely.
#[derive(Clone, Debug)]
pub struct Pattern {
    source: Arc<str>,
    matcher: Matcher,
}

/// Compile `source` against the builtin registry.
///
/// ```text
/// let pattern = shapec::compile("[first, *rest]")?;
/// assert!(pattern.test(&Value::from(vec![1, 2, 3])));
/// ```
pub fn compile(source: &str) -> Result<Pattern, CompileError> {
    compile_with(source, builtin_registry())
}

/// Compile `source`, resolving type and extractor names against `registry`.
pub fn compile_with(source: &str, registry: &Registry) -> Result<Pattern, CompileError> {
    debug!(source, "compile");
    let node = shape_parse::parse(source).map_err(|err| {
        debug!(message = %err.message, position = err.span.start, "syntax error");
        PatternSyntaxError::from_parse(source, err)
    })?;
    let matcher = shape_match::compile(&node, registry)?;
    Ok(Pattern {
        source: Arc::from(source),
        matcher,
    })
}

impl Pattern {
    /// Does `value` match?
    #[inline]
    pub fn test(&self, value: &Value) -> bool {
        self.matcher.matches(value)
    }

    /// Captures of a successful match, in textual order.
    #[inline]
    pub fn extract(&self, value: &Value) -> Option<Bindings> {
        self.matcher.extract(value)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn shared_source(&self) -> &Arc<str> {
        &self.source
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Names this pattern can bind, in textual order.
    pub fn capture_names(&self) -> Vec<Name> {
        self.matcher.capture_names()
    }
}

impl FromStr for Pattern {
    type Err = CompileError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        compile(source)
    }
}

/// Shows the source text.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

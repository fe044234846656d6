//! Name registry for type tests and extractors.
//!
//! Patterns refer to types and extractors by name. The registry is the
//! embedder's explicit answer to "what does `Point` mean": names are
//! resolved against it once, when a pattern is compiled, never while
//! matching.
//!
//! `Registry::default()` carries the builtins; `Registry::new()` is empty.

use crate::extractor::{Extractor, RecordExtractor, ResolvedExtractor, SequenceExtractor};
use crate::literal::TypeTest;
use crate::value::ValueKind;
use rustc_hash::FxHashMap;
use shape_ir::Name;
use std::sync::OnceLock;
use tracing::debug;

/// What one name resolves to. A name may be both a type and an extractor.
#[derive(Clone, Debug, Default)]
struct Entry {
    ty: Option<TypeTest>,
    extractor: Option<ResolvedExtractor>,
}

/// Map from names to type tests and extractors.
#[derive(Clone, Debug)]
pub struct Registry {
    entries: FxHashMap<Name, Entry>,
}

impl Registry {
    /// An empty registry: every name fails to resolve.
    pub fn new() -> Self {
        Registry {
            entries: FxHashMap::default(),
        }
    }

    /// A registry holding the builtin type names and the `Array` extractor.
    pub fn with_builtins() -> Self {
        let mut registry = Registry::new();
        registry.register_type("Object", TypeTest::Object);
        registry.register_type("Numeric", TypeTest::Numeric);
        for kind in [
            ValueKind::Nil,
            ValueKind::Bool,
            ValueKind::Int,
            ValueKind::Float,
            ValueKind::Str,
            ValueKind::Symbol,
            ValueKind::List,
        ] {
            registry.register_type(kind.type_name(), TypeTest::Kind(kind));
        }
        registry.register_extractor("Array", SequenceExtractor);
        registry
    }

    /// Make `name` usable as a type test.
    pub fn register_type(&mut self, name: impl Into<Name>, test: TypeTest) -> &mut Self {
        let name = name.into();
        debug!(name = %name, test = %test, "register type");
        self.entries.entry(name).or_default().ty = Some(test);
        self
    }

    /// Make `name` usable as an extractor.
    pub fn register_extractor(
        &mut self,
        name: impl Into<Name>,
        extractor: impl Extractor + 'static,
    ) -> &mut Self {
        let name = name.into();
        debug!(name = %name, "register extractor");
        self.entries.entry(name).or_default().extractor = Some(ResolvedExtractor::new(extractor));
        self
    }

    /// Register a record type: `name` tests for records of that type and
    /// deconstructs them into their fields.
    pub fn register_record(&mut self, name: impl Into<Name>) -> &mut Self {
        let name = name.into();
        self.register_type(name.clone(), TypeTest::Record(name.clone()));
        self.register_extractor(name.clone(), RecordExtractor::new(name))
    }

    pub fn resolve_type(&self, name: &str) -> Option<&TypeTest> {
        self.entries.get(name).and_then(|entry| entry.ty.as_ref())
    }

    pub fn resolve_extractor(&self, name: &str) -> Option<&ResolvedExtractor> {
        self.entries
            .get(name)
            .and_then(|entry| entry.extractor.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&Name> {
        let mut names: Vec<&Name> = self.entries.keys().collect();
        names.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::with_builtins()
    }
}

/// Shared builtin registry, built on first use.
pub fn builtin_registry() -> &'static Registry {
    static BUILTINS: OnceLock<Registry> = OnceLock::new();
    BUILTINS.get_or_init(Registry::with_builtins)
}

#[cfg(test)]
mod tests;

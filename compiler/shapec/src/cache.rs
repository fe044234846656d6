//! Memo of compiled patterns keyed by source text.

use crate::error::CompileError;
use crate::pattern::{compile_with, Pattern};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use shape_match::Registry;
use std::sync::Arc;
use tracing::trace;

/// Thread-safe cache of compiled patterns.
///
/// Every pattern in one cache is compiled against the same registry.
/// Failed compilations are not cached.
pub struct PatternCache {
    registry: Registry,
    patterns: RwLock<FxHashMap<Arc<str>, Arc<Pattern>>>,
}

impl PatternCache {
    /// A cache compiling against the builtin registry.
    pub fn new() -> Self {
        PatternCache::with_registry(Registry::with_builtins())
    }

    pub fn with_registry(registry: Registry) -> Self {
        PatternCache {
            registry,
            patterns: RwLock::new(FxHashMap::default()),
        }
    }

    /// The cached pattern for `source`, compiling it on first request.
    pub fn get_or_compile(&self, source: &str) -> Result<Arc<Pattern>, CompileError> {
        if let Some(pattern) = self.patterns.read().get(source) {
            trace!(source, "pattern cache hit");
            return Ok(Arc::clone(pattern));
        }

        trace!(source, "pattern cache miss");
        let pattern = Arc::new(compile_with(source, &self.registry)?);
        let mut patterns = self.patterns.write();
        // Another thread may have compiled the same source meanwhile; keep theirs.
        let entry = patterns
            .entry(Arc::clone(pattern.shared_source()))
            .or_insert(pattern);
        Ok(Arc::clone(entry))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.patterns.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.read().is_empty()
    }

    pub fn clear(&self) {
        self.patterns.write().clear();
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        PatternCache::new()
    }
}

//! First-match-wins dispatch over a list of patterns.
//!
//! ```text
//! let describe = Cases::new()
//!     .when("[]", |_| "empty".to_string())?
//!     .when("[x]", |b| format!("one: {}", b.get("x").unwrap()))?
//!     .when("[*]", |_| "many".to_string())?;
//! describe.run(&value);
//! ```

use crate::error::CompileError;
use crate::pattern::{compile, Pattern};
use shape_match::{Bindings, Value};
use tracing::trace;

type Handler<'h, R> = Box<dyn Fn(&Bindings) -> R + Send + Sync + 'h>;

/// Ordered `(pattern, handler)` arms.
pub struct Cases<'h, R> {
    arms: Vec<(Pattern, Handler<'h, R>)>,
}

impl<'h, R> Cases<'h, R> {
    pub fn new() -> Self {
        Cases { arms: Vec::new() }
    }

    /// Append an arm for an already compiled pattern.
    #[must_use]
    pub fn arm(
        mut self,
        pattern: Pattern,
        handler: impl Fn(&Bindings) -> R + Send + Sync + 'h,
    ) -> Self {
        self.arms.push((pattern, Box::new(handler)));
        self
    }

    /// Compile `source` with the builtin registry and append it as an arm.
    pub fn when(
        self,
        source: &str,
        handler: impl Fn(&Bindings) -> R + Send + Sync + 'h,
    ) -> Result<Self, CompileError> {
        Ok(self.arm(compile(source)?, handler))
    }

    /// Run the handler of the first matching arm.
    pub fn run(&self, value: &Value) -> Option<R> {
        self.arms.iter().enumerate().find_map(|(index, (pattern, handler))| {
            let bindings = pattern.extract(value)?;
            trace!(arm = index, pattern = %pattern, "case matched");
            Some(handler(&bindings))
        })
    }

    /// [`run`](Self::run), or `default` when no arm matches.
    pub fn run_or(&self, value: &Value, default: R) -> R {
        self.run(value).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }
}

impl<R> Default for Cases<'_, R> {
    fn default() -> Self {
        Cases::new()
    }
}

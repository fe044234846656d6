//! Stack growth for recursive descent over patterns and values.
//!
//! The parser, the matcher compiler, matcher evaluation and the teardown of
//! trees and values all recurse once per nesting level. Pattern text and candidate values are caller-supplied,
//! so nesting depth is unbounded; [`ensure_sufficient_stack`] grows the stack
//! on demand instead of letting a deep `[[[[...]]]]` abort the process.
//!
//! On `wasm32` the guard is a passthrough.

/// Grow when less than this much stack remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
///
/// Wrap the body of every function that recurses on caller-controlled depth:
///
/// ```text
/// fn matches(&self, value: &Value) -> bool {
///     ensure_sufficient_stack(|| match self { ... })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// Passthrough; wasm manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

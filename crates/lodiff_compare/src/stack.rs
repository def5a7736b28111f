//! Stack safety for deeply nested dumps.
//!
//! Tables inside frames inside tables produce deep `content` nesting, and the
//! comparator recurses once per nesting level on both dumps at once.

/// Grow the stack before running `f` when less than 100KB is left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    const RED_ZONE: usize = 100 * 1024;
    const GROWTH: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// Without `stacker` the closure runs on the current stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

//! Native stack growth for recursive descent over Li forms.
//!
//! Both the scanner in `li_parse` and the tree walker in `li_eval` recurse
//! once per nesting level of the source. Tail calls never reach this guard
//! (the trampoline unwinds them), but nested literals and non-tail
//! recursion such as `(+ 1 (count (- n 1)))` still do, so each recursive
//! entry point is wrapped in [`ensure_sufficient_stack`].
//!
//! On native targets the stack is extended with `stacker` segments; on
//! `wasm32` the call is a passthrough.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the native stack if fewer than [`RED_ZONE`] bytes
/// remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Passthrough on wasm, which manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

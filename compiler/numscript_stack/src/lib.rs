//! Stack growth for recursive tree walks.
//!
//! The parser, the analyzer and the interpreter all walk expressions and
//! blocks recursively. Scripts are untrusted input, so each recursive entry
//! point runs through [`ensure_sufficient_stack`], which moves the walk onto
//! a freshly allocated stack segment when the current one runs low. On
//! `wasm32` it is a plain call.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than `RED_ZONE` bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

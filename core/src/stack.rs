//! Native stack growth for the recursive passes.
//!
//! Building, optimising and evaluating trees all recurse once per level of
//! nesting. Each recursive step goes through [`guarded`], which moves onto a
//! fresh heap-allocated segment when the current stack runs low.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment.
const GROW_SIZE: usize = 4 * 1024 * 1024;

/// Run `f`, growing the stack first if it is close to exhausted.
#[inline]
pub(crate) fn guarded<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROW_SIZE, f)
}

/// Run `f` with at least `needed` bytes of stack available.
///
/// Used around code that recurses without going through [`guarded`], such
/// as the generated grammar.
pub(crate) fn reserved<R>(needed: usize, f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(needed, needed.max(GROW_SIZE), f)
}

//! Pairwise Haar butterfly.
//!
//! `[[1, 1], [1, -1]] / √2` is orthogonal and symmetric, so the same pass
//! serves both directions: applying it twice restores the original pair.

use crate::num::Float;

/// Replace every pair `(a, b)` at even offsets in `buf[..span]` with
/// `((a + b) / √2, (a - b) / √2)`.
///
/// `span` must be even and no longer than `buf`.
#[inline]
pub fn butterfly<T: Float>(buf: &mut [T], span: usize) {
    debug_assert!(span % 2 == 0, "span must be even");
    let sqrt_2 = T::sqrt_2();
    for pair in buf[..span].chunks_exact_mut(2) {
        let (a, b) = (pair[0], pair[1]);
        pair[0] = (a + b) / sqrt_2; // trend
        pair[1] = (a - b) / sqrt_2; // fluctuation
    }
}

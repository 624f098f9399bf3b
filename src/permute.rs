//! In-place sub-band permutations.
//!
//! After one butterfly pass a span alternates trend, fluctuation, trend, ...
//! [`deinterleave`] regroups it so every trend sits in the lower half and
//! every fluctuation in the upper half; [`interleave`] undoes that. Both are
//! stride permutations (a one-bit rotation of the index for power-of-two
//! spans), so they split into disjoint cycles. Each cycle is rotated with a
//! single rolling temporary, which is what lets the transform run without a
//! second buffer.
//!
//! Every non-trivial cycle of [`deinterleave`] contains an odd index in the
//! lower half, and every non-trivial cycle of [`interleave`] an even index in
//! the upper half, so scanning those candidates and skipping the ones an
//! earlier cycle already passed through visits every cycle exactly once.

use crate::mask::IndexMask;

/// Destination of `pos` when grouping trends before fluctuations.
#[inline(always)]
fn grouped_index(pos: usize, half: usize) -> usize {
    if pos % 2 == 0 {
        pos / 2
    } else {
        half + (pos - 1) / 2
    }
}

/// Destination of `pos` when restoring trend/fluctuation alternation.
#[inline(always)]
fn alternating_index(pos: usize, span: usize, half: usize) -> usize {
    if pos < half {
        2 * pos
    } else {
        2 * pos - (span - 1)
    }
}

/// Rotate the cycle through `start`, moving every value to `dest(pos)`.
///
/// `visit` sees each position the cycle passes through other than `start`.
#[inline]
fn rotate_cycle<T, D, V>(buf: &mut [T], start: usize, dest: D, mut visit: V)
where
    T: Copy,
    D: Fn(usize) -> usize,
    V: FnMut(usize),
{
    let mut carry = buf[start];
    let mut pos = start;
    loop {
        pos = dest(pos);
        carry = core::mem::replace(&mut buf[pos], carry);
        if pos == start {
            break;
        }
        visit(pos);
    }
}

/// Regroup `buf[..span]` so even-indexed values fill the lower half and
/// odd-indexed values the upper half, preserving relative order.
///
/// `mask_words` must hold at least [`mask_words(span)`](crate::mask_words)
/// words. Values at `span..` are left untouched.
pub fn deinterleave<T: Copy>(buf: &mut [T], span: usize, mask_words: &mut [u32]) {
    debug_assert!(span % 2 == 0 && span <= buf.len());
    let half = span / 2;
    let mut seen = IndexMask::for_span(mask_words, span);
    for leader in (1..half).step_by(2) {
        if seen.contains(leader / 2) {
            continue;
        }
        rotate_cycle(
            buf,
            leader,
            |pos| grouped_index(pos, half),
            |pos| {
                if pos % 2 == 1 && pos < half {
                    seen.insert(pos / 2);
                }
            },
        );
    }
}

/// Inverse of [`deinterleave`]: interleave the lower half of `buf[..span]`
/// into even slots and the upper half into odd slots.
///
/// `mask_words` must hold at least [`mask_words(span)`](crate::mask_words)
/// words. Values at `span..` are left untouched.
pub fn interleave<T: Copy>(buf: &mut [T], span: usize, mask_words: &mut [u32]) {
    debug_assert!(span % 2 == 0 && span <= buf.len());
    let half = span / 2;
    let mut seen = IndexMask::for_span(mask_words, span);
    for leader in (half..span.saturating_sub(1)).step_by(2) {
        if seen.contains((leader - half) / 2) {
            continue;
        }
        rotate_cycle(
            buf,
            leader,
            |pos| alternating_index(pos, span, half),
            |pos| {
                if pos % 2 == 0 && pos >= half {
                    seen.insert((pos - half) / 2);
                }
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::mask_words;
    use std::vec::Vec;

    fn identity(len: usize) -> Vec<usize> {
        (0..len).collect()
    }

    #[test]
    fn deinterleave_groups_even_then_odd() {
        let mut words = [0u32; 1];
        let mut x = identity(8);
        deinterleave(&mut x, 8, &mut words);
        assert_eq!(x, [0, 2, 4, 6, 1, 3, 5, 7]);
    }

    #[test]
    fn deinterleave_sixteen() {
        let mut words = [0u32; 1];
        let mut x = identity(16);
        deinterleave(&mut x, 16, &mut words);
        assert_eq!(x, [0, 2, 4, 6, 8, 10, 12, 14, 1, 3, 5, 7, 9, 11, 13, 15]);
    }

    #[test]
    fn interleave_restores_alternation() {
        let mut words = [0u32; 1];
        let mut x = [0usize, 2, 4, 6, 1, 3, 5, 7];
        interleave(&mut x, 8, &mut words);
        assert_eq!(x, [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn span_of_two_is_identity() {
        let mut words: [u32; 0] = [];
        let mut x = [7usize, 9, 11, 13];
        deinterleave(&mut x, 2, &mut words);
        assert_eq!(x, [7, 9, 11, 13]);
        interleave(&mut x, 2, &mut words);
        assert_eq!(x, [7, 9, 11, 13]);
    }

    #[test]
    fn prefix_span_leaves_tail() {
        let mut words = [0u32; 1];
        let mut x = identity(16);
        deinterleave(&mut x, 8, &mut words);
        assert_eq!(&x[..8], &[0, 2, 4, 6, 1, 3, 5, 7]);
        assert_eq!(&x[8..], &identity(16)[8..]);
    }

    #[test]
    fn matches_reference_grouping_for_many_spans() {
        for shift in 1..=12 {
            let span = 1usize << shift;
            let mut words = std::vec![0u32; mask_words(span)];
            let mut x = identity(span);
            deinterleave(&mut x, span, &mut words);
            let expected: Vec<usize> = (0..span)
                .step_by(2)
                .chain((1..span).step_by(2))
                .collect();
            assert_eq!(x, expected, "span {}", span);
            interleave(&mut x, span, &mut words);
            assert_eq!(x, identity(span), "span {}", span);
        }
    }

    #[test]
    fn dirty_mask_words_are_cleared() {
        let mut words = [u32::MAX; 2];
        let mut x = identity(64);
        deinterleave(&mut x, 64, &mut words);
        let expected: Vec<usize> = (0..64).step_by(2).chain((1..64).step_by(2)).collect();
        assert_eq!(x, expected);
    }
}

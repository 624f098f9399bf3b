//! Multi-level Haar DWT/IDWT drivers.
//!
//! The forward driver runs butterfly then [`deinterleave`] over a span that
//! starts at the full length and halves every level. The inverse driver walks
//! the same spans in reverse with [`interleave`] then butterfly. After `k`
//! forward levels the buffer reads
//!
//! ```text
//! [ trend_k | fluct_k | fluct_(k-1) | ... | fluct_1 ]
//!   len/2^k   len/2^k   len/2^(k-1)        len/2
//! ```
//!
//! These entry points do not re-validate their inputs; run
//! [`validate_length`](crate::validate_length) (or build a
//! [`HaarPlan`](crate::HaarPlan)) once at the boundary.

use crate::butterfly::butterfly;
use crate::mask::mask_words;
use crate::num::Float;
use crate::permute::{deinterleave, interleave};

/// Longest buffer the stack-mask entry points accept.
pub const STACK_MAX_LEN: usize = 1 << 16;

const STACK_MASK_WORDS: usize = mask_words(STACK_MAX_LEN);

/// Apply `levels` forward Haar levels to `buf` in place.
///
/// Preconditions: `buf.len()` is a power of two no larger than
/// [`STACK_MAX_LEN`] and `levels <= log2(buf.len())`. `levels == 0` leaves the
/// buffer unchanged.
pub fn forward_transform<T: Float>(buf: &mut [T], levels: u32) {
    debug_assert!(buf.len() <= STACK_MAX_LEN, "use forward_transform_with_mask");
    let mut words = [0u32; STACK_MASK_WORDS];
    forward_transform_with_mask(buf, levels, &mut words);
}

/// Undo `levels` forward levels in place.
///
/// Same preconditions as [`forward_transform`]; `levels` must match the value
/// used for the forward pass. Nothing in the buffer records it.
pub fn inverse_transform<T: Float>(buf: &mut [T], levels: u32) {
    debug_assert!(buf.len() <= STACK_MAX_LEN, "use inverse_transform_with_mask");
    let mut words = [0u32; STACK_MASK_WORDS];
    inverse_transform_with_mask(buf, levels, &mut words);
}

/// [`forward_transform`] with caller-owned mask storage of at least
/// [`mask_words(buf.len())`](crate::mask_words) words, for buffers of any
/// power-of-two length.
pub fn forward_transform_with_mask<T: Float>(buf: &mut [T], levels: u32, mask: &mut [u32]) {
    let len = buf.len();
    debug_assert!((len.is_power_of_two() && len >= 2) || levels == 0);
    debug_assert!(levels <= len.trailing_zeros());
    vlog!(debug, "haar forward: len={} levels={}", len, levels);

    let mut span = len;
    for _level in 0..levels {
        vlog!(trace, "forward level {}: span={}", _level + 1, span);
        butterfly(buf, span);
        deinterleave(buf, span, mask);
        span /= 2;
    }
}

/// [`inverse_transform`] with caller-owned mask storage of at least
/// [`mask_words(buf.len())`](crate::mask_words) words.
pub fn inverse_transform_with_mask<T: Float>(buf: &mut [T], levels: u32, mask: &mut [u32]) {
    let len = buf.len();
    debug_assert!((len.is_power_of_two() && len >= 2) || levels == 0);
    debug_assert!(levels <= len.trailing_zeros());
    vlog!(debug, "haar inverse: len={} levels={}", len, levels);
    if levels == 0 {
        return;
    }

    let mut span = (len >> levels) * 2;
    while span <= len {
        vlog!(trace, "inverse span={}", span);
        interleave(buf, span, mask);
        butterfly(buf, span);
        span *= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    const REFERENCE: [f32; 8] = [4.0, 6.0, 10.0, 12.0, 8.0, 6.0, 5.0, 5.0];

    fn assert_close(a: &[f32], b: &[f32], tol: f32) {
        for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            assert!((x - y).abs() < tol, "index {}: {} vs {}", i, x, y);
        }
    }

    #[test]
    fn level_one_reference_signal() {
        let mut x = REFERENCE;
        forward_transform(&mut x, 1);
        let expected = [7.071, 15.556, 9.899, 7.071, -1.414, -1.414, 1.414, 0.0];
        assert_close(&x, &expected, 1e-3);
        inverse_transform(&mut x, 1);
        assert_close(&x, &REFERENCE, 1e-4);
    }

    #[test]
    fn full_depth_reference_signal() {
        let mut x = REFERENCE;
        forward_transform(&mut x, 3);
        // Coarsest trend is the sum scaled by (1/√2)^3.
        let total: f32 = REFERENCE.iter().sum();
        assert!((x[0] - total / 8f32.sqrt()).abs() < 1e-4);
        inverse_transform(&mut x, 3);
        assert_close(&x, &REFERENCE, 1e-4);
    }

    #[test]
    fn level_two_layout() {
        let mut x = REFERENCE;
        forward_transform(&mut x, 2);
        let s = core::f32::consts::SQRT_2;
        let t1 = [10.0 / s, 22.0 / s, 14.0 / s, 10.0 / s];
        let expected = [
            (t1[0] + t1[1]) / s,
            (t1[2] + t1[3]) / s,
            (t1[0] - t1[1]) / s,
            (t1[2] - t1[3]) / s,
            -2.0 / s,
            -2.0 / s,
            2.0 / s,
            0.0,
        ];
        assert_close(&x, &expected, 1e-4);
    }

    #[test]
    fn zero_levels_is_identity() {
        let mut x = REFERENCE;
        forward_transform(&mut x, 0);
        assert_eq!(x, REFERENCE);
        inverse_transform(&mut x, 0);
        assert_eq!(x, REFERENCE);
    }

    #[test]
    fn two_sample_signal() {
        let mut x = [3.0f64, 1.0];
        forward_transform(&mut x, 1);
        assert!((x[0] - 4.0 / core::f64::consts::SQRT_2).abs() < 1e-12);
        inverse_transform(&mut x, 1);
        assert!((x[0] - 3.0).abs() < 1e-12 && (x[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn explicit_mask_beyond_stack_capacity() {
        let len = STACK_MAX_LEN * 2;
        let orig: Vec<f64> = (0..len).map(|i| ((i * 37) % 101) as f64 - 50.0).collect();
        let mut x = orig.clone();
        let mut words = std::vec![0u32; mask_words(len)];
        forward_transform_with_mask(&mut x, 17, &mut words);
        inverse_transform_with_mask(&mut x, 17, &mut words);
        for (a, b) in x.iter().zip(orig.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }
}

//! # haardsp - In-place Haar wavelet transform for Rust
//!
//! A multi-level Haar discrete wavelet transform (DWT) and its exact inverse,
//! computed entirely in place. No scratch array, no heap, no recursion: the
//! sub-band regrouping after every level is done by following permutation
//! cycles directly on the caller's buffer.
//!
//! ## Features
//!
//! - **Zero-allocation, stack-only core** for DSPs and MCUs
//! - **In-place sub-band layout**: trend first, then fluctuations from the
//!   coarsest level to the finest
//! - **Generic over `f32` and `f64`** samples
//! - **Checked plan API** for validating lengths and levels at the boundary
//! - **Batch and multi-channel processing** with optional Rayon parallelism
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` impls and batch helpers
//! - `parallel`: process batch channels with Rayon
//! - `verbose-logging`: emit `log` records from the transform drivers
//!
//! ## Memory
//!
//! - The only bookkeeping is a visit mask of `span / 4` bits per permutation
//!   call. [`forward_transform`] and [`inverse_transform`] keep it on the
//!   stack for lengths up to [`STACK_MAX_LEN`].
//! - Longer buffers use [`forward_transform_with_mask`] and
//!   [`inverse_transform_with_mask`] with caller-owned mask words sized by
//!   [`mask_words`].
//!
//! ## Example
//!
//! ```
//! use haardsp::{forward_transform, inverse_transform, validate_length};
//!
//! let mut signal = [4.0f32, 6.0, 10.0, 12.0, 8.0, 6.0, 5.0, 5.0];
//! let max_level = validate_length(signal.len()).unwrap();
//! assert_eq!(max_level, 3);
//!
//! forward_transform(&mut signal, 1);
//! assert!((signal[0] - 7.071).abs() < 1e-3);
//! assert!((signal[4] + 1.414).abs() < 1e-3);
//!
//! inverse_transform(&mut signal, 1);
//! assert!((signal[0] - 4.0).abs() < 1e-4);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

/// Emit a `log` record when `verbose-logging` is enabled; expands to nothing
/// otherwise so the no_std core carries no logging cost.
macro_rules! vlog {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "verbose-logging")]
        {
            log::$level!($($arg)+);
        }
    };
}

/// Sample scalar abstraction
///
/// Minimal float trait implemented for `f32` and `f64`.
pub mod num;

/// Signal length validation
///
/// Power-of-two check and maximum decomposition level.
pub mod length;

/// Pairwise Haar butterfly
pub mod butterfly;

/// Fixed-capacity visit mask used by the permuters.
pub mod mask;

/// In-place sub-band permutations
///
/// Cycle-following deinterleave and interleave without a scratch buffer.
pub mod permute;

/// Multi-level forward and inverse transform drivers
pub mod dwt;

/// Checked transform plan
///
/// Validates length, level and mask capacity once at the boundary.
pub mod plan;

/// Sub-band layout helpers
pub mod subband;

/// Multi-channel batch transforms
#[cfg(feature = "std")]
pub mod batch;

pub use dwt::{
    forward_transform, forward_transform_with_mask, inverse_transform,
    inverse_transform_with_mask, STACK_MAX_LEN,
};
pub use length::{validate_length, LengthError};
pub use mask::mask_words;
pub use num::Float;
pub use plan::{DwtError, HaarPlan};
pub use subband::Subband;

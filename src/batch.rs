//! Multi-channel batch transforms.
//!
//! Channels are stored back to back: `data[c * len..(c + 1) * len]` is
//! channel `c`. Every channel is transformed independently with its own stack
//! mask, so with the `parallel` feature the channels are handed to Rayon once
//! there are enough of them to be worth it.
//!
//! The parallel threshold is the minimum channel count. It defaults to the
//! number of CPUs, can be set once through `HAARDSP_PAR_BATCH_THRESHOLD`, and
//! [`set_parallel_batch_threshold`] overrides both at runtime.

use crate::dwt::{forward_transform, inverse_transform};
use crate::num::Float;
use crate::plan::{DwtError, HaarPlan};

#[cfg(feature = "parallel")]
use core::sync::atomic::{AtomicUsize, Ordering};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
static PARALLEL_BATCH_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
#[cfg(feature = "parallel")]
static PARALLEL_BATCH_THRESHOLD: OnceLock<usize> = OnceLock::new();

#[cfg(feature = "parallel")]
fn env_batch_threshold() -> usize {
    *PARALLEL_BATCH_THRESHOLD.get_or_init(|| {
        std::env::var("HAARDSP_PAR_BATCH_THRESHOLD")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&v| v > 0)
            .unwrap_or_else(|| num_cpus::get().max(1))
    })
}

#[cfg(feature = "parallel")]
/// Set the minimum number of channels processed in parallel.
///
/// Passing `0` restores the environment/CPU-count default.
pub fn set_parallel_batch_threshold(channels: usize) {
    PARALLEL_BATCH_THRESHOLD_OVERRIDE.store(channels, Ordering::Relaxed);
}

#[cfg(feature = "parallel")]
/// Current minimum channel count for parallel batch processing.
pub fn parallel_batch_threshold() -> usize {
    match PARALLEL_BATCH_THRESHOLD_OVERRIDE.load(Ordering::Relaxed) {
        0 => env_batch_threshold(),
        n => n,
    }
}

fn checked_plan<T>(data: &[T], channel_len: usize, levels: u32) -> Result<HaarPlan, DwtError> {
    let plan = HaarPlan::new(channel_len)?;
    plan.check_level(levels)?;
    if data.len() % channel_len != 0 {
        return Err(DwtError::BatchLength {
            len: data.len(),
            channel_len,
        });
    }
    if channel_len > crate::dwt::STACK_MAX_LEN {
        return Err(DwtError::MaskCapacity {
            needed: plan.mask_words(),
            available: crate::mask::mask_words(crate::dwt::STACK_MAX_LEN),
        });
    }
    Ok(plan)
}

fn for_each_channel<T, F>(data: &mut [T], channel_len: usize, op: F)
where
    T: Float,
    F: Fn(&mut [T]) + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        let channels = data.len() / channel_len;
        if channels >= parallel_batch_threshold() {
            vlog!(debug, "batch: {} channels in parallel", channels);
            data.par_chunks_exact_mut(channel_len).for_each(|ch| op(ch));
            return;
        }
    }
    data.chunks_exact_mut(channel_len).for_each(op);
}

/// Forward-transform every `channel_len`-sample channel of `data` in place.
pub fn forward_batch<T: Float>(
    data: &mut [T],
    channel_len: usize,
    levels: u32,
) -> Result<(), DwtError> {
    checked_plan(data, channel_len, levels)?;
    for_each_channel(data, channel_len, |ch| forward_transform(ch, levels));
    Ok(())
}

/// Inverse-transform every `channel_len`-sample channel of `data` in place.
pub fn inverse_batch<T: Float>(
    data: &mut [T],
    channel_len: usize,
    levels: u32,
) -> Result<(), DwtError> {
    checked_plan(data, channel_len, levels)?;
    for_each_channel(data, channel_len, |ch| inverse_transform(ch, levels));
    Ok(())
}

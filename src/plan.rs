//! Checked transform plan.
//!
//! [`HaarPlan`] runs the length validation once and then guards every
//! transform call: buffer length, requested level and mask capacity are all
//! checked before the buffer is touched, so a rejected call never leaves a
//! half-transformed signal behind.

use core::fmt;

use crate::dwt::{
    forward_transform_with_mask, inverse_transform_with_mask, STACK_MAX_LEN,
};
use crate::length::{validate_length, LengthError};
use crate::mask::mask_words;
use crate::num::Float;

/// Errors reported by the checked transform APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DwtError {
    /// The signal length failed validation.
    Length(LengthError),
    /// The buffer does not match the planned length.
    BufferLength { expected: usize, actual: usize },
    /// The requested level exceeds `log2(len)`.
    LevelOutOfRange { requested: u32, max: u32 },
    /// Not enough mask words for the planned length.
    MaskCapacity { needed: usize, available: usize },
    /// A batch buffer is not a whole number of channels.
    BatchLength { len: usize, channel_len: usize },
}

impl fmt::Display for DwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DwtError::Length(e) => write!(f, "{}", e),
            DwtError::BufferLength { expected, actual } => {
                write!(f, "buffer holds {} samples, plan expects {}", actual, expected)
            }
            DwtError::LevelOutOfRange { requested, max } => {
                write!(f, "level {} exceeds maximum level {}", requested, max)
            }
            DwtError::MaskCapacity { needed, available } => {
                write!(f, "mask needs {} words, {} available", needed, available)
            }
            DwtError::BatchLength { len, channel_len } => write!(
                f,
                "batch of {} samples is not a multiple of channel length {}",
                len, channel_len
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DwtError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DwtError::Length(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LengthError> for DwtError {
    fn from(e: LengthError) -> Self {
        DwtError::Length(e)
    }
}

/// A validated signal length and its maximum decomposition level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HaarPlan {
    len: usize,
    max_level: u32,
}

impl HaarPlan {
    /// Validate `len` and build a plan for buffers of exactly that length.
    pub fn new(len: usize) -> Result<Self, LengthError> {
        let max_level = validate_length(len)?;
        Ok(Self { len, max_level })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a plan never describes fewer than two samples.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Mask words the `*_with_mask` methods need for this length.
    pub fn mask_words(&self) -> usize {
        mask_words(self.len)
    }

    /// Clamp `requested` into `0..=max_level`.
    pub fn clamp_level(&self, requested: u32) -> u32 {
        requested.min(self.max_level)
    }

    /// Accept `requested` if it lies in `0..=max_level`.
    pub fn check_level(&self, requested: u32) -> Result<u32, DwtError> {
        if requested > self.max_level {
            return Err(DwtError::LevelOutOfRange {
                requested,
                max: self.max_level,
            });
        }
        Ok(requested)
    }

    fn check_buffer<T>(&self, buf: &[T]) -> Result<(), DwtError> {
        if buf.len() != self.len {
            return Err(DwtError::BufferLength {
                expected: self.len,
                actual: buf.len(),
            });
        }
        Ok(())
    }

    fn check_mask(&self, available: usize) -> Result<(), DwtError> {
        let needed = self.mask_words();
        if available < needed {
            return Err(DwtError::MaskCapacity { needed, available });
        }
        Ok(())
    }

    fn check_stack(&self) -> Result<(), DwtError> {
        if self.len > STACK_MAX_LEN {
            return Err(DwtError::MaskCapacity {
                needed: self.mask_words(),
                available: mask_words(STACK_MAX_LEN),
            });
        }
        Ok(())
    }

    /// Checked [`forward_transform`](crate::forward_transform).
    pub fn forward<T: Float>(&self, buf: &mut [T], levels: u32) -> Result<(), DwtError> {
        self.check_stack()?;
        self.check_buffer(buf)?;
        let levels = self.check_level(levels)?;
        crate::dwt::forward_transform(buf, levels);
        Ok(())
    }

    /// Checked [`inverse_transform`](crate::inverse_transform).
    pub fn inverse<T: Float>(&self, buf: &mut [T], levels: u32) -> Result<(), DwtError> {
        self.check_stack()?;
        self.check_buffer(buf)?;
        let levels = self.check_level(levels)?;
        crate::dwt::inverse_transform(buf, levels);
        Ok(())
    }

    /// Checked [`forward_transform_with_mask`](crate::forward_transform_with_mask).
    pub fn forward_with_mask<T: Float>(
        &self,
        buf: &mut [T],
        levels: u32,
        mask: &mut [u32],
    ) -> Result<(), DwtError> {
        self.check_buffer(buf)?;
        self.check_mask(mask.len())?;
        let levels = self.check_level(levels)?;
        forward_transform_with_mask(buf, levels, mask);
        Ok(())
    }

    /// Checked [`inverse_transform_with_mask`](crate::inverse_transform_with_mask).
    pub fn inverse_with_mask<T: Float>(
        &self,
        buf: &mut [T],
        levels: u32,
        mask: &mut [u32],
    ) -> Result<(), DwtError> {
        self.check_buffer(buf)?;
        self.check_mask(mask.len())?;
        let levels = self.check_level(levels)?;
        inverse_transform_with_mask(buf, levels, mask);
        Ok(())
    }
}

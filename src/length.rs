//! Signal length validation.
//!
//! The transform pairs adjacent samples at every level, so the buffer length
//! must halve cleanly all the way down to one. [`validate_length`] checks that
//! once, at the boundary, and reports the deepest level the length supports.

use core::fmt;

/// Reasons a buffer length cannot be transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthError {
    /// Length is 0 or 1; there is nothing to pair.
    ZeroOrOne,
    /// Length is odd; the last sample would have no partner.
    Odd,
    /// Length is even but halving reaches an odd value before reaching 1.
    NotPowerOfTwo,
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthError::ZeroOrOne => write!(f, "length of array cannot be 0 or 1"),
            LengthError::Odd => write!(f, "length of array cannot be odd"),
            LengthError::NotPowerOfTwo => write!(f, "length of array is not a power of 2"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LengthError {}

/// Validate a signal length and return the maximum decomposition level
/// `log2(len)`.
///
/// ```
/// use haardsp::{validate_length, LengthError};
///
/// assert_eq!(validate_length(1024), Ok(10));
/// assert_eq!(validate_length(12), Err(LengthError::NotPowerOfTwo));
/// ```
pub fn validate_length(len: usize) -> Result<u32, LengthError> {
    if len <= 1 {
        return Err(LengthError::ZeroOrOne);
    }
    if len % 2 == 1 {
        return Err(LengthError::Odd);
    }
    let mut max_level = 1;
    let mut rest = len / 2;
    while rest != 1 {
        if rest % 2 == 1 {
            return Err(LengthError::NotPowerOfTwo);
        }
        max_level += 1;
        rest /= 2;
    }
    Ok(max_level)
}

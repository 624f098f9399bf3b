//! Sub-band layout of a transformed buffer.
//!
//! After `levels` forward levels a buffer of `len` samples is partitioned as
//! trend, then fluctuations from the coarsest level down to level 1. The
//! helpers here name those regions without copying anything.

use core::ops::Range;

use crate::num::Float;

/// One contiguous coefficient band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subband {
    /// Approximation left after `level` decompositions.
    Trend { level: u32 },
    /// Detail produced at decomposition `level` (1 is the finest).
    Fluctuation { level: u32 },
}

impl Subband {
    /// Sample range this band occupies in a buffer of `len` samples.
    ///
    /// `Trend { level: k }` is `0..len/2^k` and `Fluctuation { level: k }` is
    /// `len/2^k..len/2^(k-1)`.
    pub fn range(&self, len: usize) -> Range<usize> {
        match *self {
            Subband::Trend { level } => 0..(len >> level),
            Subband::Fluctuation { level } => {
                debug_assert!(level >= 1);
                (len >> level)..(len >> (level - 1))
            }
        }
    }
}

/// Iterator over the bands of a transformed buffer, coarsest first.
#[derive(Debug, Clone)]
pub struct Subbands {
    len: usize,
    levels: u32,
    next: Option<Subband>,
}

impl Iterator for Subbands {
    type Item = (Subband, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let band = self.next?;
        self.next = match band {
            Subband::Trend { .. } if self.levels == 0 => None,
            Subband::Trend { .. } => Some(Subband::Fluctuation { level: self.levels }),
            Subband::Fluctuation { level: 1 } => None,
            Subband::Fluctuation { level } => Some(Subband::Fluctuation { level: level - 1 }),
        };
        Some((band, band.range(self.len)))
    }
}

/// Bands of a `len`-sample buffer after `levels` forward levels.
///
/// ```
/// use haardsp::subband::subbands;
/// use haardsp::Subband;
///
/// let bands: Vec<_> = subbands(8, 2).collect();
/// assert_eq!(bands[0], (Subband::Trend { level: 2 }, 0..2));
/// assert_eq!(bands[1], (Subband::Fluctuation { level: 2 }, 2..4));
/// assert_eq!(bands[2], (Subband::Fluctuation { level: 1 }, 4..8));
/// ```
pub fn subbands(len: usize, levels: u32) -> Subbands {
    Subbands {
        len,
        levels,
        next: Some(Subband::Trend { level: levels }),
    }
}

/// Trend coefficients left after `levels` forward levels.
pub fn trend<T>(buf: &[T], levels: u32) -> &[T] {
    &buf[Subband::Trend { level: levels }.range(buf.len())]
}

/// Fluctuation coefficients produced at decomposition `level` (>= 1).
pub fn fluctuation<T>(buf: &[T], level: u32) -> &[T] {
    &buf[Subband::Fluctuation { level }.range(buf.len())]
}

/// Sum of squares of `buf`; unchanged by the orthogonal transform.
pub fn energy<T: Float>(buf: &[T]) -> T {
    buf.iter().fold(T::zero(), |acc, &x| acc + x * x)
}

//! Index membership mask.
//!
//! Each permutation call tracks which cycle leaders it has already visited so
//! the outer scan does not rotate a cycle twice. The mask needs `span / 4`
//! bits and lives in caller-provided `u32` words; no heap is touched.

const WORD_BITS: usize = u32::BITS as usize;

/// Number of `u32` words a permutation over `span` samples needs.
///
/// ```
/// use haardsp::mask_words;
///
/// assert_eq!(mask_words(2), 0);
/// assert_eq!(mask_words(4), 1);
/// assert_eq!(mask_words(1024), 8);
/// ```
pub const fn mask_words(span: usize) -> usize {
    (span / 4).div_ceil(WORD_BITS)
}

/// A bitset borrowed over a word slice and cleared on construction.
///
/// A zero-bit mask is valid: [`IndexMask::contains`] always answers `false`
/// and [`IndexMask::insert`] does nothing.
#[derive(Debug)]
pub struct IndexMask<'a> {
    words: &'a mut [u32],
    bits: usize,
}

impl<'a> IndexMask<'a> {
    /// Borrow enough of `words` to hold `bits` flags and clear them.
    ///
    /// # Panics
    /// If `words` holds fewer than `bits` flags.
    pub fn new(words: &'a mut [u32], bits: usize) -> Self {
        let needed = bits.div_ceil(WORD_BITS);
        assert!(
            words.len() >= needed,
            "mask needs {} words, got {}",
            needed,
            words.len()
        );
        let words = &mut words[..needed];
        words.fill(0);
        Self { words, bits }
    }

    /// Mask sized for a permutation over `span` samples.
    pub fn for_span(words: &'a mut [u32], span: usize) -> Self {
        Self::new(words, span / 4)
    }

    pub fn bits(&self) -> usize {
        self.bits
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        if idx >= self.bits {
            return false;
        }
        self.words[idx / WORD_BITS] & (1 << (idx % WORD_BITS)) != 0
    }

    #[inline]
    pub fn insert(&mut self, idx: usize) {
        if idx >= self.bits {
            return;
        }
        self.words[idx / WORD_BITS] |= 1 << (idx % WORD_BITS);
    }
}

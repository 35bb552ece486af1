//! Word-alignment layout: how a list of bit fields falls onto fixed-size words.
//!
//! [`WordLayout::compute`] takes a word size and the field widths in order and
//! derives:
//!
//! - the prefix sums of the widths (total bits at each field boundary),
//! - the number of words the fields fill,
//! - for every word end, the prefix index where the cumulative total hits it,
//! - whether every word end falls on a distinct field boundary.
//!
//! ## Boundary sequence
//!
//! [`WordLayout::boundaries`] has `word_count + 1` entries. Entry `k` is the first prefix
//! index whose total equals `(k + 1) * word_size`, i.e. the number of fields
//! that fit in words `0..=k`. When no field boundary lands exactly on that
//! word end, the entry is the not-found sentinel `field_count + 1` (the
//! length of the prefix sequence). The final entry targets one word past the
//! total and is therefore always the sentinel.
//!
//! ```
//! use wordlayout::WordLayout;
//!
//! let layout = WordLayout::compute(32, &[1, 31, 3, 29, 5, 27]).unwrap();
//! assert_eq!(layout.word_count(), 3);
//! assert_eq!(layout.render_boundaries(), "2 4 6 7 ");
//! assert!(layout.is_aligned());
//! ```
//!
//! A total that is not a multiple of the word size is an error; fields that
//! straddle a word end are not. Misalignment is reported through
//! [`WordLayout::is_aligned`] so the caller can pad, pick another word size or
//! reject.
//!
//! A layout is only built by [`WordLayout::compute`]; its fields are read-only
//! and deserializing one recomputes it, so the boundary list always has
//! `word_count + 1` entries. The word count is capped at [`MAX_WORDS`].

#[cfg(feature = "layout_profile")]
use crate::profile::ProfileGuard;

use crate::dump::{self, Spaced};
use crate::error::LayoutError;
use crate::partition;
use crate::prefix::PrefixSum;
use crate::query::{first_equal, is_found};
use std::fmt;
use std::ops::Range;

/// Largest word count [`WordLayout::compute`] accepts. The boundary list
/// holds one `usize` per word plus the sentinel.
pub const MAX_WORDS: u64 = 1 << 24;

/// Result of planning a field list onto words of `word_size` bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawWordLayout")
)]
pub struct WordLayout {
    word_size: u64,
    field_count: usize,
    total_bits: u64,
    word_count: u64,
    prefix: PrefixSum,
    /// Prefix index at each word end; `field_count + 1` when not found.
    boundaries: Vec<usize>,
    alignment_valid: bool,
}

/// Wire form of [`WordLayout`]; only accepted when it equals the recomputed layout.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWordLayout {
    word_size: u64,
    field_count: usize,
    total_bits: u64,
    word_count: u64,
    prefix: PrefixSum,
    boundaries: Vec<usize>,
    alignment_valid: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWordLayout> for WordLayout {
    type Error = LayoutError;

    fn try_from(raw: RawWordLayout) -> Result<Self, LayoutError> {
        let widths = raw.prefix.widths().ok_or(LayoutError::InconsistentLayout)?;
        let layout = WordLayout::compute(raw.word_size, &widths)?;
        let claimed = WordLayout {
            word_size: raw.word_size,
            field_count: raw.field_count,
            total_bits: raw.total_bits,
            word_count: raw.word_count,
            prefix: raw.prefix,
            boundaries: raw.boundaries,
            alignment_valid: raw.alignment_valid,
        };
        if claimed != layout {
            return Err(LayoutError::InconsistentLayout);
        }
        Ok(layout)
    }
}

impl WordLayout {
    /// Plan `widths` onto words of `word_size` bits.
    ///
    /// Fails with [`LayoutError::InvalidWordSize`] for a zero word size, with
    /// [`LayoutError::Divisibility`] when the total is not a whole number of words
    /// and with [`LayoutError::TooManyWords`] past [`MAX_WORDS`].
    pub fn compute(word_size: u64, widths: &[u32]) -> Result<Self, LayoutError> {
        if word_size == 0 {
            return Err(LayoutError::InvalidWordSize);
        }

        let prefix = {
            #[cfg(feature = "layout_profile")]
            let _g = ProfileGuard::new("PrefixSum");
            PrefixSum::build(widths)
        };

        let total_bits = prefix.total();
        let remainder = total_bits % word_size;
        if remainder != 0 {
            return Err(LayoutError::Divisibility {
                total_bits,
                word_size,
                remainder,
            });
        }
        let word_count = total_bits / word_size;
        if word_count > MAX_WORDS {
            return Err(LayoutError::TooManyWords {
                word_count,
                max: MAX_WORDS,
            });
        }

        let boundaries = {
            #[cfg(feature = "layout_profile")]
            let _g = ProfileGuard::new("Boundaries");
            word_boundaries(&prefix, word_size, word_count)
        };

        let alignment_valid = {
            #[cfg(feature = "layout_profile")]
            let _g = ProfileGuard::new("Verdict");
            strictly_increasing(&boundaries)
        };

        Ok(WordLayout {
            word_size,
            field_count: widths.len(),
            total_bits,
            word_count,
            prefix,
            boundaries,
            alignment_valid,
        })
    }

    pub fn word_size(&self) -> u64 {
        self.word_size
    }

    pub fn field_count(&self) -> usize {
        self.field_count
    }

    pub fn total_bits(&self) -> u64 {
        self.total_bits
    }

    pub fn word_count(&self) -> u64 {
        self.word_count
    }

    pub fn prefix(&self) -> &PrefixSum {
        &self.prefix
    }

    /// Prefix index at each word end, `word_count + 1` entries; [`Self::sentinel`]
    /// where no field boundary lands on the word end.
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// True when every word end falls on a distinct field boundary.
    pub fn is_aligned(&self) -> bool {
        self.alignment_valid
    }

    /// The not-found value used in `boundaries`.
    pub fn sentinel(&self) -> usize {
        self.prefix.len()
    }

    /// Words (by index) whose end does not coincide with a field boundary.
    pub fn misaligned_words(&self) -> Vec<usize> {
        self.word_ends()
            .enumerate()
            .filter(|(_, b)| !is_found(self.prefix.as_slice(), **b))
            .map(|(k, _)| k)
            .collect()
    }

    /// Field index range held by each word. `None` when the layout is misaligned.
    pub fn word_field_ranges(&self) -> Option<Vec<Range<usize>>> {
        if !self.alignment_valid {
            return None;
        }
        let mut start = 0;
        let mut out = Vec::with_capacity(self.word_count as usize);
        for &end in self.word_ends() {
            out.push(start..end);
            start = end;
        }
        Some(out)
    }

    /// Split the field indices at the start of word `word`: fields stored in
    /// words before it, and fields from it onward.
    ///
    /// `None` when `word > word_count` or the start of `word` splits a field.
    pub fn split_at_word(&self, word: usize) -> Option<(Vec<usize>, Vec<usize>)> {
        if word as u64 > self.word_count {
            return None;
        }
        let at = match word {
            0 => 0,
            k => *self.boundaries.get(k - 1)?,
        };
        if !is_found(self.prefix.as_slice(), at) {
            return None;
        }
        partition::split(at, self.field_count).ok()
    }

    /// Boundaries of the real words, without the trailing sentinel entry.
    fn word_ends(&self) -> impl Iterator<Item = &usize> {
        self.boundaries.iter().take(self.word_count as usize)
    }

    /// Boundary sequence in the space-terminated debug format, e.g. `"2 4 6 7 "`.
    pub fn render_boundaries(&self) -> String {
        dump::render(&self.boundaries)
    }
}

impl fmt::Display for WordLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "word size: {}", self.word_size)?;
        writeln!(f, "total bits: {}", self.total_bits)?;
        writeln!(f, "word count: {}", self.word_count)?;
        writeln!(f, "field count: {}", self.field_count)?;
        writeln!(f, "prefix: {}", self.prefix)?;
        writeln!(f, "boundaries: {}", Spaced(&self.boundaries))?;
        if let Some(ranges) = self.word_field_ranges() {
            writeln!(f, "words: {}", dump::render_ranges(&ranges))?;
        }
        write!(f, "aligned: {}", self.alignment_valid)
    }
}

/// Bits of trailing padding needed to make `widths` a whole number of words.
pub fn padding_to_next_word(word_size: u64, widths: &[u32]) -> Result<u64, LayoutError> {
    if word_size == 0 {
        return Err(LayoutError::InvalidWordSize);
    }
    let total = PrefixSum::build(widths).total();
    Ok((word_size - total % word_size) % word_size)
}

fn word_boundaries(prefix: &PrefixSum, word_size: u64, word_count: u64) -> Vec<usize> {
    (0..=word_count)
        .map(|k| match (k + 1).checked_mul(word_size) {
            Some(target) => first_equal(prefix.as_slice(), &target),
            None => prefix.len(),
        })
        .collect()
}

fn strictly_increasing(seq: &[usize]) -> bool {
    seq.windows(2).all(|w| w[0] < w[1])
}

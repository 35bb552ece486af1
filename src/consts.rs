//! `const fn` layout checks for width tables known at compile time.
//!
//! These mirror [`crate::WordLayout`] without allocating, so a register or wire
//! definition can assert its layout in a `const` item:
//!
//! ```
//! use wordlayout::consts::{is_word_aligned, word_count};
//!
//! const HEADER: [u32; 4] = [4, 4, 8, 16];
//! const _: () = assert!(is_word_aligned(32, &HEADER));
//! const WORDS: Option<u64> = word_count(32, &HEADER);
//! assert_eq!(WORDS, Some(1));
//! ```

/// Sum of all widths.
pub const fn total_bits(widths: &[u32]) -> u64 {
    let mut acc = 0u64;
    let mut i = 0;
    while i < widths.len() {
        acc += widths[i] as u64;
        i += 1;
    }
    acc
}

/// Number of words the widths fill, or `None` for a zero word size or a
/// total that is not a multiple of it.
pub const fn word_count(word_size: u64, widths: &[u32]) -> Option<u64> {
    if word_size == 0 {
        return None;
    }
    let total = total_bits(widths);
    if total % word_size != 0 {
        return None;
    }
    Some(total / word_size)
}

/// True when the total divides into whole words and every word end falls on
/// a field boundary. Agrees with [`crate::WordLayout::is_aligned`].
pub const fn is_word_aligned(word_size: u64, widths: &[u32]) -> bool {
    if word_count(word_size, widths).is_none() {
        return false;
    }
    let mut acc = 0u64;
    let mut next_end = word_size;
    let mut i = 0;
    while i < widths.len() {
        acc += widths[i] as u64;
        if acc > next_end {
            return false;
        }
        if acc == next_end {
            next_end += word_size;
        }
        i += 1;
    }
    true
}

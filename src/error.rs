//! Error taxonomy for layout computation and sequence queries.
//!
//! "Not found" is deliberately absent: search primitives return the sequence
//! length as a sentinel instead (see [`crate::query`]).

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Total bit count is not a multiple of the word size.
    #[error("total of {total_bits} bits is not divisible by word size {word_size} (remainder {remainder})")]
    Divisibility {
        total_bits: u64,
        word_size: u64,
        remainder: u64,
    },
    /// Direct element access past the end of a sequence.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// `range(min, max)` with `max < min`.
    #[error("invalid range: max {max} is less than min {min}")]
    InvalidRange { min: usize, max: usize },
    /// `split(at, total)` with `at > total`.
    #[error("invalid split: cut point {at} exceeds total {total}")]
    InvalidSplit { at: usize, total: usize },
    #[error("word size must be greater than zero")]
    InvalidWordSize,
    /// The fields fill more words than a layout may hold.
    #[error("{word_count} words exceeds the limit of {max}")]
    TooManyWords { word_count: u64, max: u64 },
    /// A stored layout disagrees with the layout recomputed from its word size and prefix.
    #[error("layout does not match its word size and prefix sums")]
    InconsistentLayout,
}

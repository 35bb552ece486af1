//! # wordlayout — Bit-field word-alignment layout calculator
//!
//! Plans how an ordered list of bit fields packs into fixed-width storage
//! words, for codecs that pack hardware register definitions or wire-format
//! bit-fields. Nothing here touches memory: the output is a layout a codec
//! uses to choose its packing strategy.
//!
//! ## Pieces
//!
//! - [`prefix`]: cumulative bit totals (`[1, 2, 3]` → `[0, 1, 3, 6]`)
//! - [`query`]: `first_equal`, `first_greater`, `value_at`; "not found" is `len`
//! - [`range`]: forward, reversed and rotated index ranges
//! - [`partition`]: split `0..total` at a cut point
//! - [`layout`]: [`WordLayout`], the word count, boundaries and alignment verdict
//! - [`consts`]: `const fn` equivalents for compile-time tables
//! - [`cache`]: memoized layouts
//! - [`dump`]: the `"a b c "` text format used in logs and tests
//!
//! ## Example
//!
//! ```
//! use wordlayout::{LayoutError, WordLayout};
//!
//! let ok = WordLayout::compute(32, &[1, 31, 3, 29, 5, 27]).unwrap();
//! assert!(ok.is_aligned());
//!
//! let straddles = WordLayout::compute(32, &[1, 31, 3, 28, 5, 28]).unwrap();
//! assert!(!straddles.is_aligned());
//! assert_eq!(straddles.misaligned_words(), vec![1]);
//!
//! assert!(matches!(
//!     WordLayout::compute(8, &[4, 4, 4, 4, 4]),
//!     Err(LayoutError::Divisibility { .. })
//! ));
//! ```

pub mod cache;
pub mod consts;
pub mod dump;
pub mod error;
pub mod layout;
pub mod partition;
pub mod prefix;
pub mod profile;
pub mod query;
pub mod range;

pub use cache::LayoutCache;
pub use error::LayoutError;
pub use layout::{padding_to_next_word, WordLayout, MAX_WORDS};
pub use prefix::PrefixSum;
pub use profile::{get_layout_profile, reset_layout_profile};
pub use query::{first_equal, first_greater, is_found, value_at};

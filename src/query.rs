//! Linear search primitives over ordered sequences.
//!
//! Absence is structural: the search functions return `seq.len()` when nothing
//! matches. Callers compare against the length (or use [`is_found`]) rather
//! than handling an error.

use crate::error::LayoutError;

/// Index of the first element equal to `v`, or `seq.len()` if none.
pub fn first_equal<T: PartialEq>(seq: &[T], v: &T) -> usize {
    seq.iter().position(|x| x == v).unwrap_or(seq.len())
}

/// Index of the first element strictly greater than `v`, or `seq.len()` if none.
pub fn first_greater<T: PartialOrd>(seq: &[T], v: &T) -> usize {
    seq.iter().position(|x| x > v).unwrap_or(seq.len())
}

/// Element at `index`, or [`LayoutError::IndexOutOfRange`].
pub fn value_at<T: Copy>(seq: &[T], index: usize) -> Result<T, LayoutError> {
    seq.get(index).copied().ok_or(LayoutError::IndexOutOfRange {
        index,
        len: seq.len(),
    })
}

/// True when `index` came from a search that matched (i.e. is not the sentinel).
#[inline]
pub fn is_found<T>(seq: &[T], index: usize) -> bool {
    index < seq.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_equal_hits_and_misses() {
        let s = [10, 20, 30, 40];
        assert_eq!(first_equal(&s, &10), 0);
        assert_eq!(first_equal(&s, &30), 2);
        assert_eq!(first_equal(&s, &99), 4);
    }

    #[test]
    fn first_equal_first_match_wins() {
        let s = [0, 1, 0, 2];
        assert_eq!(first_equal(&s, &0), 0);
        let s = [0u64, 5, 5, 5];
        assert_eq!(first_equal(&s, &5), 1);
    }

    #[test]
    fn first_greater_strict() {
        let s = [5, 10, 15, 20];
        assert_eq!(first_greater(&s, &7), 1);
        assert_eq!(first_greater(&s, &10), 2);
        assert_eq!(first_greater(&s, &25), 4);
    }

    #[test]
    fn search_empty_returns_zero() {
        let s: [u64; 0] = [];
        assert_eq!(first_equal(&s, &0), 0);
        assert_eq!(first_greater(&s, &0), 0);
        assert!(!is_found(&s, 0));
    }

    #[test]
    fn value_at_bounds() {
        let s = [5, 10, 15, 20];
        assert_eq!(value_at(&s, 0), Ok(5));
        assert_eq!(value_at(&s, 3), Ok(20));
        assert_eq!(
            value_at(&s, 4),
            Err(LayoutError::IndexOutOfRange { index: 4, len: 4 })
        );
    }
}

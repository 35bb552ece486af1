//! Split an index range into two contiguous parts.

use crate::error::LayoutError;
use crate::range::range;

/// `(0..at, at..total)` as index vectors. Fails when `at > total`.
///
/// The two parts never overlap and concatenate back to `0..total`.
pub fn split(at: usize, total: usize) -> Result<(Vec<usize>, Vec<usize>), LayoutError> {
    if at > total {
        return Err(LayoutError::InvalidSplit { at, total });
    }
    Ok((range(0, at)?, range(at, total)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_middle() {
        let (a, b) = split(3, 7).unwrap();
        assert_eq!(a, vec![0, 1, 2]);
        assert_eq!(b, vec![3, 4, 5, 6]);
    }

    #[test]
    fn split_edges() {
        let (a, b) = split(0, 3).unwrap();
        assert!(a.is_empty());
        assert_eq!(b, vec![0, 1, 2]);

        let (a, b) = split(3, 3).unwrap();
        assert_eq!(a, vec![0, 1, 2]);
        assert!(b.is_empty());
    }

    #[test]
    fn split_past_end() {
        assert_eq!(split(4, 3), Err(LayoutError::InvalidSplit { at: 4, total: 3 }));
    }
}

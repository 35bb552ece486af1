//! Index range generators.

use crate::error::LayoutError;

/// `[min, min + 1, .., max - 1]`. Fails when `max < min`.
pub fn range(min: usize, max: usize) -> Result<Vec<usize>, LayoutError> {
    if max < min {
        return Err(LayoutError::InvalidRange { min, max });
    }
    Ok((min..max).collect())
}

/// `[n - 1, n - 2, .., 0]`.
pub fn reverse_range(n: usize) -> Vec<usize> {
    (0..n).rev().collect()
}

/// Elements of `seq` in opposite order.
pub fn reverse<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().rev().cloned().collect()
}

/// `[1, 2, .., n - 1, 0]`: `0..n` rotated left by one, so each entry names the
/// next index and the last wraps to 0.
pub fn rotate_with_zero_tail(n: usize) -> Vec<usize> {
    (0..n).map(|i| (i + 1) % n).collect()
}

//! Cumulative bit totals over a field-width list.

use crate::dump::Spaced;
use crate::error::LayoutError;
use crate::query;
use std::fmt;
use std::ops::Deref;

/// Exclusive prefix sums of field widths: `prefix[0] = 0`, `prefix[i + 1] = prefix[i] + width[i]`.
///
/// Always holds `field_count + 1` entries, so the grand total sits at index
/// `field_count`. Widths are `u32` and totals `u64`, which cannot overflow for
/// any width slice that fits in memory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct PrefixSum {
    totals: Vec<u64>,
}

impl PrefixSum {
    pub fn build(widths: &[u32]) -> Self {
        let mut totals = Vec::with_capacity(widths.len() + 1);
        let mut acc = 0u64;
        totals.push(acc);
        for &w in widths {
            acc += u64::from(w);
            totals.push(acc);
        }
        PrefixSum { totals }
    }

    pub fn value_at(&self, index: usize) -> Result<u64, LayoutError> {
        query::value_at(&self.totals, index)
    }

    /// Sum of all widths (the last entry).
    pub fn total(&self) -> u64 {
        // build() always pushes the leading zero
        self.totals.last().copied().unwrap_or(0)
    }

    /// Number of fields the sums were built from.
    pub fn field_count(&self) -> usize {
        self.totals.len().saturating_sub(1)
    }

    /// Recover the widths the sums were built from. `None` unless the first
    /// entry is zero and every step fits a `u32` width.
    pub fn widths(&self) -> Option<Vec<u32>> {
        if self.totals.first() != Some(&0) {
            return None;
        }
        self.totals
            .windows(2)
            .map(|w| w[1].checked_sub(w[0]).and_then(|d| u32::try_from(d).ok()))
            .collect()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.totals
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.totals
    }
}

impl Deref for PrefixSum {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.totals
    }
}

impl fmt::Display for PrefixSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Spaced(&self.totals).fmt(f)
    }
}

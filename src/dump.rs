//! Text rendering of sequences and layouts for logs and test comparison.
//!
//! Sequences render in base 10, each element followed by a single space, so
//! `[0, 1, 3, 6, 10]` becomes `"0 1 3 6 10 "` and an empty sequence becomes `""`.
//! The trailing space is part of the format.

use std::fmt;

/// Display adapter for a slice in the space-terminated debug format.
pub struct Spaced<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Spaced<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.0 {
            write!(f, "{} ", v)?;
        }
        Ok(())
    }
}

/// Render a sequence as `"a b c "`.
pub fn render<T: fmt::Display>(seq: &[T]) -> String {
    Spaced(seq).to_string()
}

/// Render a list of half-open field ranges as `"[0..2) [2..4) "`.
pub fn render_ranges(ranges: &[std::ops::Range<usize>]) -> String {
    let mut out = String::new();
    for r in ranges {
        out.push_str(&format!("[{}..{}) ", r.start, r.end));
    }
    out
}

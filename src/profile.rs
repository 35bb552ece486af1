//! Per-stage timing for layout computation.
//!
//! Enable the **`layout_profile`** feature and use [`reset_layout_profile`] /
//! [`get_layout_profile`] to get a per-stage breakdown (label → nanoseconds).
//! Labels are `"PrefixSum"`, `"Boundaries"` and `"Verdict"`. Without the
//! feature every function here is a no-op and the map is always empty.
//!
//! Stats are thread-local: a layout computed on another thread is recorded there.

use std::collections::HashMap;

#[cfg(feature = "layout_profile")]
use std::cell::RefCell;
#[cfg(feature = "layout_profile")]
use std::time::Instant;

#[cfg(feature = "layout_profile")]
#[derive(Default)]
struct LayoutProfileStats {
    ns_per_label: HashMap<String, u64>,
}

#[cfg(feature = "layout_profile")]
thread_local!(static LAYOUT_PROFILE: RefCell<LayoutProfileStats> = RefCell::new(LayoutProfileStats::default()));

#[cfg(feature = "layout_profile")]
fn record_layout_profile(label: &'static str, d: std::time::Duration) {
    LAYOUT_PROFILE.with(|p| {
        let mut st = p.borrow_mut();
        *st.ns_per_label.entry(label.to_string()).or_insert(0) += d.as_nanos() as u64;
    });
}

/// Resets accumulated layout profile stats for the current thread.
#[cfg(feature = "layout_profile")]
pub fn reset_layout_profile() {
    LAYOUT_PROFILE.with(|p| *p.borrow_mut() = LayoutProfileStats::default());
}

/// Returns accumulated layout profile: label → total nanoseconds.
#[cfg(feature = "layout_profile")]
pub fn get_layout_profile() -> HashMap<String, u64> {
    LAYOUT_PROFILE.with(|p| p.borrow().ns_per_label.clone())
}

#[cfg(not(feature = "layout_profile"))]
/// No-op when the `layout_profile` feature is not enabled.
pub fn reset_layout_profile() {}

#[cfg(not(feature = "layout_profile"))]
/// Returns an empty map when the `layout_profile` feature is not enabled.
pub fn get_layout_profile() -> HashMap<String, u64> {
    HashMap::new()
}

/// Records elapsed time under `label` when dropped.
#[cfg(feature = "layout_profile")]
pub(crate) struct ProfileGuard {
    label: &'static str,
    start: Instant,
}

#[cfg(feature = "layout_profile")]
impl ProfileGuard {
    pub(crate) fn new(label: &'static str) -> Self {
        Self { label, start: Instant::now() }
    }
}

#[cfg(feature = "layout_profile")]
impl Drop for ProfileGuard {
    fn drop(&mut self) {
        record_layout_profile(self.label, self.start.elapsed());
    }
}

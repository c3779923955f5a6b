//! Global configuration for the overlap-predicate variant.
//!
//! This mirrors a read-mostly, hot-loop-friendly global flag rather than a
//! config file or environment variable: the sweep kernel reads it once per
//! call (never inside the inner candidate loop), so the atomic load has
//! negligible overhead compared to the sweep itself.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag selecting the overlap-predicate variant.
///
/// When `true` (the default), the kernel uses the "safe" variant: `<=`
/// comparisons throughout, so boxes touching exactly along a face are
/// reported as overlapping. When `false`, it uses the "non-safe" variant
/// with strict inequalities, so face-touching boxes are not reported. The
/// safe variant is the spec's reference behavior.
static SAFE_VARIANT: AtomicBool = AtomicBool::new(true);

/// Select the safe (`<=`, face-touching overlaps) overlap predicate.
///
/// Set once at startup before any pruning call; changing it mid-call has no
/// defined effect on that in-flight call.
#[inline]
pub fn set_safe_variant(enabled: bool) {
    SAFE_VARIANT.store(enabled, Ordering::Release);
}

/// Check whether the safe overlap-predicate variant is currently selected.
#[inline]
pub fn is_safe_variant() -> bool {
    SAFE_VARIANT.load(Ordering::Acquire)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_safe() {
        set_safe_variant(true);
        assert!(is_safe_variant());
    }

    #[test]
    fn test_toggle_non_safe() {
        set_safe_variant(false);
        assert!(!is_safe_variant());
        set_safe_variant(true);
    }
}

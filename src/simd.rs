//! The 4-lane overlap predicate: one SIMD compare plus one movemask per
//! candidate.
//!
//! Two boxes overlap on Y and Z iff `self.min_y <= other.max_y &&
//! self.max_y >= other.min_y && self.min_z <= other.max_z && self.max_z >=
//! other.min_z`. In the safe variant this is expressed as a single
//! `not-greater-than` compare between an operand built once per outer
//! iteration from the current box's own record negated,
//! `(-max_y, -max_z, -min_y, -min_z)`, and the loaded candidate record
//! `(-min_y', -min_z', max_y', max_z')`. All four lanes must report
//! "not greater" (movemask `0b0000`) for the boxes to overlap.
//!
//! Runtime dispatch keeps the hot path branch-free after the first call: a
//! safe public entry point probes CPU features once, caches the result in an
//! atomic, and calls into an `unsafe fn` tagged with
//! `#[target_feature(enable = "...")]`, falling back to a scalar
//! implementation that is numerically identical lane-for-lane.

use crate::layout::YzRecord;

/// A 4-lane operand built once per outer sweep iteration from the current
/// box's YZ record, ready to be compared against every YZ candidate in the
/// inner loop.
#[derive(Clone, Copy)]
pub struct Operand {
    lanes: [f32; 4],
    safe: bool,
}

impl Operand {
    /// Build the operand for box `self_box`.
    ///
    /// Safe variant: the whole stored record negated, `(-max_y, -max_z,
    /// -min_y, -min_z)` (recall `y_lo`/`z_lo` already hold `-min_y`/`-min_z`
    /// in this variant), compared "not greater than" against the candidate's
    /// own stored record `(-min_y', -min_z', max_y', max_z')`.
    /// Non-safe variant: plain `(max_y, max_z, min_y, min_z)`, compared with
    /// "not less-equal" against `(min_y', min_z', max_y', max_z')` and a
    /// movemask of `12` (only lanes 2,3 carry real comparisons; lanes 0,1
    /// are a non-strict pass-through, which is why this variant excludes
    /// face-touching on Z/Y-max but not on Y/Z-min — an asymmetry inherent
    /// to the bit encoding, not a bug to symmetrize).
    #[inline]
    pub fn from_box(self_box: &YzRecord, safe: bool) -> Self {
        if safe {
            Self {
                lanes: [-self_box.y_hi, -self_box.z_hi, -self_box.y_lo, -self_box.z_lo],
                safe: true,
            }
        } else {
            Self {
                lanes: [self_box.y_hi, self_box.z_hi, self_box.y_lo, self_box.z_lo],
                safe: false,
            }
        }
    }

    /// Test the operand against one candidate YZ record. Dispatches to the
    /// best available backend for the current CPU, falling back to a
    /// scalar implementation on platforms/features without one.
    #[inline]
    pub fn overlaps(&self, candidate: &YzRecord) -> bool {
        dispatch::overlaps(self, candidate)
    }
}

/// Scalar reference implementation, used as the fallback and as the oracle
/// tests compare SIMD backends against.
#[inline]
fn overlaps_scalar(op: &Operand, candidate: &YzRecord) -> bool {
    let c = [candidate.y_lo, candidate.z_lo, candidate.y_hi, candidate.z_hi];
    if op.safe {
        // not-greater-than across all 4 lanes: lanes[l] <= c[l] everywhere.
        op.lanes[0] <= c[0] && op.lanes[1] <= c[1] && op.lanes[2] <= c[2] && op.lanes[3] <= c[3]
    } else {
        // not-less-equal, movemask 12: bits 0,1 clear (c <= lanes) and bits
        // 2,3 set (c > lanes). Asymmetric strictness per axis is exactly
        // what the reference movemask-12 encoding produces.
        c[0] <= op.lanes[0] && c[1] <= op.lanes[1] && c[2] > op.lanes[2] && c[3] > op.lanes[3]
    }
}

#[cfg(target_arch = "x86_64")]
mod dispatch {
    use super::*;
    use std::arch::x86_64::*;
    use std::sync::atomic::{AtomicU8, Ordering};

    const UNINIT: u8 = 0;
    const SSE2: u8 = 1;
    const SCALAR: u8 = 2;

    static BACKEND: AtomicU8 = AtomicU8::new(UNINIT);

    #[inline]
    fn backend() -> u8 {
        let cached = BACKEND.load(Ordering::Relaxed);
        if cached != UNINIT {
            return cached;
        }
        let detected = if is_x86_feature_detected!("sse2") {
            SSE2
        } else {
            SCALAR
        };
        BACKEND.store(detected, Ordering::Relaxed);
        detected
    }

    #[inline]
    pub(super) fn overlaps(op: &Operand, candidate: &YzRecord) -> bool {
        match backend() {
            SSE2 => unsafe { overlaps_sse2(op, candidate) },
            _ => overlaps_scalar(op, candidate),
        }
    }

    /// # Safety
    /// Caller must ensure SSE2 is available; `backend()` only returns `SSE2`
    /// after `is_x86_feature_detected!("sse2")` has confirmed it.
    #[target_feature(enable = "sse2")]
    unsafe fn overlaps_sse2(op: &Operand, candidate: &YzRecord) -> bool {
        let b = _mm_loadu_ps(op.lanes.as_ptr());
        let cand = _mm_loadu_ps(&candidate.y_lo as *const f32);
        if op.safe {
            // not-greater-than: !(b > cand), all four lanes.
            let gt = _mm_cmpgt_ps(b, cand);
            _mm_movemask_ps(gt) == 0
        } else {
            // not-less-equal, movemask 12: lanes 0,1 must hold (<=), lanes
            // 2,3 must not (>).
            let le = _mm_cmple_ps(cand, b);
            _mm_movemask_ps(le) == 0b0011
        }
    }
}

#[cfg(target_arch = "aarch64")]
mod dispatch {
    use super::*;
    use std::arch::aarch64::*;

    #[inline]
    pub(super) fn overlaps(op: &Operand, candidate: &YzRecord) -> bool {
        unsafe { overlaps_neon(op, candidate) }
    }

    #[target_feature(enable = "neon")]
    unsafe fn overlaps_neon(op: &Operand, candidate: &YzRecord) -> bool {
        let b = vld1q_f32(op.lanes.as_ptr());
        let cand = vld1q_f32(&candidate.y_lo as *const f32);
        if op.safe {
            let gt = vcgtq_f32(b, cand);
            vmaxvq_u32(gt) == 0
        } else {
            // Lanes 0,1 must be `<=` (true), lanes 2,3 must not (false).
            let le = vcleq_f32(cand, b);
            vgetq_lane_u32(le, 0) != 0
                && vgetq_lane_u32(le, 1) != 0
                && vgetq_lane_u32(le, 2) == 0
                && vgetq_lane_u32(le, 3) == 0
        }
    }
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
mod dispatch {
    use super::*;

    #[inline]
    pub(super) fn overlaps(op: &Operand, candidate: &YzRecord) -> bool {
        overlaps_scalar(op, candidate)
    }
}

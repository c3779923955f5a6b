//! The sweep kernel itself: advance a running index along the sorted X
//! axis, test candidates with the SIMD YZ predicate, emit overlapping
//! pairs. Everything upstream (sort, layout) exists to feed this loop a
//! sentinel-terminated, X-sorted parallel array; everything downstream
//! (the public entry points in `lib.rs`) exists to build that array and
//! translate sorted-order indices back to the caller's own.

use crate::config;
use crate::layout::SortedLayout;
use crate::simd::Operand;
use crate::sink::PairSink;

/// Single-set sweep: every unordered overlapping pair within `layout`.
///
/// The running address is shared across the entire outer loop rather than
/// reset per iteration, and its advance always consumes at least one
/// element per outer iteration. By the time the inner candidate loop
/// starts, the running address has therefore already passed the outer
/// box's own slot. That is what guarantees no self-pair is ever emitted,
/// without an explicit `candidate_index != i` check on the hot path.
pub(crate) fn sweep_complete(layout: &SortedLayout, sink: &mut impl PairSink) {
    let n = layout.len();
    if n == 0 {
        return;
    }
    let safe = config::is_safe_variant();
    let x = &layout.x;
    let yz = &layout.yz;
    let remap = &layout.remap;

    let mut running_address = 0usize;
    let mut i = 0usize;
    while running_address < n && i < n {
        let min_limit = x[i].min_x;
        loop {
            let candidate = running_address;
            running_address += 1;
            if x[candidate].min_x >= min_limit {
                break;
            }
        }

        let op = Operand::from_box(&yz[i], safe);
        let max_limit = x[i].max_x;
        let self_index = remap[i];

        let mut offset = running_address;
        while x[offset].min_x <= max_limit {
            if op.overlaps(&yz[offset]) {
                sink.push(self_index, remap[offset]);
            }
            offset += 1;
        }

        i += 1;
    }
}

/// Two-set sweep: every ordered overlapping pair `(a_index, b_index)`
/// between `a` and `b`.
///
/// Two passes over the same two sorted arrays, each driven from a
/// different side, with asymmetric advance predicates (strict `<` walking
/// from `a`, non-strict `<=` walking from `b`). On a tie in `min_x`
/// between an `a` box and a `b` box, pass one's strict advance stops
/// short of the tied `b` box — leaving it for pass one's own inner loop
/// to test as a forward candidate — while pass two's non-strict advance
/// skips past the tied `a` box, relying on pass one to have already
/// covered it. The asymmetry is exactly what makes a tied pair surface
/// exactly once instead of zero or two times.
pub(crate) fn sweep_bipartite(a: &SortedLayout, b: &SortedLayout, sink: &mut impl PairSink) {
    let na = a.len();
    let nb = b.len();
    if na == 0 || nb == 0 {
        return;
    }
    let safe = config::is_safe_variant();

    {
        let mut running_address = 0usize;
        let mut i = 0usize;
        while running_address < nb && i < na {
            let min_limit = a.x[i].min_x;
            while b.x[running_address].min_x < min_limit {
                running_address += 1;
            }

            let op = Operand::from_box(&a.yz[i], safe);
            let max_limit = a.x[i].max_x;
            let a_index = a.remap[i];

            let mut offset = running_address;
            while b.x[offset].min_x <= max_limit {
                if op.overlaps(&b.yz[offset]) {
                    sink.push(a_index, b.remap[offset]);
                }
                offset += 1;
            }

            i += 1;
        }
    }

    {
        let mut running_address = 0usize;
        let mut j = 0usize;
        while running_address < na && j < nb {
            let min_limit = b.x[j].min_x;
            while a.x[running_address].min_x <= min_limit {
                running_address += 1;
            }

            let op = Operand::from_box(&b.yz[j], safe);
            let max_limit = b.x[j].max_x;
            let b_index = b.remap[j];

            let mut offset = running_address;
            while a.x[offset].min_x <= max_limit {
                if op.overlaps(&a.yz[offset]) {
                    sink.push(a.remap[offset], b_index);
                }
                offset += 1;
            }

            j += 1;
        }
    }
}

//! The sort driver: extracts primary-axis minima, appends the `+inf`
//! sentinel, and returns a rank permutation.
//!
//! The only contract on the sort is: given `values[0..N]` plus a sentinel
//! `values[N] = +inf`, produce ranks such that `values[ranks[i]]` is
//! non-decreasing, with `ranks[N] = N`. No stability is required. Below a
//! size threshold a plain unstable comparison sort is used, since radix's
//! fixed per-pass overhead isn't worth paying for small inputs; above it, an
//! LSD radix sort over the monotonic bit-pattern of `f32` avoids the
//! `O(n log n)` comparison-sort cost entirely, reusing its scratch buffers
//! across calls on the same thread.

/// Minimum element count before the radix sort is used over a plain
/// comparison sort. Below this, radix's fixed per-pass overhead outweighs
/// the benefit of linear-time sorting.
const RADIX_THRESHOLD: usize = 256;

/// Map an `f32` to a `u32` such that the ordering of the `u32` values
/// matches the IEEE-754 total order of the floats (for non-NaN inputs).
///
/// Standard branchless transform: if the sign bit is set (negative), flip
/// all bits; otherwise flip only the sign bit. This pushes `+inf`'s bit
/// pattern to the maximum `u32` value, so the sentinel always sorts last
/// without any special-cased comparison in the hot sort loop.
#[inline]
fn sortable_bits(v: f32) -> u32 {
    let bits = v.to_bits();
    let mask = (((bits as i32) >> 31) as u32) | 0x8000_0000;
    bits ^ mask
}

/// Produce a rank permutation of `boxes` by ascending `min_x`, with an
/// implicit `+inf` sentinel appended at position `boxes.len()`.
///
/// Returns `boxes.len() + 1` ranks: `ranks[i]` is the original index of the
/// `i`-th box in ascending-`min_x` order for `i < boxes.len()`, and
/// `ranks[boxes.len()] == boxes.len()` addresses the sentinel slot.
pub fn rank_by_min_x(boxes: &[crate::aabb::Aabb]) -> Vec<u32> {
    let n = boxes.len();
    let mut ranks: Vec<u32> = (0..=n as u32).collect();

    if n < RADIX_THRESHOLD {
        ranks[..n].sort_unstable_by(|&a, &b| {
            boxes[a as usize]
                .min_x()
                .partial_cmp(&boxes[b as usize].min_x())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    } else {
        let keys: Vec<u32> = boxes.iter().map(|b| sortable_bits(b.min_x())).collect();
        radix_sort_ranks(&keys, &mut ranks[..n]);
    }

    ranks
}

thread_local! {
    // Scratch buffers for `radix_sort_ranks`, kept per-thread and reused
    // call to call instead of reallocated, avoiding a fresh allocation on
    // every pruning call. Scoped per-thread rather than process-global so
    // it stays safe under `batch`'s one-rayon-task-per-scene parallelism.
    static RADIX_SCRATCH: std::cell::RefCell<(Vec<u32>, Vec<u32>)> =
        const { std::cell::RefCell::new((Vec::new(), Vec::new())) };
}

/// LSD radix sort of `ranks` (a permutation of `0..keys.len()`) by
/// `keys[ranks[i]]`, 4 passes of 8-bit buckets over the `u32` keys.
fn radix_sort_ranks(keys: &[u32], ranks: &mut [u32]) {
    let n = ranks.len();

    RADIX_SCRATCH.with(|scratch| {
        let mut scratch = scratch.borrow_mut();
        let (src, dst) = &mut *scratch;

        src.clear();
        src.extend_from_slice(ranks);
        dst.clear();
        dst.resize(n, 0);

        for shift in (0u32..32).step_by(8) {
            let mut counts = [0usize; 257];
            for &idx in src.iter() {
                let bucket = ((keys[idx as usize] >> shift) & 0xFF) as usize;
                counts[bucket + 1] += 1;
            }
            for i in 1..counts.len() {
                counts[i] += counts[i - 1];
            }
            for &idx in src.iter() {
                let bucket = ((keys[idx as usize] >> shift) & 0xFF) as usize;
                dst[counts[bucket]] = idx;
                counts[bucket] += 1;
            }
            std::mem::swap(src, dst);
        }

        ranks.copy_from_slice(src);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aabb::Aabb;

    fn unit_box_at_x(x: f32) -> Aabb {
        Aabb::new([x, 0.0, 0.0], [x + 1.0, 1.0, 1.0])
    }

    #[test]
    fn test_rank_small_is_sorted() {
        let boxes = vec![unit_box_at_x(3.0), unit_box_at_x(1.0), unit_box_at_x(2.0)];
        let ranks = rank_by_min_x(&boxes);
        assert_eq!(ranks.len(), 4);
        assert_eq!(ranks[3], 3);
        let sorted_mins: Vec<f32> = ranks[..3]
            .iter()
            .map(|&r| boxes[r as usize].min_x())
            .collect();
        assert_eq!(sorted_mins, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_rank_large_uses_radix_and_matches_comparison_sort() {
        let boxes: Vec<Aabb> = (0..1000u32)
            .map(|i| unit_box_at_x((i.wrapping_mul(2654435761) % 100000) as f32 * 0.01))
            .collect();

        let ranks = rank_by_min_x(&boxes);
        assert_eq!(ranks.len(), 1001);
        assert_eq!(ranks[1000], 1000);

        for w in ranks[..1000].windows(2) {
            assert!(boxes[w[0] as usize].min_x() <= boxes[w[1] as usize].min_x());
        }
    }

    #[test]
    fn test_sentinel_sorts_last_with_negative_values() {
        let boxes = vec![
            unit_box_at_x(-5.0),
            unit_box_at_x(0.0),
            unit_box_at_x(-100.0),
        ];
        let ranks = rank_by_min_x(&boxes);
        assert_eq!(ranks[3], 3);
        assert_eq!(boxes[ranks[0] as usize].min_x(), -100.0);
        assert_eq!(boxes[ranks[2] as usize].min_x(), 0.0);
    }

    #[test]
    fn test_sortable_bits_preserve_order() {
        let values = [-100.0f32, -1.0, -0.0, 0.0, 1.0, 100.0, f32::INFINITY];
        let mut bits: Vec<u32> = values.iter().map(|&v| sortable_bits(v)).collect();
        let mut sorted_bits = bits.clone();
        sorted_bits.sort_unstable();
        bits.sort_unstable();
        assert_eq!(bits, sorted_bits);
        // -0.0 and 0.0 aren't folded to equal keys by this transform, but
        // they must land immediately adjacent to each other.
        let (neg_zero, pos_zero) = (sortable_bits(-0.0), sortable_bits(0.0));
        assert_eq!(neg_zero + 1, pos_zero);
    }
}

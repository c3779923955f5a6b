//! Parallel-array SoA layout built from a sorted permutation of boxes.
//!
//! The decomposition into a tight 8-byte X stream and a 16-byte-aligned YZ
//! stream is the central design decision of the kernel: the sweep's outer
//! termination test only ever touches `min_x`/`max_x`, so
//! keeping those two floats in their own dense array lets that test stream
//! through cache at maximum density, while the YZ record — touched only
//! once the X test has already passed — lives in a second stream loaded on
//! demand.

use crate::aabb::Aabb;
use crate::config;

/// 8-byte interval record on the primary (X) axis.
///
/// `sizeof(XRecord) == 8` is load-bearing: the inner loop advances the X and
/// YZ streams by offsets related by a fixed factor of two.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct XRecord {
    pub min_x: f32,
    pub max_x: f32,
}

/// 16-byte-aligned plane record on the Y/Z axes.
///
/// In the safe variant (the default, see [`crate::config`]), `y_lo` and
/// `z_lo` hold the *negation* of the original `min_y`/`min_z`, so the hot
/// loop's SIMD compare needs no per-candidate sign flip.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C, align(16))]
pub struct YzRecord {
    pub y_lo: f32,
    pub z_lo: f32,
    pub y_hi: f32,
    pub z_hi: f32,
}

impl YzRecord {
    #[inline]
    fn from_aabb(b: &Aabb, safe: bool) -> Self {
        if safe {
            Self {
                y_lo: -b.min[1],
                z_lo: -b.min[2],
                y_hi: b.max[1],
                z_hi: b.max[2],
            }
        } else {
            Self {
                y_lo: b.min[1],
                z_lo: b.min[2],
                y_hi: b.max[1],
                z_hi: b.max[2],
            }
        }
    }
}

/// The sorted parallel-array layout consumed by the sweep kernel.
///
/// Built once per pruning call from an input box slice and a permutation
/// produced by [`crate::sort`], and released when the call returns.
/// `x`/`yz` hold `n + 1` records each: the first `n` in ascending `min_x`
/// order, plus a trailing sentinel with `x[n].min_x == f32::INFINITY` so
/// the sweep's inner loop can terminate on a plain comparison instead of a
/// bounds check. `remap[i]` is the original index of the `i`-th box in
/// sorted order, used to translate sweep output back to caller indices.
pub struct SortedLayout {
    pub x: Vec<XRecord>,
    pub yz: Vec<YzRecord>,
    pub remap: Vec<u32>,
}

impl SortedLayout {
    /// Number of real (non-sentinel) boxes.
    #[inline]
    pub fn len(&self) -> usize {
        self.remap.len()
    }

    /// Build the layout for `boxes`, ranked by `ranks` (a permutation of
    /// `0..boxes.len()`, as produced by [`crate::sort::rank_by_min_x`]).
    ///
    /// Appends the `+inf` sentinel record at position `n`; the matching YZ
    /// sentinel slot is allocated but never meaningfully initialized, since
    /// the inner loop never reads YZ past where the X sentinel has already
    /// terminated it.
    pub fn build(boxes: &[Aabb], ranks: &[u32]) -> Self {
        let n = boxes.len();
        let safe = config::is_safe_variant();

        let mut x = Vec::with_capacity(n + 1);
        let mut yz = Vec::with_capacity(n + 1);
        let mut remap = Vec::with_capacity(n);

        for &sorted_index in &ranks[..n] {
            let b = &boxes[sorted_index as usize];
            x.push(XRecord {
                min_x: b.min[0],
                max_x: b.max[0],
            });
            yz.push(YzRecord::from_aabb(b, safe));
            remap.push(sorted_index);
        }

        x.push(XRecord {
            min_x: f32::INFINITY,
            max_x: f32::INFINITY,
        });
        // Sentinel YZ slot: never read (the X sentinel always terminates the
        // inner loop first), but present so that yz.len() == x.len().
        yz.push(YzRecord {
            y_lo: 0.0,
            z_lo: 0.0,
            y_hi: 0.0,
            z_hi: 0.0,
        });

        Self { x, yz, remap }
    }
}

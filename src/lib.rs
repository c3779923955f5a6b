#![allow(clippy::too_many_arguments)]

//! Box pruning: sweep-and-prune broad-phase collision detection over sets
//! of 3D axis-aligned bounding boxes.
//!
//! Two entry points:
//!
//! - [`complete_box_pruning`]: every overlapping unordered pair within one
//!   set of boxes.
//! - [`bipartite_box_pruning`]: every overlapping ordered pair between two
//!   disjoint sets.
//!
//! Both sort the input once along the X axis, sweep a running index
//! forward with the X interval as a cheap reject, and fall back to a
//! 4-lane SIMD compare on the Y/Z plane only for candidates that already
//! passed the X test. See [`config`] for the safe/non-safe overlap
//! predicate toggle.
//!
//! # Example
//!
//! ```rust
//! use box_pruning::{complete_box_pruning, Aabb};
//!
//! let boxes = vec![
//!     Aabb::new([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]),
//!     Aabb::new([1.0, 1.0, 1.0], [3.0, 3.0, 3.0]),
//!     Aabb::new([10.0, 10.0, 10.0], [12.0, 12.0, 12.0]),
//! ];
//! let mut pairs: Vec<(u32, u32)> = Vec::new();
//! complete_box_pruning(&boxes, &mut pairs).unwrap();
//! assert_eq!(pairs, vec![(0, 1)]);
//! ```

pub mod aabb;
pub mod batch;
pub mod config;
pub mod error;
mod layout;
mod simd;
pub mod sink;
mod sort;
mod sweep;

pub use aabb::Aabb;
pub use error::{PruningError, Result};
pub use sink::PairSink;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Every overlapping unordered pair within one set of boxes.
///
/// `N = 0` and `N = 1` are trivial successes with no pairs emitted.
/// Indices pushed to `sink` are positions into `boxes`, always with the
/// lower index first; no pair `(i, i)` is ever emitted.
///
/// Behavior is undefined (not checked, may emit nonsense pairs or panic
/// on a dangling comparison) if any box has `min > max` on any axis or a
/// NaN coordinate.
pub fn complete_box_pruning(boxes: &[Aabb], sink: &mut impl PairSink) -> Result<()> {
    if boxes.len() < 2 {
        return Ok(());
    }
    let ranks = sort::rank_by_min_x(boxes);
    let layout = layout::SortedLayout::build(boxes, &ranks);
    sweep::sweep_complete(&layout, sink);
    Ok(())
}

/// Every overlapping ordered pair `(a_index, b_index)` between disjoint
/// sets `a` and `b`.
///
/// Returns [`PruningError::EmptyOrMissingInput`] if either `a` or `b` is
/// empty; callers that want "no pairs" instead of an error on an empty
/// set should check lengths before calling.
///
/// Behavior is undefined under the same geometry conditions as
/// [`complete_box_pruning`].
pub fn bipartite_box_pruning(a: &[Aabb], b: &[Aabb], sink: &mut impl PairSink) -> Result<()> {
    if a.is_empty() {
        return Err(PruningError::EmptyOrMissingInput("a"));
    }
    if b.is_empty() {
        return Err(PruningError::EmptyOrMissingInput("b"));
    }
    let ranks_a = sort::rank_by_min_x(a);
    let ranks_b = sort::rank_by_min_x(b);
    let layout_a = layout::SortedLayout::build(a, &ranks_a);
    let layout_b = layout::SortedLayout::build(b, &ranks_b);
    sweep::sweep_bipartite(&layout_a, &layout_b, sink);
    Ok(())
}

/// Convenience re-exports for the crate's whole public surface.
pub mod prelude {
    pub use crate::batch::{prune_many_bipartite, prune_many_complete};
    pub use crate::config::{is_safe_variant, set_safe_variant};
    pub use crate::{bipartite_box_pruning, complete_box_pruning, Aabb, PairSink, PruningError};
}

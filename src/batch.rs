//! Rayon-based wrapper for pruning many independent scenes at once.
//!
//! Each scene is pruned by the single-threaded core kernel exactly as a
//! standalone call would; the parallelism here is strictly across scenes,
//! never inside one, via a plain `par_iter().map().collect()` fan-out so
//! each scene keeps its own output buffer and scenes never contend on a
//! shared one.

use rayon::prelude::*;

use crate::aabb::Aabb;
use crate::error::Result;
use crate::{bipartite_box_pruning, complete_box_pruning};

/// Run [`crate::complete_box_pruning`] over each scene in `scenes`,
/// independently and in parallel, preserving input order in the result.
pub fn prune_many_complete(scenes: &[Vec<Aabb>]) -> Vec<Result<Vec<(u32, u32)>>> {
    scenes
        .par_iter()
        .map(|boxes| {
            let mut sink = Vec::new();
            complete_box_pruning(boxes, &mut sink)?;
            Ok(sink)
        })
        .collect()
}

/// Run [`crate::bipartite_box_pruning`] over each `(a, b)` scene pair,
/// independently and in parallel, preserving input order in the result.
pub fn prune_many_bipartite(scenes: &[(Vec<Aabb>, Vec<Aabb>)]) -> Vec<Result<Vec<(u32, u32)>>> {
    scenes
        .par_iter()
        .map(|(a, b)| {
            let mut sink = Vec::new();
            bipartite_box_pruning(a, b, &mut sink)?;
            Ok(sink)
        })
        .collect()
}

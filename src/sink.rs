//! The output collaborator: callers choose how overlapping pairs are
//! collected, so the kernel only ever pushes into a trait object instead of
//! owning a concrete container.

/// Receives one overlapping pair at a time, in original-input indices.
///
/// `a` and `b` are indices into the caller's own input slice(s) — for
/// [`crate::complete_box_pruning`] both into the single input slice, for
/// [`crate::bipartite_box_pruning`] `a` indexes the first set and `b` the
/// second. No ordering guarantee is made across calls to `push`, and no
/// back-pressure is applied: the kernel never blocks on a full sink.
pub trait PairSink {
    fn push(&mut self, a: u32, b: u32);
}

impl PairSink for Vec<(u32, u32)> {
    #[inline]
    fn push(&mut self, a: u32, b: u32) {
        Vec::push(self, (a, b));
    }
}

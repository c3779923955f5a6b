//! Error type for the pruning entry points.

use thiserror::Error;

/// Errors reported by [`crate::complete_box_pruning`] and
/// [`crate::bipartite_box_pruning`].
///
/// There is no partial-success state: either the sink receives the complete
/// pair set for the call, or an `Err` is returned and no pairs are emitted.
///
/// `InvalidGeometry` (NaN coordinates, `min > max`) is deliberately not a
/// variant here. The core does not detect it — behavior on such input is
/// undefined per the contract documented on the entry points — so modeling
/// it as a catchable error would overstate what the crate guarantees.
#[derive(Error, Debug)]
pub enum PruningError {
    /// `N = 0` (bipartite only — complete pruning treats `N = 0` and `N = 1`
    /// as a trivial success with no pairs) or either input slice is absent.
    #[error("empty or missing input: {0}")]
    EmptyOrMissingInput(&'static str),

    /// One of the four intermediate buffers (`x`, `yz` for each side, or the
    /// sort's ranking buffer) could not be allocated. Unreachable in
    /// practice on stable Rust, where global allocation failure aborts the
    /// process rather than returning an error — kept as a variant because
    /// the failure *kind* is part of the documented contract.
    #[error("failed to allocate {what} ({size} bytes)")]
    AllocationFailure { what: &'static str, size: usize },
}

pub type Result<T> = std::result::Result<T, PruningError>;

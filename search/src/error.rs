//! Typed search errors.
//!
//! `WidthMismatch` is the only pre-flight failure. The other variants mean
//! the engine broke one of its own invariants; the move graph is finite and
//! connected, so a well-formed search always reaches the goal.

use codelock_kernel::carrier::code::Code;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Start and goal do not have the same number of digits.
    #[error("start has {start} digits but goal has {goal}")]
    WidthMismatch { start: usize, goal: usize },
    /// The open set emptied before the goal was expanded.
    #[error("open set exhausted after {expansions} expansions without reaching {goal} from {start}")]
    NoPathFound {
        start: Code,
        goal: Code,
        expansions: u64,
    },
    /// A finalized code has no recorded predecessor, or the chain loops.
    #[error("predecessor chain broken at {at}")]
    BrokenPredecessorChain { at: Code },
}

impl SearchError {
    /// True for failures that indicate a defect in the engine rather than
    /// bad input.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        !matches!(self, Self::WidthMismatch { .. })
    }
}

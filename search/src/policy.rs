//! Search policy types.

/// Per-call search configuration.
///
/// The search itself has no budgets: the state space is finite and the
/// loop always terminates. The policy only controls what diagnostics are
/// retained in the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Keep the ordered list of expanded codes in
    /// [`crate::search::SearchResult::expanded`].
    pub record_expansions: bool,
}

impl SearchPolicy {
    /// Policy that keeps the expansion log.
    #[must_use]
    pub fn recording() -> Self {
        Self {
            record_expansions: true,
        }
    }
}
